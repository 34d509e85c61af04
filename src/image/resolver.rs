//! Turn image locators into embeddable data URIs.
use super::error::{FetchError, Result};
use super::fetch::Fetch;
use crate::common::DataUri;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::Semaphore;
use tracing::{debug, warn};

/// Resolves image locators through a [`Fetch`] implementation.
///
/// `data:` locators are decoded in place and never reach the fetcher.
pub struct ImageResolver {
    fetcher: Arc<dyn Fetch>,
    limiter: Option<Semaphore>,
    timeout: Option<Duration>,
}

impl ImageResolver {
    pub fn new(fetcher: Arc<dyn Fetch>) -> Self {
        Self {
            fetcher,
            limiter: None,
            timeout: None,
        }
    }

    /// Allow at most `permits` fetches in flight at once.
    pub fn with_max_concurrent(mut self, permits: Option<usize>) -> Self {
        self.limiter = permits.map(|n| Semaphore::new(n.max(1)));
        self
    }

    /// Fail a fetch with [`FetchError::Timeout`] once `timeout` elapses.
    ///
    /// Timeouts use the tokio timer, so rendering must then run inside a
    /// tokio runtime.
    pub fn with_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.timeout = timeout;
        self
    }

    /// Fetch `url` and encode the result as a data URI.
    pub async fn resolve(&self, url: &str) -> Result<DataUri> {
        if DataUri::is_data_uri(url) {
            return Ok(url.parse::<DataUri>()?);
        }

        let _permit = match &self.limiter {
            Some(limiter) => Some(
                limiter
                    .acquire()
                    .await
                    .map_err(|e| FetchError::Network(e.to_string()))?,
            ),
            None => None,
        };

        let fetch = self.fetcher.fetch(url);
        let result = match self.timeout {
            Some(limit) => tokio::time::timeout(limit, fetch)
                .await
                .unwrap_or(Err(FetchError::Timeout(limit))),
            None => fetch.await,
        };

        match result {
            Ok(resource) => {
                debug!(
                    url,
                    content_type = %resource.content_type,
                    size = resource.bytes.len(),
                    "resolved image"
                );
                Ok(resource.into_data_uri())
            }
            Err(err) => {
                warn!(url, error = %err, "image fetch failed");
                Err(err)
            }
        }
    }
}
