//! Per-URL request coalescing.
use super::error::Result;
use super::fetch::{Fetch, FetchedResource};
use async_trait::async_trait;
use parking_lot::Mutex;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::OnceCell;
use tracing::trace;

type Slot = Arc<OnceCell<Result<FetchedResource>>>;

/// Wraps a fetcher so that each URL is fetched at most once.
///
/// Concurrent callers asking for the same URL wait on the single in-flight
/// request and share its outcome. Failures are remembered as well, so a URL
/// that failed once keeps failing for the lifetime of the wrapper.
pub struct DedupFetcher<F> {
    inner: F,
    slots: Mutex<HashMap<String, Slot>>,
}

impl<F: Fetch> DedupFetcher<F> {
    pub fn new(inner: F) -> Self {
        Self {
            inner,
            slots: Mutex::new(HashMap::new()),
        }
    }

    /// Number of distinct URLs requested so far.
    pub fn len(&self) -> usize {
        self.slots.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.lock().is_empty()
    }

    fn slot(&self, url: &str) -> Slot {
        let mut slots = self.slots.lock();
        match slots.get(url) {
            Some(slot) => {
                trace!(url, "joining in-flight fetch");
                Arc::clone(slot)
            }
            None => {
                let slot = Slot::default();
                slots.insert(url.to_string(), Arc::clone(&slot));
                slot
            }
        }
    }
}

#[async_trait]
impl<F: Fetch> Fetch for DedupFetcher<F> {
    async fn fetch(&self, url: &str) -> Result<FetchedResource> {
        let slot = self.slot(url);
        slot.get_or_init(|| self.inner.fetch(url)).await.clone()
    }
}
