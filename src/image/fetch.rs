//! The network capability used to retrieve image bytes.
use super::error::Result;
use crate::common::DataUri;
use async_trait::async_trait;
use bytes::Bytes;
use std::sync::Arc;

/// Bytes retrieved for a locator, with the MIME type the transport reported.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchedResource {
    pub content_type: String,
    pub bytes: Bytes,
}

impl FetchedResource {
    pub fn new(content_type: impl Into<String>, bytes: impl Into<Bytes>) -> Self {
        Self {
            content_type: content_type.into(),
            bytes: bytes.into(),
        }
    }

    /// Convert into a self-describing data URI.
    pub fn into_data_uri(self) -> DataUri {
        DataUri::new(self.content_type, self.bytes.to_vec())
    }
}

/// Retrieve a resource by URL.
///
/// Implementations decide where the content type comes from: a response
/// header, sniffing the payload, or anything else. The renderer only relies
/// on the returned [`FetchedResource`].
#[async_trait]
pub trait Fetch: Send + Sync {
    async fn fetch(&self, url: &str) -> Result<FetchedResource>;
}

#[async_trait]
impl<F: Fetch + ?Sized> Fetch for Arc<F> {
    async fn fetch(&self, url: &str) -> Result<FetchedResource> {
        (**self).fetch(url).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_into_data_uri() {
        let resource = FetchedResource::new("image/png", vec![1u8, 2, 3]);
        let uri = resource.into_data_uri();
        assert_eq!(uri.content_type(), "image/png");
        assert_eq!(uri.to_string(), "data:image/png;base64,AQID");
    }
}
