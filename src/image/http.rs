//! HTTP fetch adapters built on `reqwest`.
//!
//! Both adapters issue a plain `GET` and treat any non-2xx status as a
//! failure. They differ only in where the MIME type of the payload comes
//! from:
//!
//! - [`HeaderFetcher`] trusts the `Content-Type` response header, like a
//!   server-side client reading raw headers.
//! - [`BlobFetcher`] ignores headers and derives the type from the payload,
//!   like a browser reading a blob into a data URL.
use super::error::{FetchError, Result};
use super::fetch::{Fetch, FetchedResource};
use crate::common::media::OCTET_STREAM;
use crate::common::ImageFormat;
use async_trait::async_trait;
use bytes::Bytes;
use reqwest::header::CONTENT_TYPE;
use reqwest::{Client, Response};
use std::time::Duration;
use tracing::trace;

/// Settings shared by the HTTP adapters.
#[derive(Debug, Clone)]
pub struct HttpFetcherConfig {
    /// Value of the `User-Agent` request header
    pub user_agent: String,
    /// Overall request timeout; `None` waits indefinitely
    pub timeout: Option<Duration>,
}

impl Default for HttpFetcherConfig {
    fn default() -> Self {
        Self {
            user_agent: concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")).to_string(),
            timeout: Some(Duration::from_secs(30)),
        }
    }
}

impl HttpFetcherConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    pub fn with_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.timeout = timeout;
        self
    }

    fn build_client(&self) -> Result<Client> {
        let mut builder = Client::builder().user_agent(self.user_agent.as_str());
        if let Some(timeout) = self.timeout {
            builder = builder.timeout(timeout);
        }
        builder.build().map_err(|e| FetchError::Network(e.to_string()))
    }
}

/// Send a `GET` and reject non-success statuses.
async fn get(client: &Client, url: &str) -> Result<Response> {
    let resp = client
        .get(url)
        .send()
        .await
        .map_err(|e| FetchError::Network(e.to_string()))?;
    let status = resp.status();
    trace!(url, status = status.as_u16(), "image response");
    if !status.is_success() {
        return Err(FetchError::Status(status.as_u16()));
    }
    Ok(resp)
}

async fn read_body(resp: Response) -> Result<Bytes> {
    resp.bytes()
        .await
        .map_err(|e| FetchError::Body(e.to_string()))
}

/// Fetcher that takes the MIME type from the `Content-Type` header.
///
/// A missing or non-ASCII header falls back to `application/octet-stream`.
#[derive(Debug, Clone)]
pub struct HeaderFetcher {
    client: Client,
}

impl HeaderFetcher {
    /// Create a fetcher with the default [`HttpFetcherConfig`].
    pub fn new() -> Result<Self> {
        Self::with_config(&HttpFetcherConfig::default())
    }

    pub fn with_config(config: &HttpFetcherConfig) -> Result<Self> {
        Ok(Self {
            client: config.build_client()?,
        })
    }

    /// Reuse an existing client.
    pub fn from_client(client: Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl Fetch for HeaderFetcher {
    async fn fetch(&self, url: &str) -> Result<FetchedResource> {
        let resp = get(&self.client, url).await?;
        let content_type = resp
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .map(|value| value.trim().to_string())
            .filter(|value| !value.is_empty())
            .unwrap_or_else(|| OCTET_STREAM.to_string());
        let bytes = read_body(resp).await?;
        Ok(FetchedResource::new(content_type, bytes))
    }
}

/// Fetcher that derives the MIME type from the payload bytes.
///
/// Unknown payloads are labelled `application/octet-stream`.
#[derive(Debug, Clone)]
pub struct BlobFetcher {
    client: Client,
}

impl BlobFetcher {
    /// Create a fetcher with the default [`HttpFetcherConfig`].
    pub fn new() -> Result<Self> {
        Self::with_config(&HttpFetcherConfig::default())
    }

    pub fn with_config(config: &HttpFetcherConfig) -> Result<Self> {
        Ok(Self {
            client: config.build_client()?,
        })
    }

    /// Reuse an existing client.
    pub fn from_client(client: Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl Fetch for BlobFetcher {
    async fn fetch(&self, url: &str) -> Result<FetchedResource> {
        let resp = get(&self.client, url).await?;
        let bytes = read_body(resp).await?;
        let content_type = ImageFormat::detect_from_bytes(&bytes)
            .map_or(OCTET_STREAM, |format| format.mime_type());
        Ok(FetchedResource::new(content_type, bytes))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;

    const PNG_MAGIC: [u8; 8] = [0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A];

    /// Serve a single canned HTTP response on a loopback port.
    async fn serve_once(status: &'static str, content_type: Option<&'static str>, body: Vec<u8>) -> String {
        let declared_len = body.len();
        serve_declaring(status, content_type, body, declared_len).await
    }

    /// Like [`serve_once`], but announce `declared_len` bytes whatever the body holds.
    async fn serve_declaring(
        status: &'static str,
        content_type: Option<&'static str>,
        body: Vec<u8>,
        declared_len: usize,
    ) -> String {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.unwrap();
            let mut request = Vec::new();
            let mut buf = [0u8; 1024];
            while !request.windows(4).any(|w| w == b"\r\n\r\n") {
                let n = socket.read(&mut buf).await.unwrap();
                if n == 0 {
                    break;
                }
                request.extend_from_slice(&buf[..n]);
            }
            let mut head = format!(
                "HTTP/1.1 {status}\r\nContent-Length: {declared_len}\r\nConnection: close\r\n"
            );
            if let Some(ct) = content_type {
                head.push_str(&format!("Content-Type: {ct}\r\n"));
            }
            head.push_str("\r\n");
            socket.write_all(head.as_bytes()).await.unwrap();
            socket.write_all(&body).await.unwrap();
            socket.shutdown().await.unwrap();
        });
        format!("http://{addr}/image")
    }

    #[tokio::test]
    async fn test_header_fetcher_uses_content_type_header() {
        let url = serve_once("200 OK", Some("image/gif"), PNG_MAGIC.to_vec()).await;
        let fetched = HeaderFetcher::new().unwrap().fetch(&url).await.unwrap();
        assert_eq!(fetched.content_type, "image/gif");
        assert_eq!(&fetched.bytes[..], &PNG_MAGIC);
    }

    #[tokio::test]
    async fn test_header_fetcher_without_header() {
        let url = serve_once("200 OK", None, vec![1, 2, 3]).await;
        let fetched = HeaderFetcher::new().unwrap().fetch(&url).await.unwrap();
        assert_eq!(fetched.content_type, OCTET_STREAM);
    }

    #[tokio::test]
    async fn test_blob_fetcher_sniffs_payload() {
        let url = serve_once("200 OK", Some("text/plain"), PNG_MAGIC.to_vec()).await;
        let fetched = BlobFetcher::new().unwrap().fetch(&url).await.unwrap();
        assert_eq!(fetched.content_type, "image/png");

        let url = serve_once("200 OK", Some("image/png"), b"not an image".to_vec()).await;
        let fetched = BlobFetcher::new().unwrap().fetch(&url).await.unwrap();
        assert_eq!(fetched.content_type, OCTET_STREAM);
    }

    #[tokio::test]
    async fn test_non_success_status_fails() {
        let url = serve_once("404 Not Found", Some("text/plain"), b"missing".to_vec()).await;
        let err = HeaderFetcher::new().unwrap().fetch(&url).await.unwrap_err();
        assert_eq!(err, FetchError::Status(404));

        let url = serve_once("500 Internal Server Error", None, Vec::new()).await;
        let err = BlobFetcher::new().unwrap().fetch(&url).await.unwrap_err();
        assert_eq!(err, FetchError::Status(500));
    }

    #[tokio::test]
    async fn test_truncated_body_is_body_error() {
        let url = serve_declaring("200 OK", Some("image/png"), PNG_MAGIC.to_vec(), 4096).await;
        let err = HeaderFetcher::new().unwrap().fetch(&url).await.unwrap_err();
        assert!(matches!(err, FetchError::Body(_)), "{err:?}");

        let url = serve_declaring("200 OK", None, PNG_MAGIC.to_vec(), 4096).await;
        let err = BlobFetcher::new().unwrap().fetch(&url).await.unwrap_err();
        assert!(matches!(err, FetchError::Body(_)), "{err:?}");
    }

    #[tokio::test]
    async fn test_truncated_body_fails_render() {
        use crate::node::{Geometry, ImageNode, PresentationNode, SlideNode};
        use crate::render::Renderer;
        use crate::RenderError;

        let url = serve_declaring("200 OK", Some("image/png"), PNG_MAGIC.to_vec(), 4096).await;
        let tree = PresentationNode::new().with_children(
            SlideNode::new().with_children(ImageNode::new(url.as_str(), Geometry::new(0.0, 0.0, 1.0, 1.0))),
        );
        let err = Renderer::new(HeaderFetcher::new().unwrap())
            .render(&tree)
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            RenderError::ResourceFetch { source: FetchError::Body(_), .. }
        ));
    }

    #[tokio::test]
    async fn test_connection_refused_is_network_error() {
        // Bind and drop to get a port nobody listens on.
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let err = HeaderFetcher::new()
            .unwrap()
            .fetch(&format!("http://{addr}/gone.png"))
            .await
            .unwrap_err();
        assert!(matches!(err, FetchError::Network(_)));
    }
}
