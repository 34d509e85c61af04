//! Image resolution: turning locators into embeddable data URIs.
//!
//! The renderer never talks to the network directly. It goes through the
//! [`Fetch`] capability, with two HTTP adapters available behind the `http`
//! feature:
//!
//! - [`HeaderFetcher`] reads the MIME type from the `Content-Type` header.
//! - [`BlobFetcher`] sniffs the MIME type from the payload.
//!
//! [`DedupFetcher`] can wrap either one so repeated URLs are fetched once,
//! and [`ImageResolver`] adds `data:` passthrough, a concurrency limit and a
//! timeout on top.

pub mod dedup;
pub mod error;
pub mod fetch;
#[cfg(feature = "http")]
pub mod http;
pub mod resolver;

pub use dedup::DedupFetcher;
pub use error::FetchError;
pub use fetch::{Fetch, FetchedResource};
#[cfg(feature = "http")]
pub use http::{BlobFetcher, HeaderFetcher, HttpFetcherConfig};
pub use resolver::ImageResolver;
