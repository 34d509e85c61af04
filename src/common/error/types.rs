//! Top-level error type returned by a render call.
use crate::encoder::EncodeError;
use crate::image::FetchError;
use thiserror::Error;

/// Main error type for render operations.
///
/// A failed render never produces a partial document: the first error raised
/// by any slide or visual node aborts the whole render.
#[derive(Error, Debug)]
pub enum RenderError {
    /// An image resource could not be fetched or read
    #[error("failed to fetch image resource {url}: {source}")]
    ResourceFetch {
        url: String,
        #[source]
        source: FetchError,
    },

    /// A visual node of an unknown kind was found while unknown nodes are rejected
    #[error("unrecognized visual node at slide {slide}, node {index}")]
    UnrecognizedNode { slide: usize, index: usize },

    /// The document encoder rejected a primitive or failed to serialize
    #[error("encoder error: {0}")]
    Encoder(#[from] EncodeError),

    /// The image fetcher could not be constructed
    #[error("failed to set up image fetcher: {0}")]
    FetcherSetup(#[source] FetchError),

    /// The presentation tree could not be deserialized
    #[error("invalid presentation tree: {0}")]
    InvalidTree(String),
}

impl RenderError {
    /// Wrap a fetch failure together with the locator that caused it.
    pub fn resource_fetch(url: impl Into<String>, source: FetchError) -> Self {
        Self::ResourceFetch {
            url: url.into(),
            source,
        }
    }

    /// Check whether this error came from image resolution.
    #[inline]
    pub fn is_fetch_error(&self) -> bool {
        matches!(self, Self::ResourceFetch { .. })
    }
}

/// Result type for render operations.
pub type Result<T> = std::result::Result<T, RenderError>;
