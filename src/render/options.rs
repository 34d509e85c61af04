//! Render configuration.
use std::time::Duration;

/// What to do with a visual node of an unknown kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UnrecognizedNodePolicy {
    /// Emit nothing for the node and log a warning
    #[default]
    Skip,
    /// Abort the render with [`RenderError::UnrecognizedNode`](crate::RenderError::UnrecognizedNode)
    Fail,
}

/// Options controlling a render.
///
/// The defaults match a plain render: unknown nodes are skipped, every image
/// node fetches independently, and fetches are neither limited nor timed out.
#[derive(Debug, Clone, Default)]
pub struct RenderOptions {
    /// Handling of visual nodes of an unknown kind
    pub unrecognized_nodes: UnrecognizedNodePolicy,
    /// Fetch each distinct image URL once per render
    pub dedupe_images: bool,
    /// Upper bound on image fetches in flight; `None` is unbounded
    pub max_concurrent_fetches: Option<usize>,
    /// Per-fetch time limit; `None` waits indefinitely
    pub fetch_timeout: Option<Duration>,
}

impl RenderOptions {
    /// Create a new `RenderOptions` with default values.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use deckrender::render::{RenderOptions, UnrecognizedNodePolicy};
    ///
    /// let options = RenderOptions::new()
    ///     .with_unrecognized_nodes(UnrecognizedNodePolicy::Fail)
    ///     .with_dedupe_images(true);
    /// assert!(options.dedupe_images);
    /// ```
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set how unknown visual nodes are handled.
    #[inline]
    pub fn with_unrecognized_nodes(mut self, policy: UnrecognizedNodePolicy) -> Self {
        self.unrecognized_nodes = policy;
        self
    }

    /// Set whether repeated image URLs share a single fetch.
    ///
    /// The cache lives for one render call. A failed URL stays failed for
    /// the rest of that render.
    #[inline]
    pub fn with_dedupe_images(mut self, dedupe: bool) -> Self {
        self.dedupe_images = dedupe;
        self
    }

    /// Limit the number of image fetches in flight.
    #[inline]
    pub fn with_max_concurrent_fetches(mut self, limit: usize) -> Self {
        self.max_concurrent_fetches = Some(limit);
        self
    }

    /// Fail any single image fetch that takes longer than `timeout`.
    #[inline]
    pub fn with_fetch_timeout(mut self, timeout: Duration) -> Self {
        self.fetch_timeout = Some(timeout);
        self
    }
}
