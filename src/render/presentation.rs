//! Render entry point: layout, ordered slide creation and serialization.
use super::options::RenderOptions;
use super::slide::render_slide;
use super::visual::RenderContext;
use crate::common::Result;
use crate::encoder::{Document, LayoutPreset, SlideHandle};
use crate::image::{DedupFetcher, Fetch, ImageResolver};
use crate::node::{Layout, PresentationNode};
use futures::future::try_join_all;
use std::sync::Arc;
use tracing::debug;

impl From<Layout> for LayoutPreset {
    fn from(layout: Layout) -> Self {
        match layout {
            Layout::Layout16x9 => Self::Layout16x9,
            Layout::Layout16x10 => Self::Layout16x10,
            Layout::Layout4x3 => Self::Layout4x3,
            Layout::Wide => Self::LayoutWide,
        }
    }
}

/// Serialized PPTX bytes produced by a successful render.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedDocument(Vec<u8>);

impl RenderedDocument {
    /// The `.pptx` file contents.
    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    /// Take the buffer without copying.
    #[inline]
    pub fn into_bytes(self) -> Vec<u8> {
        self.0
    }

    /// Size of the archive in bytes.
    #[inline]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Never true for a document produced by [`Renderer::render`].
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl AsRef<[u8]> for RenderedDocument {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl From<RenderedDocument> for Vec<u8> {
    fn from(doc: RenderedDocument) -> Self {
        doc.0
    }
}

/// Renders presentation trees into PPTX documents.
///
/// A renderer is cheap to clone and can be reused for any number of renders;
/// nothing is shared between calls except the fetcher itself.
#[derive(Clone)]
pub struct Renderer {
    fetcher: Arc<dyn Fetch>,
    options: RenderOptions,
}

impl Renderer {
    /// Create a renderer that loads images through `fetcher`.
    pub fn new(fetcher: impl Fetch + 'static) -> Self {
        Self::from_shared(Arc::new(fetcher))
    }

    /// Create a renderer around an already shared fetcher.
    pub fn from_shared(fetcher: Arc<dyn Fetch>) -> Self {
        Self {
            fetcher,
            options: RenderOptions::default(),
        }
    }

    /// Create a renderer backed by a [`HeaderFetcher`](crate::image::HeaderFetcher)
    /// with default settings.
    #[cfg(feature = "http")]
    pub fn http() -> Result<Self> {
        let fetcher =
            crate::image::HeaderFetcher::new().map_err(crate::RenderError::FetcherSetup)?;
        Ok(Self::new(fetcher))
    }

    /// Replace the render options.
    pub fn with_options(mut self, options: RenderOptions) -> Self {
        self.options = options;
        self
    }

    /// Options applied to every render.
    pub fn options(&self) -> &RenderOptions {
        &self.options
    }

    fn resolver(&self) -> ImageResolver {
        let fetcher: Arc<dyn Fetch> = if self.options.dedupe_images {
            Arc::new(DedupFetcher::new(Arc::clone(&self.fetcher)))
        } else {
            Arc::clone(&self.fetcher)
        };
        ImageResolver::new(fetcher)
            .with_max_concurrent(self.options.max_concurrent_fetches)
            .with_timeout(self.options.fetch_timeout)
    }

    /// Build the encoder document for `tree` without serializing it.
    ///
    /// Slides are added to the document in input order before any of them
    /// is rendered; slide renders then run concurrently and their buffered
    /// primitives are applied once every slide has succeeded.
    pub async fn render_document(&self, tree: &PresentationNode) -> Result<Document> {
        let mut doc = Document::new();
        if let Some(layout) = tree.layout {
            doc.set_layout(layout.into());
        }

        let slides = tree.slides();
        let handles: Vec<SlideHandle> = slides.iter().map(|_| doc.add_slide()).collect();

        let resolver = self.resolver();
        let ctx = RenderContext {
            resolver: &resolver,
            unrecognized: self.options.unrecognized_nodes,
        };
        let rendered = try_join_all(
            slides
                .iter()
                .enumerate()
                .map(|(index, slide)| render_slide(&ctx, index, slide)),
        )
        .await?;

        for (handle, slide) in handles.into_iter().zip(rendered) {
            slide.apply(doc.slide_mut(handle)?)?;
        }
        Ok(doc)
    }

    /// Render `tree` into a PPTX buffer.
    ///
    /// Any failure (an image that cannot be fetched, an unknown shape kind,
    /// a rejected unrecognized node) fails the whole render and no document
    /// is produced.
    #[tracing::instrument(skip_all, fields(slides = tree.slides().len(), layout = ?tree.layout))]
    pub async fn render(&self, tree: &PresentationNode) -> Result<RenderedDocument> {
        let doc = self.render_document(tree).await?;
        let bytes = doc.write()?;
        debug!(size = bytes.len(), "presentation rendered");
        Ok(RenderedDocument(bytes))
    }
}

/// Render `tree` with default options, fetching images over HTTP.
///
/// ```rust,no_run
/// use deckrender::node::{Geometry, PresentationNode, SlideNode, TextNode, TextStyle};
///
/// # async fn run() -> deckrender::Result<()> {
/// let tree = PresentationNode::new().with_children(SlideNode::new().with_children(
///     TextNode::new(TextStyle::new(Geometry::new(1.0, 1.0, 4.0, 1.0))).with_text("Hello"),
/// ));
/// let pptx = deckrender::render(&tree).await?;
/// assert_eq!(&pptx.as_bytes()[..2], b"PK");
/// # Ok(())
/// # }
/// ```
#[cfg(feature = "http")]
pub async fn render(tree: &PresentationNode) -> Result<RenderedDocument> {
    Renderer::http()?.render(tree).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layout_presets() {
        assert_eq!(LayoutPreset::from(Layout::Layout16x9), LayoutPreset::Layout16x9);
        assert_eq!(LayoutPreset::from(Layout::Layout16x10), LayoutPreset::Layout16x10);
        assert_eq!(LayoutPreset::from(Layout::Layout4x3), LayoutPreset::Layout4x3);
        assert_eq!(LayoutPreset::from(Layout::Wide), LayoutPreset::LayoutWide);
    }

    #[test]
    fn test_rendered_document_accessors() {
        let doc = RenderedDocument(b"PK\x03\x04".to_vec());
        assert_eq!(doc.len(), 4);
        assert!(!doc.is_empty());
        assert_eq!(doc.as_ref(), doc.as_bytes());
        assert_eq!(Vec::from(doc), b"PK\x03\x04".to_vec());
    }
}
