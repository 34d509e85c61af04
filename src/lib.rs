//! Deckrender - render declarative presentation trees into PPTX documents
//!
//! A presentation is described as an immutable tree: a [`PresentationNode`]
//! holding slides, each holding text, image and shape nodes. The renderer
//! walks that tree, resolves remote images concurrently, and hands the
//! translated primitives to a PresentationML encoder.
//!
//! # Features
//!
//! - **Ordered output**: slide order and stacking order always follow the
//!   input, however long individual image fetches take
//! - **Concurrent image resolution**: every image node fetches concurrently,
//!   with optional per-URL deduplication, a concurrency limit and a timeout
//! - **Pluggable fetching**: images are loaded through the [`Fetch`](image::Fetch)
//!   trait; header-based and payload-sniffing HTTP adapters ship behind the
//!   `http` feature
//! - **Serde trees**: the node tree derives serde and can be read from YAML
//!
//! # Example - Rendering a tree built in code
//!
//! ```no_run
//! use deckrender::node::{
//!     Geometry, ImageNode, Layout, PresentationNode, SlideNode, TextNode, TextStyle,
//! };
//!
//! # async fn run() -> deckrender::Result<()> {
//! let tree = PresentationNode::new()
//!     .with_layout(Layout::Wide)
//!     .with_children(SlideNode::new().with_children(vec![
//!         TextNode::new(TextStyle::new(Geometry::new(1.0, 1.0, 4.0, 1.0)).with_color("#112233"))
//!             .with_text("Hello")
//!             .into(),
//!         ImageNode::new("https://example.com/logo.png", Geometry::new(5.0, 1.0, 2.0, 2.0)).into(),
//!     ]));
//!
//! let pptx = deckrender::render(&tree).await?;
//! println!("{} bytes", pptx.len());
//! # Ok(())
//! # }
//! ```
//!
//! # Example - Custom fetcher and options
//!
//! ```no_run
//! use deckrender::image::{BlobFetcher, HttpFetcherConfig};
//! use deckrender::render::{RenderOptions, Renderer, UnrecognizedNodePolicy};
//! use deckrender::PresentationNode;
//! use std::time::Duration;
//!
//! # async fn run() -> Result<(), Box<dyn std::error::Error>> {
//! let fetcher = BlobFetcher::with_config(&HttpFetcherConfig::new().with_user_agent("decks/1.0"))?;
//! let renderer = Renderer::new(fetcher).with_options(
//!     RenderOptions::new()
//!         .with_unrecognized_nodes(UnrecognizedNodePolicy::Fail)
//!         .with_dedupe_images(true)
//!         .with_max_concurrent_fetches(4)
//!         .with_fetch_timeout(Duration::from_secs(10)),
//! );
//!
//! let tree = PresentationNode::from_yaml_str(&std::fs::read_to_string("deck.yaml")?)?;
//! let pptx = renderer.render(&tree).await?;
//! std::fs::write("deck.pptx", pptx.as_bytes())?;
//! # Ok(())
//! # }
//! ```

/// Common types shared by the encoder and the pipeline
///
/// Errors, image formats, data URIs, unit conversion and XML helpers.
pub mod common;

/// PPTX document encoder
///
/// An in-memory slide deck that serializes to a PresentationML package.
pub mod encoder;

/// Image resolution
pub mod image;

/// Presentation tree types
pub mod node;

/// The rendering pipeline
pub mod render;

// Re-export commonly used types for convenience
pub use common::{DataUri, RenderError, Result};
pub use node::{PresentationNode, SlideNode, VisualNode};
#[cfg(feature = "http")]
pub use render::render;
pub use render::{RenderOptions, RenderedDocument, Renderer, UnrecognizedNodePolicy};
