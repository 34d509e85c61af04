//! The rendering pipeline.
//!
//! [`Renderer::render`] walks a [`PresentationNode`](crate::node::PresentationNode):
//!
//! 1. The layout preset is applied and one encoder slide is created per
//!    slide node, in input order.
//! 2. Slides render concurrently. Within a slide every visual node renders
//!    concurrently too; image nodes suspend while their locator resolves.
//! 3. Each node becomes a buffered primitive. Primitives are appended to
//!    their slide in input order once everything has resolved, so network
//!    timing never changes slide or stacking order.
//! 4. The document is serialized.
//!
//! The first failure anywhere aborts the render; no partial document is
//! returned.

pub mod color;
pub mod options;
pub mod presentation;
pub(crate) mod slide;
pub(crate) mod visual;

#[cfg(test)]
mod tests;

pub use color::normalize_color;
pub use options::{RenderOptions, UnrecognizedNodePolicy};
#[cfg(feature = "http")]
pub use presentation::render;
pub use presentation::{RenderedDocument, Renderer};
