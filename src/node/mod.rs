//! Presentation tree consumed by the renderer.
//!
//! A [`PresentationNode`] holds slides, and each [`SlideNode`] holds visual
//! nodes: text, images and preset shapes. Trees are plain data; they can be
//! built in code with the `with_*` helpers or deserialized with serde.

pub mod style;
pub mod types;

pub use style::{Align, Geometry, ShapeStyle, TextStyle, VerticalAlign};
pub use types::{
    Children, ImageNode, Layout, PresentationNode, ShapeNode, SlideNode, TextNode, VisualNode,
};
