//! In-memory PPTX document encoder.
//!
//! [`Document`] collects slides and their primitives (text boxes, pictures and
//! preset shapes) and serializes them into a PresentationML package. The
//! encoder knows nothing about presentation trees or image fetching; the
//! render pipeline drives it through the operations exposed here.
//!
//! # Example
//!
//! ```rust
//! use deckrender::encoder::{Document, Frame, LayoutPreset, TextOptions};
//!
//! let mut doc = Document::new();
//! doc.set_layout(LayoutPreset::Layout4x3);
//! let handle = doc.add_slide();
//! doc.slide_mut(handle)?.add_text(
//!     "Hello",
//!     TextOptions {
//!         frame: Frame::new(1.0, 1.0, 4.0, 1.0),
//!         ..Default::default()
//!     },
//! );
//! let bytes = doc.write()?;
//! assert_eq!(&bytes[..2], b"PK");
//! # Ok::<(), deckrender::encoder::EncodeError>(())
//! ```

pub mod constants;
pub mod document;
pub mod error;
pub mod format;
pub mod layout;
pub(crate) mod package;
pub(crate) mod relmap;
pub mod shape;
pub mod shape_kind;
pub mod slide;
pub(crate) mod template;

// Re-export main types
pub use document::{Document, SlideHandle};
pub use error::{EncodeError, Result};
pub use format::{Frame, ImageOptions, ShapeOptions, TextAlign, TextOptions, VerticalAlign};
pub use layout::LayoutPreset;
pub use shape::{Shape, ShapeBody};
pub use shape_kind::ShapeKind;
pub use slide::Slide;
