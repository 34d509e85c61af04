//! Common types and utilities shared across the encoder and the render pipeline.

// Submodule declarations
pub mod error;
pub mod media;
pub mod unit;
pub mod xml;

// Re-exports for convenience
pub use error::{RenderError, Result};
pub use media::{DataUri, DataUriError, ImageFormat};
