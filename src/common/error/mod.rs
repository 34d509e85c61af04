//! Unified error types for the render pipeline.
//!
//! The encoder and the image fetchers each carry their own error type; this
//! module wraps them into the single error a render call fails with.

// Submodule declarations
pub mod types;

// Re-exports
pub use types::{RenderError, Result};
