/// Error types for document encoding.
use thiserror::Error;

/// Result type for encoder operations.
pub type Result<T> = std::result::Result<T, EncodeError>;

/// Error types for encoder operations.
#[derive(Error, Debug)]
pub enum EncodeError {
    /// XML generation error
    #[error("XML error: {0}")]
    Xml(String),

    /// Shape kind identifier has no preset geometry
    #[error("Unknown shape kind: {0}")]
    UnknownShapeKind(String),

    /// Image payload is not a usable data URI or not a supported format
    #[error("Invalid image: {0}")]
    InvalidImage(String),

    /// Slide handle does not belong to this document
    #[error("Slide not found: {0}")]
    SlideNotFound(usize),

    /// ZIP archive error
    #[error("ZIP error: {0}")]
    Zip(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<zip::result::ZipError> for EncodeError {
    fn from(err: zip::result::ZipError) -> Self {
        EncodeError::Zip(err.to_string())
    }
}

impl From<std::fmt::Error> for EncodeError {
    fn from(err: std::fmt::Error) -> Self {
        EncodeError::Xml(err.to_string())
    }
}
