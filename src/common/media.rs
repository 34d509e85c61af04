//! Image formats and data URIs shared by the encoder and the image resolver.
use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use std::fmt;
use std::str::FromStr;

/// MIME type used when nothing better is known about a payload.
pub const OCTET_STREAM: &str = "application/octet-stream";

/// Image format types supported by PPTX.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ImageFormat {
    Png,
    Jpeg,
    Gif,
    Bmp,
    Tiff,
    WebP,
}

impl ImageFormat {
    /// Get the MIME type for this image format.
    pub fn mime_type(&self) -> &'static str {
        match self {
            Self::Png => "image/png",
            Self::Jpeg => "image/jpeg",
            Self::Gif => "image/gif",
            Self::Bmp => "image/bmp",
            Self::Tiff => "image/tiff",
            Self::WebP => "image/webp",
        }
    }

    /// Get the file extension for this image format.
    pub fn extension(&self) -> &'static str {
        match self {
            Self::Png => "png",
            Self::Jpeg => "jpeg",
            Self::Gif => "gif",
            Self::Bmp => "bmp",
            Self::Tiff => "tiff",
            Self::WebP => "webp",
        }
    }

    /// Look up a format by MIME type, ignoring parameters such as `charset`.
    pub fn from_mime_type(mime: &str) -> Option<Self> {
        let essence = mime.split(';').next().unwrap_or("").trim();
        match essence.to_ascii_lowercase().as_str() {
            "image/png" => Some(Self::Png),
            "image/jpeg" | "image/jpg" | "image/pjpeg" => Some(Self::Jpeg),
            "image/gif" => Some(Self::Gif),
            "image/bmp" | "image/x-bmp" | "image/x-ms-bmp" => Some(Self::Bmp),
            "image/tiff" => Some(Self::Tiff),
            "image/webp" => Some(Self::WebP),
            _ => None,
        }
    }

    /// Detect image format from bytes (magic number detection).
    pub fn detect_from_bytes(bytes: &[u8]) -> Option<Self> {
        if bytes.len() < 4 {
            return None;
        }

        // PNG: 89 50 4E 47
        if bytes.starts_with(&[0x89, 0x50, 0x4E, 0x47]) {
            return Some(Self::Png);
        }

        // JPEG: FF D8 FF
        if bytes.starts_with(&[0xFF, 0xD8, 0xFF]) {
            return Some(Self::Jpeg);
        }

        // GIF: 47 49 46 38 (GIF8)
        if bytes.starts_with(&[0x47, 0x49, 0x46, 0x38]) {
            return Some(Self::Gif);
        }

        // BMP: 42 4D (BM)
        if bytes.starts_with(&[0x42, 0x4D]) {
            return Some(Self::Bmp);
        }

        // TIFF: 49 49 2A 00 (little-endian) or 4D 4D 00 2A (big-endian)
        if bytes.starts_with(&[0x49, 0x49, 0x2A, 0x00])
            || bytes.starts_with(&[0x4D, 0x4D, 0x00, 0x2A])
        {
            return Some(Self::Tiff);
        }

        // WebP: RIFF container with a WEBP form type
        if bytes.len() >= 12 && bytes.starts_with(b"RIFF") && &bytes[8..12] == b"WEBP" {
            return Some(Self::WebP);
        }

        None
    }
}

/// A self-describing embeddable payload: `data:<content-type>;base64,<payload>`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DataUri {
    content_type: String,
    data: Vec<u8>,
}

/// Reasons a string is not a usable base64 data URI.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DataUriError {
    #[error("missing `data:` scheme")]
    MissingScheme,
    #[error("missing `,` separator")]
    MissingSeparator,
    #[error("only base64 data URIs are supported")]
    NotBase64,
    #[error("invalid base64 payload: {0}")]
    InvalidPayload(String),
}

impl DataUri {
    /// Build a data URI from a declared content type and raw bytes.
    pub fn new(content_type: impl Into<String>, data: Vec<u8>) -> Self {
        Self {
            content_type: content_type.into(),
            data,
        }
    }

    /// The declared MIME type (may be empty if the source declared none).
    #[inline]
    pub fn content_type(&self) -> &str {
        &self.content_type
    }

    /// The decoded payload.
    #[inline]
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    #[inline]
    pub fn into_data(self) -> Vec<u8> {
        self.data
    }

    /// Check whether a locator uses the `data:` scheme.
    #[inline]
    pub fn is_data_uri(s: &str) -> bool {
        s.get(..5)
            .is_some_and(|scheme| scheme.eq_ignore_ascii_case("data:"))
    }
}

impl fmt::Display for DataUri {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "data:{};base64,{}",
            self.content_type,
            STANDARD.encode(&self.data)
        )
    }
}

impl FromStr for DataUri {
    type Err = DataUriError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if !Self::is_data_uri(s) {
            return Err(DataUriError::MissingScheme);
        }
        let rest = &s[5..];
        let (header, payload) = rest.split_once(',').ok_or(DataUriError::MissingSeparator)?;

        let mut params = header.split(';');
        let content_type = params.next().unwrap_or("").trim().to_string();
        if !params.any(|p| p.trim().eq_ignore_ascii_case("base64")) {
            return Err(DataUriError::NotBase64);
        }

        let data = STANDARD
            .decode(payload.trim())
            .map_err(|e| DataUriError::InvalidPayload(e.to_string()))?;

        Ok(Self { content_type, data })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PNG_MAGIC: [u8; 8] = [0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A];

    #[test]
    fn test_detect_formats() {
        assert_eq!(ImageFormat::detect_from_bytes(&PNG_MAGIC), Some(ImageFormat::Png));
        assert_eq!(
            ImageFormat::detect_from_bytes(&[0xFF, 0xD8, 0xFF, 0xE0]),
            Some(ImageFormat::Jpeg)
        );
        assert_eq!(ImageFormat::detect_from_bytes(b"GIF89a"), Some(ImageFormat::Gif));
        assert_eq!(ImageFormat::detect_from_bytes(b"<svg"), None);
        assert_eq!(ImageFormat::detect_from_bytes(b"PK"), None);
        assert_eq!(
            ImageFormat::detect_from_bytes(b"RIFF\x24\0\0\0WEBPVP8 "),
            Some(ImageFormat::WebP)
        );
        assert_eq!(ImageFormat::detect_from_bytes(b"RIFF\x24\0\0\0WAVEfmt "), None);
    }

    #[test]
    fn test_from_mime_type_ignores_parameters() {
        assert_eq!(
            ImageFormat::from_mime_type("image/PNG; charset=binary"),
            Some(ImageFormat::Png)
        );
        assert_eq!(ImageFormat::from_mime_type("image/jpg"), Some(ImageFormat::Jpeg));
        assert_eq!(ImageFormat::from_mime_type("image/webp"), Some(ImageFormat::WebP));
        assert_eq!(ImageFormat::from_mime_type("image/svg+xml"), None);
        assert_eq!(ImageFormat::from_mime_type("text/html"), None);
    }

    #[test]
    fn test_data_uri_display() {
        let uri = DataUri::new("image/png", b"abc".to_vec());
        assert_eq!(uri.to_string(), "data:image/png;base64,YWJj");
    }

    #[test]
    fn test_data_uri_parse() {
        let uri: DataUri = "data:image/gif;base64,YWJj".parse().unwrap();
        assert_eq!(uri.content_type(), "image/gif");
        assert_eq!(uri.data(), b"abc");

        let uri: DataUri = "DATA:;base64,YWJj".parse().unwrap();
        assert_eq!(uri.content_type(), "");
    }

    #[test]
    fn test_data_uri_rejects_malformed() {
        assert_eq!(
            "http://example.com/a.png".parse::<DataUri>(),
            Err(DataUriError::MissingScheme)
        );
        assert_eq!(
            "data:image/png;base64".parse::<DataUri>(),
            Err(DataUriError::MissingSeparator)
        );
        assert_eq!(
            "data:text/plain,hello".parse::<DataUri>(),
            Err(DataUriError::NotBase64)
        );
        assert!(matches!(
            "data:image/png;base64,@@@".parse::<DataUri>(),
            Err(DataUriError::InvalidPayload(_))
        ));
    }
}
