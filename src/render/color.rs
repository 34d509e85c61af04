//! Color expression normalization.
use std::borrow::Cow;

/// Convert a color expression into the encoder's representation.
///
/// `#`-prefixed values lose the `#` and are upper-cased; anything else
/// (theme color names, bare hex) passes through unchanged. Nothing is
/// validated here.
///
/// ```rust
/// use deckrender::render::normalize_color;
///
/// assert_eq!(normalize_color("#1a2b3c"), "1A2B3C");
/// assert_eq!(normalize_color("accent1"), "accent1");
/// ```
pub fn normalize_color(color: &str) -> Cow<'_, str> {
    match color.strip_prefix('#') {
        Some(rest) => Cow::Owned(rest.to_uppercase()),
        None => Cow::Borrowed(color),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hash_prefixed() {
        assert_eq!(normalize_color("#ff0000"), "FF0000");
        assert_eq!(normalize_color("#"), "");
        assert_eq!(normalize_color("##abc"), "#ABC");
    }

    #[test]
    fn test_passthrough_borrows() {
        assert!(matches!(normalize_color("tx1"), Cow::Borrowed("tx1")));
        assert!(matches!(normalize_color("ff0000"), Cow::Borrowed("ff0000")));
        assert_eq!(normalize_color(""), "");
    }
}
