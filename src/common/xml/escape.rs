use aho_corasick::AhoCorasick;
use once_cell::sync::Lazy;

// Static initialization: automaton is built only once, thread-safe
static XML_ESCAPER: Lazy<AhoCorasick> = Lazy::new(|| {
    AhoCorasick::builder()
        .build(["&", "<", ">", "\"", "'"])
        .expect("Failed to build XML escaper")
});

/// Escape XML special characters.
///
/// Characters XML 1.0 cannot carry at all (most C0 controls, U+FFFE and
/// U+FFFF) are dropped.
///
/// # Examples
///
/// ```
/// use deckrender::common::xml::escape_xml;
/// assert_eq!(escape_xml("a & b"), "a &amp; b");
/// assert_eq!(escape_xml("<tag>\"hello\"</tag>"), "&lt;tag&gt;&quot;hello&quot;&lt;/tag&gt;");
/// assert_eq!(escape_xml("tab\there\u{B}"), "tab\there");
/// ```
#[inline]
pub fn escape_xml(s: &str) -> String {
    let escaped = XML_ESCAPER.replace_all(s, &["&amp;", "&lt;", "&gt;", "&quot;", "&apos;"]);
    if escaped.contains(is_restricted_char) {
        escaped.chars().filter(|&c| !is_restricted_char(c)).collect()
    } else {
        escaped
    }
}

/// Outside the XML 1.0 `Char` production.
#[inline]
fn is_restricted_char(c: char) -> bool {
    matches!(
        c,
        '\u{0}'..='\u{8}' | '\u{B}' | '\u{C}' | '\u{E}'..='\u{1F}' | '\u{FFFE}' | '\u{FFFF}'
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_leaves_plain_text() {
        assert_eq!(escape_xml("Hello"), "Hello");
        assert_eq!(escape_xml(""), "");
    }

    #[test]
    fn test_escape_apostrophe() {
        assert_eq!(escape_xml("it's"), "it&apos;s");
    }

    #[test]
    fn test_control_characters_are_dropped() {
        assert_eq!(escape_xml("a\u{1}b\u{B}c\u{1F}"), "abc");
        assert_eq!(escape_xml("x\u{FFFF}<\u{0}"), "x&lt;");
        // Whitespace controls and ordinary non-ASCII text survive.
        assert_eq!(escape_xml("\t\r\n\u{7F}\u{E9}"), "\t\r\n\u{7F}\u{E9}");
    }
}
