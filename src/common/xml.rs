//! XML escaping helpers shared by the writer and the inspector.
use aho_corasick::{AhoCorasick, MatchKind};
use once_cell::sync::Lazy;

static XML_ESCAPER: Lazy<AhoCorasick> = Lazy::new(|| {
    AhoCorasick::builder()
        .build(["&", "<", ">", "\"", "'"])
        .expect("Failed to build XML escaper")
});

// LeftmostLongest so that "&amp;lt;" decodes to "&lt;" and not "<"
static XML_UNESCAPER: Lazy<AhoCorasick> = Lazy::new(|| {
    AhoCorasick::builder()
        .match_kind(MatchKind::LeftmostLongest)
        .build(["&amp;", "&lt;", "&gt;", "&quot;", "&apos;"])
        .expect("Failed to build XML unescaper")
});

/// Escape XML special characters for use in text or attribute values.
///
/// # Examples
///
/// ```
/// use pitchdeck::common::xml::escape_xml;
/// assert_eq!(escape_xml("Create → Generate & Validate"), "Create → Generate &amp; Validate");
/// assert_eq!(escape_xml("\"Identity Scoring\""), "&quot;Identity Scoring&quot;");
/// ```
#[inline]
pub fn escape_xml(s: &str) -> String {
    XML_ESCAPER.replace_all(s, &["&amp;", "&lt;", "&gt;", "&quot;", "&apos;"])
}

/// Unescape the five predefined XML entities.
///
/// Unknown or malformed entities are left unchanged.
///
/// ```
/// use pitchdeck::common::xml::unescape_xml;
/// assert_eq!(unescape_xml("&lt;70% Fix"), "<70% Fix");
/// assert_eq!(unescape_xml("&amp;lt;"), "&lt;");
/// assert_eq!(unescape_xml("&nbsp;"), "&nbsp;");
/// ```
#[inline]
pub fn unescape_xml(s: &str) -> String {
    XML_UNESCAPER.replace_all(s, &["&", "<", ">", "\"", "'"])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_round_trip_of_slide_copy() {
        let copy = "Scoring: 85%+ Excellent, 70-84% Good, <70% Fix";
        let escaped = escape_xml(copy);
        assert!(!escaped.contains('<'));
        assert_eq!(unescape_xml(&escaped), copy);
    }

    #[test]
    fn test_apostrophes() {
        assert_eq!(escape_xml("Let's talk!"), "Let&apos;s talk!");
    }
}
