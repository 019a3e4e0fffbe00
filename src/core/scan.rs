//! Line classification for the header scanners
//!
//! Pure per-line predicates and extractors. All dialect patterns live
//! here; the parsers in [`crate::core::parse`] only decide what to do
//! with a classified line, never how to recognize one.

use regex::Regex;
use std::sync::LazyLock;

// Colon-style `Key: value`, up to three leading spaces
static COLON_PAIR_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[ ]{0,3}(?P<key>[A-Za-z0-9_-]+):\s*(?P<value>.*)").unwrap()
});

// Colon-style continuation: four or more leading spaces
static COLON_MORE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[ ]{4,}(?P<value>.*)").unwrap());

// YAML-style fence line above or below a colon-style header block
static FENCE_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^-{3}(\s.*)?").unwrap());

// Field-list `:key: value`, up to three leading spaces
static FIELD_PAIR_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[ ]{0,3}:(?P<key>[A-Za-z0-9_-]+):\s*(?P<value>.*)").unwrap()
});

// Field-list continuation: four or more leading spaces, optional list dash
static FIELD_MORE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[ ]{4,}-?\s*(?P<value>.*)").unwrap());

// Section underline marking the line above as a title
static UNDERLINE_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[=~_*+#-]+").unwrap());

/// A continuation line in a field-list header
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct FieldContinuation {
    /// Trimmed continuation value, leading dash already consumed
    pub value: String,
    /// True when the line is a `- item` style list entry
    pub list_item: bool,
}

/// Extract `(key, value)` from a colon-style header line
///
/// The key is folded to lowercase, the value trimmed.
pub(crate) fn colon_pair(line: &str) -> Option<(String, String)> {
    COLON_PAIR_RE
        .captures(line)
        .map(|caps| (caps["key"].to_lowercase(), caps["value"].trim().to_string()))
}

/// Extract the trimmed value from a colon-style continuation line
pub(crate) fn colon_continuation(line: &str) -> Option<String> {
    COLON_MORE_RE
        .captures(line)
        .map(|caps| caps["value"].trim().to_string())
}

/// True for a `---` fence line (trailing text after whitespace allowed)
pub(crate) fn is_fence(line: &str) -> bool {
    FENCE_RE.is_match(line)
}

/// Extract `(key, value)` from a field-list header line
pub(crate) fn field_pair(line: &str) -> Option<(String, String)> {
    FIELD_PAIR_RE
        .captures(line)
        .map(|caps| (caps["key"].to_lowercase(), caps["value"].trim().to_string()))
}

/// Extract a field-list continuation line
pub(crate) fn field_continuation(line: &str) -> Option<FieldContinuation> {
    FIELD_MORE_RE.captures(line).map(|caps| FieldContinuation {
        value: caps["value"].trim().to_string(),
        list_item: line.trim().starts_with('-'),
    })
}

/// True for a title underline (any run of section punctuation)
pub(crate) fn is_underline(line: &str) -> bool {
    UNDERLINE_RE.is_match(line)
}

/// True when the line holds nothing but whitespace
pub(crate) fn is_blank(line: &str) -> bool {
    line.trim().is_empty()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_colon_pair_extraction() {
        assert_eq!(
            colon_pair("Title: Sample title\n"),
            Some(("title".to_string(), "Sample title".to_string()))
        );
        assert_eq!(
            colon_pair("   Tags: one, two"),
            Some(("tags".to_string(), "one, two".to_string()))
        );
        assert_eq!(
            colon_pair("Tags:\n"),
            Some(("tags".to_string(), String::new()))
        );
        assert_eq!(colon_pair("    Deep: indented"), None);
        assert_eq!(colon_pair("plain text line"), None);
    }

    #[test]
    fn test_colon_pair_key_charset() {
        assert!(colon_pair("some_key-2: value").is_some());
        assert_eq!(colon_pair("bad key: value"), None);
        assert_eq!(colon_pair(": no key"), None);
    }

    #[test]
    fn test_colon_continuation() {
        assert_eq!(
            colon_continuation("    Second part\n"),
            Some("Second part".to_string())
        );
        assert_eq!(colon_continuation("   only three"), None);
        assert_eq!(colon_continuation("        \n"), Some(String::new()));
    }

    #[test]
    fn test_fence_detection() {
        assert!(is_fence("---\n"));
        assert!(is_fence("--- trailing words\n"));
        assert!(is_fence("----"));
        assert!(!is_fence("--\n"));
        assert!(!is_fence("...\n"));
        assert!(!is_fence(" ---\n"));
    }

    #[test]
    fn test_field_pair_extraction() {
        assert_eq!(
            field_pair(":slug: sample-title\n"),
            Some(("slug".to_string(), "sample-title".to_string()))
        );
        assert_eq!(
            field_pair(":authors: - Author, First\n"),
            Some(("authors".to_string(), "- Author, First".to_string()))
        );
        assert_eq!(field_pair("slug: sample-title\n"), None);
    }

    #[test]
    fn test_field_continuation() {
        assert_eq!(
            field_continuation("    - Author, Second\n"),
            Some(FieldContinuation {
                value: "Author, Second".to_string(),
                list_item: true,
            })
        );
        assert_eq!(
            field_continuation("    wrapped prose\n"),
            Some(FieldContinuation {
                value: "wrapped prose".to_string(),
                list_item: false,
            })
        );
        assert_eq!(field_continuation("no indent"), None);
    }

    #[test]
    fn test_underline_detection() {
        assert!(is_underline("#####\n"));
        assert!(is_underline("=====\n"));
        assert!(is_underline("-----\n"));
        assert!(is_underline("~~~\n"));
        // Prefix match: a leading marker is enough
        assert!(is_underline("* list item\n"));
        assert!(!is_underline("Title\n"));
        assert!(!is_underline("  ===\n"));
    }

    #[test]
    fn test_blank_detection() {
        assert!(is_blank("\n"));
        assert!(is_blank("   \n"));
        assert!(is_blank(""));
        assert!(!is_blank(" x \n"));
    }
}
