//! Canonical header formatting
//!
//! The inverse of [`crate::core::parse`]: renders a header mapping back
//! into a dialect-specific header block. Output key order is fixed no
//! matter what order the map was filled in; absent keys are omitted.
//! The rendered block carries no trailing separator, callers add the
//! blank line before body content.

use crate::core::header::HeaderMap;
use crate::utils::capitalize_key;

/// Fixed output order shared by both dialects
pub(crate) const KEY_ORDER: [&str; 8] = [
    "title", "slug", "date", "modified", "category", "tags", "authors", "summary",
];

/// Render a colon-style header block, one `Key: value` line per entry
pub fn colon_style(headers: &HeaderMap) -> String {
    let mut lines = Vec::new();
    for key in KEY_ORDER {
        if let Some(value) = headers.get(key) {
            lines.push(format!("{}: {}", capitalize_key(key), value));
        }
    }
    lines.join("\n")
}

/// Render a field-list header block
///
/// The title becomes a heading with a `#` underline of the same
/// character length, followed by a blank line; remaining entries render
/// as `:key: value` lines.
pub fn field_list(headers: &HeaderMap) -> String {
    let mut lines = Vec::new();
    if let Some(title) = headers.get("title") {
        lines.push(title.to_string());
        lines.push("#".repeat(title.chars().count()));
        lines.push(String::new());
    }
    for key in &KEY_ORDER[1..] {
        if let Some(value) = headers.get(key) {
            lines.push(format!(":{}: {}", key, value));
        }
    }
    lines.join("\n")
}
