//! Small string helpers shared across the crate

/// Capitalize a lowercase header key for display (`title` -> `Title`)
pub fn capitalize_key(key: &str) -> String {
    let mut chars = key.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}

/// Build a URL-safe slug from a post title
///
/// Keeps ASCII alphanumerics lowercased and collapses every other run
/// of characters into a single hyphen: `"Hello, World!"` becomes
/// `"hello-world"`. Leading and trailing separators are dropped.
pub fn slugify(title: &str) -> String {
    let mut slug = String::with_capacity(title.len());
    let mut pending_separator = false;

    for ch in title.chars() {
        if ch.is_ascii_alphanumeric() {
            if pending_separator && !slug.is_empty() {
                slug.push('-');
            }
            pending_separator = false;
            slug.push(ch.to_ascii_lowercase());
        } else {
            pending_separator = true;
        }
    }

    slug
}
