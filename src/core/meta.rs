//! Metadata for new posts
//!
//! [`PostMetadata`] collects the well-known Pelican header fields for a post
//! that does not exist yet, derives a slug and file name from the title, and
//! converts into a [`HeaderMap`] ready for rendering.

use crate::core::dialect::Dialect;
use crate::core::header::HeaderMap;
use crate::utils::slugify;

/// The well-known metadata fields of a post, prior to rendering.
///
/// Empty fields are left out of the rendered headers. `tags` and `authors`
/// are kept as lists here and joined into a single header value on
/// conversion.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PostMetadata {
    pub title: String,
    pub slug: String,
    pub date: String,
    pub modified: String,
    pub category: String,
    pub tags: Vec<String>,
    pub authors: Vec<String>,
    pub summary: String,
}

impl PostMetadata {
    /// Create metadata for a new post, deriving the slug from the title.
    pub fn new(title: impl Into<String>) -> Self {
        let title = title.into();
        let slug = slugify(&title);
        Self {
            title,
            slug,
            ..Self::default()
        }
    }

    /// Replace the derived slug.
    pub fn with_slug(mut self, slug: impl Into<String>) -> Self {
        self.slug = slug.into();
        self
    }

    /// Set the publication date.
    pub fn with_date(mut self, date: impl Into<String>) -> Self {
        self.date = date.into();
        self
    }

    /// Set the modification date.
    pub fn with_modified(mut self, modified: impl Into<String>) -> Self {
        self.modified = modified.into();
        self
    }

    /// Set the category.
    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = category.into();
        self
    }

    /// Set the tag list.
    pub fn with_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tags = tags.into_iter().map(Into::into).collect();
        self
    }

    /// Set the author list.
    pub fn with_authors<I, S>(mut self, authors: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.authors = authors.into_iter().map(Into::into).collect();
        self
    }

    /// Set the summary.
    pub fn with_summary(mut self, summary: impl Into<String>) -> Self {
        self.summary = summary.into();
        self
    }

    /// File name this post would be saved under, `{slug}.{ext}`.
    pub fn filename(&self, dialect: Dialect) -> String {
        format!("{}.{}", self.slug, dialect.default_extension())
    }

    /// Convert into headers, dropping empty fields and joining lists.
    ///
    /// List values are sorted case-insensitively and joined with `", "`,
    /// falling back to `"; "` when any value itself contains a comma.
    pub fn to_header_map(&self) -> HeaderMap {
        let mut headers = HeaderMap::new();
        for (key, value) in [
            ("title", &self.title),
            ("slug", &self.slug),
            ("date", &self.date),
            ("modified", &self.modified),
            ("category", &self.category),
        ] {
            if !value.is_empty() {
                headers.insert(key, value.as_str());
            }
        }
        if !self.tags.is_empty() {
            headers.insert("tags", join_values(&self.tags));
        }
        if !self.authors.is_empty() {
            headers.insert("authors", join_values(&self.authors));
        }
        if !self.summary.is_empty() {
            headers.insert("summary", self.summary.as_str());
        }
        headers
    }

    /// Render this metadata as a header block in the given dialect.
    pub fn formatted_headers(&self, dialect: Dialect) -> String {
        dialect.format_headers(&self.to_header_map())
    }
}

/// Join list values into one header value.
fn join_values(values: &[String]) -> String {
    let separator = if values.iter().any(|v| v.contains(',')) {
        "; "
    } else {
        ", "
    };
    let mut sorted: Vec<&str> = values.iter().map(String::as_str).collect();
    sorted.sort_by_key(|v| v.to_lowercase());
    sorted.join(separator)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_new_derives_slug_from_title() {
        let meta = PostMetadata::new("Hello, Postmatter World!");
        assert_eq!(meta.title, "Hello, Postmatter World!");
        assert_eq!(meta.slug, "hello-postmatter-world");
    }

    #[test]
    fn test_with_slug_overrides_derived_slug() {
        let meta = PostMetadata::new("Hello World").with_slug("custom");
        assert_eq!(meta.slug, "custom");
    }

    #[test]
    fn test_filename_uses_dialect_extension() {
        let meta = PostMetadata::new("Hello World");
        assert_eq!(meta.filename(Dialect::Markdown), "hello-world.md");
        assert_eq!(meta.filename(Dialect::Restructuredtext), "hello-world.rst");
    }

    #[test]
    fn test_to_header_map_skips_empty_fields() {
        let meta = PostMetadata::new("Sample").with_date("2024-01-15 10:20:30");
        let headers = meta.to_header_map();

        assert_eq!(headers.get("title"), Some("Sample"));
        assert_eq!(headers.get("slug"), Some("sample"));
        assert_eq!(headers.get("date"), Some("2024-01-15 10:20:30"));
        assert_eq!(headers.get("modified"), None);
        assert_eq!(headers.get("category"), None);
        assert_eq!(headers.get("tags"), None);
        assert_eq!(headers.get("authors"), None);
        assert_eq!(headers.get("summary"), None);
    }

    #[test]
    fn test_tags_joined_sorted_case_insensitively() {
        let meta = PostMetadata::new("Sample").with_tags(["pelican", "Blog", "automation"]);
        let headers = meta.to_header_map();
        assert_eq!(headers.get("tags"), Some("automation, Blog, pelican"));
    }

    #[test]
    fn test_comma_in_value_switches_separator() {
        let meta = PostMetadata::new("Sample").with_authors(["Doe, Jane", "Smith"]);
        let headers = meta.to_header_map();
        assert_eq!(headers.get("authors"), Some("Doe, Jane; Smith"));
    }

    #[test]
    fn test_full_metadata_renders_in_markdown() {
        let meta = PostMetadata::new("Sample post")
            .with_date("2024-01-15 10:20:30")
            .with_category("howto")
            .with_tags(["pelican", "blog"])
            .with_summary("A short sample.");

        assert_eq!(
            meta.formatted_headers(Dialect::Markdown),
            "Title: Sample post\n\
             Slug: sample-post\n\
             Date: 2024-01-15 10:20:30\n\
             Category: howto\n\
             Tags: blog, pelican\n\
             Summary: A short sample."
        );
    }

    #[test]
    fn test_full_metadata_renders_in_restructuredtext() {
        let meta = PostMetadata::new("Sample post")
            .with_date("2024-01-15 10:20:30")
            .with_authors(["Jane Doe"]);

        assert_eq!(
            meta.formatted_headers(Dialect::Restructuredtext),
            "Sample post\n\
             ###########\n\
             \n\
             :slug: sample-post\n\
             :date: 2024-01-15 10:20:30\n\
             :authors: Jane Doe"
        );
    }
}
