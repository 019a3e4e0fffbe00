//! postmatter: A library for reading, generating and rewriting Pelican post metadata
//!
//! Pelican posts carry their metadata as in-file headers whose syntax depends
//! on the markup language: Markdown posts open with `Key: value` lines,
//! reStructuredText posts open with a title, an underline and `:key: value`
//! fields. This library parses both dialects, renders canonical header blocks,
//! rewrites posts in place, and collects the categories, tags and authors
//! already used across a content tree.
//!
//! # Features
//!
//! - **Two header dialects** selected by file extension or forced by name
//! - **Total parsing**: malformed headers degrade into body text, never errors
//! - **Prepend and overwrite writes** that leave the post body untouched
//! - **Structured metadata** for new posts, with slug and file name derivation
//! - **Known-value aggregation** over existing content for consistent naming
//! - **Clean separation** between library and CLI concerns
//!
//! # Quick Start
//!
//! ## Reading a post
//!
//! ```rust,no_run
//! use postmatter::{PostFile, Result};
//!
//! fn main() -> Result<()> {
//!     let post = PostFile::open("content/first-post.md", None)?;
//!     if post.has_metadata() {
//!         println!("{}", post.formatted_headers());
//!     }
//!     Ok(())
//! }
//! ```
//!
//! ## Parsing in memory
//!
//! ```rust
//! use postmatter::{Dialect, Document};
//!
//! let doc = Document::parse(Dialect::Markdown, "Title: Hello\nTags: pelican\n\nBody text.\n");
//! assert_eq!(doc.get("title"), Some("Hello"));
//! assert_eq!(doc.body_content(), "Body text.\n");
//! ```
//!
//! ## Rewriting headers
//!
//! ```rust,no_run
//! use postmatter::{PostFile, Result};
//!
//! fn main() -> Result<()> {
//!     let mut post = PostFile::open("content/first-post.md", None)?;
//!     let mut headers = post.headers().clone();
//!     headers.insert("category", "Updates");
//!     post.set_headers(headers);
//!     post.overwrite_headers()?;
//!     Ok(())
//! }
//! ```
//!
//! ## Creating a new post
//!
//! ```rust,no_run
//! use postmatter::{Dialect, PostFile, PostMetadata, Result};
//!
//! fn main() -> Result<()> {
//!     let meta = PostMetadata::new("Hello World")
//!         .with_date("2024-01-15 10:20:30")
//!         .with_tags(["pelican", "blog"]);
//!
//!     let mut post = PostFile::open(meta.filename(Dialect::Markdown), None)?;
//!     post.apply_metadata(&meta)?;
//!     Ok(())
//! }
//! ```
//!
//! ## Collecting known values
//!
//! ```rust,no_run
//! use postmatter::{KnownValues, Result};
//!
//! fn main() -> Result<()> {
//!     let mut known = KnownValues::new();
//!     let merged = known.scan_directory("content")?;
//!     println!("{} posts, {} tags known", merged, known.tags.len());
//!     Ok(())
//! }
//! ```
//!
//! # Architecture
//!
//! The library is organized into several modules:
//!
//! - [`core`]: Dialects, parsing, formatting and the in-memory document model
//! - [`io`]: File-backed post handles and directory aggregation
//! - [`error`]: Error handling with typed, matchable error variants
//!
//! The design follows these principles:
//!
//! - **Totality**: parsing never fails; doubtful lines belong to the body
//! - **Fidelity**: writes preserve the body byte for byte
//! - **Separation of concerns**: parsing, rendering and I/O do not overlap

// Public API exports
pub use crate::error::{PostMatterError, Result};

// Core types
pub use crate::core::{Dialect, Document, HeaderMap, Parsed, PostMetadata};

// IO types
pub use crate::io::{KnownValues, PostFile};

// Internal modules
pub mod core;
pub mod error;
pub mod io;
pub mod utils;

// CLI components are available only in the binary, not as part of the library API

/// Convenience functions for common operations
pub mod convenience {
    //! Convenience functions that provide simple APIs for common use cases
    //!
    //! These functions use sensible defaults and are perfect for simple
    //! scripts or when you don't need fine-grained control.

    pub use crate::io::post::convenience::*;

    use crate::{HeaderMap, Result};

    /// Read just the headers of a post file.
    pub fn read_headers<P: AsRef<std::path::Path>>(path: P) -> Result<HeaderMap> {
        Ok(read_post(path)?.headers().clone())
    }

    /// Read just the body of a post file.
    pub fn read_body<P: AsRef<std::path::Path>>(path: P) -> Result<String> {
        Ok(read_post(path)?.document().body_content().to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use pretty_assertions::assert_eq;
    use std::fs;

    #[test]
    fn test_end_to_end_workflow() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("sample-post.md");
        fs::write(
            &path,
            "Title: Sample Post\nTags: pelican, blog\n\nFirst paragraph.\n",
        )
        .unwrap();

        let mut post = PostFile::open(&path, None).unwrap();
        assert!(post.has_metadata());
        assert_eq!(post.headers().get("title"), Some("Sample Post"));

        let mut headers = post.headers().clone();
        headers.insert("category", "Updates");
        post.set_headers(headers);
        post.overwrite_headers().unwrap();

        let rewritten = PostFile::open(&path, None).unwrap();
        assert_eq!(rewritten.headers().get("category"), Some("Updates"));
        assert_eq!(rewritten.headers().get("tags"), Some("pelican, blog"));
        assert_eq!(rewritten.document().body_content(), "First paragraph.\n");
    }

    #[test]
    fn test_new_post_workflow() {
        let dir = tempfile::tempdir().unwrap();
        let meta = PostMetadata::new("Hello World")
            .with_date("2024-01-15 10:20:30")
            .with_tags(["pelican"]);
        let path = dir.path().join(meta.filename(Dialect::Restructuredtext));

        let mut post = PostFile::open(&path, None).unwrap();
        post.apply_metadata(&meta).unwrap();

        let written = PostFile::open(&path, None).unwrap();
        assert_eq!(written.headers().get("title"), Some("Hello World"));
        assert_eq!(written.headers().get("slug"), Some("hello-world"));
        assert_eq!(written.headers().get("tags"), Some("pelican"));
    }

    #[test]
    fn test_convenience_functions() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("quick.md");
        fs::write(&path, "Title: Quick\n\nBody.\n").unwrap();

        let headers = convenience::read_headers(&path).unwrap();
        assert_eq!(headers.get("title"), Some("Quick"));

        let body = convenience::read_body(&path).unwrap();
        assert_eq!(body, "Body.\n");
    }

    #[test]
    fn test_error_handling() {
        let err = PostFile::open("notes.txt", None).unwrap_err();
        assert!(matches!(err, PostMatterError::UnsupportedFormat { .. }));

        let err = Dialect::select("post.md", Some("asciidoc")).unwrap_err();
        assert!(err.is_unsupported());
    }
}
