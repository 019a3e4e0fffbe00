//! Reading and writing post files
//!
//! [`PostFile`] is the file-backed counterpart of
//! [`Document`](crate::core::Document): it selects a dialect for a path,
//! reads and parses the file if it exists, and writes header blocks back.

use std::fs;
use std::path::{Path, PathBuf};

use crate::core::{Dialect, Document, HeaderMap, PostMetadata};
use crate::error::{PostMatterError, Result};

/// A post file on disk, parsed on open.
///
/// Opening never fails for a missing file; the handle then holds an empty
/// document and a write creates the file. A path that exists but is not a
/// regular file is treated the same way.
///
/// Writes render from the handle's current header map. To rewrite a
/// post, assign new headers with [`set_headers`](PostFile::set_headers)
/// and then call [`prepend_headers`](PostFile::prepend_headers) or
/// [`overwrite_headers`](PostFile::overwrite_headers).
#[derive(Debug, Clone)]
pub struct PostFile {
    path: PathBuf,
    dialect: Dialect,
    exists: bool,
    document: Document,
}

impl PostFile {
    /// Open a post file, selecting the dialect by extension or override.
    ///
    /// `explicit_dialect` takes a canonical dialect name and wins over the
    /// extension; see [`Dialect::select`].
    pub fn open<P: AsRef<Path>>(path: P, explicit_dialect: Option<&str>) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        let dialect = Dialect::select(&path, explicit_dialect)?;

        let mut post = Self {
            path,
            dialect,
            exists: false,
            document: Document::empty(dialect),
        };
        post.read()?;
        Ok(post)
    }

    /// Read and parse the backing file, replacing the in-memory document.
    ///
    /// A missing file leaves an empty document, same as on open.
    pub fn read(&mut self) -> Result<()> {
        self.exists = self.path.is_file();
        self.document = if self.exists {
            let content = read_file(&self.path)?;
            Document::parse(self.dialect, &content)
        } else {
            Document::empty(self.dialect)
        };
        Ok(())
    }

    /// The path this handle reads from and writes to.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// The dialect selected for this file.
    pub fn dialect(&self) -> Dialect {
        self.dialect
    }

    /// Whether a regular file existed at the path when it was last read.
    pub fn exists(&self) -> bool {
        self.exists
    }

    /// The parsed document.
    pub fn document(&self) -> &Document {
        &self.document
    }

    /// Mutable access to the parsed document.
    pub fn document_mut(&mut self) -> &mut Document {
        &mut self.document
    }

    /// The current headers.
    pub fn headers(&self) -> &HeaderMap {
        self.document.headers()
    }

    /// Replace the header map ahead of a write.
    pub fn set_headers(&mut self, headers: HeaderMap) {
        self.document.set_headers(headers);
    }

    /// Whether the current header map holds any entries.
    pub fn has_metadata(&self) -> bool {
        self.document.has_metadata()
    }

    /// Render the current headers in this file's dialect.
    pub fn formatted_headers(&self) -> String {
        self.document.formatted_headers()
    }

    /// Write the current headers on top of the file's untouched content.
    pub fn prepend_headers(&self) -> Result<()> {
        log::debug!("prepending headers to {}", self.path.display());
        self.write_content(&self.document.prepended())
    }

    /// Write the current headers on top of the body, dropping any headers
    /// the file already carried.
    pub fn overwrite_headers(&self) -> Result<()> {
        log::debug!("overwriting headers of {}", self.path.display());
        self.write_content(&self.document.overwritten())
    }

    /// Save metadata for a new post.
    ///
    /// Renders the metadata in this file's dialect and prepends it. Fails
    /// with [`PostMatterError::MetadataExists`] if the file already has
    /// headers, leaving the file untouched.
    pub fn apply_metadata(&mut self, metadata: &PostMetadata) -> Result<()> {
        if self.document.has_metadata() {
            return Err(PostMatterError::metadata_exists(&self.path));
        }
        self.set_headers(metadata.to_header_map());
        self.prepend_headers()
    }

    fn write_content(&self, content: &str) -> Result<()> {
        fs::write(&self.path, content).map_err(|e| match e.kind() {
            std::io::ErrorKind::PermissionDenied => PostMatterError::permission_denied(&self.path),
            _ => PostMatterError::Io(e),
        })
    }
}

fn read_file(path: &Path) -> Result<String> {
    fs::read_to_string(path).map_err(|e| match e.kind() {
        std::io::ErrorKind::NotFound => PostMatterError::file_not_found(path),
        std::io::ErrorKind::PermissionDenied => PostMatterError::permission_denied(path),
        _ => PostMatterError::Io(e),
    })
}

/// Convenience functions for common operations
pub mod convenience {
    use super::*;

    /// Open a post file, selecting the dialect by extension.
    pub fn read_post<P: AsRef<Path>>(path: P) -> Result<PostFile> {
        PostFile::open(path, None)
    }

    /// Parse in-memory content with the dialect selected for `path`.
    pub fn parse_post<P: AsRef<Path>>(path: P, content: &str) -> Result<Document> {
        let dialect = Dialect::select(path, None)?;
        Ok(Document::parse(dialect, content))
    }

    /// Check whether a path's extension belongs to a supported dialect.
    pub fn is_supported<P: AsRef<Path>>(path: P) -> bool {
        Dialect::from_path(path).is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn create_post_file(suffix: &str, content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::with_suffix(suffix).unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file.flush().unwrap();
        file
    }

    #[test]
    fn test_open_markdown_post() {
        let file = create_post_file(".md", "Title: Sample\nTags: pelican\n\nBody.\n");
        let post = PostFile::open(file.path(), None).unwrap();

        assert!(post.exists());
        assert_eq!(post.dialect(), Dialect::Markdown);
        assert!(post.has_metadata());
        assert_eq!(post.headers().get("title"), Some("Sample"));
        assert_eq!(post.document().body_content(), "Body.\n");
    }

    #[test]
    fn test_open_rst_post() {
        let file = create_post_file(".rst", "Sample\n######\n\n:slug: sample\n\nBody.\n");
        let post = PostFile::open(file.path(), None).unwrap();

        assert_eq!(post.dialect(), Dialect::Restructuredtext);
        assert_eq!(post.headers().get("title"), Some("Sample"));
        assert_eq!(post.headers().get("slug"), Some("sample"));
    }

    #[test]
    fn test_open_missing_file_gives_empty_document() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("not-yet.md");
        let post = PostFile::open(&path, None).unwrap();

        assert!(!post.exists());
        assert!(!post.has_metadata());
        assert_eq!(post.document().raw_content(), "");
    }

    #[test]
    fn test_open_directory_gives_empty_document() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("folder.md");
        fs::create_dir(&path).unwrap();

        let post = PostFile::open(&path, None).unwrap();
        assert!(!post.exists());
        assert!(!post.has_metadata());
    }

    #[test]
    fn test_open_unsupported_extension() {
        let err = PostFile::open("notes.txt", None).unwrap_err();
        assert!(err.is_unsupported());
    }

    #[test]
    fn test_explicit_dialect_overrides_extension() {
        let file = create_post_file(".txt", "Title: Forced\n\nBody.\n");
        let post = PostFile::open(file.path(), Some("markdown")).unwrap();

        assert_eq!(post.dialect(), Dialect::Markdown);
        assert_eq!(post.headers().get("title"), Some("Forced"));
    }

    #[test]
    fn test_prepend_headers_keeps_raw_content() {
        let file = create_post_file(".md", "Just a body line.\n");
        let mut post = PostFile::open(file.path(), None).unwrap();

        post.set_headers([("title", "Added"), ("slug", "added")].into_iter().collect());
        post.prepend_headers().unwrap();

        let written = fs::read_to_string(file.path()).unwrap();
        assert_eq!(written, "Title: Added\nSlug: added\n\nJust a body line.\n");
    }

    #[test]
    fn test_overwrite_headers_drops_old_block() {
        let file = create_post_file(".md", "Title: Old\nTags: stale\n\nThe body.\n");
        let mut post = PostFile::open(file.path(), None).unwrap();

        post.set_headers([("title", "New")].into_iter().collect());
        post.overwrite_headers().unwrap();

        let written = fs::read_to_string(file.path()).unwrap();
        assert_eq!(written, "Title: New\n\nThe body.\n");
    }

    #[test]
    fn test_read_picks_up_rewritten_file() {
        let file = create_post_file(".md", "Title: Old\n\nThe body.\n");
        let mut post = PostFile::open(file.path(), None).unwrap();

        post.set_headers([("title", "New"), ("tags", "fresh")].into_iter().collect());
        post.overwrite_headers().unwrap();
        post.read().unwrap();

        assert_eq!(post.headers().get("title"), Some("New"));
        assert_eq!(post.headers().get("tags"), Some("fresh"));
        assert_eq!(post.document().body_content(), "The body.\n");
    }

    #[test]
    fn test_apply_metadata_creates_new_post() {
        let dir = tempfile::tempdir().unwrap();
        let meta = PostMetadata::new("Fresh Post").with_date("2024-01-15 10:20:30");
        let path = dir.path().join(meta.filename(Dialect::Markdown));

        let mut post = PostFile::open(&path, None).unwrap();
        post.apply_metadata(&meta).unwrap();

        let written = fs::read_to_string(&path).unwrap();
        assert_eq!(
            written,
            "Title: Fresh Post\nSlug: fresh-post\nDate: 2024-01-15 10:20:30\n\n"
        );
    }

    #[test]
    fn test_apply_metadata_rejects_existing_headers() {
        let file = create_post_file(".md", "Title: Already Here\n\nBody.\n");
        let mut post = PostFile::open(file.path(), None).unwrap();

        let meta = PostMetadata::new("Another");
        let err = post.apply_metadata(&meta).unwrap_err();
        assert!(matches!(err, PostMatterError::MetadataExists { .. }));

        // The file is left as it was
        let content = fs::read_to_string(file.path()).unwrap();
        assert_eq!(content, "Title: Already Here\n\nBody.\n");
    }

    #[test]
    fn test_convenience_functions() {
        let file = create_post_file(".md", "Title: Sample\n\nBody.\n");

        let post = convenience::read_post(file.path()).unwrap();
        assert_eq!(post.headers().get("title"), Some("Sample"));

        let doc = convenience::parse_post("anything.rst", "Sample\n######\n").unwrap();
        assert_eq!(doc.get("title"), Some("Sample"));

        assert!(convenience::is_supported("post.mkd"));
        assert!(!convenience::is_supported("post.txt"));
    }
}
