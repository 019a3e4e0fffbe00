//! Aggregation of metadata values across existing posts
//!
//! [`KnownValues`] collects every category, tag and author used in a
//! content tree, so new posts can reuse the spellings that already exist
//! instead of inventing near-duplicates.

use std::path::Path;

use serde::Serialize;
use walkdir::WalkDir;

use crate::core::HeaderMap;
use crate::error::Result;
use crate::io::post::PostFile;

/// Unique metadata values seen in previously written posts.
///
/// Values keep the order they were first encountered in. No spelling
/// unification is attempted; `John Doe` and `Doe, John` stay separate.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct KnownValues {
    pub categories: Vec<String>,
    pub tags: Vec<String>,
    pub authors: Vec<String>,
}

impl KnownValues {
    /// Create an empty collection.
    pub fn new() -> Self {
        Self::default()
    }

    /// Walk `dir` recursively and merge metadata from every post file.
    ///
    /// Entries are visited in file name order so repeated runs give the
    /// same result. Files whose extension matches no dialect are skipped
    /// with a log line; a path that is not a directory is ignored
    /// entirely. Returns the number of files merged.
    pub fn scan_directory<P: AsRef<Path>>(&mut self, dir: P) -> Result<usize> {
        let dir = dir.as_ref();
        if !dir.is_dir() {
            log::warn!("not a directory, skipping: {}", dir.display());
            return Ok(0);
        }

        let mut merged = 0;
        for entry in WalkDir::new(dir)
            .sort_by_file_name()
            .into_iter()
            .filter_map(|e| e.ok())
        {
            if !entry.file_type().is_file() {
                continue;
            }
            if self.record_file(entry.path())? {
                merged += 1;
            }
        }
        Ok(merged)
    }

    /// Parse one file and merge its metadata values.
    ///
    /// Returns `false` for files in no supported dialect, so directory
    /// scans can step over stray files; real I/O failures propagate.
    pub fn record_file<P: AsRef<Path>>(&mut self, path: P) -> Result<bool> {
        let path = path.as_ref();
        log::debug!("reading metadata from {}", path.display());

        let post = match PostFile::open(path, None) {
            Ok(post) => post,
            Err(err) if err.is_unsupported() => {
                log::debug!("ignoring {}: no supported extension", path.display());
                return Ok(false);
            }
            Err(err) => return Err(err),
        };

        self.record_headers(post.headers());
        Ok(true)
    }

    /// Merge the category, tag and author entries of one header map.
    ///
    /// `author` and `authors` feed the same set. Joined values are split
    /// on `;` when present, on `,` otherwise.
    pub fn record_headers(&mut self, headers: &HeaderMap) {
        for (key, value) in headers.iter() {
            match key {
                "category" => append_values(&mut self.categories, value),
                "tags" => append_values(&mut self.tags, value),
                "author" | "authors" => append_values(&mut self.authors, value),
                _ => {}
            }
        }
    }

    /// True when nothing has been collected yet.
    pub fn is_empty(&self) -> bool {
        self.categories.is_empty() && self.tags.is_empty() && self.authors.is_empty()
    }
}

/// Split a joined header value and append the parts not yet known.
fn append_values(known: &mut Vec<String>, joined: &str) {
    let separator = if joined.contains(';') { ';' } else { ',' };
    for value in joined.split(separator) {
        let value = value.trim();
        if !value.is_empty() && !known.iter().any(|k| k == value) {
            known.push(value.to_string());
        }
    }
}
