//! Core document model for post metadata manipulation
//!
//! This module provides the [`Document`] type that represents a single post:
//! its dialect, the headers extracted from the top of the file, the body that
//! follows them, and the untouched raw content.

use crate::core::dialect::Dialect;
use crate::core::header::HeaderMap;

/// A parsed post: headers plus body, tied to the dialect that produced them.
#[derive(Debug, Clone)]
pub struct Document {
    dialect: Dialect,
    headers: HeaderMap,
    raw_content: String,
    body_content: String,
}

impl Document {
    /// Parse in-memory content with the given dialect's header scanner.
    pub fn parse(dialect: Dialect, content: &str) -> Self {
        let parsed = dialect.parse_content(content);
        Self {
            dialect,
            headers: parsed.headers,
            raw_content: parsed.raw,
            body_content: parsed.body,
        }
    }

    /// Create an empty document, as for a file that does not exist yet.
    pub fn empty(dialect: Dialect) -> Self {
        Self {
            dialect,
            headers: HeaderMap::new(),
            raw_content: String::new(),
            body_content: String::new(),
        }
    }

    /// The dialect this document was parsed with.
    pub fn dialect(&self) -> Dialect {
        self.dialect
    }

    /// The headers extracted from the top of the content.
    pub fn headers(&self) -> &HeaderMap {
        &self.headers
    }

    /// Mutable access to the headers, for callers that amend them.
    pub fn headers_mut(&mut self) -> &mut HeaderMap {
        &mut self.headers
    }

    /// Replace the whole header mapping, as editors do before a write.
    pub fn set_headers(&mut self, headers: HeaderMap) {
        self.headers = headers;
    }

    /// The content exactly as it was parsed, headers included.
    pub fn raw_content(&self) -> &str {
        &self.raw_content
    }

    /// The content with headers (and surrounding blank lines) stripped.
    pub fn body_content(&self) -> &str {
        &self.body_content
    }

    /// Look up a header value by key.
    ///
    /// Keys are normalized the same way the parser normalizes them, so
    /// `doc.get("Title")` and `doc.get("title")` are equivalent.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.headers.get(key)
    }

    /// Check whether any headers were found.
    pub fn has_metadata(&self) -> bool {
        !self.headers.is_empty()
    }

    /// Render this document's headers in its own dialect.
    pub fn formatted_headers(&self) -> String {
        self.dialect.format_headers(&self.headers)
    }

    /// Compose the current headers on top of the untouched raw content.
    ///
    /// Headers the raw content already carried stay in place below the
    /// new block.
    pub fn prepended(&self) -> String {
        format!("{}\n\n{}", self.formatted_headers(), self.raw_content)
    }

    /// Compose the current headers on top of the body alone, replacing
    /// any headers the raw content carried.
    pub fn overwritten(&self) -> String {
        format!("{}\n\n{}", self.formatted_headers(), self.body_content)
    }
}
