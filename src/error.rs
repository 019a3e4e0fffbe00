//! Error types for the postmatter library
//!
//! This module provides error handling for all library operations,
//! including dialect resolution, file I/O, and output serialization.

use std::path::PathBuf;
use thiserror::Error;

/// The main error type for all library operations
#[derive(Error, Debug)]
pub enum PostMatterError {
    /// I/O related errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// YAML serialization errors
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// JSON serialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// No dialect matches the requested format name or file extension
    #[error("file format not supported: {requested}")]
    UnsupportedFormat { requested: String },

    /// File not found or not a regular file
    #[error("file not found: {path}")]
    FileNotFound { path: PathBuf },

    /// Permission errors
    #[error("permission denied: {path}")]
    PermissionDenied { path: PathBuf },

    /// Refusing to save over a file that already carries headers
    #[error("file already has metadata headers: {path}")]
    MetadataExists { path: PathBuf },
}

/// Result type alias for convenience
pub type Result<T> = std::result::Result<T, PostMatterError>;

impl PostMatterError {
    /// Create a new unsupported format error
    pub fn unsupported_format(requested: impl Into<String>) -> Self {
        Self::UnsupportedFormat {
            requested: requested.into(),
        }
    }

    /// Create a new file not found error
    pub fn file_not_found(path: impl Into<PathBuf>) -> Self {
        Self::FileNotFound { path: path.into() }
    }

    /// Create a new permission denied error
    pub fn permission_denied(path: impl Into<PathBuf>) -> Self {
        Self::PermissionDenied { path: path.into() }
    }

    /// Create a new metadata exists error
    pub fn metadata_exists(path: impl Into<PathBuf>) -> Self {
        Self::MetadataExists { path: path.into() }
    }

    /// Check whether this error means "no dialect for this file"
    ///
    /// Batch operations skip such files instead of aborting.
    pub fn is_unsupported(&self) -> bool {
        matches!(self, Self::UnsupportedFormat { .. })
    }
}
