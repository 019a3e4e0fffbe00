//! File system operations for post files
//!
//! This module provides the file-backed side of the crate: [`PostFile`]
//! binds a path to a parsed [`Document`](crate::core::Document) and carries
//! the write operations, while [`KnownValues`] aggregates metadata values
//! across a directory of posts.

pub mod known;
pub mod post;

pub use known::KnownValues;
pub use post::PostFile;
