//! Core parsing and formatting engine
//!
//! This module contains the dialect-aware metadata engine:
//! - Dialect: the closed set of supported header syntaxes
//! - HeaderMap: case-normalized key-value metadata mapping
//! - Document: parsed representation of a post (headers, raw content, body)
//! - PostMetadata: structured builder for new post headers

pub mod dialect;
pub mod document;
pub mod format;
pub mod header;
pub mod meta;
pub mod parse;
pub mod scan;

pub use dialect::Dialect;
pub use document::Document;
pub use header::HeaderMap;
pub use meta::PostMetadata;
pub use parse::Parsed;
