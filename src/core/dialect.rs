//! Dialect selection and dispatch
//!
//! A [`Dialect`] ties together everything that differs between the two
//! supported post flavors: the file extensions it claims, the parser that
//! extracts its headers, and the formatter that renders them back out.

use std::fmt;
use std::path::Path;

use crate::core::format;
use crate::core::header::HeaderMap;
use crate::core::parse::{self, Parsed};
use crate::error::{PostMatterError, Result};

/// A supported post header dialect.
///
/// Selection normally goes by file extension; callers may force a dialect
/// by its canonical name instead (see [`Dialect::select`]).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Dialect {
    /// Colon-style `Key: value` headers, as found in Markdown posts.
    Markdown,
    /// Field-list `:key: value` headers under a title, as found in
    /// reStructuredText posts.
    Restructuredtext,
}

impl Dialect {
    /// Every supported dialect.
    pub const ALL: [Dialect; 2] = [Dialect::Markdown, Dialect::Restructuredtext];

    /// The canonical name accepted as an explicit dialect override.
    pub fn name(self) -> &'static str {
        match self {
            Dialect::Markdown => "markdown",
            Dialect::Restructuredtext => "restructuredtext",
        }
    }

    /// File extensions (without the dot) recognized for this dialect.
    pub fn extensions(self) -> &'static [&'static str] {
        match self {
            Dialect::Markdown => &["md", "markdown", "mdown", "mkd"],
            Dialect::Restructuredtext => &["rst"],
        }
    }

    /// Extension used when deriving a file name for a new post.
    pub fn default_extension(self) -> &'static str {
        self.extensions()[0]
    }

    /// Resolve a dialect from its canonical name.
    pub fn from_name(name: &str) -> Option<Dialect> {
        Dialect::ALL.into_iter().find(|d| d.name() == name)
    }

    /// Resolve a dialect from a path's file extension.
    ///
    /// Extensions are compared case-sensitively, so `post.MD` is not
    /// recognized.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Option<Dialect> {
        let ext = path.as_ref().extension()?;
        Dialect::ALL
            .into_iter()
            .find(|d| d.extensions().iter().any(|known| ext == *known))
    }

    /// Select the dialect for `path`, honoring an explicit override.
    ///
    /// A non-empty `explicit` name wins over the extension and must be one
    /// of the canonical names; anything else is rejected. Without an
    /// override the extension decides, and an unknown extension is an
    /// [`PostMatterError::UnsupportedFormat`] error.
    ///
    /// # Examples
    ///
    /// ```
    /// use postmatter::Dialect;
    ///
    /// let dialect = Dialect::select("posts/intro.rst", None)?;
    /// assert_eq!(dialect, Dialect::Restructuredtext);
    ///
    /// let forced = Dialect::select("notes.txt", Some("markdown"))?;
    /// assert_eq!(forced, Dialect::Markdown);
    /// # Ok::<(), postmatter::PostMatterError>(())
    /// ```
    pub fn select<P: AsRef<Path>>(path: P, explicit: Option<&str>) -> Result<Dialect> {
        // An empty override means "not specified"
        match explicit.filter(|name| !name.is_empty()) {
            Some(name) => {
                Dialect::from_name(name).ok_or_else(|| PostMatterError::unsupported_format(name))
            }
            None => Dialect::from_path(&path).ok_or_else(|| {
                PostMatterError::unsupported_format(path.as_ref().display().to_string())
            }),
        }
    }

    /// Run this dialect's header parser over in-memory content.
    pub fn parse_content(self, content: &str) -> Parsed {
        match self {
            Dialect::Markdown => parse::colon_style(content),
            Dialect::Restructuredtext => parse::field_list(content),
        }
    }

    /// Render a header block for this dialect.
    pub fn format_headers(self, headers: &HeaderMap) -> String {
        match self {
            Dialect::Markdown => format::colon_style(headers),
            Dialect::Restructuredtext => format::field_list(headers),
        }
    }
}

impl fmt::Display for Dialect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
