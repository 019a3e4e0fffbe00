//! Command-line argument definitions and parsing
//!
//! This module provides the CLI argument surface using clap, with proper
//! separation between CLI concerns and library operations.

use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Main CLI application
#[derive(Parser)]
#[command(
    name = "postmatter",
    version,
    about = "Read, generate and rewrite Pelican post metadata headers",
    long_about = "postmatter reads the metadata headers of Pelican posts written in \
                  Markdown or reStructuredText, renders canonical header blocks, and \
                  rewrites posts in place. It can also collect every category, tag and \
                  author used across existing content, to keep new posts consistent."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Force a header dialect instead of going by file extension
    #[arg(short, long, global = true, value_enum, value_name = "DIALECT")]
    pub format: Option<FormatArg>,

    /// Increase log verbosity; may be repeated
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

/// Available commands
#[derive(Subcommand)]
pub enum Commands {
    /// Show the metadata headers of a post
    Show(ShowArgs),
    /// Render a header block without touching any file
    Render(RenderArgs),
    /// Write a header block above a file's current content
    Prepend(WriteArgs),
    /// Replace a file's header block, keeping only its body
    Overwrite(WriteArgs),
    /// Create a post from structured metadata fields
    New(NewArgs),
    /// Collect known categories, tags and authors from existing posts
    Scan(ScanArgs),
}

/// Header dialects accepted on the command line
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormatArg {
    /// Colon-style `Key: value` headers
    Markdown,
    /// Field-list `:key: value` headers under a title
    Restructuredtext,
}

impl FormatArg {
    /// The canonical dialect name the library expects.
    pub fn name(self) -> &'static str {
        match self {
            FormatArg::Markdown => "markdown",
            FormatArg::Restructuredtext => "restructuredtext",
        }
    }
}

/// Output encodings for collected data
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// YAML mapping
    Yaml,
    /// JSON object
    Json,
    /// Plain text
    Text,
}

/// Arguments for the show command
#[derive(Args, Debug)]
pub struct ShowArgs {
    /// Post file to read
    pub file: PathBuf,

    /// Print the post body instead of the headers
    #[arg(long)]
    pub body: bool,

    /// Output encoding for the headers
    #[arg(short, long, value_enum, default_value = "yaml")]
    pub output: OutputFormat,
}

/// Arguments for the render command
#[derive(Args, Debug)]
pub struct RenderArgs {
    /// Header field as `key=value`; may be repeated
    #[arg(short = 'm', long = "meta", value_name = "KEY=VALUE", required = true)]
    pub meta: Vec<String>,
}

/// Arguments shared by the prepend and overwrite commands
#[derive(Args, Debug)]
pub struct WriteArgs {
    /// Post file to rewrite
    pub file: PathBuf,

    /// Header field as `key=value`; may be repeated
    #[arg(short = 'm', long = "meta", value_name = "KEY=VALUE", required = true)]
    pub meta: Vec<String>,
}

/// Arguments for the new command
#[derive(Args, Debug)]
pub struct NewArgs {
    /// Post title
    #[arg(short, long)]
    pub title: String,

    /// URL-safe post identifier; derived from the title when omitted
    #[arg(short, long)]
    pub slug: Option<String>,

    /// Publication date; defaults to the current local time
    #[arg(short, long, value_name = "DATE")]
    pub date: Option<String>,

    /// Last modification date
    #[arg(long, value_name = "DATE")]
    pub modified: Option<String>,

    /// Post category
    #[arg(short, long)]
    pub category: Option<String>,

    /// Post tag; may be repeated
    #[arg(long = "tag", value_name = "TAG")]
    pub tags: Vec<String>,

    /// Post author; may be repeated
    #[arg(long = "author", value_name = "AUTHOR")]
    pub authors: Vec<String>,

    /// One-line post summary
    #[arg(long)]
    pub summary: Option<String>,

    /// Where to write the post; defaults to the slug plus the dialect's
    /// extension, in the current directory
    #[arg(short, long)]
    pub path: Option<PathBuf>,

    /// Put the new headers above existing ones when the target already
    /// has metadata
    #[arg(long, conflicts_with = "force_overwrite")]
    pub force_prepend: bool,

    /// Replace existing metadata when the target already has some
    #[arg(long)]
    pub force_overwrite: bool,
}

/// Arguments for the scan command
#[derive(Args, Debug)]
pub struct ScanArgs {
    /// Directories to read metadata from
    #[arg(required = true, value_name = "DIR")]
    pub directories: Vec<PathBuf>,

    /// Output encoding for the collected values
    #[arg(short, long, value_enum, default_value = "yaml")]
    pub output: OutputFormat,
}
