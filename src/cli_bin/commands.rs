//! CLI command handlers that bridge CLI arguments to library operations
//!
//! This module contains the implementation of all CLI commands, providing
//! a clean separation between CLI argument parsing and core library operations.

use std::path::{Path, PathBuf};

use anyhow::{bail, Result};
use log::{debug, info};

use postmatter::{Dialect, HeaderMap, KnownValues, PostFile, PostMetadata};

use crate::cli_bin::args::*;

/// Execute the show command
pub fn show_command(args: ShowArgs, format: Option<FormatArg>) -> Result<()> {
    debug!("showing {}", args.file.display());

    let post = open_post(&args.file, format)?;
    if !post.exists() {
        bail!("file not found: {}", args.file.display());
    }

    if args.body {
        print!("{}", post.document().body_content());
        return Ok(());
    }

    match args.output {
        OutputFormat::Yaml => print!("{}", serde_yaml::to_string(post.headers())?),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(post.headers())?),
        OutputFormat::Text => println!("{}", post.formatted_headers()),
    }
    Ok(())
}

/// Execute the render command
pub fn render_command(args: RenderArgs, format: Option<FormatArg>) -> Result<()> {
    let dialect = dialect_for_new(format);
    let headers = parse_meta_pairs(&args.meta)?;

    println!("{}", dialect.format_headers(&headers));
    Ok(())
}

/// Execute the prepend command
pub fn prepend_command(args: WriteArgs, format: Option<FormatArg>) -> Result<()> {
    let mut post = open_post(&args.file, format)?;
    post.set_headers(parse_meta_pairs(&args.meta)?);
    post.prepend_headers()?;

    info!("prepended headers to {}", args.file.display());
    Ok(())
}

/// Execute the overwrite command
pub fn overwrite_command(args: WriteArgs, format: Option<FormatArg>) -> Result<()> {
    let mut post = open_post(&args.file, format)?;
    post.set_headers(parse_meta_pairs(&args.meta)?);
    post.overwrite_headers()?;

    info!("overwrote headers of {}", args.file.display());
    Ok(())
}

/// Execute the new command
pub fn new_command(args: NewArgs, format: Option<FormatArg>) -> Result<()> {
    let mut metadata = PostMetadata::new(args.title);
    if let Some(slug) = args.slug {
        metadata = metadata.with_slug(slug);
    }
    metadata = metadata.with_date(args.date.unwrap_or_else(default_date));
    if let Some(modified) = args.modified {
        metadata = metadata.with_modified(modified);
    }
    if let Some(category) = args.category {
        metadata = metadata.with_category(category);
    }
    metadata = metadata.with_tags(args.tags).with_authors(args.authors);
    if let Some(summary) = args.summary {
        metadata = metadata.with_summary(summary);
    }

    // An explicit path picks the dialect by extension unless --format
    // overrides it; without a path the dialect decides the file name.
    let (path, dialect) = match args.path {
        Some(path) => {
            let dialect = Dialect::select(&path, format.map(FormatArg::name))?;
            (path, dialect)
        }
        None => {
            let dialect = dialect_for_new(format);
            (PathBuf::from(metadata.filename(dialect)), dialect)
        }
    };

    let mut post = PostFile::open(&path, Some(dialect.name()))?;
    if post.has_metadata() {
        if args.force_overwrite {
            post.set_headers(metadata.to_header_map());
            post.overwrite_headers()?;
        } else if args.force_prepend {
            post.set_headers(metadata.to_header_map());
            post.prepend_headers()?;
        } else {
            bail!(
                "{} already has metadata headers; pass --force-prepend or --force-overwrite",
                path.display()
            );
        }
    } else {
        post.apply_metadata(&metadata)?;
    }

    info!("wrote {}", path.display());
    println!("{}", path.display());
    Ok(())
}

/// Execute the scan command
pub fn scan_command(args: ScanArgs) -> Result<()> {
    let mut known = KnownValues::new();
    for dir in &args.directories {
        let merged = known.scan_directory(dir)?;
        info!("merged metadata from {} files in {}", merged, dir.display());
    }

    match args.output {
        OutputFormat::Yaml => print!("{}", serde_yaml::to_string(&known)?),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&known)?),
        OutputFormat::Text => {
            print_section("categories", &known.categories);
            print_section("tags", &known.tags);
            print_section("authors", &known.authors);
        }
    }
    Ok(())
}

fn open_post(path: &Path, format: Option<FormatArg>) -> Result<PostFile> {
    Ok(PostFile::open(path, format.map(FormatArg::name))?)
}

/// Dialect for commands that do not start from an existing file.
fn dialect_for_new(format: Option<FormatArg>) -> Dialect {
    match format {
        Some(FormatArg::Restructuredtext) => Dialect::Restructuredtext,
        Some(FormatArg::Markdown) | None => Dialect::Markdown,
    }
}

/// Parse repeated `-m key=value` arguments into a header map.
fn parse_meta_pairs(pairs: &[String]) -> Result<HeaderMap> {
    let mut headers = HeaderMap::new();
    for pair in pairs {
        let (key, value) = match pair.split_once('=') {
            Some(split) => split,
            None => bail!("invalid metadata pair '{}', expected 'key=value'", pair),
        };
        if key.trim().is_empty() {
            bail!("invalid metadata pair '{}', the key is empty", pair);
        }
        headers.insert(key, value.trim());
    }
    Ok(headers)
}

fn default_date() -> String {
    chrono::Local::now().format("%Y-%m-%d %H:%M:%S").to_string()
}

fn print_section(name: &str, values: &[String]) {
    println!("{}:", name);
    for value in values {
        println!("  {}", value);
    }
}
