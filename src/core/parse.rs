//! Header parsing state machines
//!
//! One scanner per dialect. Both walk the input line by line, starting
//! in a header-scanning state and switching to a terminal body state as
//! soon as a line rules the header region out. Parsing is total: no
//! input fails, ambiguous lines simply land in the body.

use crate::core::header::HeaderMap;
use crate::core::scan;

/// Result of one parse pass over a source
#[derive(Debug, Clone, Default)]
pub struct Parsed {
    /// Extracted header mapping
    pub headers: HeaderMap,
    /// The entire original input, byte for byte
    pub raw: String,
    /// Residual content after the header lines are removed
    pub body: String,
}

/// Parse colon-style (Markdown) headers out of `content`
///
/// Header lines look like `Title: Sample title`. An optional `---`
/// fence around the block is absorbed. Indented lines extend the value
/// of the key seen on the previous header line.
pub fn colon_style(content: &str) -> Parsed {
    let mut headers = HeaderMap::new();
    let mut body: Vec<&str> = Vec::new();
    let mut in_body = false;
    let mut last_key: Option<String> = None;

    for line in content.split_inclusive('\n') {
        if in_body {
            body.push(line);
            continue;
        }

        if scan::is_fence(line) {
            continue;
        }

        if let Some((key, value)) = scan::colon_pair(line) {
            // A bare URL scans as `scheme: //host`; keep it in the body
            if value.starts_with("//") {
                in_body = true;
                body.push(line);
            } else {
                headers.insert(&key, value);
                last_key = Some(key);
            }
            continue;
        }

        if let Some(value) = scan::colon_continuation(line) {
            if let Some(key) = &last_key {
                let joined = match headers.get(key) {
                    Some(previous) => format!("{}; {}", previous, value),
                    None => value,
                };
                headers.insert(key, joined);
                continue;
            }
        }

        // Anything else ends the header region. A blank separator is
        // dropped, a non-blank line is kept as the first body line.
        in_body = true;
        if !scan::is_blank(line) {
            body.push(line);
        }
    }

    Parsed {
        headers,
        raw: content.to_string(),
        body: body.concat(),
    }
}

/// Parse field-list (reStructuredText) headers out of `content`
///
/// Header lines look like `:slug: sample-title`. A leading plain line
/// followed by a punctuation underline is recorded as the title.
/// Indented continuations either extend the previous field as wrapped
/// prose or, with a leading dash, as a `;`-joined list.
pub fn field_list(content: &str) -> Parsed {
    let mut headers = HeaderMap::new();
    let mut body: Vec<&str> = Vec::new();
    let mut in_body = false;
    let mut last_key: Option<String> = None;

    for line in content.split_inclusive('\n') {
        if in_body {
            body.push(line);
            continue;
        }

        // A buffered paragraph longer than one line means we are past
        // any plausible header region.
        if body.iter().filter(|l| !scan::is_blank(l)).count() > 1 {
            in_body = true;
            body.push(line);
            continue;
        }

        if scan::is_underline(line) {
            if let Some(text) = body.pop() {
                headers.insert("title", text.trim());
            }
            continue;
        }

        if let Some((key, value)) = scan::field_pair(line) {
            headers.insert(&key, value);
            last_key = Some(key);
            continue;
        }

        if let Some(more) = scan::field_continuation(line) {
            if let Some(key) = &last_key {
                let current = headers.get(key).unwrap_or_default();
                let joined = if more.list_item {
                    let appended = format!("{}; {}", current, more.value);
                    appended.trim_start_matches(['-', ' ']).to_string()
                } else {
                    format!("{} {}", current, more.value).trim().to_string()
                };
                headers.insert(key, joined);
                continue;
            }
        }

        if scan::is_blank(line) {
            if headers.len() > 1 {
                in_body = true;
            }
            continue;
        }

        // A plain line after the title belongs to the body; before any
        // title it stays buffered as a title candidate.
        if headers.contains_key("title") {
            in_body = true;
        }
        body.push(line);
    }

    Parsed {
        headers,
        raw: content.to_string(),
        body: body.concat(),
    }
}
