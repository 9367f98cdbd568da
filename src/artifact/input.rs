//! URL file parsing
//!
//! Each line holds one or more comma-separated links (typically
//! `code,dataset,model`). Fields are trimmed and empty fields are skipped.
//! Inside a query string or fragment a comma only separates fields when the
//! next link starts right after it.

use lazy_static::lazy_static;
use regex::Regex;
use std::path::Path;

use crate::artifact::url::UrlRecord;

lazy_static! {
    static ref LINK_START_RE: Result<Regex, regex::Error> =
        Regex::new(r"(?i)^\s*[a-z][a-z0-9+.\-]*://");
}

/// Classified records for every non-empty field of `content`, in order.
#[must_use]
pub fn parse_url_lines(content: &str) -> Vec<UrlRecord> {
    content
        .lines()
        .flat_map(split_fields)
        .map(str::trim)
        .filter(|field| !field.is_empty())
        .map(UrlRecord::new)
        .collect()
}

/// Read and parse a URL file.
pub fn read_url_file(path: impl AsRef<Path>) -> std::io::Result<Vec<UrlRecord>> {
    let content = std::fs::read_to_string(path)?;
    Ok(parse_url_lines(&content))
}

fn split_fields(line: &str) -> Vec<&str> {
    let mut fields = Vec::new();
    let mut start = 0;
    let mut in_query = false;

    for (i, c) in line.char_indices() {
        match c {
            '?' | '#' => in_query = true,
            ',' if !in_query || starts_link(&line[i + 1..]) => {
                fields.push(&line[start..i]);
                start = i + 1;
                in_query = false;
            }
            _ => {}
        }
    }
    fields.push(&line[start..]);
    fields
}

/// Whether `rest` is empty or begins with `scheme://`
fn starts_link(rest: &str) -> bool {
    rest.trim().is_empty() || LINK_START_RE.as_ref().map_or(true, |re| re.is_match(rest))
}
