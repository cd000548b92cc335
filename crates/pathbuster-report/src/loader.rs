//! Existing-results loader
//!
//! Resume mode needs the set of URLs a previous run already recorded, but
//! the output file may be in any of the three formats (and the operator may
//! have switched formats between runs). The loader sniffs the content shape
//! and dispatches: JSON array, then CSV, then plain lines. The first
//! strategy that yields at least one URL wins; later strategies are not
//! consulted. This short-circuit is a behavioral contract, not a fallback
//! chain to "improve" on.
//!
//! Loading never fails: a missing, unreadable, or unparseable file is an
//! empty history.

use std::collections::HashSet;
use std::path::Path;

use csv::ReaderBuilder;
use serde_json::Value;
use tracing::debug;

/// Load the URLs recorded in a prior output file.
pub fn load_existing_urls(path: impl AsRef<Path>) -> HashSet<String> {
    let path = path.as_ref();
    let content = match std::fs::read_to_string(path) {
        Ok(content) => content,
        Err(_) => return HashSet::new(),
    };
    let text = content.trim();
    if text.is_empty() {
        return HashSet::new();
    }

    if text.starts_with('[') {
        let urls = json_array_urls(text);
        if !urls.is_empty() {
            debug!("Loaded {} existing entries from {} (json)", urls.len(), path.display());
            return urls;
        }
    }

    let urls = csv_urls(text);
    if !urls.is_empty() {
        debug!("Loaded {} existing entries from {} (csv)", urls.len(), path.display());
        return urls;
    }

    let urls = plain_line_urls(text);
    debug!("Loaded {} existing entries from {} (lines)", urls.len(), path.display());
    urls
}

/// JSON strategy: an array whose elements are `{url: ..}` objects or bare
/// strings. Other element shapes are skipped; a parse failure contributes
/// nothing. Values are taken verbatim.
fn json_array_urls(text: &str) -> HashSet<String> {
    let mut urls = HashSet::new();

    if let Ok(Value::Array(items)) = serde_json::from_str::<Value>(text) {
        for item in items {
            match item {
                Value::Object(obj) => {
                    if let Some(Value::String(url)) = obj.get("url") {
                        urls.insert(url.clone());
                    }
                }
                Value::String(url) => {
                    urls.insert(url);
                }
                _ => {}
            }
        }
    }

    urls
}

/// CSV strategy: if the first row carries a `url` header cell, that column
/// supplies the value for every subsequent row; otherwise every row's first
/// cell is taken (no header assumed). Any CSV read error abandons the whole
/// strategy.
fn csv_urls(text: &str) -> HashSet<String> {
    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(text.as_bytes());

    let mut rows = Vec::new();
    for record in reader.records() {
        match record {
            Ok(row) => rows.push(row),
            Err(_) => return HashSet::new(),
        }
    }

    let mut urls = HashSet::new();
    let Some(first) = rows.first() else {
        return urls;
    };

    let url_column = first
        .iter()
        .position(|cell| cell.trim().to_lowercase() == "url");

    match url_column {
        Some(idx) => {
            for row in &rows[1..] {
                if let Some(cell) = row.get(idx) {
                    urls.insert(cell.trim().to_string());
                }
            }
        }
        None => {
            for row in &rows {
                if let Some(cell) = row.get(0) {
                    urls.insert(cell.trim().to_string());
                }
            }
        }
    }

    urls
}

/// Fallback strategy: every non-blank trimmed line is a URL.
fn plain_line_urls(text: &str) -> HashSet<String> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(String::from)
        .collect()
}
