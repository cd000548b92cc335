//! Candidate URL construction
//!
//! For every wordlist entry the engine probes a deterministic, ordered list
//! of candidate URLs: first the bare path on each base, then (unless
//! directories-only mode is on) the path with each configured extension
//! appended. The first candidate that answers with a sub-400 status wins,
//! so ordering here is part of the scan contract.

use crate::target::Target;

/// Normalize a file extension so it carries a leading dot.
///
/// Users may pass `.php` or `php`; both mean the same extension. Input is
/// trimmed but otherwise kept verbatim when it already starts with a dot.
pub fn normalize_extension(raw: &str) -> String {
    let trimmed = raw.trim();
    if trimmed.starts_with('.') {
        trimmed.to_string()
    } else {
        format!(".{}", trimmed)
    }
}

/// Parse a comma-separated extension list from the CLI.
///
/// Empty segments are dropped, order is preserved, duplicates are kept
/// (deduplication is the caller's call, not enforced here).
pub fn parse_extensions(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|e| !e.is_empty())
        .map(normalize_extension)
        .collect()
}

/// Build the ordered candidate URL list for one word.
///
/// Layout: `{base}/{word}` for each base in order, then for each extension
/// (in supplied order) `{base}/{word}{ext}` for each base. With `dirs_only`
/// set the extension block is suppressed entirely.
pub fn build_candidates(
    target: &Target,
    word: &str,
    extensions: &[String],
    dirs_only: bool,
) -> Vec<String> {
    let bases = target.bases();
    let mut candidates = Vec::with_capacity(bases.len() * (1 + extensions.len()));

    for base in &bases {
        candidates.push(format!("{}/{}", base, word));
    }

    if !dirs_only {
        for ext in extensions {
            for base in &bases {
                candidates.push(format!("{}/{}{}", base, word, ext));
            }
        }
    }

    candidates
}
