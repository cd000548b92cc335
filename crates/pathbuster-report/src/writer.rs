//! Result writer
//!
//! Persists the entries found by the current scan invocation, and only
//! those. Resume-loaded history is never re-written; in json append mode
//! the existing array is merged in from disk instead.

use std::fs::{File, OpenOptions};
use std::io::Write;
use std::path::Path;

use serde_json::Value;
use tracing::debug;

use pathbuster_core::{Error, FoundEntry, Result};

use crate::OutputFormat;

/// Write a batch of found entries to `path` in the selected format.
///
/// `append` selects append-vs-overwrite; each format has its own merge
/// rules (see the per-format functions).
pub fn write_results(
    path: impl AsRef<Path>,
    entries: &[FoundEntry],
    format: OutputFormat,
    append: bool,
) -> Result<()> {
    let path = path.as_ref();
    match format {
        OutputFormat::Raw => write_raw(path, entries, append)?,
        OutputFormat::Json => write_json(path, entries, append)?,
        OutputFormat::Csv => write_csv(path, entries, append)?,
    }
    debug!(
        "Wrote {} entries to {} ({}, {})",
        entries.len(),
        path.display(),
        format,
        if append { "append" } else { "overwrite" }
    );
    Ok(())
}

/// raw: one URL per line, statuses dropped.
fn write_raw(path: &Path, entries: &[FoundEntry], append: bool) -> Result<()> {
    let mut file = open_output(path, append)?;
    for entry in entries {
        writeln!(file, "{}", entry.url)?;
    }
    Ok(())
}

/// json: a pretty-printed array of `{url, status}` objects.
///
/// Append mode merges: if the destination parses as a JSON array the new
/// entries are concatenated after the existing elements (whatever their
/// shape) and the whole array is rewritten. A missing, unreadable, or
/// non-array destination degrades to a fresh array of just the new entries.
fn write_json(path: &Path, entries: &[FoundEntry], append: bool) -> Result<()> {
    let mut merged: Vec<Value> = Vec::new();
    if append {
        if let Ok(existing) = std::fs::read_to_string(path) {
            if let Ok(Value::Array(items)) = serde_json::from_str::<Value>(&existing) {
                merged = items;
            }
        }
    }
    for entry in entries {
        merged.push(serde_json::to_value(entry)?);
    }
    std::fs::write(path, serde_json::to_string_pretty(&merged)?)?;
    Ok(())
}

/// csv: `url,status` rows.
///
/// The header row is written on overwrite always, and on append only when
/// the destination is missing or empty (a failed size probe counts as
/// empty). Appending to a non-empty file never re-emits the header.
fn write_csv(path: &Path, entries: &[FoundEntry], append: bool) -> Result<()> {
    let write_header = if append {
        match std::fs::metadata(path) {
            Ok(meta) => meta.len() == 0,
            Err(_) => true,
        }
    } else {
        true
    };

    let file = open_output(path, append)?;
    let mut writer = csv::Writer::from_writer(file);

    if write_header {
        writer
            .write_record(["url", "status"])
            .map_err(|e| Error::Csv(e.to_string()))?;
    }
    for entry in entries {
        let status = entry.status.to_string();
        writer
            .write_record([entry.url.as_str(), status.as_str()])
            .map_err(|e| Error::Csv(e.to_string()))?;
    }
    writer.flush()?;
    Ok(())
}

fn open_output(path: &Path, append: bool) -> std::io::Result<File> {
    if append {
        OpenOptions::new().create(true).append(true).open(path)
    } else {
        File::create(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::load_existing_urls;
    use std::collections::HashSet;
    use tempfile::TempDir;

    fn entries() -> Vec<FoundEntry> {
        vec![
            FoundEntry::new("https://example.com/admin", 200),
            FoundEntry::new("https://example.com/login", 301),
        ]
    }

    fn url_set(entries: &[FoundEntry]) -> HashSet<String> {
        entries.iter().map(|e| e.url.clone()).collect()
    }

    #[test]
    fn test_raw_overwrite() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("out.txt");

        write_results(&path, &entries(), OutputFormat::Raw, false).unwrap();
        let content = std::fs::read_to_string(&path).unwrap();
        assert_eq!(content, "https://example.com/admin\nhttps://example.com/login\n");

        // A second overwrite replaces, not extends
        write_results(&path, &entries()[..1], OutputFormat::Raw, false).unwrap();
        let content = std::fs::read_to_string(&path).unwrap();
        assert_eq!(content, "https://example.com/admin\n");
    }

    #[test]
    fn test_raw_append() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("out.txt");
        std::fs::write(&path, "https://old.example/x\n").unwrap();

        write_results(&path, &entries()[..1], OutputFormat::Raw, true).unwrap();
        let content = std::fs::read_to_string(&path).unwrap();
        assert_eq!(content, "https://old.example/x\nhttps://example.com/admin\n");
    }

    #[test]
    fn test_json_overwrite_shape() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("out.json");

        write_results(&path, &entries(), OutputFormat::Json, false).unwrap();
        let content = std::fs::read_to_string(&path).unwrap();
        assert!(content.starts_with("[\n  {"));
        assert!(content.contains(r#""url": "https://example.com/admin""#));
        assert!(content.contains(r#""status": 200"#));

        let parsed: Vec<FoundEntry> = serde_json::from_str(&content).unwrap();
        assert_eq!(parsed, entries());
    }

    #[test]
    fn test_json_append_merges_existing_array() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("out.json");

        write_results(&path, &entries()[..1], OutputFormat::Json, false).unwrap();
        write_results(&path, &entries()[1..], OutputFormat::Json, true).unwrap();

        let parsed: Vec<FoundEntry> =
            serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(parsed, entries());
    }

    #[test]
    fn test_json_append_onto_non_array_starts_fresh() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("out.json");
        std::fs::write(&path, r#"{"not":"an array"}"#).unwrap();

        write_results(&path, &entries()[..1], OutputFormat::Json, true).unwrap();
        let parsed: Vec<FoundEntry> =
            serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(parsed, entries()[..1]);
    }

    #[test]
    fn test_json_append_missing_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("out.json");

        write_results(&path, &entries(), OutputFormat::Json, true).unwrap();
        let parsed: Vec<FoundEntry> =
            serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(parsed, entries());
    }

    #[test]
    fn test_csv_overwrite_has_header() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("out.csv");

        write_results(&path, &entries(), OutputFormat::Csv, false).unwrap();
        let content = std::fs::read_to_string(&path).unwrap();
        assert_eq!(
            content,
            "url,status\nhttps://example.com/admin,200\nhttps://example.com/login,301\n"
        );
    }

    #[test]
    fn test_csv_append_to_missing_or_empty_writes_header() {
        let dir = TempDir::new().unwrap();

        let missing = dir.path().join("missing.csv");
        write_results(&missing, &entries()[..1], OutputFormat::Csv, true).unwrap();
        assert!(std::fs::read_to_string(&missing)
            .unwrap()
            .starts_with("url,status\n"));

        let empty = dir.path().join("empty.csv");
        std::fs::write(&empty, "").unwrap();
        write_results(&empty, &entries()[..1], OutputFormat::Csv, true).unwrap();
        assert!(std::fs::read_to_string(&empty)
            .unwrap()
            .starts_with("url,status\n"));
    }

    #[test]
    fn test_csv_append_never_repeats_header() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("out.csv");

        write_results(&path, &entries()[..1], OutputFormat::Csv, true).unwrap();
        write_results(&path, &entries()[1..], OutputFormat::Csv, true).unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        assert_eq!(content.matches("url,status").count(), 1);
        assert_eq!(
            content,
            "url,status\nhttps://example.com/admin,200\nhttps://example.com/login,301\n"
        );
    }

    #[test]
    fn test_roundtrip_json_writer_to_loader() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("out.json");

        write_results(&path, &entries(), OutputFormat::Json, false).unwrap();
        assert_eq!(load_existing_urls(&path), url_set(&entries()));
    }

    #[test]
    fn test_roundtrip_csv_writer_to_loader() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("out.csv");

        write_results(&path, &entries(), OutputFormat::Csv, false).unwrap();
        assert_eq!(load_existing_urls(&path), url_set(&entries()));
    }

    #[test]
    fn test_roundtrip_raw_writer_to_loader() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("out.txt");

        write_results(&path, &entries(), OutputFormat::Raw, false).unwrap();
        assert_eq!(load_existing_urls(&path), url_set(&entries()));
    }
}
