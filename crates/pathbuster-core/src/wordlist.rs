//! Wordlist and targets-file readers
//!
//! Both inputs are plain text, one entry per line. Wordlists keep every
//! non-blank line verbatim; there is no comment syntax, `#admin` is a valid
//! path segment. Targets files additionally treat lines whose first
//! non-space character is `#` as comments.

use std::path::Path;

use crate::error::{Error, Result};

/// Read a wordlist: non-empty trimmed lines, file order preserved.
pub fn load_wordlist(path: impl AsRef<Path>) -> Result<Vec<String>> {
    let words = read_trimmed_lines(path.as_ref())?;
    Ok(words)
}

/// Read a targets file: like a wordlist, but `#` comment lines are skipped
/// and a file with zero usable lines is an error.
///
/// Order is preserved and duplicate targets are kept; scanning the same
/// host twice in one run is the operator's decision.
pub fn load_targets(path: impl AsRef<Path>) -> Result<Vec<String>> {
    let path = path.as_ref();
    let targets: Vec<String> = read_trimmed_lines(path)?
        .into_iter()
        .filter(|line| !line.starts_with('#'))
        .collect();

    if targets.is_empty() {
        return Err(Error::NoTargets {
            path: path.display().to_string(),
        });
    }
    Ok(targets)
}

fn read_trimmed_lines(path: &Path) -> Result<Vec<String>> {
    let content = std::fs::read_to_string(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            Error::FileNotFound {
                path: path.display().to_string(),
            }
        } else {
            Error::Io(e)
        }
    })?;

    Ok(content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(String::from)
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::TempDir;

    fn write_file(dir: &TempDir, name: &str, content: &str) -> std::path::PathBuf {
        let path = dir.path().join(name);
        let mut file = std::fs::File::create(&path).unwrap();
        file.write_all(content.as_bytes()).unwrap();
        path
    }

    #[test]
    fn test_wordlist_skips_blank_lines_keeps_order() {
        let dir = TempDir::new().unwrap();
        let path = write_file(&dir, "words.txt", "admin\n\n  login  \n\napi\n");
        assert_eq!(load_wordlist(&path).unwrap(), vec!["admin", "login", "api"]);
    }

    #[test]
    fn test_wordlist_has_no_comment_syntax() {
        let dir = TempDir::new().unwrap();
        let path = write_file(&dir, "words.txt", "#backup\nadmin\n");
        assert_eq!(load_wordlist(&path).unwrap(), vec!["#backup", "admin"]);
    }

    #[test]
    fn test_wordlist_missing_file() {
        let dir = TempDir::new().unwrap();
        let err = load_wordlist(dir.path().join("nope.txt")).unwrap_err();
        assert!(matches!(err, Error::FileNotFound { .. }));
    }

    #[test]
    fn test_targets_skip_comments_and_blanks() {
        let dir = TempDir::new().unwrap();
        let path = write_file(
            &dir,
            "targets.txt",
            "\n# staging hosts\nexample.com\n  # indented comment\nhttp://10.0.0.2:8080\n",
        );
        assert_eq!(
            load_targets(&path).unwrap(),
            vec!["example.com", "http://10.0.0.2:8080"]
        );
    }

    #[test]
    fn test_targets_duplicates_kept_in_order() {
        let dir = TempDir::new().unwrap();
        let path = write_file(&dir, "targets.txt", "a.example\nb.example\na.example\n");
        assert_eq!(
            load_targets(&path).unwrap(),
            vec!["a.example", "b.example", "a.example"]
        );
    }

    #[test]
    fn test_targets_empty_file_is_error() {
        let dir = TempDir::new().unwrap();
        let path = write_file(&dir, "targets.txt", "\n# only a comment\n\n");
        let err = load_targets(&path).unwrap_err();
        assert!(matches!(err, Error::NoTargets { .. }));
    }

    #[test]
    fn test_targets_missing_file_is_error() {
        let dir = TempDir::new().unwrap();
        let err = load_targets(dir.path().join("missing.txt")).unwrap_err();
        assert!(matches!(err, Error::FileNotFound { .. }));
    }
}
