//! Scan target definitions

use crate::error::{Error, Result};

/// A host to scan: either a bare hostname/host:port or a full
/// scheme-qualified URL.
///
/// The inner string is normalized on construction: surrounding whitespace
/// and trailing slashes are stripped. Candidate URLs are built by joining
/// path segments onto the bases this target yields.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Target(String);

impl Target {
    /// Parse a target from a string, normalizing it
    pub fn parse(s: &str) -> Result<Self> {
        let normalized = s.trim().trim_end_matches('/');
        if normalized.is_empty() {
            return Err(Error::InvalidTarget(String::from("empty target")));
        }
        Ok(Target(normalized.to_string()))
    }

    /// Whether the target carries an explicit scheme
    pub fn has_scheme(&self) -> bool {
        self.0.starts_with("http://") || self.0.starts_with("https://")
    }

    /// Base URLs to probe for this target.
    ///
    /// A scheme-qualified target is its own sole base. A bare host yields
    /// two bases, HTTPS strictly before HTTP; probe order depends on this.
    pub fn bases(&self) -> Vec<String> {
        if self.has_scheme() {
            vec![self.0.clone()]
        } else {
            vec![format!("https://{}", self.0), format!("http://{}", self.0)]
        }
    }

    /// The normalized target string
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for Target {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
