//! Found entry - a recorded successful discovery

use serde::{Deserialize, Serialize};

/// A discovered path: the probed URL plus the HTTP status it answered with.
///
/// This is the wire type of the json output format, so field order and
/// names are part of the format.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FoundEntry {
    pub url: String,
    pub status: u16,
}

impl FoundEntry {
    pub fn new(url: impl Into<String>, status: u16) -> Self {
        Self {
            url: url.into(),
            status,
        }
    }
}
