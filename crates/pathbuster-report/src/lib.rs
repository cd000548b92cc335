//! pathbuster Report - result persistence and resume history
//!
//! This crate owns the on-disk side of a scan:
//! - `OutputFormat`: the raw/json/csv selector shared by loader and writer
//! - `loader`: reads a prior output file back into a seen-set for resume
//! - `writer`: persists the entries found by the current scan invocation
//!
//! The same output path is both written (end of scan) and read back
//! (resume), so the two halves agree on all three formats.

pub mod loader;
pub mod writer;

pub use loader::load_existing_urls;
pub use writer::write_results;

/// On-disk output format
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// One URL per line, no status
    #[default]
    Raw,
    /// JSON array of `{url, status}` objects
    Json,
    /// `url,status` rows with a header
    Csv,
}

impl OutputFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            OutputFormat::Raw => "raw",
            OutputFormat::Json => "json",
            OutputFormat::Csv => "csv",
        }
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "raw" => Ok(OutputFormat::Raw),
            "json" => Ok(OutputFormat::Json),
            "csv" => Ok(OutputFormat::Csv),
            other => Err(format!("unknown output format: {}", other)),
        }
    }
}
