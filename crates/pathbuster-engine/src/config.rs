//! Scan configuration shared by the engine and the CLI.

use std::env;
use std::path::PathBuf;
use std::time::Duration;

use pathbuster_report::OutputFormat;

/// Per-request timeout applied when nothing else is configured.
pub const DEFAULT_TIMEOUT_SECS: u64 = 5;

/// Everything a scan run needs to know, resolved before any probe is sent.
///
/// One value of this struct drives a whole run, including multi-target
/// runs where every target shares the same wordlist and output file.
#[derive(Debug, Clone)]
pub struct ScanConfig {
    /// Wordlist file, one path candidate per line.
    pub wordlist: PathBuf,
    /// Output file that found entries are persisted to.
    pub output: PathBuf,
    /// Serialization format for the output file.
    pub format: OutputFormat,
    /// Normalized extensions (leading dot guaranteed), probed after the bare word.
    pub extensions: Vec<String>,
    /// Probe only the bare word, skipping extension variants.
    pub dirs_only: bool,
    /// Skip words whose URL is already recorded in the output file.
    pub resume: bool,
    /// Append to the output file instead of overwriting it.
    pub append: bool,
    /// Per-request timeout.
    pub timeout: Duration,
    /// User-Agent header sent with every probe.
    pub user_agent: String,
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            wordlist: PathBuf::from("wordlist.txt"),
            output: PathBuf::from("directories.txt"),
            format: OutputFormat::default(),
            extensions: Vec::new(),
            dirs_only: false,
            resume: false,
            append: false,
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            user_agent: default_user_agent(),
        }
    }
}

impl ScanConfig {
    /// Overlay environment variables on top of the current values.
    ///
    /// `PATHBUSTER_TIMEOUT` (seconds) and `PATHBUSTER_USER_AGENT` win over
    /// whatever was set before. An unparsable timeout is ignored.
    pub fn merge_env(mut self) -> Self {
        if let Ok(val) = env::var("PATHBUSTER_TIMEOUT") {
            if let Ok(secs) = val.parse::<u64>() {
                self.timeout = Duration::from_secs(secs);
            }
        }
        if let Ok(val) = env::var("PATHBUSTER_USER_AGENT") {
            self.user_agent = val;
        }
        self
    }
}

fn default_user_agent() -> String {
    format!("pathbuster/{}", env!("CARGO_PKG_VERSION"))
}
