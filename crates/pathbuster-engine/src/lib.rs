//! pathbuster engine: scan execution.
//!
//! Wires the core candidate/wordlist logic to an HTTP transport and the
//! report layer. [`ScanEngine`] runs one target; [`run_targets_file`]
//! loops it over a targets file.

pub mod config;
pub mod fetch;
pub mod orchestrator;
pub mod scan;

pub use config::{ScanConfig, DEFAULT_TIMEOUT_SECS};
pub use fetch::{Fetch, FetchError, HttpFetcher};
pub use orchestrator::{run_targets_file, RunStats};
pub use scan::{ScanEngine, ScanReport};
