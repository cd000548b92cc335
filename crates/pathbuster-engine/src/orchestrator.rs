//! Multi-target orchestration.
//!
//! Reads a targets file and scans each entry sequentially with a shared
//! config and transport. One bad target does not stop the run; a missing
//! or empty targets file does.

use std::path::Path;

use tracing::{error, info};

use pathbuster_core::{wordlist, Result};

use crate::config::ScanConfig;
use crate::fetch::Fetch;
use crate::scan::ScanEngine;

/// Aggregate outcome of a multi-target run.
#[derive(Debug, Clone, Default)]
pub struct RunStats {
    /// Targets listed in the file.
    pub targets: usize,
    /// Targets that ran to completion.
    pub completed: usize,
    /// Targets abandoned on error.
    pub failed: usize,
    /// Entries found across all completed targets.
    pub found: usize,
}

/// Scan every target listed in `path`, one after another.
///
/// All targets share the wordlist and output file from `config`, so with
/// resume on, later targets skip what earlier ones already recorded.
pub fn run_targets_file<F: Fetch>(
    path: impl AsRef<Path>,
    config: &ScanConfig,
    fetcher: &F,
) -> Result<RunStats> {
    let path = path.as_ref();
    let targets = wordlist::load_targets(path)?;
    info!("Loaded {} targets from {}", targets.len(), path.display());

    let engine = ScanEngine::new(config, fetcher);
    let mut stats = RunStats {
        targets: targets.len(),
        ..RunStats::default()
    };

    for target in &targets {
        match engine.run_target(target) {
            Ok(report) => {
                stats.completed += 1;
                stats.found += report.found;
            }
            Err(e) => {
                error!("Skipping target {}: {}", target, e);
                stats.failed += 1;
            }
        }
    }

    Ok(stats)
}
