//! Sequential scan engine.
//!
//! Drives the probe loop for a single target: one word at a time, one
//! candidate URL at a time, first sub-400 response wins the word.

use std::collections::HashSet;

use tracing::{error, info, trace};

use pathbuster_core::{build_candidates, wordlist, FoundEntry, Result, Target};
use pathbuster_report::{load_existing_urls, write_results};

use crate::config::ScanConfig;
use crate::fetch::Fetch;

/// Outcome summary for one scanned target.
#[derive(Debug, Clone)]
pub struct ScanReport {
    pub target: String,
    /// Words taken from the wordlist.
    pub words: usize,
    /// Entries discovered during this run (resumed entries excluded).
    pub found: usize,
    /// False when the output file could not be written.
    pub persisted: bool,
}

/// Scan executor bound to one config and one transport.
pub struct ScanEngine<'a, F: Fetch> {
    config: &'a ScanConfig,
    fetcher: &'a F,
}

impl<'a, F: Fetch> ScanEngine<'a, F> {
    pub fn new(config: &'a ScanConfig, fetcher: &'a F) -> Self {
        Self { config, fetcher }
    }

    /// Full per-target flow: load the wordlist, reload scan history when
    /// resuming, probe every word, persist the findings.
    ///
    /// The history is reloaded from the output file on every call, so a
    /// later target in a multi-target run sees what earlier targets wrote.
    pub fn run_target(&self, raw: &str) -> Result<ScanReport> {
        let target = Target::parse(raw)?;
        let words = wordlist::load_wordlist(&self.config.wordlist)?;
        info!("Scanning {} with {} words", target, words.len());

        let mut seen = if self.config.resume {
            load_existing_urls(&self.config.output)
        } else {
            HashSet::new()
        };
        if self.config.resume && !seen.is_empty() {
            println!(
                "[RESUME] Loaded {} existing entries from {}",
                seen.len(),
                self.config.output.display()
            );
        }

        println!("Starting scan on {} with {} entries...", target, words.len());
        let found = self.scan_words(&target, &words, &mut seen);

        let persisted = match write_results(
            &self.config.output,
            &found,
            self.config.format,
            self.config.append,
        ) {
            Ok(()) => true,
            Err(e) => {
                error!(
                    "Could not write results to {}: {}",
                    self.config.output.display(),
                    e
                );
                false
            }
        };

        if persisted {
            println!(
                "Scan complete. Found {} paths. Saved to {}",
                found.len(),
                self.config.output.display()
            );
        } else {
            println!("Scan complete. Found {} paths.", found.len());
        }

        Ok(ScanReport {
            target: target.to_string(),
            words: words.len(),
            found: found.len(),
            persisted,
        })
    }

    /// Probe every word against the target and collect the hits.
    ///
    /// `seen` carries URLs recorded by previous runs; it is only consulted
    /// when resume is on, but hits are always added to it. A word is
    /// abandoned entirely the moment one of its candidates is either
    /// already seen or answers with a sub-400 status.
    pub fn scan_words(
        &self,
        target: &Target,
        words: &[String],
        seen: &mut HashSet<String>,
    ) -> Vec<FoundEntry> {
        let mut found = Vec::new();

        for word in words {
            let candidates =
                build_candidates(target, word, &self.config.extensions, self.config.dirs_only);
            for url in candidates {
                if self.config.resume && seen.contains(&url) {
                    break;
                }
                match self.fetcher.fetch(&url, self.config.timeout) {
                    Ok(status) if status < 400 => {
                        println!("[FOUND] {} ({})", url, status);
                        seen.insert(url.clone());
                        found.push(FoundEntry::new(url, status));
                        break;
                    }
                    // Error status: this candidate missed, try the next one.
                    Ok(_) => {}
                    Err(e) => trace!("Probe {} failed: {}", url, e),
                }
            }
        }

        found
    }
}
