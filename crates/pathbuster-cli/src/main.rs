//! pathbuster - wordlist-driven web path scanner
//!
//! This is the main entry point for the pathbuster binary.

mod logging;

use std::path::PathBuf;
use std::time::Duration;

use anyhow::Result;
use clap::Parser;
use tracing::{debug, info};

use pathbuster_core::parse_extensions;
use pathbuster_engine::{run_targets_file, HttpFetcher, ScanConfig, ScanEngine};
use pathbuster_report::OutputFormat;

/// pathbuster web path scanner
#[derive(Parser, Debug)]
#[command(name = "pathbuster")]
#[command(version)]
#[command(about = "Sequential wordlist-driven web path scanner", long_about = None)]
struct Args {
    /// Target host or URL to scan (bare hosts are tried as https, then http)
    target: Option<String>,

    /// Scan every target listed in this file instead (one per line, # comments)
    #[arg(short = 't', long, value_name = "FILE")]
    targets: Option<PathBuf>,

    /// Wordlist file, one path candidate per line
    #[arg(short = 'f', long = "file", value_name = "WORDLIST")]
    file: PathBuf,

    /// Output file for found paths
    #[arg(short, long, default_value = "directories.txt")]
    output: PathBuf,

    /// Comma-separated extensions to try after the bare word (e.g. .php,html)
    #[arg(short, long, value_name = "LIST")]
    ext: Option<String>,

    /// Probe directories only, skipping extension variants
    #[arg(short, long)]
    dirs_only: bool,

    /// Skip URLs already recorded in the output file (implies --append)
    #[arg(long)]
    resume: bool,

    /// Append to the output file instead of overwriting it
    #[arg(long)]
    append: bool,

    /// Output format
    #[arg(long, value_parser = ["raw", "json", "csv"], default_value = "raw")]
    output_format: String,

    /// Per-request timeout in seconds
    #[arg(long, value_name = "SECS")]
    timeout: Option<u64>,

    /// User-Agent header sent with every probe
    #[arg(long, value_name = "UA")]
    user_agent: Option<String>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value = "info")]
    log_level: String,
}

fn main() -> Result<()> {
    let args = Args::parse();

    logging::init_logging(&args.log_level);
    debug!("pathbuster {}", env!("CARGO_PKG_VERSION"));

    if args.target.is_some() && args.targets.is_some() {
        anyhow::bail!("Give a single target or --targets, not both");
    }
    if args.target.is_none() && args.targets.is_none() {
        anyhow::bail!("No target given; pass one, or use --targets <FILE>");
    }
    if !args.file.is_file() {
        anyhow::bail!("File not found: {}", args.file.display());
    }

    let format = match args.output_format.as_str() {
        "json" => OutputFormat::Json,
        "csv" => OutputFormat::Csv,
        _ => OutputFormat::Raw,
    };

    let mut config = ScanConfig {
        wordlist: args.file,
        output: args.output,
        format,
        extensions: parse_extensions(args.ext.as_deref().unwrap_or("")),
        dirs_only: args.dirs_only,
        resume: args.resume,
        // Resuming without appending would wipe the history being resumed.
        append: args.append || args.resume,
        ..ScanConfig::default()
    };
    if let Some(secs) = args.timeout {
        config.timeout = Duration::from_secs(secs);
    }
    if let Some(ua) = args.user_agent {
        config.user_agent = ua;
    }
    let config = config.merge_env();

    let fetcher = HttpFetcher::new(&config)?;

    if let Some(target) = &args.target {
        ScanEngine::new(&config, &fetcher).run_target(target)?;
    } else if let Some(path) = &args.targets {
        let stats = run_targets_file(path, &config, &fetcher)?;
        info!(
            "Processed {} targets: {} completed, {} failed, {} found",
            stats.targets, stats.completed, stats.failed, stats.found
        );
    }

    Ok(())
}
