//! Deepmerge CLI binary.
//!
//! Parses arguments, validates source roots before any merge work, and
//! runs the merge walker over each root in order.

use clap::Parser;
use deepmerge::cli::{self, Cli};
use deepmerge::logging::{init_logging, LoggingConfig};
use deepmerge::merge::{merge, MergeOptions};
use std::process;
use tracing::{error, info};

fn main() {
    let cli = Cli::parse();

    let logging_config = build_logging_config(&cli);
    if let Err(e) = init_logging(&logging_config) {
        eprintln!("Failed to initialize logging: {}", e);
        process::exit(1);
    }

    if let Err(e) = cli::validate_sources(&cli.source) {
        error!("argument validation failed: {}", e);
        eprintln!("ERROR: {}", e);
        process::exit(1);
    }

    let options = MergeOptions {
        dry_run: cli.dry_run,
    };

    match merge(&cli.source, &cli.destination, options) {
        Ok(stats) => {
            info!(
                copied = stats.copied,
                replaced = stats.replaced,
                retimed = stats.retimed,
                preserved = stats.preserved,
                skipped_duplicates = stats.skipped_duplicates,
                unchanged = stats.unchanged,
                "merge finished"
            );
            println!("Run complete");
        }
        Err(e) => {
            error!("merge failed: {}", e);
            eprintln!("ERROR: {}", e);
            process::exit(1);
        }
    }
}

/// Build logging configuration from CLI flags.
/// Precedence: --log-level overrides --verbose/--quiet override defaults.
fn build_logging_config(cli: &Cli) -> LoggingConfig {
    let mut config = LoggingConfig::default();
    if cli.quiet {
        config.level = "off".to_string();
    }
    if cli.verbose {
        config.level = "debug".to_string();
    }
    if let Some(ref level) = cli.log_level {
        config.level = level.clone();
    }
    config
}
