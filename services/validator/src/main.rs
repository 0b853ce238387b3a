//! Argos request validator
//!
//! Usage:
//!   argos-validate requests.json
//!   argos-validate --flexible --collect-all batch.json other.json
//!   cat request.json | argos-validate -
//!
//! Prints one JSON report per request on stdout. Exit status is 0 when every
//! request is accepted, 1 when any is rejected and 2 when input or
//! configuration cannot be loaded.

use anyhow::{Context, Result};
use argos_config::{parse_level, ValidatorConfig};
use argos_validator::{load_requests, validate_requests, RunOptions, STDIN_SOURCE};
use clap::Parser;
use std::io::Write;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::{error, info};

#[derive(Parser, Debug)]
#[command(name = "argos-validate")]
#[command(about = "Validate Argos routing request parameters")]
#[command(version)]
struct Args {
    /// Request documents (JSON object or array); `-` reads stdin
    #[arg(default_value = STDIN_SOURCE)]
    sources: Vec<String>,

    /// Path to configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Environment overlay name (loads environments/<env>.toml next to the config)
    #[arg(short, long)]
    env: Option<String>,

    /// Treat requests without a `flexible` flag as flexible
    #[arg(long)]
    flexible: bool,

    /// Report every rejected field instead of stopping at the first
    #[arg(long)]
    collect_all: bool,

    /// Log level (trace, debug, info, warn, error); overrides the config
    #[arg(short, long)]
    log_level: Option<String>,

    /// Enable JSON logging format
    #[arg(long)]
    json_logs: bool,

    /// Print the effective configuration as TOML and exit
    #[arg(long)]
    dump_config: bool,
}

fn main() -> ExitCode {
    let args = Args::parse();

    match run(&args) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::from(1),
        Err(e) => {
            error!("{:#}", e);
            eprintln!("argos-validate: {:#}", e);
            ExitCode::from(2)
        }
    }
}

/// Returns whether every request was accepted
fn run(args: &Args) -> Result<bool> {
    let mut config = ValidatorConfig::load(args.config.as_deref(), args.env.as_deref())?;
    apply_overrides(&mut config, args);

    init_logging(&config);

    if args.dump_config {
        print!("{}", config.to_toml()?);
        return Ok(true);
    }

    let options = RunOptions {
        flexible: config.validation.flexible,
        fail_fast: config.validation.fail_fast,
    };
    info!(
        "Validating {} source(s), flexible={}, fail_fast={}",
        args.sources.len(),
        options.flexible,
        options.fail_fast
    );

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    let mut all_valid = true;

    for source in &args.sources {
        let requests = load_requests(source)?;
        for report in validate_requests(source, &requests, options) {
            all_valid &= report.valid;
            let line = serde_json::to_string(&report).context("Failed to encode report")?;
            writeln!(out, "{}", line).context("Failed to write report")?;
        }
    }

    Ok(all_valid)
}

fn apply_overrides(config: &mut ValidatorConfig, args: &Args) {
    if args.flexible {
        config.validation.flexible = true;
    }
    if args.collect_all {
        config.validation.fail_fast = false;
    }
    if let Some(level) = &args.log_level {
        config.logging.level = level.clone();
    }
    if args.json_logs {
        config.logging.json = true;
    }
}

fn init_logging(config: &ValidatorConfig) {
    let log_level = parse_level(&config.logging.level);

    // stdout carries reports only
    if config.logging.json {
        tracing_subscriber::fmt()
            .json()
            .with_max_level(log_level)
            .with_writer(std::io::stderr)
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_max_level(log_level)
            .with_writer(std::io::stderr)
            .init();
    }
}
