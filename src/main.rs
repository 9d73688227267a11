use anyhow::Result;
use clap::Parser;
use std::io::{self, Write};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

use xsd_hygiene_rs::prelude::*;

#[derive(Parser)]
#[command(name = "xsd_hygiene_rs")]
#[command(about = "Reports duplicate XSD files, versioned filenames and unencoded schemaLocation spaces", long_about = None)]
struct Cli {
    /// Directory to scan for XSD files (default: current directory)
    #[arg(default_value = ".")]
    directory: PathBuf,

    /// Skip files that cannot be hashed instead of aborting the run
    #[arg(long)]
    skip_unreadable: bool,

    /// Flag every literal space in schemaLocation, even when %20 also appears
    #[arg(long)]
    strict_spaces: bool,

    /// Print the report as JSON
    #[arg(long)]
    json: bool,

    /// Increase log verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

impl Cli {
    fn scan_config(&self) -> ScanConfig {
        let failure_policy = if self.skip_unreadable {
            FailurePolicy::Skip
        } else {
            FailurePolicy::FailFast
        };
        let space_rule = if self.strict_spaces {
            SpaceRule::Strict
        } else {
            SpaceRule::Legacy
        };

        ScanConfig::new(self.directory.clone())
            .with_failure_policy(failure_policy)
            .with_space_rule(space_rule)
    }
}

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(io::stderr)
        .init();

    let config = cli.scan_config();
    tracing::debug!(
        root = %config.root.display(),
        policy = ?config.failure_policy,
        rule = ?config.space_rule,
        "starting scan"
    );

    let report = run_scan(&config)?;

    let stdout = io::stdout();
    let mut out = stdout.lock();
    if cli.json {
        write_json_report(&mut out, &report)?;
    } else {
        write_report(&mut out, &report)?;
    }
    out.flush()?;

    Ok(ExitCode::from(report.exit_code()))
}
