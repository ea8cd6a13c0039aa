//! Max-hit discrepancy audit binary.
//!
//! Loads the monster catalogue, runs every eligible monster through the
//! reference engine and prints the mismatch report as JSON on stdout.
//!
//! ```bash
//! cargo run -p maxhit-audit
//! cargo run -p maxhit-audit -- --monsters path/to/monsters.json
//! ```

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use console::style;

use maxhit_audit::{logging, pipeline};

const DEFAULT_CATALOGUE: &str = "cdn/json/monsters.json";

/// Report monsters whose wiki max hit disagrees with the calculator
#[derive(Parser)]
#[command(name = "maxhit-audit")]
#[command(about = "Cross-check wiki max hits against the calculator", long_about = None)]
#[command(version)]
struct Cli {
    /// Monster catalogue JSON file
    #[arg(long, value_name = "PATH", env = "MONSTERS_JSON", default_value = DEFAULT_CATALOGUE)]
    monsters: PathBuf,
}

fn main() -> Result<()> {
    // Load .env file if it exists (for MONSTERS_JSON and RUST_LOG)
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();
    logging::setup_logging()?;

    let outcome = pipeline::audit_file(&cli.monsters)?;
    let summary = outcome.summary;

    let json = outcome
        .report
        .to_pretty_json()
        .context("Failed to serialize report to JSON")?;
    println!("{}", json);

    eprintln!(
        "{} {} of {} compared monsters disagree",
        style("Mismatches:").bold().cyan().for_stderr(),
        style(summary.mismatched).bold().yellow().for_stderr(),
        summary.compared
    );

    Ok(())
}
