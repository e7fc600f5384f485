//! Table-driven contract harness for the primality checker.
//!
//! Runs the bundled case file (or one given with `--cases`) and exits
//! non-zero if any case fails.

mod case;
mod report;
mod run;

use std::io::Write;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::case::CaseFile;
use crate::report::{summarize, write_report};
use crate::run::run_all;

#[derive(Parser)]
#[command(
    name = "selftest",
    version,
    about = "Contract harness for primecheck"
)]
struct Cli {
    /// Case file to run instead of the bundled cases.
    #[arg(long)]
    cases: Option<PathBuf>,
    /// Print the summary as JSON instead of per-case lines.
    #[arg(long)]
    json: bool,
}

fn main() {
    init_tracing();
    match run() {
        Ok(true) => {}
        Ok(false) => std::process::exit(1),
        Err(err) => {
            eprintln!("{:#}", err);
            std::process::exit(1);
        }
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .compact()
        .init();
}

fn run() -> Result<bool> {
    let cli = Cli::parse();
    let file = match &cli.cases {
        Some(path) => CaseFile::load(path)?,
        None => CaseFile::bundled()?,
    };
    let cases = file.expand();
    info!(cases = cases.len(), "running cases");

    let results = run_all(&cases);
    let summary = summarize(&results);

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    if cli.json {
        serde_json::to_writer_pretty(&mut out, &summary).context("serialize summary")?;
        writeln!(out)?;
    } else {
        write_report(&mut out, &results, &summary)?;
    }
    Ok(summary.all_passed())
}
