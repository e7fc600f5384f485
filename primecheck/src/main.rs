//! Command-line front end for the primality checker.
//!
//! `check` queries individual values, `demo` prints the demonstration
//! transcript, `primes` enumerates primes, and `init-config` writes the
//! default demo configuration.

use std::io::Write;
use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use tracing::debug;

use primecheck::check::{check_token, exit_code};
use primecheck::demo::{first_primes, run_demo};
use primecheck::exit_codes;
use primecheck::io::config::{
    DEFAULT_CONFIG_PATH, DemoConfig, MAX_PRIME_COUNT, load_config, write_config,
};
use primecheck::logging;

#[derive(Parser)]
#[command(
    name = "primecheck",
    version,
    about = "Trial-division primality checker"
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Check whether each value is prime.
    ///
    /// Values are JSON literals (`17`, `"5"`, `null`, `[]`) or one of
    /// `NaN`, `Infinity`, `-Infinity`, `undefined`.
    Check {
        #[arg(required = true, allow_hyphen_values = true)]
        values: Vec<String>,
        /// Print one JSON object per value.
        #[arg(long)]
        json: bool,
    },
    /// Print the demonstration transcript.
    Demo {
        /// Demo config file (defaults apply if missing).
        #[arg(long, default_value = DEFAULT_CONFIG_PATH)]
        config: PathBuf,
    },
    /// Print the first primes, one per line.
    Primes {
        #[arg(long, default_value_t = 20)]
        count: usize,
    },
    /// Write the default demo config.
    InitConfig {
        #[arg(long, default_value = DEFAULT_CONFIG_PATH)]
        path: PathBuf,
        /// Overwrite an existing file.
        #[arg(short, long)]
        force: bool,
    },
}

fn main() {
    logging::init();
    match run() {
        Ok(code) => std::process::exit(code),
        Err(err) => {
            eprintln!("{:#}", err);
            std::process::exit(exit_codes::INVALID);
        }
    }
}

fn run() -> Result<i32> {
    let cli = Cli::parse();
    match cli.command {
        Command::Check { values, json } => cmd_check(&values, json),
        Command::Demo { config } => cmd_demo(&config),
        Command::Primes { count } => cmd_primes(count),
        Command::InitConfig { path, force } => cmd_init_config(&path, force),
    }
}

fn cmd_check(values: &[String], json: bool) -> Result<i32> {
    let reports: Vec<_> = values.iter().map(|token| check_token(token)).collect();
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    for report in &reports {
        if json {
            let line = serde_json::to_string(report).context("serialize check report")?;
            writeln!(out, "{}", line)?;
        } else {
            writeln!(out, "{}", report.render())?;
        }
    }
    Ok(exit_code(&reports))
}

fn cmd_demo(config: &std::path::Path) -> Result<i32> {
    let cfg = load_config(config).context("load demo config")?;
    debug!(config = %config.display(), "demo config loaded");
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    let summary = run_demo(&cfg, &mut out)?;
    debug!(
        elapsed_ms = summary.benchmark_elapsed.as_millis() as u64,
        within_budget = summary.within_budget,
        "benchmark timing"
    );
    Ok(exit_codes::OK)
}

fn cmd_primes(count: usize) -> Result<i32> {
    if count > MAX_PRIME_COUNT {
        bail!("--count must be <= {}", MAX_PRIME_COUNT);
    }
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    for prime in first_primes(count) {
        writeln!(out, "{}", prime)?;
    }
    Ok(exit_codes::OK)
}

fn cmd_init_config(path: &std::path::Path, force: bool) -> Result<i32> {
    if !force && path.exists() {
        bail!("{} already exists (use --force to overwrite)", path.display());
    }
    write_config(path, &DemoConfig::default())
        .with_context(|| format!("write {}", path.display()))?;
    println!("wrote {}", path.display());
    Ok(exit_codes::OK)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_check_accepts_negative_values() {
        let cli = Cli::parse_from(["primecheck", "check", "-5", "17"]);
        match cli.command {
            Command::Check { values, json } => {
                assert_eq!(values, vec!["-5", "17"]);
                assert!(!json);
            }
            _ => panic!("expected check"),
        }
    }

    #[test]
    fn parse_check_json() {
        let cli = Cli::parse_from(["primecheck", "check", "--json", "7"]);
        assert!(matches!(cli.command, Command::Check { json: true, .. }));
    }

    #[test]
    fn parse_init_config_force() {
        let cli = Cli::parse_from(["primecheck", "init-config", "--force"]);
        assert!(matches!(cli.command, Command::InitConfig { force: true, .. }));
    }

    #[test]
    fn parse_primes_default_count() {
        let cli = Cli::parse_from(["primecheck", "primes"]);
        assert!(matches!(cli.command, Command::Primes { count: 20 }));
    }
}
