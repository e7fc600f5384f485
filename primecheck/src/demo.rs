//! Demonstration transcript for `primecheck demo`.
//!
//! Mirrors how a caller would use the checker: plain queries, rejected
//! inputs with their messages, one timed large input, and a short prime
//! enumeration.

use std::io::Write;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use tracing::{debug, info, warn};

use crate::core::candidate::Candidate;
use crate::core::is_prime;
use crate::io::config::DemoConfig;

/// What the demo observed, for callers that want more than the transcript.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DemoSummary {
    /// Invalid tokens that were rejected, as configured.
    pub rejected: usize,
    /// Invalid tokens that were unexpectedly accepted.
    pub accepted: Vec<String>,
    pub benchmark_prime: bool,
    pub benchmark_elapsed: Duration,
    pub within_budget: bool,
    pub primes: Vec<u64>,
}

/// Run the demonstration, writing the transcript to `out`.
pub fn run_demo<W: Write>(cfg: &DemoConfig, out: &mut W) -> Result<DemoSummary> {
    writeln!(out, "=== is_prime Demonstration ===")?;

    write_section(out, "Basic Usage", &cfg.basic)?;
    write_section(out, "Edge Cases", &cfg.edge)?;
    write_section(out, "Larger Numbers", &cfg.larger)?;

    writeln!(out, "\nError Handling Demonstrations:")?;
    let mut rejected = 0;
    let mut accepted = Vec::new();
    for token in &cfg.invalid {
        let candidate = Candidate::parse(token);
        let label = input_label(&candidate);
        match is_prime(candidate) {
            Err(err) => {
                rejected += 1;
                debug!(token = token.as_str(), kind = %err.kind(), "input rejected");
                writeln!(out, "Error with {} ({}): {}", label, token, err)?;
            }
            Ok(result) => {
                warn!(token = token.as_str(), result, "invalid input was accepted");
                writeln!(out, "is_prime({}) = {} (expected an error)", token, result)?;
                accepted.push(token.clone());
            }
        }
    }

    writeln!(out, "\nPerformance Test:")?;
    let start = Instant::now();
    let benchmark_prime = is_prime(cfg.benchmark)
        .with_context(|| format!("check benchmark value {}", cfg.benchmark))?;
    let benchmark_elapsed = start.elapsed();
    let within_budget = benchmark_elapsed <= Duration::from_millis(cfg.perf_budget_ms);
    writeln!(
        out,
        "is_prime({}) = {} (computed in {}ms)",
        cfg.benchmark,
        benchmark_prime,
        benchmark_elapsed.as_millis()
    )?;
    if !within_budget {
        warn!(
            benchmark = cfg.benchmark,
            elapsed_ms = benchmark_elapsed.as_millis() as u64,
            budget_ms = cfg.perf_budget_ms,
            "benchmark exceeded budget"
        );
    }

    writeln!(out, "\nFirst {} Prime Numbers:", cfg.prime_count)?;
    let primes = first_primes(cfg.prime_count);
    let listing: Vec<String> = primes.iter().map(u64::to_string).collect();
    writeln!(out, "{}", listing.join(", "))?;

    writeln!(out, "\n=== Demonstration Complete ===")?;
    info!(
        rejected,
        accepted = accepted.len(),
        primes = primes.len(),
        "demo finished"
    );

    Ok(DemoSummary {
        rejected,
        accepted,
        benchmark_prime,
        benchmark_elapsed,
        within_budget,
        primes,
    })
}

/// Short description of an input for the error demonstration lines.
///
/// Numbers are named by the rule they break; other values by their type.
fn input_label(candidate: &Candidate) -> String {
    let label = match candidate {
        Candidate::Number(value) if value.is_nan() => "NaN",
        Candidate::Number(value) if *value == f64::INFINITY => "Infinity",
        Candidate::Number(value) if *value == f64::NEG_INFINITY => "-Infinity",
        Candidate::Number(value) if value.fract() != 0.0 => "float",
        Candidate::Number(value) if *value == 0.0 => "zero",
        Candidate::Number(value) if *value < 0.0 => "negative",
        Candidate::Int(0) | Candidate::UInt(0) => "zero",
        Candidate::Int(value) if *value < 0 => "negative",
        other if other.is_numeric() => "number",
        other => return format!("{} input", other.type_name()),
    };
    label.to_string()
}

fn write_section<W: Write>(out: &mut W, title: &str, values: &[u64]) -> Result<()> {
    writeln!(out, "\n{}:", title)?;
    for &value in values {
        let result = is_prime(value).with_context(|| format!("check {}", value))?;
        writeln!(out, "is_prime({}) = {}", value, result)?;
    }
    Ok(())
}

/// The first `count` primes, found by checking 2, 3, 4, ... in turn.
pub fn first_primes(count: usize) -> Vec<u64> {
    let mut primes = Vec::new();
    let mut candidate: u64 = 2;
    while primes.len() < count {
        if is_prime(candidate) == Ok(true) {
            primes.push(candidate);
        }
        candidate += 1;
    }
    primes
}
