//! Case execution against `primecheck::is_prime`.

use std::time::{Duration, Instant};

use primecheck::{Candidate, ErrorKind, PrimeError, is_prime};
use serde::Serialize;
use tracing::{debug, instrument};

use crate::case::{CaseSpec, Expect};

/// Result of running one case.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CaseResult {
    pub name: String,
    pub passed: bool,
    /// Why the case failed; `None` when it passed.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
}

/// Run every case in order.
#[instrument(skip_all, fields(cases = cases.len()))]
pub fn run_all(cases: &[CaseSpec]) -> Vec<CaseResult> {
    cases.iter().map(run_case).collect()
}

pub fn run_case(case: &CaseSpec) -> CaseResult {
    let start = Instant::now();
    let observed = is_prime(Candidate::parse(&case.input));
    let elapsed = start.elapsed();
    debug!(name = case.name.as_str(), elapsed_us = elapsed.as_micros() as u64, "case ran");

    let detail = judge(case, &observed, elapsed);
    CaseResult {
        name: case.name.clone(),
        passed: detail.is_none(),
        detail,
    }
}

/// Compare an observation with the case expectation. `None` means pass.
fn judge(case: &CaseSpec, observed: &Result<bool, PrimeError>, elapsed: Duration) -> Option<String> {
    let matches = match (case.expect, observed) {
        (Expect::Prime, Ok(true)) | (Expect::Composite, Ok(false)) => true,
        (Expect::InvalidType, Err(err)) => err.kind() == ErrorKind::InvalidType,
        (Expect::InvalidRange, Err(err)) => err.kind() == ErrorKind::InvalidRange,
        _ => false,
    };
    if !matches {
        return Some(format!(
            "Expected {}, but got {}",
            describe_expect(case.expect),
            describe_observed(observed)
        ));
    }

    if let (Some(needle), Err(err)) = (&case.message, observed) {
        let message = err.to_string();
        if !message.contains(needle.as_str()) {
            return Some(format!(
                "Expected message containing {:?}, but got {:?}",
                needle, message
            ));
        }
    }

    if let Some(limit_ms) = case.within_ms
        && elapsed > Duration::from_millis(limit_ms)
    {
        return Some(format!(
            "Expected completion within {}ms, but took {}ms",
            limit_ms,
            elapsed.as_millis()
        ));
    }

    None
}

fn describe_expect(expect: Expect) -> &'static str {
    match expect {
        Expect::Prime => "prime",
        Expect::Composite => "composite",
        Expect::InvalidType => "invalid_type",
        Expect::InvalidRange => "invalid_range",
    }
}

fn describe_observed(observed: &Result<bool, PrimeError>) -> String {
    match observed {
        Ok(true) => "prime".to_string(),
        Ok(false) => "composite".to_string(),
        Err(err) => format!("{}: {}", err.kind(), err),
    }
}
