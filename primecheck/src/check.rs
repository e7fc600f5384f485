//! Check helpers for `primecheck check`.

use serde::Serialize;

use crate::core::candidate::Candidate;
use crate::core::error::ErrorKind;
use crate::core::is_prime;
use crate::exit_codes;

/// Structured result of checking one command-line token.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum CheckOutcome {
    Prime,
    Composite,
    Rejected { kind: ErrorKind, message: String },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CheckReport {
    pub input: String,
    #[serde(flatten)]
    pub outcome: CheckOutcome,
}

impl CheckReport {
    /// Human-readable line for stdout.
    pub fn render(&self) -> String {
        match &self.outcome {
            CheckOutcome::Prime => format!("is_prime({}) = true", self.input),
            CheckOutcome::Composite => format!("is_prime({}) = false", self.input),
            CheckOutcome::Rejected { kind, message } => {
                format!("is_prime({}) rejected ({}): {}", self.input, kind, message)
            }
        }
    }
}

/// Parse `token` as a candidate and check it.
pub fn check_token(token: &str) -> CheckReport {
    let outcome = match is_prime(Candidate::parse(token)) {
        Ok(true) => CheckOutcome::Prime,
        Ok(false) => CheckOutcome::Composite,
        Err(err) => CheckOutcome::Rejected {
            kind: err.kind(),
            message: err.to_string(),
        },
    };
    CheckReport {
        input: token.to_string(),
        outcome,
    }
}

/// Exit code summarizing a batch of reports.
///
/// Any rejection outranks any composite; an empty batch is `OK`.
pub fn exit_code(reports: &[CheckReport]) -> i32 {
    let rejected = reports
        .iter()
        .any(|report| matches!(report.outcome, CheckOutcome::Rejected { .. }));
    if rejected {
        return exit_codes::REJECTED;
    }
    let composite = reports
        .iter()
        .any(|report| report.outcome == CheckOutcome::Composite);
    if composite {
        return exit_codes::COMPOSITE;
    }
    exit_codes::OK
}
