//! Pass/fail reporting for selftest runs.

use std::io::Write;

use anyhow::Result;
use serde::Serialize;

use crate::run::CaseResult;

#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize)]
pub struct ReportSummary {
    pub passed: usize,
    pub failed: usize,
    pub total: usize,
    /// Names of failed cases, in run order.
    pub failures: Vec<String>,
}

impl ReportSummary {
    pub fn all_passed(&self) -> bool {
        self.failed == 0
    }
}

pub fn summarize(results: &[CaseResult]) -> ReportSummary {
    let mut summary = ReportSummary {
        total: results.len(),
        ..ReportSummary::default()
    };
    for result in results {
        if result.passed {
            summary.passed += 1;
        } else {
            summary.failed += 1;
            summary.failures.push(result.name.clone());
        }
    }
    summary
}

/// Write one line per case followed by the totals.
pub fn write_report<W: Write>(out: &mut W, results: &[CaseResult], summary: &ReportSummary) -> Result<()> {
    writeln!(out, "Running is_prime contract cases...\n")?;
    for result in results {
        if result.passed {
            writeln!(out, "✅ {}", result.name)?;
        } else {
            writeln!(out, "❌ {}", result.name)?;
            if let Some(detail) = &result.detail {
                writeln!(out, "   Error: {}", detail)?;
            }
        }
    }
    writeln!(
        out,
        "\nTest Results: {} passed, {} failed",
        summary.passed, summary.failed
    )?;
    writeln!(out, "Total: {} tests", summary.total)?;
    if summary.all_passed() {
        writeln!(out, "\nAll tests passed!")?;
    } else {
        writeln!(out, "\n{} test(s) failed", summary.failed)?;
    }
    Ok(())
}
