//! Demo configuration stored in `primecheck.toml`.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result, anyhow};
use serde::{Deserialize, Serialize};

/// Default location of the demo config, relative to the working directory.
pub const DEFAULT_CONFIG_PATH: &str = "primecheck.toml";

/// Upper bound on how many primes the demo and `primecheck primes` enumerate.
pub const MAX_PRIME_COUNT: usize = 100_000;

/// Inputs driving `primecheck demo` (TOML).
///
/// Missing fields default to the stock demonstration values.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct DemoConfig {
    /// Values shown in the "Basic Usage" section.
    pub basic: Vec<u64>,

    /// Values shown in the "Edge Cases" section.
    pub edge: Vec<u64>,

    /// Values shown in the "Larger Numbers" section.
    pub larger: Vec<u64>,

    /// Command-line style tokens expected to be rejected (see `Candidate::parse`).
    pub invalid: Vec<String>,

    /// Large input timed in the "Performance Test" section.
    pub benchmark: u64,

    /// Wall-clock budget for the benchmark call, in milliseconds.
    pub perf_budget_ms: u64,

    /// How many primes to enumerate in the final section.
    pub prime_count: usize,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            basic: vec![2, 3, 4, 5, 17, 25],
            edge: vec![1, 2],
            larger: vec![97, 98, 99, 100, 101],
            invalid: [
                "\"5\"",
                "null",
                "undefined",
                "[]",
                "{}",
                "true",
                "NaN",
                "Infinity",
                "-Infinity",
                "3.14",
                "0",
                "-5",
            ]
            .iter()
            .map(|token| token.to_string())
            .collect(),
            benchmark: 982_451_653,
            perf_budget_ms: 100,
            prime_count: 20,
        }
    }
}

impl DemoConfig {
    pub fn validate(&self) -> Result<()> {
        if self.basic.is_empty() {
            return Err(anyhow!("basic must be a non-empty array"));
        }
        if self.edge.is_empty() {
            return Err(anyhow!("edge must be a non-empty array"));
        }
        if self.larger.is_empty() {
            return Err(anyhow!("larger must be a non-empty array"));
        }
        if self.invalid.is_empty() {
            return Err(anyhow!("invalid must be a non-empty array"));
        }
        if self.benchmark == 0 {
            return Err(anyhow!("benchmark must be >= 1"));
        }
        if self.perf_budget_ms == 0 {
            return Err(anyhow!("perf_budget_ms must be > 0"));
        }
        if self.prime_count == 0 {
            return Err(anyhow!("prime_count must be > 0"));
        }
        if self.prime_count > MAX_PRIME_COUNT {
            return Err(anyhow!("prime_count must be <= {}", MAX_PRIME_COUNT));
        }
        Ok(())
    }
}

/// Load config from a TOML file.
///
/// If the file is missing, returns `DemoConfig::default()`.
pub fn load_config(path: &Path) -> Result<DemoConfig> {
    if !path.exists() {
        let cfg = DemoConfig::default();
        cfg.validate()?;
        return Ok(cfg);
    }
    let contents = fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
    let cfg: DemoConfig =
        toml::from_str(&contents).with_context(|| format!("parse {}", path.display()))?;
    cfg.validate()
        .with_context(|| format!("validate {}", path.display()))?;
    Ok(cfg)
}

/// Atomically write config to disk (temp file + rename).
pub fn write_config(path: &Path, cfg: &DemoConfig) -> Result<()> {
    cfg.validate()?;
    let mut buf = toml::to_string_pretty(cfg).context("serialize config toml")?;
    buf.push('\n');
    write_atomic(path, &buf)
}

fn write_atomic(path: &Path, contents: &str) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("create directory {}", parent.display()))?;
    }
    let tmp_path = path.with_extension("toml.tmp");
    fs::write(&tmp_path, contents)
        .with_context(|| format!("write temp config {}", tmp_path.display()))?;
    fs::rename(&tmp_path, path).with_context(|| format!("replace config {}", path.display()))?;
    Ok(())
}
