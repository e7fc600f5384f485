//! Test-only helpers: a definitional oracle and temp config directories.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tempfile::TempDir;

use crate::io::config::{DemoConfig, write_config};

/// Primality straight from the definition: `n >= 2` with no divisor in `2..n`.
///
/// Linear in `n`; only for cross-checking small ranges.
pub fn is_prime_by_definition(n: u64) -> bool {
    n >= 2 && (2..n).all(|divisor| n % divisor != 0)
}

/// A temporary working directory holding a demo config.
pub struct ConfigDir {
    temp: TempDir,
    pub config_path: PathBuf,
}

impl ConfigDir {
    /// Create a temp dir with `cfg` written to `primecheck.toml`.
    pub fn with_config(cfg: &DemoConfig) -> Result<Self> {
        let temp = tempfile::tempdir().context("create temp dir")?;
        let config_path = temp.path().join("primecheck.toml");
        write_config(&config_path, cfg)?;
        Ok(Self { temp, config_path })
    }

    /// Create an empty temp dir (no config file).
    pub fn empty() -> Result<Self> {
        let temp = tempfile::tempdir().context("create temp dir")?;
        let config_path = temp.path().join("primecheck.toml");
        Ok(Self { temp, config_path })
    }

    pub fn path(&self) -> &Path {
        self.temp.path()
    }
}
