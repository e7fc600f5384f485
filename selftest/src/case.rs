//! Case file parsing and validation.
//!
//! Case files are TOML documents listing single `[[case]]` entries and
//! `[[table]]` entries that expand to one case per value.
//! See `selftest/cases/` for the bundled file.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result, bail};
use serde::Deserialize;

/// The bundled contract cases.
pub const BUNDLED_CASES: &str = include_str!("../cases/contract.toml");

/// A parsed case file.
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
pub struct CaseFile {
    #[serde(default, rename = "case")]
    pub cases: Vec<CaseSpec>,
    #[serde(default, rename = "table")]
    pub tables: Vec<TableSpec>,
}

/// Expected result of checking one input.
#[derive(Debug, Clone, Copy, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Expect {
    Prime,
    Composite,
    InvalidType,
    InvalidRange,
}

impl Expect {
    pub fn is_error(self) -> bool {
        matches!(self, Expect::InvalidType | Expect::InvalidRange)
    }
}

/// A single named case.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct CaseSpec {
    pub name: String,
    /// Input token (`primecheck check` syntax).
    pub input: String,
    pub expect: Expect,
    /// Substring the error message must contain.
    pub message: Option<String>,
    /// Wall-clock bound for the call, in milliseconds.
    pub within_ms: Option<u64>,
}

/// A table of integer inputs sharing one expectation.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct TableSpec {
    /// Case names are `<label> <value>`.
    pub label: String,
    pub expect: Expect,
    pub values: Vec<i64>,
}

impl CaseFile {
    /// Load and validate a case file from the given path.
    pub fn load(path: &Path) -> Result<Self> {
        let contents =
            fs::read_to_string(path).with_context(|| format!("read cases {}", path.display()))?;
        Self::parse_str(&contents).with_context(|| format!("load cases {}", path.display()))
    }

    /// The case file compiled into the binary.
    pub fn bundled() -> Result<Self> {
        Self::parse_str(BUNDLED_CASES).context("load bundled cases")
    }

    pub fn parse_str(contents: &str) -> Result<Self> {
        let file: CaseFile = toml::from_str(contents).context("parse cases")?;
        file.validate()?;
        Ok(file)
    }

    fn validate(&self) -> Result<()> {
        if self.cases.is_empty() && self.tables.is_empty() {
            bail!("case file must define at least one case or table");
        }
        for (index, case) in self.cases.iter().enumerate() {
            case.validate()
                .with_context(|| format!("case[{}] invalid", index))?;
        }
        for (index, table) in self.tables.iter().enumerate() {
            if table.label.trim().is_empty() {
                bail!("table[{}].label must be non-empty", index);
            }
            if table.values.is_empty() {
                bail!("table[{}].values must be a non-empty array", index);
            }
        }
        Ok(())
    }

    /// Expand tables and return every case in file order (cases first).
    pub fn expand(&self) -> Vec<CaseSpec> {
        let mut all = self.cases.clone();
        for table in &self.tables {
            all.extend(table.values.iter().map(|value| CaseSpec {
                name: format!("{} {}", table.label, value),
                input: value.to_string(),
                expect: table.expect,
                message: None,
                within_ms: None,
            }));
        }
        all
    }
}

impl CaseSpec {
    fn validate(&self) -> Result<()> {
        if self.name.trim().is_empty() {
            bail!("name must be non-empty");
        }
        if self.input.trim().is_empty() {
            bail!("input must be non-empty");
        }
        if self.message.is_some() && !self.expect.is_error() {
            bail!("message is only allowed when expecting an error");
        }
        if self.within_ms == Some(0) {
            bail!("within_ms must be > 0");
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bundled_cases_parse() {
        let file = CaseFile::bundled().expect("bundled");
        assert!(!file.cases.is_empty());
        assert!(!file.tables.is_empty());
    }

    #[test]
    fn tables_expand_to_named_cases() {
        let file = CaseFile::parse_str(
            r#"
[[table]]
label = "prime"
expect = "prime"
values = [2, 3]
"#,
        )
        .expect("parse");
        let cases = file.expand();
        assert_eq!(cases.len(), 2);
        assert_eq!(cases[0].name, "prime 2");
        assert_eq!(cases[1].input, "3");
        assert_eq!(cases[1].expect, Expect::Prime);
    }

    #[test]
    fn empty_file_is_rejected() {
        let err = CaseFile::parse_str("").expect_err("empty");
        assert!(err.to_string().contains("at least one case"));
    }

    #[test]
    fn message_requires_error_expectation() {
        let err = CaseFile::parse_str(
            r#"
[[case]]
name = "seven"
input = "7"
expect = "prime"
message = "nope"
"#,
        )
        .expect_err("invalid");
        assert!(format!("{:#}", err).contains("message is only allowed"));
    }

    #[test]
    fn unknown_expectation_fails_to_parse() {
        let result = CaseFile::parse_str(
            r#"
[[case]]
name = "seven"
input = "7"
expect = "maybe"
"#,
        );
        assert!(result.is_err());
    }

    #[test]
    fn load_reads_from_disk() {
        let temp = tempfile::tempdir().expect("tempdir");
        let path = temp.path().join("cases.toml");
        fs::write(&path, BUNDLED_CASES).expect("write");
        let file = CaseFile::load(&path).expect("load");
        assert_eq!(file, CaseFile::bundled().expect("bundled"));
    }
}
