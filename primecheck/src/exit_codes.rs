//! Stable exit codes for `primecheck` CLI commands.

/// Command succeeded; every checked value is prime.
pub const OK: i32 = 0;
/// Command failed due to bad arguments, an invalid config, or an I/O error.
pub const INVALID: i32 = 1;
/// `primecheck check` found at least one value that is not prime.
pub const COMPOSITE: i32 = 2;
/// `primecheck check` rejected at least one value during validation.
pub const REJECTED: i32 = 3;
