//! Trial-division primality checking for dynamically-typed inputs.
//!
//! The crate keeps a strict separation between the predicate and its
//! consumers:
//!
//! - **[`core`]**: Pure, deterministic logic (candidate model, validation,
//!   trial division). No I/O, no logging, safe to call from any thread.
//! - **[`io`]**: Side-effecting helpers (demo configuration on disk).
//!
//! Orchestration modules ([`check`], [`demo`]) drive the core on behalf of
//! the `primecheck` CLI.

pub mod check;
pub mod core;
pub mod demo;
pub mod exit_codes;
pub mod io;
pub mod logging;
#[cfg(any(test, feature = "test-support"))]
pub mod test_support;

pub use crate::core::candidate::Candidate;
pub use crate::core::error::{ErrorKind, PrimeError};
pub use crate::core::is_prime;
