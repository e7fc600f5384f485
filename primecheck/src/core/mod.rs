//! Deterministic, pure primality logic.
//!
//! Core modules must be free of I/O side effects. Every call is independent:
//! there is no memoization and no shared state.

pub mod candidate;
pub mod error;
pub mod trial_division;
pub mod validate;

use self::candidate::Candidate;
use self::error::PrimeError;
use self::validate::{Domain, validate};

/// Report whether `value` is a prime number.
///
/// Validation runs first and short-circuits at the first violated rule:
/// non-numeric values and NaN are [`ErrorKind::InvalidType`]; infinities,
/// fractions, and values below one are [`ErrorKind::InvalidRange`].
///
/// [`ErrorKind::InvalidType`]: self::error::ErrorKind::InvalidType
/// [`ErrorKind::InvalidRange`]: self::error::ErrorKind::InvalidRange
///
/// # Example
/// ```
/// use primecheck::{ErrorKind, is_prime};
///
/// assert_eq!(is_prime(17), Ok(true));
/// assert_eq!(is_prime(25), Ok(false));
/// assert_eq!(is_prime(-5).unwrap_err().kind(), ErrorKind::InvalidRange);
/// assert_eq!(is_prime("5").unwrap_err().kind(), ErrorKind::InvalidType);
/// ```
pub fn is_prime(value: impl Into<Candidate>) -> Result<bool, PrimeError> {
    let candidate = value.into();
    match validate(&candidate)? {
        Domain::Word(n) => Ok(trial_division::is_prime_u64(n)),
        Domain::Wide => Ok(false),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::error::ErrorKind;

    #[test]
    fn small_values_follow_convention() {
        assert_eq!(is_prime(1), Ok(false));
        assert_eq!(is_prime(2), Ok(true));
        assert_eq!(is_prime(3), Ok(true));
        assert_eq!(is_prime(4), Ok(false));
    }

    #[test]
    fn integral_floats_are_checked_like_integers() {
        assert_eq!(is_prime(17.0), Ok(true));
        assert_eq!(is_prime(25.0), Ok(false));
    }

    #[test]
    fn floats_beyond_u64_are_even_and_not_prime() {
        assert_eq!(is_prime(1.0e20), Ok(false));
        assert_eq!(is_prime(f64::MAX), Ok(false));
    }

    #[test]
    fn validation_runs_before_the_algorithm() {
        let err = is_prime(0).expect_err("zero is rejected");
        assert_eq!(err.kind(), ErrorKind::InvalidRange);
        let err = is_prime(Candidate::Null).expect_err("null is rejected");
        assert_eq!(err.kind(), ErrorKind::InvalidType);
    }
}
