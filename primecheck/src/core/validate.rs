//! Ordered input validation for primality queries.

use super::candidate::{Candidate, render_number};
use super::error::PrimeError;

/// 2^64 as a float; integral floats at or above it do not fit a `u64`.
const WORD_LIMIT: f64 = 18_446_744_073_709_551_616.0;

/// The integer a validated candidate denotes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Domain {
    /// A positive integer that fits a machine word.
    Word(u64),
    /// An integral float at or above 2^64. Every such value is a multiple of two.
    Wide,
}

/// Validate `candidate`, stopping at the first violated rule.
///
/// Rules, in order:
/// 1. numeric type
/// 2. not NaN
/// 3. finite
/// 4. integral
/// 5. at least one
pub fn validate(candidate: &Candidate) -> Result<Domain, PrimeError> {
    match candidate {
        Candidate::Number(value) => validate_float(*value),
        Candidate::Int(value) => match u64::try_from(*value) {
            Ok(n) if n >= 1 => Ok(Domain::Word(n)),
            _ => Err(PrimeError::NonPositive {
                received: value.to_string(),
            }),
        },
        Candidate::UInt(0) => Err(PrimeError::NonPositive {
            received: "0".to_string(),
        }),
        Candidate::UInt(n) => Ok(Domain::Word(*n)),
        other => Err(PrimeError::NotNumeric {
            type_name: other.type_name(),
            received: other.to_string(),
        }),
    }
}

fn validate_float(value: f64) -> Result<Domain, PrimeError> {
    if value.is_nan() {
        return Err(PrimeError::NotANumber);
    }
    if value.is_infinite() {
        return Err(PrimeError::NonFinite {
            received: render_number(value),
        });
    }
    if value.fract() != 0.0 {
        return Err(PrimeError::Fractional {
            received: render_number(value),
        });
    }
    if value < 1.0 {
        return Err(PrimeError::NonPositive {
            received: render_number(value),
        });
    }
    if value >= WORD_LIMIT {
        return Ok(Domain::Wide);
    }
    // Integral and within [1, 2^64), so the cast is exact.
    Ok(Domain::Word(value as u64))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::error::ErrorKind;

    fn kind_of(candidate: Candidate) -> ErrorKind {
        validate(&candidate).expect_err("expected rejection").kind()
    }

    #[test]
    fn non_numeric_values_are_type_errors() {
        assert_eq!(kind_of(Candidate::from("5")), ErrorKind::InvalidType);
        assert_eq!(kind_of(Candidate::Null), ErrorKind::InvalidType);
        assert_eq!(kind_of(Candidate::Undefined), ErrorKind::InvalidType);
        assert_eq!(kind_of(Candidate::List(Vec::new())), ErrorKind::InvalidType);
        assert_eq!(kind_of(Candidate::Bool(true)), ErrorKind::InvalidType);
    }

    #[test]
    fn nan_is_checked_before_finiteness() {
        assert_eq!(
            validate(&Candidate::Number(f64::NAN)),
            Err(PrimeError::NotANumber)
        );
    }

    #[test]
    fn range_rules_apply_in_order() {
        assert!(matches!(
            validate(&Candidate::Number(f64::NEG_INFINITY)),
            Err(PrimeError::NonFinite { .. })
        ));
        // Fractional wins over non-positive for negative fractions.
        assert!(matches!(
            validate(&Candidate::Number(-2.7)),
            Err(PrimeError::Fractional { .. })
        ));
        assert!(matches!(
            validate(&Candidate::Number(-0.0)),
            Err(PrimeError::NonPositive { received }) if received == "0"
        ));
        assert!(matches!(
            validate(&Candidate::Int(-10)),
            Err(PrimeError::NonPositive { received }) if received == "-10"
        ));
        assert!(matches!(
            validate(&Candidate::UInt(0)),
            Err(PrimeError::NonPositive { .. })
        ));
    }

    #[test]
    fn accepted_values_map_to_their_integer() {
        assert_eq!(validate(&Candidate::Number(97.0)), Ok(Domain::Word(97)));
        assert_eq!(validate(&Candidate::Int(1)), Ok(Domain::Word(1)));
        assert_eq!(
            validate(&Candidate::UInt(u64::MAX)),
            Ok(Domain::Word(u64::MAX))
        );
        assert_eq!(validate(&Candidate::Number(WORD_LIMIT)), Ok(Domain::Wide));
    }
}
