//! Trial division over odd candidate divisors.

/// Report whether `n` is prime by trial division.
///
/// Even numbers other than two are rejected without looping; odd `n` is
/// tested against every odd divisor from three up to `isqrt(n)`. Values below
/// two are not prime.
pub fn is_prime_u64(n: u64) -> bool {
    if n < 2 {
        return false;
    }
    if n == 2 {
        return true;
    }
    if n % 2 == 0 {
        return false;
    }
    let bound = n.isqrt();
    !(3..=bound).step_by(2).any(|divisor| n % divisor == 0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn one_is_not_prime() {
        assert!(!is_prime_u64(1));
    }

    #[test]
    fn two_is_the_only_even_prime() {
        assert!(is_prime_u64(2));
        assert!(!is_prime_u64(4));
        assert!(!is_prime_u64(982_451_654));
    }

    #[test]
    fn squares_of_odd_primes_hit_the_bound() {
        assert!(!is_prime_u64(9));
        assert!(!is_prime_u64(49));
        assert!(!is_prime_u64(121));
        assert!(!is_prime_u64(65_521 * 65_521));
    }

    #[test]
    fn large_word_values_terminate() {
        // Largest prime below 2^32 and a semiprime of the two largest primes below 2^16.
        assert!(is_prime_u64(4_294_967_291));
        assert!(!is_prime_u64(65_521 * 65_519));
    }
}
