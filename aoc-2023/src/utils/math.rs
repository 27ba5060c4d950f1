//! Number theory helpers

/// Greatest common divisor by Euclid's algorithm; `gcd(a, 0) == a`
pub fn gcd(mut a: u64, mut b: u64) -> u64 {
    while b != 0 {
        (a, b) = (b, a % b);
    }
    a
}

/// Least common multiple of all values, `None` when there are none
///
/// Reduces pairwise with `a / gcd(a, b) * b`. All-zero input divides by zero.
pub fn lcm<I: IntoIterator<Item = u64>>(values: I) -> Option<u64> {
    values.into_iter().reduce(|a, b| a / gcd(a, b) * b)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_known_values() {
        assert_eq!(gcd(12, 18), 6);
        assert_eq!(gcd(7, 0), 7);
        assert_eq!(lcm([4, 6]), Some(12));
        assert_eq!(lcm([2, 3, 4]), Some(12));
        assert_eq!(lcm(std::iter::empty()), None);
    }

    proptest! {
        #[test]
        fn prop_gcd_symmetric(a in 0u64..1_000_000, b in 0u64..1_000_000) {
            prop_assert_eq!(gcd(a, b), gcd(b, a));
        }

        #[test]
        fn prop_gcd_with_zero(a in 0u64..1_000_000) {
            prop_assert_eq!(gcd(a, 0), a);
        }

        #[test]
        fn prop_gcd_divides_both(a in 1u64..1_000_000, b in 1u64..1_000_000) {
            let g = gcd(a, b);
            prop_assert_eq!(a % g, 0);
            prop_assert_eq!(b % g, 0);
        }

        #[test]
        fn prop_lcm_is_least_common_multiple(a in 1u64..60, b in 1u64..60, c in 1u64..60) {
            let l = lcm([a, b, c]).unwrap();
            prop_assert_eq!(l % a, 0);
            prop_assert_eq!(l % b, 0);
            prop_assert_eq!(l % c, 0);
            prop_assert!((1..l).all(|m| m % a != 0 || m % b != 0 || m % c != 0));
        }
    }
}
