//! Closed-form solvability test.

use crate::core::types::Capacities;

/// Greatest common divisor (Euclid). `gcd(0, 0) == 0`.
pub fn gcd(mut x: u32, mut y: u32) -> u32 {
    while y != 0 {
        (x, y) = (y, x % y);
    }
    x
}

/// True iff `goal` can be measured with the two jugs.
///
/// The goal must fit in the larger jug and be a multiple of
/// `gcd(caps.a, caps.b)`. Zero capacities are never solvable.
pub fn is_solvable(caps: Capacities, goal: u32) -> bool {
    let divisor = gcd(caps.a, caps.b);
    divisor != 0 && goal <= caps.max() && goal % divisor == 0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gcd_matches_known_values() {
        assert_eq!(gcd(3, 5), 1);
        assert_eq!(gcd(2, 6), 2);
        assert_eq!(gcd(12, 18), 6);
        assert_eq!(gcd(7, 0), 7);
        assert_eq!(gcd(0, 0), 0);
    }

    #[test]
    fn classic_cases() {
        let cases = [
            (3, 5, 4, true),
            (2, 6, 4, true),
            (2, 4, 3, false),
            (7, 11, 6, true),
            (1, 1, 1, true),
        ];
        for (a, b, goal, expected) in cases {
            assert_eq!(
                is_solvable(Capacities::new(a, b), goal),
                expected,
                "A={a} B={b} goal={goal}"
            );
        }
    }

    #[test]
    fn goal_larger_than_both_jugs_is_unsolvable() {
        assert!(!is_solvable(Capacities::new(3, 5), 6));
        assert!(!is_solvable(Capacities::new(3, 5), 8));
    }

    #[test]
    fn zero_capacities_are_unsolvable() {
        assert!(!is_solvable(Capacities::new(0, 0), 1));
    }
}
