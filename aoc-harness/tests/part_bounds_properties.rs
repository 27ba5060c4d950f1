//! Property-based tests for part number validation

use aoc_harness::{Answer, AocParser, InputKind, ParseError, Part, SolveError, Solver, SolverExt};
use proptest::prelude::*;

/// Answers with the part number it was asked for
struct EchoPart;

impl AocParser for EchoPart {
    type Parsed = ();

    fn parse(_input: &str) -> Result<Self::Parsed, ParseError> {
        Ok(())
    }
}

impl Solver for EchoPart {
    fn part_1(_: &(), _: InputKind) -> Result<Answer, SolveError> {
        Ok(Answer::from("part1"))
    }

    fn part_2(_: &(), _: InputKind) -> Result<Answer, SolveError> {
        Ok(Answer::from("part2"))
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    /// Every part number except 1 and 2 is rejected with the number itself
    #[test]
    fn prop_out_of_range_rejection(part in 0u8..=255) {
        let result = Part::try_from(part);

        if part == 1 || part == 2 {
            prop_assert!(result.is_ok(), "Expected Ok for part {}", part);
        } else {
            match result {
                Err(SolveError::PartOutOfRange(p)) => prop_assert_eq!(p, part),
                other => prop_assert!(false, "Expected PartOutOfRange, got {:?}", other),
            }
        }
    }

    /// A valid number dispatches to the matching part
    #[test]
    fn prop_valid_range_delegation(part in 1u8..=2) {
        let answer = EchoPart::solve_part(&(), Part::try_from(part).unwrap(), InputKind::Real).unwrap();
        prop_assert_eq!(answer.to_string(), format!("part{}", part));
    }
}

#[cfg(test)]
mod unit_tests {
    use super::*;

    #[test]
    fn test_part_zero_rejected() {
        assert!(matches!(Part::try_from(0), Err(SolveError::PartOutOfRange(0))));
    }

    #[test]
    fn test_part_three_rejected() {
        let err = Part::try_from(3).unwrap_err();
        assert!(matches!(err, SolveError::PartOutOfRange(3)));
        assert_eq!(err.to_string(), "Part 3 is out of range");
    }

    #[test]
    fn test_part_numbers_round_trip() {
        for part in Part::ALL {
            assert_eq!(Part::try_from(part.number()).unwrap(), part);
        }
    }
}
