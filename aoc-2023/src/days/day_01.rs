//! Day 1: Trebuchet?!

use aoc_harness::{Answer, AocParser, Expected, InputKind, ParseError, SolveError, Solver};
use aoc_harness_macros::AutoRegisterSolver;

#[derive(AutoRegisterSolver)]
#[aoc(day = 1, tags = ["parsing"])]
pub struct Day1;

const WORDS: [&str; 9] = [
    "one", "two", "three", "four", "five", "six", "seven", "eight", "nine",
];

/// The digit starting at byte `i`, optionally accepting spelled-out words
fn digit_at(line: &str, i: usize, spelled: bool) -> Option<u32> {
    let rest = &line.as_bytes()[i..];
    if let digit @ b'1'..=b'9' = rest[0] {
        return Some(u32::from(digit - b'0'));
    }
    if !spelled {
        return None;
    }
    WORDS
        .iter()
        .position(|word| rest.starts_with(word.as_bytes()))
        .map(|idx| idx as u32 + 1)
}

/// First digit times ten plus last digit; words may overlap ("twone")
fn calibration_value(line: &str, spelled: bool) -> Option<u32> {
    let first = (0..line.len()).find_map(|i| digit_at(line, i, spelled))?;
    let last = (0..line.len()).rev().find_map(|i| digit_at(line, i, spelled))?;
    Some(first * 10 + last)
}

fn total(lines: &[String], spelled: bool) -> Result<Answer, SolveError> {
    lines
        .iter()
        .enumerate()
        .map(|(idx, line)| {
            calibration_value(line, spelled)
                .ok_or_else(|| SolveError::Unsolvable(format!("line {} has no digit", idx + 1)))
        })
        .sum::<Result<u32, _>>()
        .map(Answer::from)
}

impl AocParser for Day1 {
    type Parsed = Vec<String>;

    fn parse(input: &str) -> Result<Self::Parsed, ParseError> {
        Ok(input
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(str::to_string)
            .collect())
    }
}

impl Solver for Day1 {
    const PART_1_EXPECTED: Expected = Expected::Int(142);
    const PART_2_EXPECTED: Expected = Expected::Int(281);

    fn part_1(lines: &Self::Parsed, _: InputKind) -> Result<Answer, SolveError> {
        total(lines, false)
    }

    fn part_2(lines: &Self::Parsed, _: InputKind) -> Result<Answer, SolveError> {
        total(lines, true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::days::solve_sample;
    use aoc_harness::Part;

    #[test]
    fn test_samples() {
        assert_eq!(solve_sample::<Day1>(sample!(1, 1), Part::One), Answer::Int(142));
        assert_eq!(solve_sample::<Day1>(sample!(1, 2), Part::Two), Answer::Int(281));
    }

    #[test]
    fn test_overlapping_words() {
        assert_eq!(calibration_value("twone", true), Some(21));
        assert_eq!(calibration_value("eightwothree", true), Some(83));
        assert_eq!(calibration_value("eightwothree", false), None);
    }

    #[test]
    fn test_zero_is_not_a_digit() {
        assert_eq!(calibration_value("0a5b0", false), Some(55));
        assert_eq!(calibration_value("zero0", true), None);
    }
}
