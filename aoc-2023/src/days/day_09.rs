//! Day 9: Mirage Maintenance

use crate::utils::parse::parse_lines;
use aoc_harness::{Answer, AocParser, Expected, InputKind, ParseError, SolveError, Solver};
use aoc_harness_macros::AutoRegisterSolver;
use itertools::Itertools;

#[derive(AutoRegisterSolver)]
#[aoc(day = 9)]
pub struct Day9;

/// Next value of a sequence by repeated differences
fn extrapolate(values: &[i64]) -> i64 {
    if values.iter().all(|v| *v == 0) {
        return 0;
    }
    let diffs: Vec<i64> = values.iter().tuple_windows().map(|(a, b)| b - a).collect();
    values.last().copied().unwrap_or(0) + extrapolate(&diffs)
}

impl AocParser for Day9 {
    type Parsed = Vec<Vec<i64>>;

    fn parse(input: &str) -> Result<Self::Parsed, ParseError> {
        parse_lines(input.trim(), |line| {
            Ok(line
                .split_whitespace()
                .map(str::parse)
                .collect::<Result<Vec<i64>, _>>()?)
        })
    }
}

impl Solver for Day9 {
    const PART_1_EXPECTED: Expected = Expected::Int(114);
    const PART_2_EXPECTED: Expected = Expected::Int(2);

    fn part_1(histories: &Self::Parsed, _: InputKind) -> Result<Answer, SolveError> {
        Ok(histories.iter().map(|h| extrapolate(h)).sum::<i64>().into())
    }

    fn part_2(histories: &Self::Parsed, _: InputKind) -> Result<Answer, SolveError> {
        Ok(histories
            .iter()
            .map(|h| {
                let reversed: Vec<i64> = h.iter().rev().copied().collect();
                extrapolate(&reversed)
            })
            .sum::<i64>()
            .into())
    }
}
