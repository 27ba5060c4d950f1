//! Day 13: Point of Incidence

use crate::utils::grid::Grid;
use crate::utils::parse::invalid;
use anyhow::Context;
use aoc_harness::{Answer, AocParser, Expected, InputKind, ParseError, SolveError, Solver};
use aoc_harness_macros::AutoRegisterSolver;

#[derive(AutoRegisterSolver)]
#[aoc(day = 13, tags = ["grid"])]
pub struct Day13;

/// Row count above a horizontal mirror line with exactly `smudges` differing cells
fn mirror_row(grid: &Grid<u8>, smudges: usize) -> Option<usize> {
    (1..grid.height()).find(|&line| {
        let pairs = line.min(grid.height() - line);
        (0..pairs)
            .map(|i| {
                let (above, below) = (grid.row(line - 1 - i), grid.row(line + i));
                above.iter().zip(below).filter(|(a, b)| a != b).count()
            })
            .sum::<usize>()
            == smudges
    })
}

fn summarize(patterns: &[Grid<u8>], smudges: usize) -> Result<Answer, SolveError> {
    patterns
        .iter()
        .enumerate()
        .map(|(idx, grid)| {
            mirror_row(grid, smudges)
                .map(|rows| rows * 100)
                .or_else(|| mirror_row(&grid.transpose(), smudges))
                .ok_or_else(|| {
                    SolveError::Unsolvable(format!("pattern {} has no mirror line", idx + 1))
                })
        })
        .sum::<Result<usize, _>>()
        .map(Answer::from)
}

impl AocParser for Day13 {
    type Parsed = Vec<Grid<u8>>;

    fn parse(input: &str) -> Result<Self::Parsed, ParseError> {
        input
            .replace("\r\n", "\n")
            .split("\n\n")
            .filter(|block| !block.trim().is_empty())
            .enumerate()
            .map(|(idx, block)| {
                Grid::parse(block.trim()).with_context(|| format!("pattern {}", idx + 1))
            })
            .collect::<anyhow::Result<_>>()
            .map_err(invalid)
    }
}

impl Solver for Day13 {
    const PART_1_EXPECTED: Expected = Expected::Int(405);
    const PART_2_EXPECTED: Expected = Expected::Int(400);

    fn part_1(patterns: &Self::Parsed, _: InputKind) -> Result<Answer, SolveError> {
        summarize(patterns, 0)
    }

    fn part_2(patterns: &Self::Parsed, _: InputKind) -> Result<Answer, SolveError> {
        summarize(patterns, 1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::days::solve_sample;
    use aoc_harness::Part;

    #[test]
    fn test_samples() {
        assert_eq!(solve_sample::<Day13>(sample!(13, 1), Part::One), Answer::Int(405));
        assert_eq!(solve_sample::<Day13>(sample!(13, 2), Part::Two), Answer::Int(400));
    }

    #[test]
    fn test_mirror_lines_of_sample() {
        let patterns = Day13::parse(sample!(13, 1)).unwrap();
        assert_eq!(mirror_row(&patterns[0].transpose(), 0), Some(5));
        assert_eq!(mirror_row(&patterns[1], 0), Some(4));
        assert_eq!(mirror_row(&patterns[0], 1), Some(3));
        assert_eq!(mirror_row(&patterns[1], 1), Some(1));
    }
}
