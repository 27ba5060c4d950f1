//! Day 21: Step Counter

use crate::utils::grid::Grid;
use crate::utils::parse::invalid;
use aoc_harness::{Answer, AocParser, Expected, InputKind, ParseError, SolveError, Solver};
use aoc_harness_macros::AutoRegisterSolver;
use std::collections::{HashMap, VecDeque};

#[derive(AutoRegisterSolver)]
#[aoc(day = 21, tags = ["grid", "search", "math"])]
pub struct Day21;

const SAMPLE_STEPS: u64 = 6;
const REAL_STEPS: u64 = 64;
const INFINITE_STEPS: u64 = 26_501_365;

pub struct Garden {
    grid: Grid<u8>,
    start: (i64, i64),
}

impl Garden {
    fn is_plot(&self, (row, col): (i64, i64), wrap: bool) -> bool {
        let (h, w) = (self.grid.height() as i64, self.grid.width() as i64);
        let (row, col) = if wrap {
            (row.rem_euclid(h), col.rem_euclid(w))
        } else {
            (row, col)
        };
        self.grid.get(row, col).is_some_and(|&tile| tile != b'#')
    }

    /// Plots reachable in exactly `steps` steps, tiling the map when `wrap` is set
    fn reachable(&self, steps: u64, wrap: bool) -> u64 {
        let mut dist: HashMap<(i64, i64), u64> = HashMap::from([(self.start, 0)]);
        let mut queue = VecDeque::from([(self.start, 0u64)]);

        while let Some(((row, col), d)) = queue.pop_front() {
            if d == steps {
                continue;
            }
            for next in [(row - 1, col), (row + 1, col), (row, col - 1), (row, col + 1)] {
                if self.is_plot(next, wrap) && !dist.contains_key(&next) {
                    dist.insert(next, d + 1);
                    queue.push_back((next, d + 1));
                }
            }
        }
        // a plot reached earlier can be revisited by stepping back and forth
        dist.values().filter(|&&d| d % 2 == steps % 2).count() as u64
    }
}

impl AocParser for Day21 {
    type Parsed = Garden;

    fn parse(input: &str) -> Result<Self::Parsed, ParseError> {
        let grid = Grid::parse(input.trim()).map_err(invalid)?;
        let starts: Vec<_> = grid
            .iter()
            .filter(|(_, tile)| **tile == b'S')
            .map(|(pos, _)| pos)
            .collect();
        let &[(row, col)] = starts.as_slice() else {
            return Err(ParseError::InvalidFormat(format!(
                "expected one start, found {}",
                starts.len()
            )));
        };
        Ok(Garden {
            grid,
            start: (row as i64, col as i64),
        })
    }
}

impl Solver for Day21 {
    const PART_1_EXPECTED: Expected = Expected::Int(16);

    fn part_1(garden: &Self::Parsed, kind: InputKind) -> Result<Answer, SolveError> {
        let steps = if kind.is_sample() { SAMPLE_STEPS } else { REAL_STEPS };
        Ok(garden.reachable(steps, false).into())
    }

    /// The reachable count grows quadratically in whole map widths, so three
    /// samples at `r`, `r + n` and `r + 2n` steps determine it.
    fn part_2(garden: &Self::Parsed, _: InputKind) -> Result<Answer, SolveError> {
        let n = garden.grid.width() as u64;
        if garden.grid.height() as u64 != n {
            return Err(SolveError::Unsolvable("the garden is not square".into()));
        }
        let (k, r) = (INFINITE_STEPS / n, INFINITE_STEPS % n);
        let [a0, a1, a2] = [r, r + n, r + 2 * n].map(|s| garden.reachable(s, true) as i128);

        let k = i128::from(k);
        let second_diff = a2 - 2 * a1 + a0;
        Ok(Answer::Int(a0 + k * (a1 - a0) + k * (k - 1) / 2 * second_diff))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::days::solve_sample;
    use aoc_harness::Part;

    #[test]
    fn test_sample() {
        assert_eq!(solve_sample::<Day21>(sample!(21, 1), Part::One), Answer::Int(16));
    }

    #[test]
    fn test_infinite_map_counts() {
        let garden = Day21::parse(sample!(21, 1)).unwrap();
        assert_eq!(garden.reachable(6, true), 16);
        assert_eq!(garden.reachable(10, true), 50);
        assert_eq!(garden.reachable(50, true), 1594);
    }

    #[test]
    fn test_start_required() {
        assert!(Day21::parse("...\n.#.").is_err());
    }
}
