//! Day 11: Cosmic Expansion

use crate::utils::grid::Grid;
use crate::utils::parse::invalid;
use aoc_harness::{Answer, AocParser, Expected, InputKind, ParseError, SolveError, Solver};
use aoc_harness_macros::AutoRegisterSolver;
use itertools::Itertools;

#[derive(AutoRegisterSolver)]
#[aoc(day = 11, tags = ["grid"])]
pub struct Day11;

pub struct Image {
    galaxies: Vec<(usize, usize)>,
    empty_rows: Vec<usize>,
    empty_cols: Vec<usize>,
}

impl Image {
    /// Sum of pairwise distances after every empty line grows `factor` times wider
    fn distances(&self, factor: u64) -> u64 {
        let grow = |coord: usize, empty: &[usize]| {
            let before = empty.partition_point(|&e| e < coord) as u64;
            coord as u64 + before * (factor - 1)
        };
        let expanded: Vec<(u64, u64)> = self
            .galaxies
            .iter()
            .map(|&(r, c)| (grow(r, &self.empty_rows), grow(c, &self.empty_cols)))
            .collect();
        expanded
            .iter()
            .tuple_combinations()
            .map(|(a, b)| a.0.abs_diff(b.0) + a.1.abs_diff(b.1))
            .sum()
    }
}

impl AocParser for Day11 {
    type Parsed = Image;

    fn parse(input: &str) -> Result<Self::Parsed, ParseError> {
        let grid = Grid::parse(input.trim()).map_err(invalid)?;
        let galaxies: Vec<_> = grid
            .iter()
            .filter(|(_, cell)| **cell == b'#')
            .map(|(pos, _)| pos)
            .collect();
        let empty_rows = (0..grid.height())
            .filter(|&r| galaxies.iter().all(|g| g.0 != r))
            .collect();
        let empty_cols = (0..grid.width())
            .filter(|&c| galaxies.iter().all(|g| g.1 != c))
            .collect();
        Ok(Image {
            galaxies,
            empty_rows,
            empty_cols,
        })
    }
}

impl Solver for Day11 {
    const PART_1_EXPECTED: Expected = Expected::Int(374);
    const PART_2_EXPECTED: Expected = Expected::Int(82000210);

    fn part_1(image: &Self::Parsed, _: InputKind) -> Result<Answer, SolveError> {
        Ok(image.distances(2).into())
    }

    fn part_2(image: &Self::Parsed, _: InputKind) -> Result<Answer, SolveError> {
        Ok(image.distances(1_000_000).into())
    }
}
