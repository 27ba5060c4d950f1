//! Day 14: Parabolic Reflector Dish

use crate::utils::grid::Grid;
use crate::utils::parse::invalid;
use aoc_harness::{Answer, AocParser, Expected, InputKind, ParseError, SolveError, Solver};
use aoc_harness_macros::AutoRegisterSolver;
use std::collections::HashMap;

#[derive(AutoRegisterSolver)]
#[aoc(day = 14, tags = ["grid", "cycle"])]
pub struct Day14;

const SPIN_CYCLES: usize = 1_000_000_000;

/// Roll every round rock as far north as it goes
fn tilt_north(grid: &mut Grid<u8>) {
    for col in 0..grid.width() {
        let mut free = 0;
        for row in 0..grid.height() {
            match grid[(row, col)] {
                b'#' => free = row + 1,
                b'O' => {
                    grid[(row, col)] = b'.';
                    grid[(free, col)] = b'O';
                    free += 1;
                }
                _ => {}
            }
        }
    }
}

/// North, west, south, east: each tilt is followed by a clockwise turn
fn spin_cycle(grid: &Grid<u8>) -> Grid<u8> {
    let mut grid = grid.clone();
    for _ in 0..4 {
        tilt_north(&mut grid);
        grid = grid.rotate_cw();
    }
    grid
}

fn north_load(grid: &Grid<u8>) -> usize {
    grid.iter()
        .filter(|(_, cell)| **cell == b'O')
        .map(|((row, _), _)| grid.height() - row)
        .sum()
}

impl AocParser for Day14 {
    type Parsed = Grid<u8>;

    fn parse(input: &str) -> Result<Self::Parsed, ParseError> {
        Grid::parse(input.trim()).map_err(invalid)
    }
}

impl Solver for Day14 {
    const PART_1_EXPECTED: Expected = Expected::Int(136);
    const PART_2_EXPECTED: Expected = Expected::Int(64);

    fn part_1(grid: &Self::Parsed, _: InputKind) -> Result<Answer, SolveError> {
        let mut grid = grid.clone();
        tilt_north(&mut grid);
        Ok(north_load(&grid).into())
    }

    fn part_2(grid: &Self::Parsed, _: InputKind) -> Result<Answer, SolveError> {
        let mut seen: HashMap<Grid<u8>, usize> = HashMap::new();
        let mut grid = grid.clone();
        let mut done = 0;

        while done < SPIN_CYCLES {
            if let Some(first) = seen.insert(grid.clone(), done) {
                let period = done - first;
                for _ in 0..(SPIN_CYCLES - done) % period {
                    grid = spin_cycle(&grid);
                }
                break;
            }
            grid = spin_cycle(&grid);
            done += 1;
        }
        Ok(north_load(&grid).into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::days::solve_sample;
    use aoc_harness::Part;

    #[test]
    fn test_samples() {
        assert_eq!(solve_sample::<Day14>(sample!(14, 1), Part::One), Answer::Int(136));
        assert_eq!(solve_sample::<Day14>(sample!(14, 2), Part::Two), Answer::Int(64));
    }

    #[test]
    fn test_one_spin_cycle() {
        let grid = Day14::parse(sample!(14, 1)).unwrap();
        let expected = Grid::parse(
            ".....#....\n....#...O#\n...OO##...\n.OO#......\n.....OOO#.\n\
             .O#...O#.#\n....O#....\n......OOOO\n#...O###..\n#..OO#....",
        )
        .unwrap();
        assert_eq!(spin_cycle(&grid), expected);
    }
}
