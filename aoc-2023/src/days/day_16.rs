//! Day 16: The Floor Will Be Lava

use crate::utils::grid::Grid;
use crate::utils::parse::invalid;
use anyhow::ensure;
use aoc_harness::{Answer, AocParser, Expected, InputKind, ParseError, SolveError, Solver};
use aoc_harness_macros::AutoRegisterSolver;

#[derive(AutoRegisterSolver)]
#[aoc(day = 16, tags = ["grid", "search"])]
pub struct Day16;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Dir {
    Up,
    Right,
    Down,
    Left,
}

impl Dir {
    fn bit(self) -> u8 {
        1 << self as u8
    }

    fn delta(self) -> (i64, i64) {
        match self {
            Dir::Up => (-1, 0),
            Dir::Right => (0, 1),
            Dir::Down => (1, 0),
            Dir::Left => (0, -1),
        }
    }
}

/// Directions a beam leaves a tile in when entering it heading `dir`
fn bounce(tile: u8, dir: Dir) -> (Dir, Option<Dir>) {
    use Dir::*;
    match (tile, dir) {
        (b'/', Right) => (Up, None),
        (b'/', Up) => (Right, None),
        (b'/', Left) => (Down, None),
        (b'/', Down) => (Left, None),
        (b'\\', Right) => (Down, None),
        (b'\\', Down) => (Right, None),
        (b'\\', Left) => (Up, None),
        (b'\\', Up) => (Left, None),
        (b'|', Right | Left) => (Up, Some(Down)),
        (b'-', Up | Down) => (Left, Some(Right)),
        _ => (dir, None),
    }
}

/// Tiles energized by a beam entering `start` heading `dir`
fn energize(grid: &Grid<u8>, start: (i64, i64), dir: Dir) -> usize {
    // directions already travelled through each tile
    let mut seen = vec![0u8; grid.width() * grid.height()];
    let mut beams = vec![(start, dir)];

    while let Some(((row, col), dir)) = beams.pop() {
        let Some(&tile) = grid.get(row, col) else {
            continue;
        };
        let idx = row as usize * grid.width() + col as usize;
        if seen[idx] & dir.bit() != 0 {
            continue;
        }
        seen[idx] |= dir.bit();

        let (first, second) = bounce(tile, dir);
        for next in std::iter::once(first).chain(second) {
            let (dr, dc) = next.delta();
            beams.push(((row + dr, col + dc), next));
        }
    }
    seen.iter().filter(|mask| **mask != 0).count()
}

impl AocParser for Day16 {
    type Parsed = Grid<u8>;

    fn parse(input: &str) -> Result<Self::Parsed, ParseError> {
        let grid = Grid::parse(input.trim()).map_err(invalid)?;
        let check = grid
            .iter()
            .try_for_each(|((r, c), tile)| -> anyhow::Result<()> {
                ensure!(
                    matches!(*tile, b'.' | b'/' | b'\\' | b'|' | b'-'),
                    "unexpected tile {:?} at row {} col {}",
                    *tile as char,
                    r + 1,
                    c + 1
                );
                Ok(())
            });
        check.map_err(invalid)?;
        Ok(grid)
    }
}

impl Solver for Day16 {
    const PART_1_EXPECTED: Expected = Expected::Int(46);
    const PART_2_EXPECTED: Expected = Expected::Int(51);

    fn part_1(grid: &Self::Parsed, _: InputKind) -> Result<Answer, SolveError> {
        Ok(energize(grid, (0, 0), Dir::Right).into())
    }

    fn part_2(grid: &Self::Parsed, _: InputKind) -> Result<Answer, SolveError> {
        let (h, w) = (grid.height() as i64, grid.width() as i64);
        let entries = (0..h)
            .flat_map(|r| [((r, 0), Dir::Right), ((r, w - 1), Dir::Left)])
            .chain((0..w).flat_map(|c| [((0, c), Dir::Down), ((h - 1, c), Dir::Up)]));
        entries
            .map(|(start, dir)| energize(grid, start, dir))
            .max()
            .map(Answer::from)
            .ok_or_else(|| SolveError::Unsolvable("empty grid".into()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::days::solve_sample;
    use aoc_harness::Part;

    #[test]
    fn test_samples() {
        assert_eq!(solve_sample::<Day16>(sample!(16, 1), Part::One), Answer::Int(46));
        assert_eq!(solve_sample::<Day16>(sample!(16, 2), Part::Two), Answer::Int(51));
    }

    #[test]
    fn test_splitter_loops_terminate() {
        let grid = Day16::parse("-|\n|-").unwrap();
        assert_eq!(energize(&grid, (0, 0), Dir::Right), 4);
    }
}
