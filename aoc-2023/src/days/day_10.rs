//! Day 10: Pipe Maze

use crate::utils::geometry::{Point, interior_points};
use crate::utils::grid::Grid;
use crate::utils::parse::invalid;
use aoc_harness::{Answer, AocParser, Expected, InputKind, ParseError, SolveError, Solver};
use aoc_harness_macros::AutoRegisterSolver;

#[derive(AutoRegisterSolver)]
#[aoc(day = 10, tags = ["grid", "geometry"])]
pub struct Day10;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Dir {
    North,
    East,
    South,
    West,
}

impl Dir {
    const ALL: [Dir; 4] = [Dir::North, Dir::East, Dir::South, Dir::West];

    fn delta(self) -> (i64, i64) {
        match self {
            Dir::North => (-1, 0),
            Dir::East => (0, 1),
            Dir::South => (1, 0),
            Dir::West => (0, -1),
        }
    }

    fn opposite(self) -> Dir {
        match self {
            Dir::North => Dir::South,
            Dir::East => Dir::West,
            Dir::South => Dir::North,
            Dir::West => Dir::East,
        }
    }
}

/// The two openings of a pipe tile
fn openings(tile: u8) -> Option<[Dir; 2]> {
    match tile {
        b'|' => Some([Dir::North, Dir::South]),
        b'-' => Some([Dir::East, Dir::West]),
        b'L' => Some([Dir::North, Dir::East]),
        b'J' => Some([Dir::North, Dir::West]),
        b'7' => Some([Dir::South, Dir::West]),
        b'F' => Some([Dir::South, Dir::East]),
        _ => None,
    }
}

fn step(grid: &Grid<u8>, (row, col): (i64, i64), dir: Dir) -> Option<((i64, i64), u8)> {
    let (dr, dc) = dir.delta();
    let next = (row + dr, col + dc);
    grid.get(next.0, next.1).map(|tile| (next, *tile))
}

/// The main loop as a closed path, starting and ending at `S`
fn trace_loop(grid: &Grid<u8>) -> Result<Vec<Point>, SolveError> {
    let (sr, sc) = grid
        .find(&b'S')
        .ok_or_else(|| SolveError::Unsolvable("no start tile".into()))?;
    let start = (sr as i64, sc as i64);

    let exits: Vec<Dir> = Dir::ALL
        .into_iter()
        .filter(|&dir| {
            step(grid, start, dir)
                .and_then(|(_, tile)| openings(tile))
                .is_some_and(|open| open.contains(&dir.opposite()))
        })
        .collect();
    if exits.len() != 2 {
        return Err(SolveError::Unsolvable(format!(
            "start connects to {} pipes, expected 2",
            exits.len()
        )));
    }

    let mut path = vec![Point::new(start.1, start.0)];
    let (mut pos, mut heading) = (start, exits[0]);
    loop {
        let (next, tile) = step(grid, pos, heading)
            .ok_or_else(|| SolveError::Unsolvable("loop leaves the map".into()))?;
        path.push(Point::new(next.1, next.0));
        if tile == b'S' {
            return Ok(path);
        }
        let open = openings(tile)
            .filter(|open| open.contains(&heading.opposite()))
            .ok_or_else(|| {
                SolveError::Unsolvable(format!("loop broken at row {} col {}", next.0, next.1))
            })?;
        heading = if open[0] == heading.opposite() { open[1] } else { open[0] };
        pos = next;
    }
}

impl AocParser for Day10 {
    type Parsed = Grid<u8>;

    fn parse(input: &str) -> Result<Self::Parsed, ParseError> {
        Grid::parse(input.trim()).map_err(invalid)
    }
}

impl Solver for Day10 {
    const PART_1_EXPECTED: Expected = Expected::Int(8);
    const PART_2_EXPECTED: Expected = Expected::Int(10);

    fn part_1(grid: &Self::Parsed, _: InputKind) -> Result<Answer, SolveError> {
        let path = trace_loop(grid)?;
        Ok(((path.len() - 1) / 2).into())
    }

    fn part_2(grid: &Self::Parsed, _: InputKind) -> Result<Answer, SolveError> {
        Ok(interior_points(&trace_loop(grid)?).into())
    }
}
