//! Day 3: Gear Ratios

use crate::utils::grid::Grid;
use crate::utils::parse::invalid;
use aoc_harness::{Answer, AocParser, Expected, InputKind, ParseError, SolveError, Solver};
use aoc_harness_macros::AutoRegisterSolver;
use std::collections::HashMap;

#[derive(AutoRegisterSolver)]
#[aoc(day = 3, tags = ["grid"])]
pub struct Day3;

/// A number on the schematic and the cells it covers in its row
#[derive(Debug, Clone, Copy)]
struct PartNumber {
    value: u64,
    row: usize,
    start: usize,
    end: usize,
}

pub struct Schematic {
    grid: Grid<u8>,
    numbers: Vec<PartNumber>,
}

fn is_symbol(cell: u8) -> bool {
    cell != b'.' && !cell.is_ascii_digit()
}

impl Schematic {
    /// Cells bordering a number, diagonals included
    fn neighbours(&self, n: &PartNumber) -> impl Iterator<Item = ((usize, usize), u8)> + '_ {
        let (row, start, end) = (n.row as i64, n.start as i64, n.end as i64);
        (row - 1..=row + 1)
            .flat_map(move |r| (start - 1..=end).map(move |c| (r, c)))
            .filter(move |&(r, c)| r != row || c < start || c >= end)
            .filter_map(move |(r, c)| {
                self.grid
                    .get(r, c)
                    .map(|cell| ((r as usize, c as usize), *cell))
            })
    }
}

fn find_numbers(grid: &Grid<u8>) -> Vec<PartNumber> {
    let mut numbers = Vec::new();
    for (row, cells) in grid.rows().enumerate() {
        let mut col = 0;
        while col < cells.len() {
            if !cells[col].is_ascii_digit() {
                col += 1;
                continue;
            }
            let start = col;
            let mut value = 0;
            while col < cells.len() && cells[col].is_ascii_digit() {
                value = value * 10 + u64::from(cells[col] - b'0');
                col += 1;
            }
            numbers.push(PartNumber {
                value,
                row,
                start,
                end: col,
            });
        }
    }
    numbers
}

impl AocParser for Day3 {
    type Parsed = Schematic;

    fn parse(input: &str) -> Result<Self::Parsed, ParseError> {
        let grid = Grid::parse(input.trim()).map_err(invalid)?;
        let numbers = find_numbers(&grid);
        Ok(Schematic { grid, numbers })
    }
}

impl Solver for Day3 {
    const PART_1_EXPECTED: Expected = Expected::Int(4361);
    const PART_2_EXPECTED: Expected = Expected::Int(467835);

    fn part_1(schematic: &Self::Parsed, _: InputKind) -> Result<Answer, SolveError> {
        Ok(schematic
            .numbers
            .iter()
            .filter(|n| schematic.neighbours(n).any(|(_, cell)| is_symbol(cell)))
            .map(|n| n.value)
            .sum::<u64>()
            .into())
    }

    fn part_2(schematic: &Self::Parsed, _: InputKind) -> Result<Answer, SolveError> {
        let mut gears: HashMap<(usize, usize), Vec<u64>> = HashMap::new();
        for n in &schematic.numbers {
            for (pos, cell) in schematic.neighbours(n) {
                if cell == b'*' {
                    gears.entry(pos).or_default().push(n.value);
                }
            }
        }
        Ok(gears
            .values()
            .filter(|adjacent| adjacent.len() == 2)
            .map(|adjacent| adjacent[0] * adjacent[1])
            .sum::<u64>()
            .into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::days::solve_sample;
    use aoc_harness::Part;

    #[test]
    fn test_samples() {
        assert_eq!(solve_sample::<Day3>(sample!(3, 1), Part::One), Answer::Int(4361));
        assert_eq!(solve_sample::<Day3>(sample!(3, 2), Part::Two), Answer::Int(467835));
    }

    #[test]
    fn test_numbers_span_cells() {
        let schematic = Day3::parse("12.3\n..*.").unwrap();
        let spans: Vec<_> = schematic
            .numbers
            .iter()
            .map(|n| (n.value, n.start, n.end))
            .collect();
        assert_eq!(spans, vec![(12, 0, 2), (3, 3, 4)]);
    }
}
