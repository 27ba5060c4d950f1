//! Day 12: Hot Springs

use crate::utils::memo::{DpCache, DpProblem};
use crate::utils::parse::parse_lines;
use anyhow::{anyhow, ensure};
use aoc_harness::{Answer, AocParser, Expected, InputKind, ParseError, SolveError, Solver};
use aoc_harness_macros::AutoRegisterSolver;

#[derive(AutoRegisterSolver)]
#[aoc(day = 12, tags = ["dp"])]
pub struct Day12;

#[derive(Debug, Clone)]
pub struct Row {
    springs: Vec<u8>,
    groups: Vec<usize>,
}

impl Row {
    fn unfold(&self, times: usize) -> Row {
        Row {
            springs: vec![self.springs.clone(); times].join(&b'?'),
            groups: self.groups.repeat(times),
        }
    }

    /// Whether group `g` can start at `pos`
    fn fits(&self, pos: usize, g: usize) -> bool {
        let end = pos + self.groups[g];
        end <= self.springs.len()
            && !self.springs[pos..end].contains(&b'.')
            && self.springs.get(end) != Some(&b'#')
    }

    fn arrangements(&self) -> u64 {
        DpCache::new(self).get(&(0, 0))
    }
}

/// State `(pos, g)`: springs from `pos` on still have to hold groups `g..`
impl DpProblem<(usize, usize), u64> for &Row {
    fn deps(&self, &(pos, g): &(usize, usize)) -> Vec<(usize, usize)> {
        let Some(&spring) = self.springs.get(pos) else {
            return Vec::new();
        };
        let mut deps = Vec::with_capacity(2);
        if spring != b'#' {
            deps.push((pos + 1, g));
        }
        if spring != b'.' && g < self.groups.len() && self.fits(pos, g) {
            let next = (pos + self.groups[g] + 1).min(self.springs.len());
            deps.push((next, g + 1));
        }
        deps
    }

    fn compute(&self, &(pos, g): &(usize, usize), deps: Vec<u64>) -> u64 {
        if pos >= self.springs.len() {
            u64::from(g == self.groups.len())
        } else {
            deps.iter().sum()
        }
    }
}

fn parse_row(line: &str) -> anyhow::Result<Row> {
    let (springs, groups) = line
        .split_once(' ')
        .ok_or_else(|| anyhow!("expected `<springs> <groups>`"))?;
    ensure!(
        springs.bytes().all(|b| matches!(b, b'.' | b'#' | b'?')),
        "unexpected spring in {springs:?}"
    );
    Ok(Row {
        springs: springs.bytes().collect(),
        groups: groups
            .split(',')
            .map(str::parse)
            .collect::<Result<_, _>>()?,
    })
}

impl AocParser for Day12 {
    type Parsed = Vec<Row>;

    fn parse(input: &str) -> Result<Self::Parsed, ParseError> {
        parse_lines(input.trim(), parse_row)
    }
}

impl Solver for Day12 {
    const PART_1_EXPECTED: Expected = Expected::Int(21);
    const PART_2_EXPECTED: Expected = Expected::Int(525152);

    fn part_1(rows: &Self::Parsed, _: InputKind) -> Result<Answer, SolveError> {
        Ok(rows.iter().map(Row::arrangements).sum::<u64>().into())
    }

    fn part_2(rows: &Self::Parsed, _: InputKind) -> Result<Answer, SolveError> {
        Ok(rows
            .iter()
            .map(|row| row.unfold(5).arrangements())
            .sum::<u64>()
            .into())
    }
}
