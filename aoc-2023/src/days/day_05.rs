//! Day 5: If You Give A Seed A Fertilizer

use crate::utils::parse::{invalid, uints};
use anyhow::{anyhow, ensure};
use aoc_harness::{Answer, AocParser, Expected, InputKind, ParseError, SolveError, Solver};
use aoc_harness_macros::AutoRegisterSolver;

#[derive(AutoRegisterSolver)]
#[aoc(day = 5, tags = ["intervals"])]
pub struct Day5;

/// `[src, src + len)` maps onto `[dst, dst + len)`
#[derive(Debug, Clone, Copy)]
struct Shift {
    dst: i64,
    src: i64,
    len: i64,
}

#[derive(Debug, Clone, Default)]
struct Mapping {
    shifts: Vec<Shift>,
}

impl Mapping {
    fn apply(&self, value: i64) -> i64 {
        self.shifts
            .iter()
            .find(|s| (s.src..s.src + s.len).contains(&value))
            .map_or(value, |s| value - s.src + s.dst)
    }

    /// Map half-open intervals, splitting them where shifts begin and end
    fn apply_intervals(&self, intervals: Vec<(i64, i64)>) -> Vec<(i64, i64)> {
        let mut mapped = Vec::new();
        let mut pending = intervals;

        for shift in &self.shifts {
            let (lo, hi) = (shift.src, shift.src + shift.len);
            let offset = shift.dst - shift.src;
            let mut untouched = Vec::new();

            for (start, end) in pending {
                if start < end.min(lo) {
                    untouched.push((start, end.min(lo)));
                }
                let (a, b) = (start.max(lo), end.min(hi));
                if a < b {
                    mapped.push((a + offset, b + offset));
                }
                if start.max(hi) < end {
                    untouched.push((start.max(hi), end));
                }
            }
            pending = untouched;
        }

        mapped.extend(pending);
        mapped
    }
}

pub struct Almanac {
    seeds: Vec<i64>,
    mappings: Vec<Mapping>,
}

fn parse_mapping(block: &str) -> anyhow::Result<Mapping> {
    let shifts = block
        .lines()
        .skip(1)
        .map(|line| match uints::<i64>(line)?[..] {
            [dst, src, len] => Ok(Shift { dst, src, len }),
            _ => Err(anyhow!("expected three numbers in {line:?}")),
        })
        .collect::<anyhow::Result<_>>()?;
    Ok(Mapping { shifts })
}

fn parse_almanac(input: &str) -> anyhow::Result<Almanac> {
    let mut blocks = input.split("\n\n");
    let seeds_line = blocks.next().ok_or_else(|| anyhow!("empty input"))?;
    ensure!(seeds_line.starts_with("seeds:"), "first block must list the seeds");
    let seeds = uints(seeds_line)?;
    let mappings = blocks
        .filter(|b| !b.trim().is_empty())
        .map(parse_mapping)
        .collect::<anyhow::Result<_>>()?;
    Ok(Almanac { seeds, mappings })
}

impl AocParser for Day5 {
    type Parsed = Almanac;

    fn parse(input: &str) -> Result<Self::Parsed, ParseError> {
        parse_almanac(input.replace("\r\n", "\n").trim()).map_err(invalid)
    }
}

impl Solver for Day5 {
    const PART_1_EXPECTED: Expected = Expected::Int(35);
    const PART_2_EXPECTED: Expected = Expected::Int(46);

    fn part_1(almanac: &Self::Parsed, _: InputKind) -> Result<Answer, SolveError> {
        almanac
            .seeds
            .iter()
            .map(|&seed| almanac.mappings.iter().fold(seed, |v, m| m.apply(v)))
            .min()
            .map(Answer::from)
            .ok_or_else(|| SolveError::Unsolvable("no seeds".into()))
    }

    fn part_2(almanac: &Self::Parsed, _: InputKind) -> Result<Answer, SolveError> {
        if almanac.seeds.len() % 2 != 0 {
            return Err(SolveError::Unsolvable("seed ranges come in pairs".into()));
        }
        let seeds = almanac
            .seeds
            .chunks(2)
            .map(|pair| (pair[0], pair[0] + pair[1]))
            .collect();
        almanac
            .mappings
            .iter()
            .fold(seeds, |intervals, m| m.apply_intervals(intervals))
            .into_iter()
            .map(|(start, _)| start)
            .min()
            .map(Answer::from)
            .ok_or_else(|| SolveError::Unsolvable("no seed ranges".into()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::days::solve_sample;
    use aoc_harness::Part;

    #[test]
    fn test_samples() {
        assert_eq!(solve_sample::<Day5>(sample!(5, 1), Part::One), Answer::Int(35));
        assert_eq!(solve_sample::<Day5>(sample!(5, 2), Part::Two), Answer::Int(46));
    }

    #[test]
    fn test_interval_split() {
        let mapping = Mapping {
            shifts: vec![Shift {
                dst: 100,
                src: 5,
                len: 5,
            }],
        };
        let mut out = mapping.apply_intervals(vec![(0, 20)]);
        out.sort();
        assert_eq!(out, vec![(0, 5), (10, 20), (100, 105)]);
    }

    #[test]
    fn test_surrounding_blank_lines_are_ignored() {
        let padded = format!("\n\n{}\n\n", sample!(5, 1));
        assert_eq!(solve_sample::<Day5>(&padded, Part::One), Answer::Int(35));
    }

    #[test]
    fn test_number_beyond_i64_is_rejected() {
        let input = "seeds: 1 2\n\nseed-to-soil map:\n9223372036854775808 0 1\n";
        assert!(matches!(Day5::parse(input), Err(ParseError::InvalidFormat(_))));
    }
}
