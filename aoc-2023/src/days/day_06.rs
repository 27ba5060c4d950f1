//! Day 6: Wait For It

use crate::utils::parse::{invalid, uints};
use anyhow::{anyhow, ensure};
use aoc_harness::{Answer, AocParser, Expected, InputKind, ParseError, SolveError, Solver};
use aoc_harness_macros::AutoRegisterSolver;

#[derive(AutoRegisterSolver)]
#[aoc(day = 6, tags = ["math"])]
pub struct Day6;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Race {
    time: u64,
    record: u64,
}

impl Race {
    fn distance(self, hold: u64) -> u128 {
        u128::from(hold) * u128::from(self.time - hold)
    }

    fn beats(self, hold: u64) -> bool {
        self.distance(hold) > u128::from(self.record)
    }

    /// Hold times that beat the record, from the roots of `h * (t - h) = d`
    fn ways_to_win(self) -> u64 {
        let (t, d) = (u128::from(self.time), u128::from(self.record));
        let Some(disc) = (t * t).checked_sub(4 * d) else {
            return 0;
        };
        // integer estimate of the lower root, then nudge onto the exact bound
        let mut lo = ((t - disc.isqrt()) / 2) as u64;
        while lo > 0 && self.beats(lo - 1) {
            lo -= 1;
        }
        while lo <= self.time / 2 && !self.beats(lo) {
            lo += 1;
        }
        if lo > self.time / 2 {
            return 0;
        }
        // winning holds are symmetric around t / 2
        self.time - 2 * lo + 1
    }
}

pub struct Races {
    races: Vec<Race>,
    joined: Race,
}

fn joined_number(line: &str) -> anyhow::Result<u64> {
    let digits: String = line.chars().filter(char::is_ascii_digit).collect();
    digits.parse().map_err(|_| anyhow!("no digits in {line:?}"))
}

fn parse_races(input: &str) -> anyhow::Result<Races> {
    let mut lines = input.lines();
    let times = lines.next().ok_or_else(|| anyhow!("missing times"))?;
    let records = lines.next().ok_or_else(|| anyhow!("missing distances"))?;
    let (t, d) = (uints::<u64>(times)?, uints::<u64>(records)?);
    ensure!(t.len() == d.len(), "{} times but {} distances", t.len(), d.len());
    Ok(Races {
        races: t
            .into_iter()
            .zip(d)
            .map(|(time, record)| Race { time, record })
            .collect(),
        joined: Race {
            time: joined_number(times)?,
            record: joined_number(records)?,
        },
    })
}

impl AocParser for Day6 {
    type Parsed = Races;

    fn parse(input: &str) -> Result<Self::Parsed, ParseError> {
        parse_races(input.trim()).map_err(invalid)
    }
}

impl Solver for Day6 {
    const PART_1_EXPECTED: Expected = Expected::Int(288);
    const PART_2_EXPECTED: Expected = Expected::Int(71503);

    fn part_1(races: &Self::Parsed, _: InputKind) -> Result<Answer, SolveError> {
        Ok(races
            .races
            .iter()
            .map(|r| r.ways_to_win())
            .product::<u64>()
            .into())
    }

    fn part_2(races: &Self::Parsed, _: InputKind) -> Result<Answer, SolveError> {
        Ok(races.joined.ways_to_win().into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::days::solve_sample;
    use aoc_harness::Part;
    use proptest::prelude::*;

    #[test]
    fn test_samples() {
        assert_eq!(solve_sample::<Day6>(sample!(6, 1), Part::One), Answer::Int(288));
        assert_eq!(solve_sample::<Day6>(sample!(6, 2), Part::Two), Answer::Int(71503));
    }

    #[test]
    fn test_touching_the_record_does_not_win() {
        // holding 5 of 10 reaches exactly 25
        assert_eq!(Race { time: 10, record: 25 }.ways_to_win(), 0);
        assert_eq!(Race { time: 10, record: 24 }.ways_to_win(), 1);
    }

    proptest! {
        #[test]
        fn prop_matches_brute_force(time in 0u64..200, record in 0u64..12_000) {
            let race = Race { time, record };
            let brute = (0..=time).filter(|&h| race.beats(h)).count() as u64;
            prop_assert_eq!(race.ways_to_win(), brute);
        }
    }
}
