//! Day 2: Cube Conundrum

use crate::utils::parse::parse_lines;
use anyhow::{Context, anyhow, bail};
use aoc_harness::{Answer, AocParser, Expected, InputKind, ParseError, SolveError, Solver};
use aoc_harness_macros::AutoRegisterSolver;

#[derive(AutoRegisterSolver)]
#[aoc(day = 2, tags = ["parsing"])]
pub struct Day2;

/// Cube counts of one handful, or a running maximum of them
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Cubes {
    red: u32,
    green: u32,
    blue: u32,
}

impl Cubes {
    fn max(self, other: Cubes) -> Cubes {
        Cubes {
            red: self.red.max(other.red),
            green: self.green.max(other.green),
            blue: self.blue.max(other.blue),
        }
    }

    fn fits_in(self, bag: Cubes) -> bool {
        self.red <= bag.red && self.green <= bag.green && self.blue <= bag.blue
    }

    fn power(self) -> u64 {
        u64::from(self.red) * u64::from(self.green) * u64::from(self.blue)
    }
}

#[derive(Debug)]
pub struct Game {
    id: u32,
    handfuls: Vec<Cubes>,
}

impl Game {
    fn minimum_set(&self) -> Cubes {
        self.handfuls.iter().fold(Cubes::default(), |acc, h| acc.max(*h))
    }
}

const BAG: Cubes = Cubes {
    red: 12,
    green: 13,
    blue: 14,
};

fn parse_handful(text: &str) -> anyhow::Result<Cubes> {
    let mut cubes = Cubes::default();
    for entry in text.split(',') {
        let (count, color) = entry
            .trim()
            .split_once(' ')
            .ok_or_else(|| anyhow!("expected `<count> <color>`, got {entry:?}"))?;
        let count: u32 = count.parse().context("bad cube count")?;
        match color {
            "red" => cubes.red += count,
            "green" => cubes.green += count,
            "blue" => cubes.blue += count,
            other => bail!("unknown color {other:?}"),
        }
    }
    Ok(cubes)
}

fn parse_game(line: &str) -> anyhow::Result<Game> {
    let (head, draws) = line
        .split_once(':')
        .ok_or_else(|| anyhow!("missing ':'"))?;
    let id = head
        .strip_prefix("Game ")
        .ok_or_else(|| anyhow!("missing `Game` prefix"))?
        .parse()
        .context("bad game id")?;
    let handfuls = draws
        .split(';')
        .map(parse_handful)
        .collect::<anyhow::Result<_>>()?;
    Ok(Game { id, handfuls })
}

impl AocParser for Day2 {
    type Parsed = Vec<Game>;

    fn parse(input: &str) -> Result<Self::Parsed, ParseError> {
        parse_lines(input.trim(), parse_game)
    }
}

impl Solver for Day2 {
    const PART_1_EXPECTED: Expected = Expected::Int(8);
    const PART_2_EXPECTED: Expected = Expected::Int(2286);

    fn part_1(games: &Self::Parsed, _: InputKind) -> Result<Answer, SolveError> {
        Ok(games
            .iter()
            .filter(|g| g.handfuls.iter().all(|h| h.fits_in(BAG)))
            .map(|g| g.id)
            .sum::<u32>()
            .into())
    }

    fn part_2(games: &Self::Parsed, _: InputKind) -> Result<Answer, SolveError> {
        Ok(games
            .iter()
            .map(|g| g.minimum_set().power())
            .sum::<u64>()
            .into())
    }
}
