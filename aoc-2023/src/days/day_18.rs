//! Day 18: Lavaduct Lagoon

use crate::utils::geometry::{Point, polygon_perimeter, shoelace_double_area};
use crate::utils::parse::parse_lines;
use anyhow::{Context, anyhow, bail, ensure};
use aoc_harness::{Answer, AocParser, Expected, InputKind, ParseError, SolveError, Solver};
use aoc_harness_macros::AutoRegisterSolver;

#[derive(AutoRegisterSolver)]
#[aoc(day = 18, tags = ["geometry"])]
pub struct Day18;

/// One dig step as a unit direction and a length
type Dig = ((i64, i64), i64);

#[derive(Debug, Clone)]
pub struct Instruction {
    plain: Dig,
    decoded: Dig,
}

fn direction(c: char) -> anyhow::Result<(i64, i64)> {
    Ok(match c {
        'R' | '0' => (1, 0),
        'D' | '1' => (0, 1),
        'L' | '2' => (-1, 0),
        'U' | '3' => (0, -1),
        _ => bail!("unknown direction {c:?}"),
    })
}

fn parse_instruction(line: &str) -> anyhow::Result<Instruction> {
    let mut fields = line.split_whitespace();
    let (Some(dir), Some(len), Some(color)) = (fields.next(), fields.next(), fields.next()) else {
        bail!("expected `<dir> <len> (#rrggbb)`");
    };
    let dir = dir.chars().next().ok_or_else(|| anyhow!("empty direction"))?;
    let hex = color
        .strip_prefix("(#")
        .and_then(|c| c.strip_suffix(')'))
        .ok_or_else(|| anyhow!("bad color {color:?}"))?;
    ensure!(
        hex.len() == 6 && hex.bytes().all(|b| b.is_ascii_hexdigit()),
        "color {color:?} needs six hex digits"
    );

    let code = hex[5..].chars().next().ok_or_else(|| anyhow!("missing direction digit"))?;
    Ok(Instruction {
        plain: (direction(dir)?, len.parse().context("bad length")?),
        decoded: (
            direction(code)?,
            i64::from_str_radix(&hex[..5], 16).context("bad hex length")?,
        ),
    })
}

/// Cubic metres dug out: the interior by Pick's theorem plus the trench itself
fn lagoon_volume(steps: impl Iterator<Item = Dig>) -> i64 {
    let mut corners = vec![Point::new(0, 0)];
    let mut pos = Point::new(0, 0);
    for ((dx, dy), len) in steps {
        pos = Point::new(pos.x + dx * len, pos.y + dy * len);
        corners.push(pos);
    }
    (shoelace_double_area(&corners) + polygon_perimeter(&corners)) / 2 + 1
}

impl AocParser for Day18 {
    type Parsed = Vec<Instruction>;

    fn parse(input: &str) -> Result<Self::Parsed, ParseError> {
        parse_lines(input.trim(), parse_instruction)
    }
}

impl Solver for Day18 {
    const PART_1_EXPECTED: Expected = Expected::Int(62);
    const PART_2_EXPECTED: Expected = Expected::Int(952408144115);

    fn part_1(plan: &Self::Parsed, _: InputKind) -> Result<Answer, SolveError> {
        Ok(lagoon_volume(plan.iter().map(|i| i.plain)).into())
    }

    fn part_2(plan: &Self::Parsed, _: InputKind) -> Result<Answer, SolveError> {
        Ok(lagoon_volume(plan.iter().map(|i| i.decoded)).into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::days::solve_sample;
    use aoc_harness::Part;

    #[test]
    fn test_samples() {
        assert_eq!(solve_sample::<Day18>(sample!(18, 1), Part::One), Answer::Int(62));
        assert_eq!(
            solve_sample::<Day18>(sample!(18, 2), Part::Two),
            Answer::Int(952408144115)
        );
    }

    #[test]
    fn test_hex_decoding() {
        let instruction = parse_instruction("R 6 (#70c710)").unwrap();
        assert_eq!(instruction.plain, ((1, 0), 6));
        assert_eq!(instruction.decoded, ((1, 0), 461937));
    }
}
