//! Day 15: Lens Library

use crate::utils::parse::invalid;
use anyhow::{anyhow, bail};
use aoc_harness::{Answer, AocParser, Expected, InputKind, ParseError, SolveError, Solver};
use aoc_harness_macros::AutoRegisterSolver;

#[derive(AutoRegisterSolver)]
#[aoc(day = 15, tags = ["hashing"])]
pub struct Day15;

fn hash(text: &str) -> usize {
    text.bytes().fold(0, |h, b| (h + usize::from(b)) * 17 % 256)
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Op {
    Remove,
    Insert(u8),
}

#[derive(Debug, Clone)]
pub struct Step {
    raw: String,
    label: String,
    op: Op,
}

fn parse_step(raw: &str) -> anyhow::Result<Step> {
    let (label, op) = if let Some(label) = raw.strip_suffix('-') {
        (label, Op::Remove)
    } else if let Some((label, focal)) = raw.split_once('=') {
        let focal = focal
            .parse()
            .map_err(|_| anyhow!("bad focal length in {raw:?}"))?;
        (label, Op::Insert(focal))
    } else {
        bail!("step {raw:?} is neither `label-` nor `label=N`");
    };
    Ok(Step {
        raw: raw.to_string(),
        label: label.to_string(),
        op,
    })
}

impl AocParser for Day15 {
    type Parsed = Vec<Step>;

    fn parse(input: &str) -> Result<Self::Parsed, ParseError> {
        input
            .split(',')
            .map(|step| step.trim_matches(|c: char| c.is_whitespace()))
            .filter(|step| !step.is_empty())
            .map(parse_step)
            .collect::<anyhow::Result<_>>()
            .map_err(invalid)
    }
}

impl Solver for Day15 {
    const PART_1_EXPECTED: Expected = Expected::Int(1320);
    const PART_2_EXPECTED: Expected = Expected::Int(145);

    fn part_1(steps: &Self::Parsed, _: InputKind) -> Result<Answer, SolveError> {
        Ok(steps.iter().map(|s| hash(&s.raw)).sum::<usize>().into())
    }

    fn part_2(steps: &Self::Parsed, _: InputKind) -> Result<Answer, SolveError> {
        let mut boxes: Vec<Vec<(&str, u8)>> = vec![Vec::new(); 256];
        for step in steps {
            let lenses = &mut boxes[hash(&step.label)];
            let slot = lenses.iter().position(|(label, _)| *label == step.label);
            match (&step.op, slot) {
                (Op::Remove, Some(i)) => {
                    lenses.remove(i);
                }
                (Op::Remove, None) => {}
                (Op::Insert(focal), Some(i)) => lenses[i].1 = *focal,
                (Op::Insert(focal), None) => lenses.push((step.label.as_str(), *focal)),
            }
        }
        Ok(boxes
            .iter()
            .enumerate()
            .flat_map(|(b, lenses)| {
                lenses
                    .iter()
                    .enumerate()
                    .map(move |(slot, (_, focal))| (b + 1) * (slot + 1) * usize::from(*focal))
            })
            .sum::<usize>()
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
        assert_eq!(solve_sample::<Day15>(sample!(15, 1), Part::One), Answer::Int(1320));
        assert_eq!(solve_sample::<Day15>(sample!(15, 2), Part::Two), Answer::Int(145));
    }

    #[test]
    fn test_hash() {
        assert_eq!(hash("HASH"), 52);
        assert_eq!(hash("rn"), 0);
    }
}
