//! Day 8: Haunted Wasteland

use crate::utils::math::lcm;
use crate::utils::parse::invalid;
use anyhow::{anyhow, bail};
use aoc_harness::{Answer, AocParser, Expected, InputKind, ParseError, SolveError, Solver};
use aoc_harness_macros::AutoRegisterSolver;
use std::collections::HashMap;

#[derive(AutoRegisterSolver)]
#[aoc(day = 8, tags = ["graph", "math"])]
pub struct Day8;

pub struct Network {
    turns: Vec<bool>,
    names: Vec<String>,
    /// Left and right successor of every node, by index
    links: Vec<(usize, usize)>,
}

impl Network {
    fn index_of(&self, name: &str) -> Option<usize> {
        self.names.iter().position(|n| n == name)
    }

    /// Steps from `start` until a node satisfying `done` is reached
    fn steps_until(&self, start: usize, done: impl Fn(&str) -> bool) -> Result<u64, SolveError> {
        // every (node, turn) state must repeat within this many steps
        let limit = (self.names.len() * self.turns.len()) as u64 + 1;
        let mut node = start;
        for (step, &right) in self.turns.iter().cycle().enumerate() {
            if done(&self.names[node]) {
                return Ok(step as u64);
            }
            if step as u64 > limit {
                break;
            }
            let (left_node, right_node) = self.links[node];
            node = if right { right_node } else { left_node };
        }
        Err(SolveError::Unsolvable(format!(
            "no exit reachable from {}",
            self.names[start]
        )))
    }
}

fn parse_network(input: &str) -> anyhow::Result<Network> {
    let mut lines = input.lines();
    let turns = lines
        .next()
        .ok_or_else(|| anyhow!("missing instructions"))?
        .trim()
        .chars()
        .map(|c| match c {
            'L' => Ok(false),
            'R' => Ok(true),
            _ => Err(anyhow!("unknown instruction {c:?}")),
        })
        .collect::<anyhow::Result<Vec<_>>>()?;

    let mut entries = Vec::new();
    for line in lines.filter(|l| !l.trim().is_empty()) {
        let (name, targets) = line.split_once(" = ").ok_or_else(|| anyhow!("bad node {line:?}"))?;
        let (left, right) = targets
            .trim_matches(|c| c == '(' || c == ')')
            .split_once(", ")
            .ok_or_else(|| anyhow!("bad successors {line:?}"))?;
        entries.push((name.trim(), left, right));
    }

    let index: HashMap<&str, usize> = entries.iter().enumerate().map(|(i, e)| (e.0, i)).collect();
    let lookup = |name: &str| match index.get(name) {
        Some(&i) => Ok(i),
        None => bail!("unknown node {name}"),
    };
    let links = entries
        .iter()
        .map(|(_, l, r)| Ok((lookup(l)?, lookup(r)?)))
        .collect::<anyhow::Result<_>>()?;

    Ok(Network {
        turns,
        names: entries.iter().map(|e| e.0.to_string()).collect(),
        links,
    })
}

impl AocParser for Day8 {
    type Parsed = Network;

    fn parse(input: &str) -> Result<Self::Parsed, ParseError> {
        parse_network(input.trim()).map_err(invalid)
    }
}

impl Solver for Day8 {
    const PART_1_EXPECTED: Expected = Expected::Int(6);
    const PART_2_EXPECTED: Expected = Expected::Int(6);

    fn part_1(network: &Self::Parsed, _: InputKind) -> Result<Answer, SolveError> {
        let start = network
            .index_of("AAA")
            .ok_or_else(|| SolveError::Unsolvable("no node AAA".into()))?;
        Ok(network.steps_until(start, |n| n == "ZZZ")?.into())
    }

    fn part_2(network: &Self::Parsed, _: InputKind) -> Result<Answer, SolveError> {
        let cycles = network
            .names
            .iter()
            .enumerate()
            .filter(|(_, name)| name.ends_with('A'))
            .map(|(start, _)| network.steps_until(start, |n| n.ends_with('Z')))
            .collect::<Result<Vec<_>, _>>()?;
        lcm(cycles)
            .map(Answer::from)
            .ok_or_else(|| SolveError::Unsolvable("no node ends with A".into()))
    }
}
