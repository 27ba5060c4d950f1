//! Day 19: Aplenty

use crate::utils::parse::{invalid, uints};
use anyhow::{Context, anyhow, bail, ensure};
use aoc_harness::{Answer, AocParser, Expected, InputKind, ParseError, SolveError, Solver};
use aoc_harness_macros::AutoRegisterSolver;
use std::collections::HashMap;

#[derive(AutoRegisterSolver)]
#[aoc(day = 19, tags = ["parsing", "intervals"])]
pub struct Day19;

const START: &str = "in";

#[derive(Debug, Clone, PartialEq, Eq)]
enum Target {
    Accept,
    Reject,
    Workflow(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Cmp {
    Less,
    Greater,
}

/// `rating[category] <cmp> value`
#[derive(Debug, Clone, Copy)]
struct Condition {
    category: usize,
    cmp: Cmp,
    value: u64,
}

impl Condition {
    fn holds(&self, part: &[u64; 4]) -> bool {
        let rating = part[self.category];
        match self.cmp {
            Cmp::Less => rating < self.value,
            Cmp::Greater => rating > self.value,
        }
    }

    /// Split an inclusive range into the parts that pass and fail
    fn split(&self, (lo, hi): (u64, u64)) -> (Option<(u64, u64)>, Option<(u64, u64)>) {
        let (pass, fail) = match self.cmp {
            Cmp::Less => ((lo, hi.min(self.value - 1)), (lo.max(self.value), hi)),
            Cmp::Greater => ((lo.max(self.value + 1), hi), (lo, hi.min(self.value))),
        };
        let non_empty = |(a, b): (u64, u64)| (a <= b).then_some((a, b));
        (non_empty(pass), non_empty(fail))
    }
}

#[derive(Debug, Clone)]
struct Workflow {
    rules: Vec<(Condition, Target)>,
    fallback: Target,
}

pub struct System {
    workflows: HashMap<String, Workflow>,
    parts: Vec<[u64; 4]>,
}

impl System {
    fn workflow(&self, name: &str) -> Result<&Workflow, SolveError> {
        self.workflows
            .get(name)
            .ok_or_else(|| SolveError::Unsolvable(format!("no workflow named {name}")))
    }

    fn accepts(&self, part: &[u64; 4]) -> Result<bool, SolveError> {
        let mut name = START;
        // a workflow chain longer than the number of workflows is a cycle
        for _ in 0..=self.workflows.len() {
            let workflow = self.workflow(name)?;
            let target = workflow
                .rules
                .iter()
                .find(|(cond, _)| cond.holds(part))
                .map_or(&workflow.fallback, |(_, target)| target);
            match target {
                Target::Accept => return Ok(true),
                Target::Reject => return Ok(false),
                Target::Workflow(next) => name = next.as_str(),
            }
        }
        Err(SolveError::Unsolvable("workflows form a cycle".into()))
    }

    /// Number of rating combinations within `ranges` that end up accepted
    fn accepted_combinations(
        &self,
        target: &Target,
        mut ranges: [(u64, u64); 4],
        depth: usize,
    ) -> Result<u64, SolveError> {
        let name = match target {
            Target::Accept => return Ok(ranges.iter().map(|(lo, hi)| hi - lo + 1).product()),
            Target::Reject => return Ok(0),
            Target::Workflow(name) => name,
        };
        if depth > self.workflows.len() {
            return Err(SolveError::Unsolvable("workflows form a cycle".into()));
        }

        let workflow = self.workflow(name)?;
        let mut total = 0;
        for (cond, next) in &workflow.rules {
            let (pass, fail) = cond.split(ranges[cond.category]);
            if let Some(pass) = pass {
                let mut passing = ranges;
                passing[cond.category] = pass;
                total += self.accepted_combinations(next, passing, depth + 1)?;
            }
            match fail {
                Some(fail) => ranges[cond.category] = fail,
                None => return Ok(total),
            }
        }
        Ok(total + self.accepted_combinations(&workflow.fallback, ranges, depth + 1)?)
    }
}

fn parse_target(text: &str) -> Target {
    match text {
        "A" => Target::Accept,
        "R" => Target::Reject,
        name => Target::Workflow(name.to_string()),
    }
}

fn parse_rule(text: &str) -> anyhow::Result<(Condition, Target)> {
    let (cond, target) = text
        .split_once(':')
        .ok_or_else(|| anyhow!("rule {text:?} has no target"))?;
    let mut chars = cond.chars();
    let category = match chars.next() {
        Some('x') => 0,
        Some('m') => 1,
        Some('a') => 2,
        Some('s') => 3,
        other => bail!("unknown category {other:?} in {text:?}"),
    };
    let cmp = match chars.next() {
        Some('<') => Cmp::Less,
        Some('>') => Cmp::Greater,
        other => bail!("unknown comparison {other:?} in {text:?}"),
    };
    let value: u64 = chars.as_str().parse().context("bad threshold")?;
    ensure!(value >= 1, "threshold must be positive in {text:?}");
    Ok((
        Condition {
            category,
            cmp,
            value,
        },
        parse_target(target),
    ))
}

fn parse_workflow(line: &str) -> anyhow::Result<(String, Workflow)> {
    let (name, body) = line
        .strip_suffix('}')
        .and_then(|l| l.split_once('{'))
        .ok_or_else(|| anyhow!("bad workflow {line:?}"))?;
    let mut rules: Vec<&str> = body.split(',').collect();
    let fallback = rules.pop().ok_or_else(|| anyhow!("empty workflow {name}"))?;
    Ok((
        name.to_string(),
        Workflow {
            rules: rules
                .into_iter()
                .map(parse_rule)
                .collect::<anyhow::Result<_>>()?,
            fallback: parse_target(fallback),
        },
    ))
}

fn parse_system(input: &str) -> anyhow::Result<System> {
    let (workflows, parts) = input
        .split_once("\n\n")
        .ok_or_else(|| anyhow!("expected workflows and parts separated by a blank line"))?;
    let workflows = workflows
        .lines()
        .map(parse_workflow)
        .collect::<anyhow::Result<_>>()?;
    let parts = parts
        .lines()
        .filter(|l| !l.trim().is_empty())
        .map(|line| match uints::<u64>(line)?[..] {
            [x, m, a, s] => Ok([x, m, a, s]),
            _ => Err(anyhow!("part {line:?} needs four ratings")),
        })
        .collect::<anyhow::Result<_>>()?;
    Ok(System { workflows, parts })
}

impl AocParser for Day19 {
    type Parsed = System;

    fn parse(input: &str) -> Result<Self::Parsed, ParseError> {
        parse_system(input.replace("\r\n", "\n").trim()).map_err(invalid)
    }
}

impl Solver for Day19 {
    const PART_1_EXPECTED: Expected = Expected::Int(19114);
    const PART_2_EXPECTED: Expected = Expected::Int(167409079868000);

    fn part_1(system: &Self::Parsed, _: InputKind) -> Result<Answer, SolveError> {
        let mut total = 0;
        for part in &system.parts {
            if system.accepts(part)? {
                total += part.iter().sum::<u64>();
            }
        }
        Ok(total.into())
    }

    fn part_2(system: &Self::Parsed, _: InputKind) -> Result<Answer, SolveError> {
        let start = Target::Workflow(START.to_string());
        Ok(system
            .accepted_combinations(&start, [(1, 4000); 4], 0)?
            .into())
    }
}
