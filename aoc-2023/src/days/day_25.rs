//! Day 25: Snowverload

use crate::utils::parse::invalid;
use anyhow::anyhow;
use aoc_harness::{Answer, AocParser, Expected, InputKind, ParseError, SolveError, Solver};
use aoc_harness_macros::AutoRegisterSolver;
use log::debug;
use std::collections::{BTreeMap, VecDeque};

#[derive(AutoRegisterSolver)]
#[aoc(day = 25, tags = ["graph"])]
pub struct Day25;

const CUT_SIZE: usize = 3;

/// Undirected wiring diagram with every edge stored as a pair of unit arcs
pub struct Wiring {
    names: Vec<String>,
    /// Arc heads; arc `e` and `e ^ 1` are the two directions of one wire
    heads: Vec<usize>,
    adjacency: Vec<Vec<usize>>,
}

impl Wiring {
    /// Maximum flow from `source` to `sink` with unit capacities, stopping
    /// once it exceeds `limit`; returns the flow and the residual capacities
    fn max_flow(&self, source: usize, sink: usize, limit: usize) -> (usize, Vec<i8>) {
        let mut capacity = vec![1i8; self.heads.len()];
        let mut flow = 0;

        while flow <= limit {
            // BFS for a shortest augmenting path, remembering the arc into each node
            let mut via: Vec<Option<usize>> = vec![None; self.names.len()];
            let mut queue = VecDeque::from([source]);
            let mut reached = false;
            while let Some(node) = queue.pop_front() {
                if node == sink {
                    reached = true;
                    break;
                }
                for &arc in &self.adjacency[node] {
                    let next = self.heads[arc];
                    if capacity[arc] > 0 && next != source && via[next].is_none() {
                        via[next] = Some(arc);
                        queue.push_back(next);
                    }
                }
            }
            if !reached {
                break;
            }

            let mut node = sink;
            while let Some(arc) = via[node] {
                capacity[arc] -= 1;
                capacity[arc ^ 1] += 1;
                node = self.heads[arc ^ 1];
            }
            flow += 1;
        }
        (flow, capacity)
    }

    /// Nodes reachable from `source` through arcs with capacity left
    fn residual_side(&self, source: usize, capacity: &[i8]) -> usize {
        let mut seen = vec![false; self.names.len()];
        seen[source] = true;
        let mut stack = vec![source];
        while let Some(node) = stack.pop() {
            for &arc in &self.adjacency[node] {
                let next = self.heads[arc];
                if capacity[arc] > 0 && !seen[next] {
                    seen[next] = true;
                    stack.push(next);
                }
            }
        }
        seen.iter().filter(|s| **s).count()
    }
}

fn parse_wiring(input: &str) -> anyhow::Result<Wiring> {
    let mut edges = Vec::new();
    for line in input.lines().filter(|l| !l.trim().is_empty()) {
        let (from, targets) = line
            .split_once(':')
            .ok_or_else(|| anyhow!("expected `<component>: <components>` in {line:?}"))?;
        edges.extend(targets.split_whitespace().map(|to| (from.trim(), to)));
    }

    // sorted names keep node numbering independent of line order
    let index: BTreeMap<&str, usize> = edges
        .iter()
        .flat_map(|&(a, b)| [a, b])
        .collect::<std::collections::BTreeSet<_>>()
        .into_iter()
        .enumerate()
        .map(|(i, name)| (name, i))
        .collect();

    let mut heads = Vec::with_capacity(edges.len() * 2);
    let mut adjacency = vec![Vec::new(); index.len()];
    for (a, b) in edges {
        let (a, b) = (index[a], index[b]);
        adjacency[a].push(heads.len());
        heads.push(b);
        adjacency[b].push(heads.len());
        heads.push(a);
    }

    Ok(Wiring {
        names: index.keys().map(|name| name.to_string()).collect(),
        heads,
        adjacency,
    })
}

impl AocParser for Day25 {
    type Parsed = Wiring;

    fn parse(input: &str) -> Result<Self::Parsed, ParseError> {
        parse_wiring(input.trim()).map_err(invalid)
    }
}

impl Solver for Day25 {
    const PART_1_EXPECTED: Expected = Expected::Int(54);
    const PART_2_EXPECTED: Expected = Expected::Int(0);

    /// Any sink on the far side of the three-wire cut is separated from the
    /// first node by a flow of exactly three.
    fn part_1(wiring: &Self::Parsed, _: InputKind) -> Result<Answer, SolveError> {
        let total = wiring.names.len();
        let source = 0;
        for sink in 1..total {
            let (flow, capacity) = wiring.max_flow(source, sink, CUT_SIZE);
            if flow == CUT_SIZE {
                let side = wiring.residual_side(source, &capacity);
                debug!(
                    "cut separates {} from {}: {side} and {} components",
                    wiring.names[source],
                    wiring.names[sink],
                    total - side
                );
                return Ok((side * (total - side)).into());
            }
        }
        Err(SolveError::Unsolvable(format!(
            "no cut of {CUT_SIZE} wires splits the diagram"
        )))
    }

    /// The last day has no second puzzle
    fn part_2(_: &Self::Parsed, _: InputKind) -> Result<Answer, SolveError> {
        Ok(Answer::Int(0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::days::solve_sample;
    use aoc_harness::Part;

    #[test]
    fn test_samples() {
        assert_eq!(solve_sample::<Day25>(sample!(25, 1), Part::One), Answer::Int(54));
        assert_eq!(solve_sample::<Day25>(sample!(25, 2), Part::Two), Answer::Int(0));
    }

    #[test]
    fn test_flow_across_cut() {
        let wiring = Day25::parse(sample!(25, 1)).unwrap();
        let names: Vec<&str> = wiring.names.iter().map(String::as_str).collect();
        let bvb = names.iter().position(|n| *n == "bvb").unwrap();
        let cmg = names.iter().position(|n| *n == "cmg").unwrap();
        assert_eq!(wiring.max_flow(bvb, cmg, CUT_SIZE).0, CUT_SIZE);
    }

    #[test]
    fn test_fully_connected_graph_is_unsolvable() {
        let wiring = Day25::parse("a: b c d e\nb: c d e\nc: d e\nd: e").unwrap();
        assert!(matches!(
            Day25::part_1(&wiring, InputKind::Real),
            Err(SolveError::Unsolvable(_))
        ));
    }
}
