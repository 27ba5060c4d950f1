//! Day 20: Pulse Propagation

use crate::utils::math::lcm;
use crate::utils::parse::invalid;
use anyhow::{anyhow, ensure};
use aoc_harness::{Answer, AocParser, Expected, InputKind, ParseError, SolveError, Solver};
use aoc_harness_macros::AutoRegisterSolver;
use log::debug;
use std::collections::{HashMap, VecDeque};

#[derive(AutoRegisterSolver)]
#[aoc(day = 20, tags = ["simulation", "math"])]
pub struct Day20;

const BROADCASTER: &str = "broadcaster";
const FINAL_MACHINE: &str = "rx";
const PRESS_LIMIT: u64 = 1 << 20;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Kind {
    Broadcast,
    FlipFlop,
    Conjunction,
    /// Named as an output but never defined
    Sink,
}

#[derive(Debug, Clone)]
struct Module {
    name: String,
    kind: Kind,
    outputs: Vec<usize>,
    inputs: Vec<usize>,
}

pub struct Machine {
    modules: Vec<Module>,
    broadcaster: usize,
}

/// One pulse: sender (`None` for the button), receiver, and whether it is high
type Pulse = (Option<usize>, usize, bool);

/// Flip-flop states and the last pulse each conjunction saw per input
struct State {
    on: Vec<bool>,
    memory: Vec<Vec<bool>>,
}

impl Machine {
    fn initial_state(&self) -> State {
        State {
            on: vec![false; self.modules.len()],
            memory: self
                .modules
                .iter()
                .map(|m| vec![false; m.inputs.len()])
                .collect(),
        }
    }

    fn index_of(&self, name: &str) -> Option<usize> {
        self.modules.iter().position(|m| m.name == name)
    }

    /// Push the button once, reporting every pulse in the order it is delivered
    fn press(&self, state: &mut State, mut observe: impl FnMut(Pulse)) {
        let mut queue = VecDeque::from([(None, self.broadcaster, false)]);

        while let Some(pulse @ (from, to, high)) = queue.pop_front() {
            observe(pulse);
            let module = &self.modules[to];
            let send = match module.kind {
                Kind::Broadcast => Some(high),
                Kind::FlipFlop if !high => {
                    state.on[to] = !state.on[to];
                    Some(state.on[to])
                }
                Kind::FlipFlop | Kind::Sink => None,
                Kind::Conjunction => {
                    if let Some(slot) = from.and_then(|f| module.inputs.iter().position(|&i| i == f)) {
                        state.memory[to][slot] = high;
                    }
                    Some(!state.memory[to].iter().all(|&h| h))
                }
            };
            if let Some(out) = send {
                queue.extend(module.outputs.iter().map(|&next| (Some(to), next, out)));
            }
        }
    }
}

fn parse_machine(input: &str) -> anyhow::Result<Machine> {
    let mut defined = Vec::new();
    for line in input.lines().filter(|l| !l.trim().is_empty()) {
        let (head, outputs) = line
            .split_once(" -> ")
            .ok_or_else(|| anyhow!("expected `<module> -> <outputs>` in {line:?}"))?;
        let (kind, name) = if let Some(name) = head.strip_prefix('%') {
            (Kind::FlipFlop, name)
        } else if let Some(name) = head.strip_prefix('&') {
            (Kind::Conjunction, name)
        } else {
            ensure!(head == BROADCASTER, "unknown module {head:?}");
            (Kind::Broadcast, head)
        };
        defined.push((name, kind, outputs.split(',').map(str::trim).collect::<Vec<_>>()));
    }

    let mut index: HashMap<&str, usize> = HashMap::new();
    let mut modules = Vec::new();
    for &(name, kind, _) in &defined {
        ensure!(index.insert(name, modules.len()).is_none(), "module {name} defined twice");
        modules.push(Module {
            name: name.to_string(),
            kind,
            outputs: Vec::new(),
            inputs: Vec::new(),
        });
    }

    for (name, _, outputs) in &defined {
        let from = index[name];
        for &out in outputs {
            let to = *index.entry(out).or_insert_with(|| {
                modules.push(Module {
                    name: out.to_string(),
                    kind: Kind::Sink,
                    outputs: Vec::new(),
                    inputs: Vec::new(),
                });
                modules.len() - 1
            });
            modules[from].outputs.push(to);
            modules[to].inputs.push(from);
        }
    }

    let broadcaster = *index
        .get(BROADCASTER)
        .ok_or_else(|| anyhow!("no broadcaster module"))?;
    Ok(Machine {
        modules,
        broadcaster,
    })
}

impl AocParser for Day20 {
    type Parsed = Machine;

    fn parse(input: &str) -> Result<Self::Parsed, ParseError> {
        parse_machine(input.trim()).map_err(invalid)
    }
}

impl Solver for Day20 {
    const PART_1_EXPECTED: Expected = Expected::Int(11687500);

    fn part_1(machine: &Self::Parsed, _: InputKind) -> Result<Answer, SolveError> {
        let mut state = machine.initial_state();
        let (mut low, mut high) = (0u64, 0u64);
        for _ in 0..1000 {
            machine.press(&mut state, |(_, _, is_high)| {
                if is_high {
                    high += 1;
                } else {
                    low += 1;
                }
            });
        }
        Ok((low * high).into())
    }

    /// `rx` hangs off one conjunction whose inputs each send high on a fixed
    /// cycle; it gets a low pulse once all of them line up.
    fn part_2(machine: &Self::Parsed, _: InputKind) -> Result<Answer, SolveError> {
        let unsolvable = |msg: &str| SolveError::Unsolvable(msg.to_string());
        let rx = machine
            .index_of(FINAL_MACHINE)
            .ok_or_else(|| unsolvable("no rx module"))?;
        let parent = match machine.modules[rx].inputs[..] {
            [p] if machine.modules[p].kind == Kind::Conjunction => p,
            _ => return Err(unsolvable("rx is not fed by a single conjunction")),
        };
        let feeders = &machine.modules[parent].inputs;

        let mut first_high: Vec<Option<u64>> = vec![None; feeders.len()];
        let mut state = machine.initial_state();
        for presses in 1..=PRESS_LIMIT {
            machine.press(&mut state, |(from, to, high)| {
                if to != parent || !high {
                    return;
                }
                if let Some(slot) = from.and_then(|f| feeders.iter().position(|&i| i == f)) {
                    first_high[slot].get_or_insert(presses);
                }
            });
            if first_high.iter().all(Option::is_some) {
                debug!("rx feeder cycles: {first_high:?}");
                return lcm(first_high.into_iter().flatten())
                    .map(Answer::from)
                    .ok_or_else(|| unsolvable("rx parent has no inputs"));
            }
        }
        Err(unsolvable("rx feeders never all sent a high pulse"))
    }
}
