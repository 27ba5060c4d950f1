//! Checks over the full set of 2023 solvers linked through the plugin registry

use aoc_2023 as _;
use aoc_harness::{
    Answer, HarnessError, InputError, InputKind, InputSource, MemoryInputs, Part, RegistryBuilder,
    Runner, SolverError, SolverRegistry,
};
use std::fs;
use std::path::PathBuf;

const SOLVED_DAYS: [u8; 22] = [
    1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12, 13, 14, 15, 16, 18, 19, 20, 21, 24, 25,
];

fn registry() -> SolverRegistry {
    RegistryBuilder::new()
        .register_all_plugins()
        .expect("plugins register without conflicts")
        .build()
}

/// Reads the committed samples from the workspace resources
struct Samples {
    root: PathBuf,
}

impl Samples {
    fn new() -> Self {
        Self {
            root: PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../resources/input"),
        }
    }
}

impl InputSource for Samples {
    fn load(&self, day: u8, kind: InputKind) -> Result<String, InputError> {
        let path = self.root.join(format!("day{day}/{}.txt", kind.file_stem()));
        fs::read_to_string(&path).map_err(|_| InputError::Missing { day, kind, path })
    }
}

#[test]
fn test_registered_days() {
    let registry = registry();
    let days: Vec<u8> = registry.iter_info().map(|info| info.day).collect();
    assert_eq!(days, SOLVED_DAYS);

    for day in [17, 22, 23] {
        assert!(!registry.contains(day));
    }
}

#[test]
fn test_every_declared_sample_passes() {
    let registry = registry();
    let runner = Runner::new(&registry, Samples::new());

    for day in SOLVED_DAYS {
        let report = runner
            .self_test(day)
            .unwrap_or_else(|err| panic!("day {day}: {err}"));
        assert_eq!(report.day, day);
    }
}

#[test]
fn test_day_1_runs_end_to_end() {
    let registry = registry();
    let samples = Samples::new();
    let inputs = MemoryInputs::new()
        .with(1, InputKind::Sample(Part::One), samples.load(1, InputKind::Sample(Part::One)).unwrap())
        .with(1, InputKind::Sample(Part::Two), samples.load(1, InputKind::Sample(Part::Two)).unwrap())
        .with(1, InputKind::Real, "a1b2c\nthree4five\n");

    let report = Runner::new(&registry, inputs).run(1).unwrap();
    assert_eq!(report.self_test.checked(), 2);
    assert_eq!(report.part_1.answer, Answer::Int(12 + 44));
    assert_eq!(report.part_2.answer, Answer::Int(12 + 35));
}

#[test]
fn test_unsolved_day_is_not_found() {
    let registry = registry();
    let result = Runner::new(&registry, Samples::new()).run(17);
    assert!(matches!(
        result,
        Err(HarnessError::Solver(SolverError::NotFound(17)))
    ));
}

#[test]
fn test_parsed_steps_are_nameable_outside_the_crate() {
    use aoc_2023::days::day_15::{Day15, Step};
    use aoc_harness::AocParser;

    let steps: Vec<Step> = Day15::parse("rn=1,cm-,qp=3\n").unwrap();
    assert_eq!(steps.len(), 3);
}
