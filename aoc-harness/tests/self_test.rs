//! End-to-end runs of the self-testing runner on the calibration puzzle

use aoc_harness::{
    Answer, AocParser, Expected, HarnessError, InputError, InputKind, InputSource, MemoryInputs,
    ParseError, Part, RegistryBuilder, Runner, SolveError, Solver, SolverRegistry,
};
use log::{Level, LevelFilter, Log, Metadata, Record};
use std::cell::RefCell;
use std::sync::Mutex;

const SAMPLE_1: &str = "1abc2\npqr3stu8vwx\na1b2c3d4e5f\ntreb7uchet\n";
const SAMPLE_2: &str = "two1nine\neightwothree\nabcone2threexyz\nxtwone3four\n4nineeightseven2\nzoneight234\n7pqrstsixteen\n";
const REAL: &str = "one2\n3four\n";

const WORDS: [&str; 9] = [
    "one", "two", "three", "four", "five", "six", "seven", "eight", "nine",
];

fn digit_at(line: &str, i: usize, words: bool) -> Option<u32> {
    let rest = &line[i..];
    if let Some(d) = rest.chars().next().and_then(|c| c.to_digit(10)) {
        return Some(d);
    }
    if words {
        return (1..=9).zip(WORDS).find(|(_, w)| rest.starts_with(w)).map(|(d, _)| d);
    }
    None
}

fn calibrate(lines: &[String], words: bool) -> u32 {
    lines
        .iter()
        .map(|line| {
            let digits: Vec<u32> = (0..line.len()).filter_map(|i| digit_at(line, i, words)).collect();
            match (digits.first(), digits.last()) {
                (Some(first), Some(last)) => first * 10 + last,
                _ => 0,
            }
        })
        .sum()
}

macro_rules! calibration_solver {
    ($name:ident, $p1:expr, $p2:expr) => {
        struct $name;

        impl AocParser for $name {
            type Parsed = Vec<String>;

            fn parse(input: &str) -> Result<Self::Parsed, ParseError> {
                Ok(input.lines().map(str::to_string).collect())
            }
        }

        impl Solver for $name {
            const PART_1_EXPECTED: Expected = $p1;
            const PART_2_EXPECTED: Expected = $p2;

            fn part_1(lines: &Self::Parsed, _: InputKind) -> Result<Answer, SolveError> {
                Ok(calibrate(lines, false).into())
            }

            fn part_2(lines: &Self::Parsed, _: InputKind) -> Result<Answer, SolveError> {
                Ok(calibrate(lines, true).into())
            }
        }
    };
}

calibration_solver!(Calibration, Expected::Int(142), Expected::Int(281));
calibration_solver!(WrongFirst, Expected::Int(143), Expected::Int(281));
calibration_solver!(WrongSecond, Expected::Int(142), Expected::Int(280));
calibration_solver!(Unchecked, Expected::Undeclared, Expected::Undeclared);

/// Remembers every input it was asked for
struct Recording {
    inner: MemoryInputs,
    loads: RefCell<Vec<InputKind>>,
}

impl Recording {
    fn new() -> Self {
        let inner = MemoryInputs::new()
            .with(1, InputKind::Sample(Part::One), SAMPLE_1)
            .with(1, InputKind::Sample(Part::Two), SAMPLE_2)
            .with(1, InputKind::Real, REAL);
        Self {
            inner,
            loads: RefCell::new(Vec::new()),
        }
    }

    fn loads(&self) -> Vec<InputKind> {
        self.loads.borrow().clone()
    }
}

impl InputSource for Recording {
    fn load(&self, day: u8, kind: InputKind) -> Result<String, InputError> {
        self.loads.borrow_mut().push(kind);
        self.inner.load(day, kind)
    }
}

/// Logger keeping every record as `LEVEL message`
struct CapturedLogs;

static CAPTURED: Mutex<Vec<String>> = Mutex::new(Vec::new());
static LOGGER: CapturedLogs = CapturedLogs;

impl Log for CapturedLogs {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= Level::Info
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            CAPTURED
                .lock()
                .unwrap()
                .push(format!("{} {}", record.level(), record.args()));
        }
    }

    fn flush(&self) {}
}

fn capture_logs() {
    // tests share the process; only the first call installs the logger
    let _ = log::set_logger(&LOGGER);
    log::set_max_level(LevelFilter::Info);
}

fn logged(line: &str) -> bool {
    CAPTURED.lock().unwrap().iter().any(|l| l == line)
}

fn registry_with<S: Solver + 'static>() -> SolverRegistry {
    RegistryBuilder::new().register_solver::<S>(1, &[]).unwrap().build()
}

#[test]
fn test_calibration_passes_and_solves_real_input() {
    let registry = registry_with::<Calibration>();
    let inputs = Recording::new();

    let report = Runner::new(&registry, &inputs).run(1).unwrap();

    assert_eq!(report.self_test.checked(), 2);
    assert_eq!(report.part_1.answer, Answer::Int(22 + 33));
    assert_eq!(report.part_2.answer, Answer::Int(12 + 34));
    assert_eq!(
        inputs.loads(),
        vec![
            InputKind::Sample(Part::One),
            InputKind::Sample(Part::Two),
            InputKind::Real
        ]
    );
}

#[test]
fn test_wrong_part_1_expectation_aborts_before_real_input() {
    let registry = registry_with::<WrongFirst>();
    let inputs = Recording::new();

    let result = Runner::new(&registry, &inputs).run(1);

    assert!(matches!(
        result,
        Err(HarnessError::SampleMismatch {
            day: 1,
            part: Part::One,
            expected: Expected::Int(143),
            actual: Answer::Int(142),
        })
    ));
    assert_eq!(inputs.loads(), vec![InputKind::Sample(Part::One)]);
}

#[test]
fn test_wrong_part_2_expectation_aborts_before_real_input() {
    let registry = registry_with::<WrongSecond>();
    let inputs = Recording::new();

    let err = Runner::new(&registry, &inputs).run(1).unwrap_err();

    let message = err.to_string();
    assert!(message.contains("part 2"), "{message}");
    assert!(message.contains("280"), "{message}");
    assert!(message.contains("281"), "{message}");
    assert!(!inputs.loads().contains(&InputKind::Real));
}

#[test]
fn test_undeclared_expectations_skip_samples() {
    let registry = registry_with::<Unchecked>();
    let inputs = Recording::new();

    let report = Runner::new(&registry, &inputs).run(1).unwrap();

    assert_eq!(report.self_test.checked(), 0);
    assert_eq!(inputs.loads(), vec![InputKind::Real]);
}

#[test]
fn test_missing_real_input_is_reported() {
    let registry = registry_with::<Calibration>();
    let inputs = MemoryInputs::new()
        .with(1, InputKind::Sample(Part::One), SAMPLE_1)
        .with(1, InputKind::Sample(Part::Two), SAMPLE_2);

    let result = Runner::new(&registry, inputs).run(1);
    assert!(matches!(
        result,
        Err(HarnessError::Input(InputError::Missing {
            day: 1,
            kind: InputKind::Real,
            ..
        }))
    ));
}

#[test]
fn test_outcomes_are_logged() {
    capture_logs();
    let registry = RegistryBuilder::new()
        .register_solver::<Calibration>(7, &[])
        .unwrap()
        .register_solver::<Unchecked>(8, &[])
        .unwrap()
        .build();
    let inputs = MemoryInputs::new()
        .with(7, InputKind::Sample(Part::One), SAMPLE_1)
        .with(7, InputKind::Sample(Part::Two), SAMPLE_2)
        .with(7, InputKind::Real, REAL)
        .with(8, InputKind::Real, REAL);
    let runner = Runner::new(&registry, inputs);

    runner.run(7).unwrap();
    assert!(logged("INFO Tests for day 7 passed"));

    runner.run(8).unwrap();
    assert!(logged("WARN No expected sample answer for day 8 part 1, skipping its self-test"));
    assert!(logged("WARN No expected sample answer for day 8 part 2, skipping its self-test"));
    assert!(!logged("INFO Tests for day 8 passed"));
}
