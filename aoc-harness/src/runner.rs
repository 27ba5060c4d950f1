//! Self-testing runner that drives one day from samples to real answers

use crate::answer::Expected;
use crate::error::{HarnessError, SolverError};
use crate::input::{InputKind, InputSource};
use crate::instance::SolveResult;
use crate::registry::{SolverInfo, SolverRegistry};
use crate::solver::Part;
use chrono::{DateTime, TimeDelta, Utc};
use log::{debug, info, warn};

/// Outcome of the self-test of one part
#[derive(Debug, Clone)]
pub struct SampleCheck {
    /// The part that was checked
    pub part: Part,
    /// The declared sample answer
    pub expected: Expected,
    /// The computed sample answer, `None` when the part had no expectation
    pub result: Option<SolveResult>,
}

impl SampleCheck {
    /// Whether the sample was skipped for lack of an expectation
    pub fn skipped(&self) -> bool {
        self.result.is_none()
    }
}

/// Outcome of the self-test phase
#[derive(Debug, Clone)]
pub struct SelfTestReport {
    pub day: u8,
    pub checks: Vec<SampleCheck>,
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
}

impl SelfTestReport {
    /// Time spent on the self-test, sample loading included
    pub fn duration(&self) -> TimeDelta {
        self.end - self.start
    }

    /// Number of parts whose sample was actually checked
    pub fn checked(&self) -> usize {
        self.checks.iter().filter(|c| !c.skipped()).count()
    }
}

/// Everything a complete run of one day produced
#[derive(Debug, Clone)]
pub struct RunReport {
    pub day: u8,
    pub self_test: SelfTestReport,
    pub parse_start: DateTime<Utc>,
    pub parse_end: DateTime<Utc>,
    pub part_1: SolveResult,
    pub part_2: SolveResult,
}

impl RunReport {
    /// Time spent parsing the real input
    pub fn parse_duration(&self) -> TimeDelta {
        self.parse_end - self.parse_start
    }

    /// The result of the given part on the real input
    pub fn result(&self, part: Part) -> &SolveResult {
        match part {
            Part::One => &self.part_1,
            Part::Two => &self.part_2,
        }
    }
}

/// Runs registered solvers against inputs from an [`InputSource`]
///
/// A run first checks every declared sample answer. Only when all of them
/// match is the real input loaded, parsed and solved.
///
/// # Example
///
/// ```no_run
/// use aoc_harness::{MemoryInputs, RegistryBuilder, Runner};
///
/// let registry = RegistryBuilder::new().register_all_plugins().unwrap().build();
/// let runner = Runner::new(&registry, MemoryInputs::new());
/// let report = runner.run(1).unwrap();
/// println!("{} {}", report.part_1.answer, report.part_2.answer);
/// ```
pub struct Runner<'r, I> {
    registry: &'r SolverRegistry,
    inputs: I,
}

impl<'r, I: InputSource> Runner<'r, I> {
    pub fn new(registry: &'r SolverRegistry, inputs: I) -> Self {
        Self { registry, inputs }
    }

    fn info(&self, day: u8) -> Result<SolverInfo, SolverError> {
        self.registry.info(day).ok_or(SolverError::NotFound(day))
    }

    /// Check the declared sample answers of a day
    ///
    /// Parts without an expectation are skipped with a warning and their
    /// sample is never read. The first mismatch aborts with
    /// [`HarnessError::SampleMismatch`].
    pub fn self_test(&self, day: u8) -> Result<SelfTestReport, HarnessError> {
        let info = self.info(day)?;
        let start = Utc::now();
        let mut checks = Vec::with_capacity(Part::ALL.len());

        for part in Part::ALL {
            let expected = info.expected(part);
            if !expected.is_declared() {
                warn!("No expected sample answer for day {day} part {part}, skipping its self-test");
                checks.push(SampleCheck {
                    part,
                    expected,
                    result: None,
                });
                continue;
            }

            let kind = InputKind::Sample(part);
            let input = self.inputs.load(day, kind)?;
            debug!("Loaded {kind} input for day {day} ({} bytes)", input.len());

            let solver = self.registry.create_solver(day, &input, kind)?;
            let result = solver.solve(part).map_err(SolverError::from)?;

            if expected.check(&result.answer) != Some(true) {
                return Err(HarnessError::SampleMismatch {
                    day,
                    part,
                    expected,
                    actual: result.answer,
                });
            }
            debug!("Day {day} part {part} sample answer {} matches", result.answer);

            checks.push(SampleCheck {
                part,
                expected,
                result: Some(result),
            });
        }

        let report = SelfTestReport {
            day,
            checks,
            start,
            end: Utc::now(),
        };
        if report.checked() > 0 {
            info!("Tests for day {day} passed");
        } else {
            info!("Day {day} declares no sample answers, nothing to test");
        }
        Ok(report)
    }

    /// Self-test a day, then solve both parts on its real input
    ///
    /// An unregistered day fails with [`SolverError::NotFound`] before any
    /// input is touched.
    pub fn run(&self, day: u8) -> Result<RunReport, HarnessError> {
        let self_test = self.self_test(day)?;

        let input = self.inputs.load(day, InputKind::Real)?;
        debug!("Loaded real input for day {day} ({} bytes)", input.len());

        let solver = self.registry.create_solver(day, &input, InputKind::Real)?;
        info!("Parsed day {day} real input");

        let part_1 = solver.solve(Part::One).map_err(SolverError::from)?;
        info!("Solved day {day} part 1");
        let part_2 = solver.solve(Part::Two).map_err(SolverError::from)?;
        info!("Solved day {day} part 2");

        Ok(RunReport {
            day,
            self_test,
            parse_start: solver.parse_start(),
            parse_end: solver.parse_end(),
            part_1,
            part_2,
        })
    }
}
