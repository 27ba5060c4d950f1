//! Solver instance implementation

use crate::answer::Answer;
use crate::error::{ParseError, SolveError};
use crate::input::InputKind;
use crate::solver::{Part, Solver, SolverExt};
use chrono::{DateTime, TimeDelta, Utc};

/// Result from solving a puzzle part, including timing information
#[derive(Debug, Clone)]
pub struct SolveResult {
    /// The part that was solved
    pub part: Part,
    /// The computed answer
    pub answer: Answer,
    /// When solving started (UTC)
    pub solve_start: DateTime<Utc>,
    /// When solving completed (UTC)
    pub solve_end: DateTime<Utc>,
}

impl SolveResult {
    /// Get the solve duration as TimeDelta
    pub fn duration(&self) -> TimeDelta {
        self.solve_end - self.solve_start
    }
}

/// A solver bound to one parsed input
///
/// Holds the parsed representation together with the day, the kind of input
/// it came from and the parse timestamps.
pub struct SolverInstance<S: Solver> {
    day: u8,
    kind: InputKind,
    parsed: S::Parsed,
    parse_start: DateTime<Utc>,
    parse_end: DateTime<Utc>,
}

impl<S: Solver> SolverInstance<S> {
    /// Create a new solver instance by parsing input
    ///
    /// Records parse timing internally.
    ///
    /// # Returns
    /// * `Ok(SolverInstance)` - Successfully parsed
    /// * `Err(ParseError)` - Parsing failed
    pub fn new(day: u8, kind: InputKind, input: &str) -> Result<Self, ParseError> {
        let parse_start = Utc::now();
        let parsed = S::parse(input)?;
        let parse_end = Utc::now();

        Ok(Self {
            day,
            kind,
            parsed,
            parse_start,
            parse_end,
        })
    }
}

/// Type-erased interface for working with any solver through dynamic dispatch
///
/// The registry hands these out so callers never need to name a concrete
/// solver type.
///
/// # Example
///
/// ```no_run
/// use aoc_harness::{DynSolver, Part};
///
/// fn example(solver: Box<dyn DynSolver>) -> Result<(), Box<dyn std::error::Error>> {
///     let result = solver.solve(Part::One)?;
///     println!("Part 1: {} (took {:?})", result.answer, result.duration());
///
///     let result = solver.solve(Part::Two)?;
///     println!("Part 2: {} (took {:?})", result.answer, result.duration());
///
///     println!("Parse took {:?}", solver.parse_end() - solver.parse_start());
///     Ok(())
/// }
/// ```
pub trait DynSolver {
    /// Solve the specified part with timing
    fn solve(&self, part: Part) -> Result<SolveResult, SolveError>;

    /// Get the parse start time (UTC)
    fn parse_start(&self) -> DateTime<Utc>;

    /// Get the parse end time (UTC)
    fn parse_end(&self) -> DateTime<Utc>;

    /// Get the day for this solver
    fn day(&self) -> u8;
}

impl<S: Solver> DynSolver for SolverInstance<S> {
    fn solve(&self, part: Part) -> Result<SolveResult, SolveError> {
        let solve_start = Utc::now();
        let answer = S::solve_part(&self.parsed, part, self.kind)?;
        let solve_end = Utc::now();

        Ok(SolveResult {
            part,
            answer,
            solve_start,
            solve_end,
        })
    }

    fn parse_start(&self) -> DateTime<Utc> {
        self.parse_start
    }

    fn parse_end(&self) -> DateTime<Utc> {
        self.parse_end
    }

    fn day(&self) -> u8 {
        self.day
    }
}
