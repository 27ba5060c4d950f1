//! Error types for the harness library

use crate::answer::{Answer, Expected};
use crate::input::InputKind;
use crate::solver::Part;
use std::path::PathBuf;
use thiserror::Error;

/// Error type for parsing input data
#[derive(Debug, Clone, Error)]
pub enum ParseError {
    /// Input format doesn't match expected structure
    #[error("Invalid format: {0}")]
    InvalidFormat(String),
}

/// Error type for solving a specific part
#[derive(Debug, Error)]
pub enum SolveError {
    /// The requested part number is not 1 or 2
    #[error("Part {0} is out of range")]
    PartOutOfRange(u8),
    /// The parsed input violates an assumption the algorithm relies on
    #[error("Unsolvable input: {0}")]
    Unsolvable(String),
}

/// Error type for solver operations
#[derive(Debug, Error)]
pub enum SolverError {
    /// No solver is registered for the given day
    #[error("Solver not found for day {0}")]
    NotFound(u8),
    /// Error occurred during parsing
    #[error("Parse error: {0}")]
    ParseError(#[from] ParseError),
    /// Error occurred during solving
    #[error("Solve error: {0}")]
    SolveError(#[from] SolveError),
}

/// Error type for registration failures
#[derive(Debug, Clone, Error)]
pub enum RegistrationError {
    /// Attempted to register a solver for a day that already has one
    #[error("Duplicate solver registration for day {0}")]
    DuplicateSolver(u8),
    /// Day outside 1..=25
    #[error("Day {0} is outside 1..=25")]
    InvalidDay(u8),
}

/// Error type for loading puzzle inputs
#[derive(Debug, Error)]
pub enum InputError {
    /// The input file for this day and kind does not exist
    #[error("Missing {kind} input for day {day} (expected at {})", .path.display())]
    Missing {
        day: u8,
        kind: InputKind,
        path: PathBuf,
    },
    /// The input exists but could not be read
    #[error("Failed to read {kind} input for day {day}: {source}")]
    Io {
        day: u8,
        kind: InputKind,
        #[source]
        source: std::io::Error,
    },
}

/// Error type for a complete harness run
#[derive(Debug, Error)]
pub enum HarnessError {
    /// Creating, parsing or solving failed
    #[error(transparent)]
    Solver(#[from] SolverError),
    /// An input could not be loaded
    #[error(transparent)]
    Input(#[from] InputError),
    /// A sample answer differs from its declared expectation
    #[error("Self-test failed for day {day} part {part}: expected {expected}, got {actual}")]
    SampleMismatch {
        day: u8,
        part: Part,
        expected: Expected,
        actual: Answer,
    },
}

/// Error type for inferring the puzzle day from a date
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CalendarError {
    /// The date is not one of the 25 puzzle days of the event
    #[error("{date} is not a puzzle day (December 1-25, 2023 in UTC-5)")]
    OutsideEvent { date: chrono::NaiveDate },
}
