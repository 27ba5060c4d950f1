//! Error types for the CLI

use thiserror::Error;

/// Main CLI error type
#[derive(Error, Debug)]
pub enum CliError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// No day given and today is not a puzzle day
    #[error("Cannot infer the day: {0}")]
    Calendar(#[from] aoc_harness::CalendarError),

    /// Self-test, input or solver failure
    #[error(transparent)]
    Harness(#[from] aoc_harness::HarnessError),

    /// Registration error
    #[error("Registration error: {0}")]
    Registration(#[from] aoc_harness::RegistrationError),
}
