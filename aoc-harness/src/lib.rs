//! Advent of Code 2023 Solver Harness
//!
//! A type-safe framework for running Advent of Code puzzle solvers. Each day
//! is a solver with its own input parsing and two parts; a shared runner
//! self-tests every solver on its sample inputs before touching the real one.
//!
//! # Overview
//!
//! This library provides:
//! - The [`AocParser`] and [`Solver`] traits and the [`Answer`]/[`Expected`] values
//! - A compile-time plugin registry ([`RegistryBuilder`], [`SolverRegistry`])
//! - A self-testing [`Runner`] over any [`InputSource`]
//! - Day inference from the current time ([`calendar::puzzle_day`])
//!
//! # Quick Example
//!
//! ```
//! use aoc_harness::{
//!     register_solver, Answer, AocParser, Expected, InputKind, MemoryInputs, ParseError, Part,
//!     RegistryBuilder, Runner, SolveError, Solver,
//! };
//!
//! pub struct Sum;
//!
//! impl AocParser for Sum {
//!     type Parsed = Vec<i64>;
//!
//!     fn parse(input: &str) -> Result<Self::Parsed, ParseError> {
//!         input
//!             .lines()
//!             .map(|line| {
//!                 line.parse()
//!                     .map_err(|_| ParseError::InvalidFormat("Expected integer".to_string()))
//!             })
//!             .collect()
//!     }
//! }
//!
//! impl Solver for Sum {
//!     const PART_1_EXPECTED: Expected = Expected::Int(3);
//!
//!     fn part_1(parsed: &Self::Parsed, _: InputKind) -> Result<Answer, SolveError> {
//!         Ok(parsed.iter().sum::<i64>().into())
//!     }
//!
//!     fn part_2(parsed: &Self::Parsed, _: InputKind) -> Result<Answer, SolveError> {
//!         Ok(parsed.iter().max().copied().unwrap_or(0).into())
//!     }
//! }
//!
//! let mut builder = RegistryBuilder::new();
//! register_solver!(builder, Sum, 1);
//! let registry = builder.build();
//!
//! let inputs = MemoryInputs::new()
//!     .with(1, InputKind::Sample(Part::One), "1\n2")
//!     .with(1, InputKind::Real, "1\n2\n3");
//!
//! let report = Runner::new(&registry, inputs).run(1).unwrap();
//! assert_eq!(report.part_1.answer, Answer::Int(6));
//! assert_eq!(report.part_2.answer, Answer::Int(3));
//! ```
//!
//! # Plugin System and Derive Macro
//!
//! Use `#[derive(AutoRegisterSolver)]` to register solvers at compile time:
//! ```ignore
//! #[derive(AutoRegisterSolver)]
//! #[aoc(day = 1, tags = ["easy"])]
//! struct Day1;
//! ```
//!
//! Every plugin linked into the binary is then picked up by
//! [`RegistryBuilder::register_all_plugins`].

mod answer;
pub mod calendar;
mod error;
mod input;
mod instance;
mod registry;
mod runner;
mod solver;

// Re-export public API
pub use answer::{Answer, Expected};
pub use error::{
    CalendarError, HarnessError, InputError, ParseError, RegistrationError, SolveError,
    SolverError,
};
pub use input::{InputKind, InputSource, MemoryInputs};
pub use instance::{DynSolver, SolveResult, SolverInstance};
pub use registry::{
    DAYS_PER_EVENT, RegisterableSolver, RegistryBuilder, SolverFactory, SolverInfo, SolverPlugin,
    SolverRegistry,
};
pub use runner::{RunReport, Runner, SampleCheck, SelfTestReport};
pub use solver::{AocParser, Part, Solver, SolverExt};

// Re-export inventory for use by the derive macro
pub use inventory;

// Re-export the derive macro
pub use aoc_harness_macros::AutoRegisterSolver;
