//! Core solver traits and related types

use crate::answer::{Answer, Expected};
use crate::error::{ParseError, SolveError};
use crate::input::InputKind;
use std::fmt;

/// One of the two parts every puzzle has
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Part {
    One,
    Two,
}

impl Part {
    /// Both parts in solving order
    pub const ALL: [Part; 2] = [Part::One, Part::Two];

    /// The part number (1 or 2)
    pub fn number(self) -> u8 {
        match self {
            Part::One => 1,
            Part::Two => 2,
        }
    }
}

impl TryFrom<u8> for Part {
    type Error = SolveError;

    fn try_from(part: u8) -> Result<Self, Self::Error> {
        match part {
            1 => Ok(Part::One),
            2 => Ok(Part::Two),
            _ => Err(SolveError::PartOutOfRange(part)),
        }
    }
}

impl fmt::Display for Part {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.number())
    }
}

/// Trait for parsing puzzle input into the solver's representation
///
/// # Example
///
/// ```
/// use aoc_harness::{AocParser, ParseError};
///
/// struct Day1;
///
/// impl AocParser for Day1 {
///     type Parsed = Vec<i32>;
///
///     fn parse(input: &str) -> Result<Self::Parsed, ParseError> {
///         input
///             .lines()
///             .map(|l| l.parse().map_err(|_| ParseError::InvalidFormat("bad int".into())))
///             .collect()
///     }
/// }
/// ```
pub trait AocParser {
    /// The intermediate representation both parts work on
    type Parsed;

    /// Parse the raw input. Must be a deterministic function of its lines.
    fn parse(input: &str) -> Result<Self::Parsed, ParseError>;
}

/// Core trait that every puzzle solver implements
///
/// A solver computes two answers from its parsed representation and may
/// declare the answers its sample inputs are known to produce. Parts receive
/// the [`InputKind`] because a few puzzles use different constants for their
/// samples than for the real input.
///
/// # Example
///
/// ```
/// use aoc_harness::{Answer, AocParser, Expected, InputKind, ParseError, SolveError, Solver};
///
/// struct Day1;
///
/// impl AocParser for Day1 {
///     type Parsed = Vec<i64>;
///
///     fn parse(input: &str) -> Result<Self::Parsed, ParseError> {
///         input
///             .lines()
///             .map(|l| l.parse().map_err(|_| ParseError::InvalidFormat("bad int".into())))
///             .collect()
///     }
/// }
///
/// impl Solver for Day1 {
///     const PART_1_EXPECTED: Expected = Expected::Int(6);
///
///     fn part_1(parsed: &Self::Parsed, _kind: InputKind) -> Result<Answer, SolveError> {
///         Ok(parsed.iter().sum::<i64>().into())
///     }
///
///     fn part_2(parsed: &Self::Parsed, _kind: InputKind) -> Result<Answer, SolveError> {
///         Ok(parsed.iter().product::<i64>().into())
///     }
/// }
/// ```
pub trait Solver: AocParser {
    /// Answer of part 1 on its sample input
    const PART_1_EXPECTED: Expected = Expected::Undeclared;
    /// Answer of part 2 on its sample input
    const PART_2_EXPECTED: Expected = Expected::Undeclared;

    /// Solve part 1
    fn part_1(parsed: &Self::Parsed, kind: InputKind) -> Result<Answer, SolveError>;

    /// Solve part 2
    fn part_2(parsed: &Self::Parsed, kind: InputKind) -> Result<Answer, SolveError>;
}

/// Part-indexed access to a [`Solver`]
pub trait SolverExt: Solver {
    /// Dispatch to the given part
    fn solve_part(parsed: &Self::Parsed, part: Part, kind: InputKind) -> Result<Answer, SolveError> {
        match part {
            Part::One => Self::part_1(parsed, kind),
            Part::Two => Self::part_2(parsed, kind),
        }
    }

    /// The declared sample answer of the given part
    fn expected(part: Part) -> Expected {
        match part {
            Part::One => Self::PART_1_EXPECTED,
            Part::Two => Self::PART_2_EXPECTED,
        }
    }
}

impl<T: Solver + ?Sized> SolverExt for T {}
