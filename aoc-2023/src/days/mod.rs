//! One module per puzzle day
//!
//! Days 17, 22 and 23 have no solver.

/// Sample input of a day and part, relative to this directory
///
/// Defined ahead of the day modules so they see it without an import.
#[cfg(test)]
macro_rules! sample {
    ($day:literal, $part:literal) => {
        include_str!(concat!(
            "../../../resources/input/day",
            $day,
            "/part",
            $part,
            ".txt"
        ))
    };
}

/// Parse a sample and solve one part of it the way the self-test does
#[cfg(test)]
pub(crate) fn solve_sample<S: aoc_harness::Solver>(
    input: &str,
    part: aoc_harness::Part,
) -> aoc_harness::Answer {
    use aoc_harness::SolverExt;

    let parsed = S::parse(input).expect("sample parses");
    S::solve_part(&parsed, part, aoc_harness::InputKind::Sample(part)).expect("sample solves")
}

pub mod day_01;
pub mod day_02;
pub mod day_03;
pub mod day_04;
pub mod day_05;
pub mod day_06;
pub mod day_07;
pub mod day_08;
pub mod day_09;
pub mod day_10;
pub mod day_11;
pub mod day_12;
pub mod day_13;
pub mod day_14;
pub mod day_15;
pub mod day_16;
pub mod day_18;
pub mod day_19;
pub mod day_20;
pub mod day_21;
pub mod day_24;
pub mod day_25;
