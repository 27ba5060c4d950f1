//! CLI argument parsing using clap

use clap::Parser;
use std::path::PathBuf;

/// Advent of Code 2023 solver runner
///
/// Self-tests the chosen day on its sample inputs, then solves both parts of
/// the real input.
#[derive(Parser, Debug)]
#[command(name = "aoc", about = "Run a self-tested Advent of Code 2023 solver", version)]
pub struct Args {
    /// Day to run (inferred from the current date in UTC-5 if omitted)
    #[arg(value_parser = clap::value_parser!(u8).range(1..=25))]
    pub day: Option<u8>,

    /// Directory holding `day<N>/input.txt`, `part1.txt` and `part2.txt`
    #[arg(long, env = "AOC_INPUT_DIR", default_value = "resources/input")]
    pub input_dir: PathBuf,

    /// Quiet mode - only output answers
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,

    /// More log output (-v for debug, -vv for trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// List the registered days and exit
    #[arg(long)]
    pub list: bool,
}
