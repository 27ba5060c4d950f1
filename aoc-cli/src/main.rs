//! AOC CLI - Self-testing runner for one Advent of Code 2023 day

mod cli;
mod config;
mod error;
mod input;
mod output;

// Import aoc-2023 to link the solver plugins
use aoc_2023 as _;

use aoc_harness::{RegistryBuilder, Runner};
use chrono::Utc;
use clap::Parser;
use cli::Args;
use config::Config;
use error::CliError;
use input::InputStore;
use log::info;
use output::OutputFormatter;

fn main() {
    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(e) => {
            let _ = e.print();
            std::process::exit(usage_exit_code(&e));
        }
    };

    init_logging(&args);

    if let Err(e) = run(args) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

/// Help and version go to stdout and succeed; every usage error exits 1
fn usage_exit_code(err: &clap::Error) -> i32 {
    if err.use_stderr() { 1 } else { 0 }
}

/// Set up env_logger; `RUST_LOG` overrides the level chosen by -q/-v
fn init_logging(args: &Args) {
    env_logger::Builder::new()
        .filter_level(config::log_level(args.quiet, args.verbose))
        .parse_default_env()
        .format_timestamp(None)
        .init();
}

fn run(args: Args) -> Result<(), CliError> {
    let registry = RegistryBuilder::new().register_all_plugins()?.build();
    let formatter = OutputFormatter::new(args.quiet);

    if args.list {
        formatter.print_listing(registry.iter_info());
        return Ok(());
    }

    let config = Config::from_args(&args, Utc::now())?;
    if config.day_inferred {
        info!("No day given, running day {} from today's date", config.day);
    }

    let runner = Runner::new(&registry, InputStore::new(config.input_dir));
    let report = runner.run(config.day)?;
    formatter.print_report(&report);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use aoc_harness::{HarnessError, InputError};
    use tempfile::TempDir;

    fn parse_error(argv: &[&str]) -> clap::Error {
        Args::try_parse_from(argv).unwrap_err()
    }

    #[test]
    fn test_usage_errors_exit_one() {
        assert_eq!(usage_exit_code(&parse_error(&["aoc", "26"])), 1);
        assert_eq!(usage_exit_code(&parse_error(&["aoc", "seven"])), 1);
        assert_eq!(usage_exit_code(&parse_error(&["aoc", "--bogus"])), 1);
    }

    #[test]
    fn test_help_and_version_exit_zero() {
        assert_eq!(usage_exit_code(&parse_error(&["aoc", "--help"])), 0);
        assert_eq!(usage_exit_code(&parse_error(&["aoc", "--version"])), 0);
    }

    #[test]
    fn test_missing_inputs_fail_the_run() {
        let temp = TempDir::new().unwrap();
        let dir = temp.path().to_str().unwrap();
        let args = Args::try_parse_from(["aoc", "1", "--input-dir", dir]).unwrap();

        match run(args) {
            Err(CliError::Harness(HarnessError::Input(InputError::Missing { day, .. }))) => {
                assert_eq!(day, 1)
            }
            other => panic!("expected a missing input, got {other:?}"),
        }
    }

    #[test]
    fn test_list_needs_no_inputs() {
        let args = Args::try_parse_from(["aoc", "--list", "-q"]).unwrap();
        assert!(run(args).is_ok());
    }
}
