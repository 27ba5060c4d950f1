//! Configuration resolution from CLI args

use crate::cli::Args;
use crate::error::CliError;
use aoc_harness::calendar;
use chrono::{DateTime, Utc};
use log::LevelFilter;
use std::path::{Path, PathBuf};

/// Resolved runtime configuration
#[derive(Debug)]
pub struct Config {
    /// The day to run
    pub day: u8,
    /// Whether the day was inferred from the date rather than given
    pub day_inferred: bool,
    /// Root of the input layout
    pub input_dir: PathBuf,
}

impl Config {
    /// Build config from CLI args
    ///
    /// `now` is only consulted when no day was given.
    pub fn from_args(args: &Args, now: DateTime<Utc>) -> Result<Self, CliError> {
        let input_dir = expand_tilde(&args.input_dir);
        if input_dir.as_os_str().is_empty() {
            return Err(CliError::Config("input directory must not be empty".to_string()));
        }

        let (day, day_inferred) = match args.day {
            Some(day) => (day, false),
            None => (calendar::puzzle_day(&now)?, true),
        };

        Ok(Config {
            day,
            day_inferred,
            input_dir,
        })
    }
}

/// Log level for the given quiet flag and `-v` count, unless `RUST_LOG` says otherwise
pub fn log_level(quiet: bool, verbose: u8) -> LevelFilter {
    match (quiet, verbose) {
        (true, _) => LevelFilter::Error,
        (false, 0) => LevelFilter::Info,
        (false, 1) => LevelFilter::Debug,
        (false, _) => LevelFilter::Trace,
    }
}

/// Expand ~ to home directory
fn expand_tilde(path: &Path) -> PathBuf {
    if let Some(path_str) = path.to_str()
        && let Some(rest) = path_str.strip_prefix('~')
        && (rest.is_empty() || rest.starts_with('/'))
        && let Some(home) = dirs::home_dir()
    {
        return home.join(rest.trim_start_matches('/'));
    }
    path.to_path_buf()
}

#[cfg(test)]
mod tests {
    use super::*;
    use aoc_harness::CalendarError;
    use chrono::TimeZone;
    use clap::Parser;

    fn args(argv: &[&str]) -> Args {
        Args::try_parse_from(std::iter::once("aoc").chain(argv.iter().copied())).unwrap()
    }

    fn december(day: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2023, 12, day, 12, 0, 0).unwrap()
    }

    #[test]
    fn test_explicit_day_ignores_clock() {
        let july = Utc.with_ymd_and_hms(2024, 7, 1, 0, 0, 0).unwrap();
        let config = Config::from_args(&args(&["7", "--input-dir", "inputs"]), july).unwrap();
        assert_eq!(config.day, 7);
        assert!(!config.day_inferred);
        assert_eq!(config.input_dir, PathBuf::from("inputs"));
    }

    #[test]
    fn test_day_inferred_from_clock() {
        let config = Config::from_args(&args(&["--input-dir", "inputs"]), december(14)).unwrap();
        assert_eq!(config.day, 14);
        assert!(config.day_inferred);
    }

    #[test]
    fn test_inference_outside_event_fails() {
        let january = Utc.with_ymd_and_hms(2024, 1, 3, 12, 0, 0).unwrap();
        let err = Config::from_args(&args(&["--input-dir", "inputs"]), january).unwrap_err();
        assert!(matches!(err, CliError::Calendar(CalendarError::OutsideEvent { .. })));
    }

    #[test]
    fn test_log_levels() {
        assert_eq!(log_level(true, 3), LevelFilter::Error);
        assert_eq!(log_level(false, 0), LevelFilter::Info);
        assert_eq!(log_level(false, 1), LevelFilter::Debug);
        assert_eq!(log_level(false, 5), LevelFilter::Trace);
    }

    #[test]
    fn test_expand_tilde() {
        assert_eq!(expand_tilde(Path::new("/abs/path")), PathBuf::from("/abs/path"));
        assert_eq!(expand_tilde(Path::new("~user/x")), PathBuf::from("~user/x"));
        if let Some(home) = dirs::home_dir() {
            assert_eq!(expand_tilde(Path::new("~/aoc")), home.join("aoc"));
            assert_eq!(expand_tilde(Path::new("~")), home);
        }
    }
}
