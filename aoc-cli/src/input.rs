//! File-backed puzzle inputs

use aoc_harness::{InputError, InputKind, InputSource};
use log::debug;
use std::fs;
use std::io::ErrorKind;
use std::path::PathBuf;

/// Inputs laid out as `{root}/day{N}/{input,part1,part2}.txt`
pub struct InputStore {
    root: PathBuf,
}

impl InputStore {
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }

    /// Path of one input
    pub fn path(&self, day: u8, kind: InputKind) -> PathBuf {
        self.root
            .join(format!("day{day}"))
            .join(format!("{}.txt", kind.file_stem()))
    }
}

impl InputSource for InputStore {
    fn load(&self, day: u8, kind: InputKind) -> Result<String, InputError> {
        let path = self.path(day, kind);
        debug!("Reading {kind} input for day {day} from {}", path.display());

        fs::read_to_string(&path).map_err(|source| match source.kind() {
            ErrorKind::NotFound => InputError::Missing { day, kind, path },
            _ => InputError::Io { day, kind, source },
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use aoc_harness::Part;
    use tempfile::TempDir;

    #[test]
    fn test_layout() {
        let store = InputStore::new(PathBuf::from("inputs"));
        assert_eq!(store.path(7, InputKind::Real), PathBuf::from("inputs/day7/input.txt"));
        assert_eq!(
            store.path(25, InputKind::Sample(Part::Two)),
            PathBuf::from("inputs/day25/part2.txt")
        );
    }

    #[test]
    fn test_load_present_and_missing() {
        let temp = TempDir::new().unwrap();
        fs::create_dir(temp.path().join("day3")).unwrap();
        fs::write(temp.path().join("day3/part1.txt"), "467..114..\n").unwrap();

        let store = InputStore::new(temp.path().to_path_buf());
        assert_eq!(
            store.load(3, InputKind::Sample(Part::One)).unwrap(),
            "467..114..\n"
        );

        match store.load(3, InputKind::Real) {
            Err(InputError::Missing { day, kind, path }) => {
                assert_eq!(day, 3);
                assert_eq!(kind, InputKind::Real);
                assert_eq!(path, temp.path().join("day3/input.txt"));
            }
            other => panic!("expected a missing input, got {other:?}"),
        }
    }

    #[test]
    fn test_unreadable_input_is_io_error() {
        let temp = TempDir::new().unwrap();
        // a directory where the file should be
        fs::create_dir_all(temp.path().join("day1/input.txt")).unwrap();

        let store = InputStore::new(temp.path().to_path_buf());
        assert!(matches!(
            store.load(1, InputKind::Real),
            Err(InputError::Io { day: 1, .. })
        ));
    }
}
