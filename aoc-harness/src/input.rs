//! Input kinds and the sources that provide them

use crate::error::InputError;
use crate::solver::Part;
use std::collections::HashMap;
use std::fmt;

/// Which of a day's three inputs is meant
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InputKind {
    /// The full puzzle input
    Real,
    /// The abbreviated sample used to self-test the given part
    Sample(Part),
}

impl InputKind {
    /// Whether this is one of the sample inputs
    pub fn is_sample(self) -> bool {
        matches!(self, InputKind::Sample(_))
    }

    /// File stem used by the on-disk layout (`input`, `part1`, `part2`)
    pub fn file_stem(self) -> &'static str {
        match self {
            InputKind::Real => "input",
            InputKind::Sample(Part::One) => "part1",
            InputKind::Sample(Part::Two) => "part2",
        }
    }
}

impl fmt::Display for InputKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InputKind::Real => f.write_str("real"),
            InputKind::Sample(part) => write!(f, "part {part} sample"),
        }
    }
}

/// Anything that can hand out a day's inputs
pub trait InputSource {
    /// Load the raw text of one input
    fn load(&self, day: u8, kind: InputKind) -> Result<String, InputError>;
}

impl<T: InputSource + ?Sized> InputSource for &T {
    fn load(&self, day: u8, kind: InputKind) -> Result<String, InputError> {
        (**self).load(day, kind)
    }
}

/// Inputs held in memory, keyed by day and kind
///
/// Useful for embedding samples and for tests.
#[derive(Debug, Clone, Default)]
pub struct MemoryInputs {
    inputs: HashMap<(u8, InputKind), String>,
}

impl MemoryInputs {
    /// Create an empty set of inputs
    pub fn new() -> Self {
        Self::default()
    }

    /// Add (or replace) one input, returning self for chaining
    pub fn with(mut self, day: u8, kind: InputKind, text: impl Into<String>) -> Self {
        self.insert(day, kind, text);
        self
    }

    /// Add (or replace) one input
    pub fn insert(&mut self, day: u8, kind: InputKind, text: impl Into<String>) {
        self.inputs.insert((day, kind), text.into());
    }
}

impl InputSource for MemoryInputs {
    fn load(&self, day: u8, kind: InputKind) -> Result<String, InputError> {
        self.inputs
            .get(&(day, kind))
            .cloned()
            .ok_or_else(|| InputError::Missing {
                day,
                kind,
                path: format!("<memory>/day{day}/{}.txt", kind.file_stem()).into(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_stems() {
        assert_eq!(InputKind::Real.file_stem(), "input");
        assert_eq!(InputKind::Sample(Part::One).file_stem(), "part1");
        assert_eq!(InputKind::Sample(Part::Two).file_stem(), "part2");
    }

    #[test]
    fn test_memory_inputs_lookup() {
        let inputs = MemoryInputs::new()
            .with(3, InputKind::Real, "real")
            .with(3, InputKind::Sample(Part::Two), "sample");

        assert_eq!(inputs.load(3, InputKind::Real).unwrap(), "real");
        assert_eq!(inputs.load(3, InputKind::Sample(Part::Two)).unwrap(), "sample");
        assert!(matches!(
            inputs.load(3, InputKind::Sample(Part::One)),
            Err(InputError::Missing { day: 3, .. })
        ));
    }
}
