//! Answer values and sample expectations

use std::fmt;

/// The value computed for one part of a puzzle
///
/// Most puzzles produce integers; a few produce text. Integers are stored
/// as `i128` so every primitive integer converts without loss.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Answer {
    /// A numeric answer
    Int(i128),
    /// A textual answer
    Text(String),
}

macro_rules! answer_from_int {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for Answer {
                fn from(value: $ty) -> Self {
                    Answer::Int(i128::from(value))
                }
            }
        )*
    };
}

answer_from_int!(i8, i16, i32, i64, i128, u8, u16, u32, u64);

impl From<usize> for Answer {
    fn from(value: usize) -> Self {
        // usize is at most 64 bits on every supported target
        Answer::Int(value as i128)
    }
}

impl From<isize> for Answer {
    fn from(value: isize) -> Self {
        Answer::Int(value as i128)
    }
}

impl From<String> for Answer {
    fn from(value: String) -> Self {
        Answer::Text(value)
    }
}

impl From<&str> for Answer {
    fn from(value: &str) -> Self {
        Answer::Text(value.to_string())
    }
}

impl fmt::Display for Answer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Answer::Int(n) => write!(f, "{n}"),
            Answer::Text(s) => f.write_str(s),
        }
    }
}

/// A pre-recorded answer for a sample input, or the absence of one
///
/// `Undeclared` is its own variant so that a declared `Int(0)` is still a
/// real expectation that gets checked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Expected {
    /// No sample answer is known for this part
    #[default]
    Undeclared,
    /// The sample answer is this integer
    Int(i64),
    /// The sample answer is this text
    Text(&'static str),
}

impl Expected {
    /// Whether an expectation was declared at all
    pub fn is_declared(&self) -> bool {
        !matches!(self, Expected::Undeclared)
    }

    /// Compare against a computed answer
    ///
    /// Returns `None` when nothing was declared, otherwise whether the
    /// answer matches.
    pub fn check(&self, actual: &Answer) -> Option<bool> {
        match (self, actual) {
            (Expected::Undeclared, _) => None,
            (Expected::Int(expected), Answer::Int(actual)) => Some(i128::from(*expected) == *actual),
            (Expected::Text(expected), Answer::Text(actual)) => Some(*expected == actual.as_str()),
            _ => Some(false),
        }
    }
}

impl fmt::Display for Expected {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expected::Undeclared => f.write_str("<undeclared>"),
            Expected::Int(n) => write!(f, "{n}"),
            Expected::Text(s) => f.write_str(s),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_declared_zero_is_checked() {
        let expected = Expected::Int(0);
        assert!(expected.is_declared());
        assert_eq!(expected.check(&Answer::from(0u32)), Some(true));
        assert_eq!(expected.check(&Answer::from(1u32)), Some(false));
    }

    #[test]
    fn test_undeclared_never_checks() {
        assert!(!Expected::Undeclared.is_declared());
        assert_eq!(Expected::Undeclared.check(&Answer::from(0)), None);
        assert_eq!(Expected::Undeclared.check(&Answer::from("x")), None);
    }

    #[test]
    fn test_kind_mismatch_fails() {
        assert_eq!(Expected::Int(5).check(&Answer::from("5")), Some(false));
        assert_eq!(Expected::Text("5").check(&Answer::from(5)), Some(false));
        assert_eq!(Expected::Text("abc").check(&Answer::from("abc")), Some(true));
    }

    #[test]
    fn test_large_unsigned_answer_is_lossless() {
        let answer = Answer::from(u64::MAX);
        assert_eq!(answer.to_string(), u64::MAX.to_string());
        assert_eq!(Expected::Int(952408144115).check(&Answer::from(952408144115u64)), Some(true));
    }
}
