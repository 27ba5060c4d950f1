//! Small parsing helpers shared by the solvers

use anyhow::Context;
use aoc_harness::ParseError;
use regex::Regex;
use std::str::FromStr;
use std::sync::LazyLock;

static SIGNED: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"-?\d+").expect("valid pattern"));
static UNSIGNED: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\d+").expect("valid pattern"));

fn numbers<T>(pattern: &Regex, text: &str) -> anyhow::Result<Vec<T>>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    pattern
        .find_iter(text)
        .map(|m| {
            m.as_str()
                .parse()
                .with_context(|| format!("{:?} does not fit the target integer", m.as_str()))
        })
        .collect()
}

/// Every signed integer in the text, in order; any that overflows `T` is an error
pub fn ints<T>(text: &str) -> anyhow::Result<Vec<T>>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    numbers(&SIGNED, text)
}

/// Every unsigned integer in the text, in order; minus signs are ignored
pub fn uints<T>(text: &str) -> anyhow::Result<Vec<T>>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    numbers(&UNSIGNED, text)
}

/// Converts a solver-internal error into the harness error, keeping its context chain
pub fn invalid(err: anyhow::Error) -> ParseError {
    ParseError::InvalidFormat(format!("{err:#}"))
}

/// Parses every line with `f`, reporting the first failure with its 1-based line number
pub fn parse_lines<T, F>(input: &str, f: F) -> Result<Vec<T>, ParseError>
where
    F: Fn(&str) -> anyhow::Result<T>,
{
    input
        .lines()
        .enumerate()
        .map(|(idx, line)| f(line).with_context(|| format!("line {}", idx + 1)))
        .collect::<anyhow::Result<Vec<_>>>()
        .map_err(invalid)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ints() {
        assert_eq!(ints::<i64>("Game 12: x=-3, y=4").unwrap(), vec![12, -3, 4]);
        assert_eq!(uints::<u64>("a-3 b7").unwrap(), vec![3, 7]);
        assert!(ints::<i64>("none").unwrap().is_empty());
    }

    #[test]
    fn test_overflow_is_an_error() {
        let err = uints::<i64>("1 9223372036854775808").unwrap_err();
        assert!(err.to_string().contains("9223372036854775808"), "{err}");
        assert!(ints::<i8>("-129").is_err());
        assert_eq!(uints::<u64>("9223372036854775808").unwrap(), vec![1 << 63]);
    }

    #[test]
    fn test_parse_lines_reports_line() {
        let err = parse_lines("1\n2\nx", |l| Ok(l.parse::<u8>()?)).unwrap_err();
        match err {
            ParseError::InvalidFormat(msg) => assert!(msg.starts_with("line 3: "), "{msg}"),
            other => panic!("unexpected {other:?}"),
        }
    }
}
