//! Day 4: Scratchcards

use crate::utils::parse::{parse_lines, uints};
use anyhow::anyhow;
use aoc_harness::{Answer, AocParser, Expected, InputKind, ParseError, SolveError, Solver};
use aoc_harness_macros::AutoRegisterSolver;
use std::collections::HashSet;

#[derive(AutoRegisterSolver)]
#[aoc(day = 4)]
pub struct Day4;

fn parse_card(line: &str) -> anyhow::Result<usize> {
    let (_, numbers) = line.split_once(':').ok_or_else(|| anyhow!("missing ':'"))?;
    let (winning, have) = numbers
        .split_once('|')
        .ok_or_else(|| anyhow!("missing '|'"))?;
    let winning: HashSet<u64> = uints::<u64>(winning)?.into_iter().collect();
    Ok(uints::<u64>(have)?.iter().filter(|n| winning.contains(n)).count())
}

impl AocParser for Day4 {
    /// Matching numbers per card
    type Parsed = Vec<usize>;

    fn parse(input: &str) -> Result<Self::Parsed, ParseError> {
        parse_lines(input.trim(), parse_card)
    }
}

impl Solver for Day4 {
    const PART_1_EXPECTED: Expected = Expected::Int(13);
    const PART_2_EXPECTED: Expected = Expected::Int(30);

    fn part_1(matches: &Self::Parsed, _: InputKind) -> Result<Answer, SolveError> {
        Ok(matches
            .iter()
            .filter(|m| **m > 0)
            .map(|m| 1u64 << (m - 1))
            .sum::<u64>()
            .into())
    }

    fn part_2(matches: &Self::Parsed, _: InputKind) -> Result<Answer, SolveError> {
        let mut copies = vec![1u64; matches.len()];
        for (card, &won) in matches.iter().enumerate() {
            let end = (card + 1 + won).min(matches.len());
            for next in card + 1..end {
                copies[next] += copies[card];
            }
        }
        Ok(copies.iter().sum::<u64>().into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::days::solve_sample;
    use aoc_harness::Part;

    #[test]
    fn test_samples() {
        assert_eq!(solve_sample::<Day4>(sample!(4, 1), Part::One), Answer::Int(13));
        assert_eq!(solve_sample::<Day4>(sample!(4, 2), Part::Two), Answer::Int(30));
    }

    #[test]
    fn test_card_number_is_not_a_match() {
        // the card id must not be counted as a number
        assert_eq!(Day4::parse("Card 5: 5 6 | 5 7").unwrap(), vec![1]);
    }
}
