//! Day 7: Camel Cards

use crate::utils::parse::parse_lines;
use anyhow::{anyhow, bail, ensure};
use aoc_harness::{Answer, AocParser, Expected, InputKind, ParseError, SolveError, Solver};
use aoc_harness_macros::AutoRegisterSolver;
use itertools::Itertools;

#[derive(AutoRegisterSolver)]
#[aoc(day = 7, tags = ["sorting"])]
pub struct Day7;

const JACK: u8 = 11;

#[derive(Debug, Clone)]
pub struct Hand {
    cards: [u8; 5],
    bid: u64,
}

/// Hand type from the sorted card counts, five of a kind ranking highest
fn hand_type(cards: &[u8; 5], jokers_wild: bool) -> u8 {
    let jokers = if jokers_wild {
        cards.iter().filter(|&&c| c == JACK).count()
    } else {
        0
    };
    let mut counts: Vec<usize> = cards
        .iter()
        .filter(|&&c| !jokers_wild || c != JACK)
        .counts()
        .into_values()
        .sorted_unstable_by(|a, b| b.cmp(a))
        .collect();
    match counts.first_mut() {
        Some(top) => *top += jokers,
        None => counts.push(jokers),
    }

    match counts[..] {
        [5] => 6,
        [4, ..] => 5,
        [3, 2] => 4,
        [3, ..] => 3,
        [2, 2, ..] => 2,
        [2, ..] => 1,
        _ => 0,
    }
}

fn card_value(card: u8, jokers_wild: bool) -> u8 {
    if jokers_wild && card == JACK { 1 } else { card }
}

fn winnings(hands: &[Hand], jokers_wild: bool) -> Answer {
    hands
        .iter()
        .map(|hand| {
            let values = hand.cards.map(|c| card_value(c, jokers_wild));
            ((hand_type(&hand.cards, jokers_wild), values), hand.bid)
        })
        .sorted_unstable()
        .enumerate()
        .map(|(rank, (_, bid))| (rank as u64 + 1) * bid)
        .sum::<u64>()
        .into()
}

fn parse_card(c: char) -> anyhow::Result<u8> {
    Ok(match c {
        '2'..='9' => c as u8 - b'0',
        'T' => 10,
        'J' => JACK,
        'Q' => 12,
        'K' => 13,
        'A' => 14,
        _ => bail!("unknown card {c:?}"),
    })
}

fn parse_hand(line: &str) -> anyhow::Result<Hand> {
    let (cards, bid) = line
        .split_once(' ')
        .ok_or_else(|| anyhow!("expected `<cards> <bid>`"))?;
    let cards: Vec<u8> = cards.chars().map(parse_card).collect::<anyhow::Result<_>>()?;
    ensure!(cards.len() == 5, "a hand has five cards, got {}", cards.len());
    Ok(Hand {
        cards: [cards[0], cards[1], cards[2], cards[3], cards[4]],
        bid: bid.trim().parse()?,
    })
}

impl AocParser for Day7 {
    type Parsed = Vec<Hand>;

    fn parse(input: &str) -> Result<Self::Parsed, ParseError> {
        parse_lines(input.trim(), parse_hand)
    }
}

impl Solver for Day7 {
    const PART_1_EXPECTED: Expected = Expected::Int(6440);
    const PART_2_EXPECTED: Expected = Expected::Int(5905);

    fn part_1(hands: &Self::Parsed, _: InputKind) -> Result<Answer, SolveError> {
        Ok(winnings(hands, false))
    }

    fn part_2(hands: &Self::Parsed, _: InputKind) -> Result<Answer, SolveError> {
        Ok(winnings(hands, true))
    }
}
