// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Five cards poker hand evaluator.
//!
//! A [Hand] is built from five distinct cards, on construction it groups the
//! cards by face, assigns a [Category] and computes a tiebreaker, the two make
//! the [HandValue] used to order hands.
//!
//! Straights are ace high only, `A 2 3 4 5` is not a straight.
use ahash::AHashSet;
use serde::{Deserialize, Serialize};
use std::{cmp::Ordering, fmt, str::FromStr};
use thiserror::Error;

use showdown_cards::{Card, Face, ParseCardError};

const HAND_SIZE: usize = 5;

/// Error returned when a hand cannot be built.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HandError {
    /// A card token is invalid.
    #[error(transparent)]
    InvalidCard(#[from] ParseCardError),
    /// The hand doesn't have exactly five cards.
    #[error("a hand has {expected} cards, got {0}", expected = Hand::SIZE)]
    CardCount(usize),
    /// The same card appears more than once.
    #[error("duplicate card {0}")]
    DuplicateCard(Card),
}

/// A hand category, ordered from the weakest to the strongest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Category {
    /// High card.
    HighCard = 0,
    /// One pair.
    OnePair,
    /// Two pair.
    TwoPair,
    /// Three of a kind.
    ThreeOfAKind,
    /// Straight.
    Straight,
    /// Flush.
    Flush,
    /// Full house.
    FullHouse,
    /// Four of a kind.
    FourOfAKind,
    /// Straight flush.
    StraightFlush,
}

impl Category {
    /// Number of categories.
    pub const COUNT: usize = 9;

    /// Returns all categories from the weakest to the strongest.
    pub fn categories() -> impl DoubleEndedIterator<Item = Category> {
        use Category::*;
        [
            HighCard,
            OnePair,
            TwoPair,
            ThreeOfAKind,
            Straight,
            Flush,
            FullHouse,
            FourOfAKind,
            StraightFlush,
        ]
        .into_iter()
    }

    /// The category position, high card is 0.
    pub fn rank(&self) -> u8 {
        *self as u8
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let category = match self {
            Category::HighCard => "High Card",
            Category::OnePair => "One Pair",
            Category::TwoPair => "Two Pair",
            Category::ThreeOfAKind => "Three of a Kind",
            Category::Straight => "Straight",
            Category::Flush => "Flush",
            Category::FullHouse => "Full House",
            Category::FourOfAKind => "Four of a Kind",
            Category::StraightFlush => "Straight Flush",
        };

        f.write_str(category)
    }
}

/// The value of a hand used for comparisons.
///
/// Values compare by category first, and by tiebreaker if the categories are
/// the same.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct HandValue {
    category: Category,
    tiebreaker: Vec<(u8, Face)>,
}

impl HandValue {
    /// The hand category.
    pub fn category(&self) -> Category {
        self.category
    }

    /// The `(count, face)` groups sorted by descending count and then by
    /// descending face.
    pub fn tiebreaker(&self) -> &[(u8, Face)] {
        &self.tiebreaker
    }
}

/// A five cards poker hand.
///
/// ```
/// # use showdown_eval::{Category, Hand};
/// let h1 = "2H 2D 3C 3S 3H".parse::<Hand>().unwrap();
/// let h2 = "5c,5d,5h,5s,kh".parse::<Hand>().unwrap();
/// assert_eq!(h1.category(), Category::FullHouse);
/// assert_eq!(h2.category(), Category::FourOfAKind);
/// assert!(h2 > h1);
/// assert_eq!(h2.to_string(), "5C 5D 5H 5S KH");
/// ```
#[derive(Debug, Clone)]
pub struct Hand {
    cards: [Card; HAND_SIZE],
    face_pattern: Vec<u8>,
    value: HandValue,
}

impl Hand {
    /// The number of cards in a hand.
    pub const SIZE: usize = HAND_SIZE;

    /// Creates a hand from five distinct cards.
    pub fn new(cards: &[Card]) -> Result<Self, HandError> {
        let cards: [Card; HAND_SIZE] = cards
            .try_into()
            .map_err(|_| HandError::CardCount(cards.len()))?;

        let mut seen = AHashSet::with_capacity(Hand::SIZE);
        if let Some(card) = cards.iter().find(|c| !seen.insert(**c)) {
            return Err(HandError::DuplicateCard(*card));
        }

        let mut counts = [0u8; Face::COUNT];
        for card in &cards {
            counts[card.ordinal() as usize] += 1;
        }

        // Sorting ascending and reversing puts the largest groups first and
        // breaks ties on the higher face.
        let mut tiebreaker = Face::faces()
            .zip(counts)
            .filter(|(_, count)| *count > 0)
            .map(|(face, count)| (count, face))
            .collect::<Vec<_>>();
        tiebreaker.sort_unstable();
        tiebreaker.reverse();

        let mut face_pattern = tiebreaker.iter().map(|(count, _)| *count).collect::<Vec<_>>();
        face_pattern.sort_unstable();

        let category = categorize(&cards, &face_pattern);

        Ok(Self {
            cards,
            face_pattern,
            value: HandValue {
                category,
                tiebreaker,
            },
        })
    }

    /// The hand cards in input order.
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// The hand category.
    pub fn category(&self) -> Category {
        self.value.category
    }

    /// The sizes of the face groups sorted ascending, one pair is `[1, 1, 1, 2]`.
    pub fn face_pattern(&self) -> &[u8] {
        &self.face_pattern
    }

    /// See [HandValue::tiebreaker].
    pub fn tiebreaker(&self) -> &[(u8, Face)] {
        &self.value.tiebreaker
    }

    /// The hand value.
    pub fn value(&self) -> &HandValue {
        &self.value
    }

    /// Compares two hands by category only.
    pub fn cmp_category(&self, other: &Hand) -> Ordering {
        self.category().cmp(&other.category())
    }
}

fn categorize(cards: &[Card; HAND_SIZE], face_pattern: &[u8]) -> Category {
    let one_suit = cards.iter().all(|c| c.suit() == cards[0].suit());

    let mut ordinals = cards.map(|c| c.ordinal());
    ordinals.sort_unstable();
    let consecutive = ordinals.windows(2).all(|w| w[0] + 1 == w[1]);

    match (consecutive, one_suit, face_pattern) {
        (true, true, _) => Category::StraightFlush,
        (true, false, _) => Category::Straight,
        (false, true, _) => Category::Flush,
        (_, _, [1, 1, 1, 1, 1]) => Category::HighCard,
        (_, _, [1, 1, 1, 2]) => Category::OnePair,
        (_, _, [1, 2, 2]) => Category::TwoPair,
        (_, _, [1, 1, 3]) => Category::ThreeOfAKind,
        (_, _, [2, 3]) => Category::FullHouse,
        (_, _, [1, 4]) => Category::FourOfAKind,
        _ => unreachable!("Invalid face pattern {face_pattern:?} for distinct cards"),
    }
}

impl FromStr for Hand {
    type Err = HandError;

    /// Parses five cards separated by whitespaces or commas.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let cards = s
            .split(|c: char| c.is_whitespace() || c == ',')
            .filter(|token| !token.is_empty())
            .map(str::parse::<Card>)
            .collect::<Result<Vec<_>, _>>()?;

        Hand::new(&cards)
    }
}

impl PartialEq for Hand {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl Eq for Hand {}

impl PartialOrd for Hand {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Hand {
    fn cmp(&self, other: &Self) -> Ordering {
        self.value.cmp(&other.value)
    }
}

impl fmt::Display for Hand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (idx, card) in self.cards.iter().enumerate() {
            if idx > 0 {
                f.write_str(" ")?;
            }

            write!(f, "{card}")?;
        }

        Ok(())
    }
}
