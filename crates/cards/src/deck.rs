// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Poker cards definitions.
use rand::prelude::*;
use serde::{Deserialize, Serialize};
use std::{cmp::Ordering, fmt, str::FromStr};
use thiserror::Error;

/// Error returned when a card token cannot be parsed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseCardError {
    /// The token is not a face followed by a suit.
    #[error("invalid card: {0:?}")]
    InvalidCard(String),
}

/// A Poker card.
///
/// A card is a [Face] and a [Suit], cards with the same face have the same
/// [ordinal](Card::ordinal) whatever their suit.
///
/// ```
/// # use showdown_cards::{Card, Face, Suit};
/// let card = "10h".parse::<Card>().unwrap();
/// assert_eq!(card, Card::new(Face::Ten, Suit::Hearts));
/// assert_eq!(card.ordinal(), 8);
/// assert_eq!(card.to_string(), "10H");
/// ```
#[derive(Clone, Copy, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub struct Card {
    face: Face,
    suit: Suit,
}

impl Card {
    /// Create a card given a face and a suit.
    pub const fn new(face: Face, suit: Suit) -> Card {
        Self { face, suit }
    }

    /// Returns the card face.
    pub fn face(&self) -> Face {
        self.face
    }

    /// Returns the card suit.
    pub fn suit(&self) -> Suit {
        self.suit
    }

    /// The face position in the ranks sequence, deuce is 0 and ace is 12.
    #[inline]
    pub fn ordinal(&self) -> u8 {
        self.face.ordinal()
    }

    /// Compares two cards by face only, the suit is ignored.
    ///
    /// ```
    /// # use std::cmp::Ordering;
    /// # use showdown_cards::Card;
    /// let ts = "10S".parse::<Card>().unwrap();
    /// let tc = "10C".parse::<Card>().unwrap();
    /// assert_eq!(ts.cmp_face(&tc), Ordering::Equal);
    /// assert_ne!(ts, tc);
    /// ```
    pub fn cmp_face(&self, other: &Card) -> Ordering {
        self.face.cmp(&other.face)
    }
}

impl FromStr for Card {
    type Err = ParseCardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || ParseCardError::InvalidCard(s.to_string());

        // The suit is the last char and the face everything before it.
        let (idx, _) = s.char_indices().next_back().ok_or_else(invalid)?;
        let (face, suit) = s.split_at(idx);

        let face = face.parse::<Face>().map_err(|_| invalid())?;
        let suit = suit.parse::<Suit>().map_err(|_| invalid())?;
        Ok(Card::new(face, suit))
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.face, self.suit)
    }
}

impl fmt::Debug for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Card({}{})", self.face, self.suit)
    }
}

/// Card face, ordered from deuce to ace.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Face {
    /// Deuce
    Deuce = 0,
    /// Trey
    Trey,
    /// Four
    Four,
    /// Five
    Five,
    /// Six
    Six,
    /// Seven
    Seven,
    /// Eight
    Eight,
    /// Nine
    Nine,
    /// Ten
    Ten,
    /// Jack
    Jack,
    /// Queen
    Queen,
    /// King
    King,
    /// Ace
    Ace,
}

impl Face {
    /// Number of faces in a suit.
    pub const COUNT: usize = 13;

    /// Returns all faces.
    pub fn faces() -> impl DoubleEndedIterator<Item = Face> {
        use Face::*;
        [
            Deuce, Trey, Four, Five, Six, Seven, Eight, Nine, Ten, Jack, Queen, King, Ace,
        ]
        .into_iter()
    }

    /// The face position in the ranks sequence.
    #[inline]
    pub fn ordinal(&self) -> u8 {
        *self as u8
    }
}

impl FromStr for Face {
    type Err = ParseCardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let face = match s.to_ascii_lowercase().as_str() {
            "2" => Face::Deuce,
            "3" => Face::Trey,
            "4" => Face::Four,
            "5" => Face::Five,
            "6" => Face::Six,
            "7" => Face::Seven,
            "8" => Face::Eight,
            "9" => Face::Nine,
            "10" => Face::Ten,
            "j" => Face::Jack,
            "q" => Face::Queen,
            "k" => Face::King,
            "a" => Face::Ace,
            _ => return Err(ParseCardError::InvalidCard(s.to_string())),
        };

        Ok(face)
    }
}

impl fmt::Display for Face {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let face = match self {
            Face::Deuce => "2",
            Face::Trey => "3",
            Face::Four => "4",
            Face::Five => "5",
            Face::Six => "6",
            Face::Seven => "7",
            Face::Eight => "8",
            Face::Nine => "9",
            Face::Ten => "10",
            Face::Jack => "J",
            Face::Queen => "Q",
            Face::King => "K",
            Face::Ace => "A",
        };

        f.write_str(face)
    }
}

/// Card suit.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Suit {
    /// Hearts suit.
    Hearts,
    /// Diamonds suit.
    Diamonds,
    /// Clubs suit.
    Clubs,
    /// Spades suit.
    Spades,
}

impl Suit {
    /// Returns all suits.
    pub fn suits() -> impl DoubleEndedIterator<Item = Suit> {
        [Suit::Hearts, Suit::Diamonds, Suit::Clubs, Suit::Spades].into_iter()
    }
}

impl FromStr for Suit {
    type Err = ParseCardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let suit = match s {
            "h" | "H" => Suit::Hearts,
            "d" | "D" => Suit::Diamonds,
            "c" | "C" => Suit::Clubs,
            "s" | "S" => Suit::Spades,
            _ => return Err(ParseCardError::InvalidCard(s.to_string())),
        };

        Ok(suit)
    }
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let suit = match self {
            Suit::Hearts => 'H',
            Suit::Diamonds => 'D',
            Suit::Clubs => 'C',
            Suit::Spades => 'S',
        };

        write!(f, "{suit}")
    }
}

/// A cards Deck
#[derive(Debug)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    /// The number of cards in the deck.
    pub const SIZE: usize = 52;

    /// Creates a new shuffled deck.
    pub fn new_and_shuffled<R: Rng>(rng: &mut R) -> Self {
        let mut deck = Self::default();
        deck.cards.shuffle(rng);
        deck
    }

    /// Deals a card from the deck, returns `None` if the deck is empty.
    pub fn deal(&mut self) -> Option<Card> {
        self.cards.pop()
    }

    /// Checks if the deck is empty.
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Number of cards in the deck.
    pub fn count(&self) -> usize {
        self.cards.len()
    }

    /// Removes a card from the deck.
    pub fn remove(&mut self, card: Card) {
        self.cards.retain(|c| c != &card);
    }

    /// Calls the `f` closure for each k-cards hand.
    ///
    /// Panics if k is not 1 <= k <= 5.
    pub fn for_each<F>(&self, k: usize, mut f: F)
    where
        F: FnMut(&[Card]),
    {
        assert!((1..=5).contains(&k), "1 <= k <= 5");

        if k > self.cards.len() {
            return;
        }

        let mut hand = Vec::with_capacity(k);
        combinations(&self.cards, k, &mut hand, &mut f);
    }
}

fn combinations<F>(cards: &[Card], k: usize, hand: &mut Vec<Card>, f: &mut F)
where
    F: FnMut(&[Card]),
{
    if hand.len() == k {
        f(hand.as_slice());
        return;
    }

    // Leave enough cards to fill the remaining slots.
    let needed = k - hand.len();
    for idx in 0..=(cards.len() - needed) {
        hand.push(cards[idx]);
        combinations(&cards[idx + 1..], k, hand, f);
        hand.pop();
    }
}

impl Default for Deck {
    fn default() -> Self {
        let cards = Suit::suits()
            .flat_map(|s| Face::faces().map(move |r| Card::new(r, s)))
            .collect::<Vec<_>>();
        Self { cards }
    }
}

impl IntoIterator for Deck {
    type Item = Card;
    type IntoIter = std::vec::IntoIter<Card>;

    fn into_iter(self) -> Self::IntoIter {
        self.cards.into_iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ahash::HashSet;

    #[test]
    fn card_parse() {
        let c = "3D".parse::<Card>().unwrap();
        assert_eq!(c.face(), Face::Trey);
        assert_eq!(c.suit(), Suit::Diamonds);
        assert_eq!(c.ordinal(), 1);

        let c = "10h".parse::<Card>().unwrap();
        assert_eq!(c.face(), Face::Ten);
        assert_eq!(c.suit(), Suit::Hearts);
        assert_eq!(c.ordinal(), 8);

        let c = "kC".parse::<Card>().unwrap();
        assert_eq!(c, Card::new(Face::King, Suit::Clubs));

        let c = "As".parse::<Card>().unwrap();
        assert_eq!(c, Card::new(Face::Ace, Suit::Spades));
        assert_eq!(c.ordinal(), 12);
    }

    #[test]
    fn card_parse_invalid() {
        for token in ["1H", "11H", "TH", "0D", "KX", "K", "H", "", "10", "KHS", "♥H", "K♥"] {
            let err = token.parse::<Card>().unwrap_err();
            assert_eq!(err, ParseCardError::InvalidCard(token.to_string()));
        }
    }

    #[test]
    fn card_ordinals() {
        for (ordinal, face) in Face::faces().enumerate() {
            for suit in Suit::suits() {
                let card = Card::new(face, suit);
                assert_eq!(card.ordinal() as usize, ordinal);
                assert_eq!(card.face(), face);
                assert_eq!(card.suit(), suit);
            }
        }

        assert_eq!(Face::faces().count(), Face::COUNT);
    }

    #[test]
    fn card_face_ordering() {
        let c = |s: &str| s.parse::<Card>().unwrap();

        assert_eq!(c("2H").cmp_face(&c("3D")), Ordering::Less);
        assert_eq!(c("AH").cmp_face(&c("KH")), Ordering::Greater);
        assert_eq!(c("10S").cmp_face(&c("10C")), Ordering::Equal);
        assert_ne!(c("10S"), c("10C"));

        let mut cards = vec![c("KD"), c("2C"), c("10H"), c("AS"), c("5D")];
        cards.sort_by(Card::cmp_face);
        assert_eq!(cards, vec![c("2C"), c("5D"), c("10H"), c("KD"), c("AS")]);
    }

    #[test]
    fn card_to_string() {
        let c = Card::new(Face::King, Suit::Diamonds);
        assert_eq!(c.to_string(), "KD");

        let c = Card::new(Face::Five, Suit::Spades);
        assert_eq!(c.to_string(), "5S");

        let c = Card::new(Face::Jack, Suit::Clubs);
        assert_eq!(c.to_string(), "JC");

        let c = Card::new(Face::Ten, Suit::Hearts);
        assert_eq!(c.to_string(), "10H");
        assert_eq!(format!("{c:?}"), "Card(10H)");

        // Every rendering parses back to the same card.
        for card in Deck::default() {
            assert_eq!(card.to_string().parse::<Card>(), Ok(card));
            assert_eq!(card.to_string().to_lowercase().parse::<Card>(), Ok(card));
        }
    }

    #[test]
    fn deck_deal() {
        let mut cards = HashSet::default();
        let mut deck = Deck::new_and_shuffled(&mut rand::rng());
        assert_eq!(deck.count(), Deck::SIZE);

        while let Some(card) = deck.deal() {
            cards.insert(card);
        }

        assert!(deck.is_empty());
        assert_eq!(deck.deal(), None);
        assert_eq!(cards.len(), Deck::SIZE);
    }

    #[test]
    fn deck_for_each() {
        let deck = Deck::default();
        assert_eq!(deck.count(), Deck::SIZE);

        let mut hands = HashSet::default();
        deck.for_each(2, |cards| {
            assert_eq!(cards.len(), 2);
            hands.insert(cards.to_owned());
        });
        assert_eq!(hands.len(), 1_326);

        hands.clear();
        deck.for_each(3, |cards| {
            assert_eq!(cards.len(), 3);
            hands.insert(cards.to_owned());
        });
        assert_eq!(hands.len(), 22_100);

        let mut count = 0;
        deck.for_each(5, |cards| {
            assert_eq!(cards.len(), 5);
            count += 1;
        });
        assert_eq!(count, 2_598_960);
    }

    #[test]
    fn deck_for_each_remove() {
        let mut deck = Deck::default();
        deck.remove(Card::new(Face::Ace, Suit::Diamonds));
        deck.remove(Card::new(Face::King, Suit::Diamonds));
        assert_eq!(deck.count(), 50);

        let mut count = 0;
        deck.for_each(5, |cards| {
            assert_eq!(cards.len(), 5);
            count += 1;
        });
        assert_eq!(count, 2_118_760);
    }
}
