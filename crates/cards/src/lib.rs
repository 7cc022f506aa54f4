// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Showdown Poker cards types.
//!
//! This crate define types to create and parse cards:
//!
//! ```
//! # use showdown_cards::{Card, Face, Suit};
//! let ah = Card::new(Face::Ace, Suit::Hearts);
//! let td = "10d".parse::<Card>().unwrap();
//! assert_eq!(ah.to_string(), "AH");
//! assert_eq!(td.face(), Face::Ten);
//! assert!(ah.ordinal() > td.ordinal());
//! ```
//!
//! Cards are written as a face (`2`..`10`, `J`, `Q`, `K`, `A`) followed by a
//! suit (`H`, `D`, `C`, `S`), both case insensitive, anything else fails with
//! [ParseCardError::InvalidCard]:
//!
//! ```
//! # use showdown_cards::{Card, ParseCardError};
//! assert_eq!(
//!     "1H".parse::<Card>(),
//!     Err(ParseCardError::InvalidCard("1H".to_string()))
//! );
//! ```
//!
//! and a [Deck] type for shuffling, dealing, and iterating cards in the deck.
//!
//! For example to iterate through all 5 cards hands:
//!
//! ```no_run
//! # use showdown_cards::Deck;
//! // Iterate through all 5 cards hands (2.6M hands).
//! let mut counter = 0;
//! Deck::default().for_each(5, |hand| {
//!     counter += 1;
//! });
//! assert_eq!(counter, 2_598_960);
//! ```
//!
//! to deal a random 5-cards hand:
//!
//! ```
//! # use showdown_cards::Deck;
//! let mut deck = Deck::new_and_shuffled(&mut rand::rng());
//! let hand = (0..5).filter_map(|_| deck.deal()).collect::<Vec<_>>();
//! assert_eq!(hand.len(), 5);
//! assert_eq!(deck.count(), Deck::SIZE - 5);
//! ```
#![warn(clippy::all, rust_2018_idioms, missing_docs)]
mod deck;
pub use deck::{Card, Deck, Face, ParseCardError, Suit};
