// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Showdown Poker hand evaluator.
//!
//! Poker hand evaluator for 5 cards hands. A [Hand] is parsed from text or
//! built from cards, it is classified into a [Category] and ordered against
//! other hands by category and then by face groups:
//!
//! ```
//! # use showdown_eval::*;
//! let h1 = "3D 4D 5D 6D 7D".parse::<Hand>().unwrap();
//! let h2 = "2H 2D 3C QD KC".parse::<Hand>().unwrap();
//! assert_eq!(h1.category(), Category::StraightFlush);
//! assert_eq!(h2.category(), Category::OnePair);
//! assert!(h1 > h2);
//!
//! ```
//!
//! Comparing categories only ignores the cards that make the category:
//!
//! ```
//! # use std::cmp::Ordering;
//! # use showdown_eval::*;
//! let h1 = "KH KD 5C 5S 2H".parse::<Hand>().unwrap();
//! let h2 = "KS KC 5H 5D 3C".parse::<Hand>().unwrap();
//! assert_eq!(h2.cmp_category(&h1), Ordering::Equal);
//! assert_eq!(h2.cmp(&h1), Ordering::Greater);
//! ```
//!
//! Hands must have five distinct valid cards:
//!
//! ```
//! # use showdown_eval::*;
//! assert!(matches!("2H 3D 1C 5S 6H".parse::<Hand>(), Err(HandError::InvalidCard(_))));
//! assert!(matches!("2H 3D 4C 5S".parse::<Hand>(), Err(HandError::CardCount(4))));
//! assert!(matches!("2H 3D 4C 5S 3D".parse::<Hand>(), Err(HandError::DuplicateCard(_))));
//! ```
#![warn(clippy::all, rust_2018_idioms, missing_docs)]
pub mod hand;
pub use hand::{Category, Hand, HandError, HandValue};

// Reexport cards types.
pub use showdown_cards::{Card, Deck, Face, ParseCardError, Suit};
