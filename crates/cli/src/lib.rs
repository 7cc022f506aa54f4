// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Showdown CLI commands.
//!
//! Hands are read one per line, blank lines are skipped.
#![warn(clippy::all, rust_2018_idioms, missing_docs)]
use anyhow::{Context, Result, bail};
use clap::{Subcommand, ValueEnum};
use log::{debug, info, warn};
use rand::{SeedableRng, rngs::StdRng};
use std::{
    fs,
    io::{self, Read, Write},
    path::{Path, PathBuf},
};

use showdown_eval::{Deck, Hand};

/// How two hands are compared.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum CompareBy {
    /// Compare the hands categories only.
    #[default]
    Category,
    /// Compare categories and break ties on the cards.
    Hand,
}

/// The CLI commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Prints true if the second hand outranks the first.
    Compare {
        /// Input file with a hand per line, reads stdin if missing.
        input: Option<PathBuf>,
        /// The comparison used to rank the hands.
        #[clap(long, value_enum, default_value_t)]
        by: CompareBy,
    },
    /// Prints the category of each hand.
    Classify {
        /// Input file with a hand per line, reads stdin if missing.
        input: Option<PathBuf>,
    },
    /// Deals two random hands and compares them.
    Deal {
        /// Seed for a reproducible deal.
        #[clap(long)]
        seed: Option<u64>,
        /// The comparison used to rank the hands.
        #[clap(long, value_enum, default_value_t)]
        by: CompareBy,
    },
}

/// Runs a command writing the results to `out`.
pub fn run<W: Write>(command: Command, out: &mut W) -> Result<()> {
    match command {
        Command::Compare { input, by } => {
            let hands = parse_hands(&read_input(input.as_deref())?)?;
            let [first, second, rest @ ..] = hands.as_slice() else {
                bail!("Expected two hands, got {}", hands.len());
            };

            if !rest.is_empty() {
                warn!("Ignoring {} hands after the first two", rest.len());
            }

            writeln!(out, "{}", outranks(first, second, by))?;
        }
        Command::Classify { input } => {
            for hand in parse_hands(&read_input(input.as_deref())?)? {
                writeln!(out, "{hand}: {}", hand.category())?;
            }
        }
        Command::Deal { seed, by } => {
            let mut rng = match seed {
                Some(seed) => StdRng::seed_from_u64(seed),
                None => StdRng::from_os_rng(),
            };

            let mut deck = Deck::new_and_shuffled(&mut rng);
            let mut deal = || -> Result<Hand> {
                let cards = (0..Hand::SIZE)
                    .map(|_| deck.deal().context("Deck is empty"))
                    .collect::<Result<Vec<_>>>()?;
                Ok(Hand::new(&cards)?)
            };

            let first = deal()?;
            let second = deal()?;

            writeln!(out, "{first}: {}", first.category())?;
            writeln!(out, "{second}: {}", second.category())?;
            writeln!(out, "{}", outranks(&first, &second, by))?;
        }
    }

    Ok(())
}

/// Checks if the second hand outranks the first.
pub fn outranks(first: &Hand, second: &Hand, by: CompareBy) -> bool {
    let res = match by {
        CompareBy::Category => second.cmp_category(first).is_gt(),
        CompareBy::Hand => second > first,
    };

    debug!(
        "{second} ({}) vs {first} ({}) by {by:?}: {res}",
        second.category(),
        first.category()
    );

    res
}

/// Parses a hand for each non blank line.
pub fn parse_hands(text: &str) -> Result<Vec<Hand>> {
    let hands = text
        .lines()
        .enumerate()
        .filter(|(_, line)| !line.trim().is_empty())
        .map(|(idx, line)| {
            line.parse::<Hand>()
                .with_context(|| format!("Invalid hand at line {}: {:?}", idx + 1, line.trim()))
        })
        .collect::<Result<Vec<_>>>()?;

    info!("Parsed {} hands", hands.len());
    Ok(hands)
}

fn read_input(input: Option<&Path>) -> Result<String> {
    match input {
        Some(path) => fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display())),
        None => {
            let mut text = String::new();
            io::stdin()
                .read_to_string(&mut text)
                .context("Failed to read stdin")?;
            Ok(text)
        }
    }
}
