// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0
//
// Run with:
//
// ```bash
// $ cargo r --release --example all_hands
// ...
// Total hands      2598960
// ...
//
// High Card:       1303560
// One Pair:        1098240
// Two Pair:        123552
// Three of a Kind: 54912
// Straight:        9180
// Flush:           5112
// Full House:      3744
// Four of a Kind:  624
// Straight Flush:  36
// ```

use std::time::Instant;

use showdown_eval::*;

fn main() {
    // Evaluate all 2.6M hands.
    let now = Instant::now();
    let mut counts = [0usize; Category::COUNT];

    Deck::default().for_each(Hand::SIZE, |cards| match Hand::new(cards) {
        Ok(hand) => counts[hand.category() as usize] += 1,
        Err(e) => eprintln!("{e}"),
    });

    let elapsed = now.elapsed().as_secs_f64();
    let total = counts.iter().sum::<usize>();
    println!("Total hands      {total}");
    println!("Elapsed:         {:.3}s", elapsed);
    println!("Hands/sec:       {:.0}\n", total as f64 / elapsed);

    for category in Category::categories() {
        let label = format!("{category}:");
        println!("{label:<17}{}", counts[category as usize]);
    }
}
