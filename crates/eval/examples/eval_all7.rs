// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0
//
// Run with:
//
// ```bash
// $ cargo r --release --example eval_all7
// ...
// Total hands      133784560
// Elapsed:         3.513s
// Hands/sec:       38084445
//
// High card:       23294460
// Pair:            58627800
// Two pair:        31433400
// Three of a kind: 6461620
// Straight:        6180020
// Flush:           4047644
// Full house:      3473184
// Four of a kind:  224848
// Straight flush:  37260
// Royal flush:     4324
// ```

use std::time::Instant;

use allin_eval::{Card, Deck, HandRank, HandValue};

fn main() {
    // Evaluate all 133M hands.
    let now = Instant::now();
    let mut counts = [0usize; HandRank::COUNT];

    Deck::default().for_each(7, |hand| {
        let hand = <[Card; 7]>::try_from(hand).unwrap();
        let rank = HandValue::eval(&hand).rank();
        counts[rank as usize] += 1;
    });

    let elapsed = now.elapsed().as_secs_f64();
    let total = counts.iter().sum::<usize>();
    println!("Total hands      {total}");
    println!("Elapsed:         {elapsed:.3}s");
    println!("Hands/sec:       {:.0}\n", total as f64 / elapsed);

    for rank in HandRank::ranks() {
        println!("{:16} {}", format!("{}:", rank.name()), counts[rank as usize]);
    }
}
