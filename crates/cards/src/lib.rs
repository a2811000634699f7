// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Allin Poker cards types.
//!
//! This crate defines types to create cards:
//!
//! ```
//! # use allin_cards::{Card, Rank, Suit};
//! let ah = Card::new(Rank::Ace, Suit::Hearts);
//! let kd = Card::new(Rank::King, Suit::Diamonds);
//! ```
//!
//! and a [Deck] type for removing known cards and iterating the combinations
//! of the cards left in the deck.
//!
//! For example to iterate through all 5 cards boards:
//!
//! ```no_run
//! # use allin_cards::{Card, Deck, Rank, Suit};
//! // Iterate through all 5 cards boards (2.5M boards).
//! let mut counter = 0;
//! Deck::default().for_each(5, |board| {
//!     counter += 1;
//! });
//! assert_eq!(counter, 2_598_960);
//! ```
#![warn(clippy::all, rust_2018_idioms, missing_docs)]
mod deck;
pub use deck::{Card, Deck, Rank, Suit};
