// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Allin Poker hand evaluator and exact equity enumeration.
//!
//! The [HandValue::eval] method ranks a 7 cards hand into a
//! [category](HandRank) and a tiebreaks vector that together order hands the
//! way a showdown does:
//!
//! ```
//! # use allin_eval::{Card, HandRank, HandValue};
//! let hand = ["9s", "9h", "9d", "9c", "Ks", "2d", "7c"]
//!     .map(|c| c.parse::<Card>().unwrap());
//! let value = HandValue::eval(&hand);
//! assert_eq!(value.rank(), HandRank::FourOfAKind);
//! ```
//!
//! The [EquityMatrix::enumerate] method computes the exact equity of two or
//! more all-in players by evaluating their hands on every possible board:
//!
//! ```no_run
//! # use allin_eval::{Card, EquityMatrix};
//! let players = [
//!     ["As".parse::<Card>().unwrap(), "Ah".parse().unwrap()],
//!     ["2c".parse::<Card>().unwrap(), "2d".parse().unwrap()],
//! ];
//! let equity = EquityMatrix::enumerate(&players);
//! assert_eq!(equity.total(), 1_712_304.0);
//! ```
#![warn(clippy::all, rust_2018_idioms, missing_docs)]

pub mod equity;
pub mod eval;

pub use allin_cards::{Card, Deck, Rank, Suit};
pub use equity::EquityMatrix;
pub use eval::{HandRank, HandValue};
