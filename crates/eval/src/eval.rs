// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Poker hand evaluator.
//!
//! The evaluator ranks the best five cards hand out of the 7 cards formed by
//! a player's hole cards and the board. It runs once per player for every
//! enumerated board so it works off a handful of rank and suit tallies
//! computed in a single pass, with no heap allocation.
use allin_cards::{Card, Rank};
use std::cmp::Ordering;
use std::fmt;

/// A hand category, in increasing order of strength.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum HandRank {
    /// No pair, the five highest cards play.
    HighCard = 0,
    /// A single pair.
    OnePair,
    /// Two pairs.
    TwoPair,
    /// Three cards of the same rank.
    ThreeOfAKind,
    /// Five consecutive ranks.
    Straight,
    /// Five cards of the same suit.
    Flush,
    /// Three of a kind plus a pair.
    FullHouse,
    /// Four cards of the same rank.
    FourOfAKind,
    /// A straight in a single suit.
    StraightFlush,
    /// The ace high straight flush.
    RoyalFlush,
}

impl HandRank {
    /// The number of hand categories.
    pub const COUNT: usize = 10;

    /// Returns all categories in ascending order of strength.
    pub fn ranks() -> impl DoubleEndedIterator<Item = HandRank> {
        use HandRank::*;
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
            RoyalFlush,
        ]
        .into_iter()
    }

    /// The category name used in equity reports.
    pub fn name(&self) -> &'static str {
        match self {
            HandRank::HighCard => "High card",
            HandRank::OnePair => "Pair",
            HandRank::TwoPair => "Two pair",
            HandRank::ThreeOfAKind => "Three of a kind",
            HandRank::Straight => "Straight",
            HandRank::Flush => "Flush",
            HandRank::FullHouse => "Full house",
            HandRank::FourOfAKind => "Four of a kind",
            HandRank::StraightFlush => "Straight flush",
            HandRank::RoyalFlush => "Royal flush",
        }
    }
}

impl fmt::Display for HandRank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// The value of a 7 cards hand.
///
/// A value is a [category](HandRank) plus a tiebreaks vector of the ranks
/// that order hands within the category, stored with the most significant
/// rank in the highest occupied slot. Values compare by category first and
/// then by scanning the tiebreaks from the most significant slot down.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HandValue {
    rank: HandRank,
    values: [Rank; 5],
    len: usize,
}

impl HandValue {
    /// Evaluates the best five cards hand out of the given 7 cards.
    ///
    /// The cards must be pairwise distinct.
    pub fn eval(cards: &[Card; 7]) -> HandValue {
        let mut suit_count = [0u8; 4];
        let mut rank_count = [0u8; 13];
        let mut suit_ranks = [0u16; 4];

        for card in cards {
            let suit = card.suit_bits().trailing_zeros() as usize;
            let rank = card.rank_bits() as usize;
            suit_count[suit] += 1;
            rank_count[rank] += 1;
            suit_ranks[suit] |= 1 << rank;
        }

        // With 7 cards at most one suit can have 5 or more cards.
        let flush_ranks = suit_count
            .iter()
            .position(|&n| n >= 5)
            .map(|suit| suit_ranks[suit]);

        // Straight flush and royal flush.
        if let Some(mask) = flush_ranks {
            if let Some(top) = straight_top(mask) {
                return if top == Rank::Ace {
                    Self::with(HandRank::RoyalFlush, &[Rank::Ace])
                } else {
                    Self::with(HandRank::StraightFlush, &[top])
                };
            }
        }

        // Four of a kind.
        if let Some(quads) = highest_of_count(&rank_count, 4) {
            let mut values = [Rank::Two; 2];
            values[1] = quads;
            fill_kickers(&rank_count, &[quads], &mut values[..1]);
            return Self::with(HandRank::FourOfAKind, &values);
        }

        // Full house, the pair half may be a second three of a kind.
        let trips = highest_of_count(&rank_count, 3);
        if let Some(trips) = trips {
            let pair = (0..13)
                .rev()
                .find(|&r| rank_count[r] >= 2 && r != trips as usize);
            if let Some(pair) = pair {
                let values = [Rank::from_index(pair), trips];
                return Self::with(HandRank::FullHouse, &values);
            }
        }

        // Flush, the five highest cards of the flush suit play.
        if let Some(mask) = flush_ranks {
            let mut values = [Rank::Two; 5];
            let mut slot = values.len();
            for r in (0..13).rev() {
                if mask & (1 << r) != 0 {
                    slot -= 1;
                    values[slot] = Rank::from_index(r);
                    if slot == 0 {
                        break;
                    }
                }
            }

            return Self::with(HandRank::Flush, &values);
        }

        // Straight.
        let rank_mask = suit_ranks.iter().fold(0, |mask, ranks| mask | ranks);
        if let Some(top) = straight_top(rank_mask) {
            return Self::with(HandRank::Straight, &[top]);
        }

        // Three of a kind.
        if let Some(trips) = trips {
            let mut values = [Rank::Two; 3];
            values[2] = trips;
            fill_kickers(&rank_count, &[trips], &mut values[..2]);
            return Self::with(HandRank::ThreeOfAKind, &values);
        }

        // Two pair and one pair.
        if let Some(high_pair) = highest_of_count(&rank_count, 2) {
            let low_pair = (0..13)
                .rev()
                .find(|&r| rank_count[r] == 2 && r != high_pair as usize)
                .map(Rank::from_index);

            if let Some(low_pair) = low_pair {
                let mut values = [Rank::Two; 3];
                values[1] = low_pair;
                values[2] = high_pair;
                fill_kickers(&rank_count, &[high_pair, low_pair], &mut values[..1]);
                return Self::with(HandRank::TwoPair, &values);
            }

            let mut values = [Rank::Two; 4];
            values[3] = high_pair;
            fill_kickers(&rank_count, &[high_pair], &mut values[..3]);
            return Self::with(HandRank::OnePair, &values);
        }

        // High card.
        let mut values = [Rank::Two; 5];
        fill_kickers(&rank_count, &[], &mut values);
        Self::with(HandRank::HighCard, &values)
    }

    /// Returns the hand category.
    pub fn rank(&self) -> HandRank {
        self.rank
    }

    /// Returns the tiebreak ranks, the most significant rank last.
    pub fn values(&self) -> &[Rank] {
        &self.values[..self.len]
    }

    fn with(rank: HandRank, values: &[Rank]) -> HandValue {
        let mut buf = [Rank::Two; 5];
        buf[..values.len()].copy_from_slice(values);
        HandValue {
            rank,
            values: buf,
            len: values.len(),
        }
    }
}

impl Ord for HandValue {
    fn cmp(&self, other: &Self) -> Ordering {
        (self.rank as u8).cmp(&(other.rank as u8)).then_with(|| {
            // Equal categories have equal tiebreak lengths, scan from the
            // most significant slot down to the first difference.
            let lhs = self.values[..self.len].iter().rev();
            let rhs = other.values[..other.len].iter().rev();
            lhs.cmp(rhs)
        })
    }
}

impl PartialOrd for HandValue {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Returns the top rank of the highest five consecutive ranks in the mask,
/// counting the wheel A-2-3-4-5 as a five high straight.
fn straight_top(mask: u16) -> Option<Rank> {
    let mut run = 0;
    for r in (0..13).rev() {
        if mask & (1 << r) != 0 {
            run += 1;
        } else {
            run = 0;
        }

        if run == 5 {
            return Some(Rank::from_index(r + 4));
        }

        if run == 4 && r == 0 && mask & (1 << Rank::Ace as usize) != 0 {
            return Some(Rank::Five);
        }
    }

    None
}

/// Returns the highest rank with exactly `count` cards.
fn highest_of_count(rank_count: &[u8; 13], count: u8) -> Option<Rank> {
    (0..13)
        .rev()
        .find(|&r| rank_count[r] == count)
        .map(Rank::from_index)
}

/// Fills `slots` with the highest ranks present in the hand skipping the
/// `skip` ranks, the highest rank goes in the last slot.
fn fill_kickers(rank_count: &[u8; 13], skip: &[Rank], slots: &mut [Rank]) {
    let mut slot = slots.len();
    for r in (0..13).rev() {
        if rank_count[r] > 0 && !skip.contains(&Rank::from_index(r)) {
            slot -= 1;
            slots[slot] = Rank::from_index(r);
            if slot == 0 {
                break;
            }
        }
    }
}
