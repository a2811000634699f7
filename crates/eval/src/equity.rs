// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Exact all-in equity enumeration.
//!
//! Given two or more players with known hole cards and no board, every
//! distinct five cards board from the remaining deck is dealt once, each
//! player's hand is evaluated on it, and the board's single unit of equity
//! is credited to the winner or split among the tied winners.
use allin_cards::{Card, Deck};
use std::cmp::Ordering;

use crate::eval::{HandRank, HandValue};

/// Per player equity totals split by hand category.
///
/// Every enumerated board contributes exactly 1.0 of equity split among its
/// winners, so after enumeration the sum of all entries is the number of
/// boards dealt from the remaining deck.
#[derive(Debug, Clone, PartialEq)]
pub struct EquityMatrix {
    rows: Vec<[f64; HandRank::COUNT]>,
}

impl EquityMatrix {
    /// Computes the equity of each player by enumerating all boards.
    ///
    /// Boards are enumerated in lexicographic deck order and winners are
    /// credited in player order, so repeated runs on the same input produce
    /// bit identical results.
    ///
    /// Panics if there are fewer than two players or any card is repeated.
    pub fn enumerate(players: &[[Card; 2]]) -> Self {
        let deck = alive_deck(players);
        let mut scratch = Scratch::new(players.len());
        deck.for_each(5, |board| scratch.score_board(players, board));

        Self { rows: scratch.rows }
    }

    /// The number of players.
    pub fn num_players(&self) -> usize {
        self.rows.len()
    }

    /// The equity a player collected with hands of the given category.
    pub fn share(&self, player: usize, rank: HandRank) -> f64 {
        self.rows[player][rank as usize]
    }

    /// The total equity a player collected.
    pub fn player_total(&self, player: usize) -> f64 {
        self.rows[player].iter().sum()
    }

    /// The total equity of all players, the number of enumerated boards.
    pub fn total(&self) -> f64 {
        self.rows.iter().flatten().sum()
    }
}

/// Returns the deck without the players hole cards.
///
/// Panics if there are fewer than two players or any card is repeated.
fn alive_deck(players: &[[Card; 2]]) -> Deck {
    assert!(players.len() >= 2, "at least two players");

    let mut deck = Deck::default();
    let mut seen = 0u64;
    for card in players.iter().flatten() {
        let bit = 1 << card.index();
        assert!(seen & bit == 0, "duplicate card {card}");
        seen |= bit;
        deck.remove(*card);
    }

    deck
}

/// Per enumeration scratch state, allocated once per scenario.
struct Scratch {
    hand: [Card; 7],
    values: Vec<HandValue>,
    winners: Vec<usize>,
    rows: Vec<[f64; HandRank::COUNT]>,
}

impl Scratch {
    fn new(num_players: usize) -> Self {
        Self {
            hand: [Card::from_index(0); 7],
            values: Vec::with_capacity(num_players),
            winners: Vec::with_capacity(num_players),
            rows: vec![[0.0; HandRank::COUNT]; num_players],
        }
    }

    /// Scores one board, the hole cards slots of the 7 cards buffer are
    /// rewritten for each player while the board slots stay fixed.
    fn score_board(&mut self, players: &[[Card; 2]], board: &[Card]) {
        self.hand[2..].copy_from_slice(board);

        self.values.clear();
        for cards in players {
            self.hand[0] = cards[0];
            self.hand[1] = cards[1];
            self.values.push(HandValue::eval(&self.hand));
        }

        self.winners.clear();
        self.winners.push(0);
        for player in 1..players.len() {
            match self.values[player].cmp(&self.values[self.winners[0]]) {
                Ordering::Greater => {
                    self.winners.clear();
                    self.winners.push(player);
                }
                Ordering::Equal => self.winners.push(player),
                Ordering::Less => {}
            }
        }

        let share = 1.0 / self.winners.len() as f64;
        for &winner in &self.winners {
            self.rows[winner][self.values[winner].rank() as usize] += share;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn players<const N: usize>(cards: [[&str; 2]; N]) -> Vec<[Card; 2]> {
        cards
            .iter()
            .map(|pair| pair.map(|c| c.parse().unwrap()))
            .collect()
    }

    #[test]
    fn mirrored_hands_split() {
        // AsKs vs AhKh, by suit symmetry both players collect exactly half
        // of the nck(48, 5) boards.
        let equity = EquityMatrix::enumerate(&players([["As", "Ks"], ["Ah", "Kh"]]));

        assert_eq!(equity.num_players(), 2);
        assert_eq!(equity.total(), 1_712_304.0);
        assert_eq!(equity.player_total(0), 856_152.0);
        assert_eq!(equity.player_total(1), 856_152.0);
    }

    #[test]
    fn overpair_is_ahead() {
        let equity = EquityMatrix::enumerate(&players([["As", "Ah"], ["2c", "2d"]]));

        // Every board is fully credited.
        assert_eq!(equity.total(), 1_712_304.0);

        // The underdog wins only on specific board textures.
        assert!(equity.player_total(0) > equity.player_total(1));
        assert!(equity.player_total(1) > 0.0);

        // Boards pairing both deuces give the underdog winning quads.
        assert!(equity.share(1, HandRank::FourOfAKind) > 0.0);
    }

    #[test]
    fn players_permutation_permutes_rows() {
        let equity_ab = EquityMatrix::enumerate(&players([["As", "Ah"], ["2c", "2d"]]));
        let equity_ba = EquityMatrix::enumerate(&players([["2c", "2d"], ["As", "Ah"]]));

        for rank in HandRank::ranks() {
            assert_eq!(equity_ab.share(0, rank), equity_ba.share(1, rank));
            assert_eq!(equity_ab.share(1, rank), equity_ba.share(0, rank));
        }
    }

    #[test]
    fn three_way_mirrored_hands_split() {
        let equity = EquityMatrix::enumerate(&players([
            ["As", "Ks"],
            ["Ah", "Kh"],
            ["Ad", "Kd"],
        ]));

        // nck(46, 5) boards split three ways, the three way ties accumulate
        // a small rounding error from the one third shares.
        let boards = 1_370_754.0;
        assert!((equity.total() - boards).abs() < 1e-3);

        let third = equity.player_total(0);
        assert!((equity.player_total(1) - third).abs() < 1e-3);
        assert!((equity.player_total(2) - third).abs() < 1e-3);
        assert!((third - boards / 3.0).abs() < 1e-3);
    }

    #[test]
    #[should_panic(expected = "duplicate card")]
    fn duplicate_cards_panic() {
        EquityMatrix::enumerate(&players([["As", "Ks"], ["As", "Qh"]]));
    }

    #[test]
    #[should_panic(expected = "at least two players")]
    fn single_player_panics() {
        EquityMatrix::enumerate(&players([["As", "Ks"]]));
    }
}
