// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Scenario string parsing.
use anyhow::{Result, bail};

use allin_eval::{Card, Rank, Suit};

/// An all-in scenario, two or more players with known hole cards and no
/// board cards.
#[derive(Debug)]
pub struct Scenario {
    /// The players hole cards.
    pub players: Vec<[Card; 2]>,
    /// The hole cards input segment of each player, used in the report.
    pub labels: Vec<String>,
}

/// Parses a scenario string.
///
/// The input is a 10 characters board block followed by a space separated 4
/// characters hole cards block for each player. Each card is a rank
/// character followed by a suit character, and `Xx` is the placeholder for
/// an unknown card:
///
/// ```text
/// XxXxXxXxXx AsKs AhKh
/// ```
///
/// Only scenarios with a fully unknown board and fully known hole cards for
/// at least two players are supported.
pub fn parse(input: &str) -> Result<Scenario> {
    if !input.is_ascii() {
        bail!("invalid character(s) in input");
    }

    if input.len() < 15 {
        bail!("input must be at least 15 characters");
    }

    if (input.len() - 15) % 5 != 0 {
        bail!("invalid input length {}", input.len());
    }

    let board = parse_cards(&input[..10])?;
    if !board.is_empty() {
        bail!("format not supported: the board cards must be placeholders");
    }

    let mut players = Vec::new();
    let mut labels = Vec::new();

    for segment in input[10..].as_bytes().chunks(5) {
        let segment = std::str::from_utf8(segment).expect("ascii input");
        let Some(cards) = segment.strip_prefix(' ') else {
            bail!("expected a space before {segment:?}");
        };

        let player = parse_cards(cards)?;
        let &[first, second] = player.as_slice() else {
            bail!("format not supported: partial hole cards {cards:?}");
        };

        players.push([first, second]);
        labels.push(cards.to_string());
    }

    if players.len() < 2 {
        bail!("format not supported: at least two players required");
    }

    let mut seen = 0u64;
    for card in players.iter().flatten() {
        let bit = 1u64 << card.index();
        if seen & bit != 0 {
            bail!("duplicate card {card}");
        }
        seen |= bit;
    }

    Ok(Scenario { players, labels })
}

/// Parses a string of two characters cards, skipping `Xx` placeholders.
fn parse_cards(input: &str) -> Result<Vec<Card>> {
    if input.len() % 2 != 0 {
        bail!("invalid cards string {input:?}");
    }

    let mut cards = Vec::new();
    for chunk in input.as_bytes().chunks(2) {
        let (rank_char, suit_char) = (chunk[0] as char, chunk[1] as char);
        let wild_rank = rank_char == 'X';
        let wild_suit = suit_char == 'x';

        if wild_rank != wild_suit {
            bail!("mixed wildcard card {rank_char}{suit_char}");
        }

        if wild_rank {
            continue;
        }

        let Some(rank) = Rank::from_char(rank_char) else {
            bail!("invalid rank character {rank_char:?}");
        };

        let Some(suit) = Suit::from_char(suit_char) else {
            bail!("invalid suit character {suit_char:?}");
        };

        cards.push(Card::new(rank, suit));
    }

    Ok(cards)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_two_players() {
        let scenario = parse("XxXxXxXxXx AsKs AhKh").unwrap();

        assert_eq!(scenario.labels, ["AsKs", "AhKh"]);
        assert_eq!(
            scenario.players,
            [
                ["As".parse::<Card>().unwrap(), "Ks".parse().unwrap()],
                ["Ah".parse::<Card>().unwrap(), "Kh".parse().unwrap()],
            ]
        );
    }

    #[test]
    fn parse_nine_players() {
        let input = "XxXxXxXxXx AsKs AhKh AdKd AcKc QsJs QhJh QdJd QcJc TsTh";
        let scenario = parse(input).unwrap();
        assert_eq!(scenario.players.len(), 9);
        assert_eq!(scenario.labels[8], "TsTh");
    }

    #[test]
    fn parse_length_errors() {
        assert!(parse("").is_err());
        assert!(parse("XxXxXxXxXx").is_err());
        assert!(parse("XxXxXxXxXx AsKs AhK").is_err());
        assert!(parse("XxXxXxXxXx AsKsXAhKh").is_err());
    }

    #[test]
    fn parse_character_errors() {
        // Unknown rank and suit characters.
        assert!(parse("XxXxXxXxXx ZsKs AhKh").is_err());
        assert!(parse("XxXxXxXxXx AzKs AhKh").is_err());

        // Rank and suit characters are case sensitive.
        assert!(parse("XxXxXxXxXx asKs AhKh").is_err());
        assert!(parse("XxXxXxXxXx ASKs AhKh").is_err());

        // Mixed wildcards.
        assert!(parse("XxXxXxXxXs AsKs AhKh").is_err());
        assert!(parse("XxXxXxXxAx AsKs AhKh").is_err());
    }

    #[test]
    fn parse_unsupported_scenarios() {
        // Known or partially known board.
        assert!(parse("2c3c4c5c6c AsKs AhKh").is_err());
        assert!(parse("2cXxXxXxXx AsKs AhKh").is_err());

        // Partial hole cards.
        assert!(parse("XxXxXxXxXx XxKs AhKh").is_err());
        assert!(parse("XxXxXxXxXx XxXx AhKh").is_err());

        // A single player.
        assert!(parse("XxXxXxXxXx AsKs").is_err());

        // Duplicate cards across players.
        assert!(parse("XxXxXxXxXx AsKs AsKh").is_err());
    }
}
