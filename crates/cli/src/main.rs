// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Exact Texas Hold'em all-in equity calculator.
#![warn(clippy::all, rust_2018_idioms, missing_docs)]
use anyhow::Result;
use clap::Parser;
use log::info;
use std::time::Instant;

use allin_eval::EquityMatrix;

mod report;
mod scenario;

/// Computes each player's exact share of the pot by enumerating every
/// possible board.
#[derive(Debug, Parser)]
struct Cli {
    /// The board and players hole cards, e.g. "XxXxXxXxXx AsKs AhKh".
    input: String,
}

fn main() -> Result<()> {
    env_logger::builder()
        .filter_level(log::LevelFilter::Info)
        .format_target(false)
        .format_timestamp_millis()
        .init();

    let cli = Cli::parse();
    let scenario = scenario::parse(&cli.input)?;

    info!(
        "{} players, {} boards to enumerate",
        scenario.players.len(),
        num_boards(scenario.players.len())
    );

    let now = Instant::now();
    let equity = EquityMatrix::enumerate(&scenario.players);

    print!("{}", report::format(&scenario, &equity, now.elapsed()));

    Ok(())
}

/// The number of 5 cards boards left with the players hole cards removed.
fn num_boards(num_players: usize) -> u64 {
    let n = (52 - 2 * num_players) as u64;
    n * (n - 1) * (n - 2) * (n - 3) * (n - 4) / 120
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn boards_count() {
        assert_eq!(num_boards(2), 1_712_304);
        assert_eq!(num_boards(3), 1_370_754);
        assert_eq!(num_boards(9), 278_256);
    }
}
