// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Equity report formatting.
use std::fmt::Write;
use std::time::Duration;

use allin_eval::{EquityMatrix, HandRank};

use crate::scenario::Scenario;

/// Formats the equity report, per player totals and the breakdown across
/// hand categories with raw equity and percentage columns.
pub fn format(scenario: &Scenario, equity: &EquityMatrix, elapsed: Duration) -> String {
    let total = equity.total();
    let millis = elapsed.as_millis().max(1);

    let mut out = String::new();
    let _ = writeln!(out, "Time: {millis} ms");
    let _ = writeln!(out, "Speed: {:.1} equity/ms", total / millis as f64);
    let _ = writeln!(out, "Total equity: {total:.1}");
    let _ = writeln!(out);

    for (player, label) in scenario.labels.iter().enumerate() {
        let player_total = equity.player_total(player);
        let percent = player_total / total * 100.0;

        let _ = writeln!(out, "Player {} - {label}", player + 1);
        let _ = writeln!(out, "Total:\t\t\t{player_total:10.1} {percent:14.8}%");

        for rank in HandRank::ranks() {
            let share = equity.share(player, rank);
            let percent = share / total * 100.0;
            let _ = writeln!(
                out,
                "{}:{}{share:10.1} {percent:14.8}%",
                rank.name(),
                padding(rank)
            );
        }

        let _ = writeln!(out);
    }

    out
}

/// Tab padding that lines up the equity columns after a category name.
fn padding(rank: HandRank) -> &'static str {
    match rank {
        HandRank::OnePair | HandRank::Flush => "\t\t\t",
        HandRank::ThreeOfAKind => "\t",
        _ => "\t\t",
    }
}
