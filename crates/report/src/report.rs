// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use matchpoint_domain::{SetResult, Side};
use serde::{Deserialize, Serialize};
use time::{Duration, OffsetDateTime};

/// Per-side totals aggregated over a whole match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct SideTotals {
    /// Total for the black side.
    pub black: usize,
    /// Total for the yellow side.
    pub yellow: usize,
}

impl SideTotals {
    /// Creates totals from per-side values.
    #[must_use]
    pub const fn new(black: usize, yellow: usize) -> Self {
        Self { black, yellow }
    }
}

/// One completed set's entry in the report breakdown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SetBreakdown {
    /// The set's position in the match, starting at 1.
    pub set_number: usize,
    /// Games won by the black side.
    pub black_games: u8,
    /// Games won by the yellow side.
    pub yellow_games: u8,
    /// The side that won the set.
    pub winner: Side,
}

/// The finalized winner report for a completed match.
///
/// Derived from the match state and history log when the winner is
/// decided; never authoritative. Lives until the display collaborator
/// acknowledges it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchReport {
    /// The side that won the match.
    pub winner: Side,
    /// The winner's scoreboard display name.
    pub winner_name: String,
    /// The final sets score, e.g. "2-1".
    pub final_sets: String,
    /// Each completed set's final games pair, in playing order.
    pub set_scores: Vec<SetResult>,
    /// Detailed per-set breakdown for display.
    pub sets_breakdown: Vec<SetBreakdown>,
    /// The match duration, e.g. "42m 17s", or seconds-only under a minute.
    pub duration: String,
    /// Total points won per side, counted from point history entries.
    pub total_points: SideTotals,
    /// Total games won per side, counted from game history entries.
    pub total_games: SideTotals,
    /// One-line human-readable summary of the match.
    pub summary: String,
    /// When the match completed.
    #[serde(with = "time::serde::rfc3339")]
    pub completed_at: OffsetDateTime,
    /// Whether the display collaborator has shown this report.
    pub acknowledged: bool,
}

/// Formats an elapsed duration as minutes and seconds.
///
/// Durations under a minute render as seconds only, e.g. "45s"; anything
/// longer as "12m 34s". Negative durations clamp to zero.
#[must_use]
pub fn format_duration(elapsed: Duration) -> String {
    let total_seconds: i64 = elapsed.whole_seconds().max(0);
    let minutes: i64 = total_seconds / 60;
    let seconds: i64 = total_seconds % 60;
    if minutes > 0 {
        format!("{minutes}m {seconds}s")
    } else {
        format!("{seconds}s")
    }
}
