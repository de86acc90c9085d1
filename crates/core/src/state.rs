// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use matchpoint_domain::{GameTally, PointScore, SetResult, SetTally, Side};
use matchpoint_history::{ActionKind, HistoryLog, ScoreSnapshot};
use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

/// The complete state of one live match.
///
/// Exactly one `MatchState` is live per match. It is exclusively owned by
/// the engine and mutated only through point application and the
/// administrative reset/override operations; snapshots handed to readers
/// are full clones.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchState {
    /// Point counts within the current game.
    pub points: PointScore,
    /// Games won within the current set.
    pub games: GameTally,
    /// Sets won within the match.
    pub sets: SetTally,
    /// Every completed set's final games pair, in playing order.
    pub set_history: Vec<SetResult>,
    /// The match winner, once decided.
    pub winner: Option<Side>,
    /// When the match started.
    #[serde(with = "time::serde::rfc3339")]
    pub started_at: OffsetDateTime,
    /// When the match completed. Set exactly once.
    #[serde(with = "time::serde::rfc3339::option")]
    pub ended_at: Option<OffsetDateTime>,
    /// The append-only transition log.
    pub history: HistoryLog,
}

impl MatchState {
    /// Creates a fresh match state starting at the given time.
    #[must_use]
    pub const fn new(started_at: OffsetDateTime) -> Self {
        Self {
            points: PointScore::new(0, 0),
            games: GameTally::new(0, 0),
            sets: SetTally::new(0, 0),
            set_history: Vec::new(),
            winner: None,
            started_at,
            ended_at: None,
            history: HistoryLog::new(),
        }
    }

    /// Whether the match has a winner.
    #[must_use]
    pub const fn is_complete(&self) -> bool {
        self.winner.is_some()
    }

    /// Captures the three score tiers for a history entry.
    #[must_use]
    pub const fn score_snapshot(&self) -> ScoreSnapshot {
        ScoreSnapshot::new(self.points, self.games, self.sets)
    }
}

/// The result of applying one scoring event.
///
/// Transitions are atomic: they either succeed completely or fail without
/// side effects.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transition {
    /// The state after the full point → game → set → match cascade.
    pub new_state: MatchState,
    /// The deepest cascade level the event reached.
    pub action: ActionKind,
}

/// The result of a manual score correction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OverrideOutcome {
    /// The state after the correction was applied.
    pub new_state: MatchState,
    /// The winner, when the correction pushed a side over the match
    /// threshold and finalized the match.
    pub completed: Option<Side>,
}
