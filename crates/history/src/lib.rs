// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all
)]

use matchpoint_domain::{DomainError, GameTally, PointScore, SetTally, Side};
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use time::OffsetDateTime;

/// The kind of transition a history entry records.
///
/// A single scoring event cascades in strict point → game → set → match
/// order; each entry names the sub-transition it captures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ActionKind {
    /// A point was won without closing the game.
    Point,
    /// A game was won.
    Game,
    /// A set was won.
    Set,
    /// The match was won.
    Match,
}

impl ActionKind {
    /// Converts this action kind to its string representation.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Point => "point",
            Self::Game => "game",
            Self::Set => "set",
            Self::Match => "match",
        }
    }
}

impl FromStr for ActionKind {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "point" => Ok(Self::Point),
            "game" => Ok(Self::Game),
            "set" => Ok(Self::Set),
            "match" => Ok(Self::Match),
            _ => Err(DomainError::InvalidActionKind(s.to_string())),
        }
    }
}

impl std::fmt::Display for ActionKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// The three score tiers at a point in time.
///
/// Captured on both sides of every history entry so the log can be read
/// without replaying it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct ScoreSnapshot {
    /// Point counts within the current game.
    pub points: PointScore,
    /// Games won within the current set.
    pub games: GameTally,
    /// Sets won within the match.
    pub sets: SetTally,
}

impl ScoreSnapshot {
    /// Creates a snapshot from the three score tiers.
    #[must_use]
    pub const fn new(points: PointScore, games: GameTally, sets: SetTally) -> Self {
        Self {
            points,
            games,
            sets,
        }
    }
}

/// An immutable record of one score transition.
///
/// Entries are append-only and never mutated retroactively; they exist
/// solely for audit and statistics.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryEntry {
    /// When the transition happened.
    #[serde(with = "time::serde::rfc3339")]
    pub timestamp: OffsetDateTime,
    /// The kind of transition.
    pub action: ActionKind,
    /// The side that won the point/game/set/match.
    pub side: Side,
    /// The score before the transition.
    pub before: ScoreSnapshot,
    /// The score after the transition.
    pub after: ScoreSnapshot,
}

impl HistoryEntry {
    /// Creates a new `HistoryEntry`.
    ///
    /// Once created, an entry is immutable.
    #[must_use]
    pub const fn new(
        timestamp: OffsetDateTime,
        action: ActionKind,
        side: Side,
        before: ScoreSnapshot,
        after: ScoreSnapshot,
    ) -> Self {
        Self {
            timestamp,
            action,
            side,
            before,
            after,
        }
    }
}

/// The append-only log of every transition in a match.
///
/// The log length is monotonic for the life of a match state; only a full
/// match reset replaces it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct HistoryLog {
    entries: Vec<HistoryEntry>,
}

impl HistoryLog {
    /// Creates a new empty log.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Appends an entry to the log.
    pub fn append(&mut self, entry: HistoryEntry) {
        self.entries.push(entry);
    }

    /// The number of entries recorded so far.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the log is empty.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// All entries, oldest first.
    #[must_use]
    pub fn entries(&self) -> &[HistoryEntry] {
        &self.entries
    }

    /// Counts entries of one kind won by one side.
    #[must_use]
    pub fn count(&self, action: ActionKind, side: Side) -> usize {
        self.entries
            .iter()
            .filter(|entry| entry.action == action && entry.side == side)
            .count()
    }

    /// Total points a side won, counted from `point` entries.
    #[must_use]
    pub fn points_won(&self, side: Side) -> usize {
        self.count(ActionKind::Point, side)
    }

    /// Total games a side won, counted from `game` entries.
    #[must_use]
    pub fn games_won(&self, side: Side) -> usize {
        self.count(ActionKind::Game, side)
    }

    /// Total sets a side won, counted from `set` entries.
    #[must_use]
    pub fn sets_won(&self, side: Side) -> usize {
        self.count(ActionKind::Set, side)
    }
}
