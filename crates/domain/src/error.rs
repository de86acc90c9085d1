// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::types::{ScoringMode, Side};

/// Errors that can occur during domain validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// Side identifier is not one of the two recognized sides.
    InvalidSide(String),
    /// Scoring mode identifier is not recognized.
    InvalidScoringMode(String),
    /// History action kind identifier is not recognized.
    InvalidActionKind(String),
    /// Games required to win a set must be positive.
    InvalidGamesToWinSet(u8),
    /// Game lead required to close a set must be positive.
    InvalidSetLead(u8),
    /// Tiebreak cap must be at least the games-to-win threshold.
    InvalidSetCap {
        /// The configured cap.
        cap: u8,
        /// The configured games-to-win threshold.
        games_to_win_set: u8,
    },
    /// Sets required to win a match must be positive.
    InvalidSetsToWinMatch(u8),
    /// A point count is outside the range the scoring mode allows.
    InvalidPointCount {
        /// The side the count was supplied for.
        side: Side,
        /// The rejected count.
        count: u8,
        /// The scoring mode the count was validated against.
        mode: ScoringMode,
    },
    /// A game count exceeds the configured tiebreak cap.
    InvalidGameCount {
        /// The side the count was supplied for.
        side: Side,
        /// The rejected count.
        count: u8,
        /// The configured cap.
        cap: u8,
    },
    /// A set count exceeds the sets-to-win threshold.
    InvalidSetCount {
        /// The side the count was supplied for.
        side: Side,
        /// The rejected count.
        count: u8,
        /// The configured sets-to-win threshold.
        max: u8,
    },
    /// Failed to parse a set result from a string.
    SetResultParse(String),
}

impl std::fmt::Display for DomainError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidSide(value) => write!(f, "Invalid side: '{value}'"),
            Self::InvalidScoringMode(value) => write!(f, "Invalid scoring mode: '{value}'"),
            Self::InvalidActionKind(value) => write!(f, "Invalid action kind: '{value}'"),
            Self::InvalidGamesToWinSet(games) => {
                write!(f, "Invalid games-to-win-set: {games}. Must be at least 1")
            }
            Self::InvalidSetLead(lead) => {
                write!(f, "Invalid set lead: {lead}. Must be at least 1")
            }
            Self::InvalidSetCap {
                cap,
                games_to_win_set,
            } => {
                write!(
                    f,
                    "Invalid tiebreak cap: {cap}. Must be at least the games-to-win threshold {games_to_win_set}"
                )
            }
            Self::InvalidSetsToWinMatch(sets) => {
                write!(f, "Invalid sets-to-win-match: {sets}. Must be at least 1")
            }
            Self::InvalidPointCount { side, count, mode } => {
                write!(
                    f,
                    "Invalid point count {count} for {side} side under {mode} scoring"
                )
            }
            Self::InvalidGameCount { side, count, cap } => {
                write!(
                    f,
                    "Invalid game count {count} for {side} side: exceeds tiebreak cap {cap}"
                )
            }
            Self::InvalidSetCount { side, count, max } => {
                write!(
                    f,
                    "Invalid set count {count} for {side} side: exceeds sets-to-win threshold {max}"
                )
            }
            Self::SetResultParse(value) => {
                write!(f, "Failed to parse set result from '{value}'")
            }
        }
    }
}

impl std::error::Error for DomainError {}
