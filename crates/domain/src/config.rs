// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::DomainError;
use crate::types::ScoringMode;
use serde::{Deserialize, Serialize};

/// Match configuration, fixed for the lifetime of an engine.
///
/// The defaults describe the standard club match: advantage scoring, six
/// games to a set with a two-game lead, a seventh game deciding a 6-6 set,
/// best of three sets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchConfig {
    /// The scoring variant games are played under.
    pub scoring_mode: ScoringMode,
    /// Games required to win a set.
    pub games_to_win_set: u8,
    /// Game lead required to close a set.
    pub set_lead_required: u8,
    /// Game count that wins a set outright regardless of lead, standing in
    /// for a tiebreak game. `None` disables the cap.
    pub set_cap_games: Option<u8>,
    /// Sets required to win the match.
    pub sets_to_win_match: u8,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            scoring_mode: ScoringMode::Advantage,
            games_to_win_set: 6,
            set_lead_required: 2,
            set_cap_games: Some(7),
            sets_to_win_match: 2,
        }
    }
}

impl MatchConfig {
    /// Validates the configured thresholds.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `games_to_win_set`, `set_lead_required` or `sets_to_win_match` is zero
    /// - `set_cap_games` is below `games_to_win_set`
    pub const fn validate(&self) -> Result<(), DomainError> {
        if self.games_to_win_set == 0 {
            return Err(DomainError::InvalidGamesToWinSet(self.games_to_win_set));
        }
        if self.set_lead_required == 0 {
            return Err(DomainError::InvalidSetLead(self.set_lead_required));
        }
        if let Some(cap) = self.set_cap_games {
            if cap < self.games_to_win_set {
                return Err(DomainError::InvalidSetCap {
                    cap,
                    games_to_win_set: self.games_to_win_set,
                });
            }
        }
        if self.sets_to_win_match == 0 {
            return Err(DomainError::InvalidSetsToWinMatch(self.sets_to_win_match));
        }
        Ok(())
    }
}
