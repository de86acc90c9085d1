// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::config::MatchConfig;
use crate::types::{GameTally, PointScore, ScoringMode, SetTally, Side};

/// Evaluates whether the current point score wins the game for a side.
///
/// Under [`ScoringMode::Advantage`] a side wins at four or more points with
/// a two-point lead; deuce and advantage fall out of the raw counts (a
/// point scored against the advantage holder levels the counts back to
/// deuce, a point by the holder opens the two-point gap).
///
/// Under [`ScoringMode::NoAd`] the fourth point wins outright regardless
/// of the opponent's count, even from 40-40.
#[must_use]
pub const fn game_winner(mode: ScoringMode, points: &PointScore) -> Option<Side> {
    match mode {
        ScoringMode::Advantage => {
            if points.black >= 4 && points.black.saturating_sub(points.yellow) >= 2 {
                Some(Side::Black)
            } else if points.yellow >= 4 && points.yellow.saturating_sub(points.black) >= 2 {
                Some(Side::Yellow)
            } else {
                None
            }
        }
        ScoringMode::NoAd => {
            if points.black >= 4 {
                Some(Side::Black)
            } else if points.yellow >= 4 {
                Some(Side::Yellow)
            } else {
                None
            }
        }
    }
}

/// Evaluates whether the current game tally wins the set for a side.
///
/// A side wins the set at `games_to_win_set` games with a lead of at least
/// `set_lead_required`, or by reaching `set_cap_games` outright (the
/// tiebreak-cap shortcut for a 6-6 set).
#[must_use]
pub const fn set_winner(config: &MatchConfig, games: &GameTally) -> Option<Side> {
    if games.black >= config.games_to_win_set
        && games.lead(Side::Black) >= config.set_lead_required
    {
        return Some(Side::Black);
    }
    if games.yellow >= config.games_to_win_set
        && games.lead(Side::Yellow) >= config.set_lead_required
    {
        return Some(Side::Yellow);
    }
    if let Some(cap) = config.set_cap_games {
        if games.black == cap {
            return Some(Side::Black);
        }
        if games.yellow == cap {
            return Some(Side::Yellow);
        }
    }
    None
}

/// Evaluates whether the current set tally wins the match for a side.
#[must_use]
pub const fn match_winner(config: &MatchConfig, sets: &SetTally) -> Option<Side> {
    if sets.black >= config.sets_to_win_match {
        Some(Side::Black)
    } else if sets.yellow >= config.sets_to_win_match {
        Some(Side::Yellow)
    } else {
        None
    }
}
