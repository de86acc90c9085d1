// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{MatchState, Transition, apply_point};
use matchpoint_domain::{MatchConfig, ScoringMode, Side};
use time::OffsetDateTime;
use time::macros::datetime;

pub fn test_time() -> OffsetDateTime {
    datetime!(2026-01-10 18:00:00 UTC)
}

pub fn advantage_config() -> MatchConfig {
    MatchConfig::default()
}

pub fn no_ad_config() -> MatchConfig {
    MatchConfig {
        scoring_mode: ScoringMode::NoAd,
        ..MatchConfig::default()
    }
}

pub fn fresh_state() -> MatchState {
    MatchState::new(test_time())
}

/// Applies a sequence of points, panicking on any rejection.
pub fn play_points(config: &MatchConfig, state: MatchState, sides: &[Side]) -> MatchState {
    sides.iter().fold(state, |state, side| {
        let transition: Transition = apply_point(config, &state, *side, test_time()).unwrap();
        transition.new_state
    })
}

/// Wins one game for a side with four straight points from a fresh game.
pub fn play_game(config: &MatchConfig, state: MatchState, side: Side) -> MatchState {
    play_points(config, state, &[side; 4])
}

/// Wins `count` consecutive games for a side.
pub fn play_games(
    config: &MatchConfig,
    state: MatchState,
    side: Side,
    count: usize,
) -> MatchState {
    (0..count).fold(state, |state, _| play_game(config, state, side))
}
