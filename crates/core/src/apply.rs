// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::command::OverridePatch;
use crate::error::CoreError;
use crate::state::{MatchState, OverrideOutcome, Transition};
use matchpoint_domain::{
    DomainError, GameTally, MatchConfig, PointScore, ScoringMode, SetResult, Side, game_winner,
    match_winner, set_winner,
};
use matchpoint_history::{ActionKind, HistoryEntry, ScoreSnapshot};
use time::OffsetDateTime;

/// Applies one scoring event to the current state, producing a new state.
///
/// The cascade runs in strict order: the point is counted; a won game
/// resets the points and bumps the game tally; a won set records the set
/// result, resets the games and bumps the set tally; a won match sets the
/// winner and end time. Each level reached appends one history entry, and
/// the returned action kind names the deepest level.
///
/// # Arguments
///
/// * `config` - The match configuration (scoring mode and thresholds)
/// * `state` - The current state (immutable)
/// * `side` - The side that won the point
/// * `at` - The timestamp recorded on history entries
///
/// # Errors
///
/// Returns [`CoreError::MatchAlreadyComplete`] with the existing winner if
/// the match is over. The state is never mutated on failure.
pub fn apply_point(
    config: &MatchConfig,
    state: &MatchState,
    side: Side,
    at: OffsetDateTime,
) -> Result<Transition, CoreError> {
    if let Some(winner) = state.winner {
        return Err(CoreError::MatchAlreadyComplete { winner });
    }

    let mut next: MatchState = state.clone();
    let before: ScoreSnapshot = next.score_snapshot();

    next.points.increment(side);

    let Some(game_won_by) = game_winner(config.scoring_mode, &next.points) else {
        next.history.append(HistoryEntry::new(
            at,
            ActionKind::Point,
            side,
            before,
            next.score_snapshot(),
        ));
        return Ok(Transition {
            new_state: next,
            action: ActionKind::Point,
        });
    };

    // The point closed the game: points reset, the game goes on the tally.
    next.points = PointScore::new(0, 0);
    next.games.increment(game_won_by);
    next.history.append(HistoryEntry::new(
        at,
        ActionKind::Game,
        game_won_by,
        before,
        next.score_snapshot(),
    ));

    let Some(set_won_by) = set_winner(config, &next.games) else {
        return Ok(Transition {
            new_state: next,
            action: ActionKind::Game,
        });
    };

    let before_set: ScoreSnapshot = next.score_snapshot();
    next.set_history
        .push(SetResult::new(next.games.black, next.games.yellow));
    next.sets.increment(set_won_by);
    next.games = GameTally::new(0, 0);
    next.history.append(HistoryEntry::new(
        at,
        ActionKind::Set,
        set_won_by,
        before_set,
        next.score_snapshot(),
    ));

    let Some(match_won_by) = match_winner(config, &next.sets) else {
        return Ok(Transition {
            new_state: next,
            action: ActionKind::Set,
        });
    };

    next.winner = Some(match_won_by);
    next.ended_at = Some(at);
    let final_snapshot: ScoreSnapshot = next.score_snapshot();
    next.history.append(HistoryEntry::new(
        at,
        ActionKind::Match,
        match_won_by,
        final_snapshot,
        final_snapshot,
    ));

    Ok(Transition {
        new_state: next,
        action: ActionKind::Match,
    })
}

/// Applies a manual score correction, producing a new state.
///
/// Only point, game and set counts can be supplied; omitted fields keep
/// their current values. The patch is validated as a whole before anything
/// is applied. Match-win detection re-runs afterwards, so a correction
/// that pushes a side over the sets threshold finalizes the match exactly
/// like a played point would.
///
/// # Errors
///
/// Returns an error if:
/// - The match already has a winner (completed state is immutable except
///   via reset)
/// - A supplied count is outside the range the configuration allows
pub fn apply_override(
    config: &MatchConfig,
    state: &MatchState,
    patch: &OverridePatch,
    at: OffsetDateTime,
) -> Result<OverrideOutcome, CoreError> {
    if let Some(winner) = state.winner {
        return Err(CoreError::MatchAlreadyComplete { winner });
    }

    validate_patch(config, patch)?;

    let mut next: MatchState = state.clone();
    if let Some(count) = patch.point_black {
        next.points.black = count;
    }
    if let Some(count) = patch.point_yellow {
        next.points.yellow = count;
    }
    if let Some(count) = patch.game_black {
        next.games.black = count;
    }
    if let Some(count) = patch.game_yellow {
        next.games.yellow = count;
    }
    if let Some(count) = patch.set_black {
        next.sets.black = count;
    }
    if let Some(count) = patch.set_yellow {
        next.sets.yellow = count;
    }

    let completed: Option<Side> = match_winner(config, &next.sets);
    if let Some(winner) = completed {
        next.winner = Some(winner);
        next.ended_at = Some(at);
        let snapshot: ScoreSnapshot = next.score_snapshot();
        next.history.append(HistoryEntry::new(
            at,
            ActionKind::Match,
            winner,
            snapshot,
            snapshot,
        ));
    }

    Ok(OverrideOutcome {
        new_state: next,
        completed,
    })
}

/// Validates every supplied patch field against the configuration.
///
/// Rejection is atomic: one bad field fails the whole patch and nothing
/// is applied.
fn validate_patch(config: &MatchConfig, patch: &OverridePatch) -> Result<(), CoreError> {
    let points: [(Side, Option<u8>); 2] = [
        (Side::Black, patch.point_black),
        (Side::Yellow, patch.point_yellow),
    ];
    for (side, count) in points {
        if let Some(count) = count {
            // No-ad point counts live in 0..=3; the fourth point ends the game
            if config.scoring_mode == ScoringMode::NoAd && count > 3 {
                return Err(DomainError::InvalidPointCount {
                    side,
                    count,
                    mode: config.scoring_mode,
                }
                .into());
            }
        }
    }

    if let Some(cap) = config.set_cap_games {
        let games: [(Side, Option<u8>); 2] = [
            (Side::Black, patch.game_black),
            (Side::Yellow, patch.game_yellow),
        ];
        for (side, count) in games {
            if let Some(count) = count
                && count > cap
            {
                return Err(DomainError::InvalidGameCount { side, count, cap }.into());
            }
        }
    }

    let sets: [(Side, Option<u8>); 2] = [
        (Side::Black, patch.set_black),
        (Side::Yellow, patch.set_yellow),
    ];
    for (side, count) in sets {
        if let Some(count) = count
            && count > config.sets_to_win_match
        {
            return Err(DomainError::InvalidSetCount {
                side,
                count,
                max: config.sets_to_win_match,
            }
            .into());
        }
    }

    Ok(())
}
