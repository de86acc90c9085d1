// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::apply::{apply_override, apply_point};
use crate::command::OverridePatch;
use crate::error::CoreError;
use crate::state::{MatchState, OverrideOutcome, Transition};
use matchpoint_domain::{MatchConfig, Side};
use matchpoint_history::ActionKind;
use matchpoint_report::{CompletedMatch, MatchReport, ReportError, SummaryBuilder};
use std::sync::{Mutex, MutexGuard, PoisonError};
use time::OffsetDateTime;
use tracing::{debug, info, warn};

/// What one applied point did, plus the resulting state snapshot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PointOutcome {
    /// The deepest cascade level the point reached.
    pub action: ActionKind,
    /// The state after the cascade, fully resolved.
    pub state: MatchState,
}

/// The live match engine.
///
/// Owns the single authoritative [`MatchState`] and the pending winner
/// report behind one lock, so every mutating operation is a short,
/// serialized critical section and a point → game → set → match cascade
/// is atomic as observed by any reader. Readers only ever receive clones
/// of fully-resolved state.
#[derive(Debug)]
pub struct ScoreEngine {
    config: MatchConfig,
    inner: Mutex<EngineInner>,
}

#[derive(Debug)]
struct EngineInner {
    state: MatchState,
    summary: SummaryBuilder,
}

impl ScoreEngine {
    /// Creates an engine for a new match starting now.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration thresholds are invalid.
    pub fn new(config: MatchConfig) -> Result<Self, CoreError> {
        config.validate()?;
        Ok(Self {
            config,
            inner: Mutex::new(EngineInner {
                state: MatchState::new(OffsetDateTime::now_utc()),
                summary: SummaryBuilder::new(),
            }),
        })
    }

    /// The configuration this engine was built with.
    #[must_use]
    pub const fn config(&self) -> &MatchConfig {
        &self.config
    }

    // The guarded value is always fully resolved, so a poisoned lock is
    // recovered rather than propagated.
    fn lock(&self) -> MutexGuard<'_, EngineInner> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Applies one "point won" event and returns what happened.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::MatchAlreadyComplete`] with the existing
    /// winner once the match is over; the state is left untouched.
    pub fn apply_point(&self, side: Side) -> Result<PointOutcome, CoreError> {
        let mut inner: MutexGuard<'_, EngineInner> = self.lock();

        let transition: Transition =
            match apply_point(&self.config, &inner.state, side, OffsetDateTime::now_utc()) {
                Ok(transition) => transition,
                Err(err) => {
                    warn!("Rejected point for {side}: {err}");
                    return Err(err);
                }
            };

        let state: &MatchState = &transition.new_state;
        match transition.action {
            ActionKind::Point => {
                debug!(
                    "Point won by {side}: {}-{}",
                    state.points.black, state.points.yellow
                );
            }
            ActionKind::Game => {
                info!(
                    "Game won by {side}: games {}-{}",
                    state.games.black, state.games.yellow
                );
            }
            ActionKind::Set => {
                info!(
                    "Set won by {side}: sets {}-{}",
                    state.sets.black, state.sets.yellow
                );
            }
            ActionKind::Match => {
                info!("Match won by {}", side.display_name());
            }
        }

        if transition.action == ActionKind::Match {
            Self::publish_report(&mut inner.summary, state);
        }

        inner.state = transition.new_state;
        Ok(PointOutcome {
            action: transition.action,
            state: inner.state.clone(),
        })
    }

    /// Discards the current match and starts a fresh one.
    ///
    /// Any pending winner report is wiped. Always succeeds.
    pub fn reset(&self) -> MatchState {
        let mut inner: MutexGuard<'_, EngineInner> = self.lock();
        inner.state = MatchState::new(OffsetDateTime::now_utc());
        inner.summary.clear();
        info!("Match reset");
        inner.state.clone()
    }

    /// Applies a manual score correction.
    ///
    /// Omitted fields keep their current values; the correction is
    /// validated and applied atomically. A correction that pushes a side
    /// over the sets threshold finalizes the match and publishes the
    /// winner report.
    ///
    /// # Errors
    ///
    /// Returns an error if the match already has a winner or a supplied
    /// count is out of range; the state is left untouched.
    pub fn override_score(&self, patch: &OverridePatch) -> Result<MatchState, CoreError> {
        let mut inner: MutexGuard<'_, EngineInner> = self.lock();

        let outcome: OverrideOutcome =
            match apply_override(&self.config, &inner.state, patch, OffsetDateTime::now_utc()) {
                Ok(outcome) => outcome,
                Err(err) => {
                    warn!("Rejected score override: {err}");
                    return Err(err);
                }
            };

        if let Some(winner) = outcome.completed {
            info!("Score override finalized the match: {} won", winner.display_name());
            Self::publish_report(&mut inner.summary, &outcome.new_state);
        } else {
            info!("Score overridden manually");
        }

        inner.state = outcome.new_state;
        Ok(inner.state.clone())
    }

    /// Returns a snapshot of the current match state.
    ///
    /// Never blocks on in-flight cascades beyond the lock handoff and
    /// never mutates.
    #[must_use]
    pub fn snapshot(&self) -> MatchState {
        self.lock().state.clone()
    }

    /// Returns the pending winner report, if a finished match has one.
    ///
    /// # Errors
    ///
    /// Returns [`ReportError::NoReportAvailable`] when no report is
    /// pending.
    pub fn pending_report(&self) -> Result<MatchReport, ReportError> {
        self.lock().summary.pending_report().map(Clone::clone)
    }

    /// Acknowledges the pending winner report and wipes it.
    ///
    /// # Errors
    ///
    /// Returns [`ReportError::NoReportToAcknowledge`] when no report is
    /// pending.
    pub fn acknowledge_report(&self) -> Result<MatchReport, ReportError> {
        self.lock().summary.acknowledge_and_clear()
    }

    fn publish_report(summary: &mut SummaryBuilder, state: &MatchState) {
        let (Some(winner), Some(ended_at)) = (state.winner, state.ended_at) else {
            return;
        };
        let built: bool = summary.build_report(&CompletedMatch {
            winner,
            sets: state.sets,
            set_history: &state.set_history,
            history: &state.history,
            started_at: state.started_at,
            ended_at,
        });
        if !built {
            warn!("Winner report not built: a previous report is still unacknowledged");
        }
    }
}
