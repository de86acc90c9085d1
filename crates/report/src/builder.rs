// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::ReportError;
use crate::report::{MatchReport, SetBreakdown, SideTotals, format_duration};
use matchpoint_domain::{SetResult, SetTally, Side};
use matchpoint_history::HistoryLog;
use time::OffsetDateTime;

/// The facts of a completed match the builder derives a report from.
///
/// Borrowed from the authoritative match state; the builder never owns or
/// mutates scoring state.
#[derive(Debug, Clone, Copy)]
pub struct CompletedMatch<'a> {
    /// The side that won the match.
    pub winner: Side,
    /// The final set tally. Authoritative for the sets score: a manual
    /// correction can finalize a match without a matching set-history
    /// entry, so this is not derivable from `set_history`.
    pub sets: SetTally,
    /// Every completed set's final games pair, in playing order.
    pub set_history: &'a [SetResult],
    /// The full transition log of the match.
    pub history: &'a HistoryLog,
    /// When the match started.
    pub started_at: OffsetDateTime,
    /// When the match completed.
    pub ended_at: OffsetDateTime,
}

/// Builds and holds the winner report for a completed match.
///
/// At most one report is pending at a time: a finished match publishes
/// exactly one report, the display collaborator shows it once, and
/// acknowledging wipes it. A new report cannot be built while a prior
/// unacknowledged one exists.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SummaryBuilder {
    pending: Option<MatchReport>,
}

impl SummaryBuilder {
    /// Creates a builder with no pending report.
    #[must_use]
    pub const fn new() -> Self {
        Self { pending: None }
    }

    /// Whether an unacknowledged report is pending.
    #[must_use]
    pub const fn has_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Builds the winner report from a completed match.
    ///
    /// A no-op returning `false` while an unacknowledged report exists: a
    /// match cannot produce two live reports. Returns `true` when a report
    /// was built and stored as pending.
    pub fn build_report(&mut self, completed: &CompletedMatch<'_>) -> bool {
        if self.pending.is_some() {
            return false;
        }

        let sets_breakdown: Vec<SetBreakdown> = completed
            .set_history
            .iter()
            .enumerate()
            .map(|(index, set)| SetBreakdown {
                set_number: index + 1,
                black_games: set.black_games,
                yellow_games: set.yellow_games,
                winner: set.winner(),
            })
            .collect();

        let total_points: SideTotals = SideTotals::new(
            completed.history.points_won(Side::Black),
            completed.history.points_won(Side::Yellow),
        );
        let total_games: SideTotals = SideTotals::new(
            completed.history.games_won(Side::Black),
            completed.history.games_won(Side::Yellow),
        );

        let sets_text: String = completed
            .set_history
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<String>>()
            .join(", ");
        let summary: String = format!(
            "Sets: {sets_text} | Points: {}-{} | Games: {}-{}",
            total_points.black, total_points.yellow, total_games.black, total_games.yellow
        );

        self.pending = Some(MatchReport {
            winner: completed.winner,
            winner_name: String::from(completed.winner.display_name()),
            final_sets: format!("{}-{}", completed.sets.black, completed.sets.yellow),
            set_scores: completed.set_history.to_vec(),
            sets_breakdown,
            duration: format_duration(completed.ended_at - completed.started_at),
            total_points,
            total_games,
            summary,
            completed_at: completed.ended_at,
            acknowledged: false,
        });
        true
    }

    /// Returns the pending report, if any.
    ///
    /// # Errors
    ///
    /// Returns [`ReportError::NoReportAvailable`] when no report is pending.
    pub const fn pending_report(&self) -> Result<&MatchReport, ReportError> {
        match self.pending.as_ref() {
            Some(report) => Ok(report),
            None => Err(ReportError::NoReportAvailable),
        }
    }

    /// Marks the pending report as displayed and immediately wipes it.
    ///
    /// Returns the acknowledged report so the caller can log it; the
    /// builder is empty afterwards and ready for the next match.
    ///
    /// # Errors
    ///
    /// Returns [`ReportError::NoReportToAcknowledge`] when no report is
    /// pending.
    pub fn acknowledge_and_clear(&mut self) -> Result<MatchReport, ReportError> {
        let mut report: MatchReport = self
            .pending
            .take()
            .ok_or(ReportError::NoReportToAcknowledge)?;
        report.acknowledged = true;
        Ok(report)
    }

    /// Wipes any pending report unconditionally. Used on match reset.
    pub fn clear(&mut self) {
        self.pending = None;
    }
}
