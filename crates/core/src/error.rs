// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use matchpoint_domain::{DomainError, Side};

/// Errors that can occur during score transitions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CoreError {
    /// The match already has a winner; no further scoring is accepted.
    ///
    /// Carries the winner so the caller need not re-query the state.
    MatchAlreadyComplete {
        /// The side that won the match.
        winner: Side,
    },
    /// A domain rule was violated.
    DomainViolation(DomainError),
}

impl std::fmt::Display for CoreError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MatchAlreadyComplete { winner } => {
                write!(f, "Match is already completed: {} won", winner.display_name())
            }
            Self::DomainViolation(err) => write!(f, "Domain violation: {err}"),
        }
    }
}

impl std::error::Error for CoreError {}

impl From<DomainError> for CoreError {
    fn from(err: DomainError) -> Self {
        Self::DomainViolation(err)
    }
}
