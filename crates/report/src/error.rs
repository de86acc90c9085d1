// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

/// Errors that can occur in the report lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportError {
    /// No completed-match report is pending.
    NoReportAvailable,
    /// There is no pending report to acknowledge.
    NoReportToAcknowledge,
}

impl std::fmt::Display for ReportError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NoReportAvailable => write!(f, "No completed match data available"),
            Self::NoReportToAcknowledge => write!(f, "No match data to mark as displayed"),
        }
    }
}

impl std::error::Error for ReportError {}
