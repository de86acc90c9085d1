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
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]

mod builder;
mod error;
mod report;

#[cfg(test)]
mod tests;

// Re-export public types
pub use builder::{CompletedMatch, SummaryBuilder};
pub use error::ReportError;
pub use report::{MatchReport, SetBreakdown, SideTotals, format_duration};
