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

mod config;
mod error;
mod rules;
mod types;

#[cfg(test)]
mod tests;

// Re-export public types
pub use config::MatchConfig;
pub use error::DomainError;
pub use rules::{game_winner, match_winner, set_winner};
pub use types::{GameTally, PointScore, ScoringMode, SetResult, SetTally, Side};
