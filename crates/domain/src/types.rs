// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::DomainError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// One of the two sides of the court.
///
/// All scoring state is symmetric across sides; the names come from the
/// team colors on the physical scoreboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    /// The black team.
    Black,
    /// The yellow team.
    Yellow,
}

impl Side {
    /// Returns the opposing side.
    #[must_use]
    pub const fn opponent(&self) -> Self {
        match self {
            Self::Black => Self::Yellow,
            Self::Yellow => Self::Black,
        }
    }

    /// Converts this side to its string representation.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Black => "black",
            Self::Yellow => "yellow",
        }
    }

    /// Returns the display name shown on the scoreboard.
    #[must_use]
    pub const fn display_name(&self) -> &'static str {
        match self {
            Self::Black => "BLACK TEAM",
            Self::Yellow => "YELLOW TEAM",
        }
    }
}

impl FromStr for Side {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "black" => Ok(Self::Black),
            "yellow" => Ok(Self::Yellow),
            _ => Err(DomainError::InvalidSide(s.to_string())),
        }
    }
}

impl std::fmt::Display for Side {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// The scoring variant a match is played under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum ScoringMode {
    /// Classic tennis scoring with deuce and advantage.
    #[default]
    Advantage,
    /// Sudden-point scoring: the fourth point always wins the game.
    NoAd,
}

impl ScoringMode {
    /// Converts this scoring mode to its string representation.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Advantage => "advantage",
            Self::NoAd => "no-ad",
        }
    }
}

impl FromStr for ScoringMode {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "advantage" => Ok(Self::Advantage),
            "no-ad" => Ok(Self::NoAd),
            _ => Err(DomainError::InvalidScoringMode(s.to_string())),
        }
    }
}

impl std::fmt::Display for ScoringMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Raw per-side point counts within the current game.
///
/// Deuce and advantage are derived from the raw counts rather than stored:
/// both sides at three or more and level is deuce; both at three or more
/// with a one-point gap means the leader holds advantage. Game-win
/// evaluation lives in [`crate::rules`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct PointScore {
    /// Points won by the black side in the current game.
    pub black: u8,
    /// Points won by the yellow side in the current game.
    pub yellow: u8,
}

impl PointScore {
    /// Creates a point score from raw counts.
    #[must_use]
    pub const fn new(black: u8, yellow: u8) -> Self {
        Self { black, yellow }
    }

    /// Returns the raw count for a side.
    #[must_use]
    pub const fn get(&self, side: Side) -> u8 {
        match side {
            Side::Black => self.black,
            Side::Yellow => self.yellow,
        }
    }

    /// Adds one point to a side's raw count, saturating at the type
    /// maximum so an endless deuce cycle can never wrap a count.
    pub const fn increment(&mut self, side: Side) {
        match side {
            Side::Black => self.black = self.black.saturating_add(1),
            Side::Yellow => self.yellow = self.yellow.saturating_add(1),
        }
    }

    /// Whether the game is at deuce: both sides at three or more, level.
    ///
    /// Only meaningful under [`ScoringMode::Advantage`]; no-ad games never
    /// reach a count where this matters.
    #[must_use]
    pub const fn is_deuce(&self) -> bool {
        self.black >= 3 && self.yellow >= 3 && self.black == self.yellow
    }

    /// The side holding advantage, if any.
    ///
    /// Advantage exists when both sides are at three or more and exactly
    /// one point apart.
    #[must_use]
    pub const fn advantage_holder(&self) -> Option<Side> {
        if self.black >= 3 && self.yellow >= 3 {
            if self.black.saturating_sub(self.yellow) == 1 {
                return Some(Side::Black);
            }
            if self.yellow.saturating_sub(self.black) == 1 {
                return Some(Side::Yellow);
            }
        }
        None
    }

    /// Renders a side's count as the traditional scoreboard call.
    ///
    /// Counts map to "0", "15", "30", "40". Under advantage scoring a
    /// deuce game shows "DEUCE" for both sides and "AD"/"40" once one
    /// side leads.
    #[must_use]
    pub fn call(&self, side: Side, mode: ScoringMode) -> String {
        if mode == ScoringMode::Advantage && self.black >= 3 && self.yellow >= 3 {
            if self.is_deuce() {
                return String::from("DEUCE");
            }
            return match self.advantage_holder() {
                Some(holder) if holder == side => String::from("AD"),
                _ => String::from("40"),
            };
        }
        match self.get(side) {
            0 => String::from("0"),
            1 => String::from("15"),
            2 => String::from("30"),
            _ => String::from("40"),
        }
    }
}

/// Games won per side within the current set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct GameTally {
    /// Games won by the black side.
    pub black: u8,
    /// Games won by the yellow side.
    pub yellow: u8,
}

impl GameTally {
    /// Creates a game tally from raw counts.
    #[must_use]
    pub const fn new(black: u8, yellow: u8) -> Self {
        Self { black, yellow }
    }

    /// Returns the count for a side.
    #[must_use]
    pub const fn get(&self, side: Side) -> u8 {
        match side {
            Side::Black => self.black,
            Side::Yellow => self.yellow,
        }
    }

    /// Adds one game to a side's count, saturating at the type maximum.
    pub const fn increment(&mut self, side: Side) {
        match side {
            Side::Black => self.black = self.black.saturating_add(1),
            Side::Yellow => self.yellow = self.yellow.saturating_add(1),
        }
    }

    /// How many games a side leads its opponent by, zero when behind.
    #[must_use]
    pub const fn lead(&self, side: Side) -> u8 {
        self.get(side).saturating_sub(self.get(side.opponent()))
    }
}

/// Sets won per side within the match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct SetTally {
    /// Sets won by the black side.
    pub black: u8,
    /// Sets won by the yellow side.
    pub yellow: u8,
}

impl SetTally {
    /// Creates a set tally from raw counts.
    #[must_use]
    pub const fn new(black: u8, yellow: u8) -> Self {
        Self { black, yellow }
    }

    /// Returns the count for a side.
    #[must_use]
    pub const fn get(&self, side: Side) -> u8 {
        match side {
            Side::Black => self.black,
            Side::Yellow => self.yellow,
        }
    }

    /// Adds one set to a side's count, saturating at the type maximum.
    pub const fn increment(&mut self, side: Side) {
        match side {
            Side::Black => self.black = self.black.saturating_add(1),
            Side::Yellow => self.yellow = self.yellow.saturating_add(1),
        }
    }
}

/// The final games pair of a completed set, e.g. "6-4".
///
/// Black's games always come first, matching the scoreboard layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SetResult {
    /// Games won by the black side in the set.
    pub black_games: u8,
    /// Games won by the yellow side in the set.
    pub yellow_games: u8,
}

impl SetResult {
    /// Creates a set result from the closing game tally.
    #[must_use]
    pub const fn new(black_games: u8, yellow_games: u8) -> Self {
        Self {
            black_games,
            yellow_games,
        }
    }

    /// The side that won the set.
    #[must_use]
    pub const fn winner(&self) -> Side {
        if self.black_games > self.yellow_games {
            Side::Black
        } else {
            Side::Yellow
        }
    }

    /// Returns the games count for a side.
    #[must_use]
    pub const fn games_for(&self, side: Side) -> u8 {
        match side {
            Side::Black => self.black_games,
            Side::Yellow => self.yellow_games,
        }
    }
}

impl std::fmt::Display for SetResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}-{}", self.black_games, self.yellow_games)
    }
}

impl FromStr for SetResult {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (black, yellow) = s
            .split_once('-')
            .ok_or_else(|| DomainError::SetResultParse(s.to_string()))?;
        let black_games: u8 = black
            .parse()
            .map_err(|_| DomainError::SetResultParse(s.to_string()))?;
        let yellow_games: u8 = yellow
            .parse()
            .map_err(|_| DomainError::SetResultParse(s.to_string()))?;
        Ok(Self::new(black_games, yellow_games))
    }
}
