// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{DomainError, PointScore, ScoringMode, SetResult, Side};
use std::str::FromStr;

#[test]
fn test_side_opponent_is_symmetric() {
    assert_eq!(Side::Black.opponent(), Side::Yellow);
    assert_eq!(Side::Yellow.opponent(), Side::Black);
    assert_eq!(Side::Black.opponent().opponent(), Side::Black);
}

#[test]
fn test_side_parses_from_string() {
    assert_eq!(Side::from_str("black").unwrap(), Side::Black);
    assert_eq!(Side::from_str("yellow").unwrap(), Side::Yellow);
    assert_eq!(
        Side::from_str("green"),
        Err(DomainError::InvalidSide(String::from("green")))
    );
}

#[test]
fn test_side_display_name() {
    assert_eq!(Side::Black.display_name(), "BLACK TEAM");
    assert_eq!(Side::Yellow.display_name(), "YELLOW TEAM");
}

#[test]
fn test_scoring_mode_round_trips_through_string() {
    assert_eq!(
        ScoringMode::from_str(ScoringMode::Advantage.as_str()).unwrap(),
        ScoringMode::Advantage
    );
    assert_eq!(
        ScoringMode::from_str(ScoringMode::NoAd.as_str()).unwrap(),
        ScoringMode::NoAd
    );
    assert!(ScoringMode::from_str("golden-point").is_err());
}

#[test]
fn test_point_score_deuce_requires_three_all_or_higher() {
    assert!(!PointScore::new(2, 2).is_deuce());
    assert!(!PointScore::new(3, 2).is_deuce());
    assert!(PointScore::new(3, 3).is_deuce());
    assert!(PointScore::new(5, 5).is_deuce());
}

#[test]
fn test_point_score_advantage_holder() {
    assert_eq!(PointScore::new(4, 3).advantage_holder(), Some(Side::Black));
    assert_eq!(PointScore::new(3, 4).advantage_holder(), Some(Side::Yellow));
    assert_eq!(PointScore::new(3, 3).advantage_holder(), None);
    // 4-2 is a won game, not an advantage
    assert_eq!(PointScore::new(4, 2).advantage_holder(), None);
}

#[test]
fn test_point_score_increment_saturates_instead_of_wrapping() {
    // A marathon deuce cycle pins both counts at the maximum without
    // wrapping, so the game stays at deuce rather than being mis-awarded
    let mut points: PointScore = PointScore::new(u8::MAX, u8::MAX);
    points.increment(Side::Black);
    assert_eq!(points.black, u8::MAX);
    assert!(points.is_deuce());
    assert_eq!(points.advantage_holder(), None);
}

#[test]
fn test_point_score_call_maps_traditional_values() {
    let points: PointScore = PointScore::new(0, 3);
    assert_eq!(points.call(Side::Black, ScoringMode::Advantage), "0");
    assert_eq!(points.call(Side::Yellow, ScoringMode::Advantage), "40");

    let points: PointScore = PointScore::new(1, 2);
    assert_eq!(points.call(Side::Black, ScoringMode::Advantage), "15");
    assert_eq!(points.call(Side::Yellow, ScoringMode::Advantage), "30");
}

#[test]
fn test_point_score_call_shows_deuce_and_advantage() {
    let deuce: PointScore = PointScore::new(3, 3);
    assert_eq!(deuce.call(Side::Black, ScoringMode::Advantage), "DEUCE");
    assert_eq!(deuce.call(Side::Yellow, ScoringMode::Advantage), "DEUCE");

    let advantage: PointScore = PointScore::new(4, 3);
    assert_eq!(advantage.call(Side::Black, ScoringMode::Advantage), "AD");
    assert_eq!(advantage.call(Side::Yellow, ScoringMode::Advantage), "40");
}

#[test]
fn test_point_score_call_never_shows_deuce_in_no_ad() {
    let level: PointScore = PointScore::new(3, 3);
    assert_eq!(level.call(Side::Black, ScoringMode::NoAd), "40");
    assert_eq!(level.call(Side::Yellow, ScoringMode::NoAd), "40");
}

#[test]
fn test_set_result_display_and_parse() {
    let result: SetResult = SetResult::new(6, 4);
    assert_eq!(result.to_string(), "6-4");
    assert_eq!(SetResult::from_str("6-4").unwrap(), result);
    assert_eq!(
        SetResult::from_str("six-four"),
        Err(DomainError::SetResultParse(String::from("six-four")))
    );
    assert!(SetResult::from_str("64").is_err());
}

#[test]
fn test_set_result_winner() {
    assert_eq!(SetResult::new(6, 4).winner(), Side::Black);
    assert_eq!(SetResult::new(5, 7).winner(), Side::Yellow);
}

#[test]
fn test_set_result_games_for() {
    let result: SetResult = SetResult::new(7, 5);
    assert_eq!(result.games_for(Side::Black), 7);
    assert_eq!(result.games_for(Side::Yellow), 5);
}
