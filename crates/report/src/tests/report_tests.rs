// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::format_duration;
use time::Duration;

#[test]
fn test_duration_under_a_minute_is_seconds_only() {
    assert_eq!(format_duration(Duration::seconds(0)), "0s");
    assert_eq!(format_duration(Duration::seconds(45)), "45s");
    assert_eq!(format_duration(Duration::seconds(59)), "59s");
}

#[test]
fn test_duration_with_minutes() {
    assert_eq!(format_duration(Duration::seconds(60)), "1m 0s");
    assert_eq!(format_duration(Duration::seconds(754)), "12m 34s");
    assert_eq!(format_duration(Duration::seconds(3661)), "61m 1s");
}

#[test]
fn test_negative_duration_clamps_to_zero() {
    assert_eq!(format_duration(Duration::seconds(-5)), "0s");
}
