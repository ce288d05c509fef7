//! Rotation clock tests against the facade crate, using fabricated instants
//! (the clock never reads real time itself).

use chrono::{TimeDelta, TimeZone, Utc};

use tui_connections::core::{format_countdown, next_release_after, RotationClock};
use tui_connections::types::RELEASE_UTC_OFFSET_SECS;

/// 2026-03-15 at the given local (UTC-8) wall-clock time, as a UTC instant.
fn local(h: u32, m: u32, s: u32) -> chrono::DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 3, 15, h, m, s).unwrap() + TimeDelta::hours(8)
}

#[test]
fn test_release_just_before_midnight() {
    let now = local(23, 59, 59);
    let release = next_release_after(RELEASE_UTC_OFFSET_SECS, now);
    assert!(release > now);
    assert!(release - now <= TimeDelta::seconds(2));
}

#[test]
fn test_release_just_after_midnight() {
    let now = local(0, 0, 1);
    let release = next_release_after(RELEASE_UTC_OFFSET_SECS, now);
    assert_eq!(
        release - now,
        TimeDelta::hours(23) + TimeDelta::minutes(59) + TimeDelta::seconds(59)
    );
}

#[test]
fn test_countdown_over_a_day_boundary() {
    let start = local(23, 59, 58);
    let mut clock = RotationClock::new(start);

    assert_eq!(clock.tick(start), "00:00:02");
    assert_eq!(clock.tick(start + TimeDelta::seconds(1)), "00:00:01");

    // Crossing the boundary rolls the target a day forward.
    let crossed = start + TimeDelta::seconds(3);
    assert_eq!(clock.tick(crossed), "23:59:59");

    // And the new target keeps counting down normally.
    assert_eq!(
        clock.tick(crossed + TimeDelta::hours(12)),
        "11:59:59"
    );
}

#[test]
fn test_ticks_once_per_second_match_wall_clock() {
    let start = local(6, 30, 0);
    let mut clock = RotationClock::new(start);

    // 17:30:00 until midnight.
    for (i, expected) in [(0, "17:30:00"), (1, "17:29:59"), (60, "17:29:00")] {
        assert_eq!(clock.tick(start + TimeDelta::seconds(i)), expected);
    }
}

#[test]
fn test_formatting_is_zero_padded() {
    assert_eq!(format_countdown(TimeDelta::seconds(7)), "00:00:07");
    assert_eq!(format_countdown(TimeDelta::seconds(8 * 3600 + 5)), "08:00:05");
}
