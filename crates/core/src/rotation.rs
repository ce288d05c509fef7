//! Rotation module - the daily release boundary and its countdown.
//!
//! The next puzzle becomes available at local midnight in a fixed reference
//! zone ([`RELEASE_UTC_OFFSET_SECS`](crate::types::RELEASE_UTC_OFFSET_SECS)).
//! [`RotationClock`] holds the next release instant and re-derives it
//! whenever the countdown reaches zero. It owns no timer: callers poll
//! [`RotationClock::tick`] on their own cadence (nominally once per second)
//! with the current instant, which keeps the whole module a pure function
//! of its inputs and trivially testable without real time.

use chrono::{DateTime, NaiveTime, TimeDelta, TimeZone, Utc};

use crate::types::RELEASE_UTC_OFFSET_SECS;

/// Next local midnight strictly after `now`, as a UTC instant.
///
/// `offset_secs` is the reference zone's offset from UTC (negative = west).
pub fn next_release_after(offset_secs: i32, now: DateTime<Utc>) -> DateTime<Utc> {
    let offset = TimeDelta::seconds(i64::from(offset_secs));
    // Wall-clock time in the reference zone.
    let local = (now + offset).naive_utc();
    // succ_opt is None only at NaiveDate::MAX, out of reach for real clocks.
    let tomorrow = local.date().succ_opt().unwrap_or(local.date());
    Utc.from_utc_datetime(&(tomorrow.and_time(NaiveTime::MIN) - offset))
}

/// Format a remaining duration as `HH:MM:SS`.
///
/// Negative durations clamp to zero; hours wrap at 24, matching the
/// release cadence (the next release is never more than a day away).
pub fn format_countdown(remaining: TimeDelta) -> String {
    let secs = remaining.num_seconds().max(0);
    format!(
        "{:02}:{:02}:{:02}",
        (secs / 3600) % 24,
        (secs % 3600) / 60,
        secs % 60
    )
}

/// Tracks the instant the next puzzle becomes available.
#[derive(Debug, Clone)]
pub struct RotationClock {
    offset_secs: i32,
    next_release: DateTime<Utc>,
}

impl RotationClock {
    /// Clock anchored to the default release zone.
    pub fn new(now: DateTime<Utc>) -> Self {
        Self::with_offset(RELEASE_UTC_OFFSET_SECS, now)
    }

    /// Clock anchored to an arbitrary fixed offset (seconds east of UTC).
    pub fn with_offset(offset_secs: i32, now: DateTime<Utc>) -> Self {
        Self {
            offset_secs,
            next_release: next_release_after(offset_secs, now),
        }
    }

    pub fn next_release(&self) -> DateTime<Utc> {
        self.next_release
    }

    /// Countdown to the next release, rolling over to the following day
    /// once the boundary passes.
    pub fn tick(&mut self, now: DateTime<Utc>) -> String {
        if self.next_release <= now {
            self.next_release = next_release_after(self.offset_secs, now);
        }
        format_countdown(self.next_release - now)
    }
}
