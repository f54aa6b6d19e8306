//! Wait estimation for queued jobs
//!
//! Turns the backend's start-time estimate into a short human string and
//! picks the next polling interval from the job's queue position.

use std::time::Duration;

use chrono::{DateTime, Utc};
use qwatch_core::duration::{DurationBreakdown, seconds_to_duration};

/// Shortest interval the monitor ever polls at on its own
pub const MIN_INTERVAL: Duration = Duration::from_secs(2);

/// Formats the two most significant units of a duration
///
/// Units are paired as days/hours, hours/minutes, minutes/seconds; the
/// second unit is printed even when zero. Seconds alone stand by
/// themselves and an all-zero duration formats as an empty string.
pub fn format_wait(d: DurationBreakdown) -> String {
    if d.days > 0 {
        format!("{} days {} hours", d.days, d.hours)
    } else if d.hours > 0 {
        format!("{} hours {} minutes", d.hours, d.minutes)
    } else if d.minutes > 0 {
        format!("{} minutes {} seconds", d.minutes, d.seconds)
    } else if d.seconds > 0 {
        format!("{} seconds", d.seconds)
    } else {
        String::new()
    }
}

/// Estimated wait until `start`, seen from `now`
///
/// An estimate already in the past counts as no wait at all. A missing
/// estimate formats as an empty string.
pub fn estimate_wait(start: Option<DateTime<Utc>>, now: DateTime<Utc>) -> String {
    let Some(start) = start else {
        return String::new();
    };

    let remaining = start.signed_duration_since(now);
    let seconds = remaining.num_milliseconds() as f64 / 1000.0;

    format_wait(seconds_to_duration(seconds))
}

/// Status line suffix for a queued job
pub fn annotation(position: Option<u32>, wait: &str) -> String {
    let position = position
        .map(|p| p.to_string())
        .unwrap_or_else(|| "unknown".to_string());

    format!(" ({}) [Est. wait time: {}]", position, wait)
}

/// Interval to sleep before the next poll while the job is queued
///
/// An unknown position always falls back to [`MIN_INTERVAL`], pinned or not.
/// A known one makes the monitor wait one second per position, never less
/// than [`MIN_INTERVAL`], unless the interval is pinned.
pub fn next_interval(position: Option<u32>, current: Duration, interval_set: bool) -> Duration {
    match position {
        None => MIN_INTERVAL,
        Some(_) if interval_set => current,
        Some(p) => Duration::from_secs(u64::from(p)).max(MIN_INTERVAL),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn breakdown(days: u64, hours: u64, minutes: u64, seconds: u64) -> DurationBreakdown {
        DurationBreakdown {
            days,
            hours,
            minutes,
            seconds,
        }
    }

    #[test]
    fn test_format_wait_pairs() {
        assert_eq!(format_wait(breakdown(2, 0, 15, 9)), "2 days 0 hours");
        assert_eq!(format_wait(breakdown(0, 1, 30, 0)), "1 hours 30 minutes");
        assert_eq!(format_wait(breakdown(0, 0, 4, 0)), "4 minutes 0 seconds");
        assert_eq!(format_wait(breakdown(0, 0, 0, 12)), "12 seconds");
        assert_eq!(format_wait(breakdown(0, 0, 0, 0)), "");
    }

    #[test]
    fn test_estimate_wait_ninety_minutes() {
        let now = Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap();
        let start = now + chrono::Duration::minutes(90);
        assert_eq!(estimate_wait(Some(start), now), "1 hours 30 minutes");
    }

    #[test]
    fn test_estimate_wait_in_the_past() {
        let now = Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap();
        let start = now - chrono::Duration::minutes(3);
        assert_eq!(estimate_wait(Some(start), now), "");
    }

    #[test]
    fn test_estimate_wait_missing() {
        assert_eq!(estimate_wait(None, Utc::now()), "");
    }

    #[test]
    fn test_annotation() {
        assert_eq!(
            annotation(Some(7), "3 minutes 5 seconds"),
            " (7) [Est. wait time: 3 minutes 5 seconds]"
        );
        assert_eq!(annotation(None, ""), " (unknown) [Est. wait time: ]");
    }

    #[test]
    fn test_next_interval_follows_position() {
        let current = Duration::from_secs(5);
        assert_eq!(next_interval(Some(10), current, false), Duration::from_secs(10));
        assert_eq!(next_interval(Some(3), current, false), Duration::from_secs(3));
        assert_eq!(next_interval(Some(1), current, false), MIN_INTERVAL);
    }

    #[test]
    fn test_next_interval_unknown_position() {
        let current = Duration::from_secs(30);
        assert_eq!(next_interval(None, current, false), MIN_INTERVAL);
        assert_eq!(next_interval(None, current, true), MIN_INTERVAL);
    }

    #[test]
    fn test_next_interval_pinned() {
        let current = Duration::from_secs(7);
        assert_eq!(next_interval(Some(40), current, true), current);
        assert_eq!(next_interval(Some(1), current, true), current);
    }
}
