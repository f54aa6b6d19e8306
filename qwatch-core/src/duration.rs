//! Duration decomposition
//!
//! Splits a raw second count into whole days, hours, minutes and seconds.

use serde::{Deserialize, Serialize};

const SECONDS_PER_MINUTE: u64 = 60;
const SECONDS_PER_HOUR: u64 = 60 * SECONDS_PER_MINUTE;
const SECONDS_PER_DAY: u64 = 24 * SECONDS_PER_HOUR;

/// A second count broken into `(days, hours, minutes, seconds)`
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DurationBreakdown {
    pub days: u64,
    pub hours: u64,
    pub minutes: u64,
    pub seconds: u64,
}

impl DurationBreakdown {
    /// True when every unit is zero
    pub fn is_zero(&self) -> bool {
        *self == Self::default()
    }
}

impl From<DurationBreakdown> for (u64, u64, u64, u64) {
    fn from(d: DurationBreakdown) -> Self {
        (d.days, d.hours, d.minutes, d.seconds)
    }
}

/// Decompose `total_seconds` into days, hours, minutes and seconds
///
/// Fractional seconds are truncated. Negative and non-finite inputs yield an
/// all-zero breakdown.
pub fn seconds_to_duration(total_seconds: f64) -> DurationBreakdown {
    if !total_seconds.is_finite() || total_seconds <= 0.0 {
        return DurationBreakdown::default();
    }

    let total = total_seconds.trunc() as u64;

    DurationBreakdown {
        days: total / SECONDS_PER_DAY,
        hours: (total % SECONDS_PER_DAY) / SECONDS_PER_HOUR,
        minutes: (total % SECONDS_PER_HOUR) / SECONDS_PER_MINUTE,
        seconds: total % SECONDS_PER_MINUTE,
    }
}
