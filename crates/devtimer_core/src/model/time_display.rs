//! Elapsed-time display formatting.
//!
//! # Responsibility
//! - Convert elapsed milliseconds into the `HH:MM:SS:ms` display fields.
//!
//! # Invariants
//! - Every field is zero-padded to at least two digits.
//! - Hours are unbounded on display (clamping applies to manual input only).
//! - The `ms` field is centiseconds: `(ms % 1000) / 10`, truncated.

use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

pub const MS_PER_SECOND: u64 = 1_000;
pub const SECONDS_PER_MINUTE: u64 = 60;
pub const SECONDS_PER_HOUR: u64 = 3_600;

/// Display fields for one elapsed-time value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeDisplay {
    pub hours: String,
    pub minutes: String,
    pub seconds: String,
    /// First two digits of the millisecond remainder.
    pub ms: String,
}

impl TimeDisplay {
    /// Returns `HH:MM:SS` without the fractional field.
    pub fn full(&self) -> String {
        format!("{}:{}:{}", self.hours, self.minutes, self.seconds)
    }
}

impl Display for TimeDisplay {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}:{}:{}:{}",
            self.hours, self.minutes, self.seconds, self.ms
        )
    }
}

/// Formats total elapsed milliseconds into display fields.
pub fn format_time(total_ms: u64) -> TimeDisplay {
    let total_seconds = total_ms / MS_PER_SECOND;
    let hours = total_seconds / SECONDS_PER_HOUR;
    let minutes = (total_seconds % SECONDS_PER_HOUR) / SECONDS_PER_MINUTE;
    let seconds = total_seconds % SECONDS_PER_MINUTE;
    let centis = (total_ms % MS_PER_SECOND) / 10;

    TimeDisplay {
        hours: pad2(hours),
        minutes: pad2(minutes),
        seconds: pad2(seconds),
        ms: pad2(centis),
    }
}

fn pad2(value: u64) -> String {
    format!("{value:02}")
}

#[cfg(test)]
mod tests {
    use super::format_time;

    #[test]
    fn display_joins_all_four_fields() {
        let display = format_time(3_723_450);
        assert_eq!(display.to_string(), "01:02:03:45");
        assert_eq!(display.full(), "01:02:03");
    }

    #[test]
    fn ms_field_truncates_instead_of_rounding() {
        assert_eq!(format_time(999).ms, "99");
        assert_eq!(format_time(19).ms, "01");
        assert_eq!(format_time(9).ms, "00");
    }
}
