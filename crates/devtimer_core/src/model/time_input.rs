//! Manual `HH:MM:SS` time input.
//!
//! # Responsibility
//! - Filter keystroke-level edits of the three input fields.
//! - Parse and clamp field text into a valid start time.
//!
//! # Invariants
//! - Accepted field text is at most two ASCII digits.
//! - Hours clamp to `[0, 23]`; minutes and seconds clamp to `[0, 59]`.
//! - Unparseable text is treated as `0`, never as an error.

use crate::model::time_display::{MS_PER_SECOND, SECONDS_PER_HOUR, SECONDS_PER_MINUTE};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

pub const MAX_INPUT_HOURS: u8 = 23;
pub const MAX_INPUT_MINUTES: u8 = 59;
pub const MAX_INPUT_SECONDS: u8 = 59;
const MAX_FIELD_CHARS: usize = 2;

static FIELD_EDIT_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[0-9]*$").expect("valid field edit regex"));
static LEADING_INT_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\s*([+-]?)([0-9]+)").expect("valid leading int regex"));

/// Raw text of the three manual input fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeInput {
    pub h: String,
    pub m: String,
    pub s: String,
}

impl Default for TimeInput {
    fn default() -> Self {
        Self {
            h: "00".to_string(),
            m: "00".to_string(),
            s: "00".to_string(),
        }
    }
}

impl TimeInput {
    pub fn new(h: impl Into<String>, m: impl Into<String>, s: impl Into<String>) -> Self {
        Self {
            h: h.into(),
            m: m.into(),
            s: s.into(),
        }
    }

    /// Parses every field and clamps it into its valid range.
    pub fn clamp(&self) -> ClampedTime {
        ClampedTime::from_parts(
            parse_time_field(&self.h),
            parse_time_field(&self.m),
            parse_time_field(&self.s),
        )
    }
}

/// A start time whose fields are guaranteed to be in range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClampedTime {
    pub hours: u8,
    pub minutes: u8,
    pub seconds: u8,
}

impl ClampedTime {
    /// Clamps arbitrary integer parts into `[0,23]:[0,59]:[0,59]`.
    pub fn from_parts(hours: i64, minutes: i64, seconds: i64) -> Self {
        Self {
            hours: clamp_field(hours, MAX_INPUT_HOURS),
            minutes: clamp_field(minutes, MAX_INPUT_MINUTES),
            seconds: clamp_field(seconds, MAX_INPUT_SECONDS),
        }
    }

    /// Total milliseconds represented by this time.
    pub fn to_ms(self) -> u64 {
        (u64::from(self.hours) * SECONDS_PER_HOUR
            + u64::from(self.minutes) * SECONDS_PER_MINUTE
            + u64::from(self.seconds))
            * MS_PER_SECOND
    }

    /// Normalized two-digit field text written back to the inputs.
    pub fn to_input(self) -> TimeInput {
        TimeInput {
            h: format!("{:02}", self.hours),
            m: format!("{:02}", self.minutes),
            s: format!("{:02}", self.seconds),
        }
    }
}

/// Decides the field text after one edit.
///
/// Returns `candidate` when it is empty or up to two digits, otherwise keeps
/// `previous`.
pub fn accept_time_input(previous: &str, candidate: &str) -> String {
    if candidate.len() > MAX_FIELD_CHARS || !FIELD_EDIT_RE.is_match(candidate) {
        return previous.to_string();
    }
    candidate.to_string()
}

/// Parses the leading integer of `text`.
///
/// Trailing garbage is ignored (`"12ab"` -> 12). Text without a leading
/// integer yields 0. Values beyond `i64` saturate.
pub fn parse_time_field(text: &str) -> i64 {
    let Some(captures) = LEADING_INT_RE.captures(text) else {
        return 0;
    };
    let negative = &captures[1] == "-";
    let digits = &captures[2];
    match digits.parse::<i64>() {
        Ok(value) if negative => -value,
        Ok(value) => value,
        Err(_) if negative => i64::MIN,
        Err(_) => i64::MAX,
    }
}

fn clamp_field(value: i64, max: u8) -> u8 {
    value.clamp(0, i64::from(max)) as u8
}

#[cfg(test)]
mod tests {
    use super::{accept_time_input, parse_time_field, ClampedTime, TimeInput};

    #[test]
    fn accept_time_input_keeps_previous_for_invalid_edits() {
        assert_eq!(accept_time_input("05", "5a"), "05");
        assert_eq!(accept_time_input("05", "123"), "05");
        assert_eq!(accept_time_input("05", "-1"), "05");
        assert_eq!(accept_time_input("05", ""), "");
        assert_eq!(accept_time_input("05", "7"), "7");
    }

    #[test]
    fn parse_time_field_reads_leading_integer() {
        assert_eq!(parse_time_field("12ab"), 12);
        assert_eq!(parse_time_field("  7"), 7);
        assert_eq!(parse_time_field("-4"), -4);
        assert_eq!(parse_time_field("abc"), 0);
        assert_eq!(parse_time_field(""), 0);
        assert_eq!(parse_time_field("99999999999999999999999"), i64::MAX);
    }

    #[test]
    fn clamp_normalizes_fields_and_round_trips_to_input() {
        let clamped = TimeInput::new("25", "x", "-3").clamp();
        assert_eq!(
            clamped,
            ClampedTime {
                hours: 23,
                minutes: 0,
                seconds: 0
            }
        );
        assert_eq!(clamped.to_input(), TimeInput::new("23", "00", "00"));
        assert_eq!(clamped.to_ms(), 82_800_000);
    }
}
