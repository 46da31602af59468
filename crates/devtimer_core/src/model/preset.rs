//! Quick-start presets (`MM:SS` or `HH:MM:SS` labels).

use crate::model::time_display::{SECONDS_PER_HOUR, SECONDS_PER_MINUTE};
use once_cell::sync::Lazy;
use regex::Regex;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Preset labels offered by default on the stopwatch screen.
pub const DEFAULT_PRESETS: &[&str] = &["00:12", "00:46", "02:30", "04:12"];

static PRESET_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^([0-9]+):([0-9]+)(?::([0-9]+))?$").expect("valid preset regex")
});

/// Preset label parse errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PresetError {
    /// Label is not `MM:SS` or `HH:MM:SS`.
    Malformed(String),
    /// Label parts overflow the supported range.
    OutOfRange(String),
}

impl Display for PresetError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Malformed(label) => {
                write!(f, "invalid preset `{label}`; expected MM:SS or HH:MM:SS")
            }
            Self::OutOfRange(label) => write!(f, "preset `{label}` is out of range"),
        }
    }
}

impl Error for PresetError {}

/// Parses a preset label into total seconds.
///
/// Two parts are read as `MM:SS`, three as `HH:MM:SS`. Parts are not clamped.
pub fn parse_preset(label: &str) -> Result<u64, PresetError> {
    let trimmed = label.trim();
    let captures = PRESET_RE
        .captures(trimmed)
        .ok_or_else(|| PresetError::Malformed(trimmed.to_string()))?;
    let part = |index: usize| -> Result<Option<u64>, PresetError> {
        captures
            .get(index)
            .map(|value| {
                value
                    .as_str()
                    .parse::<u64>()
                    .map_err(|_| PresetError::OutOfRange(trimmed.to_string()))
            })
            .transpose()
    };

    let first = part(1)?.unwrap_or_default();
    let second = part(2)?.unwrap_or_default();
    let total = match part(3)? {
        Some(third) => first
            .checked_mul(SECONDS_PER_HOUR)
            .and_then(|value| value.checked_add(second.checked_mul(SECONDS_PER_MINUTE)?))
            .and_then(|value| value.checked_add(third)),
        None => first
            .checked_mul(SECONDS_PER_MINUTE)
            .and_then(|value| value.checked_add(second)),
    };
    total.ok_or_else(|| PresetError::OutOfRange(trimmed.to_string()))
}
