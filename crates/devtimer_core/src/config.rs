//! Stopwatch runtime configuration.
//!
//! # Responsibility
//! - Provide defaults for tick interval and preset labels.
//! - Read optional overrides from `DEVTIMER_*` environment variables.
//!
//! # Invariants
//! - Tick interval is always within `[MIN_TICK_INTERVAL_MS, MAX_TICK_INTERVAL_MS]`.
//! - Every configured preset label parses.
//! - Invalid overrides fall back to defaults; configuration never fails.

use crate::model::preset::{parse_preset, DEFAULT_PRESETS};
use log::warn;
use std::time::Duration;

pub const TICK_INTERVAL_ENV: &str = "DEVTIMER_TICK_INTERVAL_MS";
pub const PRESETS_ENV: &str = "DEVTIMER_PRESETS";
pub const DEFAULT_TICK_INTERVAL_MS: u64 = 10;
pub const MIN_TICK_INTERVAL_MS: u64 = 1;
pub const MAX_TICK_INTERVAL_MS: u64 = 1_000;

/// Settings consumed by `StopwatchService`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StopwatchConfig {
    pub tick_interval: Duration,
    pub presets: Vec<String>,
}

impl Default for StopwatchConfig {
    fn default() -> Self {
        Self {
            tick_interval: Duration::from_millis(DEFAULT_TICK_INTERVAL_MS),
            presets: DEFAULT_PRESETS.iter().map(|label| label.to_string()).collect(),
        }
    }
}

impl StopwatchConfig {
    /// Builds configuration from process environment.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds configuration from an arbitrary key lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();

        if let Some(raw) = lookup(TICK_INTERVAL_ENV) {
            match raw.trim().parse::<u64>() {
                Ok(ms) => config.tick_interval = normalize_tick_interval(ms),
                Err(_) => warn!(
                    "event=config_override module=config status=ignored key={} reason=not_integer",
                    TICK_INTERVAL_ENV
                ),
            }
        }

        if let Some(raw) = lookup(PRESETS_ENV) {
            let presets = parse_preset_list(&raw);
            if presets.is_empty() {
                warn!(
                    "event=config_override module=config status=ignored key={} reason=no_valid_presets",
                    PRESETS_ENV
                );
            } else {
                config.presets = presets;
            }
        }

        config
    }

    /// Returns a copy with the tick interval replaced (clamped).
    pub fn with_tick_interval_ms(mut self, ms: u64) -> Self {
        self.tick_interval = normalize_tick_interval(ms);
        self
    }
}

/// Clamps a tick interval into the supported range.
pub fn normalize_tick_interval(ms: u64) -> Duration {
    Duration::from_millis(ms.clamp(MIN_TICK_INTERVAL_MS, MAX_TICK_INTERVAL_MS))
}

fn parse_preset_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|label| !label.is_empty())
        .filter(|label| match parse_preset(label) {
            Ok(_) => true,
            Err(err) => {
                warn!("event=config_preset module=config status=ignored error={err}");
                false
            }
        })
        .map(str::to_string)
        .collect()
}
