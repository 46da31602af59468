//! Core domain logic for the Dev Session Timer.
//! Rendering layers read state from here and never keep timing state of their own.

pub mod clock;
pub mod config;
pub mod logging;
pub mod model;
pub mod service;
pub mod timer;

pub use clock::{Clock, ManualClock, SystemClock};
pub use config::StopwatchConfig;
pub use logging::{
    default_log_level, init_logging, init_logging_with, logging_status, LogOptions, LoggingError,
};
pub use model::preset::{parse_preset, PresetError, DEFAULT_PRESETS};
pub use model::task::{Task, TaskId, TaskValidationError};
pub use model::time_display::{format_time, TimeDisplay};
pub use model::time_input::{accept_time_input, parse_time_field, ClampedTime, TimeInput};
pub use service::checklist_service::{ChecklistError, ChecklistResult, ChecklistService};
pub use service::stopwatch_service::{StopwatchResult, StopwatchService, StopwatchServiceError};
pub use timer::accumulator::{RunState, StopwatchError, StopwatchSnapshot, TimeAccumulator};
pub use timer::ticker::TickerHandle;

/// Minimal health-check API for early integration.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::{core_version, ping};

    #[test]
    fn ping_returns_pong() {
        assert_eq!(ping(), "pong");
    }

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
