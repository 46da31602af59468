//! Delta-based elapsed time accumulator.
//!
//! # Responsibility
//! - Track elapsed milliseconds across start/pause cycles.
//! - Own the last-tick timestamp used for delta sampling.
//!
//! # Invariants
//! - `elapsed_ms` never decreases while running.
//! - Each sample adds only the wall-clock delta since the previous sample, so
//!   irregular sampling intervals never compound drift.
//! - `reset`, `set_time` and `set_preset` are rejected while running.
//! - Samples taken while stopped are discarded.

use crate::model::time_display::{format_time, TimeDisplay, MS_PER_SECOND};
use crate::model::time_input::ClampedTime;
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Whether the accumulator is sampling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RunState {
    Stopped,
    Running,
}

/// State-guard errors for accumulator mutations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StopwatchError {
    /// Action requires the stopwatch to be stopped.
    Running,
}

impl Display for StopwatchError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Running => write!(f, "stopwatch must be stopped for this action"),
        }
    }
}

impl Error for StopwatchError {}

/// Read-only view of accumulator state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StopwatchSnapshot {
    pub state: RunState,
    pub elapsed_ms: u64,
    pub initial_ms: u64,
    pub display: TimeDisplay,
}

/// Elapsed-time state machine driven by explicit timestamps.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimeAccumulator {
    state: RunState,
    elapsed_ms: u64,
    initial_ms: u64,
    last_tick_ms: u64,
}

impl Default for TimeAccumulator {
    fn default() -> Self {
        Self::new()
    }
}

impl TimeAccumulator {
    /// Creates a stopped accumulator at zero.
    pub fn new() -> Self {
        Self {
            state: RunState::Stopped,
            elapsed_ms: 0,
            initial_ms: 0,
            last_tick_ms: 0,
        }
    }

    pub fn state(&self) -> RunState {
        self.state
    }

    pub fn is_running(&self) -> bool {
        self.state == RunState::Running
    }

    pub fn elapsed_ms(&self) -> u64 {
        self.elapsed_ms
    }

    /// Last explicitly-set starting value, restored by `reset`.
    pub fn initial_ms(&self) -> u64 {
        self.initial_ms
    }

    /// Transitions to running and records `now_ms` as the last tick.
    ///
    /// Returns `false` when already running; the last tick is left untouched.
    pub fn start(&mut self, now_ms: u64) -> bool {
        if self.is_running() {
            return false;
        }
        self.last_tick_ms = now_ms;
        self.state = RunState::Running;
        true
    }

    /// Accumulates the delta since the previous sample.
    ///
    /// Returns the delta added; `0` when stopped. A clock that steps
    /// backwards contributes `0` and re-anchors the last tick.
    pub fn sample(&mut self, now_ms: u64) -> u64 {
        if !self.is_running() {
            return 0;
        }
        let delta = now_ms.saturating_sub(self.last_tick_ms);
        self.last_tick_ms = now_ms;
        self.elapsed_ms = self.elapsed_ms.saturating_add(delta);
        delta
    }

    /// Transitions to stopped; elapsed time freezes at its last value.
    ///
    /// Returns `false` when already stopped.
    pub fn pause(&mut self) -> bool {
        if !self.is_running() {
            return false;
        }
        self.state = RunState::Stopped;
        true
    }

    /// Restores elapsed time to the initial value.
    pub fn reset(&mut self) -> Result<(), StopwatchError> {
        self.ensure_stopped()?;
        self.elapsed_ms = self.initial_ms;
        Ok(())
    }

    /// Sets the start time from clamped hour/minute/second parts.
    pub fn set_time(
        &mut self,
        hours: i64,
        minutes: i64,
        seconds: i64,
    ) -> Result<ClampedTime, StopwatchError> {
        self.ensure_stopped()?;
        let clamped = ClampedTime::from_parts(hours, minutes, seconds);
        self.set_initial(clamped.to_ms());
        Ok(clamped)
    }

    /// Sets the start time to a preset duration in whole seconds.
    pub fn set_preset(&mut self, seconds: u64) -> Result<(), StopwatchError> {
        self.ensure_stopped()?;
        self.set_initial(seconds.saturating_mul(MS_PER_SECOND));
        Ok(())
    }

    pub fn display(&self) -> TimeDisplay {
        format_time(self.elapsed_ms)
    }

    pub fn snapshot(&self) -> StopwatchSnapshot {
        StopwatchSnapshot {
            state: self.state,
            elapsed_ms: self.elapsed_ms,
            initial_ms: self.initial_ms,
            display: self.display(),
        }
    }

    fn set_initial(&mut self, ms: u64) {
        self.initial_ms = ms;
        self.elapsed_ms = ms;
    }

    fn ensure_stopped(&self) -> Result<(), StopwatchError> {
        if self.is_running() {
            return Err(StopwatchError::Running);
        }
        Ok(())
    }
}
