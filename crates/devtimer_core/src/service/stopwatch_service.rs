//! Stopwatch use-case service.
//!
//! # Responsibility
//! - Own the elapsed-time accumulator and its sampler thread.
//! - Provide the start/pause/reset/set-time entry points used by UI layers.
//!
//! # Invariants
//! - A ticker exists exactly while the accumulator is running.
//! - `pause` marks the accumulator stopped before cancelling the ticker, and
//!   returns only after the sampler thread has exited.
//! - Reset, set-time and preset actions always stop the timer first.

use crate::clock::{Clock, SystemClock};
use crate::config::StopwatchConfig;
use crate::model::preset::{parse_preset, PresetError};
use crate::model::time_display::{format_time, TimeDisplay};
use crate::model::time_input::{ClampedTime, TimeInput};
use crate::timer::accumulator::{RunState, StopwatchError, StopwatchSnapshot, TimeAccumulator};
use crate::timer::ticker::TickerHandle;
use log::{debug, info, trace};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

/// Service error for stopwatch use-cases.
#[derive(Debug)]
pub enum StopwatchServiceError {
    /// Accumulator state guard failed.
    Stopwatch(StopwatchError),
    /// Preset label could not be parsed.
    Preset(PresetError),
    /// Sampler thread could not be started.
    Ticker(std::io::Error),
}

impl Display for StopwatchServiceError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Stopwatch(err) => write!(f, "{err}"),
            Self::Preset(err) => write!(f, "{err}"),
            Self::Ticker(err) => write!(f, "failed to start ticker: {err}"),
        }
    }
}

impl Error for StopwatchServiceError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Stopwatch(err) => Some(err),
            Self::Preset(err) => Some(err),
            Self::Ticker(err) => Some(err),
        }
    }
}

impl From<StopwatchError> for StopwatchServiceError {
    fn from(value: StopwatchError) -> Self {
        Self::Stopwatch(value)
    }
}

impl From<PresetError> for StopwatchServiceError {
    fn from(value: PresetError) -> Self {
        Self::Preset(value)
    }
}

pub type StopwatchResult<T> = Result<T, StopwatchServiceError>;

/// Stopwatch facade owning one accumulator and at most one sampler.
pub struct StopwatchService<C: Clock = SystemClock> {
    clock: Arc<C>,
    config: StopwatchConfig,
    accumulator: Arc<Mutex<TimeAccumulator>>,
    ticker: Option<TickerHandle>,
}

impl StopwatchService<SystemClock> {
    /// Creates a service backed by the system clock.
    pub fn new(config: StopwatchConfig) -> Self {
        Self::with_clock(SystemClock, config)
    }
}

impl<C: Clock> StopwatchService<C> {
    /// Creates a service with a caller-provided clock.
    pub fn with_clock(clock: C, config: StopwatchConfig) -> Self {
        Self {
            clock: Arc::new(clock),
            config,
            accumulator: Arc::new(Mutex::new(TimeAccumulator::new())),
            ticker: None,
        }
    }

    pub fn config(&self) -> &StopwatchConfig {
        &self.config
    }

    /// Preset labels offered to the UI.
    pub fn presets(&self) -> &[String] {
        &self.config.presets
    }

    /// Starts sampling. Returns `false` when already running.
    ///
    /// # Errors
    /// - Returns `Ticker` when the sampler thread cannot be spawned; the
    ///   accumulator is left stopped.
    pub fn start(&mut self) -> StopwatchResult<bool> {
        let now_ms = self.clock.now_ms();
        if !self.lock().start(now_ms) {
            return Ok(false);
        }

        let clock = Arc::clone(&self.clock);
        let accumulator = Arc::clone(&self.accumulator);
        let spawned = TickerHandle::spawn(self.config.tick_interval, move || {
            let delta = lock_accumulator(&accumulator).sample(clock.now_ms());
            trace!("event=stopwatch_tick module=timer delta_ms={delta}");
        });

        match spawned {
            Ok(ticker) => self.ticker = Some(ticker),
            Err(err) => {
                self.lock().pause();
                return Err(StopwatchServiceError::Ticker(err));
            }
        }

        info!(
            "event=stopwatch_start module=timer status=ok elapsed_ms={} interval_ms={}",
            self.elapsed_ms(),
            self.config.tick_interval.as_millis()
        );
        Ok(true)
    }

    /// Stops sampling. Returns `false` when already stopped.
    ///
    /// No tick mutates elapsed time after this returns.
    pub fn pause(&mut self) -> bool {
        let paused = self.lock().pause();
        if let Some(ticker) = self.ticker.take() {
            ticker.cancel();
        }
        if paused {
            info!(
                "event=stopwatch_pause module=timer status=ok elapsed_ms={}",
                self.elapsed_ms()
            );
        }
        paused
    }

    /// Starts when stopped, pauses when running. Returns the new state.
    pub fn toggle(&mut self) -> StopwatchResult<RunState> {
        if self.is_running() {
            self.pause();
        } else {
            self.start()?;
        }
        Ok(self.state())
    }

    /// Stops and restores elapsed time to the last explicitly-set value.
    pub fn reset(&mut self) -> StopwatchResult<StopwatchSnapshot> {
        self.pause();
        let mut accumulator = self.lock();
        accumulator.reset()?;
        info!(
            "event=stopwatch_reset module=timer status=ok elapsed_ms={}",
            accumulator.elapsed_ms()
        );
        Ok(accumulator.snapshot())
    }

    /// Stops and sets the start time from numeric parts, clamped.
    pub fn set_time(
        &mut self,
        hours: i64,
        minutes: i64,
        seconds: i64,
    ) -> StopwatchResult<ClampedTime> {
        self.pause();
        let clamped = self.lock().set_time(hours, minutes, seconds)?;
        info!(
            "event=stopwatch_set_time module=timer status=ok initial_ms={}",
            clamped.to_ms()
        );
        Ok(clamped)
    }

    /// Stops and sets the start time from raw input fields.
    ///
    /// Returns the normalized field text to write back to the inputs.
    pub fn set_time_from_input(&mut self, input: &TimeInput) -> StopwatchResult<TimeInput> {
        let requested = input.clamp();
        debug!(
            "event=stopwatch_input module=timer h={} m={} s={}",
            requested.hours, requested.minutes, requested.seconds
        );
        let clamped = self.set_time(
            i64::from(requested.hours),
            i64::from(requested.minutes),
            i64::from(requested.seconds),
        )?;
        Ok(clamped.to_input())
    }

    /// Stops and applies a preset label such as `02:30`.
    ///
    /// Returns the input field text derived from the preset time.
    ///
    /// # Errors
    /// - Returns `Preset` when the label is malformed; state is unchanged.
    pub fn apply_preset(&mut self, label: &str) -> StopwatchResult<TimeInput> {
        let seconds = parse_preset(label)?;
        self.pause();
        let mut accumulator = self.lock();
        accumulator.set_preset(seconds)?;
        info!(
            "event=stopwatch_preset module=timer status=ok initial_ms={}",
            accumulator.initial_ms()
        );
        let display = accumulator.display();
        Ok(TimeInput::new(display.hours, display.minutes, display.seconds))
    }

    pub fn state(&self) -> RunState {
        self.lock().state()
    }

    pub fn is_running(&self) -> bool {
        self.lock().is_running()
    }

    pub fn elapsed_ms(&self) -> u64 {
        self.lock().elapsed_ms()
    }

    /// Display fields for the current elapsed time.
    pub fn display(&self) -> TimeDisplay {
        format_time(self.elapsed_ms())
    }

    pub fn snapshot(&self) -> StopwatchSnapshot {
        self.lock().snapshot()
    }

    fn lock(&self) -> MutexGuard<'_, TimeAccumulator> {
        lock_accumulator(&self.accumulator)
    }
}

fn lock_accumulator(accumulator: &Mutex<TimeAccumulator>) -> MutexGuard<'_, TimeAccumulator> {
    // Every accumulator mutation is a single field update, so a poisoned
    // guard still holds consistent state.
    accumulator.lock().unwrap_or_else(PoisonError::into_inner)
}
