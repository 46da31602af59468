//! FFI use-case API for Flutter-facing calls.
//!
//! # Responsibility
//! - Expose stopwatch and checklist use-cases to Dart via FRB.
//! - Translate core errors into simple `ok + message` envelopes.
//!
//! # Invariants
//! - Exported functions must not panic across FFI boundary.
//! - Every stopwatch response carries a fresh state view, even on failure.
//! - Stopwatch and checklist state is owned by opaque handles, never globals.

use devtimer_core::{
    accept_time_input as accept_time_input_inner, core_version as core_version_inner,
    format_time as format_time_inner, init_logging as init_logging_inner, ping as ping_inner,
    ChecklistService, RunState, StopwatchConfig, StopwatchService, StopwatchSnapshot, Task,
    TimeDisplay, TimeInput,
};
use log::warn;
use uuid::Uuid;

/// Minimal health-check API for FRB smoke integration.
///
/// # FFI contract
/// - Sync call, non-blocking.
/// - Never throws; always returns a UTF-8 string.
#[flutter_rust_bridge::frb(sync)]
pub fn ping() -> String {
    ping_inner().to_owned()
}

/// Expose core crate version through FFI.
#[flutter_rust_bridge::frb(sync)]
pub fn core_version() -> String {
    core_version_inner().to_owned()
}

/// Initializes Rust core logging once per process.
///
/// Input semantics:
/// - `level`: one of `trace|debug|info|warn|error` (case-insensitive).
/// - `log_dir`: absolute directory path where rolling logs are written.
///
/// # FFI contract
/// - Safe to call repeatedly with the same `level + log_dir` (idempotent).
/// - Never panics; returns empty string on success and error message on failure.
#[flutter_rust_bridge::frb(sync)]
pub fn init_logging(level: String, log_dir: String) -> String {
    match init_logging_inner(level.as_str(), log_dir.as_str()) {
        Ok(()) => String::new(),
        Err(err) => err.to_string(),
    }
}

/// Display fields for one elapsed-time value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimeDisplayView {
    pub hours: String,
    pub minutes: String,
    pub seconds: String,
    pub ms: String,
    /// `HH:MM:SS`.
    pub full: String,
}

impl From<TimeDisplay> for TimeDisplayView {
    fn from(value: TimeDisplay) -> Self {
        let full = value.full();
        Self {
            hours: value.hours,
            minutes: value.minutes,
            seconds: value.seconds,
            ms: value.ms,
            full,
        }
    }
}

/// Formats elapsed milliseconds for display.
#[flutter_rust_bridge::frb(sync)]
pub fn format_time(total_ms: u64) -> TimeDisplayView {
    format_time_inner(total_ms).into()
}

/// Returns the field text after one keystroke edit.
///
/// Keeps `previous` unless `candidate` is empty or up to two digits.
#[flutter_rust_bridge::frb(sync)]
pub fn accept_time_input(previous: String, candidate: String) -> String {
    accept_time_input_inner(previous.as_str(), candidate.as_str())
}

/// Text of the three manual time input fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimeInputView {
    pub h: String,
    pub m: String,
    pub s: String,
}

impl From<TimeInput> for TimeInputView {
    fn from(value: TimeInput) -> Self {
        Self {
            h: value.h,
            m: value.m,
            s: value.s,
        }
    }
}

/// Stopwatch state for rendering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StopwatchView {
    pub running: bool,
    pub elapsed_ms: u64,
    pub initial_ms: u64,
    pub display: TimeDisplayView,
}

impl From<StopwatchSnapshot> for StopwatchView {
    fn from(value: StopwatchSnapshot) -> Self {
        Self {
            running: value.state == RunState::Running,
            elapsed_ms: value.elapsed_ms,
            initial_ms: value.initial_ms,
            display: value.display.into(),
        }
    }
}

/// Response envelope for stopwatch actions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StopwatchResponse {
    /// Whether the action succeeded.
    pub ok: bool,
    /// Human-readable message for diagnostics/UI.
    pub message: String,
    /// State after the action.
    pub view: StopwatchView,
    /// Normalized input fields, set by set-time and preset actions.
    pub input: Option<TimeInputView>,
}

/// Opaque stopwatch owned by the UI; dropping it stops the ticker.
#[flutter_rust_bridge::frb(opaque)]
pub struct StopwatchHandle {
    inner: StopwatchService,
}

impl StopwatchHandle {
    /// Creates a stopped stopwatch configured from `DEVTIMER_*` env vars.
    #[flutter_rust_bridge::frb(sync)]
    pub fn new() -> Self {
        Self {
            inner: StopwatchService::new(StopwatchConfig::from_env()),
        }
    }

    /// Current state; call once per rendered frame.
    #[flutter_rust_bridge::frb(sync)]
    pub fn view(&self) -> StopwatchView {
        self.inner.snapshot().into()
    }

    /// Preset labels for quick-start buttons.
    #[flutter_rust_bridge::frb(sync)]
    pub fn presets(&self) -> Vec<String> {
        self.inner.presets().to_vec()
    }

    #[flutter_rust_bridge::frb(sync)]
    pub fn start(&mut self) -> StopwatchResponse {
        match self.inner.start() {
            Ok(true) => self.success("Started.", None),
            Ok(false) => self.success("Already running.", None),
            Err(err) => self.failure(format!("stopwatch_start failed: {err}")),
        }
    }

    #[flutter_rust_bridge::frb(sync)]
    pub fn pause(&mut self) -> StopwatchResponse {
        if self.inner.pause() {
            self.success("Paused.", None)
        } else {
            self.success("Already paused.", None)
        }
    }

    /// Play/pause button.
    #[flutter_rust_bridge::frb(sync)]
    pub fn toggle(&mut self) -> StopwatchResponse {
        match self.inner.toggle() {
            Ok(RunState::Running) => self.success("Started.", None),
            Ok(RunState::Stopped) => self.success("Paused.", None),
            Err(err) => self.failure(format!("stopwatch_toggle failed: {err}")),
        }
    }

    #[flutter_rust_bridge::frb(sync)]
    pub fn reset(&mut self) -> StopwatchResponse {
        match self.inner.reset() {
            Ok(_) => self.success("Reset.", None),
            Err(err) => self.failure(format!("stopwatch_reset failed: {err}")),
        }
    }

    /// Applies the manual input fields; out-of-range values are clamped.
    #[flutter_rust_bridge::frb(sync)]
    pub fn set_time(&mut self, h: String, m: String, s: String) -> StopwatchResponse {
        match self.inner.set_time_from_input(&TimeInput::new(h, m, s)) {
            Ok(normalized) => self.success("Time set.", Some(normalized)),
            Err(err) => self.failure(format!("stopwatch_set_time failed: {err}")),
        }
    }

    #[flutter_rust_bridge::frb(sync)]
    pub fn apply_preset(&mut self, label: String) -> StopwatchResponse {
        match self.inner.apply_preset(label.as_str()) {
            Ok(input) => self.success("Preset applied.", Some(input)),
            Err(err) => {
                warn!("event=ffi_preset module=ffi status=error error={err}");
                self.failure(format!("stopwatch_apply_preset failed: {err}"))
            }
        }
    }

    fn success(&self, message: &str, input: Option<TimeInput>) -> StopwatchResponse {
        StopwatchResponse {
            ok: true,
            message: message.to_string(),
            view: self.view(),
            input: input.map(Into::into),
        }
    }

    fn failure(&self, message: String) -> StopwatchResponse {
        StopwatchResponse {
            ok: false,
            message,
            view: self.view(),
            input: None,
        }
    }
}

impl Default for StopwatchHandle {
    fn default() -> Self {
        Self::new()
    }
}

/// One checklist row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChecklistItem {
    /// Stable task ID in string form.
    pub id: String,
    pub text: String,
    pub completed: bool,
}

impl From<&Task> for ChecklistItem {
    fn from(value: &Task) -> Self {
        Self {
            id: value.id.to_string(),
            text: value.text.clone(),
            completed: value.completed,
        }
    }
}

/// Response envelope for checklist mutations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChecklistResponse {
    pub ok: bool,
    /// Affected task ID, when the action targeted one task.
    pub task_id: Option<String>,
    pub message: String,
}

impl ChecklistResponse {
    fn success(message: impl Into<String>, task: &Task) -> Self {
        Self {
            ok: true,
            task_id: Some(task.id.to_string()),
            message: message.into(),
        }
    }

    fn failure(message: impl Into<String>) -> Self {
        Self {
            ok: false,
            task_id: None,
            message: message.into(),
        }
    }
}

/// Opaque in-memory checklist owned by the UI.
#[flutter_rust_bridge::frb(opaque)]
pub struct ChecklistHandle {
    inner: ChecklistService,
}

impl ChecklistHandle {
    /// Creates the starter checklist.
    #[flutter_rust_bridge::frb(sync)]
    pub fn new() -> Self {
        Self {
            inner: ChecklistService::seeded(),
        }
    }

    #[flutter_rust_bridge::frb(sync)]
    pub fn title(&self) -> String {
        self.inner.title().to_string()
    }

    #[flutter_rust_bridge::frb(sync)]
    pub fn set_title(&mut self, title: String) {
        self.inner.set_title(title);
    }

    /// Rows in display order.
    #[flutter_rust_bridge::frb(sync)]
    pub fn tasks(&self) -> Vec<ChecklistItem> {
        self.inner.tasks().iter().map(ChecklistItem::from).collect()
    }

    #[flutter_rust_bridge::frb(sync)]
    pub fn add_task(&mut self, text: String) -> ChecklistResponse {
        match self.inner.add_task(text) {
            Ok(task) => ChecklistResponse::success("Task added.", &task),
            Err(err) => ChecklistResponse::failure(format!("checklist_add failed: {err}")),
        }
    }

    #[flutter_rust_bridge::frb(sync)]
    pub fn toggle_task(&mut self, task_id: String) -> ChecklistResponse {
        let id = match parse_task_id(&task_id) {
            Ok(id) => id,
            Err(message) => return ChecklistResponse::failure(message),
        };
        match self.inner.toggle_task(id) {
            Ok(task) => ChecklistResponse::success("Task toggled.", &task),
            Err(err) => ChecklistResponse::failure(format!("checklist_toggle failed: {err}")),
        }
    }

    #[flutter_rust_bridge::frb(sync)]
    pub fn delete_task(&mut self, task_id: String) -> ChecklistResponse {
        let id = match parse_task_id(&task_id) {
            Ok(id) => id,
            Err(message) => return ChecklistResponse::failure(message),
        };
        match self.inner.delete_task(id) {
            Ok(task) => ChecklistResponse::success("Task deleted.", &task),
            Err(err) => ChecklistResponse::failure(format!("checklist_delete failed: {err}")),
        }
    }
}

impl Default for ChecklistHandle {
    fn default() -> Self {
        Self::new()
    }
}

fn parse_task_id(raw: &str) -> Result<Uuid, String> {
    Uuid::parse_str(raw.trim()).map_err(|err| format!("invalid task id `{raw}`: {err}"))
}

#[cfg(test)]
mod tests {
    use super::{
        accept_time_input, core_version, format_time, init_logging, ping, ChecklistHandle,
        StopwatchHandle, TimeInputView,
    };

    #[test]
    fn ping_returns_pong() {
        assert_eq!(ping(), "pong");
    }

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }

    #[test]
    fn init_logging_rejects_empty_log_dir() {
        let error = init_logging("info".to_string(), String::new());
        assert!(!error.is_empty());
    }

    #[test]
    fn init_logging_rejects_unsupported_level() {
        let error = init_logging("verbose".to_string(), "tmp/logs".to_string());
        assert!(error.contains("unsupported log level"));
    }

    #[test]
    fn format_time_includes_full_field() {
        let view = format_time(3_661_050);
        assert_eq!(view.full, "01:01:01");
        assert_eq!(view.ms, "05");
    }

    #[test]
    fn accept_time_input_filters_edits() {
        assert_eq!(accept_time_input("1".to_string(), "12".to_string()), "12");
        assert_eq!(accept_time_input("12".to_string(), "123".to_string()), "12");
        assert_eq!(accept_time_input("12".to_string(), "1x".to_string()), "12");
    }

    #[test]
    fn stopwatch_set_time_returns_clamped_input() {
        let mut handle = StopwatchHandle::new();
        let response = handle.set_time("99".to_string(), "5".to_string(), "abc".to_string());

        assert!(response.ok, "{}", response.message);
        assert_eq!(
            response.input,
            Some(TimeInputView {
                h: "23".to_string(),
                m: "05".to_string(),
                s: "00".to_string(),
            })
        );
        assert_eq!(response.view.display.full, "23:05:00");
        assert!(!response.view.running);
    }

    #[test]
    fn stopwatch_toggle_start_then_pause() {
        let mut handle = StopwatchHandle::new();
        assert!(handle.toggle().view.running);
        let paused = handle.toggle();
        assert!(paused.ok);
        assert!(!paused.view.running);
    }

    #[test]
    fn stopwatch_reset_returns_to_preset_value() {
        let mut handle = StopwatchHandle::new();
        let preset = handle.apply_preset("00:46".to_string());
        assert!(preset.ok, "{}", preset.message);

        handle.start();
        std::thread::sleep(std::time::Duration::from_millis(30));
        let reset = handle.reset();

        assert!(reset.ok);
        assert_eq!(reset.view.elapsed_ms, 46_000);
    }

    #[test]
    fn stopwatch_bad_preset_fails_without_panicking() {
        let mut handle = StopwatchHandle::new();
        let response = handle.apply_preset("later".to_string());
        assert!(!response.ok);
        assert!(response.message.contains("invalid preset"));
    }

    #[test]
    fn checklist_add_toggle_delete_flow() {
        let mut handle = ChecklistHandle::new();
        let added = handle.add_task("Record demo".to_string());
        assert!(added.ok, "{}", added.message);
        let task_id = added.task_id.expect("add should return task_id");
        assert_eq!(handle.tasks()[0].id, task_id);

        assert!(handle.toggle_task(task_id.clone()).ok);
        assert!(handle.tasks()[0].completed);

        assert!(handle.delete_task(task_id.clone()).ok);
        assert!(handle.tasks().iter().all(|item| item.id != task_id));
    }

    #[test]
    fn checklist_rejects_malformed_and_unknown_ids() {
        let mut handle = ChecklistHandle::new();
        let malformed = handle.toggle_task("not-a-uuid".to_string());
        assert!(!malformed.ok);
        assert!(malformed.message.contains("invalid task id"));

        let unknown = handle.delete_task("11111111-2222-4333-8444-555555555555".to_string());
        assert!(!unknown.ok);
        assert!(unknown.message.contains("task not found"));
    }

    #[test]
    fn checklist_rejects_blank_task() {
        let mut handle = ChecklistHandle::new();
        let response = handle.add_task("   ".to_string());
        assert!(!response.ok);
        assert_eq!(handle.tasks().len(), 5);
    }
}
