//! Domain model for the stopwatch and checklist screens.
//!
//! # Responsibility
//! - Define display, input, preset and task shapes shared by services and FFI.
//! - Keep all parsing/formatting rules rendering-independent.
//!
//! # Invariants
//! - Formatting uses integer division only, never rounding.
//! - Manual input is clamped, never rejected.

pub mod preset;
pub mod task;
pub mod time_display;
pub mod time_input;
