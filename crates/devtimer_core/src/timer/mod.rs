//! Stopwatch timing primitives.
//!
//! # Responsibility
//! - `accumulator`: pure elapsed-time state machine fed with timestamps.
//! - `ticker`: owned, cancellable periodic sampler thread.

pub mod accumulator;
pub mod ticker;
