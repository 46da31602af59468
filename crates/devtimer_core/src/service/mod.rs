//! Core use-case services.
//!
//! # Responsibility
//! - Orchestrate model and timer primitives into use-case level APIs.
//! - Keep UI/FFI layers decoupled from threading and parsing details.

pub mod checklist_service;
pub mod stopwatch_service;
