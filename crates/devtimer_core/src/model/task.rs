//! Checklist task model.
//!
//! # Responsibility
//! - Define the record rendered by the checklist screen.
//!
//! # Invariants
//! - `id` is unique within a checklist and never reused.
//! - `text` is trimmed and non-empty.

use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};
use uuid::Uuid;

/// Stable identifier for one checklist task.
pub type TaskId = Uuid;

/// One checklist entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    pub id: TaskId,
    pub text: String,
    pub completed: bool,
}

/// Task validation errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TaskValidationError {
    /// Text is empty after trimming.
    EmptyText,
}

impl Display for TaskValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyText => write!(f, "task text cannot be empty"),
        }
    }
}

impl Error for TaskValidationError {}

impl Task {
    /// Creates an open task with a generated ID.
    ///
    /// # Errors
    /// - Returns `EmptyText` when `text` is blank after trimming.
    pub fn new(text: impl AsRef<str>) -> Result<Self, TaskValidationError> {
        let trimmed = text.as_ref().trim();
        if trimmed.is_empty() {
            return Err(TaskValidationError::EmptyText);
        }
        Ok(Self {
            id: Uuid::new_v4(),
            text: trimmed.to_string(),
            completed: false,
        })
    }

    /// Flips completion state.
    pub fn toggle(&mut self) {
        self.completed = !self.completed;
    }
}
