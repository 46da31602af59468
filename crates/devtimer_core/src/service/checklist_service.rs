//! Checklist use-case service.
//!
//! # Responsibility
//! - Hold the in-memory checklist title and ordered task list.
//! - Provide add/toggle/delete entry points for UI layers.
//!
//! # Invariants
//! - Task IDs are unique within the list.
//! - New tasks are inserted at the top; relative order is otherwise kept.
//! - State lives for the process only; nothing is persisted.

use crate::model::task::{Task, TaskId, TaskValidationError};
use log::debug;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub const DEFAULT_CHECKLIST_TITLE: &str = "App Build Checklist";

const SEED_TASKS: &[(&str, bool)] = &[
    ("Design frontend screens", true),
    ("Set up backend APIs", false),
    ("Add Google Login", false),
    ("Integrate Google Maps", false),
    ("Final testing", false),
];

/// Service error for checklist use-cases.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChecklistError {
    /// Task input failed validation.
    Validation(TaskValidationError),
    /// No task with the given ID exists.
    TaskNotFound(TaskId),
}

impl Display for ChecklistError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Validation(err) => write!(f, "{err}"),
            Self::TaskNotFound(id) => write!(f, "task not found: {id}"),
        }
    }
}

impl Error for ChecklistError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Validation(err) => Some(err),
            Self::TaskNotFound(_) => None,
        }
    }
}

impl From<TaskValidationError> for ChecklistError {
    fn from(value: TaskValidationError) -> Self {
        Self::Validation(value)
    }
}

pub type ChecklistResult<T> = Result<T, ChecklistError>;

/// In-memory checklist.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChecklistService {
    title: String,
    tasks: Vec<Task>,
}

impl Default for ChecklistService {
    fn default() -> Self {
        Self::seeded()
    }
}

impl ChecklistService {
    /// Creates an empty checklist with the given title.
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            tasks: Vec::new(),
        }
    }

    /// Creates the starter checklist shown on first launch.
    pub fn seeded() -> Self {
        let tasks = SEED_TASKS
            .iter()
            .filter_map(|(text, completed)| {
                Task::new(text).ok().map(|mut task| {
                    task.completed = *completed;
                    task
                })
            })
            .collect();
        Self {
            title: DEFAULT_CHECKLIST_TITLE.to_string(),
            tasks,
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    /// Replaces the title verbatim; an empty title is allowed.
    pub fn set_title(&mut self, title: impl Into<String>) {
        self.title = title.into();
    }

    /// Tasks in display order.
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn completed_count(&self) -> usize {
        self.tasks.iter().filter(|task| task.completed).count()
    }

    /// Adds a task at the top of the list.
    ///
    /// # Errors
    /// - Returns `Validation(EmptyText)` when `text` is blank.
    pub fn add_task(&mut self, text: impl AsRef<str>) -> ChecklistResult<Task> {
        let task = Task::new(text)?;
        self.tasks.insert(0, task.clone());
        debug!(
            "event=checklist_add module=checklist status=ok task_count={}",
            self.tasks.len()
        );
        Ok(task)
    }

    /// Flips completion for one task and returns its new state.
    pub fn toggle_task(&mut self, id: TaskId) -> ChecklistResult<Task> {
        let task = self
            .tasks
            .iter_mut()
            .find(|task| task.id == id)
            .ok_or(ChecklistError::TaskNotFound(id))?;
        task.toggle();
        debug!(
            "event=checklist_toggle module=checklist status=ok completed={}",
            task.completed
        );
        Ok(task.clone())
    }

    /// Removes one task and returns it.
    pub fn delete_task(&mut self, id: TaskId) -> ChecklistResult<Task> {
        let index = self
            .tasks
            .iter()
            .position(|task| task.id == id)
            .ok_or(ChecklistError::TaskNotFound(id))?;
        let removed = self.tasks.remove(index);
        debug!(
            "event=checklist_delete module=checklist status=ok task_count={}",
            self.tasks.len()
        );
        Ok(removed)
    }
}
