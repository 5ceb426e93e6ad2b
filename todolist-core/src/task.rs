//! Task model and the list transitions applied by the root screen.
//!
//! A [`Task`] is an immutable value. Changing one means building a new value
//! and substituting it into the [`TaskList`] at the matching id. The list
//! keeps insertion order and hands out ids from a counter that only grows.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors produced by task list operations.
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
pub enum TaskError {
    /// Task text is empty after trimming whitespace.
    #[error("task text cannot be empty")]
    EmptyText,
    /// Two tasks share the same id.
    #[error("duplicate task id: {0}")]
    DuplicateId(TaskId),
    /// A task id is not below the list's next id.
    #[error("task id {id} is not below next id {next_id}")]
    IdOutOfRange {
        /// Offending task id.
        id: TaskId,
        /// Counter it was checked against.
        next_id: TaskId,
    },
    /// The id counter cannot advance any further.
    #[error("task ids exhausted")]
    IdsExhausted,
}

/// Session-unique task identifier. Assigned from [`TaskList::next_id`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct TaskId(u32);

impl TaskId {
    /// The id handed to the first task of a fresh list.
    pub const FIRST: Self = Self(1);

    /// Wraps a raw id value.
    #[must_use]
    pub const fn new(raw: u32) -> Self {
        Self(raw)
    }

    /// Returns the raw id value.
    #[must_use]
    pub const fn get(self) -> u32 {
        self.0
    }

    const fn next(self) -> Option<Self> {
        match self.0.checked_add(1) {
            Some(raw) => Some(Self(raw)),
            None => None,
        }
    }
}

impl std::fmt::Display for TaskId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One to-do entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    id: TaskId,
    text: String,
    completed: bool,
}

impl Task {
    /// Builds an open task, trimming `text`.
    ///
    /// # Errors
    ///
    /// Returns [`TaskError::EmptyText`] if `text` is blank.
    pub fn new(id: TaskId, text: &str) -> Result<Self, TaskError> {
        let text = text.trim();
        if text.is_empty() {
            return Err(TaskError::EmptyText);
        }
        Ok(Self {
            id,
            text: text.to_owned(),
            completed: false,
        })
    }

    /// Task identifier.
    #[must_use]
    pub const fn id(&self) -> TaskId {
        self.id
    }

    /// Trimmed task description.
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Whether the task has been checked off.
    #[must_use]
    pub const fn is_completed(&self) -> bool {
        self.completed
    }

    /// Returns a copy of this task with `completed` replaced.
    #[must_use]
    pub fn with_completed(&self, completed: bool) -> Self {
        Self {
            completed,
            ..self.clone()
        }
    }
}

/// Ordered task collection plus the id counter.
///
/// Invariant: every id in `tasks` is unique and strictly below `next_id`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskList {
    tasks: Vec<Task>,
    next_id: TaskId,
}

impl TaskList {
    /// Creates an empty list whose first task will get [`TaskId::FIRST`].
    #[must_use]
    pub const fn new() -> Self {
        Self {
            tasks: Vec::new(),
            next_id: TaskId::FIRST,
        }
    }

    /// Rebuilds a list from its parts, checking the id and text invariants.
    ///
    /// # Errors
    ///
    /// Returns [`TaskError::EmptyText`] for a blank task,
    /// [`TaskError::IdOutOfRange`] for an id not below `next_id`, or
    /// [`TaskError::DuplicateId`] if an id appears twice.
    pub fn from_parts(tasks: Vec<Task>, next_id: TaskId) -> Result<Self, TaskError> {
        let mut seen = HashSet::with_capacity(tasks.len());
        for task in &tasks {
            if task.text.trim().is_empty() {
                return Err(TaskError::EmptyText);
            }
            if task.id >= next_id {
                return Err(TaskError::IdOutOfRange {
                    id: task.id,
                    next_id,
                });
            }
            if !seen.insert(task.id) {
                return Err(TaskError::DuplicateId(task.id));
            }
        }
        Ok(Self { tasks, next_id })
    }

    /// Splits the list back into its tasks and counter.
    #[must_use]
    pub fn into_parts(self) -> (Vec<Task>, TaskId) {
        (self.tasks, self.next_id)
    }

    /// Appends a new open task with the trimmed `text`.
    ///
    /// Duplicate text is allowed and there is no size cap.
    ///
    /// # Errors
    ///
    /// Returns [`TaskError::EmptyText`] if the trimmed text is empty, or
    /// [`TaskError::IdsExhausted`] if the counter cannot advance. The list
    /// is unchanged in both cases.
    pub fn add(&mut self, text: &str) -> Result<&Task, TaskError> {
        let task = Task::new(self.next_id, text)?;
        let next_id = self.next_id.next().ok_or(TaskError::IdsExhausted)?;
        let index = self.tasks.len();
        self.tasks.push(task);
        self.next_id = next_id;
        Ok(&self.tasks[index])
    }

    /// Sets `completed` on the task with `id`.
    ///
    /// Returns `false` (and changes nothing) if no task matches.
    pub fn toggle(&mut self, id: TaskId, completed: bool) -> bool {
        match self.tasks.iter_mut().find(|task| task.id == id) {
            Some(slot) => {
                *slot = slot.with_completed(completed);
                true
            }
            None => false,
        }
    }

    /// Removes the task with `id`, keeping the order of the rest.
    ///
    /// Returns the removed task, or `None` if no task matches.
    pub fn remove(&mut self, id: TaskId) -> Option<Task> {
        let index = self.tasks.iter().position(|task| task.id == id)?;
        Some(self.tasks.remove(index))
    }

    /// Looks up a task by id.
    #[must_use]
    pub fn get(&self, id: TaskId) -> Option<&Task> {
        self.tasks.iter().find(|task| task.id == id)
    }

    /// All tasks in insertion order.
    #[must_use]
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    /// Iterates tasks in insertion order.
    pub fn iter(&self) -> std::slice::Iter<'_, Task> {
        self.tasks.iter()
    }

    /// Tasks not yet completed, in insertion order.
    pub fn active(&self) -> impl Iterator<Item = &Task> {
        self.tasks.iter().filter(|task| !task.completed)
    }

    /// Completed tasks, in insertion order.
    pub fn completed(&self) -> impl Iterator<Item = &Task> {
        self.tasks.iter().filter(|task| task.completed)
    }

    /// Splits tasks into `(active, completed)`, keeping relative order.
    #[must_use]
    pub fn partition(&self) -> (Vec<&Task>, Vec<&Task>) {
        self.tasks.iter().partition(|task| !task.completed)
    }

    /// Id the next added task will receive.
    #[must_use]
    pub const fn next_id(&self) -> TaskId {
        self.next_id
    }

    /// Number of tasks.
    #[must_use]
    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    /// Whether the list holds no tasks.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }
}

impl Default for TaskList {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a> IntoIterator for &'a TaskList {
    type Item = &'a Task;
    type IntoIter = std::slice::Iter<'a, Task>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
