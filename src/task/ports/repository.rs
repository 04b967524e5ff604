//! Repository port for task storage, lookup, update, and deletion.

use crate::task::domain::{Description, Priority, Status, Task, TaskId, TaskUpdate};
use thiserror::Error;

/// Result type for task repository operations.
pub type TaskRepositoryResult<T> = Result<T, TaskRepositoryError>;

/// Task collection contract.
///
/// The repository is the sole owner of the task collection: tasks are created
/// only through [`create`](Self::create), which assigns a fresh identifier
/// from a monotonically increasing counter, and destroyed only through
/// [`delete`](Self::delete). Identifiers are never reused, even after
/// deletion. Insertion order is preserved and doubles as display order.
pub trait TaskRepository {
    /// Creates a task with a freshly assigned identifier and appends it to
    /// the collection. Returns a copy of the stored task.
    ///
    /// # Errors
    ///
    /// Returns [`TaskRepositoryError::DuplicateDescription`] when another
    /// task already carries the same description, compared ignoring ASCII
    /// case.
    fn create(
        &mut self,
        description: Description,
        priority: Priority,
        status: Status,
    ) -> TaskRepositoryResult<Task>;

    /// Returns all tasks in creation order. Never mutates the collection.
    fn list(&self) -> Vec<Task>;

    /// Finds a task by identifier.
    ///
    /// Returns `None` when the task does not exist; absence is not an error.
    fn find_by_id(&self, id: TaskId) -> Option<Task>;

    /// Finds the first task whose description matches `text` exactly
    /// (case-sensitive).
    ///
    /// Returns `None` when no task matches.
    fn find_by_description(&self, text: &str) -> Option<Task>;

    /// Applies the set fields of `update` to the task with the given
    /// identifier and returns the updated task. A fully-unset update leaves
    /// the task unchanged.
    ///
    /// # Errors
    ///
    /// Returns [`TaskRepositoryError::NotFound`] when the identifier is not
    /// tracked, or [`TaskRepositoryError::DuplicateDescription`] when a
    /// description change collides with another task's description ignoring
    /// ASCII case.
    fn update(&mut self, id: TaskId, update: TaskUpdate) -> TaskRepositoryResult<Task>;

    /// Removes exactly one task from the collection and returns it. The
    /// identifier is never reassigned afterwards.
    ///
    /// # Errors
    ///
    /// Returns [`TaskRepositoryError::NotFound`] when no task matches.
    fn delete(&mut self, id: TaskId) -> TaskRepositoryResult<Task>;
}

/// Errors returned by task repository implementations.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TaskRepositoryError {
    /// Another task already carries this description (ignoring ASCII case).
    #[error("a task with description '{0}' already exists")]
    DuplicateDescription(String),

    /// The task was not found.
    #[error("task not found: {0}")]
    NotFound(TaskId),
}
