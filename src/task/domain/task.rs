//! Task aggregate root and partial-update request object.

use super::{Description, Priority, Status, TaskId};
use chrono::{DateTime, Utc};
use mockable::Clock;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Longest description prefix included in the rendered form of a task.
const MAX_RENDERED_DESCRIPTION: usize = 60;

/// Task aggregate root.
///
/// Tasks are constructed only by the repository, which supplies the
/// identifier; the repository's counter and collection membership stay atomic
/// together that way.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    id: TaskId,
    description: Description,
    priority: Priority,
    status: Status,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl Task {
    /// Creates a new task with a repository-assigned identifier.
    #[must_use]
    pub fn new(
        id: TaskId,
        description: Description,
        priority: Priority,
        status: Status,
        clock: &impl Clock,
    ) -> Self {
        let timestamp = clock.utc();
        Self {
            id,
            description,
            priority,
            status,
            created_at: timestamp,
            updated_at: timestamp,
        }
    }

    /// Returns the task identifier.
    #[must_use]
    pub const fn id(&self) -> TaskId {
        self.id
    }

    /// Returns the task description.
    #[must_use]
    pub const fn description(&self) -> &Description {
        &self.description
    }

    /// Returns the task priority.
    #[must_use]
    pub const fn priority(&self) -> Priority {
        self.priority
    }

    /// Returns the task lifecycle status.
    #[must_use]
    pub const fn status(&self) -> Status {
        self.status
    }

    /// Returns the creation timestamp.
    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Returns the latest modification timestamp.
    #[must_use]
    pub const fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    /// Applies the set fields of `update`, leaving unset fields unchanged.
    ///
    /// A fully-unset update is a no-op and does not touch `updated_at`.
    pub fn apply_update(&mut self, update: TaskUpdate, clock: &impl Clock) {
        if update.is_empty() {
            return;
        }
        if let Some(description) = update.description {
            self.description = description;
        }
        if let Some(priority) = update.priority {
            self.priority = priority;
        }
        if let Some(status) = update.status {
            self.status = status;
        }
        self.updated_at = clock.utc();
    }
}

impl fmt::Display for Task {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let full = self.description.as_str();
        let prefix: String = full.chars().take(MAX_RENDERED_DESCRIPTION).collect();
        let ellipsis = if full.chars().count() > MAX_RENDERED_DESCRIPTION {
            "..."
        } else {
            ""
        };
        write!(
            f,
            "Task(id={}, desc=`{prefix}{ellipsis}`, status={}, priority={})",
            self.id, self.status, self.priority
        )
    }
}

/// Partial-update request for a task.
///
/// Unset fields are left unchanged when the update is applied.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskUpdate {
    description: Option<Description>,
    priority: Option<Priority>,
    status: Option<Status>,
}

impl TaskUpdate {
    /// Creates an update with every field unset.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            description: None,
            priority: None,
            status: None,
        }
    }

    /// Sets the new description.
    #[must_use]
    pub fn with_description(mut self, description: Description) -> Self {
        self.description = Some(description);
        self
    }

    /// Sets the new priority.
    #[must_use]
    pub const fn with_priority(mut self, priority: Priority) -> Self {
        self.priority = Some(priority);
        self
    }

    /// Sets the new status.
    #[must_use]
    pub const fn with_status(mut self, status: Status) -> Self {
        self.status = Some(status);
        self
    }

    /// Returns the pending description change, if any.
    #[must_use]
    pub const fn description(&self) -> Option<&Description> {
        self.description.as_ref()
    }

    /// Reports whether every field is unset.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.description.is_none() && self.priority.is_none() && self.status.is_none()
    }
}
