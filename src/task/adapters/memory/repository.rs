//! Vec-backed in-memory task repository.

use mockable::{Clock, DefaultClock};

use crate::task::{
    domain::{Description, Priority, Status, Task, TaskId, TaskUpdate},
    ports::{TaskRepository, TaskRepositoryError, TaskRepositoryResult},
};

/// In-memory task repository.
///
/// Stores tasks in insertion order in a `Vec` and owns the monotonic
/// identifier counter. Lookups are linear scans; the collection is small and
/// lives for one interactive session. Single-threaded by design, so no
/// interior locking is carried.
#[derive(Debug)]
pub struct InMemoryTaskRepository<C: Clock = DefaultClock> {
    tasks: Vec<Task>,
    next_id: u64,
    clock: C,
}

impl InMemoryTaskRepository {
    /// Creates an empty repository stamping tasks with the system clock.
    #[must_use]
    pub const fn new() -> Self {
        Self::with_clock(DefaultClock)
    }
}

impl Default for InMemoryTaskRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: Clock> InMemoryTaskRepository<C> {
    /// Creates an empty repository with an injected clock.
    #[must_use]
    pub const fn with_clock(clock: C) -> Self {
        Self {
            tasks: Vec::new(),
            next_id: 1,
            clock,
        }
    }

    /// Returns the first task whose description matches ignoring ASCII case,
    /// skipping the task with identifier `exclude` if given.
    fn find_duplicate(&self, text: &str, exclude: Option<TaskId>) -> Option<&Task> {
        self.tasks
            .iter()
            .filter(|task| Some(task.id()) != exclude)
            .find(|task| task.description().eq_ignore_case(text))
    }
}

impl<C: Clock> TaskRepository for InMemoryTaskRepository<C> {
    fn create(
        &mut self,
        description: Description,
        priority: Priority,
        status: Status,
    ) -> TaskRepositoryResult<Task> {
        if self.find_duplicate(description.as_str(), None).is_some() {
            return Err(TaskRepositoryError::DuplicateDescription(
                description.as_str().to_owned(),
            ));
        }

        let id = TaskId::new(self.next_id);
        self.next_id += 1;

        let task = Task::new(id, description, priority, status, &self.clock);
        self.tasks.push(task.clone());
        Ok(task)
    }

    fn list(&self) -> Vec<Task> {
        self.tasks.clone()
    }

    fn find_by_id(&self, id: TaskId) -> Option<Task> {
        self.tasks.iter().find(|task| task.id() == id).cloned()
    }

    fn find_by_description(&self, text: &str) -> Option<Task> {
        self.tasks
            .iter()
            .find(|task| task.description().as_str() == text)
            .cloned()
    }

    fn update(&mut self, id: TaskId, update: TaskUpdate) -> TaskRepositoryResult<Task> {
        if let Some(new_description) = update.description() {
            if self
                .find_duplicate(new_description.as_str(), Some(id))
                .is_some()
            {
                return Err(TaskRepositoryError::DuplicateDescription(
                    new_description.as_str().to_owned(),
                ));
            }
        }

        let task = self
            .tasks
            .iter_mut()
            .find(|task| task.id() == id)
            .ok_or(TaskRepositoryError::NotFound(id))?;

        task.apply_update(update, &self.clock);
        Ok(task.clone())
    }

    fn delete(&mut self, id: TaskId) -> TaskRepositoryResult<Task> {
        let position = self
            .tasks
            .iter()
            .position(|task| task.id() == id)
            .ok_or(TaskRepositoryError::NotFound(id))?;
        Ok(self.tasks.remove(position))
    }
}
