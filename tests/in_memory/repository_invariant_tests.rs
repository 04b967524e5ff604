//! Integration tests for repository invariants through the public API.

use rstest::{fixture, rstest};
use taskito::task::{
    adapters::memory::InMemoryTaskRepository,
    domain::{Priority, Status, TaskId, TaskUpdate},
    ports::{TaskRepository, TaskRepositoryError},
};

use super::helpers::{description, priority};

#[fixture]
fn repository() -> InMemoryTaskRepository {
    InMemoryTaskRepository::new()
}

/// Creates a task or fails the surrounding test helper.
fn create(
    repository: &mut InMemoryTaskRepository,
    text: &str,
    level: Priority,
) -> eyre::Result<taskito::task::domain::Task> {
    Ok(repository.create(description(text), level, Status::default())?)
}

#[rstest]
fn first_task_gets_id_one_and_not_started(
    mut repository: InMemoryTaskRepository,
) -> eyre::Result<()> {
    let task = create(&mut repository, "Buy milk", priority("low"))?;

    eyre::ensure!(task.id() == TaskId::new(1), "first id must be 1");
    eyre::ensure!(
        task.status() == Status::NotStarted,
        "tasks are born not started"
    );

    let listed = repository.list();
    eyre::ensure!(listed.len() == 1, "one task listed");
    eyre::ensure!(
        listed.first().map(taskito::task::domain::Task::id) == Some(task.id()),
        "listing returns the created task"
    );
    Ok(())
}

#[rstest]
fn ids_are_strictly_increasing_across_deletions(
    mut repository: InMemoryTaskRepository,
) -> eyre::Result<()> {
    let first = create(&mut repository, "A", priority("low"))?;
    let second = create(&mut repository, "B", priority("high"))?;
    repository.delete(first.id())?;
    let third = create(&mut repository, "C", priority("medium"))?;

    let ids: Vec<TaskId> = repository.list().iter().map(|task| task.id()).collect();
    eyre::ensure!(
        ids == [second.id(), third.id()],
        "only ids 2 and 3 remain, in creation order"
    );
    eyre::ensure!(third.id() == TaskId::new(3), "id 1 is never reassigned");
    eyre::ensure!(
        repository.find_by_id(first.id()).is_none(),
        "deleted id stays unfindable"
    );
    Ok(())
}

#[rstest]
fn listing_after_n_creates_returns_n_in_order(
    mut repository: InMemoryTaskRepository,
) -> eyre::Result<()> {
    for (index, text) in ["one", "two", "three", "four"].iter().enumerate() {
        let task = create(&mut repository, text, priority("medium"))?;
        eyre::ensure!(
            task.id().value() == u64::try_from(index)? + 1,
            "ids count up from 1"
        );
    }

    let listed = repository.list();
    eyre::ensure!(listed.len() == 4, "four tasks listed");
    let texts: Vec<&str> = listed
        .iter()
        .map(|task| task.description().as_str())
        .collect();
    eyre::ensure!(texts == ["one", "two", "three", "four"], "creation order");
    Ok(())
}

#[rstest]
fn status_only_update_preserves_other_fields(
    mut repository: InMemoryTaskRepository,
) -> eyre::Result<()> {
    create(&mut repository, "A", priority("low"))?;
    let second = create(&mut repository, "B", priority("high"))?;

    let updated = repository.update(second.id(), TaskUpdate::new().with_status(Status::Done))?;

    eyre::ensure!(updated.status() == Status::Done, "status changed");
    eyre::ensure!(
        updated.description().as_str() == "B" && updated.priority() == priority("high"),
        "description and priority retain prior values"
    );
    Ok(())
}

#[rstest]
fn lookup_by_unknown_description_leaves_state_unchanged(
    mut repository: InMemoryTaskRepository,
) -> eyre::Result<()> {
    create(&mut repository, "Buy milk", priority("low"))?;

    eyre::ensure!(
        repository.find_by_description("nonexistent").is_none(),
        "no match yields None, not an error"
    );
    eyre::ensure!(repository.list().len() == 1, "state unchanged");
    Ok(())
}

#[rstest]
fn duplicate_description_does_not_mutate_the_collection(
    mut repository: InMemoryTaskRepository,
) -> eyre::Result<()> {
    create(&mut repository, "Buy milk", priority("low"))?;

    let result = repository.create(description("buy MILK"), priority("high"), Status::default());
    eyre::ensure!(
        matches!(result, Err(TaskRepositoryError::DuplicateDescription(_))),
        "duplicate rejected case-insensitively"
    );
    eyre::ensure!(repository.list().len() == 1, "collection unchanged");
    Ok(())
}
