//! Scripted end-to-end console sessions through the public API.

use rstest::rstest;
use taskito::console::{ConsoleController, MenuState, messages};
use taskito::task::{
    adapters::memory::InMemoryTaskRepository,
    domain::{Priority, Status},
    ports::TaskRepository,
};

use super::helpers::ScriptedConsole;

fn run_session(lines: &[&str]) -> ConsoleController<InMemoryTaskRepository, ScriptedConsole> {
    let mut controller =
        ConsoleController::new(InMemoryTaskRepository::new(), ScriptedConsole::new(lines));
    controller.run().expect("session should end cleanly");
    controller
}

#[rstest]
fn full_crud_session() {
    // Create two tasks, mark the second done, show the list, delete the
    // first by display index, then exit.
    let controller = run_session(&[
        "1", "Buy milk", "0", "", // create Buy milk / low
        "1", "Write report", "2", "", // create Write report / high
        "2", "2", "Write report", "", "", "2", "", // update by description: status done
        "4", "", // show
        "3", "1", "", // delete display index 1
        "0", // exit
    ]);

    assert_eq!(controller.state(), MenuState::Exiting);
    let tasks = controller.repository().list();
    assert_eq!(tasks.len(), 1);
    let task = tasks.first().expect("one remaining task");
    assert_eq!(task.description().as_str(), "Write report");
    assert_eq!(task.priority(), Priority::High);
    assert_eq!(task.status(), Status::Done);

    let console = controller.console();
    assert!(console.wrote(messages::TASK_CREATED));
    assert!(console.wrote(messages::TASK_UPDATED));
    assert!(console.wrote(messages::TASK_DELETED));
    assert!(console.wrote(
        "2. Task(id=2, desc=`Write report`, status=done, priority=high)"
    ));
}

#[rstest]
fn session_survives_invalid_input_everywhere() {
    let controller = run_session(&[
        "seven", "99", // invalid menu choices
        "1", "", "Buy milk", "9", "x", "1", "", // empty desc, bad priorities, then medium
        "2", "5", "1", "abc", "1", "", "", "", "", // bad lookup, bad id, then no-op update
        "3", "oops", "0", "", // bad index then cancel
        "0",
    ]);

    assert_eq!(controller.state(), MenuState::Exiting);
    let tasks = controller.repository().list();
    assert_eq!(tasks.len(), 1);
    let task = tasks.first().expect("one task");
    assert_eq!(task.description().as_str(), "Buy milk");
    assert_eq!(task.priority(), Priority::Medium);
    assert_eq!(task.status(), Status::NotStarted);
}

#[rstest]
fn closed_input_mid_flow_winds_down() {
    // Script ends while the create flow waits for a priority.
    let controller = run_session(&["1", "Buy milk"]);

    assert_eq!(controller.state(), MenuState::Exiting);
    assert!(controller.repository().list().is_empty());
}

#[rstest]
fn update_and_delete_on_empty_collection_report_no_tasks() {
    let controller = run_session(&["2", "", "3", "", "0"]);

    assert_eq!(controller.state(), MenuState::Exiting);
    let console = controller.console();
    assert_eq!(
        console
            .written()
            .iter()
            .filter(|line| line.as_str() == messages::NO_TASKS)
            .count(),
        2
    );
}
