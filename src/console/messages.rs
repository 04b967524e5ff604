//! Message-string table for the console front end.

/// Width of the dash separator delimiting menu sections.
pub const BAR_WIDTH: usize = 30;

/// Menu heading shown above the numbered options.
pub const MENU_HEADING: &str = "Please choose an option:";

/// Numbered top-level menu options, one per line.
pub const MENU_OPTIONS: [&str; 5] = [
    "   1. Create a task",
    "   2. Modify & update a task",
    "   3. Delete a task",
    "   4. List all tasks",
    "   0. Exit",
];

/// Prompt for the top-level menu choice.
pub const SELECT_OPTION: &str = "Select an option: ";

/// Report for a non-numeric or out-of-range choice.
pub const INVALID_OPTION: &str = "Invalid option, please retry.";

/// Prompt for a new task description.
pub const TASK_DESCRIPTION: &str = "Task description: ";

/// Report for an empty description.
pub const EMPTY_DESCRIPTION: &str = "Description cannot be empty.";

/// Report for a description already used by another task.
pub const DUPLICATE_DESCRIPTION: &str =
    "A task with this description already exists. Please enter a different one.";

/// Prompt for a task priority (blank cancels the create flow).
pub const TASK_PRIORITY: &str =
    "Choose the task priority (0: low, 1: medium, 2: high, blank to cancel): ";

/// Report heading for a freshly created task.
pub const TASK_CREATED: &str = "Task created:";

/// Heading for the task listing.
pub const TASKS_HEADING: &str = "Tasks";

/// Report for an empty task collection.
pub const NO_TASKS: &str = "No tasks available.";

/// Prompt for the update-flow lookup mode.
pub const UPDATE_LOOKUP: &str = "Update by (1: id, 2: description, 0: cancel): ";

/// Prompt for a stored task identifier.
pub const TASK_ID: &str = "Enter task id: ";

/// Prompt for an exact task description lookup.
pub const TASK_LOOKUP_DESCRIPTION: &str = "Enter task description: ";

/// Prompt for a replacement description.
pub const NEW_DESCRIPTION: &str = "New description (press Enter to skip): ";

/// Prompt for a replacement priority.
pub const NEW_PRIORITY: &str = "New priority (0: low, 1: medium, 2: high, press Enter to skip): ";

/// Prompt for a replacement status.
pub const NEW_STATUS: &str =
    "New status (0: not started, 1: in progress, 2: done, press Enter to skip): ";

/// Report for a successful update.
pub const TASK_UPDATED: &str = "Task updated:";

/// Report for a failed lookup.
pub const TASK_NOT_FOUND: &str = "Task not found.";

/// Prompt for the display index of the task to delete.
pub const DELETE_INDEX: &str = "Enter the number of the task to delete (0 to cancel): ";

/// Report for a successful deletion.
pub const TASK_DELETED: &str = "Task deleted successfully.";

/// Report for a display index outside the listing.
pub const INVALID_INDEX: &str = "Invalid task number.";

/// Report for a user-cancelled flow.
pub const CANCELLED: &str = "Cancelled.";

/// Pause prompt shown before returning to the menu.
pub const CONTINUE: &str = "Press Enter to continue...";

/// Returns the dash separator line.
#[must_use]
pub fn bar() -> String {
    "-".repeat(BAR_WIDTH)
}
