//! Console controller driving the menu read-eval loop.

use super::{Console, MenuChoice, MenuState, UpdateLookup, messages};
use crate::task::{
    domain::{Description, Priority, Status, TaskId, TaskUpdate},
    ports::TaskRepository,
};
use std::io;

/// Menu-driven controller over a task repository and a console port.
///
/// The loop blocks on one prompt at a time, dispatches parsed choices through
/// the [`MenuState`] transition table, and renders results as text. Invalid
/// input at any prompt re-prompts without bound; repository failures are
/// rendered as messages, never propagated. The loop ends only on the explicit
/// exit choice or on end of input.
#[derive(Debug)]
pub struct ConsoleController<R, C> {
    repository: R,
    console: C,
    state: MenuState,
}

impl<R, C> ConsoleController<R, C>
where
    R: TaskRepository,
    C: Console,
{
    /// Creates a controller starting at the menu.
    #[must_use]
    pub const fn new(repository: R, console: C) -> Self {
        Self {
            repository,
            console,
            state: MenuState::Menu,
        }
    }

    /// Returns the current loop state.
    #[must_use]
    pub const fn state(&self) -> MenuState {
        self.state
    }

    /// Returns the repository behind the controller.
    #[must_use]
    pub const fn repository(&self) -> &R {
        &self.repository
    }

    /// Returns the console port behind the controller.
    #[must_use]
    pub const fn console(&self) -> &C {
        &self.console
    }

    /// Runs the read-eval loop until the exit choice or end of input.
    ///
    /// # Errors
    ///
    /// Returns an error only when the console port fails at the I/O level;
    /// user mistakes and repository rejections are rendered and retried.
    pub fn run(&mut self) -> io::Result<()> {
        while !self.state.is_terminal() {
            self.state = match self.state {
                MenuState::Menu => self.menu_step()?,
                MenuState::Creating => {
                    self.create_flow()?;
                    MenuState::Menu
                }
                MenuState::Updating => {
                    self.update_flow()?;
                    MenuState::Menu
                }
                MenuState::Deleting => {
                    self.delete_flow()?;
                    MenuState::Menu
                }
                MenuState::Listing => {
                    self.show_flow()?;
                    MenuState::Menu
                }
                MenuState::Exiting => MenuState::Exiting,
            };
        }
        Ok(())
    }

    /// Renders the menu, reads one choice, and returns the next state.
    fn menu_step(&mut self) -> io::Result<MenuState> {
        self.console.clear()?;
        self.console.write_line(&messages::bar())?;
        self.console.write_line(messages::MENU_HEADING)?;
        self.console.write_line(&messages::bar())?;
        for line in messages::MENU_OPTIONS {
            self.console.write_line(line)?;
        }
        self.console.write_line(&messages::bar())?;

        let Some(input) = self.console.prompt(messages::SELECT_OPTION)? else {
            return Ok(MenuState::Exiting);
        };
        let choice = MenuChoice::from_input(&input);
        if choice.is_none() {
            self.console.write_line(messages::INVALID_OPTION)?;
        }
        Ok(self.state.next(choice))
    }

    /// Create flow: description, priority, then repository create.
    fn create_flow(&mut self) -> io::Result<()> {
        self.console.clear()?;

        let Some(description) = self.read_new_description()? else {
            return Ok(());
        };
        let Some(priority) = self.read_priority()? else {
            self.console.write_line(messages::CANCELLED)?;
            return self.pause();
        };

        match self
            .repository
            .create(description, priority, Status::default())
        {
            Ok(task) => {
                self.console.write_line(messages::TASK_CREATED)?;
                self.console.write_line(&messages::bar())?;
                self.console.write_line(&task.to_string())?;
            }
            Err(err) => self.console.write_line(&err.to_string())?,
        }
        self.pause()
    }

    /// Reads a non-empty, non-duplicate description. `None` on end of input.
    fn read_new_description(&mut self) -> io::Result<Option<Description>> {
        loop {
            let Some(input) = self.console.prompt(messages::TASK_DESCRIPTION)? else {
                return Ok(None);
            };
            let Ok(description) = Description::new(input) else {
                self.console.write_line(messages::EMPTY_DESCRIPTION)?;
                continue;
            };
            let duplicate = self
                .repository
                .list()
                .iter()
                .any(|task| task.description().eq_ignore_case(description.as_str()));
            if duplicate {
                self.console.write_line(messages::DUPLICATE_DESCRIPTION)?;
                continue;
            }
            return Ok(Some(description));
        }
    }

    /// Reads a priority by menu code. `None` on blank input or end of input.
    fn read_priority(&mut self) -> io::Result<Option<Priority>> {
        loop {
            let Some(input) = self.console.prompt(messages::TASK_PRIORITY)? else {
                return Ok(None);
            };
            if input.trim().is_empty() {
                return Ok(None);
            }
            match Priority::try_from(input.as_str()) {
                Ok(priority) => return Ok(Some(priority)),
                Err(_) => self.console.write_line(messages::INVALID_OPTION)?,
            }
        }
    }

    /// Update flow: resolve a task by id or description, then apply the
    /// fields the user filled in.
    fn update_flow(&mut self) -> io::Result<()> {
        self.console.clear()?;
        if self.render_task_list()? == 0 {
            return self.pause();
        }

        let Some(lookup) = self.read_update_lookup()? else {
            return Ok(());
        };
        let found = match lookup {
            UpdateLookup::Cancel => {
                self.console.write_line(messages::CANCELLED)?;
                return self.pause();
            }
            UpdateLookup::ById => {
                let Some(id) = self.read_task_id()? else {
                    return Ok(());
                };
                self.repository.find_by_id(id)
            }
            UpdateLookup::ByDescription => {
                let Some(text) = self.console.prompt(messages::TASK_LOOKUP_DESCRIPTION)? else {
                    return Ok(());
                };
                self.repository.find_by_description(&text)
            }
        };
        let Some(task) = found else {
            self.console.write_line(messages::TASK_NOT_FOUND)?;
            return self.pause();
        };

        let Some(update) = self.read_task_update()? else {
            return Ok(());
        };
        match self.repository.update(task.id(), update) {
            Ok(updated) => {
                self.console.write_line(messages::TASK_UPDATED)?;
                self.console.write_line(&updated.to_string())?;
            }
            Err(err) => self.console.write_line(&err.to_string())?,
        }
        self.pause()
    }

    /// Reads the update lookup mode. `None` on end of input.
    fn read_update_lookup(&mut self) -> io::Result<Option<UpdateLookup>> {
        loop {
            let Some(input) = self.console.prompt(messages::UPDATE_LOOKUP)? else {
                return Ok(None);
            };
            match UpdateLookup::from_input(&input) {
                Some(lookup) => return Ok(Some(lookup)),
                None => self.console.write_line(messages::INVALID_OPTION)?,
            }
        }
    }

    /// Reads a stored task identifier. `None` on end of input.
    fn read_task_id(&mut self) -> io::Result<Option<TaskId>> {
        loop {
            let Some(input) = self.console.prompt(messages::TASK_ID)? else {
                return Ok(None);
            };
            match input.trim().parse::<u64>() {
                Ok(value) => return Ok(Some(TaskId::new(value))),
                Err(_) => self.console.write_line(messages::INVALID_OPTION)?,
            }
        }
    }

    /// Reads the optional replacement fields; blank answers leave a field
    /// unchanged. `None` on end of input.
    fn read_task_update(&mut self) -> io::Result<Option<TaskUpdate>> {
        let mut update = TaskUpdate::new();

        let Some(description_input) = self.console.prompt(messages::NEW_DESCRIPTION)? else {
            return Ok(None);
        };
        if let Ok(description) = Description::new(description_input) {
            update = update.with_description(description);
        }

        loop {
            let Some(input) = self.console.prompt(messages::NEW_PRIORITY)? else {
                return Ok(None);
            };
            if input.trim().is_empty() {
                break;
            }
            match Priority::try_from(input.as_str()) {
                Ok(priority) => {
                    update = update.with_priority(priority);
                    break;
                }
                Err(_) => self.console.write_line(messages::INVALID_OPTION)?,
            }
        }

        loop {
            let Some(input) = self.console.prompt(messages::NEW_STATUS)? else {
                return Ok(None);
            };
            if input.trim().is_empty() {
                break;
            }
            match Status::try_from(input.as_str()) {
                Ok(status) => {
                    update = update.with_status(status);
                    break;
                }
                Err(_) => self.console.write_line(messages::INVALID_OPTION)?,
            }
        }

        Ok(Some(update))
    }

    /// Delete flow: pick a 1-based display index, `0` cancels.
    fn delete_flow(&mut self) -> io::Result<()> {
        self.console.clear()?;
        if self.render_task_list()? == 0 {
            return self.pause();
        }

        let index = loop {
            let Some(input) = self.console.prompt(messages::DELETE_INDEX)? else {
                return Ok(());
            };
            match input.trim().parse::<usize>() {
                Ok(value) => break value,
                Err(_) => self.console.write_line(messages::INVALID_OPTION)?,
            }
        };
        if index == 0 {
            self.console.write_line(messages::CANCELLED)?;
            return self.pause();
        }

        let tasks = self.repository.list();
        match tasks.get(index - 1) {
            Some(task) => match self.repository.delete(task.id()) {
                Ok(_removed) => self.console.write_line(messages::TASK_DELETED)?,
                Err(err) => self.console.write_line(&err.to_string())?,
            },
            None => self.console.write_line(messages::INVALID_INDEX)?,
        }
        self.pause()
    }

    /// Show flow: render every task with its display index.
    fn show_flow(&mut self) -> io::Result<()> {
        self.console.clear()?;
        self.render_task_list()?;
        self.pause()
    }

    /// Renders the listing heading and tasks; returns the task count.
    fn render_task_list(&mut self) -> io::Result<usize> {
        self.console.write_line(messages::TASKS_HEADING)?;
        self.console.write_line(&messages::bar())?;
        let tasks = self.repository.list();
        if tasks.is_empty() {
            self.console.write_line(messages::NO_TASKS)?;
        }
        for (position, task) in tasks.iter().enumerate() {
            self.console
                .write_line(&format!("{}. {task}", position + 1))?;
        }
        Ok(tasks.len())
    }

    /// Blocks until the user acknowledges before returning to the menu.
    fn pause(&mut self) -> io::Result<()> {
        let _acknowledged = self.console.prompt(messages::CONTINUE)?;
        Ok(())
    }
}
