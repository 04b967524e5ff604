//! Menu choices and the console state machine.

use std::fmt;

/// Numbered top-level menu choice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MenuChoice {
    /// Leave the program.
    Exit,
    /// Create a new task.
    Create,
    /// Modify an existing task.
    Update,
    /// Delete a task by display index.
    Delete,
    /// List all tasks.
    Show,
}

impl MenuChoice {
    /// Returns the numeric code shown in the menu.
    #[must_use]
    pub const fn code(self) -> u8 {
        match self {
            Self::Exit => 0,
            Self::Create => 1,
            Self::Update => 2,
            Self::Delete => 3,
            Self::Show => 4,
        }
    }

    /// Maps a numeric menu code to a choice.
    ///
    /// Returns `None` for codes outside `0..=4`.
    #[must_use]
    pub const fn from_code(code: u8) -> Option<Self> {
        match code {
            0 => Some(Self::Exit),
            1 => Some(Self::Create),
            2 => Some(Self::Update),
            3 => Some(Self::Delete),
            4 => Some(Self::Show),
            _ => None,
        }
    }

    /// Parses a raw input line into a choice.
    ///
    /// Returns `None` for non-numeric or out-of-range input.
    #[must_use]
    pub fn from_input(input: &str) -> Option<Self> {
        input.trim().parse::<u8>().ok().and_then(Self::from_code)
    }
}

/// How the update flow resolves the task to modify.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UpdateLookup {
    /// Abort the update flow.
    Cancel,
    /// Resolve by stored task identifier.
    ById,
    /// Resolve by exact description match.
    ByDescription,
}

impl UpdateLookup {
    /// Parses a raw input line into a lookup mode.
    ///
    /// Returns `None` for non-numeric or out-of-range input.
    #[must_use]
    pub fn from_input(input: &str) -> Option<Self> {
        match input.trim().parse::<u8>() {
            Ok(0) => Some(Self::Cancel),
            Ok(1) => Some(Self::ById),
            Ok(2) => Some(Self::ByDescription),
            _ => None,
        }
    }
}

/// Console loop state.
///
/// The transition function is pure so the machine is testable without
/// driving real input: from [`MenuState::Menu`] a valid choice moves to the
/// matching action state and invalid input stays put; every action state
/// returns to the menu on completion; [`MenuState::Exiting`] is terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MenuState {
    /// Waiting for a top-level menu choice.
    Menu,
    /// Running the create flow.
    Creating,
    /// Running the update flow.
    Updating,
    /// Running the delete flow.
    Deleting,
    /// Running the show flow.
    Listing,
    /// Terminal state; the loop ends.
    Exiting,
}

impl MenuState {
    /// Returns the state reached from `self` on the given parsed choice.
    ///
    /// `None` models an invalid (non-numeric or out-of-range) choice.
    #[must_use]
    pub const fn next(self, choice: Option<MenuChoice>) -> Self {
        match (self, choice) {
            (Self::Menu, Some(MenuChoice::Exit)) => Self::Exiting,
            (Self::Menu, Some(MenuChoice::Create)) => Self::Creating,
            (Self::Menu, Some(MenuChoice::Update)) => Self::Updating,
            (Self::Menu, Some(MenuChoice::Delete)) => Self::Deleting,
            (Self::Menu, Some(MenuChoice::Show)) => Self::Listing,
            (Self::Menu, None) => Self::Menu,
            (Self::Exiting, _) => Self::Exiting,
            // Action states ignore the choice and return to the menu.
            (Self::Creating | Self::Updating | Self::Deleting | Self::Listing, _) => Self::Menu,
        }
    }

    /// Reports whether this state ends the loop.
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        matches!(self, Self::Exiting)
    }
}

impl fmt::Display for MenuState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Menu => "menu",
            Self::Creating => "creating",
            Self::Updating => "updating",
            Self::Deleting => "deleting",
            Self::Listing => "listing",
            Self::Exiting => "exiting",
        };
        f.write_str(name)
    }
}
