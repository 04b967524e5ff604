//! Interactive console front end.
//!
//! The console layer drives a blocking read-eval loop over an abstract
//! [`Console`] port: it renders the numbered menu, translates choices into
//! repository calls through an explicit state machine, and reports results as
//! text. The terminal adapter is the only piece touching real stdin/stdout.
//!
//! - Menu state machine in [`menu`]
//! - I/O port contract in [`io`]
//! - Terminal adapter in [`terminal`]
//! - Message-string table in [`messages`]
//! - Loop orchestration in [`controller`]

pub mod controller;
pub mod io;
pub mod menu;
pub mod messages;
pub mod terminal;

pub use controller::ConsoleController;
pub use io::Console;
pub use menu::{MenuChoice, MenuState, UpdateLookup};
pub use terminal::{OsKind, Terminal};

#[cfg(test)]
mod tests;
