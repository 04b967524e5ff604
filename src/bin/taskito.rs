//! Interactive task manager entry point.
//!
//! Wires the in-memory task repository and the terminal adapter into the
//! console controller, then runs the menu loop until the user exits. All
//! state is lost at process exit; the process exits 0 on the explicit exit
//! choice or on end of input.

use std::io;

use taskito::console::{ConsoleController, Terminal};
use taskito::task::adapters::memory::InMemoryTaskRepository;

fn main() -> io::Result<()> {
    let repository = InMemoryTaskRepository::new();
    let terminal = Terminal::new();

    let mut controller = ConsoleController::new(repository, terminal);
    controller.run()
}
