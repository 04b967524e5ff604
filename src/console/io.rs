//! Console I/O port.

use std::io;

/// Blocking console I/O contract.
///
/// The controller talks to the user exclusively through this port, keeping
/// the menu flows testable with scripted input instead of a real terminal.
#[cfg_attr(test, mockall::automock)]
pub trait Console {
    /// Clears the screen. Purely cosmetic; adapters may ignore failures.
    ///
    /// # Errors
    ///
    /// Returns an error only when the underlying output stream fails.
    fn clear(&mut self) -> io::Result<()>;

    /// Writes one line of output.
    ///
    /// # Errors
    ///
    /// Returns an error when the underlying output stream fails.
    fn write_line(&mut self, line: &str) -> io::Result<()>;

    /// Shows `message` and blocks for one line of input.
    ///
    /// Returns `Ok(None)` when the input stream has ended; callers treat that
    /// as a request to wind down rather than retrying forever.
    ///
    /// # Errors
    ///
    /// Returns an error when the underlying input or output stream fails.
    fn prompt(&mut self, message: &str) -> io::Result<Option<String>>;
}
