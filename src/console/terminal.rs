//! Terminal adapter for the console I/O port.

use super::Console;
use std::io::{self, BufRead, Write};
use std::process::Command;

/// Platform family, used only to pick the screen-clear command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OsKind {
    /// Unix-like terminals; clears with `clear`.
    Unix,
    /// Windows terminals; clears with `cls`.
    Windows,
}

impl OsKind {
    /// Detects the platform family of the running process.
    #[must_use]
    pub const fn detect() -> Self {
        if cfg!(windows) {
            Self::Windows
        } else {
            Self::Unix
        }
    }

    /// Returns the shell command that clears the screen.
    #[must_use]
    pub const fn clear_command(self) -> &'static str {
        match self {
            Self::Unix => "clear",
            Self::Windows => "cls",
        }
    }
}

/// Console adapter over real stdin/stdout.
#[derive(Debug)]
pub struct Terminal {
    os: OsKind,
}

impl Terminal {
    /// Creates a terminal adapter for the detected platform.
    #[must_use]
    pub const fn new() -> Self {
        Self::with_os(OsKind::detect())
    }

    /// Creates a terminal adapter for an explicit platform family.
    #[must_use]
    pub const fn with_os(os: OsKind) -> Self {
        Self { os }
    }
}

impl Default for Terminal {
    fn default() -> Self {
        Self::new()
    }
}

impl Console for Terminal {
    fn clear(&mut self) -> io::Result<()> {
        // Cosmetic only; a missing clear binary is not worth reporting.
        let _status = Command::new(self.os.clear_command()).status();
        Ok(())
    }

    fn write_line(&mut self, line: &str) -> io::Result<()> {
        let mut stdout = io::stdout().lock();
        stdout.write_all(line.as_bytes())?;
        stdout.write_all(b"\n")?;
        stdout.flush()
    }

    fn prompt(&mut self, message: &str) -> io::Result<Option<String>> {
        {
            let mut stdout = io::stdout().lock();
            stdout.write_all(message.as_bytes())?;
            stdout.flush()?;
        }

        let mut line = String::new();
        let read = io::stdin().lock().read_line(&mut line)?;
        if read == 0 {
            return Ok(None);
        }
        while line.ends_with('\n') || line.ends_with('\r') {
            line.pop();
        }
        Ok(Some(line))
    }
}
