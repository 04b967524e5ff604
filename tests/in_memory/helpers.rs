//! Shared helpers for the in-memory integration suite.

use std::collections::VecDeque;
use std::io;

use taskito::console::Console;
use taskito::task::domain::{Description, Priority};

/// Console double fed from a fixed script of input lines.
///
/// Every written line is recorded; an exhausted script reads as end of
/// input, mirroring a closed stdin.
#[derive(Debug, Default)]
pub struct ScriptedConsole {
    script: VecDeque<String>,
    written: Vec<String>,
}

impl ScriptedConsole {
    /// Creates a console that answers prompts with `lines` in order.
    #[must_use]
    pub fn new(lines: &[&str]) -> Self {
        Self {
            script: lines.iter().map(|line| (*line).to_owned()).collect(),
            written: Vec::new(),
        }
    }

    /// Returns every line written so far.
    #[must_use]
    pub fn written(&self) -> &[String] {
        &self.written
    }

    /// Reports whether some written line equals `expected`.
    #[must_use]
    pub fn wrote(&self, expected: &str) -> bool {
        self.written.iter().any(|line| line == expected)
    }
}

impl Console for ScriptedConsole {
    fn clear(&mut self) -> io::Result<()> {
        Ok(())
    }

    fn write_line(&mut self, line: &str) -> io::Result<()> {
        self.written.push(line.to_owned());
        Ok(())
    }

    fn prompt(&mut self, _message: &str) -> io::Result<Option<String>> {
        Ok(self.script.pop_front())
    }
}

/// Builds a validated description, panicking on invalid test data.
#[must_use]
pub fn description(text: &str) -> Description {
    Description::new(text).expect("valid description")
}

/// Parses a priority from its canonical name, panicking on invalid test data.
#[must_use]
pub fn priority(name: &str) -> Priority {
    Priority::try_from(name).expect("valid priority")
}
