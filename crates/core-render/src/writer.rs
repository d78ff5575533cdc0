//! Terminal writer abstraction.
//!
//! Repaints are planned as a short list of primitive commands and then
//! emitted in one go. Keeping the plan as data lets tests assert on exactly
//! what would be written (how many erase columns, how many backspaces)
//! without decoding terminal bytes.
//!
//! Design invariants:
//! * Commands preserve ordering; one flush per plan.
//! * Only relative movement: backspace moves left, spaces move right over
//!   content that is already correct. No absolute positioning, no clears.
//! * Zero-length commands are never recorded.

use crossterm::{queue, style::Print};
use std::io::{self, Write};

const BACKSPACE: &str = "\x08";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Advance the cursor `n` columns by writing spaces over blank/trailing content.
    Spaces(usize),
    /// Blank the `n` columns left of the cursor: `n` backspaces, then `n` spaces.
    Erase(usize),
    /// Move the cursor `n` columns left.
    Backspaces(usize),
    Print(String),
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Writer {
    cmds: Vec<Command>,
}

impl Writer {
    pub fn new() -> Self {
        Self { cmds: Vec::new() }
    }

    pub fn spaces(&mut self, n: usize) {
        if n > 0 {
            self.cmds.push(Command::Spaces(n));
        }
    }

    pub fn erase(&mut self, n: usize) {
        if n > 0 {
            self.cmds.push(Command::Erase(n));
        }
    }

    pub fn backspaces(&mut self, n: usize) {
        if n > 0 {
            self.cmds.push(Command::Backspaces(n));
        }
    }

    pub fn print<S: Into<String>>(&mut self, s: S) {
        let s: String = s.into();
        if !s.is_empty() {
            self.cmds.push(Command::Print(s));
        }
    }

    pub fn commands(&self) -> &[Command] {
        &self.cmds
    }

    pub fn is_empty(&self) -> bool {
        self.cmds.is_empty()
    }

    /// Emit every command into `out` and flush it.
    pub fn flush_to<W: Write>(self, out: &mut W) -> io::Result<()> {
        for c in self.cmds {
            match c {
                Command::Spaces(n) => {
                    queue!(out, Print(" ".repeat(n)))?;
                }
                Command::Erase(n) => {
                    queue!(out, Print(BACKSPACE.repeat(n)), Print(" ".repeat(n)))?;
                }
                Command::Backspaces(n) => {
                    queue!(out, Print(BACKSPACE.repeat(n)))?;
                }
                Command::Print(s) => {
                    queue!(out, Print(s))?;
                }
            }
        }
        out.flush()
    }
}
