//! Logical edit actions and shared telemetry counters.
//!
//! `EditAction` is the vocabulary between the key decoder (which produces
//! actions from raw input units) and the dispatcher (which applies them to the
//! line buffer and history). Nothing here knows about bytes or terminals.

use std::fmt;
use std::sync::atomic::AtomicU64;

// -------------------------------------------------------------------------------------------------
// Telemetry
// -------------------------------------------------------------------------------------------------
// Relaxed atomic counters; cheap enough to bump on every keystroke. Tests and the binary can read
// them, nothing else depends on their values.
// -------------------------------------------------------------------------------------------------
pub static UNITS_DECODED: AtomicU64 = AtomicU64::new(0); // input units fed through the decoder
pub static ESCAPES_DISCARDED: AtomicU64 = AtomicU64::new(0); // unrecognized or truncated escape sequences
pub static LINES_COMMITTED: AtomicU64 = AtomicU64::new(0); // newline-terminated lines handed to the command callback
pub static COMPLETION_REQUESTS: AtomicU64 = AtomicU64::new(0); // completion provider invocations

/// A logical editing action decoded from one or more input units.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EditAction {
    /// Cursor to the start of the line (Ctrl-A).
    Home,
    /// Cursor to the end of the line (Ctrl-E).
    End,
    /// Commit the line (LF / CR).
    Newline,
    /// Delete everything before the cursor (Ctrl-U).
    KillToStart,
    /// Delete the word before the cursor (Ctrl-W).
    DeleteWordBack,
    /// Delete the character before the cursor.
    Backspace,
    MoveLeft,
    MoveRight,
    /// Recall the previous history entry (Up arrow).
    MoveUp,
    /// Recall the next history entry or the draft (Down arrow).
    MoveDown,
    InsertChar(char),
    /// Tab: ask the completion provider about the token before the cursor.
    TriggerCompletion,
    /// EOT (Ctrl-D). Ends the session only when the line is empty.
    EndOfInput,
    /// Ctrl-C: abandon the current line and show a fresh prompt.
    Interrupt,
}

impl EditAction {
    /// Stable short name used in structured logs (never includes typed text).
    pub fn as_str(&self) -> &'static str {
        match self {
            EditAction::Home => "home",
            EditAction::End => "end",
            EditAction::Newline => "newline",
            EditAction::KillToStart => "kill_to_start",
            EditAction::DeleteWordBack => "delete_word_back",
            EditAction::Backspace => "backspace",
            EditAction::MoveLeft => "move_left",
            EditAction::MoveRight => "move_right",
            EditAction::MoveUp => "move_up",
            EditAction::MoveDown => "move_down",
            EditAction::InsertChar(_) => "insert_char",
            EditAction::TriggerCompletion => "trigger_completion",
            EditAction::EndOfInput => "end_of_input",
            EditAction::Interrupt => "interrupt",
        }
    }
}

impl fmt::Display for EditAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
