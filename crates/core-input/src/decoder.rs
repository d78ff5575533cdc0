//! Input unit → `EditAction` decoding.
//!
//! State Machine:
//! * Normal: each unit is classified on its own. ESC moves to EscSeen and
//!   produces nothing yet.
//! * EscSeen: `[` moves to EscBracketSeen; anything else discards the
//!   sequence.
//! * EscBracketSeen: `A`/`B`/`C`/`D` resolve to Up/Down/Right/Left; anything
//!   else discards the sequence.
//!
//! The machine returns to Normal after every resolved or discarded sequence,
//! so at most two units of lookahead are ever pending. A sequence cut short by
//! end of input is dropped through `abandon`.

use core_events::{ESCAPES_DISCARDED, EditAction, UNITS_DECODED};
use std::sync::atomic::Ordering;
use tracing::trace;

pub const EOT: char = '\u{04}';
pub const CTRL_A: char = '\u{01}';
pub const CTRL_C: char = '\u{03}';
pub const CTRL_E: char = '\u{05}';
pub const BS: char = '\u{08}';
pub const TAB: char = '\t';
pub const LF: char = '\n';
pub const CR: char = '\r';
pub const CTRL_U: char = '\u{15}';
pub const CTRL_W: char = '\u{17}';
pub const ESC: char = '\u{1b}';
pub const DEL: char = '\u{7f}';

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum DecoderState {
    #[default]
    Normal,
    EscSeen,
    EscBracketSeen,
}

#[derive(Debug, Default)]
pub struct KeyDecoder {
    state: DecoderState,
}

impl KeyDecoder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> DecoderState {
        self.state
    }

    /// Feed one input unit. Returns the decoded action once a unit (or a
    /// complete escape sequence) resolves to one.
    pub fn feed(&mut self, unit: char) -> Option<EditAction> {
        UNITS_DECODED.fetch_add(1, Ordering::Relaxed);
        match self.state {
            DecoderState::Normal => self.classify(unit),
            DecoderState::EscSeen => {
                if unit == '[' {
                    self.state = DecoderState::EscBracketSeen;
                } else {
                    self.discard("esc");
                }
                None
            }
            DecoderState::EscBracketSeen => {
                let action = match unit {
                    'A' => Some(EditAction::MoveUp),
                    'B' => Some(EditAction::MoveDown),
                    'C' => Some(EditAction::MoveRight),
                    'D' => Some(EditAction::MoveLeft),
                    _ => None,
                };
                match action {
                    Some(action) => {
                        self.state = DecoderState::Normal;
                        Some(action)
                    }
                    None => {
                        self.discard("csi");
                        None
                    }
                }
            }
        }
    }

    /// Drop any partially received escape sequence (input ended mid-sequence).
    /// Returns true when something was pending.
    pub fn abandon(&mut self) -> bool {
        if self.state == DecoderState::Normal {
            return false;
        }
        self.discard("truncated");
        true
    }

    fn classify(&mut self, unit: char) -> Option<EditAction> {
        let action = match unit {
            EOT => EditAction::EndOfInput,
            CTRL_A => EditAction::Home,
            CTRL_C => EditAction::Interrupt,
            CTRL_E => EditAction::End,
            LF | CR => EditAction::Newline,
            CTRL_U => EditAction::KillToStart,
            CTRL_W => EditAction::DeleteWordBack,
            DEL | BS => EditAction::Backspace,
            TAB => EditAction::TriggerCompletion,
            ESC => {
                self.state = DecoderState::EscSeen;
                return None;
            }
            c => EditAction::InsertChar(c),
        };
        trace!(target: "input.decode", action = action.as_str(), "decoded");
        Some(action)
    }

    fn discard(&mut self, stage: &'static str) {
        ESCAPES_DISCARDED.fetch_add(1, Ordering::Relaxed);
        trace!(target: "input.decode", stage, "escape_discarded");
        self.state = DecoderState::Normal;
    }
}
