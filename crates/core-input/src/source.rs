//! Input sources: where units come from.
//!
//! A unit is one Unicode scalar value. `Utf8Input` decodes a byte stream at
//! the codepoint level, reading the lead byte and then exactly the
//! continuation bytes it announces, so a multi-byte character is always
//! delivered as one unit even when the transport splits it across reads.
//! Malformed sequences decode to U+FFFD instead of failing the session.

use crate::InputError;
use std::collections::VecDeque;
use std::io::{self, Read};
use tracing::{debug, warn};

/// Result of one blocking read.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReadOutcome {
    Unit(char),
    /// The stream is exhausted; no further units will arrive.
    Closed,
}

/// Blocking source of input units.
pub trait InputSource {
    fn read_unit(&mut self) -> Result<ReadOutcome, InputError>;
}

impl<T: InputSource + ?Sized> InputSource for &mut T {
    fn read_unit(&mut self) -> Result<ReadOutcome, InputError> {
        (**self).read_unit()
    }
}

impl<T: InputSource + ?Sized> InputSource for Box<T> {
    fn read_unit(&mut self) -> Result<ReadOutcome, InputError> {
        (**self).read_unit()
    }
}

/// UTF-8 decoding adapter over any byte reader (stdin in the binary).
#[derive(Debug)]
pub struct Utf8Input<R> {
    reader: R,
    /// Byte read while expecting a continuation byte; it starts the next unit.
    pending: Option<u8>,
}

impl<R: Read> Utf8Input<R> {
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            pending: None,
        }
    }

    pub fn into_inner(self) -> R {
        self.reader
    }

    /// One byte, or `None` at end of stream. Interrupted reads are retried.
    fn read_byte(&mut self) -> Result<Option<u8>, InputError> {
        if let Some(b) = self.pending.take() {
            return Ok(Some(b));
        }
        let mut buf = [0u8; 1];
        loop {
            match self.reader.read(&mut buf) {
                Ok(0) => return Ok(None),
                Ok(_) => return Ok(Some(buf[0])),
                Err(e) if e.kind() == io::ErrorKind::Interrupted => {
                    debug!(target: "input.read", "read_interrupted_retry");
                }
                Err(e) => return Err(InputError::Io(e)),
            }
        }
    }
}

/// Sequence length announced by a UTF-8 lead byte; `None` for bytes that cannot start one.
fn utf8_len(lead: u8) -> Option<usize> {
    match lead {
        0x00..=0x7F => Some(1),
        0xC2..=0xDF => Some(2),
        0xE0..=0xEF => Some(3),
        0xF0..=0xF4 => Some(4),
        _ => None,
    }
}

impl<R: Read> InputSource for Utf8Input<R> {
    fn read_unit(&mut self) -> Result<ReadOutcome, InputError> {
        let Some(lead) = self.read_byte()? else {
            return Ok(ReadOutcome::Closed);
        };
        let Some(len) = utf8_len(lead) else {
            warn!(target: "input.read", lead, "invalid_utf8_lead");
            return Ok(ReadOutcome::Unit(char::REPLACEMENT_CHARACTER));
        };
        let mut buf = [lead, 0, 0, 0];
        for slot in buf.iter_mut().take(len).skip(1) {
            match self.read_byte()? {
                Some(b) if b & 0xC0 == 0x80 => *slot = b,
                Some(b) => {
                    warn!(target: "input.read", len, "truncated_utf8_sequence");
                    self.pending = Some(b);
                    return Ok(ReadOutcome::Unit(char::REPLACEMENT_CHARACTER));
                }
                None => {
                    warn!(target: "input.read", len, "utf8_sequence_cut_by_eof");
                    return Ok(ReadOutcome::Unit(char::REPLACEMENT_CHARACTER));
                }
            }
        }
        let unit = std::str::from_utf8(&buf[..len])
            .ok()
            .and_then(|s| s.chars().next())
            .unwrap_or(char::REPLACEMENT_CHARACTER);
        Ok(ReadOutcome::Unit(unit))
    }
}

/// In-memory source replaying a fixed unit sequence, then reporting `Closed`.
#[derive(Debug, Default, Clone)]
pub struct ScriptedInput {
    units: VecDeque<char>,
}

impl ScriptedInput {
    pub fn new(units: &str) -> Self {
        Self {
            units: units.chars().collect(),
        }
    }

    pub fn remaining(&self) -> usize {
        self.units.len()
    }
}

impl InputSource for ScriptedInput {
    fn read_unit(&mut self) -> Result<ReadOutcome, InputError> {
        Ok(match self.units.pop_front() {
            Some(unit) => ReadOutcome::Unit(unit),
            None => ReadOutcome::Closed,
        })
    }
}
