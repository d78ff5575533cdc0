//! Input acquisition and key decoding.
//!
//! * `source`: the `InputSource` contract plus a UTF-8 stream adapter and a
//!   scripted source.
//! * `decoder`: the escape-sequence aware `KeyDecoder` turning units into
//!   `EditAction`s.
//!
//! Logging policy: decoded characters are never logged, only action names and
//! decoder stages.

pub mod decoder;
pub mod source;

pub use decoder::{DecoderState, KeyDecoder};
pub use source::{InputSource, ReadOutcome, ScriptedInput, Utf8Input};

use std::io;

#[derive(Debug, thiserror::Error)]
pub enum InputError {
    #[error("failed to read from input source")]
    Io(#[from] io::Error),
}
