use core_input::InputError;
use std::io;

#[derive(Debug, thiserror::Error)]
pub enum ShellError {
    #[error("failed to switch terminal raw mode")]
    RawMode(#[source] io::Error),
    #[error("failed to read input")]
    Input(#[from] InputError),
    #[error("failed to write to terminal")]
    Output(#[source] io::Error),
    /// The input stream ended without an end-of-transmission key.
    #[error("input stream closed")]
    InputClosed,
}
