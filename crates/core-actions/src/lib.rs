//! Action dispatch: applies decoded `EditAction`s to the line and history
//! and reports what the editor loop must do next.
//!
//! The dispatcher never writes to the terminal. It returns the next
//! `LineState` snapshot plus an `Effect` (commit, hints, exit, cancel); the
//! loop repaints from the old/new snapshot pair and acts on the effect.

pub mod completion;
pub mod dispatcher;

pub use completion::{Completion, CompletionProvider, complete, completion_prefix};
pub use dispatcher::{DispatchOutcome, Effect, dispatch};
