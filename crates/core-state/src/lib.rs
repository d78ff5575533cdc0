//! Editor state: the line buffer, command history and prompt.
//!
//! All three are plain owned values with no terminal or I/O knowledge:
//! - `LineState` is an immutable snapshot; every edit produces a new snapshot
//!   so the dispatcher can compute the next state, hand old and new to the
//!   renderer, and only then replace the current one.
//! - `HistoryStore` owns accepted lines plus the navigation cursor and the
//!   transient draft preserved across an upward excursion.
//! - `Prompt` caches the resolved prompt text and its visual width for one
//!   prompt display.

pub mod history;
pub mod line;
pub mod prompt;

pub use history::{HistoryOptions, HistoryStore};
pub use line::LineState;
pub use prompt::{Prompt, PromptSource};
