//! Tab completion.
//!
//! The prefix is the last whitespace-delimited token of the text before the
//! cursor. Completion is only attempted when the cursor directly follows a
//! non-blank character. With a single hint its remainder is inserted at the
//! cursor (plus a separating space when the cursor was at the end of the
//! line); with several hints the caller shows them.

use core_events::COMPLETION_REQUESTS;
use core_state::LineState;
use core_text::is_blank;
use std::sync::atomic::Ordering;
use tracing::trace;

/// Source of completion candidates for a prefix.
pub trait CompletionProvider {
    fn complete(&mut self, prefix: &str) -> Vec<String>;
}

impl<F> CompletionProvider for F
where
    F: FnMut(&str) -> Vec<String>,
{
    fn complete(&mut self, prefix: &str) -> Vec<String> {
        self(prefix)
    }
}

/// Outcome of one Tab press.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Completion {
    /// No usable prefix before the cursor; the provider was not consulted.
    NoPrefix,
    /// The provider had nothing to offer.
    NoHints,
    Inserted(LineState),
    Hints(Vec<String>),
}

/// Token to complete, or `None` when the cursor is at the start of the line
/// or right after a blank.
pub fn completion_prefix(line: &LineState) -> Option<String> {
    let before = line.char_before_cursor()?;
    if is_blank(before) {
        return None;
    }
    line.before_cursor()
        .split_whitespace()
        .last()
        .map(str::to_string)
}

pub fn complete(line: &LineState, provider: &mut dyn CompletionProvider) -> Completion {
    let Some(prefix) = completion_prefix(line) else {
        trace!(target: "actions.dispatch", "empty_completion_prefix");
        return Completion::NoPrefix;
    };
    COMPLETION_REQUESTS.fetch_add(1, Ordering::Relaxed);
    let mut hints = provider.complete(&prefix);
    trace!(
        target: "actions.dispatch",
        prefix_len = prefix.chars().count(),
        hints = hints.len(),
        "completion"
    );
    match hints.len() {
        0 => Completion::NoHints,
        1 => {
            let hint = hints.remove(0);
            let mut insert: String = hint.chars().skip(prefix.chars().count()).collect();
            if line.is_cursor_at_end() {
                insert.push(' ');
            }
            Completion::Inserted(line.insert_str(&insert))
        }
        _ => Completion::Hints(hints),
    }
}
