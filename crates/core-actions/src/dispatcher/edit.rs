//! Text edit action handling (insert/backspace/kill/delete-word/newline).
//!
//! Only the line snapshot changes here; width and column bookkeeping lives in
//! `LineState` itself.

use core_events::EditAction;
use core_state::LineState;
use tracing::trace;

pub(crate) fn handle_edit(action: EditAction, line: &LineState) -> LineState {
    let next = match action {
        EditAction::KillToStart => line.kill_to_start(),
        EditAction::DeleteWordBack => line.delete_word_back(),
        EditAction::Backspace => line.backspace(),
        EditAction::InsertChar(c) => line.insert_char(c),
        _ => line.clone(),
    };
    trace!(
        target: "actions.dispatch",
        op = action.as_str(),
        len = next.len(),
        width = next.width(),
        "edit"
    );
    next
}

/// Terminate the visible line: the newline marker goes after the last char so
/// the terminal cursor leaves the line from its end.
pub(crate) fn finish_line(line: &LineState) -> LineState {
    line.push_newline()
}
