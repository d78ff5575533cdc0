//! Cursor movement and history recall.
//!
//! Recalling a history entry replaces the whole line and puts the cursor at
//! its end. At either end of the history the line is returned unchanged.

use core_events::EditAction;
use core_state::{HistoryStore, LineState};
use tracing::trace;

pub(crate) fn handle_motion(
    action: EditAction,
    line: &LineState,
    history: &mut HistoryStore,
) -> LineState {
    let next = match action {
        EditAction::Home => line.home(),
        EditAction::End => line.end(),
        EditAction::MoveLeft => line.move_left(),
        EditAction::MoveRight => line.move_right(),
        EditAction::MoveUp => recalled(history.recall_previous(&line.text()), line),
        EditAction::MoveDown => recalled(history.recall_next(), line),
        _ => line.clone(),
    };
    trace!(
        target: "actions.dispatch",
        op = action.as_str(),
        from = line.cursor_index(),
        to = next.cursor_index(),
        "motion"
    );
    next
}

fn recalled(entry: Option<String>, line: &LineState) -> LineState {
    match entry {
        Some(text) => LineState::from_line(&text),
        None => line.clone(),
    }
}
