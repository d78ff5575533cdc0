//! Dispatcher applying `EditAction`s to the line and history.
//!
//! Sub-modules:
//! * `motion` - cursor movement and history recall
//! * `edit`   - text mutation (insert/delete/kill/newline)
//!
//! Every call takes the current `LineState` by reference and returns the next
//! snapshot; the caller keeps the old one for the differential repaint.
//! History is the only state mutated in place.

use crate::completion::{self, Completion, CompletionProvider};
use core_events::EditAction;
use core_state::{HistoryStore, LineState};
use tracing::trace;

mod edit;
mod motion;

/// What the editor loop must do after repainting the returned line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    None,
    /// The line was accepted. Carries the trimmed text for history and the command callback.
    Commit(String),
    /// Several completion candidates to print below the line.
    ShowHints(Vec<String>),
    /// End of input on an empty line; the session ends.
    Exit,
    /// The line was abandoned; a fresh prompt follows without a commit.
    Cancel,
}

/// Result of dispatching a single `EditAction`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DispatchOutcome {
    pub line: LineState,
    pub effect: Effect,
}

impl DispatchOutcome {
    fn line(line: LineState) -> Self {
        Self {
            line,
            effect: Effect::None,
        }
    }

    fn with(line: LineState, effect: Effect) -> Self {
        Self { line, effect }
    }

    /// True when the repaint can be skipped.
    pub fn is_noop(&self, previous: &LineState) -> bool {
        self.effect == Effect::None && &self.line == previous
    }
}

/// Apply an action. `completer` is `None` when completion is disabled.
pub fn dispatch(
    action: EditAction,
    line: &LineState,
    history: &mut HistoryStore,
    completer: Option<&mut dyn CompletionProvider>,
) -> DispatchOutcome {
    trace!(target: "actions.dispatch", action = action.as_str(), "dispatch");
    match action {
        EditAction::Home
        | EditAction::End
        | EditAction::MoveLeft
        | EditAction::MoveRight
        | EditAction::MoveUp
        | EditAction::MoveDown => {
            DispatchOutcome::line(motion::handle_motion(action, line, history))
        }
        EditAction::KillToStart
        | EditAction::DeleteWordBack
        | EditAction::Backspace
        | EditAction::InsertChar(_) => DispatchOutcome::line(edit::handle_edit(action, line)),
        EditAction::Newline => {
            let committed = line.text().trim().to_string();
            trace!(target: "actions.dispatch", len = committed.chars().count(), "commit");
            DispatchOutcome::with(edit::finish_line(line), Effect::Commit(committed))
        }
        EditAction::Interrupt => DispatchOutcome::with(edit::finish_line(line), Effect::Cancel),
        EditAction::EndOfInput => {
            if line.is_empty() {
                DispatchOutcome::with(line.clone(), Effect::Exit)
            } else {
                trace!(target: "actions.dispatch", "eot_ignored_non_empty_line");
                DispatchOutcome::line(line.clone())
            }
        }
        EditAction::TriggerCompletion => match completer {
            None => DispatchOutcome::line(line.clone()),
            Some(provider) => match completion::complete(line, provider) {
                Completion::Inserted(next) => DispatchOutcome::line(next),
                Completion::Hints(hints) => {
                    DispatchOutcome::with(line.clone(), Effect::ShowHints(hints))
                }
                Completion::NoPrefix | Completion::NoHints => DispatchOutcome::line(line.clone()),
            },
        },
    }
}
