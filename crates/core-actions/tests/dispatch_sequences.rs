//! Random action sequences through the dispatcher: the line invariants hold
//! after every step and the dispatch log never carries typed text.

use core_actions::{Effect, dispatch};
use core_events::EditAction;
use core_state::{HistoryStore, LineState};
use core_text::span_width;
use proptest::prelude::*;
use std::io::Write;
use std::sync::{Arc, Mutex, MutexGuard};
use tracing::Level;
use tracing::subscriber::with_default;
use tracing_subscriber::fmt::MakeWriter;

fn action_strategy() -> impl Strategy<Value = EditAction> {
    prop_oneof![
        Just(EditAction::Home),
        Just(EditAction::End),
        Just(EditAction::KillToStart),
        Just(EditAction::DeleteWordBack),
        Just(EditAction::Backspace),
        Just(EditAction::MoveLeft),
        Just(EditAction::MoveRight),
        Just(EditAction::MoveUp),
        Just(EditAction::MoveDown),
        Just(EditAction::TriggerCompletion),
        prop_oneof![Just('a'), Just(' '), Just('界'), Just('ß')].prop_map(EditAction::InsertChar),
    ]
}

fn assert_invariants(line: &LineState) -> Result<(), TestCaseError> {
    prop_assert!(line.cursor_index() <= line.len());
    prop_assert_eq!(line.cursor_col(), span_width(line.chars(), 0, line.cursor_index()));
    prop_assert_eq!(line.width(), span_width(line.chars(), 0, line.len()));
    Ok(())
}

proptest! {
    #[test]
    fn invariants_hold_for_any_sequence(actions in proptest::collection::vec(action_strategy(), 0..60)) {
        let mut history = HistoryStore::new();
        history.add("ls -la");
        history.add("界 x");
        let mut line = LineState::new();
        for action in actions {
            let outcome = dispatch(action, &line, &mut history, None);
            prop_assert_eq!(outcome.effect, Effect::None);
            line = outcome.line;
            assert_invariants(&line)?;
        }
        let committed = dispatch(EditAction::Newline, &line, &mut history, None);
        assert_invariants(&committed.line)?;
        prop_assert_eq!(committed.effect, Effect::Commit(line.text().trim().to_string()));
    }
}

#[derive(Clone)]
struct BufferWriter {
    inner: Arc<Mutex<Vec<u8>>>,
}

struct LockedWriter<'a> {
    guard: MutexGuard<'a, Vec<u8>>,
}

impl Write for LockedWriter<'_> {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.guard.extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}

impl<'a> MakeWriter<'a> for BufferWriter {
    type Writer = LockedWriter<'a>;

    fn make_writer(&'a self) -> Self::Writer {
        LockedWriter {
            guard: self.inner.lock().expect("log buffer poisoned"),
        }
    }
}

#[test]
fn dispatch_log_uses_target_and_redacts_text() {
    let buffer = Arc::new(Mutex::new(Vec::new()));
    let subscriber = tracing_subscriber::fmt()
        .with_max_level(Level::TRACE)
        .with_target(true)
        .with_ansi(false)
        .without_time()
        .with_writer(BufferWriter {
            inner: buffer.clone(),
        })
        .finish();

    with_default(subscriber, || {
        let mut history = HistoryStore::new();
        let mut line = LineState::new();
        for c in "hunter2".chars() {
            line = dispatch(EditAction::InsertChar(c), &line, &mut history, None).line;
        }
        dispatch(EditAction::Newline, &line, &mut history, None);
    });

    let output = String::from_utf8(buffer.lock().unwrap().clone()).unwrap();
    assert!(output.contains("actions.dispatch"));
    assert!(output.contains("commit"));
    assert!(!output.contains("hunter2"));
}
