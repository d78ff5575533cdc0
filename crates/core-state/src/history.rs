//! Command history with draft-preserving navigation.
//!
//! Navigation protocol:
//! - `cursor` ranges over `[0, len]`; `len` is the live position (editing a
//!   fresh line, not looking at history).
//! - Moving up from the live position captures the current buffer as the
//!   draft exactly once per excursion, so repeated Up presses never overwrite
//!   what the user had typed.
//! - Moving down from the newest entry returns to the live position and hands
//!   the draft back, ending the excursion.
//! - `add` of a non-empty line appends, clears the draft and returns to live.
//!
//! Optional policies (both off by default):
//! - `max_entries`: oldest entries are dropped once the cap is exceeded.
//! - `ignore_consecutive_duplicates`: a line equal to the newest entry is not
//!   appended again (the cursor/draft reset still happens).

use tracing::trace;

/// Retention policies applied by `HistoryStore::add`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HistoryOptions {
    pub max_entries: Option<usize>,
    pub ignore_consecutive_duplicates: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HistoryStore {
    entries: Vec<String>,
    cursor: usize,
    draft: Option<String>,
    options: HistoryOptions,
}

impl HistoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_options(options: HistoryOptions) -> Self {
        Self {
            options,
            ..Self::default()
        }
    }

    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Navigation cursor; equals `len()` at the live position.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn draft(&self) -> Option<&str> {
        self.draft.as_deref()
    }

    pub fn is_live(&self) -> bool {
        self.cursor == self.entries.len()
    }

    pub fn options(&self) -> HistoryOptions {
        self.options
    }

    /// Record an accepted line. Empty lines are ignored entirely.
    pub fn add(&mut self, line: &str) {
        if line.is_empty() {
            return;
        }
        let duplicate = self.options.ignore_consecutive_duplicates
            && self.entries.last().is_some_and(|last| last == line);
        if !duplicate {
            self.entries.push(line.to_string());
        }
        if let Some(max) = self.options.max_entries
            && self.entries.len() > max
        {
            let overflow = self.entries.len() - max;
            self.entries.drain(..overflow);
            trace!(target: "state.history", overflow, "history_trimmed");
        }
        self.draft = None;
        self.cursor = self.entries.len();
        trace!(target: "state.history", entries = self.entries.len(), duplicate, "history_add");
    }

    /// Step to the previous (older) entry.
    ///
    /// `current` is the buffer text, captured as the draft when this is the
    /// first step of an excursion. Returns `None` when already at the oldest
    /// entry (or the history is empty); the buffer should stay unchanged.
    pub fn recall_previous(&mut self, current: &str) -> Option<String> {
        if self.cursor == 0 {
            return None;
        }
        if self.draft.is_none() {
            self.draft = Some(current.to_string());
        }
        self.cursor -= 1;
        trace!(target: "state.history", cursor = self.cursor, "recall_previous");
        Some(self.entries[self.cursor].clone())
    }

    /// Step to the next (newer) entry, or back to the draft from the newest entry.
    ///
    /// Returns `None` at the live position. Returning to live hands back the
    /// draft (empty when none was captured) and clears the draft slot.
    pub fn recall_next(&mut self) -> Option<String> {
        let len = self.entries.len();
        if self.cursor + 1 < len {
            self.cursor += 1;
            trace!(target: "state.history", cursor = self.cursor, "recall_next");
            Some(self.entries[self.cursor].clone())
        } else if self.cursor + 1 == len {
            self.cursor = len;
            trace!(target: "state.history", cursor = self.cursor, "draft_restored");
            Some(self.draft.take().unwrap_or_default())
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn navigation_scenario() {
        let mut h = HistoryStore::new();
        h.add("ls");
        h.add("pwd");
        assert_eq!(h.entries(), ["ls", "pwd"]);
        assert_eq!(h.cursor(), 2);

        assert_eq!(h.recall_previous("").as_deref(), Some("pwd"));
        assert_eq!(h.cursor(), 1);
        assert_eq!(h.draft(), Some(""));

        assert_eq!(h.recall_previous("pwd").as_deref(), Some("ls"));
        assert_eq!(h.cursor(), 0);

        assert_eq!(h.recall_previous("ls"), None);
        assert_eq!(h.cursor(), 0);

        assert_eq!(h.recall_next().as_deref(), Some("pwd"));
        assert_eq!(h.cursor(), 1);

        assert_eq!(h.recall_next().as_deref(), Some(""));
        assert_eq!(h.cursor(), 2);
        assert_eq!(h.recall_next(), None);
    }

    #[test]
    fn draft_captured_once_per_excursion() {
        let mut h = HistoryStore::new();
        h.add("one");
        h.add("two");
        assert_eq!(h.recall_previous("typed").as_deref(), Some("two"));
        // The buffer now shows "two"; stepping again must not overwrite the draft.
        assert_eq!(h.recall_previous("two").as_deref(), Some("one"));
        assert_eq!(h.draft(), Some("typed"));
        assert_eq!(h.recall_next().as_deref(), Some("two"));
        assert_eq!(h.recall_next().as_deref(), Some("typed"));
        assert!(h.is_live());
        assert_eq!(h.draft(), None);

        // A new excursion captures the new buffer contents.
        assert_eq!(h.recall_previous("typed more").as_deref(), Some("two"));
        assert_eq!(h.draft(), Some("typed more"));
    }

    #[test]
    fn add_empty_is_noop() {
        let mut h = HistoryStore::new();
        h.add("a");
        let _ = h.recall_previous("draft");
        let before = h.clone();
        h.add("");
        assert_eq!(h, before);
    }

    #[test]
    fn add_resets_cursor_and_draft() {
        let mut h = HistoryStore::new();
        h.add("a");
        h.add("b");
        let _ = h.recall_previous("x");
        let _ = h.recall_previous("b");
        h.add("c");
        assert_eq!(h.cursor(), 3);
        assert_eq!(h.draft(), None);
    }

    #[test]
    fn empty_history_navigation() {
        let mut h = HistoryStore::new();
        assert_eq!(h.recall_previous("draft"), None);
        assert_eq!(h.draft(), None);
        assert_eq!(h.recall_next(), None);
        assert_eq!(h.cursor(), 0);
    }

    #[test]
    fn down_at_live_position_is_noop() {
        let mut h = HistoryStore::new();
        h.add("a");
        assert_eq!(h.recall_next(), None);
        assert_eq!(h.cursor(), 1);
    }

    #[test]
    fn max_entries_drops_oldest() {
        let mut h = HistoryStore::with_options(HistoryOptions {
            max_entries: Some(2),
            ..HistoryOptions::default()
        });
        h.add("a");
        h.add("b");
        h.add("c");
        assert_eq!(h.entries(), ["b", "c"]);
        assert_eq!(h.cursor(), 2);
    }

    #[test]
    fn consecutive_duplicates_ignored_when_enabled() {
        let mut h = HistoryStore::with_options(HistoryOptions {
            ignore_consecutive_duplicates: true,
            ..HistoryOptions::default()
        });
        h.add("ls");
        h.add("ls");
        h.add("pwd");
        h.add("ls");
        assert_eq!(h.entries(), ["ls", "pwd", "ls"]);
    }

    #[test]
    fn duplicates_kept_by_default() {
        let mut h = HistoryStore::new();
        h.add("ls");
        h.add("ls");
        assert_eq!(h.len(), 2);
    }
}
