//! Line buffer with logical and visual cursor tracking.
//!
//! `LineState` holds the text being edited as a sequence of `char`s (one
//! logical unit each, one or two columns on screen), the logical cursor index
//! and the matching visual cursor column, plus the cached width of the whole
//! line.
//!
//! Every edit is a transition `&self -> LineState`; the receiver is never
//! modified. The dispatcher keeps the old snapshot around long enough for the
//! renderer to diff against it.
//!
//! Invariants after every transition (the newline marker included):
//! - `cursor_index <= len()`
//! - `cursor_col == span_width(chars, 0, cursor_index)`
//! - `width == span_width(chars, 0, len())`

use core_text::{char_width, find_preceding_word, span_width, str_width};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LineState {
    text: Vec<char>,
    cursor_index: usize,
    cursor_col: usize,
    width: usize,
}

impl LineState {
    /// Empty line, cursor at column 0.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the whole line (history recall); the cursor moves to the end.
    pub fn from_line(line: &str) -> Self {
        let text: Vec<char> = line.chars().collect();
        let width = span_width(&text, 0, text.len());
        Self {
            cursor_index: text.len(),
            cursor_col: width,
            width,
            text,
        }
    }

    /// Build a snapshot after a text mutation, recomputing the cached width.
    fn rebuilt(text: Vec<char>, cursor_index: usize, cursor_col: usize) -> Self {
        let width = span_width(&text, 0, text.len());
        Self {
            text,
            cursor_index,
            cursor_col,
            width,
        }
    }

    /// Snapshot with the same text and a different cursor.
    fn moved(&self, cursor_index: usize, cursor_col: usize) -> Self {
        Self {
            text: self.text.clone(),
            cursor_index,
            cursor_col,
            width: self.width,
        }
    }

    pub fn text(&self) -> String {
        self.text.iter().collect()
    }

    pub fn chars(&self) -> &[char] {
        &self.text
    }

    pub fn len(&self) -> usize {
        self.text.len()
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    pub fn cursor_index(&self) -> usize {
        self.cursor_index
    }

    pub fn cursor_col(&self) -> usize {
        self.cursor_col
    }

    /// Cached visual width of the whole line.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Text before the cursor.
    pub fn before_cursor(&self) -> String {
        self.text[..self.cursor_index].iter().collect()
    }

    /// Character immediately left of the cursor, if any.
    pub fn char_before_cursor(&self) -> Option<char> {
        self.cursor_index
            .checked_sub(1)
            .and_then(|i| self.text.get(i).copied())
    }

    pub fn is_cursor_at_end(&self) -> bool {
        self.cursor_index == self.text.len()
    }

    #[must_use]
    pub fn home(&self) -> Self {
        self.moved(0, 0)
    }

    #[must_use]
    pub fn end(&self) -> Self {
        self.moved(self.text.len(), self.width)
    }

    /// Append the newline unit that terminates a committed line.
    ///
    /// The newline always goes at the end of the text regardless of the cursor;
    /// the cursor jumps past it so the terminal cursor lands on the next row
    /// once the line is repainted.
    #[must_use]
    pub fn push_newline(&self) -> Self {
        let mut text = self.text.clone();
        text.push('\n');
        let cursor_col = self.cursor_col + span_width(&text, self.cursor_index, text.len());
        let cursor_index = text.len();
        Self::rebuilt(text, cursor_index, cursor_col)
    }

    /// Delete everything before the cursor (Ctrl-U).
    #[must_use]
    pub fn kill_to_start(&self) -> Self {
        Self::rebuilt(self.text[self.cursor_index..].to_vec(), 0, 0)
    }

    /// Delete the word before the cursor, including blanks between it and the cursor (Ctrl-W).
    #[must_use]
    pub fn delete_word_back(&self) -> Self {
        let (start, end) = find_preceding_word(&self.text, self.cursor_index);
        let removed_width = span_width(&self.text, start, end);
        let mut text = Vec::with_capacity(self.text.len() - (end - start));
        text.extend_from_slice(&self.text[..start]);
        text.extend_from_slice(&self.text[end..]);
        Self::rebuilt(
            text,
            self.cursor_index - (end - start),
            self.cursor_col.saturating_sub(removed_width),
        )
    }

    #[must_use]
    pub fn move_right(&self) -> Self {
        let next = (self.cursor_index + 1).min(self.text.len());
        let cursor_col = self.cursor_col + span_width(&self.text, self.cursor_index, next);
        self.moved(next, cursor_col)
    }

    #[must_use]
    pub fn move_left(&self) -> Self {
        let prev = self.cursor_index.saturating_sub(1);
        let cursor_col = self
            .cursor_col
            .saturating_sub(span_width(&self.text, prev, self.cursor_index));
        self.moved(prev, cursor_col)
    }

    /// Delete the character before the cursor; a no-op at the start of the line.
    #[must_use]
    pub fn backspace(&self) -> Self {
        let prev = self.cursor_index.saturating_sub(1);
        let removed_width = span_width(&self.text, prev, self.cursor_index);
        let mut text = self.text.clone();
        text.drain(prev..self.cursor_index);
        Self::rebuilt(text, prev, self.cursor_col.saturating_sub(removed_width))
    }

    #[must_use]
    pub fn insert_char(&self, c: char) -> Self {
        let mut text = self.text.clone();
        text.insert(self.cursor_index, c);
        Self::rebuilt(text, self.cursor_index + 1, self.cursor_col + char_width(c))
    }

    /// Splice a string at the cursor; the cursor ends after the inserted text.
    #[must_use]
    pub fn insert_str(&self, s: &str) -> Self {
        let inserted: Vec<char> = s.chars().collect();
        let mut text = self.text.clone();
        text.splice(
            self.cursor_index..self.cursor_index,
            inserted.iter().copied(),
        );
        Self::rebuilt(
            text,
            self.cursor_index + inserted.len(),
            self.cursor_col + str_width(s),
        )
    }
}
