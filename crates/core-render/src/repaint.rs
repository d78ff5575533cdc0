//! Differential line repaint.
//!
//! The terminal cursor sits on the input line at `prompt_width + old.cursor_col`.
//! A repaint never clears the screen; it:
//! 1. blanks whatever the old line had beyond the new line's width (moving to
//!    the old end first when the cursor was not already there),
//! 2. backs up past the start of the prompt,
//! 3. reprints prompt and line,
//! 4. backs up from the end of the line to the new cursor column.
//!
//! Step 2 overshoots by one column; terminals clamp backspace at column 0, and
//! the extra column absorbs a newline marker still counted in the old width.
//! Output cost is proportional to the line length only.

use crate::timing::record_last_repaint_ns;
use crate::writer::Writer;
use core_state::{LineState, Prompt};
use std::io::{self, Write};
use std::time::Instant;
use tracing::trace;

/// Build the command plan turning the on-screen `old` line into `new`.
pub fn plan_repaint(prompt: &str, prompt_width: usize, old: &LineState, new: &LineState) -> Writer {
    let mut w = Writer::new();
    let old_width = old.width();
    let new_width = new.width();

    let overlap = old_width.saturating_sub(new_width);
    if overlap > 0 {
        w.spaces(old_width.saturating_sub(old.cursor_col()));
        w.erase(overlap);
    }

    w.backspaces(old_width.max(new_width) + prompt_width + 1);
    w.print(prompt);
    w.print(new.text());
    w.backspaces(new_width.saturating_sub(new.cursor_col()));
    w
}

/// Build the plan drawing prompt and `line` on a fresh row, cursor left at
/// `line.cursor_col()`.
pub fn plan_redraw(prompt: &str, line: &LineState) -> Writer {
    let mut w = Writer::new();
    w.print(prompt);
    w.print(line.text());
    w.backspaces(line.width().saturating_sub(line.cursor_col()));
    w
}

/// Stateless painter for the prompt line and completion hints.
#[derive(Debug, Default, Clone, Copy)]
pub struct Renderer;

impl Renderer {
    pub fn new() -> Self {
        Self
    }

    /// Bring the terminal from `old` to `new` and flush.
    pub fn repaint<W: Write>(
        &self,
        out: &mut W,
        prompt: &Prompt,
        old: &LineState,
        new: &LineState,
    ) -> io::Result<()> {
        let start = Instant::now();
        let plan = plan_repaint(prompt.text(), prompt.width(), old, new);
        let commands = plan.commands().len();
        plan.flush_to(out)?;
        let elapsed = u64::try_from(start.elapsed().as_nanos()).unwrap_or(u64::MAX);
        record_last_repaint_ns(elapsed);
        trace!(
            target: "render.repaint",
            old_width = old.width(),
            new_width = new.width(),
            cursor_col = new.cursor_col(),
            commands,
            elapsed_ns = elapsed,
            "repaint"
        );
        Ok(())
    }

    /// Print the cached prompt text at the current cursor position.
    pub fn show_prompt<W: Write>(&self, out: &mut W, prompt: &Prompt) -> io::Result<()> {
        let mut w = Writer::new();
        w.print(prompt.text());
        w.flush_to(out)
    }

    /// Draw prompt and line from column 0, e.g. below a hint grid.
    pub fn redraw<W: Write>(
        &self,
        out: &mut W,
        prompt: &Prompt,
        line: &LineState,
    ) -> io::Result<()> {
        plan_redraw(prompt.text(), line).flush_to(out)
    }

    /// Print the hint grid below the current line.
    pub fn show_hints<W: Write>(
        &self,
        out: &mut W,
        hints: &[String],
        terminal_columns: u16,
    ) -> io::Result<()> {
        let mut w = Writer::new();
        w.print(crate::hints::format_hints(hints, terminal_columns));
        trace!(target: "render.repaint", hints = hints.len(), terminal_columns, "hints");
        w.flush_to(out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::writer::Command;

    fn line(text: &str, cursor_index: usize) -> LineState {
        let mut state = LineState::from_line(text).home();
        for _ in 0..cursor_index {
            state = state.move_right();
        }
        state
    }

    #[test]
    fn kill_to_start_erases_overlap_without_shift() {
        let old = LineState::from_line("0123456789");
        let new = LineState::from_line("0123456789")
            .move_left()
            .move_left()
            .move_left()
            .kill_to_start();
        assert_eq!(new.width(), 3);
        let plan = plan_repaint("> ", 2, &old, &new);
        assert_eq!(
            plan.commands(),
            &[
                Command::Erase(7),
                Command::Backspaces(13),
                Command::Print("> ".into()),
                Command::Print("789".into()),
                Command::Backspaces(3),
            ]
        );
    }

    #[test]
    fn shrink_from_middle_moves_to_old_end_first() {
        // cursor after "ab" in "abcd", backspace -> "acd"
        let old = line("abcd", 2);
        let new = old.backspace();
        let plan = plan_repaint("$ ", 2, &old, &new);
        assert_eq!(
            plan.commands(),
            &[
                Command::Spaces(2),
                Command::Erase(1),
                Command::Backspaces(7),
                Command::Print("$ ".into()),
                Command::Print("acd".into()),
                Command::Backspaces(2),
            ]
        );
    }

    #[test]
    fn growth_needs_no_erase() {
        let old = LineState::from_line("ab");
        let new = old.insert_char('c');
        let plan = plan_repaint("> ", 2, &old, &new);
        assert_eq!(
            plan.commands(),
            &[
                Command::Backspaces(6),
                Command::Print("> ".into()),
                Command::Print("abc".into()),
            ]
        );
    }

    #[test]
    fn wide_chars_count_two_columns() {
        let old = LineState::new();
        let new = old.insert_char('界').home();
        let plan = plan_repaint("", 0, &old, &new);
        assert_eq!(
            plan.commands(),
            &[
                Command::Backspaces(3),
                Command::Print("界".into()),
                Command::Backspaces(2),
            ]
        );
    }

    #[test]
    fn repaint_uses_stripped_prompt_width() {
        let prompt = Prompt::new("\x1b[32m>\x1b[0m ");
        let old = LineState::new();
        let new = old.insert_char('x');
        let mut out = Vec::new();
        Renderer::new().repaint(&mut out, &prompt, &old, &new).unwrap();
        // width(new)=1, prompt width=2, plus one
        let expected = format!("{}\x1b[32m>\x1b[0m x", "\x08".repeat(4));
        assert_eq!(String::from_utf8(out).unwrap(), expected);
    }

    #[test]
    fn redraw_prints_prompt_line_and_returns_to_cursor() {
        let line = line("git st", 4);
        let plan = plan_redraw("> ", &line);
        assert_eq!(
            plan.commands(),
            &[
                Command::Print("> ".into()),
                Command::Print("git st".into()),
                Command::Backspaces(2),
            ]
        );
    }

    #[test]
    fn redraw_at_end_of_line_needs_no_backspaces() {
        let mut out = Vec::new();
        Renderer::new()
            .redraw(&mut out, &Prompt::new("> "), &LineState::from_line("go"))
            .unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "> go");
    }

    #[test]
    fn hints_written_as_grid() {
        let mut out = Vec::new();
        Renderer::new()
            .show_hints(&mut out, &["ls".to_string(), "lsof".to_string()], 80)
            .unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "\nls    lsof  \n");
    }
}
