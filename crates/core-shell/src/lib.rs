//! Interactive line editor session.
//!
//! `Shell` owns the prompt, the history, the current line and the optional
//! completion provider, and runs the read → decode → dispatch → repaint loop:
//!
//! 1. show the prompt (resolving dynamic prompts) and start an empty line,
//! 2. block on one input unit and feed it to the `KeyDecoder`,
//! 3. dispatch the decoded action to get the next line snapshot and effect,
//! 4. repaint old → new, then act on the effect (commit, hints, cancel, exit).
//!
//! A hint grid leaves the line untouched: the grid is printed below it and the
//! prompt and line are drawn again underneath, with no repaint beforehand.
//!
//! A committed line goes to history first and then to the command callback,
//! after which a fresh prompt is shown. The loop is single threaded and
//! callbacks run inline, so a slow callback stalls input handling.
//!
//! `run_session` wraps `run` in raw mode; the guard restores the terminal on
//! every exit path, unwinding included.

mod error;

pub use error::ShellError;

use core_actions::{CompletionProvider, Effect, dispatch};
use core_events::{EditAction, LINES_COMMITTED};
use core_input::{InputSource, KeyDecoder, ReadOutcome};
use core_render::Renderer;
use core_state::{HistoryStore, LineState, Prompt, PromptSource};
use core_terminal::{RawMode, RawModeGuard, TerminalGeometry};
use std::fmt;
use std::io::Write;
use std::sync::atomic::Ordering;
use tracing::{debug, info, trace};

/// How a session ended normally.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionEnd {
    /// End-of-transmission on an empty line.
    EndOfInput,
}

pub struct Shell {
    prompt: Prompt,
    history: HistoryStore,
    completer: Option<Box<dyn CompletionProvider>>,
    decoder: KeyDecoder,
    renderer: Renderer,
    line: LineState,
}

impl fmt::Debug for Shell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Shell")
            .field("prompt", &self.prompt)
            .field("history", &self.history)
            .field("completion", &self.completer.is_some())
            .field("decoder", &self.decoder)
            .field("line", &self.line)
            .finish()
    }
}

impl Shell {
    pub fn new(prompt: impl Into<PromptSource>) -> Self {
        Self {
            prompt: Prompt::new(prompt),
            history: HistoryStore::new(),
            completer: None,
            decoder: KeyDecoder::new(),
            renderer: Renderer::new(),
            line: LineState::new(),
        }
    }

    /// Enable Tab completion through `provider`.
    pub fn with_completion<C>(mut self, provider: C) -> Self
    where
        C: CompletionProvider + 'static,
    {
        self.completer = Some(Box::new(provider));
        self
    }

    /// Start from an existing history (retention options included).
    pub fn with_history(mut self, history: HistoryStore) -> Self {
        self.history = history;
        self
    }

    pub fn history(&self) -> &HistoryStore {
        &self.history
    }

    pub fn line(&self) -> &LineState {
        &self.line
    }

    pub fn prompt(&self) -> &Prompt {
        &self.prompt
    }

    /// Run the editor loop until end of input.
    ///
    /// Returns `Ok(SessionEnd::EndOfInput)` on EOT with an empty line and
    /// `Err(ShellError::InputClosed)` when the source runs dry. Terminal mode
    /// is the caller's business; see `run_session`.
    pub fn run<I, W, G, F>(
        &mut self,
        input: &mut I,
        out: &mut W,
        geometry: &G,
        mut on_command: F,
    ) -> Result<SessionEnd, ShellError>
    where
        I: InputSource + ?Sized,
        W: Write,
        G: TerminalGeometry + ?Sized,
        F: FnMut(&str),
    {
        info!(target: "shell.loop", history = self.history.len(), "session_start");
        self.show_prompt(out)?;
        loop {
            let unit = match input.read_unit()? {
                ReadOutcome::Unit(unit) => unit,
                ReadOutcome::Closed => {
                    self.decoder.abandon();
                    info!(target: "shell.loop", "input_closed");
                    return Err(ShellError::InputClosed);
                }
            };
            let Some(action) = self.decoder.feed(unit) else {
                continue;
            };
            if let Some(end) = self.step(action, out, geometry, &mut on_command)? {
                info!(target: "shell.loop", ?end, "session_end");
                return Ok(end);
            }
        }
    }

    /// `run` inside raw mode. Acquisition failure aborts before any output;
    /// a loop error takes precedence over a restore error.
    pub fn run_session<M, I, W, G, F>(
        &mut self,
        raw_mode: &mut M,
        input: &mut I,
        out: &mut W,
        geometry: &G,
        on_command: F,
    ) -> Result<SessionEnd, ShellError>
    where
        M: RawMode,
        I: InputSource + ?Sized,
        W: Write,
        G: TerminalGeometry + ?Sized,
        F: FnMut(&str),
    {
        let guard = RawModeGuard::acquire(raw_mode).map_err(ShellError::RawMode)?;
        let result = self.run(input, out, geometry, on_command);
        let released = guard.release().map_err(ShellError::RawMode);
        let end = result?;
        released?;
        Ok(end)
    }

    /// Apply one decoded action: dispatch, repaint, then act on the effect.
    /// Returns `Some` when the session is over.
    pub fn step<W, G, F>(
        &mut self,
        action: EditAction,
        out: &mut W,
        geometry: &G,
        on_command: &mut F,
    ) -> Result<Option<SessionEnd>, ShellError>
    where
        W: Write,
        G: TerminalGeometry + ?Sized,
        F: FnMut(&str),
    {
        let completer = self
            .completer
            .as_mut()
            .map(|c| &mut **c as &mut dyn CompletionProvider);
        let outcome = dispatch(action, &self.line, &mut self.history, completer);

        if outcome.effect == Effect::Exit {
            return Ok(Some(SessionEnd::EndOfInput));
        }
        let shows_hints = matches!(outcome.effect, Effect::ShowHints(_));
        if !shows_hints && !outcome.is_noop(&self.line) {
            self.renderer
                .repaint(out, &self.prompt, &self.line, &outcome.line)
                .map_err(ShellError::Output)?;
        }
        self.line = outcome.line;

        match outcome.effect {
            Effect::None | Effect::Exit => {}
            Effect::Commit(text) => {
                self.history.add(&text);
                LINES_COMMITTED.fetch_add(1, Ordering::Relaxed);
                debug!(target: "shell.loop", len = text.chars().count(), "line_committed");
                on_command(&text);
                self.show_prompt(out)?;
            }
            Effect::Cancel => {
                debug!(target: "shell.loop", "line_cancelled");
                self.show_prompt(out)?;
            }
            Effect::ShowHints(hints) => {
                self.renderer
                    .show_hints(out, &hints, geometry.columns())
                    .map_err(ShellError::Output)?;
                self.renderer
                    .redraw(out, &self.prompt, &self.line)
                    .map_err(ShellError::Output)?;
            }
        }
        Ok(None)
    }

    /// Resolve and print the prompt, then start a fresh line.
    fn show_prompt<W: Write>(&mut self, out: &mut W) -> Result<(), ShellError> {
        self.prompt.refresh();
        self.renderer
            .show_prompt(out, &self.prompt)
            .map_err(ShellError::Output)?;
        self.line = LineState::new();
        trace!(target: "shell.loop", prompt_width = self.prompt.width(), "prompt_shown");
        Ok(())
    }
}
