//! Terminal geometry with a guaranteed answer.
//!
//! Callers never see "unknown": when the terminal cannot be queried (not a
//! tty, redirected output, zero-sized pseudo terminal) the implementation
//! returns its configured fallback column count.

use crossterm::terminal::size;
use tracing::debug;

/// Column count used when nothing better is known.
pub const DEFAULT_COLUMNS: u16 = 80;

pub trait TerminalGeometry {
    /// Current terminal width in columns; always at least 1.
    fn columns(&self) -> u16;
}

/// Queries crossterm on every call so resizes are picked up.
#[derive(Debug, Clone, Copy)]
pub struct CrosstermGeometry {
    fallback_columns: u16,
}

impl CrosstermGeometry {
    pub fn new(fallback_columns: u16) -> Self {
        Self {
            fallback_columns: fallback_columns.max(1),
        }
    }
}

impl Default for CrosstermGeometry {
    fn default() -> Self {
        Self::new(DEFAULT_COLUMNS)
    }
}

impl TerminalGeometry for CrosstermGeometry {
    fn columns(&self) -> u16 {
        match size() {
            Ok((cols, _rows)) if cols > 0 => cols,
            Ok(_) => {
                debug!(target: "terminal", fallback = self.fallback_columns, "geometry_zero_width");
                self.fallback_columns
            }
            Err(err) => {
                debug!(
                    target: "terminal",
                    ?err,
                    fallback = self.fallback_columns,
                    "geometry_unavailable"
                );
                self.fallback_columns
            }
        }
    }
}

/// Fixed width, for tests and non-interactive output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedGeometry(pub u16);

impl TerminalGeometry for FixedGeometry {
    fn columns(&self) -> u16 {
        self.0.max(1)
    }
}

impl<T: TerminalGeometry + ?Sized> TerminalGeometry for &T {
    fn columns(&self) -> u16 {
        (**self).columns()
    }
}
