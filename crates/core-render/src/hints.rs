//! Completion hint grid.
//!
//! Hints are laid out row-major in equal cells. Each hint is padded to the
//! longest hint plus two columns; the column count is derived from a wider
//! nominal cell (`2 * max_len + 2`) so grids stay sparse on narrow terminals.
//! At least one column is always used.

use std::fmt::Write as _;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HintGrid {
    /// Longest hint, in characters.
    pub max_len: usize,
    pub cell_width: usize,
    pub columns: usize,
}

impl HintGrid {
    /// Layout for `hints` on a terminal `terminal_columns` wide. `None` when there is nothing to
    /// show.
    pub fn layout(hints: &[String], terminal_columns: u16) -> Option<Self> {
        let max_len = hints.iter().map(|h| h.chars().count()).max()?;
        let cell_width = 2 * max_len + 2;
        let columns = (usize::from(terminal_columns) / cell_width).max(1);
        Some(Self {
            max_len,
            cell_width,
            columns,
        })
    }

    pub fn pad_width(&self) -> usize {
        self.max_len + 2
    }
}

/// Render the grid as text: a leading line break, then each row terminated by one.
pub fn format_hints(hints: &[String], terminal_columns: u16) -> String {
    let Some(grid) = HintGrid::layout(hints, terminal_columns) else {
        return String::new();
    };
    let pad = grid.pad_width();
    let mut out = String::from("\n");
    for row in hints.chunks(grid.columns) {
        for hint in row {
            let _ = write!(out, "{hint:<pad$}");
        }
        out.push('\n');
    }
    out
}
