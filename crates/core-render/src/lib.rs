//! Line rendering: differential repaint of the prompt line and the
//! completion hint grid.
//!
//! Everything is planned as a list of `writer::Command`s first and then
//! flushed through crossterm, so the repaint arithmetic can be asserted on
//! without a terminal.

pub mod hints;
pub mod repaint;
pub mod timing;
pub mod writer;

pub use hints::{HintGrid, format_hints};
pub use repaint::{Renderer, plan_redraw, plan_repaint};
pub use writer::{Command, Writer};
