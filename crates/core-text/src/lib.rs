//! Text measurement primitives for the line editor.
//!
//! Everything that decides how many terminal columns a piece of text occupies
//! lives here so the buffer, renderer and hint layout agree on one model:
//! * `width`: per-char / per-string visual width (binary narrow/wide heuristic).
//! * `ansi`: SGR color sequence stripping for prompt measurement.
//! * `motion`: backward word scanning used by word deletion.

pub mod ansi;
pub mod motion;
pub mod width;

pub use ansi::strip_ansi;
pub use motion::{find_preceding_word, is_blank};
pub use width::{WIDE_THRESHOLD, char_width, span_width, str_width};
