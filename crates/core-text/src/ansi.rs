//! SGR color sequence stripping.
//!
//! Prompts may carry color styling (`ESC [ 38;5;2 m` ...). Those bytes take no
//! columns on screen, so the prompt is measured on its stripped form. Only the
//! `ESC [ <digits/semicolons> m` family is removed; other escapes are left as-is
//! and will be measured like ordinary characters.

use regex::Regex;
use std::borrow::Cow;
use std::sync::LazyLock;

static SGR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new("\x1b\\[[0-9;]*m").expect("SGR pattern is a valid literal"));

/// Remove every SGR color sequence from `s`.
pub fn strip_ansi(s: &str) -> Cow<'_, str> {
    SGR.replace_all(s, "")
}
