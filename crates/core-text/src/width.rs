//! Visual column width model.
//!
//! A character occupies either one or two terminal columns. The decision is a
//! single codepoint threshold: everything at or above `WIDE_THRESHOLD`
//! (CJK radicals onward, including fullwidth forms and most emoji) is treated
//! as wide, everything below as narrow.
//!
//! This is an accepted approximation, not a Unicode width table. It
//! over-estimates some symbols above the threshold and knows nothing about
//! zero-width or combining marks. Callers must route every width decision
//! through this module so the cursor arithmetic stays self-consistent even
//! where the terminal disagrees.
//!
//! Invariants:
//! - `span_width(s, 0, i) + span_width(s, i, j) == span_width(s, 0, j)` for
//!   every split `0 <= i <= j <= len`.
//! - Empty input measures 0.

/// First codepoint treated as double-width.
pub const WIDE_THRESHOLD: u32 = 0x2E80;

/// Column width of a single character: 2 at or above `WIDE_THRESHOLD`, else 1.
#[inline]
pub fn char_width(c: char) -> usize {
    if u32::from(c) >= WIDE_THRESHOLD { 2 } else { 1 }
}

/// Column width of a whole string.
pub fn str_width(s: &str) -> usize {
    s.chars().map(char_width).sum()
}

/// Column width of the half-open char range `[from, to)` of `chars`.
///
/// Both bounds are clamped into `[0, len]`; an inverted range measures 0.
pub fn span_width(chars: &[char], from: usize, to: usize) -> usize {
    let to = to.min(chars.len());
    if from >= to {
        return 0;
    }
    chars[from..to].iter().copied().map(char_width).sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ascii_is_narrow() {
        assert_eq!(char_width('a'), 1);
        assert_eq!(char_width('~'), 1);
    }

    #[test]
    fn cjk_is_wide() {
        assert_eq!(char_width('界'), 2);
        assert_eq!(str_width("中文"), 4);
    }

    #[test]
    fn threshold_boundary() {
        assert_eq!(char_width('\u{2E7F}'), 1);
        assert_eq!(char_width('\u{2E80}'), 2);
    }

    #[test]
    fn control_chars_count_as_one() {
        assert_eq!(char_width('\n'), 1);
        assert_eq!(char_width('\u{1b}'), 1);
    }

    #[test]
    fn mixed_string() {
        assert_eq!(str_width("a界b"), 4);
        assert_eq!(str_width(""), 0);
    }

    #[test]
    fn span_clamps_bounds() {
        let chars: Vec<char> = "ab界".chars().collect();
        assert_eq!(span_width(&chars, 0, 99), 4);
        assert_eq!(span_width(&chars, 2, 3), 2);
        assert_eq!(span_width(&chars, 3, 1), 0);
        assert_eq!(span_width(&[], 0, 0), 0);
    }
}
