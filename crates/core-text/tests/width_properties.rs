//! Property-based tests for the width model.

use core_text::{WIDE_THRESHOLD, char_width, span_width, str_width, strip_ansi};
use proptest::prelude::*;

fn mixed_char() -> impl Strategy<Value = char> {
    prop_oneof![
        proptest::char::range('a', 'z'),
        Just(' '),
        proptest::char::range('\u{4E00}', '\u{4E50}'),
        proptest::char::range('\u{1F600}', '\u{1F610}'),
    ]
}

proptest! {
    // Splitting a string anywhere never changes its total width.
    #[test]
    fn width_is_additive(chars in proptest::collection::vec(mixed_char(), 0..40), a in 0usize..41, b in 0usize..41) {
        let len = chars.len();
        let i = a.min(len);
        let j = b.min(len).max(i);
        prop_assert_eq!(
            span_width(&chars, 0, i) + span_width(&chars, i, j),
            span_width(&chars, 0, j)
        );
    }

    // A full-range span agrees with the string measurement.
    #[test]
    fn span_matches_str_width(s in "[a-z \u{4E00}-\u{4E20}]{0,30}") {
        let chars: Vec<char> = s.chars().collect();
        prop_assert_eq!(span_width(&chars, 0, chars.len()), str_width(&s));
    }

    // Every char is one or two columns, decided only by the threshold.
    #[test]
    fn binary_heuristic(c in any::<char>()) {
        let w = char_width(c);
        prop_assert!(w == 1 || w == 2);
        prop_assert_eq!(w == 2, u32::from(c) >= WIDE_THRESHOLD);
    }

    // Color sequences never contribute columns.
    #[test]
    fn colored_text_measures_like_plain(s in "[a-z>$ ]{0,20}", code in 0u8..255) {
        let colored = format!("\x1b[38;5;{code}m{s}\x1b[0m");
        prop_assert_eq!(str_width(&strip_ansi(&colored)), str_width(&s));
    }
}
