//! Backward word scanning.
//!
//! Word boundaries here are deliberately simple: a "word" is a run of
//! non-space characters and only the ASCII space separates words. Tabs never
//! reach the buffer (Tab triggers completion) so this matches what users type.

/// True for the characters that separate words in the line buffer.
#[inline]
pub fn is_blank(c: char) -> bool {
    c == ' '
}

/// Locate the word span ending at `offset` (a char index) for backward deletion.
///
/// Scans backward from `offset - 1`, skipping trailing blanks, then consuming
/// non-blank characters. Returns `(start, offset)` where `start` is one past
/// the blank preceding the word, or `0` when the word runs to the beginning of
/// the line. When no non-blank character precedes `offset` the result is
/// `(0, offset)`: only leading blanks (if any) fall inside the span.
///
/// `offset` is clamped to `line.len()`.
pub fn find_preceding_word(line: &[char], offset: usize) -> (usize, usize) {
    let offset = offset.min(line.len());
    let mut found = false;
    for i in (0..offset).rev() {
        if !is_blank(line[i]) {
            found = true;
        } else if found {
            return (i + 1, offset);
        }
    }
    (0, offset)
}
