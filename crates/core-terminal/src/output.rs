//! Output adapter for raw mode.
//!
//! Raw mode switches off the terminal's output post-processing, so a bare
//! `\n` moves down a row without returning to column 0. `RawOutput` rewrites
//! every `\n` not already preceded by `\r` into `\r\n` on its way to the
//! inner writer.

use std::io::{self, Write};

#[derive(Debug)]
pub struct RawOutput<W> {
    inner: W,
    last_was_cr: bool,
}

impl<W: Write> RawOutput<W> {
    pub fn new(inner: W) -> Self {
        Self {
            inner,
            last_was_cr: false,
        }
    }

    pub fn get_ref(&self) -> &W {
        &self.inner
    }

    pub fn into_inner(self) -> W {
        self.inner
    }
}

impl<W: Write> Write for RawOutput<W> {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        let mut start = 0;
        for (i, &b) in buf.iter().enumerate() {
            if b == b'\n' && !(i == 0 && self.last_was_cr) && !(i > 0 && buf[i - 1] == b'\r') {
                self.inner.write_all(&buf[start..i])?;
                self.inner.write_all(b"\r\n")?;
                start = i + 1;
            }
        }
        self.inner.write_all(&buf[start..])?;
        if let Some(&last) = buf.last() {
            self.last_was_cr = last == b'\r';
        }
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        self.inner.flush()
    }
}
