//! Terminal collaborators and their crossterm implementations.
//!
//! * `RawMode` / `RawModeGuard`: exclusive raw-mode ownership for one editor
//!   session, restored on every exit path (early return, error, unwind).
//! * `geometry`: column count with a mandatory fallback.
//! * `output`: newline translation for writers used while raw mode is active.

use crossterm::terminal::{disable_raw_mode, enable_raw_mode, is_raw_mode_enabled};
use std::io;
use tracing::{debug, info};

pub mod geometry;
pub mod output;

pub use geometry::{CrosstermGeometry, DEFAULT_COLUMNS, FixedGeometry, TerminalGeometry};
pub use output::RawOutput;

/// Acquire/restore contract for raw (unbuffered, unechoed) terminal input.
pub trait RawMode {
    /// Whatever `restore` needs to put the terminal back as it was.
    type Saved;
    fn acquire(&mut self) -> io::Result<Self::Saved>;
    fn restore(&mut self, saved: Self::Saved) -> io::Result<()>;
}

/// Raw mode through crossterm. The saved state records whether raw mode was
/// already on, so nested sessions leave an outer owner's mode untouched.
#[derive(Debug, Default)]
pub struct CrosstermRawMode;

impl CrosstermRawMode {
    pub fn new() -> Self {
        Self
    }
}

impl RawMode for CrosstermRawMode {
    type Saved = bool;

    fn acquire(&mut self) -> io::Result<bool> {
        let was_enabled = is_raw_mode_enabled()?;
        if !was_enabled {
            enable_raw_mode()?;
        }
        info!(target: "terminal", was_enabled, "raw_mode_acquired");
        Ok(was_enabled)
    }

    fn restore(&mut self, was_enabled: bool) -> io::Result<()> {
        if !was_enabled {
            disable_raw_mode()?;
        }
        info!(target: "terminal", "raw_mode_restored");
        Ok(())
    }
}

/// RAII guard ensuring raw mode is restored even if the caller early-returns or panics.
pub struct RawModeGuard<'a, M: RawMode> {
    mode: &'a mut M,
    saved: Option<M::Saved>,
}

impl<'a, M: RawMode> RawModeGuard<'a, M> {
    /// Enter raw mode. On failure nothing has been changed and no guard exists.
    pub fn acquire(mode: &'a mut M) -> io::Result<Self> {
        let saved = mode.acquire()?;
        Ok(Self {
            mode,
            saved: Some(saved),
        })
    }

    /// Restore explicitly, surfacing the error instead of swallowing it in `Drop`.
    pub fn release(mut self) -> io::Result<()> {
        match self.saved.take() {
            Some(saved) => self.mode.restore(saved),
            None => Ok(()),
        }
    }
}

impl<M: RawMode> Drop for RawModeGuard<'_, M> {
    fn drop(&mut self) {
        if let Some(saved) = self.saved.take()
            && let Err(err) = self.mode.restore(saved)
        {
            debug!(target: "terminal", ?err, "raw_mode_restore_failed");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct CountingMode {
        acquired: u32,
        restored: u32,
        fail_acquire: bool,
    }

    impl RawMode for CountingMode {
        type Saved = u32;

        fn acquire(&mut self) -> io::Result<u32> {
            if self.fail_acquire {
                return Err(io::Error::other("not a tty"));
            }
            self.acquired += 1;
            Ok(self.acquired)
        }

        fn restore(&mut self, _saved: u32) -> io::Result<()> {
            self.restored += 1;
            Ok(())
        }
    }

    #[test]
    fn drop_restores_once() {
        let mut mode = CountingMode::default();
        {
            let _guard = RawModeGuard::acquire(&mut mode).unwrap();
        }
        assert_eq!((mode.acquired, mode.restored), (1, 1));
    }

    #[test]
    fn explicit_release_does_not_restore_twice() {
        let mut mode = CountingMode::default();
        let guard = RawModeGuard::acquire(&mut mode).unwrap();
        guard.release().unwrap();
        assert_eq!(mode.restored, 1);
    }

    #[test]
    fn restore_runs_during_unwind() {
        let mut mode = CountingMode::default();
        let result = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
            let _guard = RawModeGuard::acquire(&mut mode).unwrap();
            panic!("boom");
        }));
        assert!(result.is_err());
        assert_eq!(mode.restored, 1);
    }

    #[test]
    fn failed_acquire_yields_no_guard() {
        let mut mode = CountingMode {
            fail_acquire: true,
            ..CountingMode::default()
        };
        assert!(RawModeGuard::acquire(&mut mode).is_err());
        assert_eq!(mode.restored, 0);
    }
}
