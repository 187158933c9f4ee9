#![forbid(unsafe_code)]

//! Terminal session lifecycle guard.
//!
//! RAII wrapper around raw mode: entering the session enables raw mode,
//! dropping it restores cooked mode, resets styling, and moves to a
//! fresh line so the shell prompt lands cleanly. Because cleanup lives
//! in [`Drop`], it also runs during panic unwinding.

use std::io::{self, Write};

use crossterm::terminal;

/// Guard that owns raw-mode entry/exit.
#[derive(Debug)]
pub struct TerminalSession {
    active: bool,
}

impl TerminalSession {
    /// Enter raw mode.
    pub fn new() -> io::Result<Self> {
        terminal::enable_raw_mode()?;
        tracing::debug!("raw mode entered");
        Ok(Self { active: true })
    }
}

impl Drop for TerminalSession {
    fn drop(&mut self) {
        if !self.active {
            return;
        }
        self.active = false;
        let mut out = io::stdout();
        // Reset style and leave the cursor on a fresh line.
        let _ = out.write_all(b"\x1b[0m\r\n");
        let _ = out.flush();
        if let Err(err) = terminal::disable_raw_mode() {
            tracing::warn!(%err, "failed to restore cooked mode");
        } else {
            tracing::debug!("raw mode restored");
        }
    }
}
