#![forbid(unsafe_code)]

//! Escape-sequence generation helpers.
//!
//! Pure byte-generation functions; no state tracking. The canvas uses a
//! deliberately minimal vocabulary:
//!
//! | Sequence | Description |
//! |----------|-------------|
//! | `ESC [ n A` / `ESC [ n B` | cursor up/down n lines |
//! | `ESC [ n G` | cursor to column n (1-indexed) |
//! | `ESC [ K` | clear to end of line |
//! | `ESC [ 1 m` / `ESC [ 4 m` / `ESC [ 7 m` | bold / underline / reverse |
//! | `ESC [ 0 m` | reset |
//!
//! No absolute cursor addressing and no full-screen clear: everything is
//! relative to where the cursor already is.

use std::io::{self, Write};

use bitflags::bitflags;

bitflags! {
    /// Active text attributes.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct StyleFlags: u8 {
        /// SGR 1.
        const BOLD = 0b001;
        /// SGR 4.
        const UNDERLINE = 0b010;
        /// SGR 7.
        const REVERSE = 0b100;
    }
}

/// SGR reset: `CSI 0 m`.
pub const SGR_RESET: &[u8] = b"\x1b[0m";

/// Clear from the cursor to the end of the line: `CSI K`.
pub const CLEAR_TO_EOL: &[u8] = b"\x1b[K";

/// Write the reset sequence.
pub fn reset<W: Write>(w: &mut W) -> io::Result<()> {
    w.write_all(SGR_RESET)
}

/// Reset, then enable every flag in `flags`.
pub fn set_style<W: Write>(w: &mut W, flags: StyleFlags) -> io::Result<()> {
    reset(w)?;
    if flags.contains(StyleFlags::BOLD) {
        w.write_all(b"\x1b[1m")?;
    }
    if flags.contains(StyleFlags::UNDERLINE) {
        w.write_all(b"\x1b[4m")?;
    }
    if flags.contains(StyleFlags::REVERSE) {
        w.write_all(b"\x1b[7m")?;
    }
    Ok(())
}

/// Move the cursor `delta` lines down (positive) or up (negative).
pub fn move_lines<W: Write>(w: &mut W, delta: isize) -> io::Result<()> {
    match delta {
        0 => Ok(()),
        d if d > 0 => write!(w, "\x1b[{d}B"),
        d => write!(w, "\x1b[{}A", -d),
    }
}

/// Move the cursor to an absolute column (0-indexed argument).
pub fn move_to_column<W: Write>(w: &mut W, column: usize) -> io::Result<()> {
    write!(w, "\x1b[{}G", column + 1)
}
