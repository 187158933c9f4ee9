#![forbid(unsafe_code)]

//! The atom sum type and cell-width measurement.

use unicode_width::UnicodeWidthChar;

/// Smallest unit handled by the layout engine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Atom {
    /// A word, punctuation cluster, or whitespace run.
    Word(String),
    /// An inline style marker emitted around an inline tag's contents.
    Markup {
        /// Lowercased tag name.
        tag: String,
        /// Opening marker when true, closing when false.
        open: bool,
    },
    /// A forced line break.
    Break,
    /// Textual stand-in for a void element (image alt text, rule, ...).
    Placeholder(String),
}

impl Atom {
    /// Word atom from anything stringy.
    #[must_use]
    pub fn word(text: impl Into<String>) -> Self {
        Self::Word(text.into())
    }

    /// Opening or closing markup marker.
    #[must_use]
    pub fn markup(tag: impl Into<String>, open: bool) -> Self {
        Self::Markup {
            tag: tag.into(),
            open,
        }
    }

    /// Visible text carried by this atom. Markers and breaks carry none.
    #[must_use]
    pub fn text(&self) -> &str {
        match self {
            Self::Word(text) | Self::Placeholder(text) => text,
            Self::Markup { .. } | Self::Break => "",
        }
    }

    /// Display width in cells. Markup markers render as a single bracket
    /// glyph; breaks occupy nothing.
    #[must_use]
    pub fn width(&self) -> usize {
        match self {
            Self::Word(text) | Self::Placeholder(text) => display_width(text),
            Self::Markup { .. } => 1,
            Self::Break => 0,
        }
    }

    /// A whitespace-only word run.
    #[must_use]
    pub fn is_blank(&self) -> bool {
        match self {
            Self::Word(text) => !text.is_empty() && text.chars().all(char::is_whitespace),
            _ => false,
        }
    }
}

/// Cells occupied by one character: 2 for East-Asian wide/fullwidth,
/// 1 for everything else (controls and zero-width marks included, so a
/// malformed document can never make a row measure shorter than it
/// prints).
#[must_use]
pub fn char_width(ch: char) -> usize {
    match UnicodeWidthChar::width(ch) {
        Some(2) => 2,
        _ => 1,
    }
}

/// Sum of [`char_width`] over a string.
#[must_use]
pub fn display_width(text: &str) -> usize {
    text.chars().map(char_width).sum()
}
