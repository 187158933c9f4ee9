#![forbid(unsafe_code)]

//! Canonical tag/text event types.
//!
//! The scanner (or any other upstream tokenizer) delivers the document as
//! an ordered sequence of these events. Names and attribute keys are
//! already ASCII-lowercased by the producer.

/// Ordered attribute pairs, in source order.
pub type AttrList = Vec<(String, String)>;

/// One structural event in document order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TagEvent {
    /// An opening tag with its attributes.
    Start {
        /// Lowercased tag name.
        name: String,
        /// Attributes in source order.
        attrs: AttrList,
    },

    /// A closing tag.
    End {
        /// Lowercased tag name.
        name: String,
    },

    /// A tag closed in place (`<x/>` syntax).
    SelfClosing {
        /// Lowercased tag name.
        name: String,
        /// Attributes in source order.
        attrs: AttrList,
    },

    /// A run of character data, entities already decoded.
    Text(String),
}

impl TagEvent {
    /// Create a start event.
    #[must_use]
    pub fn start(name: impl Into<String>, attrs: AttrList) -> Self {
        Self::Start {
            name: name.into(),
            attrs,
        }
    }

    /// Create an end event.
    #[must_use]
    pub fn end(name: impl Into<String>) -> Self {
        Self::End { name: name.into() }
    }

    /// Create a text event.
    #[must_use]
    pub fn text(data: impl Into<String>) -> Self {
        Self::Text(data.into())
    }
}
