#![forbid(unsafe_code)]

//! Document model for Foliage.
//!
//! This crate turns a stream of tag/text events into a content tree:
//! - [`TagEvent`] - the canonical event vocabulary delivered by the scanner
//! - [`Scanner`] - permissive markup tokenizer producing those events
//! - [`TreeBuilder`] - open-element stack that assembles a [`RawNode`] tree
//! - [`rules`] - static tag classification tables
//!
//! The builder never rejects input: unmatched end tags are ignored,
//! unclosed open tags are force-closed at end of stream.
//!
//! # Example
//! ```
//! use foliage_dom::parse;
//!
//! let root = parse("<p>Hello <b>world</b></p>");
//! assert!(root.is_finished());
//! assert_eq!(root.tag(), "");
//! ```

pub mod builder;
pub mod event;
pub mod node;
pub mod rules;
pub mod scanner;

pub use builder::TreeBuilder;
pub use event::{AttrList, TagEvent};
pub use node::{RawChild, RawNode};
pub use scanner::Scanner;

/// Scan `input` and build the content tree in one pass.
#[must_use]
pub fn parse(input: &str) -> RawNode {
    let mut builder = TreeBuilder::new();
    for event in Scanner::new(input) {
        builder.feed(event);
    }
    builder.finish()
}
