#![forbid(unsafe_code)]

//! Text atoms, tokenization, and line layout for Foliage.
//!
//! - [`Atom`] - smallest unit the layout engine handles
//! - [`tokenize`] - character-class automaton splitting text into atoms
//! - [`Layouter`] / [`Row`] - greedy wrapping into fixed-width rows
//!
//! Widths are terminal cells: one column per character, two for
//! East-Asian wide and fullwidth characters.
//!
//! # Example
//! ```
//! use foliage_text::{tokenize, Layouter};
//!
//! let (atoms, weight) = tokenize("Hello, world");
//! assert_eq!(weight, 10);
//!
//! let mut layout = Layouter::new(8);
//! for atom in atoms {
//!     layout.push(atom);
//! }
//! let rows = layout.into_rows();
//! assert_eq!(rows.len(), 2);
//! ```

pub mod atom;
pub mod layout;
pub mod tokenize;

pub use atom::{Atom, char_width, display_width};
pub use layout::{Layouter, Row};
pub use tokenize::tokenize;
