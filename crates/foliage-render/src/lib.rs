#![forbid(unsafe_code)]

//! Render tree, navigation model, and incremental terminal painting.
//!
//! - [`convert`] - raw content tree -> arena-backed [`RenderTree`]
//! - [`NavModel`] - parent/sibling links, open flags, cursor movement
//! - [`Canvas`] - line-diffed repainting through relative cursor moves
//!
//! The render tree is immutable once built; all per-node UI state
//! (open/closed, cached screen position) lives in side tables keyed by
//! [`NodeId`].

pub mod canvas;
pub mod convert;
pub mod nav;
pub mod sgr;

pub use canvas::Canvas;
pub use convert::{NodeId, RenderChild, RenderNode, RenderTree, atom_weight, convert};
pub use nav::NavModel;
pub use sgr::StyleFlags;
