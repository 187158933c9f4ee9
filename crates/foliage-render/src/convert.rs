#![forbid(unsafe_code)]

//! Bottom-up conversion of the raw tree into a render tree.
//!
//! Per raw node:
//! 1. ignored tags and hidden inputs vanish;
//! 2. `br` becomes a single [`Atom::Break`];
//! 3. other void tags become one [`Atom::Placeholder`];
//! 4. inline tags contribute `Markup(open) .. Markup(close)` around
//!    their flattened children, never a node of their own;
//! 5. text children run through the tokenizer;
//! 6. a transparent wrapper whose surviving content is a single child
//!    (one node, or one contiguous text run) is elided;
//! 7. everything else becomes a [`RenderNode`] in the arena.
//!
//! Weights are additive: a node's weight is the sum of its children's,
//! where an atom weighs its alphanumeric character count.

use foliage_dom::event::AttrList;
use foliage_dom::node::{RawChild, RawNode};
use foliage_dom::rules;
use foliage_text::{Atom, tokenize};

/// Handle into a [`RenderTree`] arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(usize);

impl NodeId {
    /// Arena index.
    #[must_use]
    pub fn index(self) -> usize {
        self.0
    }
}

/// One ordered child of a render node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RenderChild {
    /// A leaf layout atom.
    Atom(Atom),
    /// A nested structural node.
    Node(NodeId),
}

/// A structural node in the render tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderNode {
    tag: String,
    attrs: AttrList,
    children: Vec<RenderChild>,
    weight: usize,
}

impl RenderNode {
    /// Tag name (empty for the document root).
    #[must_use]
    pub fn tag(&self) -> &str {
        &self.tag
    }

    /// Attributes in source order.
    #[must_use]
    pub fn attrs(&self) -> &AttrList {
        &self.attrs
    }

    /// Ordered children.
    #[must_use]
    pub fn children(&self) -> &[RenderChild] {
        &self.children
    }

    /// Content weight: alphanumeric characters under this node.
    /// Reserved for prioritization/search; rendering never reads it.
    #[must_use]
    pub fn weight(&self) -> usize {
        self.weight
    }

    /// Ids of the structural children, in order.
    pub fn child_nodes(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.children.iter().filter_map(|child| match child {
            RenderChild::Node(id) => Some(*id),
            RenderChild::Atom(_) => None,
        })
    }
}

/// Arena-backed render tree. Immutable after conversion.
#[derive(Debug, Clone)]
pub struct RenderTree {
    nodes: Vec<RenderNode>,
    root: NodeId,
}

impl RenderTree {
    /// Root node id.
    #[must_use]
    pub fn root(&self) -> NodeId {
        self.root
    }

    /// Node lookup.
    #[must_use]
    pub fn node(&self, id: NodeId) -> &RenderNode {
        &self.nodes[id.0]
    }

    /// Number of nodes in the arena.
    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// True when the arena holds only the root.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.len() <= 1
    }
}

/// An atom's contribution to its parent's weight.
#[must_use]
pub fn atom_weight(atom: &Atom) -> usize {
    atom.text().chars().filter(|ch| ch.is_alphanumeric()).count()
}

/// Convert a finished raw tree into a render tree. The root always
/// materializes, even for an empty document.
#[must_use]
pub fn convert(raw: &RawNode) -> RenderTree {
    let mut nodes = Vec::new();
    let (children, weight) = convert_children(raw, &mut nodes);
    nodes.push(RenderNode {
        tag: raw.tag().to_string(),
        attrs: raw.attrs().clone(),
        children,
        weight,
    });
    let root = NodeId(nodes.len() - 1);
    tracing::debug!(nodes = nodes.len(), weight, "converted document");
    RenderTree { nodes, root }
}

/// Flatten one raw node's children into render children plus their
/// accumulated weight.
fn convert_children(raw: &RawNode, nodes: &mut Vec<RenderNode>) -> (Vec<RenderChild>, usize) {
    let mut out = Vec::new();
    let mut weight = 0usize;
    for child in raw.children() {
        match child {
            RawChild::Node(node) => {
                let (converted, w) = convert_node(node, nodes);
                out.extend(converted);
                weight += w;
            }
            RawChild::Text(text) => {
                let (atoms, w) = tokenize(text);
                out.extend(atoms.into_iter().map(RenderChild::Atom));
                weight += w;
            }
        }
    }
    (out, weight)
}

fn convert_node(raw: &RawNode, nodes: &mut Vec<RenderNode>) -> (Vec<RenderChild>, usize) {
    let tag = raw.tag();

    if rules::is_ignored(tag) || rules::is_hidden_input(tag, raw.attrs()) {
        return (Vec::new(), 0);
    }
    if rules::is_break(tag) {
        return (vec![RenderChild::Atom(Atom::Break)], 0);
    }
    if rules::is_self_closing(tag) {
        let stand_in = rules::placeholder(tag, raw.attrs());
        return (vec![RenderChild::Atom(Atom::Placeholder(stand_in))], 0);
    }

    let (out, weight) = convert_children(raw, nodes);
    if out.is_empty() {
        return (Vec::new(), 0);
    }

    if rules::is_transparent(tag) && surviving_units(&out) <= 1 {
        // Collapse: the wrapper adds no grouping, its contents flow
        // straight into the parent.
        return (out, weight);
    }

    if rules::is_inline(tag) {
        let mut run = Vec::with_capacity(out.len() + 2);
        run.push(RenderChild::Atom(Atom::markup(tag, true)));
        run.extend(out);
        run.push(RenderChild::Atom(Atom::markup(tag, false)));
        return (run, weight);
    }

    nodes.push(RenderNode {
        tag: tag.to_string(),
        attrs: raw.attrs().clone(),
        children: out,
        weight,
    });
    (vec![RenderChild::Node(NodeId(nodes.len() - 1))], weight)
}

/// Count surviving content units: each structural node is one unit, and
/// each contiguous run of non-blank atoms is one unit.
fn surviving_units(children: &[RenderChild]) -> usize {
    let mut units = 0;
    let mut in_run = false;
    for child in children {
        match child {
            RenderChild::Node(_) => {
                units += 1;
                in_run = false;
            }
            RenderChild::Atom(atom) if atom.is_blank() => {}
            RenderChild::Atom(_) => {
                if !in_run {
                    units += 1;
                    in_run = true;
                }
            }
        }
    }
    units
}
