#![forbid(unsafe_code)]

//! Raw content tree nodes.
//!
//! A [`RawNode`] is owned by the [`TreeBuilder`](crate::TreeBuilder) while
//! open and handed to the converter once finished. The `finished` flag is
//! one-way: a finished node is never mutated again, and appending to a
//! finished node is a programming error (debug assertion).

use crate::event::AttrList;

/// One ordered child of a raw node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RawChild {
    /// A nested structural node.
    Node(RawNode),
    /// A text fragment. Adjacent fragments are always merged on append.
    Text(String),
}

/// A structural node in the raw content tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawNode {
    tag: String,
    attrs: AttrList,
    children: Vec<RawChild>,
    finished: bool,
}

impl RawNode {
    /// Create an open node with no children.
    #[must_use]
    pub fn new(tag: impl Into<String>, attrs: AttrList) -> Self {
        Self {
            tag: tag.into(),
            attrs,
            children: Vec::new(),
            finished: false,
        }
    }

    /// Tag name (lowercased; empty for the synthetic root).
    #[must_use]
    pub fn tag(&self) -> &str {
        &self.tag
    }

    /// Attributes in source order.
    #[must_use]
    pub fn attrs(&self) -> &AttrList {
        &self.attrs
    }

    /// First value of the named attribute, if present.
    #[must_use]
    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attrs
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }

    /// Ordered children.
    #[must_use]
    pub fn children(&self) -> &[RawChild] {
        &self.children
    }

    /// True once the node has been closed. Finished nodes are immutable.
    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.finished
    }

    /// Every node in this subtree is finished.
    #[must_use]
    pub fn subtree_finished(&self) -> bool {
        self.finished
            && self.children.iter().all(|child| match child {
                RawChild::Node(node) => node.subtree_finished(),
                RawChild::Text(_) => true,
            })
    }

    /// Append character data, merging with a trailing text fragment.
    pub fn append_text(&mut self, data: &str) {
        debug_assert!(!self.finished, "append_text on a finished node");
        if let Some(RawChild::Text(last)) = self.children.last_mut() {
            last.push_str(data);
        } else {
            self.children.push(RawChild::Text(data.to_string()));
        }
    }

    /// Append a structural child.
    pub fn append_node(&mut self, node: RawNode) {
        debug_assert!(!self.finished, "append_node on a finished node");
        self.children.push(RawChild::Node(node));
    }

    pub(crate) fn finish(&mut self) {
        self.finished = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn adjacent_text_fragments_merge() {
        let mut node = RawNode::new("p", Vec::new());
        node.append_text("a");
        node.append_text("b");
        assert_eq!(node.children(), &[RawChild::Text("ab".to_string())]);
    }

    #[test]
    fn text_after_node_starts_a_new_fragment() {
        let mut node = RawNode::new("p", Vec::new());
        node.append_text("a");
        node.append_node(RawNode::new("b", Vec::new()));
        node.append_text("c");
        assert_eq!(node.children().len(), 3);
    }

    #[test]
    fn attr_lookup_returns_first_match() {
        let attrs = vec![
            ("href".to_string(), "x".to_string()),
            ("href".to_string(), "y".to_string()),
        ];
        let node = RawNode::new("a", attrs);
        assert_eq!(node.attr("href"), Some("x"));
        assert_eq!(node.attr("title"), None);
    }
}
