#![forbid(unsafe_code)]

//! Open-element stack that assembles the raw content tree.
//!
//! Single pass, no backtracking. Every close operation degrades to a
//! no-op rather than erroring, so arbitrarily malformed event streams
//! still produce a complete tree:
//!
//! - an end tag with no matching open frame is ignored;
//! - frames left open at end of stream are force-closed by [`finish`];
//! - opening a tag first ends the still-open siblings of its implicit-end
//!   class (and every frame above them), per [`rules::auto_closes`].
//!
//! [`finish`]: TreeBuilder::finish

use crate::event::{AttrList, TagEvent};
use crate::node::RawNode;
use crate::rules;

/// Stack-based tree builder. The bottom frame is a synthetic root with an
/// empty tag name; it is never popped until [`TreeBuilder::finish`].
#[derive(Debug)]
pub struct TreeBuilder {
    /// Open frames, innermost last. Always at least one entry.
    stack: Vec<RawNode>,
}

impl Default for TreeBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl TreeBuilder {
    /// Create a builder holding only the synthetic root.
    #[must_use]
    pub fn new() -> Self {
        Self {
            stack: vec![RawNode::new("", Vec::new())],
        }
    }

    /// Number of open frames, root included.
    #[must_use]
    pub fn open_depth(&self) -> usize {
        self.stack.len()
    }

    /// Dispatch one event.
    pub fn feed(&mut self, event: TagEvent) {
        match event {
            TagEvent::Start { name, attrs } => self.start(&name, attrs),
            TagEvent::End { name } => self.end(&name),
            TagEvent::SelfClosing { name, attrs } => self.self_closing(&name, attrs),
            TagEvent::Text(data) => self.text(&data),
        }
    }

    /// Append character data to the innermost open node.
    pub fn text(&mut self, data: &str) {
        if let Some(top) = self.stack.last_mut() {
            top.append_text(data);
        }
    }

    /// Open a tag. Tags with an implicit-end class first close the open
    /// frames they end (see [`rules::auto_closes`]); self-closing tags
    /// complete immediately without pushing a frame.
    pub fn start(&mut self, tag: &str, attrs: AttrList) {
        if let Some(found) = self.find_auto_close(tag) {
            self.close_to(found);
        }

        if rules::is_self_closing(tag) {
            self.append_leaf(tag, attrs);
        } else {
            self.stack.push(RawNode::new(tag, attrs));
        }
    }

    /// Close a tag. Self-closing tags already completed at their start;
    /// an unmatched end tag is silently ignored.
    pub fn end(&mut self, tag: &str) {
        if rules::is_self_closing(tag) {
            return;
        }
        if let Some(found) = self.find_open(|open| open == tag) {
            self.close_to(found);
        }
    }

    /// Append a pre-finished leaf without opening a frame (`<x/>`).
    pub fn self_closing(&mut self, tag: &str, attrs: AttrList) {
        self.append_leaf(tag, attrs);
    }

    /// Force-close every remaining frame and return the root.
    #[must_use]
    pub fn finish(mut self) -> RawNode {
        self.close_to(1);
        let mut root = self.stack.pop().unwrap_or_else(|| RawNode::new("", Vec::new()));
        root.finish();
        root
    }

    /// Index of the innermost open frame (root excluded) whose tag
    /// satisfies `pred`.
    fn find_open(&self, pred: impl Fn(&str) -> bool) -> Option<usize> {
        (1..self.stack.len()).rev().find(|&i| pred(self.stack[i].tag()))
    }

    /// Outermost open frame implicitly ended by starting `tag`. The scan
    /// runs innermost-first and stops at the first non-ended frame after
    /// a match, so a container always shields the frames outside it:
    /// `tr` opened inside `[table, tr, td]` ends both the cell and the
    /// row, while `td` ends only a sibling cell.
    fn find_auto_close(&self, tag: &str) -> Option<usize> {
        let mut found = None;
        for i in (1..self.stack.len()).rev() {
            if rules::auto_closes(tag, self.stack[i].tag()) {
                found = Some(i);
            } else if found.is_some() {
                break;
            }
        }
        found
    }

    /// Pop and finish frames until only `depth` remain, attaching each to
    /// its parent. `depth` is clamped so the root survives.
    fn close_to(&mut self, depth: usize) {
        let depth = depth.max(1);
        while self.stack.len() > depth {
            if let Some(mut node) = self.stack.pop() {
                node.finish();
                if let Some(parent) = self.stack.last_mut() {
                    parent.append_node(node);
                }
            }
        }
    }

    fn append_leaf(&mut self, tag: &str, attrs: AttrList) {
        let mut leaf = RawNode::new(tag, attrs);
        leaf.finish();
        if let Some(top) = self.stack.last_mut() {
            top.append_node(leaf);
        }
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    fn arb_event() -> impl Strategy<Value = TagEvent> {
        let tag = prop::sample::select(vec![
            "p", "div", "b", "ul", "li", "br", "span", "table", "tr", "td",
        ]);
        prop_oneof![
            tag.clone()
                .prop_map(|t| TagEvent::start(t, Vec::new())),
            tag.prop_map(TagEvent::end),
            "[a-z ]{0,8}".prop_map(TagEvent::text),
        ]
    }

    proptest! {
        #[test]
        fn any_interleaving_finishes_clean(events in prop::collection::vec(arb_event(), 0..60)) {
            let mut builder = TreeBuilder::new();
            for event in events {
                builder.feed(event);
            }
            let root = builder.finish();
            prop_assert!(root.subtree_finished());
            prop_assert_eq!(root.tag(), "");
        }
    }
}
