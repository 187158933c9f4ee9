#![forbid(unsafe_code)]

//! Navigation model over an immutable render tree.
//!
//! One scan after conversion assigns every structural node a parent link
//! and a shared sibling list (one list object per sibling group; each
//! member references the same list, and the list contains self). The
//! only state that mutates afterwards is the per-node `open` flag and
//! the cursor.
//!
//! Every cursor operation is total: unavailable moves are no-ops,
//! `next`/`prev` wrap around.

use crate::convert::{NodeId, RenderTree};

/// Handle to a shared sibling list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct SiblingsId(usize);

/// Side tables keyed by [`NodeId`] plus the cursor.
#[derive(Debug)]
pub struct NavModel {
    parent: Vec<Option<NodeId>>,
    siblings_of: Vec<SiblingsId>,
    lists: Vec<Vec<NodeId>>,
    open: Vec<bool>,
    cursor: NodeId,
}

impl NavModel {
    /// Scan the tree and build the link tables. The cursor starts at the
    /// root; every node starts closed.
    #[must_use]
    pub fn new(tree: &RenderTree) -> Self {
        let len = tree.len();
        let mut model = Self {
            parent: vec![None; len],
            siblings_of: vec![SiblingsId(0); len],
            lists: vec![vec![tree.root()]],
            open: vec![false; len],
            cursor: tree.root(),
        };
        model.scan(tree, tree.root());
        model
    }

    fn scan(&mut self, tree: &RenderTree, id: NodeId) {
        let children: Vec<NodeId> = tree.node(id).child_nodes().collect();
        if children.is_empty() {
            return;
        }
        let list = SiblingsId(self.lists.len());
        self.lists.push(children.clone());
        for child in &children {
            self.parent[child.index()] = Some(id);
            self.siblings_of[child.index()] = list;
        }
        for child in children {
            self.scan(tree, child);
        }
    }

    /// Current cursor node.
    #[must_use]
    pub fn cursor(&self) -> NodeId {
        self.cursor
    }

    /// Parent link, `None` at the root.
    #[must_use]
    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.parent[id.index()]
    }

    /// The shared sibling list containing `id` (always includes `id`).
    #[must_use]
    pub fn siblings(&self, id: NodeId) -> &[NodeId] {
        &self.lists[self.siblings_of[id.index()].0]
    }

    /// User-toggled open flag.
    #[must_use]
    pub fn is_open(&self, id: NodeId) -> bool {
        self.open[id.index()]
    }

    /// Root-to-cursor path, root first.
    #[must_use]
    pub fn path(&self) -> Vec<NodeId> {
        let mut path = Vec::new();
        let mut at = Some(self.cursor);
        while let Some(id) = at {
            path.push(id);
            at = self.parent(id);
        }
        path.reverse();
        path
    }

    /// Flip the cursor node's open flag.
    pub fn toggle_open(&mut self) {
        let i = self.cursor.index();
        self.open[i] = !self.open[i];
    }

    /// Move to the next sibling, wrapping around.
    pub fn next(&mut self) {
        self.step(1);
    }

    /// Move to the previous sibling, wrapping around.
    pub fn prev(&mut self) {
        self.step(-1);
    }

    fn step(&mut self, delta: isize) {
        let list = self.siblings(self.cursor);
        let n = list.len() as isize;
        if let Some(i) = list.iter().position(|id| *id == self.cursor) {
            let next = (i as isize + delta).rem_euclid(n) as usize;
            self.cursor = list[next];
        }
    }

    /// Move to the parent; no-op at the root.
    pub fn into_parent(&mut self) {
        if let Some(parent) = self.parent(self.cursor) {
            self.cursor = parent;
        }
    }

    /// Move to the first structural child; no-op on leaf nodes.
    pub fn into_first_child(&mut self, tree: &RenderTree) {
        if let Some(first) = tree.node(self.cursor).child_nodes().next() {
            self.cursor = first;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::convert::convert;
    use foliage_dom::parse;

    fn model(input: &str) -> (RenderTree, NavModel) {
        let tree = convert(&parse(input));
        let nav = NavModel::new(&tree);
        (tree, nav)
    }

    #[test]
    fn sibling_lists_are_shared_and_contain_self() {
        let (tree, mut nav) = model("<ul><p>a</p><p>b</p><p>c</p></ul>");
        let root = nav.cursor();
        assert_eq!(nav.siblings(root), &[root]);
        nav.into_first_child(&tree);
        let ul = nav.cursor();
        nav.into_first_child(&tree);
        let first = nav.cursor();
        let list = nav.siblings(first).to_vec();
        assert_eq!(list.len(), 3);
        assert!(list.contains(&first));
        for id in &list {
            assert_eq!(nav.siblings(*id), &list[..], "all siblings share one list");
            assert_eq!(nav.parent(*id), Some(ul));
        }
    }

    #[test]
    fn next_prev_wrap_around() {
        let (tree, mut nav) = model("<ul><p>a</p><p>b</p><p>c</p></ul>");
        nav.into_first_child(&tree);
        nav.into_first_child(&tree);
        let first = nav.cursor();
        nav.next();
        nav.next();
        nav.next();
        assert_eq!(nav.cursor(), first, "three steps over three siblings wrap");
        nav.prev();
        nav.next();
        assert_eq!(nav.cursor(), first);
    }

    #[test]
    fn lone_child_moves_are_no_ops() {
        let (tree, mut nav) = model("<ul><p>only</p></ul>");
        nav.into_first_child(&tree);
        nav.into_first_child(&tree);
        let only = nav.cursor();
        nav.next();
        assert_eq!(nav.cursor(), only);
        nav.prev();
        assert_eq!(nav.cursor(), only);
    }

    #[test]
    fn parent_and_child_moves_are_total() {
        let (tree, mut nav) = model("<p>leaf text</p>");
        let root = nav.cursor();
        nav.into_parent();
        assert_eq!(nav.cursor(), root, "into_parent at root is a no-op");
        nav.into_first_child(&tree);
        let p = nav.cursor();
        assert_ne!(p, root);
        nav.into_first_child(&tree);
        assert_eq!(nav.cursor(), p, "into_first_child on a leaf is a no-op");
        nav.into_parent();
        assert_eq!(nav.cursor(), root);
    }

    #[test]
    fn toggle_open_flips_only_the_cursor() {
        let (tree, mut nav) = model("<ul><p>a</p><p>b</p></ul>");
        nav.into_first_child(&tree);
        let ul = nav.cursor();
        assert!(!nav.is_open(ul));
        nav.toggle_open();
        assert!(nav.is_open(ul));
        nav.into_first_child(&tree);
        assert!(!nav.is_open(nav.cursor()));
        nav.into_parent();
        nav.toggle_open();
        assert!(!nav.is_open(ul));
    }

    #[test]
    fn path_runs_root_to_cursor() {
        let (tree, mut nav) = model("<ul><li><p>deep</p></li></ul>");
        let root = nav.cursor();
        nav.into_first_child(&tree);
        nav.into_first_child(&tree);
        nav.into_first_child(&tree);
        let path = nav.path();
        assert_eq!(path.len(), 4);
        assert_eq!(path[0], root);
        assert_eq!(path[3], nav.cursor());
    }
}
