#![forbid(unsafe_code)]

//! Greedy row layout.
//!
//! Atoms flow into rows of at most the target width. Whitespace atoms
//! are never stored: a blank between two kept atoms becomes a single
//! space, blanks at row edges vanish. A [`Atom::Break`] force-flushes
//! the row, emitting it even when empty.
//!
//! Guarantee: an emitted row exceeds the target width only when a single
//! atom alone does; atoms are never split.

use smallvec::SmallVec;

use crate::atom::Atom;

/// One wrapped output line: its atoms and pre-measured width.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Row {
    atoms: SmallVec<[Atom; 8]>,
    width: usize,
}

impl Row {
    /// Atoms in display order.
    #[must_use]
    pub fn atoms(&self) -> &[Atom] {
        &self.atoms
    }

    /// Total display width in cells.
    #[must_use]
    pub fn width(&self) -> usize {
        self.width
    }

    /// Concatenated visible text (spaces included).
    #[must_use]
    pub fn to_text(&self) -> String {
        self.atoms.iter().map(Atom::text).collect()
    }
}

/// Greedy line wrapper over atoms.
#[derive(Debug)]
pub struct Layouter {
    target: usize,
    row: Row,
    pending_blank: bool,
    rows: Vec<Row>,
}

impl Layouter {
    /// Create a layouter for rows of at most `target` cells.
    #[must_use]
    pub fn new(target: usize) -> Self {
        Self {
            target,
            row: Row::default(),
            pending_blank: false,
            rows: Vec::new(),
        }
    }

    /// Add one atom, measuring its width.
    pub fn push(&mut self, atom: Atom) {
        let width = atom.width();
        self.push_with_width(atom, width);
    }

    /// Add one atom with a pre-measured width.
    pub fn push_with_width(&mut self, atom: Atom, width: usize) {
        if matches!(atom, Atom::Break) {
            self.force_break();
            return;
        }
        if atom.is_blank() {
            // Whitespace is never stored; it may become one space later.
            if !self.row.atoms.is_empty() {
                self.pending_blank = true;
            }
            return;
        }

        let space = usize::from(self.pending_blank && !self.row.atoms.is_empty());
        if !self.row.atoms.is_empty() && self.row.width + space + width > self.target {
            self.flush();
        } else if space == 1 {
            self.row.atoms.push(Atom::word(" "));
            self.row.width += 1;
        }

        self.row.atoms.push(atom);
        self.row.width += width;
        self.pending_blank = false;
    }

    /// Emit the current row if it holds anything, then reset.
    pub fn flush(&mut self) {
        if !self.row.atoms.is_empty() {
            self.rows.push(std::mem::take(&mut self.row));
        }
        self.pending_blank = false;
    }

    /// Emit the current row even when empty (explicit line break).
    pub fn force_break(&mut self) {
        self.rows.push(std::mem::take(&mut self.row));
        self.pending_blank = false;
    }

    /// Flush and return every emitted row.
    #[must_use]
    pub fn into_rows(mut self) -> Vec<Row> {
        self.flush();
        self.rows
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lay(width: usize, words: &[&str]) -> Vec<String> {
        let mut layout = Layouter::new(width);
        for word in words {
            layout.push(Atom::word(*word));
        }
        layout.into_rows().iter().map(Row::to_text).collect()
    }

    #[test]
    fn fits_on_one_row() {
        assert_eq!(lay(20, &["hello", " ", "world"]), ["hello world"]);
    }

    #[test]
    fn wraps_at_target_width() {
        assert_eq!(lay(5, &["hello", " ", "world"]), ["hello", "world"]);
    }

    #[test]
    fn blank_collapsing_and_edges() {
        // Leading and trailing blanks vanish, runs collapse to one space.
        assert_eq!(lay(20, &["  ", "a", " ", "  ", "b", "   "]), ["a b"]);
    }

    #[test]
    fn no_trailing_space_before_wrap() {
        let rows = lay(7, &["abc", " ", "defg", " ", "hi"]);
        assert_eq!(rows, ["abc", "defg hi"]);
        for row in rows {
            assert!(!row.ends_with(' '));
        }
    }

    #[test]
    fn oversized_atom_gets_its_own_row_unsplit() {
        assert_eq!(
            lay(10, &["abcdefghijk"]),
            ["abcdefghijk"],
            "an atom wider than the target is emitted whole"
        );
        assert_eq!(lay(10, &["x", " ", "abcdefghijk", " ", "y"]), [
            "x",
            "abcdefghijk",
            "y"
        ]);
    }

    #[test]
    fn space_counts_toward_the_bound() {
        // 5 + space + 5 = 11 > 10: must wrap, not overflow.
        assert_eq!(lay(10, &["aaaaa", " ", "bbbbb"]), ["aaaaa", "bbbbb"]);
    }

    #[test]
    fn wide_atoms_measured_in_cells() {
        // Each ideograph is 2 cells: three fit in 6, not four.
        assert_eq!(lay(6, &["日", "本", "語", "学"]), ["日本語", "学"]);
    }

    #[test]
    fn forced_break_emits_empty_row() {
        let mut layout = Layouter::new(10);
        layout.push(Atom::word("a"));
        layout.push(Atom::Break);
        layout.push(Atom::Break);
        layout.push(Atom::word("b"));
        let rows = layout.into_rows();
        let texts: Vec<String> = rows.iter().map(Row::to_text).collect();
        assert_eq!(texts, ["a", "", "b"]);
    }

    #[test]
    fn markup_markers_flow_through_with_width_one() {
        let mut layout = Layouter::new(80);
        layout.push(Atom::word("Hello"));
        layout.push(Atom::word(" "));
        layout.push(Atom::markup("b", true));
        layout.push(Atom::word("world"));
        layout.push(Atom::markup("b", false));
        let rows = layout.into_rows();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].width(), 5 + 1 + 1 + 5 + 1);
        assert_eq!(rows[0].atoms().len(), 5);
    }
}
