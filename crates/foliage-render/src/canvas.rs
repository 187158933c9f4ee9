#![forbid(unsafe_code)]

//! Incremental terminal painter.
//!
//! Each frame walks the nav tree depth-first from the root, force-opening
//! the root-to-cursor path so the cursor is always visible. Structural
//! nodes print an indicator glyph and their tag label; an open node's
//! atoms flow through the [`Layouter`] into indented rows, with markup
//! markers toggling bold/underline around a bracket glyph.
//!
//! The frame is a list of styled lines. It is diffed against the
//! previous frame and only changed lines are rewritten, each addressed
//! by a relative line move plus an absolute column move - no
//! full-screen clears and no absolute cursor addressing. When a frame
//! shrinks, the leftover lines are cleared down to the previous height.
//!
//! Relative addressing requires every painted line to stay on screen,
//! so a frame is clamped to the configured row limit (the terminal
//! height); rows past the clamp are not painted.

use std::io::{self, Write};

use rustc_hash::FxHashMap;

use foliage_text::{Atom, Layouter, Row};

use crate::convert::{NodeId, RenderChild, RenderTree};
use crate::nav::NavModel;
use crate::sgr::{self, StyleFlags};

/// One styled run within a frame line.
#[derive(Debug, Clone, PartialEq, Eq)]
struct Span {
    flags: StyleFlags,
    text: String,
}

impl Span {
    fn plain(text: impl Into<String>) -> Self {
        Self {
            flags: StyleFlags::empty(),
            text: text.into(),
        }
    }
}

type FrameLine = Vec<Span>;

/// Incremental painter. One instance per displayed document; the
/// position cache lives as long as the canvas.
#[derive(Debug)]
pub struct Canvas {
    width: usize,
    /// Frame row limit; frames are truncated to it before diffing.
    max_rows: Option<usize>,
    prev: Vec<FrameLine>,
    /// Line each node was last painted on. Entries for nodes hidden by a
    /// collapse go stale and are simply overwritten on their next paint.
    positions: FxHashMap<NodeId, usize>,
    /// Frame-relative row the terminal cursor currently rests on.
    cursor_row: usize,
}

/// Style contributed by an inline markup tag.
fn style_for_tag(tag: &str) -> StyleFlags {
    match tag {
        "b" | "strong" | "em" | "i" | "mark" => StyleFlags::BOLD,
        "a" | "u" => StyleFlags::UNDERLINE,
        _ => StyleFlags::empty(),
    }
}

impl Canvas {
    /// Create a canvas for rows of at most `width` cells.
    #[must_use]
    pub fn new(width: usize) -> Self {
        Self {
            width: width.max(4),
            max_rows: None,
            prev: Vec::new(),
            positions: FxHashMap::default(),
            cursor_row: 0,
        }
    }

    /// Clamp frames to `rows` lines. Without a limit a frame taller than
    /// the terminal would scroll the screen and desynchronize the diff.
    #[must_use]
    pub fn with_max_rows(mut self, rows: usize) -> Self {
        self.max_rows = Some(rows.max(1));
        self
    }

    /// Paint one frame, rewriting only the lines that changed since the
    /// previous one. Returns the number of repainted lines.
    pub fn render<W: Write>(
        &mut self,
        w: &mut W,
        tree: &RenderTree,
        nav: &NavModel,
    ) -> io::Result<usize> {
        let mut frame = self.build_frame(tree, nav);
        if let Some(max) = self.max_rows {
            frame.truncate(max);
        }

        let empty: FrameLine = Vec::new();
        let total = frame.len().max(self.prev.len());
        let mut repainted = 0usize;
        for row in 0..total {
            let line = frame.get(row).unwrap_or(&empty);
            if self.prev.get(row) == Some(line) {
                continue;
            }
            self.move_to(w, row)?;
            let mut current: Option<StyleFlags> = None;
            for span in line {
                if current != Some(span.flags) {
                    sgr::set_style(w, span.flags)?;
                    current = Some(span.flags);
                }
                w.write_all(span.text.as_bytes())?;
            }
            if current.is_some_and(|flags| !flags.is_empty()) {
                sgr::reset(w)?;
            }
            w.write_all(sgr::CLEAR_TO_EOL)?;
            repainted += 1;
        }

        // Park the cursor on the current node's line.
        let target = self
            .positions
            .get(&nav.cursor())
            .copied()
            .unwrap_or(0)
            .min(frame.len().saturating_sub(1));
        self.move_to(w, target)?;
        w.flush()?;

        tracing::trace!(height = frame.len(), repainted, "frame painted");
        self.prev = frame;
        Ok(repainted)
    }

    /// Lines the last painted frame occupied.
    #[must_use]
    pub fn height(&self) -> usize {
        self.prev.len()
    }

    /// Move to a frame row: newlines going down (they allocate fresh
    /// lines, scrolling at the screen bottom), a relative move going up.
    fn move_to<W: Write>(&mut self, w: &mut W, row: usize) -> io::Result<()> {
        if row >= self.cursor_row {
            for _ in 0..row - self.cursor_row {
                w.write_all(b"\n")?;
            }
        } else {
            sgr::move_lines(w, row as isize - self.cursor_row as isize)?;
        }
        sgr::move_to_column(w, 0)?;
        self.cursor_row = row;
        Ok(())
    }

    fn build_frame(&mut self, tree: &RenderTree, nav: &NavModel) -> Vec<FrameLine> {
        let path = nav.path();
        let mut frame = Vec::new();
        self.walk(tree, nav, &path, tree.root(), 0, &mut frame);
        frame
    }

    fn walk(
        &mut self,
        tree: &RenderTree,
        nav: &NavModel,
        path: &[NodeId],
        id: NodeId,
        depth: usize,
        frame: &mut Vec<FrameLine>,
    ) {
        self.positions.insert(id, frame.len());
        let open = nav.is_open(id) || path.contains(&id);

        let node = tree.node(id);
        let label = if node.tag().is_empty() {
            "document"
        } else {
            node.tag()
        };
        let glyph = if open { '-' } else { '+' };
        let mut line = FrameLine::new();
        if depth > 0 {
            line.push(Span::plain("  ".repeat(depth)));
        }
        let label_style = if id == nav.cursor() {
            StyleFlags::REVERSE
        } else {
            StyleFlags::empty()
        };
        line.push(Span {
            flags: label_style,
            text: format!("{glyph} {label}"),
        });
        frame.push(line);

        if !open {
            return;
        }

        let indent = (depth + 1) * 2;
        let avail = self.width.saturating_sub(indent).max(1);
        let mut layout = Layouter::new(avail);
        let mut inline_style = StyleFlags::empty();
        for child in node.children() {
            match child {
                RenderChild::Atom(atom) => layout.push(atom.clone()),
                RenderChild::Node(child_id) => {
                    let rows = std::mem::replace(&mut layout, Layouter::new(avail)).into_rows();
                    emit_rows(rows, indent, &mut inline_style, frame);
                    self.walk(tree, nav, path, *child_id, depth + 1, frame);
                }
            }
        }
        emit_rows(layout.into_rows(), indent, &mut inline_style, frame);
    }
}

/// Turn wrapped rows into styled frame lines, carrying the inline style
/// across row and child-node boundaries.
fn emit_rows(rows: Vec<Row>, indent: usize, inline_style: &mut StyleFlags, frame: &mut Vec<FrameLine>) {
    for row in rows {
        let mut line = FrameLine::new();
        if !row.atoms().is_empty() && indent > 0 {
            line.push(Span::plain(" ".repeat(indent)));
        }
        for atom in row.atoms() {
            match atom {
                Atom::Markup { tag, open } => {
                    let style = style_for_tag(tag);
                    if *open {
                        *inline_style |= style;
                        line.push(Span {
                            flags: *inline_style,
                            text: "[".to_string(),
                        });
                    } else {
                        line.push(Span {
                            flags: *inline_style,
                            text: "]".to_string(),
                        });
                        *inline_style &= !style;
                    }
                }
                other => line.push(Span {
                    flags: *inline_style,
                    text: other.text().to_string(),
                }),
            }
        }
        frame.push(line);
    }
}
