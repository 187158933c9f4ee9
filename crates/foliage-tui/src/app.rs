#![forbid(unsafe_code)]

//! The browse loop: render a frame, block on a key, apply the command.
//!
//! Single-threaded and synchronous. The only suspension point is the
//! blocking key read; the nav tree mutates only between frames, on the
//! same thread that renders it.

use std::io::{self, BufWriter, Write};

use crossterm::event::{self, Event, KeyEventKind};

use foliage_dom::parse;
use foliage_render::{Canvas, NavModel, RenderTree, convert};

use crate::keys::{self, Command};
use crate::session::TerminalSession;

/// A loaded document plus its navigation and painting state.
#[derive(Debug)]
pub struct App {
    tree: RenderTree,
    nav: NavModel,
    canvas: Canvas,
}

impl App {
    /// Build the full pipeline for one document. `rows` caps the painted
    /// frame height; `None` leaves it unlimited (non-terminal sinks).
    #[must_use]
    pub fn new(doc: &str, width: usize, rows: Option<usize>) -> Self {
        let tree = convert(&parse(doc));
        let nav = NavModel::new(&tree);
        let mut canvas = Canvas::new(width);
        if let Some(rows) = rows {
            canvas = canvas.with_max_rows(rows);
        }
        Self { tree, nav, canvas }
    }

    /// Run until the quit command. The terminal session guard restores
    /// cooked mode on every exit path, panics included.
    pub fn run(&mut self) -> io::Result<()> {
        let _session = TerminalSession::new()?;
        let stdout = io::stdout().lock();
        let mut out = BufWriter::new(stdout);

        loop {
            self.canvas.render(&mut out, &self.tree, &self.nav)?;
            match next_command()? {
                Command::Quit => break,
                command => self.apply(&command),
            }
        }
        out.flush()
    }

    fn apply(&mut self, command: &Command) {
        match command {
            Command::ToggleOpen => self.nav.toggle_open(),
            Command::MoveUp => self.nav.prev(),
            Command::MoveDown => self.nav.next(),
            Command::IntoParent => self.nav.into_parent(),
            Command::IntoChild => self.nav.into_first_child(&self.tree),
            Command::Unknown(what) => {
                tracing::debug!(key = %what, "unhandled key");
            }
            Command::Quit => {}
        }
    }
}

/// Block until the next decodable command.
fn next_command() -> io::Result<Command> {
    loop {
        match event::read()? {
            Event::Key(key) if key.kind == KeyEventKind::Press => {
                return Ok(keys::decode(&key));
            }
            Event::Resize(cols, rows) => {
                tracing::debug!(cols, rows, "terminal resized");
            }
            _ => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pipeline_builds_and_paints_without_a_terminal() {
        let mut app = App::new("<ul><li>one</li><li>two</li></ul>", 40, None);
        let mut sink = Vec::new();
        let painted = app
            .canvas
            .render(&mut sink, &app.tree, &app.nav)
            .unwrap();
        assert!(painted > 0);
        assert!(!sink.is_empty());
    }

    #[test]
    fn commands_drive_navigation() {
        let mut app = App::new("<div><p>a</p><p>b</p></div>", 40, None);
        let start = app.nav.cursor();
        app.apply(&Command::IntoChild);
        app.apply(&Command::IntoChild);
        let first = app.nav.cursor();
        assert_ne!(first, start);
        app.apply(&Command::MoveDown);
        assert_ne!(app.nav.cursor(), first);
        app.apply(&Command::MoveUp);
        assert_eq!(app.nav.cursor(), first);
        app.apply(&Command::ToggleOpen);
        assert!(app.nav.is_open(first));
        app.apply(&Command::Unknown("F5".to_string()));
        assert_eq!(app.nav.cursor(), first, "unknown keys change nothing");
    }
}
