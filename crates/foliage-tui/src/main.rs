#![forbid(unsafe_code)]

//! Foliage binary entry point: read a document, build the tree, browse.

use std::io::{self, Read};
use std::process;

mod app;
mod cli;
mod keys;
mod logging;
mod session;

fn main() {
    let opts = cli::Opts::parse();
    logging::init();

    let doc = match read_document(&opts.path) {
        Ok(doc) => doc,
        Err(err) => {
            eprintln!("foliage: {}: {err}", opts.path);
            process::exit(1);
        }
    };

    let (term_cols, term_rows) = terminal_size();
    let width = opts.width.unwrap_or(term_cols);
    tracing::info!(path = %opts.path, width, bytes = doc.len(), "document loaded");

    let mut app = app::App::new(&doc, width, term_rows);
    if let Err(err) = app.run() {
        eprintln!("foliage: {err}");
        process::exit(1);
    }
}

fn read_document(path: &str) -> io::Result<String> {
    if path == "-" {
        let mut doc = String::new();
        io::stdin().read_to_string(&mut doc)?;
        Ok(doc)
    } else {
        std::fs::read_to_string(path)
    }
}

fn terminal_size() -> (usize, Option<usize>) {
    match crossterm::terminal::size() {
        Ok((cols, rows)) => (cols as usize, Some(rows as usize)),
        Err(_) => (80, None),
    }
}
