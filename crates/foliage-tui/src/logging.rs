#![forbid(unsafe_code)]

//! Logging setup.
//!
//! Stdout belongs to the UI, so logs go to the file named by
//! `FOLIAGE_LOG_FILE`; without it, logging stays off. `FOLIAGE_LOG`
//! holds the filter (tracing `EnvFilter` syntax, default `info`).

use std::env;
use std::fs::File;
use std::sync::Arc;

use tracing_subscriber::EnvFilter;

/// Initialize the global subscriber. Silently does nothing when no log
/// file is configured or the file cannot be created.
pub fn init() {
    let Some(path) = env::var_os("FOLIAGE_LOG_FILE") else {
        return;
    };
    let Ok(file) = File::create(&path) else {
        eprintln!("foliage: cannot open log file {}", path.to_string_lossy());
        return;
    };

    let filter = EnvFilter::try_from_env("FOLIAGE_LOG").unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Arc::new(file))
        .with_ansi(false)
        .try_init();
}
