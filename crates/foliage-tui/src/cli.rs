#![forbid(unsafe_code)]

//! Command-line argument parsing.
//!
//! Parsed by hand; the surface is two flags and a path. `FOLIAGE_WIDTH`
//! overrides the detected terminal width the same way `--width` does.

use std::env;
use std::process;

const VERSION: &str = env!("CARGO_PKG_VERSION");

const HELP_TEXT: &str = "\
foliage — navigable text-mode document browser

USAGE:
    foliage [OPTIONS] <PATH>

ARGS:
    <PATH>           Document to browse, or '-' for stdin

OPTIONS:
    --width=N        Wrap text at N columns (default: terminal width)
    --help, -h       Show this help message
    --version, -V    Show version

KEYBINDINGS:
    j / Down         Next sibling
    k / Up           Previous sibling
    l / Right        Into first child
    h / Left         Into parent
    Enter / Space    Toggle open/closed
    q / Ctrl+C       Quit

ENVIRONMENT VARIABLES:
    FOLIAGE_WIDTH      Override --width
    FOLIAGE_LOG        Log filter (tracing EnvFilter syntax)
    FOLIAGE_LOG_FILE   Write logs to this file (stdout belongs to the UI)";

/// Parsed command-line options.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Opts {
    /// Document path, `-` for stdin.
    pub path: String,
    /// Wrap width; `None` means use the terminal width.
    pub width: Option<usize>,
}

impl Opts {
    /// Parse from the process arguments, exiting on `--help`,
    /// `--version`, or a usage error.
    pub fn parse() -> Self {
        match Self::parse_from(env::args().skip(1)) {
            Ok(Some(opts)) => opts,
            Ok(None) => process::exit(0),
            Err(msg) => {
                eprintln!("foliage: {msg}");
                eprintln!("{HELP_TEXT}");
                process::exit(2);
            }
        }
    }

    /// Parse from an explicit argument list. `Ok(None)` means an
    /// informational flag was handled and the process should exit.
    fn parse_from(args: impl Iterator<Item = String>) -> Result<Option<Self>, String> {
        let mut path = None;
        let mut width = None;

        for arg in args {
            match arg.as_str() {
                "--help" | "-h" => {
                    println!("{HELP_TEXT}");
                    return Ok(None);
                }
                "--version" | "-V" => {
                    println!("foliage {VERSION}");
                    return Ok(None);
                }
                _ if arg.starts_with("--width=") => {
                    let value = &arg["--width=".len()..];
                    width = Some(parse_width(value)?);
                }
                _ if arg.starts_with('-') && arg != "-" => {
                    return Err(format!("unknown option '{arg}'"));
                }
                _ => {
                    if path.is_some() {
                        return Err(format!("unexpected argument '{arg}'"));
                    }
                    path = Some(arg);
                }
            }
        }

        if width.is_none()
            && let Ok(value) = env::var("FOLIAGE_WIDTH")
        {
            width = Some(parse_width(&value)?);
        }

        let Some(path) = path else {
            return Err("missing document path".to_string());
        };
        Ok(Some(Self { path, width }))
    }
}

fn parse_width(value: &str) -> Result<usize, String> {
    match value.parse::<usize>() {
        Ok(width) if width > 0 => Ok(width),
        _ => Err(format!("invalid width '{value}'")),
    }
}
