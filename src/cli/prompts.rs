//! Warning and error messages for CLI output.

use std::io::IsTerminal;

const YELLOW: &str = "\x1b[33m";
const RED: &str = "\x1b[31m";
const RESET: &str = "\x1b[0m";

fn colored() -> bool {
    std::io::stderr().is_terminal()
}

/// Warning on stderr, yellow when stderr is a terminal.
pub fn warn(msg: &str) {
    if colored() {
        eprintln!("{YELLOW}warning: {msg}{RESET}");
    } else {
        eprintln!("warning: {msg}");
    }
}

/// Error on stderr, red when stderr is a terminal.
pub fn error(msg: &str) {
    if colored() {
        eprintln!("{RED}error: {msg}{RESET}");
    } else {
        eprintln!("error: {msg}");
    }
}

pub fn settings_saved(path: &str) {
    eprintln!("Saved defaults \u{2192} {path}");
}
