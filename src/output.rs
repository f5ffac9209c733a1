//! Colored user-facing messages on stderr
//!
//! These are for the human on the terminal, separate from the `log` stream:
//! no timestamps, no levels, no module paths.

use owo_colors::OwoColorize;

/// Yellow warning with blank-line padding
pub fn warn(message: &str) {
    eprintln!("\n{}\n", message.yellow());
}

/// Red error with blank-line padding
pub fn error(message: &str) {
    eprintln!("\n{}\n", message.red());
}

/// Plain informational message with blank-line padding
pub fn info(message: &str) {
    eprintln!("\n{}\n", message);
}
