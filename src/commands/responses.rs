//! Shell reply codes
//!
//! Defines reply codes and formatting for shell responses.

pub const OK: u16 = 200;
pub const LISTING: u16 = 211;
pub const HELP: u16 = 214;
pub const GOODBYE: u16 = 221;
pub const UNKNOWN_COMMAND: u16 = 500;

/// Format a single reply line
pub fn format_reply(code: u16, message: &str) -> String {
    format!("{} {}\n", code, message)
}
