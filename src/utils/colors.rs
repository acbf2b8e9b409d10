/// ANSI color helper utilities for terminal output.
pub const RESET: &str = "\x1b[0m";

pub const GREY: &str = "\x1b[90m";

pub const RED: &str = "\x1b[31m";
pub const GREEN: &str = "\x1b[32m";

pub const YELLOW: &str = "\x1b[33m";
pub const CYAN: &str = "\x1b[36m";
pub const MAGENTA: &str = "\x1b[35m";

/// Gap row color:
/// explained → green
/// explained but range changed → yellow
/// unexplained → red
pub fn color_for_gap(explained: bool, range_changed: bool) -> &'static str {
    match (explained, range_changed) {
        (true, false) => GREEN,
        (true, true) => YELLOW,
        (false, _) => RED,
    }
}

/// Greys out placeholder values ("--", "").
pub fn colorize_optional(value: &str) -> String {
    if value.trim().is_empty() || value.trim() == "--" {
        format!("{GREY}{value}{RESET}")
    } else {
        value.to_string()
    }
}

pub fn colorize_current(value: &str) -> String {
    if value.trim() == "current" {
        format!("{CYAN}{value}{RESET}")
    } else {
        colorize_optional(value)
    }
}
