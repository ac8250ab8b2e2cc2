use std::fmt;

/// ANSI colors
const RESET: &str = "\x1b[0m";
const BOLD: &str = "\x1b[1m";
const DIM: &str = "\x1b[2m";

const FG_BLUE: &str = "\x1b[34m";
const FG_GREEN: &str = "\x1b[32m";
const FG_YELLOW: &str = "\x1b[33m";

/// Icons
const ICON_INFO: &str = "ℹ️";
const ICON_OK: &str = "✅";
const ICON_WARN: &str = "⚠️";

pub fn info<T: fmt::Display>(msg: T) {
    println!("{}{}{} {}{}", FG_BLUE, BOLD, ICON_INFO, RESET, msg);
}

pub fn success<T: fmt::Display>(msg: T) {
    println!("{}{}{} {}{}", FG_GREEN, BOLD, ICON_OK, RESET, msg);
}

pub fn warning<T: fmt::Display>(msg: T) {
    println!("{}{}{} {}{}", FG_YELLOW, BOLD, ICON_WARN, RESET, msg);
}

/// Section title, e.g. `== Active Operations (3 active)`
pub fn section<T: fmt::Display>(title: T, note: Option<String>) {
    match note {
        Some(n) => println!("\n{}{}== {}{} {}({}){}", FG_BLUE, BOLD, title, RESET, DIM, n, RESET),
        None => println!("\n{}{}== {}{}", FG_BLUE, BOLD, title, RESET),
    }
}

/// Dimmed secondary line under an item.
pub fn detail<T: fmt::Display>(msg: T) {
    println!("   {}{}{}", DIM, msg, RESET);
}
