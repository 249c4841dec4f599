//! Styled terminal output helpers.
//!
//! Styling honours the `NO_COLOR` convention; every helper degrades to a
//! plain-text form when color is disabled.

use console::style;

/// Check if color output is disabled via the `NO_COLOR` env var.
#[must_use]
pub fn is_color_disabled() -> bool {
    std::env::var("NO_COLOR").is_ok()
}

/// Print a section header (verbose mode).
pub fn print_header(text: &str) {
    if is_color_disabled() {
        println!("== {text} ==");
    } else {
        println!("{}", style(format!("== {text} ==")).cyan().bold());
    }
}

/// Print the labelled result line, highlighting the derived value.
pub fn print_result_line(label: &str, value: &str) {
    if is_color_disabled() {
        println!("{label}: {value}");
    } else {
        println!("{}: {}", style(label).bold(), style(value).green());
    }
}

/// Print an indented secondary line (speed equivalent, race table rows).
pub fn print_detail(text: &str) {
    if is_color_disabled() {
        println!("  {text}");
    } else {
        println!("  {}", style(text).dim());
    }
}

/// Print an error message to stderr.
pub fn print_error(text: &str) {
    if is_color_disabled() {
        eprintln!("[ERROR] {text}");
    } else {
        eprintln!("{} {text}", style("[ERROR]").red().bold());
    }
}
