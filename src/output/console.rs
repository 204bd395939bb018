//! Console output utilities.

use console::style;

/// Print a success message.
pub fn print_success(message: &str) {
    println!("{} {}", style("✓").green().bold(), message);
}

/// Print an informational line.
pub fn print_info(message: &str) {
    println!("{}", message);
}

/// Print an error message.
pub fn print_error(message: &str) {
    eprintln!("{} {}", style("Error:").red().bold().for_stderr(), message);
}
