//! Styled terminal output helpers

use console::Style;

/// Bold cyan banner line
pub fn heading(text: &str) {
    println!("{}", Style::new().bold().cyan().apply_to(text));
}

/// Plain progress line
pub fn step(text: &str) {
    println!("{text}");
}

/// Green check line for a completed phase
pub fn success(text: &str) {
    println!("{} {}", Style::new().bold().green().apply_to("✓"), text);
}

/// Dim, indented detail line
pub fn detail(text: &str) {
    println!("  {}", Style::new().dim().apply_to(text));
}

/// Red per-item failure line on stderr
pub fn failure(text: &str) {
    eprintln!("  {} {}", Style::new().bold().red().apply_to("✗"), text);
}
