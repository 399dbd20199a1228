//! Operator-facing console output

use colored::Colorize;

const RULE_WIDTH: usize = 60;
const STEP_RULE_WIDTH: usize = 40;

/// Print a banner framed by horizontal rules
pub fn header(title: &str) {
    let rule = "=".repeat(RULE_WIDTH);
    println!("\n{}", rule.dimmed());
    println!("  {}", title.bold());
    println!("{}", rule.dimmed());
}

/// Print a numbered step heading
pub fn step(number: usize, description: &str) {
    println!("\n{}. {}", number, description.cyan());
    println!("{}", "-".repeat(STEP_RULE_WIDTH).dimmed());
}

pub fn success(message: &str) {
    println!("{} {}", "✓".green(), message);
}

pub fn failure(message: &str) {
    println!("{} {}", "✗".red(), message);
}

pub fn warning(message: &str) {
    println!("{} {}", "!".yellow(), message);
}
