//! Pure formatting functions for UI output.
//!
//! This module contains all display/formatting logic separated from user interaction.
//! Line builders return strings so they can be tested; `display_*` functions print them.

use console::style;

use crate::boundary::BoundaryWarning;
use crate::git::PublishCommand;

/// Format and print an error message in red.
pub fn display_error(message: &str) {
    eprintln!("{} {}", style("ERROR:").red(), message);
}

/// Format and print a success message with green checkmark.
pub fn display_success(message: &str) {
    println!("{} {}", style("✓").green(), message);
}

/// Format and print a status message with yellow arrow.
pub fn display_status(message: &str) {
    println!("{} {}", style("→").yellow(), message);
}

/// Display a boundary warning to the user.
///
/// Shows a yellow warning icon followed by the warning message.
pub fn display_boundary_warning(warning: &BoundaryWarning) {
    eprintln!("{} {}", style("⚠ WARNING:").yellow(), warning);
}

/// Line reporting the latest release found by the lister.
pub fn latest_tag_line(latest: Option<&str>) -> String {
    match latest {
        Some(tag) => format!("latest tag: {}", tag),
        None => "latest tag: (none)".to_string(),
    }
}

/// Line reporting the computed tag.
pub fn new_tag_line(new_tag: &str) -> String {
    format!("new tag: {}", new_tag)
}

pub fn display_latest_tag(latest: Option<&str>) {
    println!("{}", latest_tag_line(latest));
}

pub fn display_new_tag(new_tag: &str) {
    println!("{}", style(new_tag_line(new_tag)).bold());
}

/// Display the command a dry run would have executed.
///
/// # Arguments
/// * `command` - The tag-and-push command that was not run
pub fn display_dry_run(command: &PublishCommand) {
    println!("{}", style("Dry run, not executing:").yellow());
    println!("  {}", style(command).cyan());
}

/// Display the captured output of the publisher, if it printed anything.
pub fn display_publish_output(output: &str) {
    if !output.trim().is_empty() {
        println!("{}", output.trim_end());
    }
}
