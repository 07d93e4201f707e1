//! User interface module - interaction (prompts) and formatting.
//!
//! Separates concerns:
//! - `formatter` - Pure formatting functions
//! - This module - Interactive prompts and user input handling

use std::io::{self, BufRead, Write};

use anyhow::Result;

pub mod formatter;

// Re-export formatter functions for convenience
pub use formatter::{
    display_boundary_warning, display_dry_run, display_error, display_latest_tag,
    display_new_tag, display_publish_output, display_status, display_success,
};

/// Asks a yes/no question on stdin.
///
/// Only "y" or "yes" (case-insensitive) confirm; anything else, including
/// an empty line, declines.
///
/// # Arguments
/// * `prompt` - Question shown before the `(y/N)` hint
pub fn confirm_action(prompt: &str) -> Result<bool> {
    let stdin = io::stdin();
    confirm_from(prompt, &mut stdin.lock(), &mut io::stdout())
}

/// [confirm_action] over arbitrary input and output streams.
pub fn confirm_from<R: BufRead, W: Write>(prompt: &str, input: &mut R, output: &mut W) -> Result<bool> {
    write!(output, "\n{} (y/N): ", prompt)?;
    output.flush()?;

    let mut line = String::new();
    input.read_line(&mut line)?;

    let response = line.trim().to_lowercase();
    Ok(response == "y" || response == "yes")
}
