use crate::error::{ReleaseError, Result};
use crate::git::{PublishCommand, Publisher};
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};
use tracing::{debug, instrument};

/// Runs an external program to completion and captures its output.
///
/// A missing program or a non-zero exit code is reported as
/// [ReleaseError::ExternalTool] carrying the program's stderr.
#[instrument]
pub(crate) fn run_tool(program: &str, args: &[&str], dir: &Path) -> Result<Output> {
    debug!("Running {} {}", program, args.join(" "));

    let output = Command::new(program)
        .args(args)
        .current_dir(dir)
        .output()
        .map_err(|e| match e.kind() {
            ErrorKind::NotFound => {
                ReleaseError::external(program, format!("'{}' is not installed or not on PATH", program))
            }
            _ => ReleaseError::external(program, format!("Failed to execute: {}", e)),
        })?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        return Err(ReleaseError::external(
            program,
            format!(
                "'{} {}' exited with code {}: {}",
                program,
                args.join(" "),
                output.status.code().unwrap_or(-1),
                stderr.trim()
            ),
        ));
    }

    debug!("{} exited successfully", program);
    Ok(output)
}

/// Stdout and stderr of a finished command, trimmed and joined
pub(crate) fn combined_output(output: &Output) -> String {
    let stdout = String::from_utf8_lossy(&output.stdout);
    let stderr = String::from_utf8_lossy(&output.stderr);

    [stdout.trim(), stderr.trim()]
        .iter()
        .filter(|s| !s.is_empty())
        .cloned()
        .collect::<Vec<_>>()
        .join("\n")
}

/// Publishes through the `git` command line client
pub struct CommandPublisher {
    dir: PathBuf,
}

impl CommandPublisher {
    /// Publisher operating on the repository at `dir`
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        CommandPublisher { dir: dir.into() }
    }
}

impl Publisher for CommandPublisher {
    fn publish(&self, command: &PublishCommand) -> Result<String> {
        let tagged = run_tool("git", &command.tag_args(), &self.dir)?;
        let pushed = run_tool("git", &command.push_args(), &self.dir)?;

        let mut output = combined_output(&tagged);
        let push_output = combined_output(&pushed);
        if !output.is_empty() && !push_output.is_empty() {
            output.push('\n');
        }
        output.push_str(&push_output);
        Ok(output)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_tool_is_external_error() {
        let err = run_tool("calver-release-no-such-tool", &[], Path::new(".")).unwrap_err();
        match err {
            ReleaseError::ExternalTool { tool, message } => {
                assert_eq!(tool, "calver-release-no-such-tool");
                assert!(message.contains("not installed"));
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn test_failing_git_is_external_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = run_tool("git", &["no-such-subcommand"], dir.path()).unwrap_err();
        assert!(matches!(err, ReleaseError::ExternalTool { .. }));
    }
}
