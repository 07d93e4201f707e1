use thiserror::Error;

/// Unified error type for calver-release operations
#[derive(Error, Debug)]
pub enum ReleaseError {
    #[error("Malformed tag: {0}")]
    MalformedTag(String),

    #[error("No prior release found and seeding of the first release is disabled")]
    NoPriorRelease,

    #[error("External tool '{tool}' failed: {message}")]
    ExternalTool { tool: String, message: String },

    #[error("Git operation failed: {0}")]
    Git(#[from] git2::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Tag error: {0}")]
    Tag(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience type alias for Results in calver-release
pub type Result<T> = std::result::Result<T, ReleaseError>;

impl ReleaseError {
    /// Create a malformed tag error with context
    pub fn malformed(msg: impl Into<String>) -> Self {
        ReleaseError::MalformedTag(msg.into())
    }

    /// Create an external tool error for the named program
    pub fn external(tool: impl Into<String>, msg: impl Into<String>) -> Self {
        ReleaseError::ExternalTool {
            tool: tool.into(),
            message: msg.into(),
        }
    }

    /// Create a configuration error with context
    pub fn config(msg: impl Into<String>) -> Self {
        ReleaseError::Config(msg.into())
    }

    /// Create a tag error with context
    pub fn tag(msg: impl Into<String>) -> Self {
        ReleaseError::Tag(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = ReleaseError::config("test config issue");
        assert_eq!(err.to_string(), "Configuration error: test config issue");
    }

    #[test]
    fn test_error_from_io() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: ReleaseError = io_err.into();
        assert!(err.to_string().contains("I/O error"));
    }

    #[test]
    fn test_external_tool_names_the_tool() {
        let err = ReleaseError::external("gh", "gh: command not found");
        let msg = err.to_string();
        assert!(msg.starts_with("External tool 'gh' failed"));
        assert!(msg.contains("command not found"));
    }

    #[test]
    fn test_no_prior_release_message() {
        assert!(ReleaseError::NoPriorRelease
            .to_string()
            .contains("No prior release"));
    }

    #[test]
    fn test_error_messages_are_descriptive() {
        let error_pairs = vec![
            (ReleaseError::malformed("x"), "Malformed tag"),
            (ReleaseError::config("x"), "Configuration error"),
            (ReleaseError::tag("x"), "Tag error"),
        ];

        for (err, expected_prefix) in error_pairs {
            let msg = err.to_string();
            assert!(
                msg.starts_with(expected_prefix),
                "Error message should start with '{}', but got '{}'",
                expected_prefix,
                msg
            );
        }
    }
}
