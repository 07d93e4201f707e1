//! Release collaborators abstraction layer
//!
//! This module provides trait-based abstractions over the two external
//! collaborators of a release: finding the latest published tag and
//! publishing a new one. Implementations include the command line tools,
//! libgit2 and mock implementations for testing.
//!
//! # Overview
//!
//! - [ReleaseLister]: returns the most recent release tag, if any
//!   - [gh::GhReleaseLister]: asks the hosting service via `gh release list`
//!   - [repository::Git2Repository]: reads local tags with the `git2` crate
//! - [Publisher]: creates the tag at HEAD and pushes it with the branch
//!   - [command::CommandPublisher]: runs the `git` client
//!   - [repository::Git2Repository]: tags and pushes with the `git2` crate
//! - [mock]: in-memory implementations of both traits
//!
//! # Usage
//!
//! The workflow depends on the traits rather than concrete implementations:
//!
//! ```rust
//! # use calver_release::git::{PublishCommand, Publisher, ReleaseLister};
//! # fn example<L: ReleaseLister, P: Publisher>(lister: &L, publisher: &P) -> calver_release::Result<()> {
//! if let Some(latest) = lister.latest_tag()? {
//!     println!("latest tag: {}", latest);
//! }
//! let output = publisher.publish(&PublishCommand::new("24.06.1", "origin", "main"))?;
//! # Ok(())
//! # }
//! ```

pub mod command;
pub mod gh;
pub mod mock;
pub mod repository;

pub use command::CommandPublisher;
pub use gh::GhReleaseLister;
pub use mock::{MockPublisher, MockReleaseLister};
pub use repository::Git2Repository;

use crate::error::Result;
use std::fmt;

/// Source of the most recent release tag
pub trait ReleaseLister {
    /// Get the most recent release tag
    ///
    /// # Returns
    /// * `Ok(Some(String))` - Trimmed name of the latest tag
    /// * `Ok(None)` - If nothing has been released yet
    /// * `Err` - If the underlying tool is unavailable or fails
    fn latest_tag(&self) -> Result<Option<String>>;
}

/// Creates a release tag and pushes it to the remote
pub trait Publisher {
    /// Tag HEAD with `command.tag`, then push `command.branch` and the tag to
    /// `command.remote`
    ///
    /// # Returns
    /// * `Ok(String)` - Output of the operation, for display
    /// * `Err` - If tagging or pushing fails
    fn publish(&self, command: &PublishCommand) -> Result<String>;
}

/// A tag-and-push request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PublishCommand {
    pub tag: String,
    pub remote: String,
    pub branch: String,
}

impl PublishCommand {
    pub fn new(tag: impl Into<String>, remote: impl Into<String>, branch: impl Into<String>) -> Self {
        PublishCommand {
            tag: tag.into(),
            remote: remote.into(),
            branch: branch.into(),
        }
    }

    /// Arguments of the `git tag` invocation
    pub fn tag_args(&self) -> Vec<&str> {
        vec!["tag", self.tag.as_str()]
    }

    /// Arguments of the `git push` invocation
    pub fn push_args(&self) -> Vec<&str> {
        vec![
            "push",
            self.remote.as_str(),
            self.branch.as_str(),
            self.tag.as_str(),
        ]
    }
}

/// Renders the equivalent shell command line, shown in dry-run mode
impl fmt::Display for PublishCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "git {} && git {}",
            self.tag_args().join(" "),
            self.push_args().join(" ")
        )
    }
}

/// Trimmed lister output, `None` when nothing was released
pub(crate) fn normalize_listed_tag(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() || trimmed == "null" {
        None
    } else {
        Some(trimmed.to_string())
    }
}
