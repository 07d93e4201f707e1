use crate::error::Result;
use crate::git::command::run_tool;
use crate::git::{normalize_listed_tag, ReleaseLister};
use std::path::PathBuf;
use tracing::info;

/// `gh` arguments printing the tag name of the newest release
pub const GH_LATEST_RELEASE_ARGS: [&str; 6] = [
    "release",
    "list",
    "--json",
    "tagName",
    "--jq",
    ".[0] | .tagName",
];

/// Lists releases through the GitHub CLI
pub struct GhReleaseLister {
    dir: PathBuf,
}

impl GhReleaseLister {
    /// Lister for the repository checked out at `dir`
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        GhReleaseLister { dir: dir.into() }
    }
}

impl ReleaseLister for GhReleaseLister {
    fn latest_tag(&self) -> Result<Option<String>> {
        let output = run_tool("gh", &GH_LATEST_RELEASE_ARGS, &self.dir)?;
        let latest = normalize_listed_tag(&String::from_utf8_lossy(&output.stdout));
        info!(latest = ?latest, "gh release list");
        Ok(latest)
    }
}
