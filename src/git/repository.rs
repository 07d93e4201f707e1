use crate::domain::{CalverTag, TagPattern};
use crate::error::{ReleaseError, Result};
use crate::git::{PublishCommand, Publisher, ReleaseLister};
use git2::{Cred, CredentialType, PushOptions, RemoteCallbacks, Repository as Git2Repo};
use std::cell::RefCell;
use std::path::Path;
use tracing::{debug, info, warn};

/// Wrapper around git2::Repository listing and publishing calendar tags
pub struct Git2Repository {
    repo: Git2Repo,
    pattern: TagPattern,
}

impl Git2Repository {
    /// Open or discover a git repository
    pub fn open<P: AsRef<Path>>(path: P, pattern: TagPattern) -> Result<Self> {
        let repo = Git2Repo::discover(path)?;

        Ok(Git2Repository { repo, pattern })
    }

    /// Create from existing git2::Repository
    pub fn from_git2(repo: Git2Repo, pattern: TagPattern) -> Self {
        Git2Repository { repo, pattern }
    }

    /// All tag names in the repository
    pub fn list_tags(&self) -> Result<Vec<String>> {
        let tags = self.repo.tag_names(None)?;

        Ok(tags.iter().flatten().map(|s| s.to_string()).collect())
    }

    /// Tags that are calendar releases under the configured pattern, oldest first
    pub fn calver_tags(&self) -> Result<Vec<(CalverTag, String)>> {
        let mut releases = Vec::new();

        for name in self.list_tags()? {
            if !self.pattern.matches(&name)? {
                debug!("Skipping tag {}", name);
                continue;
            }

            let parsed = self
                .pattern
                .strip(&name)
                .ok_or_else(|| ReleaseError::tag(format!("Cannot strip pattern from '{}'", name)))
                .and_then(CalverTag::parse);

            match parsed {
                Ok(tag) => releases.push((tag, name)),
                Err(e) => warn!("Ignoring tag {}: {}", name, e),
            }
        }

        releases.sort();
        Ok(releases)
    }

    fn create_tag_at_head(&self, name: &str) -> Result<()> {
        let head = self
            .repo
            .head()
            .and_then(|head| head.peel(git2::ObjectType::Commit))
            .map_err(|e| ReleaseError::tag(format!("Cannot resolve HEAD: {}", e)))?;

        self.repo
            .tag_lightweight(name, &head, false)
            .map_err(|e| ReleaseError::tag(format!("Cannot create tag '{}': {}", name, e)))?;

        info!("Created tag {} at {}", name, head.id());
        Ok(())
    }

    fn push(&self, command: &PublishCommand) -> Result<()> {
        let mut remote = self.repo.find_remote(&command.remote).map_err(|e| {
            ReleaseError::external("git", format!("Cannot find remote '{}': {}", command.remote, e))
        })?;

        // The server may refuse single refs while the push itself succeeds
        let rejected = RefCell::new(Vec::new());

        let mut callbacks = credential_callbacks();
        callbacks.push_update_reference(|refname, status| {
            if let Some(reason) = status {
                warn!("Remote rejected {}: {}", refname, reason);
                rejected
                    .borrow_mut()
                    .push((refname.to_string(), reason.to_string()));
            }
            Ok(())
        });

        let mut push_options = PushOptions::new();
        push_options.remote_callbacks(callbacks);

        let refspecs = [
            format!("refs/heads/{0}:refs/heads/{0}", command.branch),
            format!("refs/tags/{0}:refs/tags/{0}", command.tag),
        ];

        remote
            .push(&refspecs, Some(&mut push_options))
            .map_err(|e| ReleaseError::external("git", format!("Push failed: {}", e)))?;

        let rejected = rejected.borrow();
        check_push_statuses(&command.remote, &rejected)
    }
}

/// Fails when the remote refused any of the pushed refs
fn check_push_statuses(remote: &str, rejected: &[(String, String)]) -> Result<()> {
    if rejected.is_empty() {
        return Ok(());
    }

    let details = rejected
        .iter()
        .map(|(refname, reason)| format!("{} ({})", refname, reason))
        .collect::<Vec<_>>()
        .join(", ");

    Err(ReleaseError::external(
        "git",
        format!("Remote '{}' rejected {}", remote, details),
    ))
}

/// SSH keys from ~/.ssh, then the SSH agent, then default credentials
fn credential_callbacks<'a>() -> RemoteCallbacks<'a> {
    let mut callbacks = RemoteCallbacks::new();
    callbacks.credentials(|_url, username_from_url, allowed_types| {
        let username = username_from_url.unwrap_or("git");

        if allowed_types.contains(CredentialType::SSH_KEY) {
            if let Some(home) = dirs::home_dir() {
                for key in ["id_ed25519", "id_rsa", "id_ecdsa"] {
                    let path = home.join(".ssh").join(key);
                    if path.exists() {
                        if let Ok(cred) = Cred::ssh_key(username, None, &path, None) {
                            return Ok(cred);
                        }
                    }
                }
            }

            if let Ok(cred) = Cred::ssh_key_from_agent(username) {
                return Ok(cred);
            }
        }

        Cred::default()
    });
    callbacks
}

impl ReleaseLister for Git2Repository {
    fn latest_tag(&self) -> Result<Option<String>> {
        let latest = self.calver_tags()?.pop().map(|(_, name)| name);
        info!(latest = ?latest, "local calendar tags");
        Ok(latest)
    }
}

impl Publisher for Git2Repository {
    fn publish(&self, command: &PublishCommand) -> Result<String> {
        self.create_tag_at_head(&command.tag)?;
        self.push(command)?;

        Ok(format!(
            "Pushed {} and tag {} to {}",
            command.branch, command.tag, command.remote
        ))
    }
}
