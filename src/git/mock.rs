use crate::error::{ReleaseError, Result};
use crate::git::{PublishCommand, Publisher, ReleaseLister};
use std::cell::RefCell;

/// Mock lister for testing without calling out to `gh` or git
#[derive(Debug, Clone, Default)]
pub struct MockReleaseLister {
    latest: Option<String>,
    failure: Option<String>,
}

impl MockReleaseLister {
    /// A lister with no releases
    pub fn new() -> Self {
        Self::default()
    }

    /// A lister whose latest release is `tag`
    pub fn with_latest(tag: impl Into<String>) -> Self {
        MockReleaseLister {
            latest: Some(tag.into()),
            failure: None,
        }
    }

    /// A lister that fails like a missing or broken tool
    pub fn failing(message: impl Into<String>) -> Self {
        MockReleaseLister {
            latest: None,
            failure: Some(message.into()),
        }
    }
}

impl ReleaseLister for MockReleaseLister {
    fn latest_tag(&self) -> Result<Option<String>> {
        match &self.failure {
            Some(message) => Err(ReleaseError::external("mock", message.clone())),
            None => Ok(self.latest.clone()),
        }
    }
}

/// Mock publisher recording every publish request
#[derive(Debug, Default)]
pub struct MockPublisher {
    published: RefCell<Vec<PublishCommand>>,
    failure: Option<String>,
}

impl MockPublisher {
    /// A publisher that always succeeds
    pub fn new() -> Self {
        Self::default()
    }

    /// A publisher that always fails
    pub fn failing(message: impl Into<String>) -> Self {
        MockPublisher {
            published: RefCell::new(Vec::new()),
            failure: Some(message.into()),
        }
    }

    /// Commands published so far
    pub fn published(&self) -> Vec<PublishCommand> {
        self.published.borrow().clone()
    }
}

impl Publisher for MockPublisher {
    fn publish(&self, command: &PublishCommand) -> Result<String> {
        if let Some(message) = &self.failure {
            return Err(ReleaseError::external("mock", message.clone()));
        }
        self.published.borrow_mut().push(command.clone());
        Ok(format!("published {}", command.tag))
    }
}
