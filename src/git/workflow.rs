//! Branch creation sequence
//!
//! ```text
//! Start -> Stashed -> CheckedOutSource -> Pulled | SkipPull -> BranchCreated -> Done
//! ```
//!
//! Steps run strictly in order. A failure stops the sequence where it is:
//! nothing is unstashed and the previous branch is not restored. The
//! [`WorkflowFailure`] records the last state reached so the caller can tell
//! the user what their repository looks like now.

use std::fmt;

use log::{debug, info};
use thiserror::Error;

use super::{GitOperations, DEFAULT_REMOTE};
use crate::boundary::WorkflowNotice;
use crate::error::J2gError;

/// Points the workflow can reach
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WorkflowState {
    Start,
    Stashed,
    CheckedOutSource,
    Pulled,
    SkipPull,
    BranchCreated,
    Done,
}

impl fmt::Display for WorkflowState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            WorkflowState::Start => "start",
            WorkflowState::Stashed => "stashed",
            WorkflowState::CheckedOutSource => "checked out source",
            WorkflowState::Pulled => "pulled",
            WorkflowState::SkipPull => "pull skipped",
            WorkflowState::BranchCreated => "branch created",
            WorkflowState::Done => "done",
        };
        f.write_str(name)
    }
}

/// Outcome of a completed workflow
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkflowReport {
    pub branch: String,
    pub source: String,
    /// Whether the source branch was pulled from the remote
    pub pulled: bool,
    pub state: WorkflowState,
}

impl WorkflowReport {
    pub fn notices(&self) -> Vec<WorkflowNotice> {
        if self.pulled {
            Vec::new()
        } else {
            vec![WorkflowNotice::PullSkipped {
                source: self.source.clone(),
                remote: DEFAULT_REMOTE.to_string(),
            }]
        }
    }
}

/// A workflow that stopped before `Done`
#[derive(Debug, Error)]
#[error("{error}")]
pub struct WorkflowFailure {
    /// Last state successfully reached
    pub reached: WorkflowState,
    /// Whether this run created a stash entry
    pub stashed: bool,
    pub source_branch: String,
    #[source]
    pub error: J2gError,
}

impl WorkflowFailure {
    /// What the repository was left with, for the user to clean up by hand
    pub fn notices(&self) -> Vec<WorkflowNotice> {
        let mut notices = Vec::new();
        if self.stashed {
            notices.push(WorkflowNotice::ChangesStashed);
        }
        if !matches!(self.reached, WorkflowState::Start | WorkflowState::Stashed) {
            notices.push(WorkflowNotice::LeftOnBranch {
                branch: self.source_branch.clone(),
            });
        }
        notices
    }
}

/// Drives [`GitOperations`] through the branch creation sequence
pub struct GitWorkflow<'a, G: GitOperations + ?Sized> {
    git: &'a G,
    remote: String,
    state: WorkflowState,
    stashed: bool,
}

impl<'a, G: GitOperations + ?Sized> GitWorkflow<'a, G> {
    pub fn new(git: &'a G) -> Self {
        GitWorkflow {
            git,
            remote: DEFAULT_REMOTE.to_string(),
            state: WorkflowState::Start,
            stashed: false,
        }
    }

    /// Stash, switch to `source`, update it from the remote when it is
    /// tracked there, then create and switch to `branch`.
    ///
    /// # Returns
    /// * `Ok(WorkflowReport)` - `branch` exists and is checked out
    /// * `Err(WorkflowFailure)` - With `error` one of:
    ///   - `SourceBranchNotFound` - `source` cannot be checked out
    ///   - `BranchAlreadyExists` - `branch` is already a local branch
    ///   - `BranchCreationFailed` - any other creation failure
    ///   - `Git` - stash or pull failed
    pub fn run(mut self, source: &str, branch: &str) -> Result<WorkflowReport, WorkflowFailure> {
        info!("creating {} from {}", branch, source);

        self.stashed = self.git.stash().map_err(|e| self.fail(source, e))?;
        if !self.stashed {
            debug!("nothing to stash");
        }
        self.advance(WorkflowState::Stashed);

        if let Err(e) = self.git.checkout(source) {
            debug!("checkout {} failed: {}", source, e);
            return Err(self.fail(source, J2gError::SourceBranchNotFound(source.to_string())));
        }
        self.advance(WorkflowState::CheckedOutSource);

        let pulled = if self.git.is_remote_branch(&self.remote, source) {
            self.git
                .pull(&self.remote, source)
                .map_err(|e| self.fail(source, e))?;
            self.advance(WorkflowState::Pulled);
            true
        } else {
            self.advance(WorkflowState::SkipPull);
            false
        };

        if let Err(e) = self.git.create_branch(branch) {
            let error = self.classify_create_failure(branch, e);
            return Err(self.fail(source, error));
        }
        self.advance(WorkflowState::BranchCreated);
        self.advance(WorkflowState::Done);

        Ok(WorkflowReport {
            branch: branch.to_string(),
            source: source.to_string(),
            pulled,
            state: self.state,
        })
    }

    fn classify_create_failure(&self, branch: &str, error: J2gError) -> J2gError {
        match self.git.is_local_branch(branch) {
            Ok(true) => J2gError::BranchAlreadyExists(branch.to_string()),
            Ok(false) | Err(_) => J2gError::BranchCreationFailed {
                branch: branch.to_string(),
                reason: error.to_string(),
            },
        }
    }

    fn advance(&mut self, next: WorkflowState) {
        debug!("workflow: {} -> {}", self.state, next);
        self.state = next;
    }

    fn fail(&self, source: &str, error: J2gError) -> WorkflowFailure {
        WorkflowFailure {
            reached: self.state,
            stashed: self.stashed,
            source_branch: source.to_string(),
            error,
        }
    }
}
