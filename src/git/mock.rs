use std::collections::HashSet;
use std::sync::Mutex;

use crate::error::{J2gError, Result};
use crate::git::GitOperations;

/// One recorded invocation on a [`MockGit`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GitCall {
    Stash,
    Checkout(String),
    IsRemoteBranch(String, String),
    Pull(String, String),
    CreateBranch(String),
    IsLocalBranch(String),
}

#[derive(Debug, Default)]
struct MockState {
    local: HashSet<String>,
    remote: HashSet<String>,
    head: Option<String>,
    calls: Vec<GitCall>,
}

/// Mock repository for testing without running git
///
/// Checkout succeeds for any branch known locally or remotely; creating a
/// branch fails when the name already exists locally.
#[derive(Debug, Default)]
pub struct MockGit {
    state: Mutex<MockState>,
    local_changes: bool,
    fail_stash: bool,
    fail_pull: bool,
    fail_create: Option<String>,
}

impl MockGit {
    /// Create a new empty mock repository
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_local_branch(self, branch: &str) -> Self {
        self.lock().local.insert(branch.to_string());
        self
    }

    pub fn with_remote_branch(self, branch: &str) -> Self {
        self.lock().remote.insert(branch.to_string());
        self
    }

    /// Give the working tree uncommitted changes for `stash` to save
    pub fn with_local_changes(mut self) -> Self {
        self.local_changes = true;
        self
    }

    /// Make `git stash` fail
    pub fn failing_stash(mut self) -> Self {
        self.fail_stash = true;
        self
    }

    /// Make `git pull` fail
    pub fn failing_pull(mut self) -> Self {
        self.fail_pull = true;
        self
    }

    /// Make branch creation fail with `reason` even for new names
    pub fn failing_create(mut self, reason: &str) -> Self {
        self.fail_create = Some(reason.to_string());
        self
    }

    /// Every call made so far, in order
    pub fn calls(&self) -> Vec<GitCall> {
        self.lock().calls.clone()
    }

    pub fn head(&self) -> Option<String> {
        self.lock().head.clone()
    }

    pub fn pulled(&self) -> bool {
        self.calls().iter().any(|c| matches!(c, GitCall::Pull(..)))
    }

    pub fn created(&self) -> bool {
        self.calls()
            .iter()
            .any(|c| matches!(c, GitCall::CreateBranch(_)))
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, MockState> {
        self.state.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    fn record(&self, call: GitCall) {
        self.lock().calls.push(call);
    }
}

impl GitOperations for MockGit {
    fn stash(&self) -> Result<bool> {
        self.record(GitCall::Stash);
        if self.fail_stash {
            return Err(J2gError::git("git stash failed: cannot stash"));
        }
        Ok(self.local_changes)
    }

    fn checkout(&self, branch: &str) -> Result<()> {
        self.record(GitCall::Checkout(branch.to_string()));
        let mut state = self.lock();
        if !state.local.contains(branch) && !state.remote.contains(branch) {
            return Err(J2gError::git(format!(
                "git checkout {} failed: pathspec '{}' did not match",
                branch, branch
            )));
        }
        state.local.insert(branch.to_string());
        state.head = Some(branch.to_string());
        Ok(())
    }

    fn is_remote_branch(&self, remote: &str, branch: &str) -> bool {
        self.record(GitCall::IsRemoteBranch(remote.to_string(), branch.to_string()));
        self.lock().remote.contains(branch)
    }

    fn pull(&self, remote: &str, branch: &str) -> Result<()> {
        self.record(GitCall::Pull(remote.to_string(), branch.to_string()));
        if self.fail_pull {
            return Err(J2gError::git("git pull failed: merge conflict"));
        }
        Ok(())
    }

    fn create_branch(&self, branch: &str) -> Result<()> {
        self.record(GitCall::CreateBranch(branch.to_string()));
        let mut state = self.lock();
        if state.local.contains(branch) {
            return Err(J2gError::git(format!(
                "git checkout -b {} failed: a branch named '{}' already exists",
                branch, branch
            )));
        }
        if let Some(reason) = &self.fail_create {
            return Err(J2gError::git(reason.clone()));
        }
        state.local.insert(branch.to_string());
        state.head = Some(branch.to_string());
        Ok(())
    }

    fn is_local_branch(&self, branch: &str) -> Result<bool> {
        self.record(GitCall::IsLocalBranch(branch.to_string()));
        Ok(self.lock().local.contains(branch))
    }
}
