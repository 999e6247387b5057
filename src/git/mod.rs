//! Git operations abstraction layer
//!
//! This module provides a trait-based abstraction over the handful of git
//! commands the branch workflow needs, so the workflow can run against a real
//! repository or a scripted mock in tests.
//!
//! # Overview
//!
//! - [GitOperations]: one method per git invocation
//! - [command::CommandGit]: shells out to the `git` binary in a working directory
//! - [mock::MockGit]: in-memory branches with a call log, for tests
//! - [workflow::GitWorkflow]: the ordered stash / checkout / pull / create sequence
//!
//! # Usage
//!
//! ```rust
//! # use j2g::git::{GitOperations, GitWorkflow, MockGit};
//! let git = MockGit::new().with_local_branch("develop");
//! let report = GitWorkflow::new(&git).run("develop", "feature/ABC-1-login").unwrap();
//! assert!(!report.pulled);
//! ```

pub mod command;
pub mod mock;
pub mod workflow;

pub use command::CommandGit;
pub use mock::{GitCall, MockGit};
pub use workflow::{GitWorkflow, WorkflowFailure, WorkflowReport, WorkflowState};

use crate::error::Result;

/// Remote every probe and pull goes against
pub const DEFAULT_REMOTE: &str = "origin";

/// Git commands used by the branch workflow
///
/// Each method maps to exactly one git invocation. Failures surface as
/// [crate::error::J2gError::Git] carrying the command's stderr; the workflow
/// decides how each failure is reported to the user.
///
/// ## Implementations
///
/// - [CommandGit](command::CommandGit): `git` subprocesses
/// - [MockGit](mock::MockGit): scripted branches for tests
pub trait GitOperations: Send + Sync {
    /// Stash the working tree (`git stash`).
    ///
    /// # Returns
    /// * `Ok(true)` - A new stash entry holds the local changes
    /// * `Ok(false)` - The tree was clean and nothing was stashed
    fn stash(&self) -> Result<bool>;

    /// Switch to an existing branch (`git checkout <branch>`).
    ///
    /// # Returns
    /// * `Ok(())` - HEAD now points at `branch`
    /// * `Err` - The branch is unknown locally and on the remote, or checkout failed
    fn checkout(&self, branch: &str) -> Result<()>;

    /// Whether `branch` exists on `remote`
    /// (`git ls-remote --exit-code --heads <remote> <branch>`).
    ///
    /// Never fails: any error, including an unreachable remote, reads as `false`.
    fn is_remote_branch(&self, remote: &str, branch: &str) -> bool;

    /// Bring the current branch up to date (`git pull <remote> <branch>`).
    fn pull(&self, remote: &str, branch: &str) -> Result<()>;

    /// Create `branch` from HEAD and switch to it (`git checkout -b <branch>`).
    fn create_branch(&self, branch: &str) -> Result<()>;

    /// Whether a local branch named `branch` exists (`git branch --list <branch>`).
    fn is_local_branch(&self, branch: &str) -> Result<bool>;
}
