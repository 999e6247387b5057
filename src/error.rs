use std::path::PathBuf;

use thiserror::Error;

use crate::git::WorkflowFailure;

/// Unified error type for j2g operations
#[derive(Error, Debug)]
pub enum J2gError {
    #[error("Configuration store unavailable at {path}: {reason}")]
    StorageUnavailable { path: PathBuf, reason: String },

    #[error("Configuration file {path} is malformed ({reason}); run `j2g config --reset` to start over")]
    CorruptConfig { path: PathBuf, reason: String },

    #[error("No board is configured for project '{0}'; run `j2g config` first")]
    NoConfigForProject(String),

    #[error("Board '{0}' is already configured")]
    BoardAlreadyConfigured(String),

    #[error("No boards configured yet; run `j2g config` first")]
    NoBoards,

    #[error("Jira rejected the credentials for '{0}'; the token is invalid or expired, run `j2g config --token`")]
    AuthExpired(String),

    #[error("Issue '{0}' not found")]
    IssueNotFound(String),

    #[error("Cannot reach '{url}': {reason}")]
    ConnectionFailed { url: String, reason: String },

    #[error("Unexpected response from Jira (HTTP {status}): {reason}")]
    UnexpectedResponse { status: u16, reason: String },

    #[error("Source branch '{0}' does not exist locally or on the remote")]
    SourceBranchNotFound(String),

    #[error("Branch '{0}' already exists")]
    BranchAlreadyExists(String),

    #[error("Failed to create branch '{branch}': {reason}")]
    BranchCreationFailed { branch: String, reason: String },

    #[error("Git operation failed: {0}")]
    Git(String),

    #[error(transparent)]
    Workflow(#[from] Box<WorkflowFailure>),

    #[error("Clipboard error: {0}")]
    Clipboard(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience type alias for Results in j2g
pub type Result<T> = std::result::Result<T, J2gError>;

impl J2gError {
    /// Create a configuration error with context
    pub fn config(msg: impl Into<String>) -> Self {
        J2gError::Config(msg.into())
    }

    /// Create a git error with context
    pub fn git(msg: impl Into<String>) -> Self {
        J2gError::Git(msg.into())
    }

    /// Create a clipboard error with context
    pub fn clipboard(msg: impl Into<String>) -> Self {
        J2gError::Clipboard(msg.into())
    }

    pub fn storage(path: impl Into<PathBuf>, reason: impl ToString) -> Self {
        J2gError::StorageUnavailable {
            path: path.into(),
            reason: reason.to_string(),
        }
    }

    pub fn corrupt(path: impl Into<PathBuf>, reason: impl ToString) -> Self {
        J2gError::CorruptConfig {
            path: path.into(),
            reason: reason.to_string(),
        }
    }
}
