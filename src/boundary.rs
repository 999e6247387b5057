use std::fmt;

/// Non-fatal facts about the repository that the user should know after a
/// branch workflow, successful or not.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WorkflowNotice {
    /// The source branch is not on the remote, so it was used as-is
    PullSkipped { source: String, remote: String },
    /// Local changes were stashed and not restored
    ChangesStashed,
    /// The workflow stopped with this branch checked out
    LeftOnBranch { branch: String },
}

impl fmt::Display for WorkflowNotice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WorkflowNotice::PullSkipped { source, remote } => {
                write!(
                    f,
                    "Branch '{}' is not on '{}'; created from the local copy without pulling",
                    source, remote
                )
            }
            WorkflowNotice::ChangesStashed => {
                write!(
                    f,
                    "Your local changes are still stashed; run `git stash pop` to restore them"
                )
            }
            WorkflowNotice::LeftOnBranch { branch } => {
                write!(f, "The repository is now on branch '{}'", branch)
            }
        }
    }
}
