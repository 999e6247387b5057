use std::path::PathBuf;
use std::process::{Command, Output};

use log::debug;

use super::GitOperations;
use crate::error::{J2gError, Result};

/// Runs the `git` binary inside a working directory
pub struct CommandGit {
    workdir: PathBuf,
}

impl CommandGit {
    pub fn new(workdir: impl Into<PathBuf>) -> Self {
        CommandGit {
            workdir: workdir.into(),
        }
    }

    fn run(&self, args: &[&str]) -> Result<Output> {
        debug!("git {}", args.join(" "));
        Command::new("git")
            .args(args)
            .current_dir(&self.workdir)
            .output()
            .map_err(|e| J2gError::git(format!("cannot spawn git {}: {}", args.join(" "), e)))
    }

    /// Commit id of the newest stash entry, if any
    fn stash_head(&self) -> Option<String> {
        let output = self.run(&["rev-parse", "-q", "--verify", "refs/stash"]).ok()?;
        if !output.status.success() {
            return None;
        }
        Some(String::from_utf8_lossy(&output.stdout).trim().to_string())
    }

    fn run_checked(&self, args: &[&str]) -> Result<Output> {
        let output = self.run(args)?;
        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            debug!("git {} exited with {}", args.join(" "), output.status);
            return Err(J2gError::git(format!(
                "git {} failed: {}",
                args.join(" "),
                stderr.trim()
            )));
        }
        Ok(output)
    }
}

impl GitOperations for CommandGit {
    fn stash(&self) -> Result<bool> {
        let before = self.stash_head();
        self.run_checked(&["stash"])?;
        let after = self.stash_head();
        Ok(after.is_some() && after != before)
    }

    fn checkout(&self, branch: &str) -> Result<()> {
        self.run_checked(&["checkout", branch]).map(|_| ())
    }

    fn is_remote_branch(&self, remote: &str, branch: &str) -> bool {
        match self.run(&["ls-remote", "--exit-code", "--heads", remote, branch]) {
            Ok(output) => output.status.success(),
            Err(e) => {
                debug!("treating {} as local-only: {}", branch, e);
                false
            }
        }
    }

    fn pull(&self, remote: &str, branch: &str) -> Result<()> {
        self.run_checked(&["pull", remote, branch]).map(|_| ())
    }

    fn create_branch(&self, branch: &str) -> Result<()> {
        self.run_checked(&["checkout", "-b", branch]).map(|_| ())
    }

    fn is_local_branch(&self, branch: &str) -> Result<bool> {
        let output = self.run_checked(&["branch", "--list", branch])?;
        Ok(!String::from_utf8_lossy(&output.stdout).trim().is_empty())
    }
}
