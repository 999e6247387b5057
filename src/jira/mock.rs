use std::collections::HashMap;

use super::IssueClient;
use crate::domain::IssueData;
use crate::error::{J2gError, Result};

/// Issue client serving canned issues, for testing without a Jira instance
#[derive(Debug, Default)]
pub struct MockIssueClient {
    issues: HashMap<String, (String, String)>,
    expired: bool,
    offline: bool,
}

impl MockIssueClient {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an issue with its summary and type name as Jira reports them
    pub fn with_issue(mut self, code: &str, summary: &str, issue_type: &str) -> Self {
        self.issues
            .insert(code.to_string(), (summary.to_string(), issue_type.to_string()));
        self
    }

    /// Reject every request as unauthorized
    pub fn expired(mut self) -> Self {
        self.expired = true;
        self
    }

    /// Fail every request as unreachable
    pub fn offline(mut self) -> Self {
        self.offline = true;
        self
    }

    fn check(&self) -> Result<()> {
        if self.offline {
            return Err(J2gError::ConnectionFailed {
                url: "mock".to_string(),
                reason: "offline".to_string(),
            });
        }
        if self.expired {
            return Err(J2gError::AuthExpired("mock".to_string()));
        }
        Ok(())
    }
}

impl IssueClient for MockIssueClient {
    fn fetch_issue(&self, code: &str) -> Result<IssueData> {
        self.check()?;
        self.issues
            .get(code)
            .map(|(summary, issue_type)| IssueData::new(code, summary.clone(), issue_type))
            .ok_or_else(|| J2gError::IssueNotFound(code.to_string()))
    }

    fn verify_credentials(&self) -> Result<()> {
        self.check()
    }
}
