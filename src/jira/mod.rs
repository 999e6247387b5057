//! Jira REST access
//!
//! [IssueClient] is the seam the create command depends on. [JiraClient]
//! talks to a real Jira instance over HTTPS; [MockIssueClient] serves canned
//! issues in tests.

pub mod client;
pub mod mock;
pub mod types;

pub use client::JiraClient;
pub use mock::MockIssueClient;

use crate::domain::IssueData;
use crate::error::Result;

/// Jira REST API version used for every request
pub const API_VERSION: &str = "3";

/// Looks up issues on one Jira board
pub trait IssueClient {
    /// Fetch the summary and type of issue `code`.
    ///
    /// # Returns
    /// * `Ok(IssueData)` - With `issue_type` lowercased
    /// * `Err(AuthExpired)` - Credentials rejected (HTTP 401)
    /// * `Err(IssueNotFound)` - No such issue (HTTP 404)
    /// * `Err(ConnectionFailed)` - The board could not be reached
    fn fetch_issue(&self, code: &str) -> Result<IssueData>;

    /// Check that the board is reachable and accepts the credentials.
    fn verify_credentials(&self) -> Result<()>;
}
