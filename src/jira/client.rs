use log::{debug, info};
use reqwest::blocking::{Client, Response};
use reqwest::{StatusCode, Url};

use super::types::JiraIssueResponse;
use super::{IssueClient, API_VERSION};
use crate::config::BoardConfig;
use crate::domain::IssueData;
use crate::error::{J2gError, Result};

/// Blocking Jira REST client for one board
pub struct JiraClient {
    client: Client,
    base_url: String,
    email: String,
    token: String,
}

impl JiraClient {
    pub fn new(base_url: &str, email: &str, token: &str) -> Self {
        JiraClient {
            client: Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
            email: email.to_string(),
            token: token.to_string(),
        }
    }

    pub fn for_board(board: &BoardConfig) -> Self {
        Self::new(&board.url, &board.email, &board.token)
    }

    /// Replace the underlying HTTP client (proxy or timeout settings)
    pub fn with_http_client(mut self, client: Client) -> Self {
        self.client = client;
        self
    }

    /// `{base}/rest/api/{version}/{segments..}`, each segment percent-encoded
    fn endpoint(&self, segments: &[&str]) -> Result<Url> {
        let invalid = |reason: String| J2gError::ConnectionFailed {
            url: self.base_url.clone(),
            reason,
        };
        let mut url = Url::parse(&self.base_url)
            .map_err(|e| invalid(format!("invalid board URL: {}", e)))?;
        url.path_segments_mut()
            .map_err(|_| invalid("board URL cannot have a path".to_string()))?
            .pop_if_empty()
            .extend(["rest", "api", API_VERSION])
            .extend(segments);
        Ok(url)
    }

    fn get(&self, url: Url) -> Result<Response> {
        debug!("GET {}", url);
        self.client
            .get(url)
            .basic_auth(&self.email, Some(&self.token))
            .header("Accept", "application/json")
            .send()
            .map_err(|e| J2gError::ConnectionFailed {
                url: self.base_url.clone(),
                reason: e.to_string(),
            })
    }
}

/// Map a non-200 status to the error the user sees.
fn status_error(status: StatusCode, base_url: &str, code: Option<&str>) -> J2gError {
    match status {
        StatusCode::UNAUTHORIZED => J2gError::AuthExpired(base_url.to_string()),
        StatusCode::NOT_FOUND => match code {
            Some(code) => J2gError::IssueNotFound(code.to_string()),
            None => J2gError::ConnectionFailed {
                url: base_url.to_string(),
                reason: "not a Jira REST endpoint (HTTP 404)".to_string(),
            },
        },
        other => J2gError::UnexpectedResponse {
            status: other.as_u16(),
            reason: other
                .canonical_reason()
                .unwrap_or("unknown status")
                .to_string(),
        },
    }
}

impl IssueClient for JiraClient {
    fn fetch_issue(&self, code: &str) -> Result<IssueData> {
        let mut url = self.endpoint(&["issue", code])?;
        url.set_query(Some("fields=summary,issuetype"));
        let response = self.get(url)?;

        let status = response.status();
        if status != StatusCode::OK {
            debug!("issue {} lookup returned {}", code, status);
            return Err(status_error(status, &self.base_url, Some(code)));
        }

        let body: JiraIssueResponse =
            response
                .json()
                .map_err(|e| J2gError::UnexpectedResponse {
                    status: status.as_u16(),
                    reason: format!("cannot decode issue: {}", e),
                })?;
        info!("fetched {} from {}", code, self.base_url);
        Ok(body.into_issue(code))
    }

    fn verify_credentials(&self) -> Result<()> {
        let response = self.get(self.endpoint(&["myself"])?)?;
        match response.status() {
            StatusCode::OK => Ok(()),
            status => Err(status_error(status, &self.base_url, None)),
        }
    }
}
