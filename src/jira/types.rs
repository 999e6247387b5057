use serde::Deserialize;

use crate::domain::IssueData;

/// Body of `GET /rest/api/{version}/issue/{code}?fields=summary,issuetype`
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct JiraIssueResponse {
    #[serde(default)]
    pub key: Option<String>,
    pub fields: JiraIssueFields,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct JiraIssueFields {
    pub summary: String,
    pub issuetype: JiraIssueType,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct JiraIssueType {
    pub name: String,
}

impl JiraIssueResponse {
    /// Convert to [`IssueData`], keeping the code the user asked for.
    pub fn into_issue(self, code: &str) -> IssueData {
        IssueData::new(code, self.fields.summary, &self.fields.issuetype.name)
    }
}
