/// Issue fields needed to name a branch
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IssueData {
    /// Ticket identifier exactly as the user typed it
    pub code: String,
    pub title: String,
    /// Lowercased issue type name ("bug", "story", ...)
    pub issue_type: String,
}

impl IssueData {
    pub fn new(code: impl Into<String>, title: impl Into<String>, issue_type: &str) -> Self {
        IssueData {
            code: code.into(),
            title: title.into(),
            issue_type: issue_type.to_lowercase(),
        }
    }

    pub fn is_bug(&self) -> bool {
        self.issue_type == "bug"
    }
}
