use regex::Regex;

use super::IssueData;

/// Branch prefix for bug tickets
pub const BUGFIX_PREFIX: &str = "bugfix";
/// Branch prefix for every other ticket type
pub const FEATURE_PREFIX: &str = "feature";

/// Build the branch name for an issue: `{prefix}/{code}-{slug}`.
///
/// The prefix is `bugfix` for `bug` issues and `feature` otherwise. The slug
/// is the title lowercased, with every run of characters outside `[a-z0-9]`
/// collapsed to a single hyphen and no hyphen at either end. A title with no
/// ASCII alphanumerics gives an empty slug, so the name ends in `-`.
///
/// # Examples
///
/// ```
/// use j2g::domain::{build_branch_name, IssueData};
///
/// let issue = IssueData::new("ABC-1", "Fix   login!!  bug", "bug");
/// assert_eq!(build_branch_name(&issue), "bugfix/ABC-1-fix-login-bug");
/// ```
pub fn build_branch_name(issue: &IssueData) -> String {
    let prefix = if issue.is_bug() {
        BUGFIX_PREFIX
    } else {
        FEATURE_PREFIX
    };
    format!("{}/{}-{}", prefix, issue.code, slugify(&issue.title))
}

/// Lowercase `title` and join its ASCII alphanumeric words with hyphens.
pub fn slugify(title: &str) -> String {
    let lowered = title.to_lowercase();
    Regex::new(r"[^a-z0-9]+")
        .ok()
        .map(|re| {
            re.replace_all(&lowered, "-")
                .trim_matches('-')
                .to_string()
        })
        .unwrap_or_default()
}
