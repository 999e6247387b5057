//! Domain logic - pure rules independent of git, Jira and the filesystem

pub mod branch;
pub mod issue;

pub use branch::{build_branch_name, slugify};
pub use issue::IssueData;
