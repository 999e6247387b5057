//! Pure formatting functions for UI output.
//!
//! This module contains all display/formatting logic separated from user interaction.
//! The `format_*` functions build plain strings and are unit tested; the
//! `display_*` functions add colour and print.

use console::style;

use crate::boundary::WorkflowNotice;
use crate::config::BoardConfig;
use crate::domain::IssueData;

/// Format and print an error message in red.
pub fn display_error(message: &str) {
    eprintln!("{} {}", style("ERROR:").red().bold(), message);
}

/// Format and print a success message with green checkmark.
pub fn display_success(message: &str) {
    println!("{} {}", style("✓").green(), message);
}

/// Format and print a status message with yellow arrow.
pub fn display_status(message: &str) {
    println!("{} {}", style("→").yellow(), message);
}

/// Display a workflow notice to the user.
///
/// Shows a yellow warning icon followed by the notice.
pub fn display_notice(notice: &WorkflowNotice) {
    eprintln!("{} {}", style("⚠ WARNING:").yellow(), notice);
}

/// Display the fetched issue and the branch name derived from it.
pub fn display_issue(issue: &IssueData, branch_name: &str) {
    println!("\n{}", style(format!("{}: {}", issue.code, issue.title)).bold());
    println!("  Type:   {}", issue.issue_type);
    println!("  Branch: {}", style(branch_name).cyan());
}

/// Print every configured board, marking the one the current project uses.
pub fn display_boards(boards: &[BoardConfig], current_project: &str) {
    println!("{}", style("Configured boards:").bold());
    for line in format_boards(boards, current_project) {
        println!("{}", line);
    }
}

/// One block of lines per board: url, email, masked token, projects.
///
/// The current project is suffixed with `(current)`.
pub fn format_boards(boards: &[BoardConfig], current_project: &str) -> Vec<String> {
    let mut lines = Vec::new();
    for board in boards {
        lines.push(format!("  {}", board.url));
        lines.push(format!("    email:    {}", board.email));
        lines.push(format!("    token:    {}", board.masked_token()));
        if board.projects.is_empty() {
            lines.push("    projects: (none)".to_string());
        } else {
            lines.push("    projects:".to_string());
            for project in &board.projects {
                if project == current_project {
                    lines.push(format!("      - {} (current)", project));
                } else {
                    lines.push(format!("      - {}", project));
                }
            }
        }
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_error() {
        // Visual verification test - output is printed to stderr
        display_error("test error");
    }

    #[test]
    fn test_display_success() {
        // Visual verification test - output is printed to stdout
        display_success("test success");
    }

    #[test]
    fn test_display_status() {
        // Visual verification test - output is printed to stdout
        display_status("test status");
    }

    #[test]
    fn test_format_boards_marks_current_and_masks_token() {
        let boards = vec![
            BoardConfig::new("https://acme.atlassian.net", "dev@acme.io", "abcdefgh1234")
                .with_project("/src/shop")
                .with_project("/src/admin"),
            BoardConfig::new("https://globex.atlassian.net", "dev@globex.io", "zz"),
        ];

        let lines = format_boards(&boards, "/src/admin");
        assert!(lines.contains(&"  https://acme.atlassian.net".to_string()));
        assert!(lines.contains(&"    token:    ****1234".to_string()));
        assert!(lines.contains(&"      - /src/admin (current)".to_string()));
        assert!(lines.contains(&"      - /src/shop".to_string()));
        assert!(lines.contains(&"    projects: (none)".to_string()));
        assert!(!lines.iter().any(|l| l.contains("abcdefgh")));
    }
}
