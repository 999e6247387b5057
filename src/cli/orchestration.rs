//! Create-branch workflow orchestration
//!
//! Ties the configuration, the Jira lookup, the branch name rules and the git
//! workflow together for `j2g create`. Kept apart from `main.rs` so it can
//! run against mock collaborators.

use log::info;

use crate::boundary::WorkflowNotice;
use crate::clipboard::Clipboard;
use crate::config::{BoardConfig, ConfigResolver, ConfigStore};
use crate::domain::{build_branch_name, IssueData};
use crate::error::{J2gError, Result};
use crate::git::{GitOperations, GitWorkflow, WorkflowReport};
use crate::jira::IssueClient;
use crate::ui;

/// Builds an issue client for the board that owns the project
pub type ClientFactory<'a> = dyn Fn(&BoardConfig) -> Box<dyn IssueClient> + 'a;

/// Arguments for the create workflow
///
/// Mirrors the CLI flags but does not depend on clap.
#[derive(Debug, Clone, PartialEq)]
pub struct CreateArgs {
    /// Ticket code, e.g. `ABC-123`
    pub code: String,

    /// Branch to create the new branch from; `None` only prints the name
    pub source: Option<String>,

    /// Copy the branch name to the clipboard
    pub copy: bool,
}

/// Collaborators the create workflow runs against
pub struct CreateContext<'a> {
    pub store: &'a ConfigStore,
    /// Directory the command runs in, matched against board projects
    pub project_path: &'a str,
    pub connect: &'a ClientFactory<'a>,
    pub git: &'a dyn GitOperations,
    pub clipboard: &'a dyn Clipboard,
}

/// Result of a successful create workflow
#[derive(Debug, Clone, PartialEq)]
pub struct CreateOutcome {
    pub issue: IssueData,
    pub branch_name: String,

    /// `None` when copying was not requested
    pub copied: Option<bool>,

    /// Present when a source branch was given
    pub workflow: Option<WorkflowReport>,
}

/// Main create workflow
///
/// 1. Resolve the board for the project directory
/// 2. Fetch the issue from Jira
/// 3. Build and display the branch name
/// 4. Optionally copy it to the clipboard
/// 5. With a source branch, run the git workflow
///
/// # Returns
/// * `Ok(CreateOutcome)` - Name built and, when requested, branch created
/// * `Err(NoConfigForProject)` - No board lists the project
/// * `Err(AuthExpired | IssueNotFound | ConnectionFailed | ...)` - Jira lookup failed
/// * `Err(Workflow(..))` - The git workflow stopped; see [`crate::git::WorkflowFailure`]
pub fn run_create(args: &CreateArgs, ctx: &CreateContext<'_>) -> Result<CreateOutcome> {
    let board = ConfigResolver::new(ctx.store)
        .find_by_project(ctx.project_path)?
        .ok_or_else(|| J2gError::NoConfigForProject(ctx.project_path.to_string()))?;
    info!("project {} uses board {}", ctx.project_path, board.url);

    let client = (ctx.connect)(&board);
    let issue = client.fetch_issue(&args.code)?;
    let branch_name = build_branch_name(&issue);
    ui::display_issue(&issue, &branch_name);

    let copied = if args.copy {
        match ctx.clipboard.copy(&branch_name) {
            Ok(()) => {
                ui::display_success("Branch name copied to clipboard");
                Some(true)
            }
            Err(e) => {
                ui::display_error(&e.to_string());
                Some(false)
            }
        }
    } else {
        None
    };

    let Some(source) = args.source.as_deref() else {
        return Ok(CreateOutcome {
            issue,
            branch_name,
            copied,
            workflow: None,
        });
    };

    ui::display_status(&format!("Creating '{}' from '{}'", branch_name, source));
    let report = GitWorkflow::new(ctx.git)
        .run(source, &branch_name)
        .map_err(|failure| J2gError::Workflow(Box::new(failure)))?;

    for notice in report.notices() {
        ui::display_notice(&notice);
    }
    ui::display_success(&format!(
        "Switched to new branch '{}' from '{}'",
        report.branch, report.source
    ));

    Ok(CreateOutcome {
        issue,
        branch_name,
        copied,
        workflow: Some(report),
    })
}

/// Residual repository state to report after a failed create
pub fn failure_notices(error: &J2gError) -> Vec<WorkflowNotice> {
    match error {
        J2gError::Workflow(failure) => failure.notices(),
        _ => Vec::new(),
    }
}
