use j2g::boundary::WorkflowNotice;
use j2g::cli::{
    failure_notices, run_config, run_create, ConfigContext, ConfigMode, ConfigOutcome, CreateArgs,
    CreateContext,
};
use j2g::clipboard::MockClipboard;
use j2g::config::{BoardConfig, ConfigResolver, ConfigStore};
use j2g::git::{GitCall, MockGit, WorkflowState};
use j2g::jira::{IssueClient, MockIssueClient};
use j2g::ui::ScriptedPrompter;
use j2g::J2gError;
use tempfile::TempDir;

const ACME: &str = "https://acme.atlassian.net";
const PROJECT: &str = "/home/dev/shop";

fn store_with_project(dir: &TempDir) -> ConfigStore {
    let store = ConfigStore::open(dir.path().join("config.toml"));
    store
        .replace_all(&[BoardConfig::new(ACME, "dev@acme.io", "token").with_project(PROJECT)])
        .unwrap();
    store
}

fn jira(_: &BoardConfig) -> Box<dyn IssueClient> {
    Box::new(
        MockIssueClient::new()
            .with_issue("XYZ-42", "Add OAuth2 login flow", "Story")
            .with_issue("ABC-1", "Fix   login!!  bug", "Bug"),
    )
}

fn expired_jira(_: &BoardConfig) -> Box<dyn IssueClient> {
    Box::new(MockIssueClient::new().expired())
}

fn create(code: &str, source: Option<&str>, copy: bool) -> CreateArgs {
    CreateArgs {
        code: code.to_string(),
        source: source.map(str::to_string),
        copy,
    }
}

// ============================================================================
// create
// ============================================================================

#[test]
fn test_name_only_end_to_end() {
    let dir = TempDir::new().unwrap();
    let store = store_with_project(&dir);
    let git = MockGit::new();
    let clipboard = MockClipboard::new();
    let ctx = CreateContext {
        store: &store,
        project_path: PROJECT,
        connect: &jira,
        git: &git,
        clipboard: &clipboard,
    };

    let outcome = run_create(&create("XYZ-42", None, false), &ctx).unwrap();

    assert_eq!(outcome.branch_name, "feature/XYZ-42-add-oauth2-login-flow");
    assert_eq!(outcome.copied, None);
    assert!(outcome.workflow.is_none());
    assert!(git.calls().is_empty());
    assert!(clipboard.contents().is_empty());
}

#[test]
fn test_copy_to_clipboard() {
    let dir = TempDir::new().unwrap();
    let store = store_with_project(&dir);
    let git = MockGit::new();
    let clipboard = MockClipboard::new();
    let ctx = CreateContext {
        store: &store,
        project_path: PROJECT,
        connect: &jira,
        git: &git,
        clipboard: &clipboard,
    };

    let outcome = run_create(&create("ABC-1", None, true), &ctx).unwrap();

    assert_eq!(outcome.copied, Some(true));
    assert_eq!(clipboard.contents(), vec!["bugfix/ABC-1-fix-login-bug".to_string()]);
}

#[test]
fn test_broken_clipboard_does_not_abort() {
    let dir = TempDir::new().unwrap();
    let store = store_with_project(&dir);
    let git = MockGit::new().with_local_branch("develop");
    let clipboard = MockClipboard::broken();
    let ctx = CreateContext {
        store: &store,
        project_path: PROJECT,
        connect: &jira,
        git: &git,
        clipboard: &clipboard,
    };

    let outcome = run_create(&create("ABC-1", Some("develop"), true), &ctx).unwrap();
    assert_eq!(outcome.copied, Some(false));
    assert!(outcome.workflow.is_some());
}

#[test]
fn test_create_branch_from_remote_source() {
    let dir = TempDir::new().unwrap();
    let store = store_with_project(&dir);
    let git = MockGit::new().with_remote_branch("main");
    let clipboard = MockClipboard::new();
    let ctx = CreateContext {
        store: &store,
        project_path: PROJECT,
        connect: &jira,
        git: &git,
        clipboard: &clipboard,
    };

    let outcome = run_create(&create("XYZ-42", Some("main"), false), &ctx).unwrap();
    let report = outcome.workflow.unwrap();

    assert!(report.pulled);
    assert_eq!(report.state, WorkflowState::Done);
    assert_eq!(
        git.calls(),
        vec![
            GitCall::Stash,
            GitCall::Checkout("main".into()),
            GitCall::IsRemoteBranch("origin".into(), "main".into()),
            GitCall::Pull("origin".into(), "main".into()),
            GitCall::CreateBranch("feature/XYZ-42-add-oauth2-login-flow".into()),
        ]
    );
    assert_eq!(
        git.head().as_deref(),
        Some("feature/XYZ-42-add-oauth2-login-flow")
    );
}

#[test]
fn test_unconfigured_project() {
    let dir = TempDir::new().unwrap();
    let store = store_with_project(&dir);
    let git = MockGit::new();
    let clipboard = MockClipboard::new();
    let ctx = CreateContext {
        store: &store,
        project_path: "/somewhere/else",
        connect: &jira,
        git: &git,
        clipboard: &clipboard,
    };

    let err = run_create(&create("XYZ-42", Some("main"), false), &ctx).unwrap_err();
    assert!(matches!(err, J2gError::NoConfigForProject(ref p) if p == "/somewhere/else"));
    assert!(git.calls().is_empty());
}

#[test]
fn test_jira_errors_stop_before_git() {
    let dir = TempDir::new().unwrap();
    let store = store_with_project(&dir);
    let git = MockGit::new().with_local_branch("main");
    let clipboard = MockClipboard::new();

    let ctx = CreateContext {
        store: &store,
        project_path: PROJECT,
        connect: &expired_jira,
        git: &git,
        clipboard: &clipboard,
    };
    let err = run_create(&create("XYZ-42", Some("main"), true), &ctx).unwrap_err();
    assert!(matches!(err, J2gError::AuthExpired(_)));

    let ctx = CreateContext {
        connect: &jira,
        ..ctx
    };
    let err = run_create(&create("NOPE-1", Some("main"), true), &ctx).unwrap_err();
    assert!(matches!(err, J2gError::IssueNotFound(_)));

    assert!(git.calls().is_empty());
    assert!(clipboard.contents().is_empty());
}

#[test]
fn test_missing_source_reports_residual_state() {
    let dir = TempDir::new().unwrap();
    let store = store_with_project(&dir);
    let git = MockGit::new().with_local_changes();
    let clipboard = MockClipboard::new();
    let ctx = CreateContext {
        store: &store,
        project_path: PROJECT,
        connect: &jira,
        git: &git,
        clipboard: &clipboard,
    };

    let err = run_create(&create("XYZ-42", Some("ghost"), false), &ctx).unwrap_err();

    assert!(matches!(stopped_by(&err), J2gError::SourceBranchNotFound(b) if b == "ghost"));
    assert_eq!(failure_notices(&err), vec![WorkflowNotice::ChangesStashed]);
    assert!(!git.pulled());
    assert!(!git.created());
}

#[test]
fn test_existing_branch_reported() {
    let dir = TempDir::new().unwrap();
    let store = store_with_project(&dir);
    let git = MockGit::new()
        .with_local_branch("develop")
        .with_local_branch("bugfix/ABC-1-fix-login-bug");
    let clipboard = MockClipboard::new();
    let ctx = CreateContext {
        store: &store,
        project_path: PROJECT,
        connect: &jira,
        git: &git,
        clipboard: &clipboard,
    };

    let err = run_create(&create("ABC-1", Some("develop"), false), &ctx).unwrap_err();

    assert!(matches!(stopped_by(&err), J2gError::BranchAlreadyExists(_)));
    assert_eq!(
        failure_notices(&err),
        vec![WorkflowNotice::LeftOnBranch {
            branch: "develop".into()
        }]
    );
}

/// The git error a stopped workflow carries
fn stopped_by(err: &J2gError) -> &J2gError {
    match err {
        J2gError::Workflow(failure) => &failure.error,
        other => panic!("expected a workflow failure, got {:?}", other),
    }
}

// ============================================================================
// config
// ============================================================================

#[test]
fn test_setup_new_board() {
    let dir = TempDir::new().unwrap();
    let store = ConfigStore::open(dir.path().join("config.toml"));
    let prompter = ScriptedPrompter::new([ACME, "dev@acme.io", "secret"]);
    let ctx = ConfigContext {
        store: &store,
        project_path: PROJECT,
        prompter: &prompter,
        connect: &jira,
    };

    let outcome = run_config(ConfigMode::Setup, &ctx).unwrap();

    assert_eq!(outcome, ConfigOutcome::BoardAdded { url: ACME.into() });
    let board = ConfigResolver::new(&store)
        .find_by_project(PROJECT)
        .unwrap()
        .unwrap();
    assert_eq!(board.email, "dev@acme.io");
    assert_eq!(board.token, "secret");
}

#[test]
fn test_setup_strips_trailing_slash_and_rejects_duplicate() {
    let dir = TempDir::new().unwrap();
    let store = store_with_project(&dir);
    // Existing boards are offered first; index 1 is "Configure a new board"
    let prompter = ScriptedPrompter::new(["1", "https://acme.atlassian.net/"]);
    let ctx = ConfigContext {
        store: &store,
        project_path: "/home/dev/admin",
        prompter: &prompter,
        connect: &jira,
    };

    let err = run_config(ConfigMode::Setup, &ctx).unwrap_err();
    assert!(matches!(err, J2gError::BoardAlreadyConfigured(ref url) if url == ACME));
}

#[test]
fn test_setup_links_existing_board() {
    let dir = TempDir::new().unwrap();
    let store = store_with_project(&dir);
    let prompter = ScriptedPrompter::new(["0"]);
    let ctx = ConfigContext {
        store: &store,
        project_path: "/home/dev/admin",
        prompter: &prompter,
        connect: &jira,
    };

    let outcome = run_config(ConfigMode::Setup, &ctx).unwrap();

    assert_eq!(outcome, ConfigOutcome::Linked { url: ACME.into() });
    let boards = store.get_all().unwrap();
    assert_eq!(
        boards[0].projects,
        vec![PROJECT.to_string(), "/home/dev/admin".to_string()]
    );
}

#[test]
fn test_setup_already_linked() {
    let dir = TempDir::new().unwrap();
    let store = store_with_project(&dir);
    let prompter = ScriptedPrompter::new(Vec::<String>::new());
    let ctx = ConfigContext {
        store: &store,
        project_path: PROJECT,
        prompter: &prompter,
        connect: &jira,
    };

    let outcome = run_config(ConfigMode::Setup, &ctx).unwrap();
    assert_eq!(outcome, ConfigOutcome::AlreadyLinked { url: ACME.into() });
}

#[test]
fn test_setup_with_bad_credentials_saves_nothing() {
    let dir = TempDir::new().unwrap();
    let store = ConfigStore::open(dir.path().join("config.toml"));
    let prompter = ScriptedPrompter::new([ACME, "dev@acme.io", "wrong"]);
    let ctx = ConfigContext {
        store: &store,
        project_path: PROJECT,
        prompter: &prompter,
        connect: &expired_jira,
    };

    let err = run_config(ConfigMode::Setup, &ctx).unwrap_err();
    assert!(matches!(err, J2gError::AuthExpired(_)));
    assert!(store.get_all().unwrap().is_empty());
}

#[test]
fn test_rotate_token() {
    let dir = TempDir::new().unwrap();
    let store = store_with_project(&dir);
    let prompter = ScriptedPrompter::new(["fresh-token"]);
    let ctx = ConfigContext {
        store: &store,
        project_path: PROJECT,
        prompter: &prompter,
        connect: &jira,
    };

    let outcome = run_config(ConfigMode::Token, &ctx).unwrap();

    assert_eq!(outcome, ConfigOutcome::TokenRotated { url: ACME.into() });
    let board = &store.get_all().unwrap()[0];
    assert_eq!(board.token, "fresh-token");
    assert_eq!(board.email, "dev@acme.io");
}

#[test]
fn test_rotate_token_requires_linked_project() {
    let dir = TempDir::new().unwrap();
    let store = store_with_project(&dir);
    let prompter = ScriptedPrompter::new(["fresh-token"]);
    let ctx = ConfigContext {
        store: &store,
        project_path: "/not/linked",
        prompter: &prompter,
        connect: &jira,
    };

    assert!(matches!(
        run_config(ConfigMode::Token, &ctx),
        Err(J2gError::NoConfigForProject(_))
    ));
    assert_eq!(prompter.remaining(), 1);
}

#[test]
fn test_reset_needs_confirmation() {
    let dir = TempDir::new().unwrap();
    let store = store_with_project(&dir);
    let prompter = ScriptedPrompter::new(["n", "y"]);
    let ctx = ConfigContext {
        store: &store,
        project_path: PROJECT,
        prompter: &prompter,
        connect: &jira,
    };

    assert_eq!(run_config(ConfigMode::Reset, &ctx).unwrap(), ConfigOutcome::Cancelled);
    assert_eq!(store.get_all().unwrap().len(), 1);

    assert_eq!(run_config(ConfigMode::Reset, &ctx).unwrap(), ConfigOutcome::Reset);
    assert!(store.get_all().unwrap().is_empty());
}

#[test]
fn test_print_and_unlink() {
    let dir = TempDir::new().unwrap();
    let store = store_with_project(&dir);
    let prompter = ScriptedPrompter::new(Vec::<String>::new());
    let ctx = ConfigContext {
        store: &store,
        project_path: PROJECT,
        prompter: &prompter,
        connect: &jira,
    };

    assert_eq!(
        run_config(ConfigMode::Print, &ctx).unwrap(),
        ConfigOutcome::Printed { boards: 1 }
    );
    assert_eq!(
        run_config(ConfigMode::Unlink, &ctx).unwrap(),
        ConfigOutcome::Unlinked { removed: true }
    );
    assert_eq!(
        run_config(ConfigMode::Unlink, &ctx).unwrap(),
        ConfigOutcome::Unlinked { removed: false }
    );
}

#[test]
fn test_print_without_boards() {
    let dir = TempDir::new().unwrap();
    let store = ConfigStore::open(dir.path().join("config.toml"));
    let prompter = ScriptedPrompter::new(Vec::<String>::new());
    let ctx = ConfigContext {
        store: &store,
        project_path: PROJECT,
        prompter: &prompter,
        connect: &jira,
    };

    assert!(matches!(
        run_config(ConfigMode::Print, &ctx),
        Err(J2gError::NoBoards)
    ));
}
