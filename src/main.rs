use std::ffi::OsString;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};

use j2g::cli::{self, ConfigContext, ConfigMode, CreateArgs, CreateContext};
use j2g::clipboard::SystemClipboard;
use j2g::config::{BoardConfig, ConfigStore};
use j2g::git::CommandGit;
use j2g::jira::{IssueClient, JiraClient};
use j2g::ui::{self, TerminalPrompter};

const SUBCOMMANDS: &[&str] = &["create", "config", "help"];
/// Flags whose value is a separate argument
const VALUE_FLAGS: &[&str] = &["--config", "-s", "--source"];

#[derive(Parser)]
#[command(
    name = "j2g",
    version,
    about = "Create git branches named after Jira tickets"
)]
struct Args {
    #[arg(long, global = true, help = "Custom configuration file path")]
    config: Option<String>,

    #[arg(short, long, global = true, help = "Log what j2g does")]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Create new branch name (default command)
    Create {
        #[arg(help = "Jira ticket code, e.g. ABC-123")]
        code: String,

        #[arg(short, long, value_name = "SOURCE_BRANCH", help = "Also create a git branch from SOURCE_BRANCH")]
        source: Option<String>,

        #[arg(short, long, help = "Copy branch name to clipboard")]
        copy: bool,
    },
    /// Configure the board for this repository
    Config {
        #[arg(short, long, help = "Display configuration")]
        print: bool,

        #[arg(short, long, help = "Reset configuration")]
        reset: bool,

        #[arg(short, long, help = "Set new token")]
        token: bool,

        #[arg(long, help = "Unlink this repository from its board")]
        unlink: bool,
    },
}

/// `j2g ABC-1` is shorthand for `j2g create ABC-1`.
///
/// `create` goes right after the program name so create options given
/// before the code (`j2g -s main ABC-1`) still belong to it.
fn with_default_command(mut argv: Vec<OsString>) -> Vec<OsString> {
    let mut index = 1;
    while index < argv.len() {
        let arg = argv[index].to_string_lossy().to_string();
        if VALUE_FLAGS.contains(&arg.as_str()) {
            index += 2;
            continue;
        }
        if arg.starts_with('-') {
            index += 1;
            continue;
        }
        if !SUBCOMMANDS.contains(&arg.as_str()) {
            argv.insert(1, OsString::from("create"));
        }
        break;
    }
    argv
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "j2g=debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .format_timestamp(None)
        .init();
}

fn connect(board: &BoardConfig) -> Box<dyn IssueClient> {
    Box::new(JiraClient::for_board(board))
}

fn run(args: Args) -> Result<()> {
    let store = ConfigStore::open_default(args.config.as_deref())?;
    let cwd = std::env::current_dir().context("cannot read the current directory")?;
    let project_path = cwd.to_string_lossy().to_string();

    match args.command {
        Command::Create { code, source, copy } => {
            let git = CommandGit::new(&cwd);
            let clipboard = SystemClipboard;
            let ctx = CreateContext {
                store: &store,
                project_path: &project_path,
                connect: &connect,
                git: &git,
                clipboard: &clipboard,
            };

            let create = CreateArgs { code, source, copy };
            if let Err(e) = cli::run_create(&create, &ctx) {
                let notices = cli::failure_notices(&e);
                ui::display_error(&e.to_string());
                for notice in &notices {
                    ui::display_notice(notice);
                }
                std::process::exit(1);
            }
        }
        Command::Config {
            print,
            reset,
            token,
            unlink,
        } => {
            let mode = if print {
                ConfigMode::Print
            } else if reset {
                ConfigMode::Reset
            } else if token {
                ConfigMode::Token
            } else if unlink {
                ConfigMode::Unlink
            } else {
                ConfigMode::Setup
            };

            let prompter = TerminalPrompter;
            let ctx = ConfigContext {
                store: &store,
                project_path: &project_path,
                prompter: &prompter,
                connect: &connect,
            };
            cli::run_config(mode, &ctx)?;
        }
    }

    Ok(())
}

fn main() {
    let args = Args::parse_from(with_default_command(std::env::args_os().collect()));
    init_logging(args.verbose);

    if let Err(e) = run(args) {
        ui::display_error(&format!("{:#}", e));
        std::process::exit(1);
    }
}
