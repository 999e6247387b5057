//! `j2g config`: print, reset, rotate the token, unlink, or interactive setup

use log::info;

use super::orchestration::ClientFactory;
use crate::config::{BoardConfig, ConfigResolver, ConfigStore};
use crate::error::{J2gError, Result};
use crate::ui::{self, Prompter};

/// What `j2g config` was asked to do
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigMode {
    Print,
    Reset,
    Token,
    Unlink,
    Setup,
}

/// What `j2g config` ended up doing
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigOutcome {
    Printed { boards: usize },
    Reset,
    Cancelled,
    TokenRotated { url: String },
    Unlinked { removed: bool },
    AlreadyLinked { url: String },
    Linked { url: String },
    BoardAdded { url: String },
}

/// Collaborators the config command runs against
pub struct ConfigContext<'a> {
    pub store: &'a ConfigStore,
    pub project_path: &'a str,
    pub prompter: &'a dyn Prompter,
    pub connect: &'a ClientFactory<'a>,
}

pub fn run_config(mode: ConfigMode, ctx: &ConfigContext<'_>) -> Result<ConfigOutcome> {
    let resolver = ConfigResolver::new(ctx.store);
    match mode {
        ConfigMode::Print => print_boards(&resolver, ctx),
        ConfigMode::Reset => reset(ctx),
        ConfigMode::Token => rotate_token(&resolver, ctx),
        ConfigMode::Unlink => {
            let removed = resolver.remove_project(ctx.project_path)?;
            if removed {
                ui::display_success(&format!("Unlinked {}", ctx.project_path));
            } else {
                ui::display_status(&format!("{} was not linked to any board", ctx.project_path));
            }
            Ok(ConfigOutcome::Unlinked { removed })
        }
        ConfigMode::Setup => setup(&resolver, ctx),
    }
}

fn print_boards(resolver: &ConfigResolver<'_>, ctx: &ConfigContext<'_>) -> Result<ConfigOutcome> {
    let boards = resolver.boards()?;
    ui::display_boards(&boards, ctx.project_path);
    if resolver.find_by_project(ctx.project_path)?.is_none() {
        ui::display_status(&format!(
            "{} is not linked to a board; run `j2g config` to link it",
            ctx.project_path
        ));
    }
    Ok(ConfigOutcome::Printed {
        boards: boards.len(),
    })
}

fn reset(ctx: &ConfigContext<'_>) -> Result<ConfigOutcome> {
    let prompt = format!(
        "Remove every board and project from {}?",
        ctx.store.path().display()
    );
    if !ctx.prompter.confirm(&prompt)? {
        return Ok(ConfigOutcome::Cancelled);
    }
    ctx.store.reset()?;
    ui::display_success("Configuration reset");
    Ok(ConfigOutcome::Reset)
}

fn rotate_token(resolver: &ConfigResolver<'_>, ctx: &ConfigContext<'_>) -> Result<ConfigOutcome> {
    let board = resolver
        .find_by_project(ctx.project_path)?
        .ok_or_else(|| J2gError::NoConfigForProject(ctx.project_path.to_string()))?;

    let token = ctx
        .prompter
        .secret(&format!("New API token for {}", board.url))?;
    let candidate = BoardConfig {
        token: token.clone(),
        ..board.clone()
    };
    (ctx.connect)(&candidate).verify_credentials()?;

    resolver.rotate_credentials(&board.url, &board.email, &token)?;
    ui::display_success(&format!("Token updated for {}", board.url));
    Ok(ConfigOutcome::TokenRotated { url: board.url })
}

fn setup(resolver: &ConfigResolver<'_>, ctx: &ConfigContext<'_>) -> Result<ConfigOutcome> {
    if let Some(board) = resolver.find_by_project(ctx.project_path)? {
        ui::display_status(&format!(
            "{} already uses {}; `j2g config --unlink` to change it",
            ctx.project_path, board.url
        ));
        return Ok(ConfigOutcome::AlreadyLinked { url: board.url });
    }

    let boards = ctx.store.get_all()?;
    if !boards.is_empty() {
        let mut options: Vec<String> = boards.iter().map(|b| b.url.clone()).collect();
        options.push("Configure a new board".to_string());

        let choice = ctx
            .prompter
            .choose("Which board does this project use?", &options)?;
        if let Some(board) = boards.get(choice) {
            resolver.remove_project(ctx.project_path)?;
            resolver.add_project(ctx.project_path, &board.url)?;
            ui::display_success(&format!("Linked {} to {}", ctx.project_path, board.url));
            return Ok(ConfigOutcome::Linked {
                url: board.url.clone(),
            });
        }
    }

    let url = ctx
        .prompter
        .input("Jira URL (e.g. https://acme.atlassian.net)", None)?
        .trim_end_matches('/')
        .to_string();
    if url.is_empty() {
        return Err(J2gError::config("the Jira URL cannot be empty"));
    }
    if resolver.is_known_board(&url)? {
        return Err(J2gError::BoardAlreadyConfigured(url));
    }
    let email = ctx.prompter.input("Account email", None)?;
    let token = ctx.prompter.secret("API token")?;

    let board = BoardConfig::new(url.clone(), email, token).with_project(ctx.project_path);
    ui::display_status(&format!("Checking credentials against {}", url));
    (ctx.connect)(&board).verify_credentials()?;

    resolver.remove_project(ctx.project_path)?;
    resolver.add_board(board)?;
    info!("configured {} for {}", url, ctx.project_path);
    ui::display_success(&format!("Board {} configured for {}", url, ctx.project_path));
    Ok(ConfigOutcome::BoardAdded { url })
}
