//! Persisted board configuration.
//!
//! The configuration is a TOML document with one array, `items`, holding a
//! [`BoardConfig`] per Jira instance:
//!
//! ```toml
//! [[items]]
//! url = "https://acme.atlassian.net"
//! email = "dev@acme.io"
//! token = "..."
//! projects = ["/home/dev/src/shop", "/home/dev/src/admin"]
//! ```
//!
//! [`ConfigStore`] owns reading and writing the file, [`ConfigResolver`] holds
//! the project-to-board logic on top of it.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

pub mod resolver;
pub mod store;

pub use resolver::ConfigResolver;
pub use store::ConfigStore;

/// Environment variable overriding the configuration file location
pub const CONFIG_ENV_VAR: &str = "J2G_CONFIG";

const CONFIG_DIR_NAME: &str = "j2g";
const CONFIG_FILE_NAME: &str = "config.toml";

/// Credentials for one Jira instance and the local projects that use it.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
pub struct BoardConfig {
    pub url: String,
    pub email: String,
    pub token: String,

    #[serde(default)]
    pub projects: Vec<String>,
}

impl BoardConfig {
    pub fn new(url: impl Into<String>, email: impl Into<String>, token: impl Into<String>) -> Self {
        BoardConfig {
            url: url.into(),
            email: email.into(),
            token: token.into(),
            projects: Vec::new(),
        }
    }

    /// Builder-style helper attaching a project path
    pub fn with_project(mut self, path: impl Into<String>) -> Self {
        self.projects.push(path.into());
        self
    }

    pub fn has_project(&self, path: &str) -> bool {
        self.projects.iter().any(|p| p == path)
    }

    /// Token reduced to its last four characters, for display.
    pub fn masked_token(&self) -> String {
        let chars: Vec<char> = self.token.chars().collect();
        if chars.len() <= 4 {
            return "****".to_string();
        }
        let tail: String = chars[chars.len() - 4..].iter().collect();
        format!("****{}", tail)
    }
}

/// On-disk shape of the configuration file.
#[derive(Debug, Deserialize, Serialize, Clone, Default, PartialEq, Eq)]
pub struct ConfigDocument {
    #[serde(default)]
    pub items: Vec<BoardConfig>,
}

/// Resolves where the configuration file lives.
///
/// Checked in order:
/// 1. Path passed explicitly (the `--config` flag)
/// 2. `$J2G_CONFIG`
/// 3. `<user config dir>/j2g/config.toml`
///
/// # Returns
/// * `Ok(PathBuf)` - Location of the configuration file (it may not exist yet)
/// * `Err` - If no user configuration directory can be determined
pub fn config_path(explicit: Option<&str>) -> crate::Result<PathBuf> {
    if let Some(path) = explicit {
        return Ok(PathBuf::from(path));
    }

    if let Ok(path) = std::env::var(CONFIG_ENV_VAR) {
        if !path.trim().is_empty() {
            return Ok(PathBuf::from(path));
        }
    }

    dirs::config_dir()
        .map(|dir| dir.join(CONFIG_DIR_NAME).join(CONFIG_FILE_NAME))
        .ok_or_else(|| crate::J2gError::config("cannot determine the user configuration directory"))
}
