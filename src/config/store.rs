use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use log::debug;

use super::{BoardConfig, ConfigDocument};
use crate::error::{J2gError, Result};

/// File-backed store for the board list.
///
/// Opening a store does not touch the disk; the file is read on every
/// [`get_all`](ConfigStore::get_all) and rewritten in full on every mutation.
/// There is no locking, so two concurrent invocations can lose an update.
#[derive(Debug, Clone)]
pub struct ConfigStore {
    path: PathBuf,
}

impl ConfigStore {
    pub fn open(path: impl Into<PathBuf>) -> Self {
        ConfigStore { path: path.into() }
    }

    /// Open the store at the default location (see [`super::config_path`]).
    pub fn open_default(explicit: Option<&str>) -> Result<Self> {
        Ok(Self::open(super::config_path(explicit)?))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Every configured board in file order. A missing file is an empty store.
    ///
    /// # Returns
    /// * `Ok(Vec<BoardConfig>)` - Boards in file order, possibly empty
    /// * `Err(StorageUnavailable)` - The file exists but cannot be read
    /// * `Err(CorruptConfig)` - The file is not a valid configuration document
    pub fn get_all(&self) -> Result<Vec<BoardConfig>> {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!("no config at {}, starting empty", self.path.display());
                return Ok(Vec::new());
            }
            Err(e) => return Err(J2gError::storage(&self.path, e)),
        };

        let document: ConfigDocument =
            toml::from_str(&content).map_err(|e| J2gError::corrupt(&self.path, e.message()))?;
        debug!(
            "loaded {} board(s) from {}",
            document.items.len(),
            self.path.display()
        );
        Ok(document.items)
    }

    /// Overwrite the persisted board list.
    ///
    /// The document is written to a sibling temporary file and renamed over
    /// the target, so readers see either the old or the new list.
    pub fn replace_all(&self, boards: &[BoardConfig]) -> Result<()> {
        let document = ConfigDocument {
            items: boards.to_vec(),
        };
        let content = toml::to_string_pretty(&document).map_err(|e| J2gError::config(e.to_string()))?;

        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).map_err(|e| J2gError::storage(&self.path, e))?;
            }
        }

        let staging = self.staging_path();
        fs::write(&staging, content).map_err(|e| J2gError::storage(&staging, e))?;
        fs::rename(&staging, &self.path).map_err(|e| J2gError::storage(&self.path, e))?;

        debug!("wrote {} board(s) to {}", boards.len(), self.path.display());
        Ok(())
    }

    /// Remove every board. Works even when the current file is malformed.
    pub fn reset(&self) -> Result<()> {
        match fs::remove_file(&self.path) {
            Ok(()) => {
                debug!("removed {}", self.path.display());
                Ok(())
            }
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(J2gError::storage(&self.path, e)),
        }
    }

    fn staging_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(|n| n.to_os_string())
            .unwrap_or_else(|| "config.toml".into());
        name.push(".tmp");
        self.path.with_file_name(name)
    }
}
