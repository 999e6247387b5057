use log::{debug, info};

use super::{BoardConfig, ConfigStore};
use crate::error::{J2gError, Result};

/// Project-to-board lookups and mutations over a [`ConfigStore`].
///
/// Every mutation reads the full board list, transforms it and writes it back.
pub struct ConfigResolver<'a> {
    store: &'a ConfigStore,
}

impl<'a> ConfigResolver<'a> {
    pub fn new(store: &'a ConfigStore) -> Self {
        ConfigResolver { store }
    }

    /// All boards, failing with [`J2gError::NoBoards`] when none exist.
    pub fn boards(&self) -> Result<Vec<BoardConfig>> {
        let boards = self.store.get_all()?;
        if boards.is_empty() {
            return Err(J2gError::NoBoards);
        }
        Ok(boards)
    }

    /// The board whose project list contains `path`, first match in store order.
    pub fn find_by_project(&self, path: &str) -> Result<Option<BoardConfig>> {
        Ok(self
            .store
            .get_all()?
            .into_iter()
            .find(|board| board.has_project(path)))
    }

    pub fn is_known_board(&self, url: &str) -> Result<bool> {
        Ok(self.store.get_all()?.iter().any(|board| board.url == url))
    }

    /// Append a new board to the store.
    ///
    /// # Returns
    /// * `Ok(())` - Board appended
    /// * `Err(BoardAlreadyConfigured)` - A board with the same url exists
    pub fn add_board(&self, board: BoardConfig) -> Result<()> {
        let mut boards = self.store.get_all()?;
        if boards.iter().any(|b| b.url == board.url) {
            return Err(J2gError::BoardAlreadyConfigured(board.url));
        }
        info!("adding board {}", board.url);
        boards.push(board);
        self.store.replace_all(&boards)
    }

    /// Attach `path` to the board at `url`. Adding a path twice is a no-op.
    /// Unknown urls leave the store untouched.
    pub fn add_project(&self, path: &str, url: &str) -> Result<()> {
        let mut boards = self.store.get_all()?;
        let Some(board) = boards.iter_mut().find(|b| b.url == url) else {
            debug!("add_project: no board {}, nothing to do", url);
            return Ok(());
        };
        if board.has_project(path) {
            return Ok(());
        }
        info!("linking {} to {}", path, url);
        board.projects.push(path.to_string());
        self.store.replace_all(&boards)
    }

    /// Detach `path` from every board listing it.
    ///
    /// # Returns
    /// * `Ok(true)` - At least one board listed the path
    /// * `Ok(false)` - No board listed it; the store was not rewritten
    pub fn remove_project(&self, path: &str) -> Result<bool> {
        let mut boards = self.store.get_all()?;
        let mut removed = false;
        for board in boards.iter_mut() {
            let before = board.projects.len();
            board.projects.retain(|p| p != path);
            removed |= board.projects.len() != before;
        }

        if removed {
            info!("unlinking {}", path);
            self.store.replace_all(&boards)?;
        }
        Ok(removed)
    }

    /// Replace the email and token of the board at `url`; no-op if none matches.
    pub fn rotate_credentials(&self, url: &str, email: &str, token: &str) -> Result<bool> {
        let mut boards = self.store.get_all()?;
        let Some(board) = boards.iter_mut().find(|b| b.url == url) else {
            return Ok(false);
        };
        board.email = email.to_string();
        board.token = token.to_string();
        info!("rotated credentials for {}", url);
        self.store.replace_all(&boards)?;
        Ok(true)
    }
}
