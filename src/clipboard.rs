//! Clipboard access through the platform's copy utilities

use std::io::Write;
use std::process::{Command, Stdio};
use std::sync::Mutex;

use log::debug;

use crate::error::{J2gError, Result};

/// Somewhere to put a branch name for pasting
pub trait Clipboard {
    fn copy(&self, text: &str) -> Result<()>;
}

/// Copy tools tried in order; the first one that runs wins.
const COPY_COMMANDS: &[(&str, &[&str])] = &[
    ("pbcopy", &[]),
    ("clip", &[]),
    ("wl-copy", &[]),
    ("xclip", &["-selection", "clipboard"]),
    ("xsel", &["--clipboard", "--input"]),
];

/// Pipes text into `pbcopy`, `clip`, `wl-copy`, `xclip` or `xsel`
#[derive(Debug, Default)]
pub struct SystemClipboard;

impl SystemClipboard {
    fn pipe_into(program: &str, args: &[&str], text: &str) -> std::io::Result<bool> {
        let mut child = Command::new(program)
            .args(args)
            .stdin(Stdio::piped())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()?;

        // stdin is closed at the end of this block so the tool sees EOF
        if let Some(mut stdin) = child.stdin.take() {
            stdin.write_all(text.as_bytes())?;
        }
        Ok(child.wait()?.success())
    }
}

impl Clipboard for SystemClipboard {
    fn copy(&self, text: &str) -> Result<()> {
        for (program, args) in COPY_COMMANDS {
            match Self::pipe_into(program, args, text) {
                Ok(true) => {
                    debug!("copied via {}", program);
                    return Ok(());
                }
                Ok(false) => debug!("{} exited unsuccessfully", program),
                Err(e) => debug!("{} unavailable: {}", program, e),
            }
        }
        Err(J2gError::clipboard(
            "no clipboard tool found (tried pbcopy, clip, wl-copy, xclip, xsel)",
        ))
    }
}

/// Clipboard that remembers what was copied
#[derive(Debug, Default)]
pub struct MockClipboard {
    copied: Mutex<Vec<String>>,
    broken: bool,
}

impl MockClipboard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn broken() -> Self {
        MockClipboard {
            broken: true,
            ..Self::default()
        }
    }

    pub fn contents(&self) -> Vec<String> {
        self.copied
            .lock()
            .map(|c| c.clone())
            .unwrap_or_default()
    }
}

impl Clipboard for MockClipboard {
    fn copy(&self, text: &str) -> Result<()> {
        if self.broken {
            return Err(J2gError::clipboard("no clipboard"));
        }
        if let Ok(mut copied) = self.copied.lock() {
            copied.push(text.to_string());
        }
        Ok(())
    }
}
