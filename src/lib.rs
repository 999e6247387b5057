pub mod boundary;
pub mod cli;
pub mod clipboard;
pub mod config;
pub mod domain;
pub mod error;
pub mod git;
pub mod jira;
pub mod ui;

pub use error::{J2gError, Result};
