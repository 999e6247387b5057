//! Command implementations behind the `j2g` binary

pub mod config_command;
pub mod orchestration;

pub use config_command::{run_config, ConfigContext, ConfigMode, ConfigOutcome};
pub use orchestration::{failure_notices, run_create, ClientFactory, CreateArgs, CreateContext, CreateOutcome};
