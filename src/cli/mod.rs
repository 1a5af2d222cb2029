//! CLI module
//!
//! Provides command-line interface for:
//! - serve: Load configuration, build the adapter and serve HTTP
//! - check-config: Validate a configuration file and exit

mod args;
mod commands;
mod errors;

pub use args::{Cli, Command};
pub use commands::{check_config, run, run_command, serve, AdapterSettings, Config};
pub use errors::{CliError, CliErrorCode, CliResult};
