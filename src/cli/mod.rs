//! CLI module for videohub
//!
//! Provides command-line interface for:
//! - serve: Resolve configuration and run the HTTP server

mod args;
mod commands;
mod errors;

pub use args::{Cli, Command, ServeArgs};
pub use commands::{resolve_config, run, run_command, serve};
pub use errors::{CliError, CliErrorCode, CliResult};
