//! CLI argument definitions using clap
//!
//! Commands:
//! - videohub serve [--config <path>] [--host <host>] [--port <port>] [--seed]

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// videohub - in-memory course and video API
#[derive(Parser, Debug)]
#[command(name = "videohub")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Start the HTTP server
    Serve(ServeArgs),
}

#[derive(Args, Debug, Clone, Default, PartialEq)]
pub struct ServeArgs {
    /// Path to a JSON configuration file
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Host to bind to (overrides config)
    #[arg(long)]
    pub host: Option<String>,

    /// Port to listen on (overrides config and PORT)
    #[arg(short, long)]
    pub port: Option<u16>,

    /// Start with the demo course catalogue
    #[arg(long)]
    pub seed: bool,

    /// Minimum log level: trace, info, warn, error
    #[arg(long)]
    pub log_level: Option<String>,
}

impl Cli {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}
