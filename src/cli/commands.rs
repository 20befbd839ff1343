//! CLI command implementations

use std::env;

use crate::http_server::{HttpServer, HttpServerConfig, PORT_ENV};
use crate::observability::{log_event_with_fields, Event, Logger};

use super::args::{Command, ServeArgs};
use super::errors::{CliError, CliResult};

/// Parse arguments and run the selected command
pub fn run() -> CliResult<()> {
    let cli = super::args::Cli::parse_args();
    run_command(cli.command)
}

/// Run the appropriate command based on CLI args
pub fn run_command(cmd: Command) -> CliResult<()> {
    match cmd {
        Command::Serve(args) => serve(&args),
    }
}

/// Resolve the server configuration.
///
/// Precedence, lowest first: defaults, config file, `PORT`, CLI flags.
pub fn resolve_config(args: &ServeArgs, env_port: Option<&str>) -> CliResult<HttpServerConfig> {
    let base = match &args.config {
        Some(path) => HttpServerConfig::from_file(path)?,
        None => HttpServerConfig::default(),
    };
    let mut config = base.with_env_port(env_port)?;

    if let Some(host) = &args.host {
        config.host = host.clone();
    }
    if let Some(port) = args.port {
        config.port = port;
    }
    if args.seed {
        config.seed_demo_courses = true;
    }
    if let Some(level) = &args.log_level {
        config.log_level = level.clone();
    }
    config.severity()?;

    Ok(config)
}

/// Start the HTTP server and block until shutdown
pub fn serve(args: &ServeArgs) -> CliResult<()> {
    let env_port = env::var(PORT_ENV).ok();
    let config = resolve_config(args, env_port.as_deref())?;
    Logger::set_min_severity(config.severity()?);

    log_event_with_fields(
        Event::ServerStart,
        &[
            ("addr", &config.socket_addr()),
            ("seed_demo_courses", &config.seed_demo_courses.to_string()),
        ],
    );

    let server = HttpServer::with_config(config);

    let rt = tokio::runtime::Runtime::new()
        .map_err(|e| CliError::boot_failed(format!("Failed to create tokio runtime: {}", e)))?;

    rt.block_on(server.start())?;
    Ok(())
}
