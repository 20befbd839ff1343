//! HTTP Server Configuration
//!
//! Defaults, overridden by an optional JSON file, then by the `PORT`
//! environment variable. CLI flags are applied last by the caller.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::observability::Severity;

/// Environment variable that overrides the configured port
pub const PORT_ENV: &str = "PORT";

/// Configuration errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config '{path}': {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Invalid config JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Invalid port '{0}'")]
    InvalidPort(String),

    #[error("Invalid log level: {0}")]
    InvalidLogLevel(String),
}

/// HTTP server configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HttpServerConfig {
    /// Host to bind to (default: "0.0.0.0")
    #[serde(default = "default_host")]
    pub host: String,

    /// Port to bind to (default: 3003)
    #[serde(default = "default_port")]
    pub port: u16,

    /// CORS allowed origins (default: empty, any origin allowed)
    #[serde(default)]
    pub cors_origins: Vec<String>,

    /// Start with the demo course catalogue instead of an empty one
    #[serde(default)]
    pub seed_demo_courses: bool,

    /// Minimum log severity: trace, info, warn or error (default: "info")
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    3003
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for HttpServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            cors_origins: Vec::new(),
            seed_demo_courses: false,
            log_level: default_log_level(),
        }
    }
}

impl HttpServerConfig {
    /// Create a new config with specified port
    pub fn with_port(port: u16) -> Self {
        Self {
            port,
            ..Default::default()
        }
    }

    /// Load configuration from a JSON file; missing keys take defaults
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let config: HttpServerConfig = serde_json::from_str(&content)?;
        config.severity()?;
        Ok(config)
    }

    /// Apply a `PORT` value. Unset or blank leaves the port unchanged.
    pub fn with_env_port(mut self, value: Option<&str>) -> Result<Self, ConfigError> {
        if let Some(raw) = value.map(str::trim).filter(|v| !v.is_empty()) {
            self.port = raw
                .parse()
                .map_err(|_| ConfigError::InvalidPort(raw.to_string()))?;
        }
        Ok(self)
    }

    /// Parsed log level
    pub fn severity(&self) -> Result<Severity, ConfigError> {
        self.log_level.parse().map_err(ConfigError::InvalidLogLevel)
    }

    /// Get the socket address string
    pub fn socket_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
