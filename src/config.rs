//! Configuration loading and constants.
//!
//! Loads application configuration from an optional TOML file, layers the
//! environment overrides injected by the container platform and the command
//! line on top of it, and defines the
//! defaults used when nothing is configured. `AppConfig` is the root
//! configuration struct containing all settings.

use std::net::SocketAddr;
use std::path::Path;

use const_format::formatcp;
use serde::Deserialize;

// =============================================================================
// Response Payloads
// =============================================================================

/// Greeting returned by `GET /`
pub const ROOT_MESSAGE: &str = "Hello, world from FastAPI on Azure Container Apps";

/// Status returned by `GET /health`
pub const HEALTH_STATUS: &str = "ok";

/// Cache-Control for probe responses - never served from an intermediary cache
pub const CACHE_CONTROL_HEALTH: &str = "no-store";

// =============================================================================
// HTTP Server Defaults
// =============================================================================

/// Default bind host (all interfaces, as expected inside a container)
pub const DEFAULT_HTTP_HOST: &str = "0.0.0.0";

/// Default listen port
pub const DEFAULT_HTTP_PORT: u16 = 8000;

/// Default bind address, composed at compile time
pub const DEFAULT_HTTP_ADDR: &str = formatcp!("{}:{}", DEFAULT_HTTP_HOST, DEFAULT_HTTP_PORT);

/// Seconds to wait for in-flight requests after a shutdown signal
pub const DEFAULT_SHUTDOWN_TIMEOUT_SECS: u64 = 30;

// =============================================================================
// Environment and Logging
// =============================================================================

/// Environment variable overriding `http.host`
pub const ENV_HOST: &str = "HOST";

/// Environment variable overriding `http.port`
pub const ENV_PORT: &str = "PORT";

/// Default log filter when RUST_LOG is not set
pub const DEFAULT_LOG_FILTER: &str = "quickstart=info";

#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// HTTP server configuration
    #[serde(default)]
    pub http: HttpServerConfig,
    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// HTTP server configuration
#[derive(Debug, Clone, Deserialize)]
pub struct HttpServerConfig {
    #[serde(default = "HttpServerConfig::default_host")]
    pub host: String,
    #[serde(default = "HttpServerConfig::default_port")]
    pub port: u16,
    /// Grace period for draining connections on shutdown
    #[serde(default = "HttpServerConfig::default_shutdown_timeout")]
    pub shutdown_timeout_seconds: u64,
}

impl Default for HttpServerConfig {
    fn default() -> Self {
        Self {
            host: Self::default_host(),
            port: Self::default_port(),
            shutdown_timeout_seconds: Self::default_shutdown_timeout(),
        }
    }
}

impl HttpServerConfig {
    fn default_host() -> String {
        DEFAULT_HTTP_HOST.to_string()
    }

    fn default_port() -> u16 {
        DEFAULT_HTTP_PORT
    }

    fn default_shutdown_timeout() -> u64 {
        DEFAULT_SHUTDOWN_TIMEOUT_SECS
    }

    /// Parse `host:port` into a socket address.
    ///
    /// IPv6 hosts may be given with or without brackets.
    pub fn socket_addr(&self) -> Result<SocketAddr, ConfigError> {
        let host = self.host.trim_start_matches('[').trim_end_matches(']');
        let addr = if host.contains(':') {
            format!("[{}]:{}", host, self.port)
        } else {
            format!("{}:{}", host, self.port)
        };
        addr.parse().map_err(|e| {
            ConfigError::Validation(format!("Invalid http.host or http.port '{}': {}", addr, e))
        })
    }
}

/// Log output format
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// Human-readable lines
    #[default]
    Text,
    /// One JSON object per event
    Json,
}

/// Logging configuration
#[derive(Debug, Clone, Default, Deserialize)]
pub struct LoggingConfig {
    #[serde(default)]
    pub format: LogFormat,
}

/// Values given on the command line, highest precedence
#[derive(Debug, Clone, Default)]
pub struct CliOverrides {
    pub host: Option<String>,
    pub port: Option<u16>,
}

impl AppConfig {
    /// Load configuration from a TOML file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        let config = Self::from_toml(&contents)?;
        Ok(config)
    }

    /// Parse configuration from TOML text.
    ///
    /// Values are not validated here; later layers may still replace them.
    pub fn from_toml(contents: &str) -> Result<Self, ConfigError> {
        let config: AppConfig = toml::from_str(contents)?;
        Ok(config)
    }

    /// Layer the process environment and command line over this config.
    pub fn with_overrides(self, cli: CliOverrides) -> Result<Self, ConfigError> {
        self.with_overrides_from(|key| std::env::var(key).ok(), cli)
    }

    /// Layer an arbitrary variable lookup and the command line over this config,
    /// then validate the result.
    ///
    /// Precedence is CLI > environment > file. An environment value shadowed by
    /// a CLI flag is never parsed.
    pub fn with_overrides_from<F>(mut self, lookup: F, cli: CliOverrides) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        match cli.host {
            Some(host) => self.http.host = host,
            None => {
                if let Some(host) = lookup(ENV_HOST).filter(|h| !h.trim().is_empty()) {
                    self.http.host = host.trim().to_string();
                }
            }
        }

        match cli.port {
            Some(port) => self.http.port = port,
            None => {
                if let Some(port) = lookup(ENV_PORT).filter(|p| !p.trim().is_empty()) {
                    self.http.port = port.trim().parse().map_err(|_| {
                        ConfigError::Validation(format!(
                            "{} must be a port number, got '{}'",
                            ENV_PORT, port
                        ))
                    })?;
                }
            }
        }

        self.validate()?;
        Ok(self)
    }

    /// Check invariants that serde cannot express.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.http.port == 0 {
            return Err(ConfigError::Validation(
                "http.port must be between 1 and 65535".to_string(),
            ));
        }
        if self.http.host.trim().is_empty() {
            return Err(ConfigError::Validation("http.host must not be empty".to_string()));
        }
        self.http.socket_addr().map(|_| ())
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),
    #[error("Failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("Configuration error: {0}")]
    Validation(String),
}
