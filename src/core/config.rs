//! Configuration management for the MCP server.
//!
//! This module provides a centralized configuration structure that can be
//! populated from environment variables, a `.env` file, or defaults.

use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use super::error::{Error, Result};
use super::transport::TransportConfig;

/// Default ClickSend REST API root.
pub const DEFAULT_API_BASE_URL: &str = "https://rest.clicksend.com/v3";

/// Main configuration structure for the MCP server.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Server identification and metadata.
    pub server: ServerConfig,

    /// Logging configuration.
    pub logging: LoggingConfig,

    /// Transport configuration.
    pub transport: TransportConfig,

    /// Upstream API endpoint and credentials.
    pub api: ApiConfig,
}

/// Server identification configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// The name of the server as reported to clients.
    pub name: String,

    /// The version of the server.
    pub version: String,
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level filter (e.g., "info", "debug", "trace").
    pub level: String,

    /// Whether to include timestamps in log output.
    pub with_timestamps: bool,
}

/// Upstream API configuration shared by every tool.
#[derive(Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Base URL every endpoint template is appended to, without trailing `/`.
    pub base_url: String,

    /// Pre-encoded HTTP Basic credential (`base64(username:api_key)`).
    pub basic_auth: Option<String>,
}

/// Custom Debug implementation to redact secrets from logs.
impl std::fmt::Debug for ApiConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiConfig")
            .field("base_url", &self.base_url)
            .field("basic_auth", &self.basic_auth.as_ref().map(|_| "[REDACTED]"))
            .finish()
    }
}

impl ApiConfig {
    pub fn new(base_url: impl Into<String>, basic_auth: Option<String>) -> Self {
        let base_url: String = base_url.into();
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            basic_auth,
        }
    }

    /// Encode a username / API key pair into a Basic credential.
    pub fn encode_basic_auth(username: &str, api_key: &str) -> String {
        STANDARD.encode(format!("{username}:{api_key}"))
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self::new(DEFAULT_API_BASE_URL, None)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server: ServerConfig {
                name: "clicksend-mcp-server".to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
            },
            logging: LoggingConfig {
                level: "info".to_string(),
                with_timestamps: true,
            },
            transport: TransportConfig::default(),
            api: ApiConfig::default(),
        }
    }
}

impl Config {
    /// Create a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Load configuration from environment variables.
    ///
    /// Environment variables are expected to be prefixed with `MCP_`.
    /// For example: `MCP_SERVER_NAME`, `MCP_API_BASE_URL`.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        let mut config = Self::default();

        if let Ok(name) = std::env::var("MCP_SERVER_NAME") {
            config.server.name = name;
        }

        if let Ok(level) = std::env::var("MCP_LOG_LEVEL") {
            config.logging.level = level;
        }

        if let Ok(timestamps) = std::env::var("MCP_LOG_TIMESTAMPS") {
            config.logging.with_timestamps = timestamps.parse().unwrap_or(true);
        }

        // Load transport configuration from environment
        config.transport = TransportConfig::from_env();

        let base_url =
            std::env::var("MCP_API_BASE_URL").unwrap_or_else(|_| DEFAULT_API_BASE_URL.to_string());
        config.api = ApiConfig::new(base_url, Self::basic_auth_from_env());

        config
    }

    /// Resolve the Basic credential, preferring the pre-encoded form.
    fn basic_auth_from_env() -> Option<String> {
        if let Ok(encoded) = std::env::var("MCP_API_BASIC_AUTH") {
            if !encoded.is_empty() {
                info!("API credential loaded from MCP_API_BASIC_AUTH");
                return Some(encoded);
            }
        }

        match (
            std::env::var("MCP_API_USERNAME"),
            std::env::var("MCP_API_KEY"),
        ) {
            (Ok(username), Ok(api_key)) => {
                info!("API credential derived from MCP_API_USERNAME / MCP_API_KEY");
                Some(ApiConfig::encode_basic_auth(&username, &api_key))
            }
            _ => {
                warn!(
                    "No API credential configured. Set MCP_API_BASIC_AUTH, \
                     or MCP_API_USERNAME and MCP_API_KEY; requests will be sent unauthenticated."
                );
                None
            }
        }
    }

    /// Check the configuration for values that cannot work.
    pub fn validate(&self) -> Result<()> {
        let base_url = &self.api.base_url;
        if !(base_url.starts_with("http://") || base_url.starts_with("https://")) {
            return Err(Error::config(format!(
                "MCP_API_BASE_URL must start with http:// or https://, got '{base_url}'"
            )));
        }
        Ok(())
    }
}
