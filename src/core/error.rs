//! Error types and handling for the MCP server.
//!
//! Only startup failures surface here. Per-call tool failures are returned
//! to the client as failing tool results and never reach this type.

use thiserror::Error;

/// A specialized Result type for MCP server operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Unified error type for the MCP server.
#[derive(Debug, Error)]
pub enum Error {
    /// Configuration-related errors.
    #[error("Configuration error: {0}")]
    Config(String),

    /// The upstream HTTP client could not be built.
    #[error("HTTP client error: {0}")]
    HttpClient(#[from] reqwest::Error),
}

impl Error {
    /// Create a new configuration error.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_error_display() {
        let err = Error::config("MCP_API_BASE_URL must start with http:// or https://");
        assert_eq!(
            err.to_string(),
            "Configuration error: MCP_API_BASE_URL must start with http:// or https://"
        );
    }
}
