//! Tool-specific error types.
//!
//! The `Display` output of each variant is the text returned to MCP clients
//! in a failing tool result.

use thiserror::Error;

/// Errors that can occur during tool operations.
#[derive(Debug, Error)]
pub enum ToolError {
    /// The requested tool was not found.
    #[error("Unknown tool: {0}")]
    NotFound(String),

    /// The arguments payload was not a JSON object.
    #[error("Invalid arguments object")]
    InvalidArguments,

    /// A required parameter was absent or null.
    #[error("Missing required parameter: {0}")]
    MissingParameter(String),

    /// A parameter was supplied with the wrong JSON type.
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    /// The upstream request could not be constructed.
    #[error("Failed to create request: {0}")]
    RequestBuild(String),

    /// The request could not be delivered (DNS, connect, TLS, ...).
    #[error("Request failed: {0}")]
    Transport(String),

    /// The upstream API answered with a status >= 400.
    #[error("API error: {0}")]
    Api(String),

    /// The response body could not be read.
    #[error("Failed to read response body: {0}")]
    ResponseRead(String),
}

impl ToolError {
    /// Create a new "not found" error.
    pub fn not_found(name: impl Into<String>) -> Self {
        Self::NotFound(name.into())
    }

    pub fn missing_parameter(name: impl Into<String>) -> Self {
        Self::MissingParameter(name.into())
    }

    pub fn invalid_parameter(name: impl Into<String>) -> Self {
        Self::InvalidParameter(name.into())
    }

    pub fn request_build(msg: impl Into<String>) -> Self {
        Self::RequestBuild(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_error_carries_body() {
        let err = ToolError::Api(r#"{"response_code":"BAD_REQUEST"}"#.to_string());
        assert_eq!(err.to_string(), r#"API error: {"response_code":"BAD_REQUEST"}"#);
    }

    #[test]
    fn test_parameter_errors() {
        assert_eq!(
            ToolError::missing_parameter("to").to_string(),
            "Missing required parameter: to"
        );
        assert_eq!(
            ToolError::invalid_parameter("messages").to_string(),
            "Invalid parameter: messages"
        );
    }
}
