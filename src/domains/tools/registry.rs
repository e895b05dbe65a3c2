//! Tool Registry - central registration and dispatch for all tools.
//!
//! This module provides:
//! - A registry of all available tools, one per endpoint definition
//! - Dispatch of tool calls by name (used by the HTTP transport)
//! - Tool metadata for listing

use rmcp::model::Tool;
use tracing::warn;

use crate::core::Result;
use crate::core::config::Config;

use super::client::ApiClient;
use super::definitions;
use super::error::ToolError;
use super::tool::EndpointTool;

/// Tool registry - manages all available tools.
///
/// Every tool shares the same [`ApiClient`], so the registry is cheap to
/// clone per server instance.
#[derive(Debug, Clone)]
pub struct ToolRegistry {
    tools: Vec<EndpointTool>,
}

impl ToolRegistry {
    /// Create a new tool registry from the server configuration.
    pub fn new(config: &Config) -> Result<Self> {
        let client = ApiClient::new(&config.api)?;
        Ok(Self::with_client(client))
    }

    /// Create a registry whose tools all use `client`.
    pub fn with_client(client: ApiClient) -> Self {
        let tools = definitions::all()
            .map(|definition| EndpointTool::new(definition, client.clone()))
            .collect();
        Self { tools }
    }

    /// Get all tool names.
    pub fn tool_names(&self) -> Vec<&'static str> {
        self.tools.iter().map(EndpointTool::name).collect()
    }

    /// Get all tools as Tool models (metadata).
    pub fn get_all_tools(&self) -> Vec<Tool> {
        self.tools.iter().map(EndpointTool::to_tool).collect()
    }

    pub fn tools(&self) -> &[EndpointTool] {
        &self.tools
    }

    /// Look up a tool by name.
    pub fn get(&self, name: &str) -> Option<&EndpointTool> {
        self.tools.iter().find(|tool| tool.name() == name)
    }

    /// Dispatch a tool call to the matching tool.
    ///
    /// Unknown tools are an `Err`; failures inside a known tool come back as
    /// an `Ok` payload with `isError` set.
    pub async fn call_tool(
        &self,
        name: &str,
        arguments: serde_json::Value,
    ) -> std::result::Result<serde_json::Value, String> {
        match self.get(name) {
            Some(tool) => tool.http_handler(arguments).await,
            None => {
                warn!("Unknown tool requested: {}", name);
                Err(ToolError::not_found(name).to_string())
            }
        }
    }
}
