//! Endpoint tool - binds one endpoint definition to the shared API client.
//!
//! An [`EndpointTool`] provides everything a transport needs:
//! - `to_tool()` for tool metadata
//! - `create_route()` for STDIO/TCP transport via rmcp
//! - `http_handler()` for the HTTP transport

use futures::FutureExt;
use rmcp::{
    ErrorData as McpError,
    handler::server::tool::{ToolCallContext, ToolRoute},
    model::{CallToolResult, Content, JsonObject, Tool},
};
use serde_json::Value;
use std::sync::Arc;
use tracing::{info, instrument, warn};

use super::client::ApiClient;
use super::endpoint::EndpointDefinition;
use super::error::ToolError;

/// Create an error result with a formatted message.
pub fn error_result(message: &str) -> CallToolResult {
    warn!("{}", message);
    CallToolResult::error(vec![Content::text(message.to_string())])
}

/// Create a success result with text content.
pub fn success_result(content: String) -> CallToolResult {
    CallToolResult::success(vec![Content::text(content)])
}

/// A single upstream endpoint exposed as an MCP tool.
#[derive(Debug, Clone)]
pub struct EndpointTool {
    definition: &'static EndpointDefinition,
    client: ApiClient,
}

impl EndpointTool {
    pub fn new(definition: &'static EndpointDefinition, client: ApiClient) -> Self {
        Self { definition, client }
    }

    /// Tool name as registered in MCP.
    pub fn name(&self) -> &'static str {
        self.definition.name
    }

    pub fn definition(&self) -> &'static EndpointDefinition {
        self.definition
    }

    /// Execute the tool against the upstream API.
    ///
    /// Never fails at the protocol level: every error becomes a failing
    /// tool result carrying the error message.
    #[instrument(skip_all, fields(tool = self.name()))]
    pub async fn execute(&self, args: &JsonObject) -> CallToolResult {
        info!("Tool called: {}", self.name());

        match self.client.execute(self.definition, args).await {
            Ok(text) => success_result(text),
            Err(e) => error_result(&e.to_string()),
        }
    }

    /// Execute with an untyped argument payload.
    ///
    /// `null` is treated as an empty argument set; anything other than a
    /// JSON object is rejected.
    pub async fn call(&self, arguments: Value) -> CallToolResult {
        match arguments {
            Value::Object(args) => self.execute(&args).await,
            Value::Null => self.execute(&JsonObject::new()).await,
            _ => error_result(&ToolError::InvalidArguments.to_string()),
        }
    }

    /// HTTP handler for this tool (for HTTP transport).
    pub async fn http_handler(&self, arguments: Value) -> Result<Value, String> {
        let result = self.call(arguments).await;

        Ok(serde_json::json!({
            "content": result.content,
            "isError": result.is_error.unwrap_or(false)
        }))
    }

    /// Create a Tool model for this tool (metadata).
    pub fn to_tool(&self) -> Tool {
        Tool {
            name: self.definition.name.into(),
            description: Some(self.definition.description.into()),
            input_schema: Arc::new(self.definition.input_schema()),
            annotations: None,
            output_schema: None,
            icons: None,
            meta: None,
            title: None,
        }
    }

    /// Create a ToolRoute for STDIO/TCP transport.
    pub fn create_route<S>(self) -> ToolRoute<S>
    where
        S: Send + Sync + 'static,
    {
        ToolRoute::new_dyn(self.to_tool(), move |ctx: ToolCallContext<'_, S>| {
            let args = ctx.arguments.clone().unwrap_or_default();
            let tool = self.clone();
            async move { Ok::<_, McpError>(tool.execute(&args).await) }.boxed()
        })
    }
}
