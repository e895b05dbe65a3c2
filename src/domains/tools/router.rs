//! Tool Router - builds the rmcp ToolRouter from the registry.
//!
//! This module builds the ToolRouter for STDIO/TCP transport by delegating
//! to the tools themselves. Each tool knows how to create its own route.

use rmcp::handler::server::tool::ToolRouter;

use super::registry::ToolRegistry;

/// Build the tool router with all registered tools.
pub fn build_tool_router<S>(registry: &ToolRegistry) -> ToolRouter<S>
where
    S: Send + Sync + 'static,
{
    registry
        .tools()
        .iter()
        .cloned()
        .fold(ToolRouter::new(), |router, tool| {
            router.with_route(tool.create_route())
        })
}
