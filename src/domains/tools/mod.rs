//! Tools domain module.
//!
//! Every tool wraps exactly one ClickSend REST endpoint. Tools are not
//! hand-written handlers: each is an entry in the declarative endpoint table
//! executed by one generic request executor.
//!
//! ## Architecture
//!
//! - `endpoint.rs` - Endpoint/parameter model, schema, validation, URL rendering
//! - `client.rs` - Shared upstream HTTP client and request executor
//! - `definitions/` - The endpoint table, one file per API category
//! - `tool.rs` - `EndpointTool`, binding a definition to the client
//! - `router.rs` - Dynamic ToolRouter builder for STDIO/TCP transport
//! - `registry.rs` - Central tool registry and HTTP dispatch
//! - `error.rs` - Tool-specific error types
//!
//! ## Adding a New Tool
//!
//! Add an `EndpointDefinition` to the matching file in `definitions/`.
//! The registry and router pick it up automatically.

pub mod client;
pub mod definitions;
pub mod endpoint;
mod error;
mod registry;
pub mod router;
pub mod tool;

pub use client::ApiClient;
pub use endpoint::{EndpointDefinition, HttpMethod, ParamKind, ParamLocation, ParamSpec};
pub use error::ToolError;
pub use registry::ToolRegistry;
pub use router::build_tool_router;
pub use tool::EndpointTool;
