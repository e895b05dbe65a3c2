//! ClickSend MCP Server Library
//!
//! This crate exposes the ClickSend messaging REST API (SMS, MMS, fax, voice,
//! post, email, contacts, ...) as Model Context Protocol (MCP) tools.
//!
//! # Architecture
//!
//! - **core**: Configuration, error handling, the MCP server handler and transports
//! - **domains**: Business logic organized by bounded contexts
//!   - **tools**: One tool per upstream endpoint, driven by a declarative table
//!
//! # Example
//!
//! ```rust,no_run
//! use clicksend_mcp_server::{core::McpServer, core::Config};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = Config::from_env();
//!     let server = McpServer::new(config)?;
//!     // Start the server...
//!     Ok(())
//! }
//! ```

pub mod core;
pub mod domains;

// Re-export commonly used types for convenience
pub use core::{Config, Error, McpServer, Result};
