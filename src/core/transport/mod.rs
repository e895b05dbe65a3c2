//! Transports the ClickSend tool server can be reached over.
//!
//! | Transport | Feature | Wire format |
//! |---|---|---|
//! | STDIO | `stdio` (default) | MCP over stdin/stdout, via rmcp |
//! | TCP | `tcp` | MCP over a raw socket, one rmcp session per connection |
//! | HTTP | `http` | Hand-rolled JSON-RPC over `POST`, tools only |
//!
//! [`TransportConfig::from_env`] picks one at startup and
//! [`TransportService`] runs it. At least one feature must be enabled.

mod config;
mod error;
mod service;

#[cfg(feature = "stdio")]
pub mod stdio;

#[cfg(feature = "tcp")]
pub mod tcp;

#[cfg(feature = "http")]
pub mod http;

pub use config::TransportConfig;
pub use error::{TransportError, TransportResult};
pub use service::TransportService;

#[cfg(feature = "tcp")]
pub use config::TcpConfig;

#[cfg(feature = "http")]
pub use config::HttpConfig;
