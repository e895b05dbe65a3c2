//! Domains module containing business logic organized by bounded contexts.
//!
//! The server currently has a single domain: the tools that wrap the
//! upstream messaging API.

pub mod tools;
