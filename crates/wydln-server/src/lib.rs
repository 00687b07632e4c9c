//! # wydln Tool Server
//!
//! MCP server exposing a registry of tools over stdin/stdout.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use wydln_server::run;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     // Default config (config file discovery + environment)
//!     run(None).await?;
//!     Ok(())
//! }
//! ```
//!
//! ## Architecture
//!
//! | Type | Description |
//! |------|-------------|
//! | [`ToolRegistry`] | Tools and their descriptor snapshots, built once at startup |
//! | [`ToolDispatcher`] | Looks up a tool by name and runs it |
//! | [`McpServer`] | `rmcp` server handler forwarding list/call requests |
//! | [`McpServerBuilder`] | Builder for server construction |
//!
//! The wire protocol is handled entirely by `rmcp`; this crate only adapts
//! its requests to the registry and dispatcher.

pub mod args;
pub mod builder;
pub mod constants;
pub mod formatter;
pub mod handlers;
pub mod init;
pub mod mcp_server;
pub mod tools;
pub mod transport;

// Re-export core types for public API
pub use builder::McpServerBuilder;
pub use init::run;
pub use mcp_server::McpServer;
pub use tools::{ToolDispatcher, ToolRegistry};
