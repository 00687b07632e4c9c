//! MCP Tools Module
//!
//! - registry.rs - Tool registration and descriptor snapshots
//! - dispatcher.rs - Tool lookup and invocation

pub mod dispatcher;
pub mod registry;

use std::sync::Arc;

use wydln_domain::Tool;

use crate::handlers::GetUserHandler;

pub use dispatcher::ToolDispatcher;
pub use registry::ToolRegistry;

/// Every tool the server ships with, in advertised order
pub fn builtin_tools() -> Vec<Arc<dyn Tool>> {
    vec![Arc::new(GetUserHandler::new())]
}
