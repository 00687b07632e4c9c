//! MCP Server Builder
//!
//! Builder pattern for constructing MCP servers with their dependencies.

use std::sync::Arc;

use wydln_infrastructure::config::ServerConfig;

use crate::McpServer;
use crate::tools::ToolRegistry;

/// Builder for MCP Server
///
/// The registry is required; the identity falls back to the default
/// server name and version.
#[derive(Default)]
pub struct McpServerBuilder {
    registry: Option<Arc<ToolRegistry>>,
    identity: Option<ServerConfig>,
}

impl McpServerBuilder {
    /// Create a new server builder
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the tool registry
    pub fn with_registry(mut self, registry: Arc<ToolRegistry>) -> Self {
        self.registry = Some(registry);
        self
    }

    /// Set the name and version reported to clients
    pub fn with_identity(mut self, identity: ServerConfig) -> Self {
        self.identity = Some(identity);
        self
    }

    /// Build the MCP server
    ///
    /// # Errors
    /// Returns `BuilderError::MissingDependency` if the registry is not provided
    pub fn build(self) -> Result<McpServer, BuilderError> {
        let registry = self
            .registry
            .ok_or(BuilderError::MissingDependency("tool registry"))?;

        Ok(McpServer::new(registry, self.identity.unwrap_or_default()))
    }
}

/// Errors that can occur during server building
#[derive(Debug, thiserror::Error)]
pub enum BuilderError {
    /// A required dependency was not provided
    #[error("Missing required dependency: {0}")]
    MissingDependency(&'static str),
}
