//! Server Initialization
//!
//! Startup sequence: configuration, logging, tool registry, stdio transport.

use std::path::Path;
use std::sync::Arc;

use tracing::info;
use wydln_infrastructure::config::ConfigLoader;
use wydln_infrastructure::logging::{init_logging, log_config_loaded};

use crate::McpServerBuilder;
use crate::tools::{ToolRegistry, builtin_tools};
use crate::transport::StdioServerExt;

/// Run the tool server
///
/// Loads configuration (optional explicit file), initializes logging,
/// registers the built-in tools and serves MCP on stdio until the client
/// disconnects or a shutdown signal arrives.
pub async fn run(config_path: Option<&Path>) -> Result<(), Box<dyn std::error::Error>> {
    let loader = match config_path {
        Some(path) => ConfigLoader::new().with_config_path(path),
        None => ConfigLoader::new(),
    };
    let config = loader.load()?;
    init_logging(&config.logging)?;

    if let Some(path) = loader.resolved_config_path() {
        log_config_loaded(&path, path.exists());
    }

    info!(
        name = %config.server.name,
        version = %config.server.version,
        "Starting tool server"
    );

    let registry = Arc::new(ToolRegistry::initialize(builtin_tools())?);
    info!(tools = ?registry.names(), "Tool registry initialized");

    let server = McpServerBuilder::new()
        .with_registry(registry)
        .with_identity(config.server)
        .build()?;

    server.serve_stdio().await?;
    Ok(())
}

