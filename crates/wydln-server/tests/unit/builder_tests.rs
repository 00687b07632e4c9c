//! MCP Server Builder Tests

use std::sync::Arc;

use rmcp::ServerHandler;
use wydln_infrastructure::config::ServerConfig;
use wydln_server::builder::BuilderError;
use wydln_server::tools::builtin_tools;
use wydln_server::{McpServerBuilder, ToolRegistry};

fn registry() -> Arc<ToolRegistry> {
    Arc::new(ToolRegistry::initialize(builtin_tools()).unwrap())
}

#[test]
fn test_builder_requires_registry() {
    let result = McpServerBuilder::new().build();
    assert!(matches!(
        result,
        Err(BuilderError::MissingDependency("tool registry"))
    ));
}

#[test]
fn test_builder_defaults_identity() {
    let server = McpServerBuilder::new()
        .with_registry(registry())
        .build()
        .unwrap();

    assert_eq!(server.identity(), &ServerConfig::default());
    assert_eq!(server.identity().name, "my-mcp-server");
    assert_eq!(server.identity().version, "1.0.0");
}

#[test]
fn test_server_info_reports_identity_and_tools() {
    let server = McpServerBuilder::new()
        .with_registry(registry())
        .with_identity(ServerConfig {
            name: "custom".to_string(),
            version: "9.9.9".to_string(),
        })
        .build()
        .unwrap();

    let info = server.get_info();
    assert_eq!(info.server_info.name, "custom");
    assert_eq!(info.server_info.version, "9.9.9");
    assert!(info.capabilities.tools.is_some());
    assert!(
        info.instructions
            .unwrap_or_default()
            .contains("wydln-get-user")
    );
}

#[test]
fn test_server_clones_share_registry() {
    let server = McpServerBuilder::new()
        .with_registry(registry())
        .build()
        .unwrap();
    let clone = server.clone();

    assert!(Arc::ptr_eq(&server.registry(), &clone.registry()));
}
