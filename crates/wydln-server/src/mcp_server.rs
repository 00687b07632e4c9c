//! MCP Server Implementation
//!
//! Adapts `rmcp` list/call requests to the tool registry and dispatcher.

use std::sync::Arc;

use rmcp::ErrorData as McpError;
use rmcp::ServerHandler;
use rmcp::model::{
    CallToolRequestParams, CallToolResult, Implementation, ListToolsResult, PaginatedRequestParams,
    ProtocolVersion, ServerCapabilities, ServerInfo,
};
use rmcp::service::RequestContext;
use rmcp::RoleServer;
use tracing::{debug, warn};
use wydln_infrastructure::config::ServerConfig;

use crate::formatter::ResponseFormatter;
use crate::tools::{ToolDispatcher, ToolRegistry};

/// Core MCP server implementation
///
/// Holds the registry built at startup and the identity reported to clients.
/// Cloning is cheap; all clones share the same registry.
#[derive(Debug, Clone)]
pub struct McpServer {
    /// Dispatcher over the shared registry
    dispatcher: ToolDispatcher,
    /// Name and version reported in the handshake
    identity: ServerConfig,
}

impl McpServer {
    /// Create a new MCP server over a registry
    pub fn new(registry: Arc<ToolRegistry>, identity: ServerConfig) -> Self {
        Self {
            dispatcher: ToolDispatcher::new(registry),
            identity,
        }
    }

    /// Access to the tool registry
    pub fn registry(&self) -> Arc<ToolRegistry> {
        Arc::clone(self.dispatcher.registry())
    }

    /// Access to the dispatcher
    pub fn dispatcher(&self) -> &ToolDispatcher {
        &self.dispatcher
    }

    /// Identity reported to clients
    pub fn identity(&self) -> &ServerConfig {
        &self.identity
    }
}

impl ServerHandler for McpServer {
    /// Get server information and capabilities
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: ProtocolVersion::V_2024_11_05,
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info: Implementation {
                name: self.identity.name.clone(),
                version: self.identity.version.clone(),
                ..Default::default()
            },
            instructions: Some(ResponseFormatter::instructions(
                self.dispatcher.registry().list_descriptors(),
            )),
        }
    }

    /// List available tools
    async fn list_tools(
        &self,
        _pagination: Option<PaginatedRequestParams>,
        _context: RequestContext<RoleServer>,
    ) -> Result<ListToolsResult, McpError> {
        let tools = ResponseFormatter::tool_list(self.dispatcher.registry().list_descriptors());
        debug!(count = tools.len(), "Listing tools");
        Ok(ListToolsResult {
            tools,
            meta: Default::default(),
            next_cursor: None,
        })
    }

    /// Call a tool
    async fn call_tool(
        &self,
        request: CallToolRequestParams,
        _context: RequestContext<RoleServer>,
    ) -> Result<CallToolResult, McpError> {
        let arguments = request.arguments.unwrap_or_default();
        debug!(tool = %request.name, "Calling tool");

        match self.dispatcher.run(&request.name, &arguments) {
            Ok(result) => Ok(ResponseFormatter::call_result(result)),
            Err(e) => {
                warn!(tool = %request.name, error = %e, "Tool call failed");
                Err(ResponseFormatter::error(&e))
            }
        }
    }
}
