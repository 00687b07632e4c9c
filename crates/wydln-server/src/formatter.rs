//! Response Formatting
//!
//! Converts domain values and errors into `rmcp` protocol types.

use std::sync::Arc;

use rmcp::ErrorData as McpError;
use rmcp::model::{CallToolResult, Content, Tool};
use wydln_domain::{Error, InvocationResult, ToolContent, ToolDescriptor};

use crate::constants::SERVER_INSTRUCTIONS_HEADING;

/// Response formatter for MCP tool responses
pub struct ResponseFormatter;

impl ResponseFormatter {
    /// Convert a descriptor into an MCP tool definition
    pub fn tool(descriptor: &ToolDescriptor) -> Tool {
        Tool::new(
            descriptor.name.clone(),
            descriptor.description.clone(),
            Arc::new(descriptor.input_schema.clone()),
        )
    }

    /// Convert descriptors into MCP tool definitions, keeping their order
    pub fn tool_list(descriptors: &[ToolDescriptor]) -> Vec<Tool> {
        descriptors.iter().map(Self::tool).collect()
    }

    /// Convert an invocation result into a successful MCP call result
    pub fn call_result(result: InvocationResult) -> CallToolResult {
        let content = result
            .content
            .into_iter()
            .map(|item| match item {
                ToolContent::Text { text } => Content::text(text),
            })
            .collect();
        CallToolResult::success(content)
    }

    /// Translate a domain error into a JSON-RPC error
    ///
    /// Unknown tools and bad arguments are invalid params; everything else is
    /// an internal error.
    pub fn error(error: &Error) -> McpError {
        if error.is_client_error() {
            McpError::invalid_params(error.to_string(), None)
        } else {
            McpError::internal_error(error.to_string(), None)
        }
    }

    /// Instructions listing each tool on its own line
    pub fn instructions(descriptors: &[ToolDescriptor]) -> String {
        let mut text = String::from(SERVER_INSTRUCTIONS_HEADING);
        for descriptor in descriptors {
            let summary = descriptor.description.lines().next().unwrap_or_default();
            text.push_str(&format!("\n- {}: {}", descriptor.name, summary));
        }
        text
    }
}
