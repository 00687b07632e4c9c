//! Tool Dispatcher Module
//!
//! Single entry point for invoking a named tool. Stateless: every call is
//! independent, with no retry and no timeout.

use std::sync::Arc;

use wydln_domain::{Error, InvocationResult, Result, ToolArguments};

use super::ToolRegistry;

/// Dispatches tool calls to the registry's tools
#[derive(Debug, Clone)]
pub struct ToolDispatcher {
    registry: Arc<ToolRegistry>,
}

impl ToolDispatcher {
    /// Create a dispatcher over a registry
    pub fn new(registry: Arc<ToolRegistry>) -> Self {
        Self { registry }
    }

    /// The registry this dispatcher reads from
    pub fn registry(&self) -> &Arc<ToolRegistry> {
        &self.registry
    }

    /// Run the tool registered under `name`
    ///
    /// # Errors
    ///
    /// - `Error::ToolNotFound` if no tool has that name
    /// - `Error::ToolExecution` wrapping whatever the tool failed with
    pub fn run(&self, name: &str, arguments: &ToolArguments) -> Result<InvocationResult> {
        let tool = self.registry.get(name).ok_or_else(|| Error::ToolNotFound {
            name: name.to_string(),
        })?;

        tool.run(arguments)
            .map_err(|source| Error::tool_execution(name, source))
    }
}
