//! Tool Registry Module
//!
//! Owns the set of available tools for the process lifetime. The registry is
//! filled once at startup and only read afterwards, so it is shared behind an
//! `Arc` without locking.

use std::collections::HashMap;
use std::sync::Arc;

use wydln_domain::{Error, Result, Tool, ToolDescriptor};

/// Registry of tools keyed by name
///
/// Descriptors are computed once, at registration, and listed in
/// registration order.
#[derive(Default)]
pub struct ToolRegistry {
    tools: HashMap<String, Arc<dyn Tool>>,
    descriptors: Vec<ToolDescriptor>,
}

impl std::fmt::Debug for ToolRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ToolRegistry")
            .field("tools", &self.names())
            .finish()
    }
}

impl ToolRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a registry from tools, registering them in order
    ///
    /// Stops at the first tool that fails registration.
    pub fn initialize<I>(tools: I) -> Result<Self>
    where
        I: IntoIterator<Item = Arc<dyn Tool>>,
    {
        let mut registry = Self::new();
        for tool in tools {
            registry.register(tool)?;
        }
        Ok(registry)
    }

    /// Register a tool under its name
    ///
    /// # Errors
    ///
    /// - `Error::InvalidTool` if the name is empty or the schema is not an object schema
    /// - `Error::DuplicateTool` if the name is already taken
    pub fn register(&mut self, tool: Arc<dyn Tool>) -> Result<()> {
        let descriptor = tool.describe()?;
        descriptor.validate()?;

        if self.tools.contains_key(&descriptor.name) {
            return Err(Error::DuplicateTool {
                name: descriptor.name,
            });
        }

        self.tools.insert(descriptor.name.clone(), tool);
        self.descriptors.push(descriptor);
        Ok(())
    }

    /// Descriptors of all tools in registration order
    pub fn list_descriptors(&self) -> &[ToolDescriptor] {
        &self.descriptors
    }

    /// Look up a tool by exact name
    pub fn get(&self, name: &str) -> Option<Arc<dyn Tool>> {
        self.tools.get(name).cloned()
    }

    /// Look up a descriptor by exact name
    pub fn descriptor(&self, name: &str) -> Option<&ToolDescriptor> {
        self.descriptors.iter().find(|d| d.name == name)
    }

    /// Descriptors keyed by tool name
    pub fn definitions(&self) -> HashMap<&str, &ToolDescriptor> {
        self.descriptors
            .iter()
            .map(|d| (d.name.as_str(), d))
            .collect()
    }

    /// Tool names in registration order
    pub fn names(&self) -> Vec<&str> {
        self.descriptors.iter().map(|d| d.name.as_str()).collect()
    }

    /// Number of registered tools
    pub fn len(&self) -> usize {
        self.descriptors.len()
    }

    /// Whether no tool is registered
    pub fn is_empty(&self) -> bool {
        self.descriptors.is_empty()
    }
}
