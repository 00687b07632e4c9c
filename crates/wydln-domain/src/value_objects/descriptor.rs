//! Tool Descriptor Value Object

use serde::{Deserialize, Serialize};

use crate::constants::INPUT_SCHEMA_TYPE;
use crate::error::{Error, Result};
use crate::value_objects::JsonObject;

/// Value Object: Tool Descriptor
///
/// What a client sees when it lists tools. A descriptor is a snapshot taken
/// when the tool is registered and is never mutated afterwards.
///
/// ## Business Rules
///
/// - `name` is non-empty and unique within a registry
/// - `input_schema` is a JSON object schema (`"type": "object"`)
/// - `description` already carries any dependency notes
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ToolDescriptor {
    /// Stable tool identifier
    pub name: String,
    /// Human-readable description
    pub description: String,
    /// Structural description of accepted arguments
    pub input_schema: JsonObject,
}

impl ToolDescriptor {
    /// Check the registration rules for this descriptor
    pub fn validate(&self) -> Result<()> {
        if self.name.trim().is_empty() {
            return Err(Error::invalid_tool("tool name cannot be empty"));
        }

        let schema_type = self
            .input_schema
            .get("type")
            .and_then(serde_json::Value::as_str);
        if schema_type != Some(INPUT_SCHEMA_TYPE) {
            return Err(Error::invalid_tool(format!(
                "input schema of tool {} must have type \"{INPUT_SCHEMA_TYPE}\"",
                self.name
            )));
        }

        if let Some(properties) = self.input_schema.get("properties")
            && !properties.is_object()
        {
            return Err(Error::invalid_tool(format!(
                "input schema properties of tool {} must be an object",
                self.name
            )));
        }

        Ok(())
    }
}
