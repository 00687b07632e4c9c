//! Tool Arguments
//!
//! Arguments arrive as a JSON object. Each tool turns them into its own
//! typed argument struct; a failed conversion is a validation error.

use schemars::JsonSchema;
use serde::de::DeserializeOwned;

use crate::constants::INPUT_SCHEMA_TYPE;
use crate::error::{Error, Result};

/// A JSON object (string keys to JSON values)
pub type JsonObject = serde_json::Map<String, serde_json::Value>;

/// Raw arguments of a tool call
pub type ToolArguments = JsonObject;

/// Validate raw arguments by deserializing them into `T`
///
/// # Example
///
/// ```rust
/// use serde::Deserialize;
/// use wydln_domain::value_objects::{ToolArguments, parse_arguments};
///
/// #[derive(Deserialize)]
/// struct Args {
///     name: Option<String>,
/// }
///
/// let mut raw = ToolArguments::new();
/// raw.insert("name".to_string(), "aaaa".into());
/// let args: Args = parse_arguments(&raw).unwrap();
/// assert_eq!(args.name.as_deref(), Some("aaaa"));
/// ```
pub fn parse_arguments<T: DeserializeOwned>(arguments: &ToolArguments) -> Result<T> {
    serde_json::from_value(serde_json::Value::Object(arguments.clone()))
        .map_err(|e| Error::invalid_argument(e.to_string()))
}

/// Generate the object-shaped input schema for an argument type
pub fn input_schema_for<T: JsonSchema>() -> Result<JsonObject> {
    let schema = schemars::schema_for!(T);
    let value = serde_json::to_value(schema)?;

    let object = value
        .as_object()
        .ok_or_else(|| Error::invalid_tool("generated input schema is not an object"))?
        .clone();

    match object.get("type").and_then(serde_json::Value::as_str) {
        Some(INPUT_SCHEMA_TYPE) => Ok(object),
        other => Err(Error::invalid_tool(format!(
            "input schema must have type \"{INPUT_SCHEMA_TYPE}\", found {other:?}"
        ))),
    }
}
