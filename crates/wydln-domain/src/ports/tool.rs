//! Tool Port
//!
//! The capability every tool exposes so the registry and dispatcher can
//! treat all tools alike.

use crate::error::Result;
use crate::value_objects::{
    InvocationResult, JsonObject, ToolArguments, ToolDependencies, ToolDescriptor,
};

/// Tool contract
///
/// Implementors provide identity, an argument schema and [`execute`].
/// [`describe`] and [`run`] are derived from those.
///
/// Tools are shared across concurrent requests, so `execute` must be safe to
/// call from several threads at once.
///
/// # Example
///
/// ```rust
/// use wydln_domain::{Result, Tool, ToolArguments};
/// use wydln_domain::value_objects::JsonObject;
///
/// struct Echo;
///
/// impl Tool for Echo {
///     fn name(&self) -> &str {
///         "echo"
///     }
///
///     fn description(&self) -> &str {
///         "Echo the arguments back"
///     }
///
///     fn input_schema(&self) -> Result<JsonObject> {
///         let mut schema = JsonObject::new();
///         schema.insert("type".to_string(), "object".into());
///         Ok(schema)
///     }
///
///     fn execute(&self, arguments: &ToolArguments) -> Result<String> {
///         Ok(serde_json::Value::Object(arguments.clone()).to_string())
///     }
/// }
///
/// let result = Echo.run(&ToolArguments::new()).unwrap();
/// assert_eq!(result.texts().collect::<Vec<_>>(), vec!["{}"]);
/// ```
///
/// [`execute`]: Tool::execute
/// [`describe`]: Tool::describe
/// [`run`]: Tool::run
pub trait Tool: Send + Sync {
    /// Unique tool name
    fn name(&self) -> &str;

    /// Base description, without dependency notes
    fn description(&self) -> &str;

    /// JSON object schema of the accepted arguments
    fn input_schema(&self) -> Result<JsonObject>;

    /// Tools this one expects to be called first
    fn dependencies(&self) -> Option<&ToolDependencies> {
        None
    }

    /// Produce the text payload for the given arguments
    fn execute(&self, arguments: &ToolArguments) -> Result<String>;

    /// Build the advertised descriptor
    fn describe(&self) -> Result<ToolDescriptor> {
        let suffix = self
            .dependencies()
            .map(ToolDependencies::description_suffix)
            .unwrap_or_default();

        Ok(ToolDescriptor {
            name: self.name().to_string(),
            description: format!("{}{}", self.description(), suffix),
            input_schema: self.input_schema()?,
        })
    }

    /// Execute and wrap the payload as a single text item
    fn run(&self, arguments: &ToolArguments) -> Result<InvocationResult> {
        self.execute(arguments).map(InvocationResult::text)
    }
}
