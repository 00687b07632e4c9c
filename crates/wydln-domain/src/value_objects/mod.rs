//! Domain Value Objects
//!
//! Immutable values exchanged between tools, the registry and the
//! transport adapter.
//!
//! | Value Object | Description |
//! |--------------|-------------|
//! | [`ToolDescriptor`] | Advertised name, description and input schema of a tool |
//! | [`ToolArguments`] | Raw JSON arguments of a tool call |
//! | [`InvocationResult`] | Ordered content items produced by a tool call |
//! | [`ToolDependencies`] | Ordered set of tool names a tool relies on |

/// Tool call arguments and typed validation
pub mod arguments;
/// Declared tool dependencies
pub mod dependencies;
/// Tool descriptors
pub mod descriptor;
/// Tool call results
pub mod invocation;

pub use arguments::{JsonObject, ToolArguments, input_schema_for, parse_arguments};
pub use dependencies::ToolDependencies;
pub use descriptor::ToolDescriptor;
pub use invocation::{InvocationResult, ToolContent};
