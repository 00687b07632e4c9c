//! # wydln Domain Layer
//!
//! Core contracts and types for the wydln tool server.
//!
//! ## Architecture
//!
//! The domain layer has no knowledge of the MCP wire protocol, configuration
//! or logging. It defines what a tool is and what flows in and out of it.
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`ports`] | The [`Tool`](ports::Tool) contract every tool implements |
//! | [`value_objects`] | Descriptors, arguments, invocation results, dependencies |
//! | [`error`] | Error taxonomy shared by all layers |
//! | [`constants`] | Domain constants |

pub mod constants;
pub mod error;
pub mod ports;
pub mod value_objects;

pub use error::{Error, Result};
pub use ports::Tool;
pub use value_objects::{
    InvocationResult, ToolArguments, ToolContent, ToolDependencies, ToolDescriptor,
};
