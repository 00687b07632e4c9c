// Clippy allows for complex patterns in infrastructure code
#![allow(clippy::collapsible_if)]

//! # Infrastructure Layer
//!
//! Cross-cutting technical concerns for the wydln tool server.
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`config`] | Layered configuration (defaults, TOML file, environment) |
//! | [`logging`] | Structured logging with tracing, written to stderr |
//! | [`error_ext`] | Context helpers that turn foreign errors into domain errors |
//! | [`constants`] | Configuration and logging defaults |

pub mod config;
pub mod constants;
pub mod error_ext;
pub mod logging;

// Re-export commonly used types
pub use config::{AppConfig, ConfigLoader};
pub use error_ext::ErrorContext;
