//! Configuration
//!
//! - `types/` - configuration data types with defaults
//! - `loader.rs` - merging defaults, TOML files and environment variables

pub mod loader;
pub mod types;

pub use loader::{ConfigBuilder, ConfigLoader};
pub use types::{AppConfig, LoggingConfig, ServerConfig};
