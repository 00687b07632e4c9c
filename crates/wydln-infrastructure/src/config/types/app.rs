//! Main application configuration

use serde::{Deserialize, Serialize};

use super::{LoggingConfig, ServerConfig};

/// Root configuration of the tool server
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    /// Identity reported to MCP clients
    #[serde(default)]
    pub server: ServerConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}
