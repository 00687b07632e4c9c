//! Server identity configuration

use serde::{Deserialize, Serialize};

use crate::constants::{DEFAULT_SERVER_NAME, DEFAULT_SERVER_VERSION};

/// Name and version the server reports during the MCP handshake
///
/// Opaque to the tool core: only the transport adapter reads it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Server name
    pub name: String,

    /// Server version
    pub version: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            name: DEFAULT_SERVER_NAME.to_string(),
            version: DEFAULT_SERVER_VERSION.to_string(),
        }
    }
}
