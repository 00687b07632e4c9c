//! Infrastructure layer constants
//!
//! Domain-specific constants are defined in `wydln_domain::constants`.

// ============================================================================
// CONFIGURATION CONSTANTS
// ============================================================================

/// Default configuration file name
pub const DEFAULT_CONFIG_FILENAME: &str = "wydln.toml";

/// Default configuration directory name
pub const DEFAULT_CONFIG_DIR: &str = "wydln";

/// Environment variable prefix for configuration
pub const CONFIG_ENV_PREFIX: &str = "WYDLN";

/// Separator between nested keys in prefixed environment variables
pub const CONFIG_ENV_SEPARATOR: &str = "__";

/// Unprefixed environment variable overriding the server name
pub const SERVER_NAME_ENV: &str = "SERVER_NAME";

/// Unprefixed environment variable overriding the server version
pub const SERVER_VERSION_ENV: &str = "SERVER_VERSION";

// ============================================================================
// SERVER IDENTITY CONSTANTS
// ============================================================================

/// Server name reported to clients when none is configured
pub const DEFAULT_SERVER_NAME: &str = "my-mcp-server";

/// Server version reported to clients when none is configured
pub const DEFAULT_SERVER_VERSION: &str = "1.0.0";

// ============================================================================
// LOGGING CONSTANTS
// ============================================================================

/// Default log level
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Environment variable holding a tracing filter directive
pub const LOG_ENV_VAR: &str = "WYDLN_LOG";

/// File name prefix used when a log directory is configured without a file name
pub const DEFAULT_LOG_FILE_PREFIX: &str = "wydln";
