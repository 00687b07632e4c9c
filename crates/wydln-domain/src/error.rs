//! Error handling types

use thiserror::Error;

/// Result type alias for operations that can fail
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for the wydln tool server
#[derive(Error, Debug)]
pub enum Error {
    /// No tool is registered under the requested name
    #[error("Tool {name} not found")]
    ToolNotFound {
        /// The requested tool name
        name: String,
    },

    /// A registered tool failed while running
    #[error("Failed to run tool {tool}: {message}")]
    ToolExecution {
        /// Name of the tool that failed
        tool: String,
        /// Message of the underlying failure
        message: String,
        /// The underlying failure
        #[source]
        source: Box<Error>,
    },

    /// A tool's own logic failed
    #[error("{message}")]
    Execution {
        /// Description of the failure
        message: String,
    },

    /// A tool with the same name is already registered
    #[error("Tool {name} is already registered")]
    DuplicateTool {
        /// The conflicting tool name
        name: String,
    },

    /// A tool does not satisfy the registration rules
    #[error("Invalid tool definition: {message}")]
    InvalidTool {
        /// Why the tool was rejected
        message: String,
    },

    /// Invalid argument provided to a tool
    #[error("Invalid argument: {message}")]
    InvalidArgument {
        /// Description of the invalid argument
        message: String,
    },

    /// JSON parsing or serialization error
    #[error("JSON parsing error: {source}")]
    Json {
        /// The underlying JSON error
        #[from]
        source: serde_json::Error,
    },

    /// I/O operation error
    #[error("I/O error: {message}")]
    Io {
        /// Description of the I/O error
        message: String,
        /// Optional source error
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Configuration-related error
    #[error("Configuration error: {message}")]
    Configuration {
        /// Description of the configuration error
        message: String,
        /// Optional source error
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Protocol transport error
    #[error("Transport error: {message}")]
    Transport {
        /// Description of the transport error
        message: String,
    },

    /// Internal system error
    #[error("Internal error: {message}")]
    Internal {
        /// Description of the internal error
        message: String,
    },
}

impl Error {
    /// Create a tool execution failure
    pub fn execution<S: Into<String>>(message: S) -> Self {
        Self::Execution {
            message: message.into(),
        }
    }

    /// Create an invalid argument error
    pub fn invalid_argument<S: Into<String>>(message: S) -> Self {
        Self::InvalidArgument {
            message: message.into(),
        }
    }

    /// Create an invalid tool definition error
    pub fn invalid_tool<S: Into<String>>(message: S) -> Self {
        Self::InvalidTool {
            message: message.into(),
        }
    }

    /// Create a configuration error without a source
    pub fn config<S: Into<String>>(message: S) -> Self {
        Self::Configuration {
            message: message.into(),
            source: None,
        }
    }

    /// Create a transport error
    pub fn transport<S: Into<String>>(message: S) -> Self {
        Self::Transport {
            message: message.into(),
        }
    }

    /// Create an internal error
    pub fn internal<S: Into<String>>(message: S) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }

    /// Wrap a tool failure with the name of the tool that produced it
    pub fn tool_execution<S: Into<String>>(tool: S, source: Error) -> Self {
        Self::ToolExecution {
            tool: tool.into(),
            message: source.to_string(),
            source: Box::new(source),
        }
    }

    /// Whether the error was caused by the caller rather than the server
    pub fn is_client_error(&self) -> bool {
        match self {
            Self::ToolNotFound { .. } | Self::InvalidArgument { .. } => true,
            Self::ToolExecution { source, .. } => source.is_client_error(),
            _ => false,
        }
    }
}
