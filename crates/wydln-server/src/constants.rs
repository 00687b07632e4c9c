//! Server-specific constants
//!
//! JSON-RPC error codes and the instructions sent during the handshake.

// ============================================================================
// JSON-RPC ERROR CODES (Standard)
// ============================================================================

/// JSON-RPC Invalid params error code
pub const JSONRPC_INVALID_PARAMS: i32 = -32602;

/// JSON-RPC Internal error code
pub const JSONRPC_INTERNAL_ERROR: i32 = -32603;

// ============================================================================
// HANDSHAKE
// ============================================================================

/// Heading of the instructions returned in the initialize response
pub const SERVER_INSTRUCTIONS_HEADING: &str = "Tool server over stdio. Available tools:";
