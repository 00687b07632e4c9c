//! Domain layer constants

// ============================================================================
// TOOL DESCRIPTOR CONSTANTS
// ============================================================================

/// JSON schema `type` every tool input schema must declare
pub const INPUT_SCHEMA_TYPE: &str = "object";

/// Heading placed before the dependency list in a tool description
pub const DEPENDENCY_HEADING: &str = "This tool depends on the following tools in order:";

/// Marker prefixed to each dependency name in a tool description
pub const DEPENDENCY_BULLET: &str = "  > ";

// ============================================================================
// CONTENT CONSTANTS
// ============================================================================

/// Content kind tag for text results
pub const CONTENT_KIND_TEXT: &str = "text";
