//! Tool Argument Types
//!
//! Typed arguments for the built-in tools. The JSON schema advertised to
//! clients is generated from these structs, and incoming arguments are
//! validated by deserializing into them.

use schemars::JsonSchema;
use serde::Deserialize;

/// Arguments for the `wydln-get-user` tool
///
/// Both filters are optional; an absent or empty filter matches every user.
#[derive(Debug, Clone, Default, Deserialize, JsonSchema)]
pub struct GetUserArgs {
    /// User name to search
    #[serde(default)]
    pub name: Option<String>,

    /// User email to search
    #[serde(default)]
    pub email: Option<String>,
}
