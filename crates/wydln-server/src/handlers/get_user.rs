//! Get User Tool Handler
//!
//! Searches a fixed in-memory user list by name and email substrings.

use serde::Serialize;
use wydln_domain::value_objects::{JsonObject, input_schema_for, parse_arguments};
use wydln_domain::{Result, Tool, ToolArguments};

use crate::args::GetUserArgs;

/// Registered name of the tool
pub const TOOL_NAME: &str = "wydln-get-user";

/// Base description of the tool
pub const TOOL_DESCRIPTION: &str = "Search user information";

/// A user as returned to clients
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UserRecord {
    /// Display name
    pub name: String,
    /// Email address
    pub email: String,
}

impl UserRecord {
    /// Create a user record
    pub fn new<N: Into<String>, E: Into<String>>(name: N, email: E) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
        }
    }

    fn matches(&self, args: &GetUserArgs) -> bool {
        contains_filter(&self.name, args.name.as_deref())
            && contains_filter(&self.email, args.email.as_deref())
    }
}

/// Absent and empty filters match everything
fn contains_filter(field: &str, filter: Option<&str>) -> bool {
    filter.is_none_or(|needle| field.contains(needle))
}

/// Handler for the `wydln-get-user` tool
pub struct GetUserHandler {
    users: Vec<UserRecord>,
}

impl Default for GetUserHandler {
    fn default() -> Self {
        Self::new()
    }
}

impl GetUserHandler {
    /// Create the handler over the built-in user list
    pub fn new() -> Self {
        Self::with_users(vec![
            UserRecord::new("aaaa", "aaaa@gmail.com"),
            UserRecord::new("bbbb", "bbbb@gmail.com"),
        ])
    }

    /// Create the handler over a custom user list
    pub fn with_users(users: Vec<UserRecord>) -> Self {
        Self { users }
    }

    /// Users matching every provided filter, in list order
    pub fn search(&self, args: &GetUserArgs) -> Vec<&UserRecord> {
        self.users.iter().filter(|user| user.matches(args)).collect()
    }
}

impl Tool for GetUserHandler {
    fn name(&self) -> &str {
        TOOL_NAME
    }

    fn description(&self) -> &str {
        TOOL_DESCRIPTION
    }

    fn input_schema(&self) -> Result<JsonObject> {
        input_schema_for::<GetUserArgs>()
    }

    fn execute(&self, arguments: &ToolArguments) -> Result<String> {
        let args: GetUserArgs = parse_arguments(arguments)?;
        Ok(serde_json::to_string(&self.search(&args))?)
    }
}
