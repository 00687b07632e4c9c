//! Built-in Tools
//!
//! Concrete [`Tool`](wydln_domain::Tool) implementations registered at startup.

pub mod get_user;

// Re-export handlers for convenience
pub use get_user::{GetUserHandler, UserRecord};
