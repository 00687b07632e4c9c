//! Domain Port Interfaces
//!
//! Boundary contracts implemented outside the domain layer.

/// Tool contract
pub mod tool;

pub use tool::Tool;
