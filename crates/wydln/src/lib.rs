//! # wydln
//!
//! A Model Context Protocol server that exposes named tools over stdio.
//!
//! ```rust,no_run
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     wydln::run(None).await
//! }
//! ```
//!
//! | Crate | Re-exported as |
//! |-------|----------------|
//! | `wydln-domain` | [`domain`] |
//! | `wydln-infrastructure` | [`infrastructure`] |
//! | `wydln-server` | [`server`] |

pub use wydln_domain as domain;
pub use wydln_infrastructure as infrastructure;
pub use wydln_server as server;

pub use wydln_domain::{Error, Result, Tool, ToolArguments, ToolDescriptor};
pub use wydln_server::{McpServer, McpServerBuilder, ToolDispatcher, ToolRegistry, run};
