//! Stdio Transport for MCP
//!
//! Serves the MCP protocol over standard input/output until the client
//! disconnects or the process receives SIGINT/SIGTERM.

use rmcp::ServiceExt;
use rmcp::transport::stdio;
use tracing::{info, warn};
use wydln_domain::{Error, Result};

use crate::McpServer;

/// Extension trait for McpServer to add stdio serving capability
pub trait StdioServerExt {
    /// Serve the MCP server over stdio transport
    ///
    /// Returns `Ok` when the client closes the stream or a shutdown signal
    /// arrives. Fails only if the session cannot be established or the
    /// service task dies.
    fn serve_stdio(self) -> impl std::future::Future<Output = Result<()>> + Send;
}

impl StdioServerExt for McpServer {
    async fn serve_stdio(self) -> Result<()> {
        info!("Starting MCP protocol server on stdio transport");

        let service = self
            .serve(stdio())
            .await
            .map_err(|e| Error::transport(format!("Failed to start MCP service: {e:?}")))?;

        info!("Server started");

        run_until_shutdown(service.waiting(), shutdown_signal()).await?;

        info!("MCP server shutdown complete");
        Ok(())
    }
}

/// Drive a session until it ends on its own or a shutdown signal arrives
///
/// A signal resolves `Ok` to stop early; dropping `session` then cancels the
/// service. If the signal listener itself fails the session keeps running
/// until the client disconnects.
pub async fn run_until_shutdown<F, R, E, S>(session: F, signal: S) -> Result<()>
where
    F: Future<Output = std::result::Result<R, E>>,
    R: std::fmt::Debug,
    E: std::fmt::Display,
    S: Future<Output = std::io::Result<&'static str>>,
{
    let mut session = std::pin::pin!(session);

    tokio::select! {
        quit = &mut session => log_session_end(quit),
        signal = signal => match signal {
            Ok(name) => {
                info!(signal = name, "Shutdown signal received");
                Ok(())
            }
            Err(e) => {
                warn!(error = %e, "Failed to listen for shutdown signals, serving until the client disconnects");
                log_session_end(session.await)
            }
        },
    }
}

fn log_session_end<R, E>(quit: std::result::Result<R, E>) -> Result<()>
where
    R: std::fmt::Debug,
    E: std::fmt::Display,
{
    let reason = quit.map_err(|e| Error::transport(format!("MCP service error: {e}")))?;
    info!(reason = ?reason, "MCP session ended");
    Ok(())
}

/// Wait for SIGINT or SIGTERM, returning the signal name
pub async fn shutdown_signal() -> std::io::Result<&'static str> {
    #[cfg(unix)]
    {
        use tokio::signal::unix::{SignalKind, signal};

        let mut terminate = signal(SignalKind::terminate())?;
        tokio::select! {
            result = tokio::signal::ctrl_c() => result.map(|()| "SIGINT"),
            _ = terminate.recv() => Ok("SIGTERM"),
        }
    }

    #[cfg(not(unix))]
    {
        tokio::signal::ctrl_c().await.map(|()| "ctrl-c")
    }
}
