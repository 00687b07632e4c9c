//! wydln tool server
//!
//! Speaks MCP over stdin/stdout. Logs go to stderr.
//!
//! Exit status is 0 when the client disconnects or on SIGINT/SIGTERM, and 1
//! when the server cannot start.

use clap::Parser;
use wydln::run;

/// Command line interface for the wydln tool server
#[derive(Parser, Debug)]
#[command(name = "wydln")]
#[command(about = "Model Context Protocol tool server over stdio")]
#[command(version)]
pub struct Cli {
    /// Path to configuration file
    #[arg(short, long)]
    pub config: Option<std::path::PathBuf>,
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    // Exit explicitly: the blocking stdin reader would otherwise hold up runtime shutdown
    match run(cli.config.as_deref()).await {
        Ok(()) => std::process::exit(0),
        Err(e) => {
            eprintln!("Failed to start server: {e}");
            std::process::exit(1);
        }
    }
}
