// src/cli/mod.rs
// CLI module for counsel commands

use clap::{Parser, Subcommand};
use std::path::PathBuf;

pub mod extract;
pub mod serve;

pub use extract::run_extract;
pub use serve::run_serve;

#[derive(Parser)]
#[command(name = "counsel")]
#[command(about = "Relay chat messages to an automation webhook and render its replies")]
#[command(version)]
pub struct Cli {
    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run the webhook relay server (default)
    Serve {
        /// Host to bind (overrides COUNSEL_HOST)
        #[arg(long)]
        host: Option<String>,

        /// Port to listen on (overrides COUNSEL_PORT)
        #[arg(short, long)]
        port: Option<u16>,

        /// Webhook to forward to (overrides N8N_WEBHOOK_URL)
        #[arg(long)]
        webhook_url: Option<String>,
    },

    /// Render the reply text of a webhook payload
    Extract {
        /// Payload file (default: stdin)
        #[arg(index = 1)]
        path: Option<PathBuf>,

        /// Print the extracted text without paragraph formatting
        #[arg(long)]
        raw: bool,
    },
}
