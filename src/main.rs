// src/main.rs
// counsel - webhook relay for the legal-assistant chat

mod cli;

use anyhow::Result;
use clap::Parser;
use cli::{Cli, Commands};
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env from current directory
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();

    // Set up logging based on command
    let log_level = match (&cli.command, cli.verbose) {
        (_, true) => Level::DEBUG,
        (Some(Commands::Extract { .. }), false) => Level::WARN, // Keep stdout clean
        (Some(Commands::Serve { .. }) | None, false) => Level::INFO,
    };

    let subscriber = FmtSubscriber::builder()
        .with_max_level(log_level)
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    match cli.command {
        None => cli::run_serve(None, None, None).await?,
        Some(Commands::Serve {
            host,
            port,
            webhook_url,
        }) => cli::run_serve(host, port, webhook_url).await?,
        Some(Commands::Extract { path, raw }) => cli::run_extract(path, raw)?,
    }

    Ok(())
}
