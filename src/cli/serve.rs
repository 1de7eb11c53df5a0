// src/cli/serve.rs
// Relay server command

use anyhow::{Result, bail};
use counsel::config::RelayConfig;
use counsel::relay::WebhookRelay;
use tracing::{info, warn};

/// Run the webhook relay in the foreground
pub async fn run_serve(
    host_override: Option<String>,
    port_override: Option<u16>,
    webhook_override: Option<String>,
) -> Result<()> {
    let mut config = RelayConfig::from_env();

    // Apply CLI overrides
    if let Some(host) = host_override {
        config.host = host;
    }
    if let Some(port) = port_override {
        config.port = port;
    }
    if let Some(url) = webhook_override {
        config.webhook_url = url;
    }

    let validation = config.validate();
    for warning in &validation.warnings {
        warn!("{}", warning);
    }
    if !validation.is_valid() {
        bail!("Invalid relay configuration:\n{}", validation.report());
    }

    if config.cors_origin.is_none() {
        info!("CORS_ORIGIN not set, cross-origin requests will be refused by browsers");
    }

    WebhookRelay::new(config)?.run().await
}
