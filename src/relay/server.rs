// src/relay/server.rs
// Relay state, upstream forwarding and the axum server loop

use reqwest::header::CONTENT_TYPE;
use serde_json::Value;
use std::sync::Arc;
use tracing::{debug, info, warn};

use crate::CounselError;
use crate::config::RelayConfig;
use crate::relay::{WebhookError, routes};

/// Shared state for the relay server
#[derive(Clone)]
pub struct WebhookRelay {
    /// Relay configuration
    pub config: Arc<RelayConfig>,
    /// Pooled client for webhook calls
    client: reqwest::Client,
}

impl WebhookRelay {
    /// Create a relay with its own HTTP client built from `config`.
    ///
    /// Fails with [`CounselError::Config`] when `config` does not validate.
    pub fn new(config: RelayConfig) -> crate::Result<Self> {
        let validation = config.validate();
        if !validation.is_valid() {
            return Err(CounselError::Config(validation.report()));
        }
        let client = crate::http::create_shared_client(config.timeout)?;
        Ok(Self::with_client(config, client))
    }

    /// Create a relay around an existing client
    pub fn with_client(config: RelayConfig, client: reqwest::Client) -> Self {
        Self {
            config: Arc::new(config),
            client,
        }
    }

    /// POST `body` to the webhook and return its payload.
    ///
    /// JSON responses (by Content-Type) are parsed; anything else comes back
    /// as a JSON string holding the raw body text. Bodies larger than
    /// `max_response_bytes` are rejected.
    pub async fn forward(&self, body: &Value) -> Result<Value, WebhookError> {
        let url = self.config.webhook_url.as_str();
        debug!(url, "Forwarding message to webhook");

        let response = self
            .client
            .post(url)
            .json(body)
            .send()
            .await
            .map_err(|e| WebhookError::RequestFailed(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(WebhookError::UpstreamStatus(status.as_u16()));
        }

        let is_json = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .is_some_and(|ct| ct.contains("json"));

        let body = self.read_body(response).await?;
        if is_json {
            serde_json::from_slice(&body).map_err(|e| WebhookError::InvalidResponse(e.to_string()))
        } else {
            Ok(Value::String(String::from_utf8_lossy(&body).into_owned()))
        }
    }

    /// Buffer the response body, refusing anything over `max_response_bytes`
    async fn read_body(&self, mut response: reqwest::Response) -> Result<Vec<u8>, WebhookError> {
        let limit = self.config.max_response_bytes;
        if response
            .content_length()
            .is_some_and(|len| len > limit as u64)
        {
            return Err(WebhookError::ResponseTooLarge(limit));
        }

        let mut body = Vec::new();
        while let Some(chunk) = response
            .chunk()
            .await
            .map_err(|e| WebhookError::InvalidResponse(e.to_string()))?
        {
            if body.len() + chunk.len() > limit {
                return Err(WebhookError::ResponseTooLarge(limit));
            }
            body.extend_from_slice(&chunk);
        }
        Ok(body)
    }

    /// Start the relay server
    pub async fn run(self) -> anyhow::Result<()> {
        let addr = self.config.bind_address();
        let listener = tokio::net::TcpListener::bind(&addr).await?;

        info!(webhook_url = %self.config.webhook_url, "Counsel relay listening on {}", addr);

        let app = routes::create_router(self);
        axum::serve(listener, app)
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        info!("Relay shut down");
        Ok(())
    }
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            warn!(error = %e, "Failed to listen for Ctrl+C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                warn!(error = %e, "Failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    info!("Shutdown signal received, draining connections...");
}
