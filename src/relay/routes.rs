// src/relay/routes.rs
// HTTP route handlers for the relay

use axum::{
    Json, Router,
    body::Bytes,
    extract::State,
    http::{HeaderValue, Method, StatusCode, header},
    response::{IntoResponse, Response},
    routing::{get, post},
};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::{debug, warn};

use crate::extract::render_reply;
use crate::relay::WebhookRelay;

/// Create the axum router with all relay routes
pub fn create_router(relay: WebhookRelay) -> Router {
    let cors = relay.config.cors_origin.as_deref().and_then(cors_layer);

    let router = Router::new()
        .route("/health", get(health_check))
        .route("/api/webhook", post(relay_webhook))
        .layer(TraceLayer::new_for_http())
        .with_state(relay);

    match cors {
        Some(layer) => router.layer(layer),
        None => router,
    }
}

fn cors_layer(origin: &str) -> Option<CorsLayer> {
    let origin = match HeaderValue::from_str(origin) {
        Ok(origin) => origin,
        Err(e) => {
            warn!(origin, error = %e, "Ignoring invalid CORS origin");
            return None;
        }
    };
    Some(
        CorsLayer::new()
            .allow_origin(origin)
            .allow_methods([Method::GET, Method::POST])
            .allow_headers([header::CONTENT_TYPE]),
    )
}

/// Health check endpoint
async fn health_check() -> impl IntoResponse {
    Json(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

#[derive(Serialize)]
struct HealthResponse {
    status: String,
    version: String,
}

/// Body returned to the chat UI
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReplyBody {
    pub text: String,
}

/// Forward the chat message to the webhook and render its reply
async fn relay_webhook(
    State(relay): State<WebhookRelay>,
    body: Bytes,
) -> Result<Json<ReplyBody>, WebhookError> {
    let message: Value = serde_json::from_slice(&body)
        .map_err(|e| WebhookError::InvalidRequest(e.to_string()))?;

    let payload = relay.forward(&message).await?;
    let text = render_reply(&payload);

    if text.is_empty() {
        debug!("Webhook reply held no extractable text");
    }

    Ok(Json(ReplyBody { text }))
}

/// Relay failures; all surface to the client as `502 {"text": ""}`
#[derive(Debug, Error)]
pub enum WebhookError {
    #[error("invalid request body: {0}")]
    InvalidRequest(String),

    #[error("webhook request failed: {0}")]
    RequestFailed(String),

    #[error("webhook returned status {0}")]
    UpstreamStatus(u16),

    #[error("invalid webhook response: {0}")]
    InvalidResponse(String),

    #[error("webhook response exceeds {0} bytes")]
    ResponseTooLarge(usize),
}

impl IntoResponse for WebhookError {
    fn into_response(self) -> Response {
        warn!(error = %self, "Webhook relay failed");
        let body = ReplyBody {
            text: String::new(),
        };
        (StatusCode::BAD_GATEWAY, Json(body)).into_response()
    }
}
