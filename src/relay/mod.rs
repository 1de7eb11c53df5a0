// src/relay/mod.rs
// Webhook relay: forwards chat messages to the automation flow

mod routes;
mod server;

pub use routes::{ReplyBody, WebhookError, create_router};
pub use server::WebhookRelay;
