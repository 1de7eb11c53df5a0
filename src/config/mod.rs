// src/config/mod.rs
// Configuration for the webhook relay

pub mod env;

pub use env::{ConfigValidation, DEFAULT_WEBHOOK_URL, RelayConfig};
