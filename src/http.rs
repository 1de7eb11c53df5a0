// src/http.rs
// Shared HTTP client for calls to the automation webhook

use std::time::Duration;

/// Default webhook request timeout (automation flows may call an LLM)
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(60);

/// Default connect timeout
pub const CONNECT_TIMEOUT: Duration = Duration::from_secs(10);

/// Create the shared HTTP client.
///
/// Created once at startup and cloned into the router state; reqwest pools
/// connections internally.
pub fn create_shared_client(timeout: Duration) -> crate::Result<reqwest::Client> {
    let client = reqwest::Client::builder()
        .timeout(timeout)
        .connect_timeout(CONNECT_TIMEOUT.min(timeout))
        .pool_max_idle_per_host(10)
        .build()?;
    Ok(client)
}
