//! Shared response handling for all gateways.

use gradalyze_core::{Error, Result};
use reqwest::Response;

/// Check a response status. On non-2xx, produce an [`Error::Request`]
/// carrying the server-supplied message when the body yields one, else the
/// operation-specific fallback phrase.
pub(crate) async fn ensure_success(response: Response, fallback: &str) -> Result<Response> {
    if response.status().is_success() {
        return Ok(response);
    }

    let status = response.status();
    let body = response.text().await.unwrap_or_default();
    let message = server_message(&body).unwrap_or_else(|| fallback.to_string());

    tracing::debug!(%status, %message, "request failed");
    Err(Error::Request(message))
}

/// Extract a human-readable message from an error body, if the server
/// supplied one under a conventional key.
fn server_message(body: &str) -> Option<String> {
    let value: serde_json::Value = serde_json::from_str(body).ok()?;
    for key in ["error", "message", "detail"] {
        if let Some(msg) = value.get(key).and_then(|m| m.as_str()) {
            if !msg.is_empty() {
                return Some(msg.to_string());
            }
        }
    }
    None
}
