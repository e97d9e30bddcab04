//! Single-shot request execution against the chat-completion endpoint.

use chatswarm_core::SimulationConfig;
use reqwest::Client;
use serde_json::Value;
use thiserror::Error;

/// A cycle-level failure. Both variants take the same recovery path in the
/// actor: the elapsed time up to the failure is recorded and the cycle
/// counts as completed.
#[derive(Debug, Error)]
pub enum DriverError {
    #[error("transport failure: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("malformed response body: {0}")]
    Decode(#[from] serde_json::Error),
}

/// POST the fixed payload template once and await the full body.
///
/// Any well-formed HTTP response is returned as-is, error statuses
/// included; classification is the caller's concern. No retries, no
/// backoff.
pub async fn send_chat_request(
    client: &Client,
    config: &SimulationConfig,
) -> Result<(u16, Value), DriverError> {
    let mut request = client.post(&config.url).json(&config.request_template());
    for (name, value) in &config.headers {
        request = request.header(name.as_str(), value.as_str());
    }

    let response = request.send().await?;
    let status = response.status().as_u16();
    let bytes = response.bytes().await?;
    let body = serde_json::from_slice(&bytes)?;

    Ok((status, body))
}

/// Extract `choices[0].message.content` from a completion body, if present.
pub fn completion_text(body: &Value) -> Option<&str> {
    body.get("choices")?
        .get(0)?
        .get("message")?
        .get("content")?
        .as_str()
}
