use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Request body for the chat-completion endpoint.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ChatRequest {
    pub model: String,
    pub messages: Vec<ChatMessage>,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: String,
    pub content: String,
}

/// Non-streaming response shape; only the first choice is ever read.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ChatResponse {
    pub choices: Vec<ChatChoice>,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ChatChoice {
    pub message: ChatMessage,
}

/// Outcome of one request cycle.
///
/// Any well-formed HTTP response counts as `Status`, error statuses
/// included; `Failed` covers transport and decode failures. Not retained
/// beyond producing the next latency entry.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CycleOutcome {
    Status(u16),
    Failed(String),
}

/// Everything one actor produces over its lifetime.
///
/// Written only by the owning actor task; the reporter reads it strictly
/// after every task has been joined, so no locking is involved.
#[derive(Clone, Debug)]
pub struct ActorRecord {
    /// Unique id in `1..=user_count`.
    pub id: usize,
    /// Offset from the experiment origin, set exactly once when the arrival
    /// sleep completes.
    pub arrival_offset: Duration,
    /// One entry per completed cycle, failures included.
    pub latencies: Vec<Duration>,
}

impl ActorRecord {
    pub fn new(id: usize, arrival_offset: Duration) -> Self {
        Self {
            id,
            arrival_offset,
            latencies: Vec::new(),
        }
    }

    pub fn record_latency(&mut self, elapsed: Duration) {
        self.latencies.push(elapsed);
    }
}
