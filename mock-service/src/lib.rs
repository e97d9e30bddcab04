use axum::{debug_handler, extract::Path, http::StatusCode, routing::post, Json, Router};
use chatswarm_core::{ChatChoice, ChatMessage, ChatRequest, ChatResponse};
use serde_json::{json, Value};
use std::net::SocketAddr;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;
use tracing::debug;

pub fn router() -> Router {
    Router::new()
        .route("/v1/chat/completions", post(completion))
        .route(
            "/delay/ms/:delay_ms/v1/chat/completions",
            post(delayed_completion),
        )
        .route("/flaky/v1/chat/completions", post(flaky_completion))
        .route("/garbage/v1/chat/completions", post(garbage_completion))
}

pub async fn run(addr: SocketAddr) {
    let listener = tokio::net::TcpListener::bind(&addr).await.unwrap();
    axum::serve(listener, router()).await.unwrap();
}

/// Bind an ephemeral localhost port and serve in the background; returns
/// the bound address. Lets every test run its own isolated instance.
pub async fn spawn() -> SocketAddr {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router()).await.unwrap();
    });
    addr
}

#[debug_handler]
pub async fn completion(Json(request): Json<ChatRequest>) -> Json<ChatResponse> {
    REQUESTS.fetch_add(1, Ordering::Relaxed);
    debug!(
        "MOCK SERVER ___ {} message(s) for {}",
        request.messages.len(),
        request.model
    );
    Json(answer(&request))
}

#[debug_handler]
pub async fn delayed_completion(
    Path(delay_ms): Path<u64>,
    Json(request): Json<ChatRequest>,
) -> Json<ChatResponse> {
    REQUESTS.fetch_add(1, Ordering::Relaxed);
    tokio::time::sleep(Duration::from_millis(delay_ms)).await;
    Json(answer(&request))
}

static FLAKY_CALLS: AtomicU64 = AtomicU64::new(0);

/// Alternates between a completion and a JSON-bodied 500 on every call.
#[debug_handler]
pub async fn flaky_completion(
    Json(request): Json<ChatRequest>,
) -> Result<Json<ChatResponse>, (StatusCode, Json<Value>)> {
    REQUESTS.fetch_add(1, Ordering::Relaxed);
    if FLAKY_CALLS.fetch_add(1, Ordering::Relaxed) % 2 == 0 {
        debug!("MOCK SERVER ___ OK");
        Ok(Json(answer(&request)))
    } else {
        debug!("MOCK SERVER ___ ERR");
        Err((
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(json!({"error": "mock overload"})),
        ))
    }
}

/// A 200 whose body is not JSON at all; exercises decode failures.
#[debug_handler]
pub async fn garbage_completion() -> &'static str {
    REQUESTS.fetch_add(1, Ordering::Relaxed);
    "not json"
}

fn answer(request: &ChatRequest) -> ChatResponse {
    let prompt = request
        .messages
        .first()
        .map(|message| message.content.as_str())
        .unwrap_or_default();
    ChatResponse {
        choices: vec![ChatChoice {
            message: ChatMessage {
                role: "assistant".to_string(),
                content: format!("echo: {prompt}"),
            },
        }],
    }
}

/** RPS Printer **/

static REQUESTS: AtomicU64 = AtomicU64::new(0);

pub async fn rps_measure_task() {
    loop {
        tokio::time::sleep(Duration::from_millis(1000)).await;
        let requests = REQUESTS.fetch_min(0, Ordering::Relaxed);
        println!("{requests} RPS");
    }
}
