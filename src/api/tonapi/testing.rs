//! Local stand-in for the TonAPI transactions endpoint

use axum::extract::{Path, Query, State};
use axum::http::{HeaderMap, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};
use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::Mutex;

#[derive(Debug, Default, Clone)]
pub struct SeenRequest {
    pub account: String,
    pub query: HashMap<String, String>,
    pub authorization: Option<String>,
}

#[derive(Clone)]
pub struct MockIndexer {
    pub status: StatusCode,
    pub body: serde_json::Value,
    pub delay: Duration,
    pub seen: Arc<Mutex<Option<SeenRequest>>>,
}

impl MockIndexer {
    pub fn new(status: StatusCode, body: serde_json::Value) -> Self {
        Self {
            status,
            body,
            delay: Duration::ZERO,
            seen: Arc::new(Mutex::new(None)),
        }
    }
}

async fn transactions_handler(
    State(mock): State<MockIndexer>,
    Path(account): Path<String>,
    Query(query): Query<HashMap<String, String>>,
    headers: HeaderMap,
) -> Response {
    *mock.seen.lock().await = Some(SeenRequest {
        account,
        query,
        authorization: headers
            .get("authorization")
            .and_then(|v| v.to_str().ok())
            .map(str::to_string),
    });
    tokio::time::sleep(mock.delay).await;
    (mock.status, Json(mock.body.clone())).into_response()
}

/// Serve `mock` on an ephemeral local port and return its base URL
pub async fn spawn_indexer(mock: MockIndexer) -> String {
    let app = Router::new()
        .route("/blockchain/accounts/:account/transactions", get(transactions_handler))
        .with_state(mock);

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{}", addr)
}
