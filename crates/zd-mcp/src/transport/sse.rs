//! SSE transport — HTTP Server-Sent Events.
//!
//! A client opens `GET /sse` and receives an `endpoint` event naming the URL
//! to POST its JSON-RPC messages to. Each POST is acknowledged with
//! `202 Accepted`; the response travels back as a `message` event on the
//! client's stream.

use crate::protocol::McpRequest;
use crate::server::McpServer;
use crate::McpError;
use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::sse::{Event, KeepAlive, Sse};
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::Router;
use futures::stream::{self, Stream, StreamExt};
use serde::Deserialize;
use std::collections::HashMap;
use std::convert::Infallible;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::sync::{mpsc, RwLock};
use tokio_stream::wrappers::ReceiverStream;
use tower_http::trace::TraceLayer;

/// Path clients POST messages to.
pub const MESSAGES_PATH: &str = "/messages/";

/// Responses buffered per session before senders wait.
const SESSION_BUFFER: usize = 32;

type Sessions = Arc<RwLock<HashMap<String, mpsc::Sender<String>>>>;

#[derive(Clone)]
struct SseState {
    server: Arc<McpServer>,
    sessions: Sessions,
}

/// Routes for the SSE transport.
pub fn router(server: Arc<McpServer>) -> Router {
    let state = SseState {
        server,
        sessions: Arc::new(RwLock::new(HashMap::new())),
    };
    Router::new()
        .route("/sse", get(open_stream))
        .route(MESSAGES_PATH, post(post_message))
        .route("/messages", post(post_message))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Bind `addr` and serve until Ctrl-C.
pub async fn serve(server: Arc<McpServer>, addr: SocketAddr) -> Result<(), McpError> {
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .map_err(|e| McpError::Transport(format!("failed to bind {addr}: {e}")))?;
    tracing::info!("SSE transport listening on http://{addr}/sse");
    axum::serve(listener, router(server))
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| McpError::Transport(format!("server error: {e}")))
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!("failed to listen for Ctrl-C: {e}");
        std::future::pending::<()>().await;
    }
    tracing::info!("shutting down");
}

/// Removes its session from the table when the client's stream is dropped.
struct SessionGuard {
    id: String,
    sessions: Sessions,
}

impl Drop for SessionGuard {
    fn drop(&mut self) {
        let id = std::mem::take(&mut self.id);
        let sessions = self.sessions.clone();
        if let Ok(handle) = tokio::runtime::Handle::try_current() {
            handle.spawn(async move {
                sessions.write().await.remove(&id);
                tracing::info!(session_id = %id, "SSE session closed");
            });
        }
    }
}

async fn open_stream(
    State(state): State<SseState>,
) -> Sse<impl Stream<Item = Result<Event, Infallible>>> {
    let session_id = uuid::Uuid::new_v4().simple().to_string();
    let (tx, rx) = mpsc::channel::<String>(SESSION_BUFFER);
    state.sessions.write().await.insert(session_id.clone(), tx);
    tracing::info!(session_id = %session_id, "SSE session opened");

    let endpoint = Event::default()
        .event("endpoint")
        .data(format!("{MESSAGES_PATH}?session_id={session_id}"));
    let guard = SessionGuard {
        id: session_id,
        sessions: state.sessions.clone(),
    };
    let messages = ReceiverStream::new(rx).map(move |message| {
        let _session = &guard;
        Ok::<_, Infallible>(Event::default().event("message").data(message))
    });

    Sse::new(stream::once(async move { Ok::<_, Infallible>(endpoint) }).chain(messages))
        .keep_alive(KeepAlive::default())
}

#[derive(Debug, Deserialize)]
struct SessionQuery {
    session_id: String,
}

async fn post_message(
    State(state): State<SseState>,
    Query(query): Query<SessionQuery>,
    body: String,
) -> Response {
    let sender = state.sessions.read().await.get(&query.session_id).cloned();
    let Some(sender) = sender else {
        return (StatusCode::NOT_FOUND, "Could not find session").into_response();
    };
    let request: McpRequest = match serde_json::from_str(&body) {
        Ok(request) => request,
        Err(e) => {
            tracing::warn!(session_id = %query.session_id, "unparsable message: {e}");
            return (StatusCode::BAD_REQUEST, format!("Could not parse message: {e}"))
                .into_response();
        }
    };

    let server = state.server.clone();
    let session_id = query.session_id;
    tokio::spawn(async move {
        let Some(response) = server.handle_request(request).await else {
            return;
        };
        match serde_json::to_string(&response) {
            Ok(json) => {
                if sender.send(json).await.is_err() {
                    tracing::warn!(session_id = %session_id, "session closed before response was sent");
                }
            }
            Err(e) => tracing::warn!("failed to serialize response: {e}"),
        }
    });

    (StatusCode::ACCEPTED, "Accepted").into_response()
}
