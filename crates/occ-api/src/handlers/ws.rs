//! WebSocket upgrade handler.

use axum::extract::ws::{Message, WebSocket};
use axum::extract::{Query, State, WebSocketUpgrade};
use axum::response::Response;
use futures::{SinkExt, StreamExt};
use tracing::{info, warn};

use crate::dto::request::WsQuery;
use crate::state::AppState;

/// GET /ws?user={name}
pub async fn ws_upgrade(
    State(state): State<AppState>,
    ws: WebSocketUpgrade,
    Query(query): Query<WsQuery>,
) -> Response {
    ws.on_upgrade(move |socket| handle_ws_connection(state, query.user, socket))
}

/// Handles an established WebSocket connection.
async fn handle_ws_connection(state: AppState, user: Option<String>, socket: WebSocket) {
    let (mut ws_tx, mut ws_rx) = socket.split();
    let realtime = state.realtime.clone();
    let mut shutdown = realtime.shutdown_receiver();

    let (handle, mut outbound_rx) = realtime.connections.register(user.as_deref()).await;
    let conn_id = handle.id.clone();

    info!(conn_id = %conn_id, "WebSocket connection established");

    // Spawn outbound message forwarder
    let outbound_task = tokio::spawn(async move {
        while let Some(msg) = outbound_rx.recv().await {
            if ws_tx.send(Message::Text(msg.into())).await.is_err() {
                break;
            }
        }
    });

    // Process inbound messages until the client leaves or the server stops
    loop {
        tokio::select! {
            frame = ws_rx.next() => match frame {
                Some(Ok(Message::Text(text))) => {
                    realtime
                        .connections
                        .handle_inbound(&conn_id, text.as_str())
                        .await;
                }
                Some(Ok(Message::Close(_))) | None => break,
                Some(Ok(_)) => {}
                Some(Err(e)) => {
                    warn!(conn_id = %conn_id, error = %e, "WebSocket error");
                    break;
                }
            },
            _ = shutdown.recv() => break,
        }
    }

    // Cleanup
    outbound_task.abort();
    realtime.connections.unregister(&conn_id).await;

    info!(conn_id = %conn_id, "WebSocket connection closed");
}
