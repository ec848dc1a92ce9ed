use axum::{
    extract::{
        ws::{Message, WebSocket, WebSocketUpgrade},
        State,
    },
    response::Response,
};
use tokio::sync::broadcast::error::RecvError;

use crate::broadcast::{InitialStatus, WsMessage};

use super::AppState;

pub(super) async fn upgrade(ws: WebSocketUpgrade, State(state): State<AppState>) -> Response {
    ws.on_upgrade(move |socket| serve_socket(socket, state))
}

/// Send the initial status, then forward broadcaster output until the client
/// goes away.
async fn serve_socket(mut socket: WebSocket, state: AppState) {
    // Subscribe before reading the snapshot so no update falls in between.
    let mut updates = state.updates.subscribe();

    let initial = state
        .index
        .read(|s| WsMessage::InitialStatus(InitialStatus::from_state(s)))
        .await;

    match initial.to_json() {
        Ok(text) => {
            if socket.send(Message::Text(text.into())).await.is_err() {
                return;
            }
        }
        Err(e) => {
            tracing::error!(error = %e, "failed to encode initial status");
            return;
        }
    }
    tracing::debug!("websocket client connected");

    loop {
        tokio::select! {
            update = updates.recv() => match update {
                Ok(text) => {
                    if socket.send(Message::Text(text.as_ref().into())).await.is_err() {
                        break;
                    }
                }
                Err(RecvError::Lagged(skipped)) => {
                    tracing::debug!(skipped, "websocket client lagged behind updates");
                }
                Err(RecvError::Closed) => break,
            },
            incoming = socket.recv() => match incoming {
                Some(Ok(Message::Close(_)) | Err(_)) | None => break,
                // Clients may send keepalives; content is ignored.
                Some(Ok(_)) => {}
            },
        }
    }

    tracing::debug!("websocket client disconnected");
}
