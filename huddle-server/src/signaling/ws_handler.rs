use crate::router::InboundEvent;
use crate::signaling::SignalingService;
use axum::extract::State;
use axum::extract::ws::{Message, WebSocket, WebSocketUpgrade};
use axum::response::IntoResponse;
use futures::{SinkExt, StreamExt};
use huddle_core::{ClientEvent, ServerEvent};
use tokio::sync::mpsc;
use tracing::{debug, error, info, warn};

pub async fn ws_handler(
    ws: WebSocketUpgrade,
    State(service): State<SignalingService>,
) -> impl IntoResponse {
    ws.on_upgrade(move |socket| handle_socket(socket, service))
}

async fn handle_socket(socket: WebSocket, service: SignalingService) {
    let (mut sender, mut receiver) = socket.split();
    let (tx, mut rx) = mpsc::unbounded_channel::<ServerEvent>();

    let conn_id = service.connect(tx).await;
    info!("User connected: {}", conn_id);

    let mut send_task = tokio::spawn(async move {
        while let Some(event) = rx.recv().await {
            let json = match event.encode() {
                Ok(json) => json,
                Err(e) => {
                    error!("Failed to serialize event for {}: {}", conn_id, e);
                    continue;
                }
            };
            if sender.send(Message::Text(json.into())).await.is_err() {
                break;
            }
        }
    });

    let mut recv_task = tokio::spawn({
        let service = service.clone();

        async move {
            while let Some(Ok(msg)) = receiver.next().await {
                match msg {
                    Message::Text(text) => match ClientEvent::decode(text.as_str()) {
                        Ok(event) => {
                            debug!("Event {} from {}", event.name(), conn_id);
                            service.handle(&conn_id, InboundEvent::from(event)).await
                        }
                        Err(e) => warn!("Ignoring invalid event from {}: {}", conn_id, e),
                    },
                    Message::Close(_) => break,
                    _ => {}
                }
            }
        }
    });

    // The reader may still be routing an event; it must be gone before disconnect runs.
    tokio::select! {
        _ = (&mut send_task) => {
            recv_task.abort();
            let _ = recv_task.await;
        }
        _ = (&mut recv_task) => {
            send_task.abort();
            let _ = send_task.await;
        }
    };

    service.disconnect(&conn_id).await;
    info!("WebSocket closed: {}", conn_id);
}
