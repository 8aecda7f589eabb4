use anyhow::{Context, Result, bail};
use futures::{SinkExt, StreamExt};
use huddle_core::{ConnectionId, ServerEvent};
use std::net::SocketAddr;
use std::time::Duration;
use tokio::net::TcpStream;
use tokio_tungstenite::tungstenite::Message;
use tokio_tungstenite::{MaybeTlsStream, WebSocketStream, connect_async};

const RECV_TIMEOUT: Duration = Duration::from_secs(2);

/// A signaling client speaking the JSON protocol over a real WebSocket.
pub struct WsTestClient {
    stream: WebSocketStream<MaybeTlsStream<TcpStream>>,
    id: ConnectionId,
}

impl WsTestClient {
    /// Connect and consume the `connected` greeting.
    pub async fn connect(addr: SocketAddr) -> Result<Self> {
        let (stream, _) = connect_async(format!("ws://{addr}/ws"))
            .await
            .context("WebSocket handshake failed")?;
        let mut client = Self {
            stream,
            id: ConnectionId::new(),
        };

        match client.recv().await? {
            ServerEvent::Connected(id) => client.id = id,
            other => bail!("Expected connected greeting, got {:?}", other),
        }
        Ok(client)
    }

    pub fn id(&self) -> ConnectionId {
        self.id
    }

    pub async fn send_text(&mut self, text: &str) -> Result<()> {
        self.stream.send(Message::text(text.to_owned())).await?;
        Ok(())
    }

    pub async fn join_room(&mut self, room: &str) -> Result<()> {
        let frame = serde_json::json!({ "event": "join-room", "data": room });
        self.send_text(&frame.to_string()).await
    }

    /// Send a signal whose payload is the given JSON text, untouched.
    pub async fn signal(&mut self, target: ConnectionId, payload: &str) -> Result<()> {
        let frame = format!(
            r#"{{"event":"signal","data":{{"target":"{target}","signal":{payload}}}}}"#
        );
        self.send_text(&frame).await
    }

    /// Next protocol event, failing after a short timeout.
    pub async fn recv(&mut self) -> Result<ServerEvent> {
        tokio::time::timeout(RECV_TIMEOUT, self.next_event())
            .await
            .context("Timed out waiting for event")?
    }

    /// True when nothing arrives within `ms` milliseconds.
    pub async fn is_silent_for(&mut self, ms: u64) -> bool {
        tokio::time::timeout(Duration::from_millis(ms), self.next_event())
            .await
            .is_err()
    }

    pub async fn close(mut self) -> Result<()> {
        self.stream.close(None).await?;
        Ok(())
    }

    async fn next_event(&mut self) -> Result<ServerEvent> {
        while let Some(msg) = self.stream.next().await {
            match msg? {
                Message::Text(text) => return Ok(ServerEvent::decode(text.as_str())?),
                Message::Close(_) => bail!("Connection closed by server"),
                _ => {}
            }
        }
        bail!("Stream ended")
    }
}
