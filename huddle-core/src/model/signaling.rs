//! Wire protocol spoken over the signaling socket.
//!
//! Every frame is a JSON object of the form `{"event": "<name>", "data": <payload>}`.
//! Signaling payloads are carried as [`RawValue`] so they reach the target
//! exactly as the sender wrote them.

use crate::model::connection::ConnectionId;
use crate::model::error::ProtocolError;
use crate::model::room::RoomId;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::value::RawValue;

pub const JOIN_ROOM: &str = "join-room";
pub const SCREEN_SHARING: &str = "screen-sharing";
pub const SIGNAL: &str = "signal";

/// Events a client sends to the relay.
#[derive(Debug, Clone)]
pub enum ClientEvent {
    JoinRoom(RoomId),
    ScreenSharing(ScreenShare),
    Signal(SignalRequest),
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScreenShare {
    pub room_id: RoomId,
    pub stream: StreamInfo,
}

/// Only the id of a shared stream is meaningful to the relay; other fields are ignored.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StreamInfo {
    pub id: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SignalRequest {
    pub target: ConnectionId,
    pub signal: Box<RawValue>,
}

#[derive(Deserialize)]
struct InboundFrame<'a> {
    event: String,
    #[serde(borrow, default)]
    data: Option<&'a RawValue>,
}

impl ClientEvent {
    /// Decode a text frame. Key order inside the frame does not matter.
    pub fn decode(text: &str) -> Result<Self, ProtocolError> {
        let frame: InboundFrame<'_> = serde_json::from_str(text).map_err(ProtocolError::Frame)?;

        match frame.event.as_str() {
            JOIN_ROOM => payload(JOIN_ROOM, frame.data).map(ClientEvent::JoinRoom),
            SCREEN_SHARING => payload(SCREEN_SHARING, frame.data).map(ClientEvent::ScreenSharing),
            SIGNAL => payload(SIGNAL, frame.data).map(ClientEvent::Signal),
            other => Err(ProtocolError::UnknownEvent(other.to_owned())),
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            ClientEvent::JoinRoom(_) => JOIN_ROOM,
            ClientEvent::ScreenSharing(_) => SCREEN_SHARING,
            ClientEvent::Signal(_) => SIGNAL,
        }
    }
}

fn payload<T: DeserializeOwned>(
    event: &'static str,
    data: Option<&RawValue>,
) -> Result<T, ProtocolError> {
    let raw = data.ok_or(ProtocolError::MissingData(event))?;
    serde_json::from_str(raw.get()).map_err(|source| ProtocolError::Payload { event, source })
}

/// Events the relay sends to a client.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "event", content = "data", rename_all = "kebab-case")]
pub enum ServerEvent {
    /// The id the relay assigned to the receiving connection.
    Connected(ConnectionId),

    /// Another connection joined a room the receiver is in.
    NewPeer(ConnectionId),

    ScreenSharing {
        #[serde(rename = "streamId")]
        stream_id: String,
    },

    Signal {
        sender: ConnectionId,
        signal: Box<RawValue>,
    },
}

impl ServerEvent {
    pub fn encode(&self) -> Result<String, ProtocolError> {
        serde_json::to_string(self).map_err(ProtocolError::Encode)
    }

    /// Decode a frame produced by [`ServerEvent::encode`].
    pub fn decode(text: &str) -> Result<Self, ProtocolError> {
        serde_json::from_str(text).map_err(ProtocolError::Frame)
    }
}
