use huddle_core::{ClientEvent, ConnectionId, RoomId};
use serde_json::value::RawValue;

/// Everything the router reacts to: client events plus the transport's disconnect.
#[derive(Debug, Clone)]
pub enum InboundEvent {
    JoinRoom {
        room_id: RoomId,
    },

    ScreenSharing {
        room_id: RoomId,
        stream_id: String,
    },

    /// Opaque negotiation payload for a single target.
    Signal {
        target: ConnectionId,
        payload: Box<RawValue>,
    },

    /// Raised by the gateway when the socket goes away, never by the client.
    Disconnect,
}

impl From<ClientEvent> for InboundEvent {
    fn from(event: ClientEvent) -> Self {
        match event {
            ClientEvent::JoinRoom(room_id) => InboundEvent::JoinRoom { room_id },
            ClientEvent::ScreenSharing(share) => InboundEvent::ScreenSharing {
                room_id: share.room_id,
                stream_id: share.stream.id,
            },
            ClientEvent::Signal(request) => InboundEvent::Signal {
                target: request.target,
                payload: request.signal,
            },
        }
    }
}
