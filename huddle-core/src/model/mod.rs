mod connection;
mod error;
mod room;
mod signaling;

pub use connection::ConnectionId;
pub use error::ProtocolError;
pub use room::RoomId;
pub use signaling::{ClientEvent, ScreenShare, ServerEvent, SignalRequest, StreamInfo};
