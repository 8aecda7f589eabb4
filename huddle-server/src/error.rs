//! Error types for the relay

use huddle_core::ConnectionId;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum RelayError {
    /// No live connection has this id
    #[error("Unknown connection {0}")]
    UnknownConnection(ConnectionId),

    /// The connection is registered but its outbound queue is gone
    #[error("Connection {0} is closed")]
    ConnectionClosed(ConnectionId),

    /// A configured CORS origin is not a valid header value
    #[error("Invalid allowed origin `{0}`")]
    InvalidOrigin(String),
}
