use thiserror::Error;

/// Failures decoding or encoding a protocol frame.
#[derive(Error, Debug)]
pub enum ProtocolError {
    /// The frame is not a `{"event": .., "data": ..}` object
    #[error("Malformed frame: {0}")]
    Frame(#[source] serde_json::Error),

    #[error("Unknown event `{0}`")]
    UnknownEvent(String),

    /// The event carries no `data`
    #[error("Missing data for `{0}`")]
    MissingData(&'static str),

    /// `data` does not have the shape the event requires
    #[error("Invalid `{event}` payload: {source}")]
    Payload {
        event: &'static str,
        #[source]
        source: serde_json::Error,
    },

    #[error("Failed to encode event: {0}")]
    Encode(#[source] serde_json::Error),
}
