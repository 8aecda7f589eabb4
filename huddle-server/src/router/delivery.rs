use huddle_core::{ConnectionId, ServerEvent};

/// One outbound event addressed to one connection.
#[derive(Debug, Clone)]
pub struct Delivery {
    pub to: ConnectionId,
    pub event: ServerEvent,
}

impl Delivery {
    pub fn new(to: ConnectionId, event: ServerEvent) -> Self {
        Self { to, event }
    }
}
