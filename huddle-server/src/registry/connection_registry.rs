use crate::error::RelayError;
use dashmap::DashMap;
use dashmap::mapref::entry::Entry;
use huddle_core::{ConnectionId, ServerEvent};
use std::sync::Arc;
use tokio::sync::mpsc;

/// A live client link. The outbound queue is drained by the connection's writer task.
struct Connection {
    outbound: mpsc::UnboundedSender<ServerEvent>,
}

/// Every live connection, keyed by the id the relay assigned to it.
///
/// Cloning is cheap and all clones share the same table.
#[derive(Clone, Default)]
pub struct ConnectionRegistry {
    connections: Arc<DashMap<ConnectionId, Connection>>,
}

impl ConnectionRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Allocate a fresh id for a newly accepted connection.
    pub fn register(&self, outbound: mpsc::UnboundedSender<ServerEvent>) -> ConnectionId {
        loop {
            let id = ConnectionId::new();
            if let Entry::Vacant(slot) = self.connections.entry(id) {
                slot.insert(Connection { outbound });
                return id;
            }
        }
    }

    /// Forget a connection. Returns `false` if it was not live, which makes repeated calls harmless.
    pub fn unregister(&self, id: &ConnectionId) -> bool {
        self.connections.remove(id).is_some()
    }

    pub fn is_live(&self, id: &ConnectionId) -> bool {
        self.connections.contains_key(id)
    }

    pub fn len(&self) -> usize {
        self.connections.len()
    }

    pub fn is_empty(&self) -> bool {
        self.connections.is_empty()
    }

    /// Queue an event for a connection without waiting for it to be written.
    pub fn send(&self, id: &ConnectionId, event: ServerEvent) -> Result<(), RelayError> {
        let connection = self
            .connections
            .get(id)
            .ok_or(RelayError::UnknownConnection(*id))?;

        connection
            .outbound
            .send(event)
            .map_err(|_| RelayError::ConnectionClosed(*id))
    }
}
