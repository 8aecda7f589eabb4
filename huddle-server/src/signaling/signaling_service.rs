use crate::registry::ConnectionRegistry;
use crate::room::RoomDirectory;
use crate::router::{Delivery, InboundEvent, SignalingRouter};
use crate::signaling::SignalingOutput;
use huddle_core::{ConnectionId, ServerEvent};
use std::sync::Arc;
use tokio::sync::mpsc;

/// The relay as seen by the gateway: registers connections, routes their
/// events and pushes the resulting deliveries out.
#[derive(Clone)]
pub struct SignalingService {
    registry: ConnectionRegistry,
    directory: RoomDirectory,
    router: SignalingRouter,
    output: Arc<dyn SignalingOutput>,
}

impl SignalingService {
    /// A relay that delivers straight into the registered connections' queues.
    pub fn new() -> Self {
        let registry = ConnectionRegistry::new();
        Self::with_output(registry.clone(), Arc::new(registry))
    }

    pub fn with_output(registry: ConnectionRegistry, output: Arc<dyn SignalingOutput>) -> Self {
        let directory = RoomDirectory::new();
        Self {
            router: SignalingRouter::new(registry.clone(), directory.clone()),
            registry,
            directory,
            output,
        }
    }

    pub fn registry(&self) -> &ConnectionRegistry {
        &self.registry
    }

    pub fn directory(&self) -> &RoomDirectory {
        &self.directory
    }

    /// Register a connection and tell it which id it was given.
    pub async fn connect(&self, outbound: mpsc::UnboundedSender<ServerEvent>) -> ConnectionId {
        let id = self.registry.register(outbound);
        self.output
            .deliver(Delivery::new(id, ServerEvent::Connected(id)))
            .await;
        id
    }

    pub async fn handle(&self, sender: &ConnectionId, event: InboundEvent) {
        for delivery in self.router.route(sender, event) {
            self.output.deliver(delivery).await;
        }
    }

    /// Safe to call more than once for the same connection.
    pub async fn disconnect(&self, id: &ConnectionId) {
        self.handle(id, InboundEvent::Disconnect).await;
    }
}

impl Default for SignalingService {
    fn default() -> Self {
        Self::new()
    }
}
