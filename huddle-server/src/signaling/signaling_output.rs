use crate::registry::ConnectionRegistry;
use crate::router::Delivery;
use async_trait::async_trait;
use tracing::warn;

/// Where routed deliveries go. The registry is the production sink; tests swap in a recorder.
#[async_trait]
pub trait SignalingOutput: Send + Sync {
    /// Hand a delivery to its connection. Must not wait for the recipient.
    async fn deliver(&self, delivery: Delivery);
}

#[async_trait]
impl SignalingOutput for ConnectionRegistry {
    async fn deliver(&self, delivery: Delivery) {
        let Delivery { to, event } = delivery;
        if let Err(e) = self.send(&to, event) {
            warn!("Failed to deliver event to {}: {}", to, e);
        }
    }
}
