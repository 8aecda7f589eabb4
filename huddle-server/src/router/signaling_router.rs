use crate::registry::ConnectionRegistry;
use crate::room::RoomDirectory;
use crate::router::{Delivery, InboundEvent};
use huddle_core::{ConnectionId, RoomId, ServerEvent};
use std::collections::HashSet;
use tracing::{debug, info, warn};

/// Decides who receives what for each inbound event.
///
/// Holds no state of its own beyond the shared registry and directory handles.
#[derive(Clone)]
pub struct SignalingRouter {
    registry: ConnectionRegistry,
    directory: RoomDirectory,
}

impl SignalingRouter {
    pub fn new(registry: ConnectionRegistry, directory: RoomDirectory) -> Self {
        Self {
            registry,
            directory,
        }
    }

    pub fn route(&self, sender: &ConnectionId, event: InboundEvent) -> Vec<Delivery> {
        match event {
            InboundEvent::JoinRoom { room_id } => {
                let Some(existing) = self.join(sender, &room_id) else {
                    return Vec::new();
                };
                info!("User {} joined room {}", sender, room_id);

                existing
                    .into_iter()
                    .map(|peer| Delivery::new(peer, ServerEvent::NewPeer(*sender)))
                    .collect()
            }

            InboundEvent::ScreenSharing { room_id, stream_id } => {
                let Some(existing) = self.join(sender, &room_id) else {
                    return Vec::new();
                };
                info!(
                    "Screen sharing started for room {} by {} (stream {})",
                    room_id, sender, stream_id
                );

                existing
                    .into_iter()
                    .map(|peer| {
                        Delivery::new(
                            peer,
                            ServerEvent::ScreenSharing {
                                stream_id: stream_id.clone(),
                            },
                        )
                    })
                    .collect()
            }

            InboundEvent::Signal { target, payload } => {
                if !self.registry.is_live(&target) {
                    debug!("Dropping signal from {} for unknown peer {}", sender, target);
                    return Vec::new();
                }
                info!("Signal received from {} for {}", sender, target);

                vec![Delivery::new(
                    target,
                    ServerEvent::Signal {
                        sender: *sender,
                        signal: payload,
                    },
                )]
            }

            InboundEvent::Disconnect => {
                // Unregister first so a join racing with this can see the sender is gone.
                let was_live = self.registry.unregister(sender);
                let rooms = self.directory.leave_all(sender);
                if was_live {
                    info!("User disconnected: {} (left {} rooms)", sender, rooms.len());
                }
                Vec::new()
            }
        }
    }

    fn join(&self, sender: &ConnectionId, room_id: &RoomId) -> Option<HashSet<ConnectionId>> {
        if !self.registry.is_live(sender) {
            warn!("Ignoring join of room {} from unknown peer {}", room_id, sender);
            return None;
        }
        let existing = self.directory.join(room_id, sender);

        // A disconnect that finished between the check and the insert has
        // already run leave_all, so undo the membership here.
        if !self.registry.is_live(sender) {
            self.directory.leave(room_id, sender);
            return None;
        }
        Some(existing)
    }
}
