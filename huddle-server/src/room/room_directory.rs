use dashmap::DashMap;
use huddle_core::{ConnectionId, RoomId};
use std::collections::HashSet;
use std::sync::Arc;

#[derive(Default)]
struct DirectoryInner {
    /// Room -> members.
    rooms: DashMap<RoomId, HashSet<ConnectionId>>,
    /// Connection -> rooms it joined, so disconnect does not scan every room.
    memberships: DashMap<ConnectionId, HashSet<RoomId>>,
}

/// Room membership shared by every connection handler.
///
/// Rooms come into existence on first join and are pruned once their last
/// member leaves. Each room's member set is only touched under its shard
/// lock, and no two guards are ever held at once.
#[derive(Clone, Default)]
pub struct RoomDirectory {
    inner: Arc<DirectoryInner>,
}

impl RoomDirectory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add `conn` to `room_id` and return the members that were already there.
    ///
    /// The snapshot and the insert happen under the same lock, so two
    /// concurrent joins never both miss each other.
    pub fn join(&self, room_id: &RoomId, conn: &ConnectionId) -> HashSet<ConnectionId> {
        let existing = {
            let mut members = self.inner.rooms.entry(room_id.clone()).or_default();
            let existing: HashSet<ConnectionId> =
                members.iter().filter(|id| *id != conn).copied().collect();
            members.insert(*conn);
            existing
        };

        self.inner
            .memberships
            .entry(*conn)
            .or_default()
            .insert(room_id.clone());

        existing
    }

    /// Remove `conn` from one room. Returns whether it was a member.
    pub fn leave(&self, room_id: &RoomId, conn: &ConnectionId) -> bool {
        if let Some(mut rooms) = self.inner.memberships.get_mut(conn) {
            rooms.remove(room_id);
        }
        self.inner
            .memberships
            .remove_if(conn, |_, rooms| rooms.is_empty());

        self.remove_member(room_id, conn)
    }

    /// Remove `conn` from every room it belongs to and return those rooms.
    pub fn leave_all(&self, conn: &ConnectionId) -> Vec<RoomId> {
        let Some((_, rooms)) = self.inner.memberships.remove(conn) else {
            return Vec::new();
        };

        rooms
            .into_iter()
            .filter(|room_id| self.remove_member(room_id, conn))
            .collect()
    }

    /// Snapshot of a room's members. Unknown rooms are empty.
    pub fn members_of(&self, room_id: &RoomId) -> HashSet<ConnectionId> {
        self.inner
            .rooms
            .get(room_id)
            .map(|members| members.clone())
            .unwrap_or_default()
    }

    pub fn rooms_of(&self, conn: &ConnectionId) -> HashSet<RoomId> {
        self.inner
            .memberships
            .get(conn)
            .map(|rooms| rooms.clone())
            .unwrap_or_default()
    }

    pub fn room_count(&self) -> usize {
        self.inner.rooms.len()
    }

    fn remove_member(&self, room_id: &RoomId, conn: &ConnectionId) -> bool {
        let removed = match self.inner.rooms.get_mut(room_id) {
            Some(mut members) => members.remove(conn),
            None => false,
        };
        self.inner
            .rooms
            .remove_if(room_id, |_, members| members.is_empty());
        removed
    }
}
