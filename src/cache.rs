use dashmap::DashMap;

use crate::models::User;

#[derive(Default)]
struct Slot {
    generation: u64,
    user: Option<User>,
}

/// Read-through cache of user rows keyed by id.
///
/// Every invalidation bumps the id's generation. A reader takes the
/// generation before querying and hands it back to `put`, which refuses to
/// store the row if a write landed in between.
pub struct UserCache {
    enabled: bool,
    slots: DashMap<i64, Slot>,
}

impl UserCache {
    pub fn new(enabled: bool) -> Self {
        Self {
            enabled,
            slots: DashMap::new(),
        }
    }

    pub fn disabled() -> Self {
        Self::new(false)
    }

    pub fn get(&self, id: i64) -> Option<User> {
        if !self.enabled {
            return None;
        }
        self.slots.get(&id).and_then(|slot| slot.user.clone())
    }

    pub fn generation(&self, id: i64) -> u64 {
        self.slots.get(&id).map(|slot| slot.generation).unwrap_or(0)
    }

    /// Stores the row unless `id` was invalidated after `seen` was read.
    pub fn put(&self, user: &User, seen: u64) -> bool {
        if !self.enabled || user.id == 0 {
            return false;
        }
        // entry() holds the shard write lock across the check and the store
        let mut slot = self.slots.entry(user.id).or_default();
        if slot.generation != seen {
            return false;
        }
        slot.user = Some(user.clone());
        true
    }

    pub fn invalidate(&self, id: i64) {
        if !self.enabled {
            return;
        }
        let mut slot = self.slots.entry(id).or_default();
        slot.generation += 1;
        slot.user = None;
    }
}
