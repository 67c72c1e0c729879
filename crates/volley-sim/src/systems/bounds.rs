//! Playfield boundary checks.

use log::trace;

use volley_core::enums::EntityKind;
use volley_core::types::{Bounds, EntityId};

use crate::store::EntityStore;

/// Remove projectiles that have left the playfield entirely.
pub fn cull_projectiles(store: &mut EntityStore, bounds: Bounds) -> Vec<EntityId> {
    let expired: Vec<EntityId> = store
        .iterate(EntityKind::Projectile)
        .filter(|p| bounds.is_outside(p.position, p.radius))
        .map(|p| p.id)
        .collect();

    for &id in &expired {
        store.remove(id);
        trace!("projectile {id} left the playfield");
    }
    expired
}

/// First live monster (in id order) whose center has passed `left_boundary`.
pub fn first_breach(store: &EntityStore, left_boundary: f64) -> Option<EntityId> {
    store
        .iterate(EntityKind::Monster)
        .find(|m| m.position.x < left_boundary)
        .map(|m| m.id)
}
