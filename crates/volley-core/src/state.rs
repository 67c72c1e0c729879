//! Per-tick results and read-only views handed to the host layer.

use serde::{Deserialize, Serialize};

use crate::enums::{EntityKind, Outcome};
use crate::types::{EntityId, Point2D};

/// Full copy of an entity's state as held by the entity store.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Entity {
    pub id: EntityId,
    pub kind: EntityKind,
    pub position: Point2D,
    pub velocity: Point2D,
    pub radius: f64,
    pub alive: bool,
}

/// What the renderer needs to draw an entity.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EntityView {
    pub id: EntityId,
    pub kind: EntityKind,
    pub position: Point2D,
    pub radius: f64,
}

impl From<&Entity> for EntityView {
    fn from(e: &Entity) -> Self {
        Self {
            id: e.id,
            kind: e.kind,
            position: e.position,
            radius: e.radius,
        }
    }
}

/// A projectile and the monster it destroyed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DestroyedPair {
    pub projectile: EntityId,
    pub monster: EntityId,
}

/// Everything that happened during one tick.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TickResult {
    /// Tick number this result belongs to (1-based; 0 when no tick ran).
    pub tick: u64,
    pub spawned_monster_ids: Vec<EntityId>,
    pub destroyed_pairs: Vec<DestroyedPair>,
    /// Projectiles that left the playfield without hitting anything.
    pub expired_projectile_ids: Vec<EntityId>,
    pub score: u32,
    pub outcome: Outcome,
}

/// Running counters for an end-of-game summary.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionStats {
    pub monsters_spawned: u32,
    pub projectiles_fired: u32,
    pub projectiles_expired: u32,
    pub hits: u32,
}

/// Score and outcome of a session. Frozen once the outcome is terminal.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionState {
    pub score: u32,
    pub outcome: Outcome,
}
