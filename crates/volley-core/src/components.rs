//! ECS components for hecs entities.
//!
//! Components are plain data structs with no methods.
//! Game logic lives in systems, not components.

use serde::{Deserialize, Serialize};

use crate::enums::EntityKind;
use crate::types::{EntityId, Point2D};

/// Identity and liveness of a simulated entity.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Identity {
    pub id: EntityId,
    pub kind: EntityKind,
    /// Cleared on removal; the entity is despawned at the next tick boundary.
    pub alive: bool,
}

/// Center of the entity.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Position(pub Point2D);

/// Units per second.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Velocity(pub Point2D);

/// Circular collision shape centered on `Position`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Collider {
    pub radius: f64,
}
