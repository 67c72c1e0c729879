//! Error type for rejected simulation operations.
//!
//! None of these are fatal to a session: the operation is refused and the
//! session carries on.

use thiserror::Error;

use crate::types::EntityId;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SimError {
    #[error("division by zero")]
    DivideByZero,
    #[error("vector has no direction (zero length)")]
    DegenerateVector,
    #[error("projectiles cannot be fired backwards")]
    InvalidDirection,
    #[error("unknown entity {0}")]
    UnknownEntityId(EntityId),
    #[error("session is already over")]
    SessionOver,
    #[error("invalid session config: {0}")]
    InvalidConfig(&'static str),
}
