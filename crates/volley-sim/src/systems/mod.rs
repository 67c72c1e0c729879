//! Systems that operate on the entity store each tick.
//!
//! Systems are plain functions over `&mut EntityStore` (or `&EntityStore`
//! for read-only work). Apart from the spawn scheduler's accumulator they
//! hold no state of their own.

pub mod bounds;
pub mod collision;
pub mod movement;
pub mod snapshot;
pub mod spawner;
