//! Simulation engine for VOLLEY.
//!
//! Owns the entity store, runs systems once per host-driven tick,
//! and produces `TickResult`s and render snapshots for the host.

pub mod config;
pub mod session;
pub mod store;
pub mod systems;

pub use config::SessionConfig;
pub use session::{create_session, Session};
pub use store::EntityStore;
pub use volley_core as core;
