//! Core types and definitions for the VOLLEY simulation.
//!
//! This crate defines the vocabulary shared across the other crates:
//! vector math, components, result/view types, errors, and constants.
//! It has no dependency on any rendering or windowing framework.

pub mod components;
pub mod constants;
pub mod enums;
pub mod error;
pub mod state;
pub mod types;

pub use error::SimError;
pub use types::{Bounds, EntityId, Point2D};

#[cfg(test)]
mod tests;
