//! Kinematic integration: position += velocity * dt.

use volley_core::components::{Identity, Position, Velocity};

use crate::store::EntityStore;

pub fn run(store: &mut EntityStore, dt: f64) {
    for (_entity, (identity, pos, vel)) in store
        .world_mut()
        .query_mut::<(&Identity, &mut Position, &Velocity)>()
    {
        if identity.alive {
            pos.0 = pos.0.add(vel.0.scale(dt));
        }
    }
}
