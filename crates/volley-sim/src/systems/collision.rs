//! Projectile–monster collision resolution.
//!
//! Every live projectile is tested against every live monster, both in id
//! order. A projectile resolves against the first monster it overlaps and
//! is then done for the tick; a monster can be claimed by one projectile
//! only.

use log::trace;

use volley_core::enums::EntityKind;
use volley_core::state::{DestroyedPair, Entity, SessionState};

use crate::store::EntityStore;

/// Circles touch or overlap.
pub fn overlaps(a: &Entity, b: &Entity) -> bool {
    a.position.distance(b.position) <= a.radius + b.radius
}

/// Resolve all hits for this tick. Both entities of a hit are removed and
/// the score goes up by one per hit.
pub fn run(store: &mut EntityStore, state: &mut SessionState) -> Vec<DestroyedPair> {
    let projectiles: Vec<Entity> = store.iterate(EntityKind::Projectile).collect();
    let monsters: Vec<Entity> = store.iterate(EntityKind::Monster).collect();
    let mut claimed = vec![false; monsters.len()];
    let mut destroyed = Vec::new();

    for projectile in &projectiles {
        let hit = monsters
            .iter()
            .enumerate()
            .find(|(i, monster)| !claimed[*i] && overlaps(projectile, monster));

        if let Some((i, monster)) = hit {
            claimed[i] = true;
            store.remove(projectile.id);
            store.remove(monster.id);
            state.score += 1;
            trace!("projectile {} destroyed monster {}", projectile.id, monster.id);
            destroyed.push(DestroyedPair {
                projectile: projectile.id,
                monster: monster.id,
            });
        }
    }

    destroyed
}
