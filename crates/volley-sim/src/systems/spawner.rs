//! Monster spawning: one monster every fixed interval of simulated time.

use log::trace;
use rand::Rng;

use volley_core::enums::EntityKind;
use volley_core::types::{Bounds, EntityId, Point2D};

use crate::config::SessionConfig;
use crate::store::EntityStore;

/// Accumulates simulated time and spawns a monster each time a full
/// interval has elapsed. Long frames never drop spawns: monsters that came
/// due beyond the per-tick cap stay queued and are spawned on later ticks.
#[derive(Debug, Clone)]
pub struct SpawnScheduler {
    accumulator: f64,
    interval: f64,
    /// Monsters that came due but have not been spawned yet.
    pending: u64,
    max_spawns_per_tick: u32,
    min_traversal_secs: f64,
    max_traversal_secs: f64,
    monster_radius: f64,
}

impl SpawnScheduler {
    pub fn new(config: &SessionConfig) -> Self {
        Self {
            accumulator: 0.0,
            interval: config.spawn_interval_secs,
            pending: 0,
            max_spawns_per_tick: config.max_spawns_per_tick,
            min_traversal_secs: config.min_traversal_secs,
            max_traversal_secs: config.max_traversal_secs,
            monster_radius: config.monster_radius,
        }
    }

    /// Simulated seconds carried toward the next spawn.
    pub fn accumulator(&self) -> f64 {
        self.accumulator
    }

    /// Monsters due but held back by the per-tick cap.
    pub fn pending(&self) -> u64 {
        self.pending
    }

    pub fn reset(&mut self) {
        self.accumulator = 0.0;
        self.pending = 0;
    }

    /// Advance by `dt` seconds and spawn what came due, at most
    /// `max_spawns_per_tick` monsters per call.
    pub fn tick<R: Rng + ?Sized>(
        &mut self,
        dt: f64,
        rng: &mut R,
        store: &mut EntityStore,
        bounds: Bounds,
    ) -> Vec<EntityId> {
        if dt.is_finite() && dt > 0.0 && self.interval.is_finite() && self.interval > 0.0 {
            self.accumulator += dt;
            if self.accumulator >= self.interval {
                // Saturating float-to-int cast; huge stalls queue u64::MAX at most.
                let due = (self.accumulator / self.interval).floor() as u64;
                self.accumulator %= self.interval;
                self.pending = self.pending.saturating_add(due);
            }
        }

        let count = self.pending.min(u64::from(self.max_spawns_per_tick));
        self.pending -= count;
        (0..count)
            .map(|_| self.spawn_monster(rng, store, bounds))
            .collect()
    }

    /// Spawn one monster just past the right edge, heading left.
    pub fn spawn_monster<R: Rng + ?Sized>(
        &self,
        rng: &mut R,
        store: &mut EntityStore,
        bounds: Bounds,
    ) -> EntityId {
        let radius = self.monster_radius;

        let (low, high) = (radius, bounds.height - radius);
        let y = if low.is_finite() && high.is_finite() && high > low {
            rng.gen_range(low..=high)
        } else {
            bounds.height / 2.0
        };

        let duration = if self.min_traversal_secs.is_finite()
            && self.max_traversal_secs.is_finite()
            && self.max_traversal_secs > self.min_traversal_secs
        {
            rng.gen_range(self.min_traversal_secs..=self.max_traversal_secs)
        } else {
            self.min_traversal_secs
        };

        let position = Point2D::new(bounds.width + radius, y);
        let velocity = Point2D::new(-bounds.width / duration, 0.0);
        let id = store.spawn(EntityKind::Monster, position, velocity, radius);
        trace!("spawned monster {id} at y={y:.1}, crossing in {duration:.2}s");
        id
    }
}
