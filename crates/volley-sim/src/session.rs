//! Session: the game loop and its state.
//!
//! `Session` owns the entity store, the spawn scheduler, the RNG and the
//! score/outcome state. The host calls `tick` once per frame with the
//! frame's delta time; nothing here blocks, sleeps, or does I/O.

use log::debug;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use volley_core::enums::{EntityKind, Outcome};
use volley_core::error::SimError;
use volley_core::state::{Entity, EntityView, SessionState, SessionStats, TickResult};
use volley_core::types::{EntityId, Point2D, SimTime};

use crate::config::SessionConfig;
use crate::store::EntityStore;
use crate::systems;
use crate::systems::spawner::SpawnScheduler;

/// Start a session on a `width` x `height` playfield with default tuning.
pub fn create_session(bounds_width: f64, bounds_height: f64, seed: u64) -> Session {
    Session::build(SessionConfig::with_bounds(bounds_width, bounds_height, seed))
}

/// One playthrough, from creation to a terminal outcome.
pub struct Session {
    config: SessionConfig,
    store: EntityStore,
    scheduler: SpawnScheduler,
    state: SessionState,
    time: SimTime,
    rng: ChaCha8Rng,
    player: EntityId,
    stats: SessionStats,
}

impl Session {
    /// Create a session from a config, rejecting invalid tuning.
    pub fn with_config(config: SessionConfig) -> Result<Self, SimError> {
        config.validate()?;
        Ok(Self::build(config))
    }

    fn build(config: SessionConfig) -> Self {
        let mut store = EntityStore::new();
        let player = spawn_player(&mut store, &config);
        debug!(
            "session created: {}x{} seed={} threshold={}",
            config.bounds_width, config.bounds_height, config.seed, config.win_threshold
        );
        Self {
            scheduler: SpawnScheduler::new(&config),
            rng: ChaCha8Rng::seed_from_u64(config.seed),
            store,
            state: SessionState::default(),
            time: SimTime::default(),
            player,
            stats: SessionStats::default(),
            config,
        }
    }

    /// Advance the simulation by `dt` seconds.
    ///
    /// Once the outcome is terminal this does nothing and reports the
    /// frozen state. Negative or non-finite `dt` counts as zero.
    pub fn tick(&mut self, dt: f64) -> TickResult {
        if self.state.outcome.is_terminal() {
            return TickResult {
                tick: self.time.tick,
                score: self.state.score,
                outcome: self.state.outcome,
                ..Default::default()
            };
        }
        let dt = if dt.is_finite() && dt > 0.0 { dt } else { 0.0 };
        let bounds = self.config.bounds();

        // 1. Spawning
        let spawned_monster_ids = self
            .scheduler
            .tick(dt, &mut self.rng, &mut self.store, bounds);
        // 2. Movement
        systems::movement::run(&mut self.store, dt);
        // 3. Collisions
        let destroyed_pairs = systems::collision::run(&mut self.store, &mut self.state);
        // 4. Projectiles that flew off the playfield
        let expired_projectile_ids = systems::bounds::cull_projectiles(&mut self.store, bounds);
        // 5. Lose, then win
        if let Some(monster) = systems::bounds::first_breach(&self.store, self.config.left_boundary)
        {
            self.state.outcome = Outcome::Lost;
            debug!(
                "session lost at tick {}: monster {monster} reached the left edge",
                self.time.tick + 1
            );
        } else if self.state.score >= self.config.win_threshold {
            self.state.outcome = Outcome::Won;
            debug!(
                "session won at tick {} with score {}",
                self.time.tick + 1,
                self.state.score
            );
        }
        // 6. Tick boundary
        self.store.flush();
        self.time.advance(dt);

        self.stats.monsters_spawned += spawned_monster_ids.len() as u32;
        self.stats.hits += destroyed_pairs.len() as u32;
        self.stats.projectiles_expired += expired_projectile_ids.len() as u32;

        TickResult {
            tick: self.time.tick,
            spawned_monster_ids,
            destroyed_pairs,
            expired_projectile_ids,
            score: self.state.score,
            outcome: self.state.outcome,
        }
    }

    /// Fire a projectile from `from` toward `toward`.
    ///
    /// Shots aimed behind the shooter (`toward.x < from.x`) are refused, as
    /// are shots with no direction. Nothing is spawned on failure.
    pub fn fire_projectile(
        &mut self,
        from: Point2D,
        toward: Point2D,
    ) -> Result<EntityId, SimError> {
        if self.state.outcome.is_terminal() {
            return Err(SimError::SessionOver);
        }
        if toward.x < from.x {
            return Err(SimError::InvalidDirection);
        }
        let direction = toward.sub(from).normalize()?;
        let velocity = direction.scale(self.config.projectile_speed);
        let id = self.store.spawn(
            EntityKind::Projectile,
            from,
            velocity,
            self.config.projectile_radius,
        );
        self.stats.projectiles_fired += 1;
        Ok(id)
    }

    /// Fire from the player's position, like a tap on the playfield.
    pub fn fire_from_player(&mut self, toward: Point2D) -> Result<EntityId, SimError> {
        self.fire_projectile(self.player_position(), toward)
    }

    /// Live entities in id order, for rendering.
    pub fn snapshot_entities(&self) -> Vec<EntityView> {
        systems::snapshot::build(&self.store)
    }

    /// Throw away the playthrough and start over with the same config and seed.
    pub fn restart(&mut self) {
        self.store.clear();
        self.player = spawn_player(&mut self.store, &self.config);
        self.scheduler.reset();
        self.rng = ChaCha8Rng::seed_from_u64(self.config.seed);
        self.state = SessionState::default();
        self.time = SimTime::default();
        self.stats = SessionStats::default();
        debug!("session restarted (seed={})", self.config.seed);
    }

    pub fn player_position(&self) -> Point2D {
        self.store
            .get(self.player)
            .map(|player| player.position)
            .unwrap_or_else(|| self.config.player_position())
    }

    pub fn player_id(&self) -> EntityId {
        self.player
    }

    pub fn entity(&self, id: EntityId) -> Result<Entity, SimError> {
        self.store.try_get(id)
    }

    pub fn score(&self) -> u32 {
        self.state.score
    }

    pub fn outcome(&self) -> Outcome {
        self.state.outcome
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn time(&self) -> SimTime {
        self.time
    }

    pub fn stats(&self) -> SessionStats {
        self.stats
    }

    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    pub fn store(&self) -> &EntityStore {
        &self.store
    }

    /// Place a monster directly (for tests that need exact positions).
    #[cfg(test)]
    pub(crate) fn spawn_test_monster(
        &mut self,
        position: Point2D,
        velocity: Point2D,
    ) -> EntityId {
        self.store.spawn(
            EntityKind::Monster,
            position,
            velocity,
            self.config.monster_radius,
        )
    }

    #[cfg(test)]
    pub(crate) fn scheduler(&self) -> &SpawnScheduler {
        &self.scheduler
    }
}

fn spawn_player(store: &mut EntityStore, config: &SessionConfig) -> EntityId {
    store.spawn(
        EntityKind::Player,
        config.player_position(),
        Point2D::ZERO,
        config.player_radius,
    )
}
