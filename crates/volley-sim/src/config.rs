//! Session configuration.

use serde::{Deserialize, Serialize};

use volley_core::constants::*;
use volley_core::error::SimError;
use volley_core::types::{Bounds, Point2D};

/// Configuration for starting a new session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    pub bounds_width: f64,
    pub bounds_height: f64,
    /// RNG seed for determinism. Same seed = same session.
    pub seed: u64,
    /// Kills needed to win.
    pub win_threshold: u32,
    pub spawn_interval_secs: f64,
    pub min_traversal_secs: f64,
    pub max_traversal_secs: f64,
    /// Cap on monsters spawned by a single tick; the rest wait in a queue.
    pub max_spawns_per_tick: u32,
    pub monster_radius: f64,
    pub projectile_radius: f64,
    pub projectile_speed: f64,
    pub player_radius: f64,
    /// A monster whose center passes below this x loses the session.
    pub left_boundary: f64,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            bounds_width: DEFAULT_BOUNDS_WIDTH,
            bounds_height: DEFAULT_BOUNDS_HEIGHT,
            seed: DEFAULT_SEED,
            win_threshold: WIN_THRESHOLD,
            spawn_interval_secs: SPAWN_INTERVAL_SECS,
            min_traversal_secs: MIN_TRAVERSAL_SECS,
            max_traversal_secs: MAX_TRAVERSAL_SECS,
            max_spawns_per_tick: MAX_SPAWNS_PER_TICK,
            monster_radius: MONSTER_RADIUS,
            projectile_radius: PROJECTILE_RADIUS,
            projectile_speed: PROJECTILE_SPEED,
            player_radius: PLAYER_RADIUS,
            left_boundary: LEFT_BOUNDARY,
        }
    }
}

impl SessionConfig {
    /// Default tuning on a playfield of the given size.
    pub fn with_bounds(width: f64, height: f64, seed: u64) -> Self {
        Self {
            bounds_width: width,
            bounds_height: height,
            seed,
            ..Default::default()
        }
    }

    pub fn bounds(&self) -> Bounds {
        Bounds::new(self.bounds_width, self.bounds_height)
    }

    /// Where the player sits: near the left edge, vertically centered.
    pub fn player_position(&self) -> Point2D {
        Point2D::new(
            self.bounds_width * PLAYER_X_FRACTION,
            self.bounds_height / 2.0,
        )
    }

    pub fn validate(&self) -> Result<(), SimError> {
        if !is_positive(self.bounds_width) {
            return Err(SimError::InvalidConfig("bounds_width must be positive"));
        }
        if !is_positive(self.bounds_height) {
            return Err(SimError::InvalidConfig("bounds_height must be positive"));
        }
        if !is_positive(self.spawn_interval_secs) {
            return Err(SimError::InvalidConfig(
                "spawn_interval_secs must be positive",
            ));
        }
        if !is_positive(self.min_traversal_secs) || !self.max_traversal_secs.is_finite() {
            return Err(SimError::InvalidConfig(
                "traversal durations must be positive",
            ));
        }
        if self.min_traversal_secs > self.max_traversal_secs {
            return Err(SimError::InvalidConfig(
                "min_traversal_secs exceeds max_traversal_secs",
            ));
        }
        if self.max_spawns_per_tick == 0 {
            return Err(SimError::InvalidConfig(
                "max_spawns_per_tick must be at least 1",
            ));
        }
        if !is_positive(self.monster_radius)
            || !is_positive(self.projectile_radius)
            || !is_positive(self.player_radius)
        {
            return Err(SimError::InvalidConfig("radii must be positive"));
        }
        if !is_positive(self.projectile_speed) {
            return Err(SimError::InvalidConfig("projectile_speed must be positive"));
        }
        if !self.left_boundary.is_finite() {
            return Err(SimError::InvalidConfig("left_boundary must be finite"));
        }
        Ok(())
    }
}

fn is_positive(value: f64) -> bool {
    value.is_finite() && value > 0.0
}
