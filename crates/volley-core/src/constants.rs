//! Simulation constants and tuning parameters.
//! These are the defaults for `SessionConfig`.

// --- Playfield ---

/// Default playfield width.
pub const DEFAULT_BOUNDS_WIDTH: f64 = 480.0;

/// Default playfield height.
pub const DEFAULT_BOUNDS_HEIGHT: f64 = 320.0;

/// Monsters crossing below this x end the session.
pub const LEFT_BOUNDARY: f64 = 0.0;

/// Default RNG seed. Same seed = same session.
pub const DEFAULT_SEED: u64 = 42;

// --- Player ---

/// Player x as a fraction of the playfield width.
pub const PLAYER_X_FRACTION: f64 = 0.1;

pub const PLAYER_RADIUS: f64 = 20.0;

// --- Monsters ---

/// Seconds between monster spawns.
pub const SPAWN_INTERVAL_SECS: f64 = 2.0;

/// Fastest crossing of the playfield (seconds).
pub const MIN_TRAVERSAL_SECS: f64 = 2.0;

/// Slowest crossing of the playfield (seconds).
pub const MAX_TRAVERSAL_SECS: f64 = 4.0;

pub const MONSTER_RADIUS: f64 = 20.0;

/// Most monsters spawned in one tick. Anything due beyond this after a
/// long stall is queued for the following ticks.
pub const MAX_SPAWNS_PER_TICK: u32 = 8;

// --- Projectiles ---

/// Projectile speed in units per second.
pub const PROJECTILE_SPEED: f64 = 500.0;

pub const PROJECTILE_RADIUS: f64 = 10.0;

// --- Scoring ---

/// Kills needed to win.
pub const WIN_THRESHOLD: u32 = 30;
