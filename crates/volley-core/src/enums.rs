//! Enumeration types used throughout the simulation.

use serde::{Deserialize, Serialize};

/// What an entity is. Replaces physics-category bitmasks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EntityKind {
    Player,
    Monster,
    Projectile,
}

/// Session outcome. `Won` and `Lost` are absorbing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Outcome {
    #[default]
    InProgress,
    Won,
    Lost,
}

impl Outcome {
    pub fn is_terminal(self) -> bool {
        !matches!(self, Outcome::InProgress)
    }

    /// Text shown on the game-over screen, if the session has ended.
    pub fn banner(self) -> Option<&'static str> {
        match self {
            Outcome::InProgress => None,
            Outcome::Won => Some("You Won!"),
            Outcome::Lost => Some("You Lose :["),
        }
    }
}
