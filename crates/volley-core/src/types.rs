//! Fundamental geometric and simulation types.

use std::fmt;
use std::ops::{Add, Mul, Neg, Sub};

use glam::DVec2;
use serde::{Deserialize, Serialize};

use crate::error::SimError;

/// 2D point or vector in simulation space.
/// x grows to the right, y grows upward; units match the host's playfield.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Point2D {
    pub x: f64,
    pub y: f64,
}

impl Point2D {
    pub const ZERO: Point2D = Point2D { x: 0.0, y: 0.0 };

    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn add(self, other: Point2D) -> Point2D {
        Point2D::new(self.x + other.x, self.y + other.y)
    }

    pub fn sub(self, other: Point2D) -> Point2D {
        Point2D::new(self.x - other.x, self.y - other.y)
    }

    pub fn scale(self, scalar: f64) -> Point2D {
        Point2D::new(self.x * scalar, self.y * scalar)
    }

    /// Component-wise division. A zero divisor is rejected rather than
    /// producing infinities.
    pub fn divide(self, scalar: f64) -> Result<Point2D, SimError> {
        if scalar == 0.0 {
            return Err(SimError::DivideByZero);
        }
        Ok(Point2D::new(self.x / scalar, self.y / scalar))
    }

    /// Euclidean length (always >= 0). Uses `hypot`, so very large and
    /// very small components neither overflow nor flush to zero.
    pub fn length(self) -> f64 {
        self.x.hypot(self.y)
    }

    /// Distance between two points.
    pub fn distance(self, other: Point2D) -> f64 {
        other.sub(self).length()
    }

    pub fn dot(self, other: Point2D) -> f64 {
        DVec2::from(self).dot(DVec2::from(other))
    }

    /// Unit-length vector in the same direction.
    /// Zero-length (or non-finite) vectors have no direction.
    pub fn normalize(self) -> Result<Point2D, SimError> {
        // Rescale by the largest component first so the length of the
        // scaled vector lies in [1, sqrt(2)] for any finite input.
        let largest = self.x.abs().max(self.y.abs());
        if !largest.is_finite() || largest == 0.0 || !self.is_finite() {
            return Err(SimError::DegenerateVector);
        }
        let scaled = Point2D::new(self.x / largest, self.y / largest);
        scaled.divide(scaled.length())
    }

    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

impl From<DVec2> for Point2D {
    fn from(v: DVec2) -> Self {
        Point2D::new(v.x, v.y)
    }
}

impl From<Point2D> for DVec2 {
    fn from(p: Point2D) -> Self {
        DVec2::new(p.x, p.y)
    }
}

impl Add for Point2D {
    type Output = Point2D;

    fn add(self, rhs: Point2D) -> Point2D {
        Point2D::add(self, rhs)
    }
}

impl Sub for Point2D {
    type Output = Point2D;

    fn sub(self, rhs: Point2D) -> Point2D {
        Point2D::sub(self, rhs)
    }
}

impl Mul<f64> for Point2D {
    type Output = Point2D;

    fn mul(self, rhs: f64) -> Point2D {
        self.scale(rhs)
    }
}

impl Neg for Point2D {
    type Output = Point2D;

    fn neg(self) -> Point2D {
        Point2D::new(-self.x, -self.y)
    }
}

/// Stable identity of a simulated entity.
/// Allocated in strictly increasing order and never reused within a session.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct EntityId(pub u64);

impl fmt::Display for EntityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Simulation time tracking.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct SimTime {
    /// Number of ticks processed so far.
    pub tick: u64,
    /// Elapsed simulation time in seconds.
    pub elapsed_secs: f64,
}

impl SimTime {
    /// Advance by one tick of `dt` seconds.
    pub fn advance(&mut self, dt: f64) {
        self.tick += 1;
        self.elapsed_secs += dt;
    }
}

/// Rectangular playfield `[0, width] x [0, height]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bounds {
    pub width: f64,
    pub height: f64,
}

impl Bounds {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// True when a circle at `center` no longer touches the playfield.
    pub fn is_outside(&self, center: Point2D, radius: f64) -> bool {
        center.x + radius < 0.0
            || center.x - radius > self.width
            || center.y + radius < 0.0
            || center.y - radius > self.height
    }
}
