use proptest::prelude::*;

use crate::enums::*;
use crate::error::SimError;
use crate::state::{DestroyedPair, EntityView, TickResult};
use crate::types::{EntityId, Point2D, SimTime};

const EPS: f64 = 1e-9;

// ---- Vector math ----

#[test]
fn test_add_sub_scale() {
    let a = Point2D::new(3.0, -2.0);
    let b = Point2D::new(1.5, 4.0);

    assert_eq!(a.add(b), Point2D::new(4.5, 2.0));
    assert_eq!(a.sub(b), Point2D::new(1.5, -6.0));
    assert_eq!(a.scale(2.0), Point2D::new(6.0, -4.0));
    assert_eq!(a + b, a.add(b));
    assert_eq!(a - b, a.sub(b));
    assert_eq!(a * -1.0, -a);
}

#[test]
fn test_divide() {
    let v = Point2D::new(10.0, -4.0);
    assert_eq!(v.divide(2.0), Ok(Point2D::new(5.0, -2.0)));
    assert_eq!(v.divide(0.0), Err(SimError::DivideByZero));
    assert_eq!(v.divide(-0.0), Err(SimError::DivideByZero));
}

#[test]
fn test_length_and_distance() {
    assert!((Point2D::new(3.0, 4.0).length() - 5.0).abs() < EPS);
    assert_eq!(Point2D::ZERO.length(), 0.0);
    assert!(Point2D::new(-3.0, -4.0).length() > 0.0);

    let a = Point2D::new(1.0, 1.0);
    let b = Point2D::new(4.0, 5.0);
    assert!((a.distance(b) - 5.0).abs() < EPS);
    assert!((a.dot(b) - 9.0).abs() < EPS);
}

#[test]
fn test_normalize() {
    let n = Point2D::new(0.0, -7.5).normalize().unwrap();
    assert!((n.x - 0.0).abs() < EPS);
    assert!((n.y + 1.0).abs() < EPS);
}

#[test]
fn test_normalize_zero_is_degenerate() {
    assert_eq!(Point2D::ZERO.normalize(), Err(SimError::DegenerateVector));
}

#[test]
fn test_normalize_non_finite_is_degenerate() {
    assert_eq!(
        Point2D::new(f64::NAN, 1.0).normalize(),
        Err(SimError::DegenerateVector)
    );
}

#[test]
fn test_glam_conversion() {
    let p = Point2D::new(2.5, -1.0);
    let v: glam::DVec2 = p.into();
    assert_eq!(v, glam::DVec2::new(2.5, -1.0));
    assert_eq!(Point2D::from(v), p);
}

#[test]
fn test_extreme_magnitudes() {
    let huge = Point2D::new(1e200, 0.0);
    assert_eq!(huge.length(), 1e200);
    assert_eq!(huge.normalize(), Ok(Point2D::new(1.0, 0.0)));

    let tiny = Point2D::new(1e-200, 0.0);
    assert_eq!(tiny.length(), 1e-200);
    assert_eq!(tiny.normalize(), Ok(Point2D::new(1.0, 0.0)));

    let max = Point2D::new(f64::MAX, -f64::MAX);
    let n = max.normalize().unwrap();
    assert!((n.length() - 1.0).abs() < 1e-12);
    assert!(n.x > 0.0 && n.y < 0.0);

    let subnormal = Point2D::new(0.0, -f64::MIN_POSITIVE / 4.0);
    assert!(subnormal.length() > 0.0);
    assert_eq!(subnormal.normalize(), Ok(Point2D::new(0.0, -1.0)));
}

#[test]
fn test_normalize_infinite_is_degenerate() {
    assert_eq!(
        Point2D::new(f64::INFINITY, 0.0).normalize(),
        Err(SimError::DegenerateVector)
    );
}

fn finite_f64() -> impl Strategy<Value = f64> {
    use proptest::num::f64::{NEGATIVE, NORMAL, POSITIVE, SUBNORMAL, ZERO};
    POSITIVE | NEGATIVE | NORMAL | SUBNORMAL | ZERO
}

proptest! {
    #[test]
    fn prop_normalize_has_unit_length(x in finite_f64(), y in finite_f64()) {
        prop_assume!(x != 0.0 || y != 0.0);
        let n = Point2D::new(x, y).normalize().unwrap();
        prop_assert!((n.length() - 1.0).abs() < 1e-12);
    }

    #[test]
    fn prop_length_is_non_negative(x in any::<f64>(), y in any::<f64>()) {
        let len = Point2D::new(x, y).length();
        prop_assert!(len.is_nan() || len >= 0.0);
    }
}

// ---- Time ----

#[test]
fn test_sim_time_advance() {
    let mut time = SimTime::default();
    time.advance(0.5);
    time.advance(0.25);
    assert_eq!(time.tick, 2);
    assert!((time.elapsed_secs - 0.75).abs() < EPS);
}

// ---- Outcome ----

#[test]
fn test_outcome_terminal_and_banner() {
    assert!(!Outcome::InProgress.is_terminal());
    assert!(Outcome::Won.is_terminal());
    assert!(Outcome::Lost.is_terminal());
    assert_eq!(Outcome::InProgress.banner(), None);
    assert_eq!(Outcome::Won.banner(), Some("You Won!"));
    assert_eq!(Outcome::Lost.banner(), Some("You Lose :["));
}

// ---- Serialization ----

#[test]
fn test_entity_id_serializes_as_number() {
    assert_eq!(serde_json::to_string(&EntityId(7)).unwrap(), "7");
    assert_eq!(EntityId(7).to_string(), "#7");
}

#[test]
fn test_tick_result_serde() {
    let result = TickResult {
        tick: 12,
        spawned_monster_ids: vec![EntityId(4)],
        destroyed_pairs: vec![DestroyedPair {
            projectile: EntityId(2),
            monster: EntityId(3),
        }],
        expired_projectile_ids: vec![],
        score: 1,
        outcome: Outcome::InProgress,
    };
    let json = serde_json::to_string(&result).unwrap();
    let back: TickResult = serde_json::from_str(&json).unwrap();
    assert_eq!(result, back);
}

#[test]
fn test_entity_view_serde() {
    let view = EntityView {
        id: EntityId(1),
        kind: EntityKind::Monster,
        position: Point2D::new(10.0, 20.0),
        radius: 5.0,
    };
    let json = serde_json::to_string(&view).unwrap();
    assert!(json.contains("\"Monster\""));
    let back: EntityView = serde_json::from_str(&json).unwrap();
    assert_eq!(view, back);
}

#[test]
fn test_error_messages() {
    assert_eq!(
        SimError::UnknownEntityId(EntityId(9)).to_string(),
        "unknown entity #9"
    );
    assert_eq!(
        SimError::InvalidConfig("bounds_width must be positive").to_string(),
        "invalid session config: bounds_width must be positive"
    );
}

// ---- Bounds ----

#[test]
fn test_bounds_is_outside() {
    let bounds = crate::types::Bounds::new(300.0, 500.0);
    assert!(!bounds.is_outside(Point2D::new(150.0, 250.0), 10.0));
    // Still touching the right edge.
    assert!(!bounds.is_outside(Point2D::new(305.0, 250.0), 10.0));
    assert!(bounds.is_outside(Point2D::new(311.0, 250.0), 10.0));
    assert!(bounds.is_outside(Point2D::new(-11.0, 250.0), 10.0));
    assert!(bounds.is_outside(Point2D::new(150.0, 511.0), 10.0));
    assert!(bounds.is_outside(Point2D::new(150.0, -11.0), 10.0));
}
