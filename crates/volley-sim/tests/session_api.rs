//! End-to-end play through the public session API, the way a host drives it.

use std::collections::HashSet;

use volley_sim::core::enums::{EntityKind, Outcome};
use volley_sim::core::error::SimError;
use volley_sim::core::types::Point2D;
use volley_sim::{create_session, Session, SessionConfig};

const DT: f64 = 1.0 / 60.0;

/// Shoot every new monster with a horizontal shot along its lane.
fn play_with_sharpshooter(session: &mut Session, max_ticks: usize) {
    let mut targeted = HashSet::new();
    for _ in 0..max_ticks {
        let player = session.player_position();
        for monster in session
            .snapshot_entities()
            .into_iter()
            .filter(|e| e.kind == EntityKind::Monster)
        {
            if targeted.insert(monster.id) {
                let from = Point2D::new(player.x, monster.position.y);
                session.fire_projectile(from, monster.position).unwrap();
            }
        }
        if session.tick(DT).outcome.is_terminal() {
            return;
        }
    }
}

#[test]
fn sharpshooter_wins() {
    let mut session = Session::with_config(SessionConfig {
        seed: 9,
        win_threshold: 3,
        ..Default::default()
    })
    .unwrap();

    play_with_sharpshooter(&mut session, 60 * 60);

    assert_eq!(session.outcome(), Outcome::Won);
    assert!(session.score() >= 3);
    assert_eq!(session.stats().hits, session.score());
    assert_eq!(session.outcome().banner(), Some("You Won!"));
}

#[test]
fn idle_player_loses() {
    let mut session = create_session(300.0, 500.0, 7);
    let mut lost_at = None;
    for _ in 0..600 {
        let result = session.tick(DT);
        if result.outcome == Outcome::Lost {
            lost_at = Some(result.tick);
            break;
        }
    }
    let lost_at = lost_at.expect("an unopposed monster must reach the left edge");
    assert_eq!(session.score(), 0);

    for _ in 0..120 {
        let result = session.tick(DT);
        assert_eq!(result.tick, lost_at);
        assert_eq!(result.score, 0);
        assert_eq!(result.outcome, Outcome::Lost);
    }
    assert_eq!(session.outcome().banner(), Some("You Lose :["));
}

#[test]
fn snapshot_is_in_id_order() {
    let mut session = create_session(480.0, 320.0, 3);
    for _ in 0..(60 * 5) {
        session.tick(DT);
        let _ = session.fire_from_player(Point2D::new(480.0, 0.0));
    }
    let ids: Vec<_> = session.snapshot_entities().iter().map(|e| e.id).collect();
    let mut sorted = ids.clone();
    sorted.sort();
    assert_eq!(ids, sorted);
    assert_eq!(session.snapshot_entities()[0].kind, EntityKind::Player);
}

#[test]
fn backward_shot_spawns_nothing() {
    let mut session = create_session(480.0, 320.0, 3);
    let before = session.snapshot_entities();
    let result = session.fire_from_player(Point2D::new(0.0, 160.0));
    assert_eq!(result, Err(SimError::InvalidDirection));
    assert_eq!(session.snapshot_entities(), before);
}

#[test]
fn with_config_rejects_bad_bounds() {
    let result = Session::with_config(SessionConfig::with_bounds(-1.0, 320.0, 0));
    assert!(matches!(result, Err(SimError::InvalidConfig(_))));
}
