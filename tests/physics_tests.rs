// Host-side tests for idle spin, drag tracking and inertial coast.

use globe_core::{Controller, GlobeConfig, PhysicsParams};
use glam::DVec2;

fn params() -> PhysicsParams {
    GlobeConfig::standard().physics
}

fn coasting(dx: f64, dy: f64) -> Controller {
    let mut c = Controller::new(params(), 0.0);
    c.pointer_down(DVec2::new(0.0, 0.0));
    c.pointer_move(DVec2::new(dx, dy));
    c.pointer_up();
    c
}

#[test]
fn idle_spin_advances_yaw_by_time_scale() {
    let mut c = Controller::new(params(), 15.0);
    c.step(1.0);
    assert!((c.rotation().yaw - params().auto_spin).abs() < 1e-12);
    c.step(2.5);
    assert!((c.rotation().yaw - 3.5 * params().auto_spin).abs() < 1e-12);
    assert_eq!(c.rotation().pitch, 15.0);
}

#[test]
fn no_idle_spin_while_dragging() {
    let mut c = Controller::new(params(), 15.0);
    c.pointer_down(DVec2::new(10.0, 10.0));
    for _ in 0..30 {
        c.step(1.0);
    }
    assert_eq!(c.rotation().yaw, 0.0);
    assert!(c.is_dragging());
}

#[test]
fn pointer_down_resets_velocity() {
    let mut c = coasting(100.0, 0.0);
    assert!(c.velocity().yaw > 0.0);
    c.pointer_down(DVec2::new(5.0, 5.0));
    assert_eq!(c.velocity().magnitude(), 0.0);
}

#[test]
fn moves_without_a_drag_are_ignored() {
    let mut c = Controller::new(params(), 10.0);
    c.pointer_move(DVec2::new(500.0, -300.0));
    assert_eq!(c.rotation().pitch, 10.0);
    assert_eq!(c.rotation().yaw, 0.0);
    assert_eq!(c.velocity().magnitude(), 0.0);
}

#[test]
fn drag_tracks_immediately_and_leaves_coast_velocity() {
    let p = params();
    let mut c = Controller::new(p, 0.0);
    c.pointer_down(DVec2::new(0.0, 0.0));
    c.pointer_move(DVec2::new(10.0, 4.0));
    assert!((c.rotation().yaw - 10.0 * p.tracking_gain).abs() < 1e-12);
    assert!((c.rotation().pitch + 4.0 * p.tracking_gain).abs() < 1e-12);
    assert!((c.velocity().yaw - 10.0 * p.inertia_gain).abs() < 1e-12);
    assert!((c.velocity().pitch + 4.0 * p.inertia_gain).abs() < 1e-12);

    // velocity reflects only the latest segment
    c.pointer_move(DVec2::new(11.0, 4.0));
    assert!((c.velocity().yaw - p.inertia_gain).abs() < 1e-12);
    assert_eq!(c.velocity().pitch, 0.0);
}

#[test]
fn coast_decays_monotonically_to_rest() {
    let mut c = coasting(100.0, -40.0);
    let threshold = params().stop_threshold;
    let mut prev = c.velocity().magnitude();
    let mut steps = 0;
    while c.velocity().pitch.abs() > threshold || c.velocity().yaw.abs() > threshold {
        c.step(1.0);
        let now = c.velocity().magnitude();
        assert!(now < prev, "velocity did not decrease at step {steps}");
        prev = now;
        steps += 1;
        assert!(steps < 500, "coast never settled");
    }
    // Below the threshold the residual no longer moves the globe.
    let before = c.rotation();
    c.step(1.0);
    assert_eq!(c.rotation().pitch, before.pitch);
    assert!((c.rotation().yaw - before.yaw - params().auto_spin).abs() < 1e-12);
}

#[test]
fn friction_is_frame_rate_independent() {
    let mut at_60 = coasting(100.0, 0.0);
    let mut at_120 = coasting(100.0, 0.0);
    for _ in 0..6 {
        at_60.step(1.0);
    }
    for _ in 0..12 {
        at_120.step(0.5);
    }
    assert!((at_60.velocity().yaw - at_120.velocity().yaw).abs() < 1e-9);
}

#[test]
fn pitch_stays_clamped_under_adversarial_input() {
    let max = params().max_pitch;
    let mut c = Controller::new(params(), 0.0);
    let moves = [
        (0.0, -1e6),
        (0.0, 1e6),
        (3.0, -1e9),
        (f64::NAN, 10.0),
        (f64::INFINITY, 0.0),
        (0.0, -250.0),
        (-400.0, 999.0),
    ];
    let mut pos = DVec2::ZERO;
    c.pointer_down(pos);
    for (dx, dy) in moves {
        pos += DVec2::new(dx, dy);
        c.pointer_move(pos);
        if !pos.is_finite() {
            pos = DVec2::ZERO;
            c.pointer_down(pos);
        }
        let pitch = c.rotation().pitch;
        assert!(pitch.is_finite() && pitch.abs() <= max, "pitch {pitch}");
    }
    c.pointer_move(DVec2::new(0.0, -1e7));
    c.pointer_up();
    for _ in 0..200 {
        c.step(3.0);
        assert!(c.rotation().pitch.abs() <= max);
    }
}

#[test]
fn initial_pitch_is_clamped() {
    let c = Controller::new(params(), 400.0);
    assert_eq!(c.rotation().pitch, params().max_pitch);
}

#[test]
fn switching_params_reclamps_pitch_and_ends_drag() {
    let mut c = Controller::new(params(), 0.0);
    c.pointer_down(DVec2::ZERO);
    c.pointer_move(DVec2::new(0.0, -110.0)); // +55 degrees
    assert!((c.rotation().pitch - 55.0).abs() < 1e-12);

    let compact = GlobeConfig::compact().physics;
    c.set_params(compact);
    assert_eq!(c.rotation().pitch, compact.max_pitch);
    assert!(!c.is_dragging());
}

#[test]
fn drag_scenario_raises_yaw_and_pitch() {
    // Δx = 50, Δy = -20: yaw turns right, dragging up tilts pitch up.
    let p = params();
    let mut c = Controller::new(p, 15.0);
    let before = c.rotation();
    c.pointer_down(DVec2::new(100.0, 100.0));
    c.pointer_move(DVec2::new(150.0, 80.0));
    let after = c.rotation();
    assert!(after.yaw > before.yaw);
    assert!(after.pitch > before.pitch);
    assert!(after.pitch.abs() <= p.max_pitch);
    assert!(c.velocity().pitch > 0.0 && c.velocity().yaw > 0.0);
}
