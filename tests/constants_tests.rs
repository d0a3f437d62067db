// Host-side tests for tuning constants and their relationships.
// The web crate is wasm-only, so its DOM constants are included directly.

#![allow(dead_code)]
mod web_constants {
    include!("../src/constants.rs");
}

use globe_core::constants::*;
use web_constants::*;

#[test]
#[allow(clippy::assertions_on_constants)]
fn sizes_are_positive_and_ordered() {
    assert!(STANDARD_RADIUS > 0.0 && COMPACT_RADIUS > 0.0);
    // Labels float just outside the wireframe
    assert!(STANDARD_LABEL_RADIUS > STANDARD_RADIUS);
    assert!(COMPACT_LABEL_RADIUS > COMPACT_RADIUS);
    // Compact never outgrows standard
    assert!(COMPACT_RADIUS < STANDARD_RADIUS);
    assert!(COMPACT_SUBDIVISION_LEVEL <= STANDARD_SUBDIVISION_LEVEL);
    assert!(STANDARD_SUBDIVISION_LEVEL <= MAX_SUBDIVISION_LEVEL);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn physics_constants_are_stable() {
    assert!(FRICTION > 0.0 && FRICTION < 1.0);
    assert!(VELOCITY_STOP_THRESHOLD > 0.0);
    // Immediate tracking is stronger than the residual coast
    assert!(DRAG_TRACKING_GAIN > DRAG_INERTIA_GAIN);
    assert!(COMPACT_MAX_PITCH_DEG <= STANDARD_MAX_PITCH_DEG);
    assert!(STANDARD_MAX_PITCH_DEG < 90.0);
    assert!(INITIAL_PITCH_DEG.abs() <= COMPACT_MAX_PITCH_DEG);
    assert!(MAX_FRAME_DELTA_MS > TARGET_FRAME_MS);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn layout_latitudes_are_inside_the_sphere() {
    assert!(POLE_LATITUDE > 0.0 && POLE_LATITUDE < 1.0);
    for lat in RING_LATITUDES {
        assert!(lat.abs() < POLE_LATITUDE);
    }
    assert!(RING_LATITUDES.windows(2).all(|w| w[0] > w[1]));
    assert_eq!(RING_AZIMUTH_OFFSETS.len(), RING_LATITUDES.len());
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn depth_cue_ranges_stay_in_unit_interval() {
    assert!(EDGE_OPACITY_MIN + EDGE_OPACITY_SPAN <= 1.0);
    assert!(LABEL_OPACITY_MIN + LABEL_OPACITY_SPAN <= 1.0);
    assert!(LABEL_SCALE_MIN > 0.0);
    assert!(COMPACT_OPACITY_INTERVAL >= STANDARD_OPACITY_INTERVAL);
    assert!(STANDARD_OPACITY_INTERVAL >= 1);
}

#[test]
fn viewbox_contains_the_label_sphere() {
    let extents: Vec<f64> = SVG_VIEWBOX
        .split_whitespace()
        .map(|v| v.parse().unwrap())
        .collect();
    assert_eq!(extents.len(), 4);
    assert!(-extents[0] > STANDARD_LABEL_RADIUS);
    assert!(extents[2] / 2.0 > STANDARD_LABEL_RADIUS);
}
