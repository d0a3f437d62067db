// Host-side tests for label placement.

use globe_core::constants::{POLE_LATITUDE, RING_LATITUDES};
use globe_core::{
    fibonacci_sphere, place_labels, pole_ring, ConfigError, Label, LabelGroup, LayoutPolicy, Pole,
    SKILLS,
};
use glam::DVec3;
use std::f64::consts::TAU;

fn ring_of(label: &Label) -> Option<usize> {
    match label.group {
        Some(LabelGroup::Ring(r)) => Some(r as usize),
        _ => None,
    }
}

#[test]
fn uniform_layout_is_on_sphere_and_distinct() {
    let radius = 220.0;
    for n in [1usize, 2, 3, 7, 18, 100, 1000] {
        let points = fibonacci_sphere(n, radius);
        assert_eq!(points.len(), n);
        for p in &points {
            assert!((p.length() - radius).abs() < 1e-9 * radius, "n={n} {:?}", p);
        }
        for i in 0..n {
            for j in (i + 1)..n {
                assert!(
                    points[i].distance(points[j]) > 1e-6,
                    "n={n}: points {i} and {j} coincide"
                );
            }
        }
    }
}

#[test]
fn uniform_layout_spans_both_hemispheres() {
    let points = fibonacci_sphere(18, 1.0);
    assert!(points[0].y > 0.9);
    assert!(points[17].y < -0.9);
}

#[test]
fn skills_use_pole_ring_layout_by_default() {
    assert_eq!(LayoutPolicy::Auto.resolve(SKILLS), LayoutPolicy::PoleRing);
    let ungrouped = [
        Label::ungrouped("A", "a", "#000"),
        Label::ungrouped("B", "b", "#fff"),
    ];
    assert_eq!(LayoutPolicy::Auto.resolve(&ungrouped), LayoutPolicy::Uniform);
    assert_eq!(LayoutPolicy::Uniform.resolve(SKILLS), LayoutPolicy::Uniform);
}

#[test]
fn poles_are_pinned_to_the_y_axis() {
    let radius = 220.0;
    let positions = pole_ring(SKILLS, radius).unwrap();
    for (label, p) in SKILLS.iter().zip(&positions) {
        match label.group {
            Some(LabelGroup::Pole(Pole::North)) => {
                assert_eq!(*p, DVec3::new(0.0, 0.95 * radius, 0.0));
                assert_eq!(p.y, POLE_LATITUDE * radius);
            }
            Some(LabelGroup::Pole(Pole::South)) => {
                assert_eq!(*p, DVec3::new(0.0, -0.95 * radius, 0.0));
            }
            _ => {}
        }
    }
}

#[test]
fn ring_members_sit_on_their_latitude() {
    let radius = 220.0;
    let positions = pole_ring(SKILLS, radius).unwrap();
    for (label, p) in SKILLS.iter().zip(&positions) {
        if let Some(ring) = ring_of(label) {
            assert_eq!(p.y, RING_LATITUDES[ring] * radius, "{}", label.name);
            assert!((p.length() - radius).abs() < 1e-9 * radius, "{}", label.name);
        }
    }
}

#[test]
fn ring_members_are_evenly_spaced_in_azimuth() {
    let positions = pole_ring(SKILLS, 100.0).unwrap();
    for ring in 0..3 {
        let azimuths: Vec<f64> = SKILLS
            .iter()
            .zip(&positions)
            .filter(|(l, _)| ring_of(l) == Some(ring))
            .map(|(_, p)| p.z.atan2(p.x))
            .collect();
        let step = TAU / azimuths.len() as f64;
        for pair in azimuths.windows(2) {
            let diff = (pair[1] - pair[0]).rem_euclid(TAU);
            assert!((diff - step).abs() < 1e-9, "ring {ring}: {diff} vs {step}");
        }
    }
}

#[test]
fn rings_are_staggered() {
    let positions = pole_ring(SKILLS, 100.0).unwrap();
    let first = |ring: usize| {
        let i = SKILLS.iter().position(|l| ring_of(l) == Some(ring)).unwrap();
        positions[i].z.atan2(positions[i].x)
    };
    assert!((first(0) - first(1)).abs() > 1e-3);
    assert!((first(1) - first(2)).abs() > 1e-3);
}

#[test]
fn layout_is_pure() {
    let a = place_labels(SKILLS, 220.0, LayoutPolicy::Auto).unwrap();
    let b = place_labels(SKILLS, 220.0, LayoutPolicy::Auto).unwrap();
    assert_eq!(a, b);
    assert_eq!(a.len(), SKILLS.len());
}

#[test]
fn pole_ring_rejects_empty_label_set() {
    assert_eq!(
        place_labels(&[], 220.0, LayoutPolicy::PoleRing).unwrap_err(),
        ConfigError::EmptyLabels
    );
    // The spiral has nothing to place and nothing to reject.
    assert!(place_labels(&[], 220.0, LayoutPolicy::Uniform)
        .unwrap()
        .is_empty());
}

#[test]
fn pole_ring_rejects_unknown_ring() {
    let mut labels = SKILLS.to_vec();
    labels[3].group = Some(LabelGroup::Ring(3));
    let err = pole_ring(&labels, 220.0).unwrap_err();
    assert_eq!(
        err,
        ConfigError::UnknownRing {
            index: 3,
            name: "JavaScript",
            ring: 3,
            max: 2
        }
    );
}

#[test]
fn pole_ring_rejects_missing_or_duplicate_poles() {
    let mut labels = SKILLS.to_vec();
    let south = labels.len() - 1;
    labels[south].group = Some(LabelGroup::Ring(1));
    assert_eq!(
        pole_ring(&labels, 220.0).unwrap_err(),
        ConfigError::PoleCount { north: 1, south: 0 }
    );

    labels[south].group = Some(LabelGroup::Pole(Pole::North));
    assert_eq!(
        pole_ring(&labels, 220.0).unwrap_err(),
        ConfigError::PoleCount { north: 2, south: 0 }
    );
}

#[test]
fn pole_ring_rejects_ungrouped_labels() {
    let mut labels = SKILLS.to_vec();
    labels[5].group = None;
    assert!(matches!(
        place_labels(&labels, 220.0, LayoutPolicy::Auto),
        Err(ConfigError::UngroupedLabel { index: 5, .. })
    ));
}

#[test]
fn rejects_degenerate_radius() {
    for radius in [0.0, -1.0, f64::NAN] {
        assert!(matches!(
            place_labels(SKILLS, radius, LayoutPolicy::Auto),
            Err(ConfigError::InvalidLabelRadius(_))
        ));
    }
}
