//! Label placement on the sphere.
//!
//! Two pure policies: a golden-angle spiral for ungrouped label sets and a
//! pole + latitude-ring arrangement for labels that declare a group. Both
//! return one position per label, in label order.

use crate::constants::{POLE_LATITUDE, RING_AZIMUTH_OFFSETS, RING_LATITUDES};
use crate::error::ConfigError;
use crate::label::{Label, LabelGroup, Pole};
use glam::DVec3;
use smallvec::SmallVec;
use std::f64::consts::{PI, TAU};

/// How labels are distributed over the sphere.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum LayoutPolicy {
    /// Pole/ring when any label declares a group, uniform otherwise.
    #[default]
    Auto,
    Uniform,
    PoleRing,
}

impl LayoutPolicy {
    pub fn resolve(self, labels: &[Label]) -> LayoutPolicy {
        match self {
            LayoutPolicy::Auto if labels.iter().any(|l| l.group.is_some()) => LayoutPolicy::PoleRing,
            LayoutPolicy::Auto => LayoutPolicy::Uniform,
            other => other,
        }
    }
}

/// Label index -> sphere-local position. Replaced wholesale, never edited.
pub type PositionTable = Vec<DVec3>;

pub fn place_labels(
    labels: &[Label],
    radius: f64,
    policy: LayoutPolicy,
) -> Result<PositionTable, ConfigError> {
    if !radius.is_finite() || radius <= 0.0 {
        return Err(ConfigError::InvalidLabelRadius(radius));
    }
    let positions = match policy.resolve(labels) {
        LayoutPolicy::PoleRing => pole_ring(labels, radius)?,
        _ => fibonacci_sphere(labels.len(), radius),
    };
    if let Some(index) = positions.iter().position(|p| *p == DVec3::ZERO) {
        return Err(ConfigError::DegeneratePosition {
            index,
            name: labels[index].name,
        });
    }
    log::debug!(
        "[layout] policy={:?} labels={} radius={}",
        policy.resolve(labels),
        positions.len(),
        radius
    );
    Ok(positions)
}

/// Golden-angle spiral: `n` near-evenly spread, pairwise distinct points.
pub fn fibonacci_sphere(n: usize, radius: f64) -> PositionTable {
    let golden = PI * (1.0 + 5f64.sqrt());
    (0..n)
        .map(|i| {
            let phi = (1.0 - 2.0 * (i as f64 + 0.5) / n as f64).acos();
            let theta = golden * i as f64;
            DVec3::new(
                radius * phi.sin() * theta.cos(),
                radius * phi.cos(),
                radius * phi.sin() * theta.sin(),
            )
        })
        .collect()
}

/// Two pole labels on the y axis, the rest evenly spaced around their ring.
pub fn pole_ring(labels: &[Label], radius: f64) -> Result<PositionTable, ConfigError> {
    if labels.is_empty() {
        return Err(ConfigError::EmptyLabels);
    }
    let max_ring = (RING_LATITUDES.len() - 1) as u8;

    let mut north = 0usize;
    let mut south = 0usize;
    let mut rings: [SmallVec<[usize; 8]>; 3] = Default::default();
    for (index, label) in labels.iter().enumerate() {
        match label.group {
            Some(LabelGroup::Pole(Pole::North)) => north += 1,
            Some(LabelGroup::Pole(Pole::South)) => south += 1,
            Some(LabelGroup::Ring(ring)) if ring <= max_ring => rings[ring as usize].push(index),
            Some(LabelGroup::Ring(ring)) => {
                return Err(ConfigError::UnknownRing {
                    index,
                    name: label.name,
                    ring,
                    max: max_ring,
                })
            }
            None => {
                return Err(ConfigError::UngroupedLabel {
                    index,
                    name: label.name,
                })
            }
        }
    }
    if north != 1 || south != 1 {
        return Err(ConfigError::PoleCount { north, south });
    }

    let mut positions = vec![DVec3::ZERO; labels.len()];
    for (index, label) in labels.iter().enumerate() {
        match label.group {
            Some(LabelGroup::Pole(Pole::North)) => {
                positions[index] = DVec3::new(0.0, POLE_LATITUDE * radius, 0.0)
            }
            Some(LabelGroup::Pole(Pole::South)) => {
                positions[index] = DVec3::new(0.0, -POLE_LATITUDE * radius, 0.0)
            }
            _ => {}
        }
    }
    for (ring, members) in rings.iter().enumerate() {
        let lat = RING_LATITUDES[ring];
        let ring_radius = (1.0 - lat * lat).sqrt() * radius;
        let y = lat * radius;
        let count = members.len() as f64;
        for (k, &index) in members.iter().enumerate() {
            let theta = TAU * k as f64 / count + RING_AZIMUTH_OFFSETS[ring];
            positions[index] = DVec3::new(ring_radius * theta.cos(), y, ring_radius * theta.sin());
        }
    }
    Ok(positions)
}
