//! Construction-time configuration for one globe instance.
//!
//! Two canonical tunings exist, one per viewport size class. Values come from
//! `constants.rs`; callers may adjust fields before handing the config to
//! [`crate::GlobeScene::new`], which validates it.

use crate::constants::*;
use crate::error::ConfigError;
use crate::label::{Label, SKILLS};
use crate::layout::LayoutPolicy;
use crate::physics::PhysicsParams;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SizeClass {
    #[default]
    Standard,
    Compact,
}

impl SizeClass {
    pub fn for_viewport_width(width_px: f64) -> Self {
        if width_px <= COMPACT_BREAKPOINT_PX {
            SizeClass::Compact
        } else {
            SizeClass::Standard
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct GlobeConfig {
    pub size_class: SizeClass,
    pub radius: f64,
    pub label_radius: f64,
    pub subdivision_level: u32,
    pub labels: Vec<Label>,
    pub layout: LayoutPolicy,
    pub initial_pitch: f64,
    pub physics: PhysicsParams,
    /// Opacity and stacking order are refreshed every `opacity_interval` frames.
    pub opacity_interval: u32,
}

impl Default for GlobeConfig {
    fn default() -> Self {
        Self::standard()
    }
}

impl GlobeConfig {
    pub fn standard() -> Self {
        Self {
            size_class: SizeClass::Standard,
            radius: STANDARD_RADIUS,
            label_radius: STANDARD_LABEL_RADIUS,
            subdivision_level: STANDARD_SUBDIVISION_LEVEL,
            labels: SKILLS.to_vec(),
            layout: LayoutPolicy::Auto,
            initial_pitch: INITIAL_PITCH_DEG,
            physics: PhysicsParams {
                max_pitch: STANDARD_MAX_PITCH_DEG,
                friction: FRICTION,
                auto_spin: STANDARD_AUTO_SPIN_DEG,
                stop_threshold: VELOCITY_STOP_THRESHOLD,
                tracking_gain: DRAG_TRACKING_GAIN,
                inertia_gain: DRAG_INERTIA_GAIN,
            },
            opacity_interval: STANDARD_OPACITY_INTERVAL,
        }
    }

    pub fn compact() -> Self {
        let standard = Self::standard();
        Self {
            size_class: SizeClass::Compact,
            radius: COMPACT_RADIUS,
            label_radius: COMPACT_LABEL_RADIUS,
            subdivision_level: COMPACT_SUBDIVISION_LEVEL,
            physics: PhysicsParams {
                max_pitch: COMPACT_MAX_PITCH_DEG,
                auto_spin: COMPACT_AUTO_SPIN_DEG,
                ..standard.physics
            },
            opacity_interval: COMPACT_OPACITY_INTERVAL,
            ..standard
        }
    }

    pub fn for_size_class(size_class: SizeClass) -> Self {
        match size_class {
            SizeClass::Standard => Self::standard(),
            SizeClass::Compact => Self::compact(),
        }
    }

    /// Reject values that would produce a degenerate or unstable globe.
    /// Label grouping is checked by the layout itself.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.radius.is_finite() || self.radius <= 0.0 {
            return Err(ConfigError::InvalidRadius(self.radius));
        }
        if !self.label_radius.is_finite() || self.label_radius <= 0.0 {
            return Err(ConfigError::InvalidLabelRadius(self.label_radius));
        }
        if self.subdivision_level > MAX_SUBDIVISION_LEVEL {
            return Err(ConfigError::SubdivisionTooDeep {
                level: self.subdivision_level,
                max: MAX_SUBDIVISION_LEVEL,
            });
        }
        let p = &self.physics;
        if !(p.max_pitch > 0.0 && p.max_pitch < 90.0) {
            return Err(ConfigError::InvalidPitchLimit(p.max_pitch));
        }
        if !(p.friction > 0.0 && p.friction < 1.0) {
            return Err(ConfigError::InvalidFriction(p.friction));
        }
        for (name, value) in [
            ("auto_spin", p.auto_spin),
            ("stop_threshold", p.stop_threshold),
            ("tracking_gain", p.tracking_gain),
            ("inertia_gain", p.inertia_gain),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(ConfigError::InvalidGain { name, value });
            }
        }
        if !self.initial_pitch.is_finite() {
            return Err(ConfigError::InvalidInitialPitch(self.initial_pitch));
        }
        if self.opacity_interval == 0 {
            return Err(ConfigError::InvalidOpacityInterval);
        }
        Ok(())
    }
}
