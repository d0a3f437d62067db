use thiserror::Error;

/// Construction-time failures. Nothing in the per-frame path produces these.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("sphere radius must be finite and positive, got {0}")]
    InvalidRadius(f64),
    #[error("label radius must be finite and positive, got {0}")]
    InvalidLabelRadius(f64),
    #[error("subdivision level {level} exceeds the maximum of {max}")]
    SubdivisionTooDeep { level: u32, max: u32 },
    #[error("pole/ring layout requested for an empty label set")]
    EmptyLabels,
    #[error("label {index} ({name}) references ring {ring}, only rings 0..={max} exist")]
    UnknownRing {
        index: usize,
        name: &'static str,
        ring: u8,
        max: u8,
    },
    #[error("label {index} ({name}) has no group but the pole/ring layout needs one")]
    UngroupedLabel { index: usize, name: &'static str },
    #[error("pole/ring layout needs exactly one north and one south label, found {north} north and {south} south")]
    PoleCount { north: usize, south: usize },
    #[error("label {index} ({name}) was placed at the origin")]
    DegeneratePosition { index: usize, name: &'static str },
    #[error("pitch limit must lie in (0, 90) degrees, got {0}")]
    InvalidPitchLimit(f64),
    #[error("initial pitch must be finite, got {0}")]
    InvalidInitialPitch(f64),
    #[error("friction must lie in (0, 1), got {0}")]
    InvalidFriction(f64),
    #[error("opacity update interval must be at least 1")]
    InvalidOpacityInterval,
    #[error("{name} must be finite and non-negative, got {value}")]
    InvalidGain { name: &'static str, value: f64 },
}
