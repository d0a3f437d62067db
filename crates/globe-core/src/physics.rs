//! Idle spin, drag tracking and inertial coast.
//!
//! All per-frame quantities are tuned against a 60 Hz frame and multiplied by
//! a time scale (`elapsed / 16.67ms`); friction is raised to that power so the
//! decay rate does not depend on the display refresh rate.

use glam::DVec2;

/// Orientation in degrees. Pitch stays within `[-max_pitch, max_pitch]`.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct RotationState {
    pub pitch: f64,
    pub yaw: f64,
}

/// Angular velocity in degrees per 60 Hz frame.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Velocity {
    pub pitch: f64,
    pub yaw: f64,
}

impl Velocity {
    #[inline]
    pub fn magnitude(&self) -> f64 {
        self.pitch.hypot(self.yaw)
    }
}

/// Alive between pointer down and pointer up.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DragSession {
    pub last: DVec2,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PhysicsParams {
    pub max_pitch: f64,
    pub friction: f64,
    pub auto_spin: f64,
    pub stop_threshold: f64,
    /// Degrees per pointer pixel applied immediately while dragging.
    pub tracking_gain: f64,
    /// Degrees per frame per pointer pixel left behind for the coast.
    pub inertia_gain: f64,
}

/// Single owner of rotation, velocity and drag state for one globe.
#[derive(Clone, Debug)]
pub struct Controller {
    params: PhysicsParams,
    rotation: RotationState,
    velocity: Velocity,
    drag: Option<DragSession>,
}

impl Controller {
    pub fn new(params: PhysicsParams, initial_pitch: f64) -> Self {
        Self {
            params,
            rotation: RotationState {
                pitch: initial_pitch.clamp(-params.max_pitch, params.max_pitch),
                yaw: 0.0,
            },
            velocity: Velocity::default(),
            drag: None,
        }
    }

    pub fn rotation(&self) -> RotationState {
        self.rotation
    }

    pub fn velocity(&self) -> Velocity {
        self.velocity
    }

    pub fn params(&self) -> &PhysicsParams {
        &self.params
    }

    pub fn is_dragging(&self) -> bool {
        self.drag.is_some()
    }

    /// Swap tuning on a size-class change. Orientation carries over, the
    /// pitch is re-clamped and any drag in flight is dropped.
    pub fn set_params(&mut self, params: PhysicsParams) {
        self.params = params;
        self.rotation.pitch = self.clamp_pitch(self.rotation.pitch);
        self.drag = None;
    }

    pub fn pointer_down(&mut self, pos: DVec2) {
        if !pos.is_finite() {
            return;
        }
        self.velocity = Velocity::default();
        self.drag = Some(DragSession { last: pos });
    }

    pub fn pointer_move(&mut self, pos: DVec2) {
        let Some(session) = self.drag.as_mut().filter(|_| pos.is_finite()) else {
            return;
        };
        let delta = pos - session.last;
        session.last = pos;

        // Screen y grows downwards; dragging up tilts the top toward the viewer.
        self.velocity = Velocity {
            pitch: -delta.y * self.params.inertia_gain,
            yaw: delta.x * self.params.inertia_gain,
        };
        self.rotation.pitch =
            self.clamp_pitch(self.rotation.pitch - delta.y * self.params.tracking_gain);
        self.rotation.yaw += delta.x * self.params.tracking_gain;
    }

    /// Pointer up, cancel or leave. Velocity from the last move is kept.
    pub fn pointer_up(&mut self) {
        self.drag = None;
    }

    /// Advance one frame of idle motion. No-op while dragging.
    pub fn step(&mut self, time_scale: f64) {
        if self.drag.is_some() {
            return;
        }
        self.rotation.yaw += self.params.auto_spin * time_scale;

        let threshold = self.params.stop_threshold;
        if self.velocity.pitch.abs() > threshold || self.velocity.yaw.abs() > threshold {
            self.rotation.pitch =
                self.clamp_pitch(self.rotation.pitch + self.velocity.pitch * time_scale);
            self.rotation.yaw += self.velocity.yaw * time_scale;
            let friction = self.params.friction.powf(time_scale);
            self.velocity.pitch *= friction;
            self.velocity.yaw *= friction;
        }
    }

    #[inline]
    fn clamp_pitch(&self, pitch: f64) -> f64 {
        pitch.clamp(-self.params.max_pitch, self.params.max_pitch)
    }
}
