//! Per-frame driver: physics step, rotation of every vertex and label, and
//! in-place writes to the host surface.
//!
//! Opacity and stacking order are refreshed only every `opacity_interval`
//! rendered frames. The depth-derived values change slowly compared to
//! positions, so they trade fidelity for fewer host writes; positions and
//! scale are written every frame.

use crate::config::GlobeConfig;
use crate::constants::*;
use crate::error::ConfigError;
use crate::geometry::Icosphere;
use crate::label::Label;
use crate::layout::{place_labels, PositionTable};
use crate::physics::{Controller, RotationState};
use crate::rotation::{project, Rotation};
use crate::surface::OutputSurface;
use glam::{DVec2, DVec3};
use std::time::Duration;

/// What a call to [`GlobeScene::tick`] did.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TickOutcome {
    Rendered,
    /// Off screen: nothing advanced, nothing written.
    Hidden,
    /// No surface attached yet: retried next frame.
    Detached,
}

/// Convert elapsed wall time into a 60 Hz-relative scale, clamping stalls.
#[inline]
pub fn time_scale(elapsed: Duration) -> f64 {
    let ms = (elapsed.as_secs_f64() * 1000.0).clamp(0.0, MAX_FRAME_DELTA_MS);
    ms / TARGET_FRAME_MS
}

#[inline]
pub fn edge_opacity(z1: f64, z2: f64, radius: f64) -> f64 {
    let depth = ((z1 + z2) * 0.5 + radius) / (radius * 2.0);
    depth * EDGE_OPACITY_SPAN + EDGE_OPACITY_MIN
}

/// `(scale, opacity, z_index)` for a label at rotated depth `z`.
#[inline]
pub fn label_depth_cues(z: f64, label_radius: f64) -> (f64, f64, i32) {
    let depth = (z + label_radius) / (label_radius * 2.0);
    (
        depth * LABEL_SCALE_SPAN + LABEL_SCALE_MIN,
        depth * LABEL_OPACITY_SPAN + LABEL_OPACITY_MIN,
        (z + label_radius).round() as i32,
    )
}

pub struct GlobeScene {
    config: GlobeConfig,
    mesh: Icosphere,
    positions: PositionTable,
    controller: Controller,
    visible: bool,
    frame: u64,
    rotated: Vec<DVec3>,
}

impl GlobeScene {
    pub fn new(config: GlobeConfig) -> Result<Self, ConfigError> {
        let (mesh, positions) = build_tables(&config)?;
        let controller = Controller::new(config.physics, config.initial_pitch);
        Ok(Self {
            rotated: Vec::with_capacity(mesh.vertices.len()),
            config,
            mesh,
            positions,
            controller,
            visible: true,
            frame: 0,
        })
    }

    /// Replace geometry and layout wholesale, keeping the current orientation.
    /// On error the scene is left untouched.
    pub fn reconfigure(&mut self, config: GlobeConfig) -> Result<(), ConfigError> {
        let (mesh, positions) = build_tables(&config)?;
        log::info!(
            "[scene] size class {:?} -> {:?} (edges {} -> {})",
            self.config.size_class,
            config.size_class,
            self.mesh.edges.len(),
            mesh.edges.len()
        );
        self.controller.set_params(config.physics);
        self.mesh = mesh;
        self.positions = positions;
        self.config = config;
        self.frame = 0;
        Ok(())
    }

    pub fn config(&self) -> &GlobeConfig {
        &self.config
    }

    pub fn mesh(&self) -> &Icosphere {
        &self.mesh
    }

    pub fn positions(&self) -> &PositionTable {
        &self.positions
    }

    pub fn labels(&self) -> &[Label] {
        &self.config.labels
    }

    pub fn controller(&self) -> &Controller {
        &self.controller
    }

    pub fn rotation(&self) -> RotationState {
        self.controller.rotation()
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn set_visible(&mut self, visible: bool) {
        self.visible = visible;
    }

    pub fn pointer_down(&mut self, x: f64, y: f64) {
        self.controller.pointer_down(DVec2::new(x, y));
    }

    pub fn pointer_move(&mut self, x: f64, y: f64) {
        self.controller.pointer_move(DVec2::new(x, y));
    }

    pub fn pointer_up(&mut self) {
        self.controller.pointer_up();
    }

    /// Advance one animation frame and push the results to `surface`.
    pub fn tick<S: OutputSurface + ?Sized>(
        &mut self,
        elapsed: Duration,
        surface: Option<&mut S>,
    ) -> TickOutcome {
        let Some(surface) = surface else {
            return TickOutcome::Detached;
        };
        if !self.visible {
            return TickOutcome::Hidden;
        }

        self.controller.step(time_scale(elapsed));
        let state = self.controller.rotation();
        let rotation = Rotation::new(state.pitch, state.yaw);
        let refresh_depth = self.frame % u64::from(self.config.opacity_interval) == 0;
        self.frame = self.frame.wrapping_add(1);

        self.rotated.clear();
        self.rotated
            .extend(self.mesh.vertices.iter().map(|v| rotation.apply(*v)));
        for (i, edge) in self.mesh.edges.iter().enumerate() {
            let p1 = self.rotated[edge.a as usize];
            let p2 = self.rotated[edge.b as usize];
            surface.set_line(i, p1.x, p1.y, p2.x, p2.y);
            if refresh_depth {
                surface.set_line_opacity(i, edge_opacity(p1.z, p2.z, self.mesh.radius));
            }
        }

        let label_radius = self.config.label_radius;
        for (i, position) in self.positions.iter().enumerate() {
            let projected = project(rotation.apply(*position));
            let (scale, opacity, z_index) = label_depth_cues(projected.depth, label_radius);
            surface.set_label_transform(i, projected.screen.x, projected.screen.y, scale);
            if refresh_depth {
                surface.set_label_depth(i, opacity, z_index);
            }
        }
        TickOutcome::Rendered
    }
}

fn build_tables(config: &GlobeConfig) -> Result<(Icosphere, PositionTable), ConfigError> {
    config.validate()?;
    let mesh = Icosphere::generate(config.radius, config.subdivision_level)?;
    let positions = place_labels(&config.labels, config.label_radius, config.layout)?;
    Ok((mesh, positions))
}
