use glam::{DVec2, DVec3};

/// Yaw-then-pitch rotation with its trigonometry evaluated once.
///
/// Angles are in degrees. Yaw turns about the vertical axis, pitch tilts about
/// the horizontal axis; the order is fixed since the two do not commute.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rotation {
    cos_pitch: f64,
    sin_pitch: f64,
    cos_yaw: f64,
    sin_yaw: f64,
}

impl Rotation {
    pub fn new(pitch_deg: f64, yaw_deg: f64) -> Self {
        let (sin_pitch, cos_pitch) = pitch_deg.to_radians().sin_cos();
        let (sin_yaw, cos_yaw) = yaw_deg.to_radians().sin_cos();
        Self {
            cos_pitch,
            sin_pitch,
            cos_yaw,
            sin_yaw,
        }
    }

    #[inline]
    pub fn apply(&self, p: DVec3) -> DVec3 {
        let x1 = p.x * self.cos_yaw - p.z * self.sin_yaw;
        let z1 = p.x * self.sin_yaw + p.z * self.cos_yaw;
        let y2 = p.y * self.cos_pitch - z1 * self.sin_pitch;
        let z2 = p.y * self.sin_pitch + z1 * self.cos_pitch;
        DVec3::new(x1, y2, z2)
    }

    /// Undo [`Rotation::apply`]: pitch back first, then yaw back.
    #[inline]
    pub fn invert(&self, p: DVec3) -> DVec3 {
        let y1 = p.y * self.cos_pitch + p.z * self.sin_pitch;
        let z1 = -p.y * self.sin_pitch + p.z * self.cos_pitch;
        let x2 = p.x * self.cos_yaw + z1 * self.sin_yaw;
        let z2 = -p.x * self.sin_yaw + z1 * self.cos_yaw;
        DVec3::new(x2, y1, z2)
    }
}

#[inline]
pub fn rotate(p: DVec3, pitch_deg: f64, yaw_deg: f64) -> DVec3 {
    Rotation::new(pitch_deg, yaw_deg).apply(p)
}

/// Orthographic projection: screen position plus the depth used for cueing.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Projected {
    pub screen: DVec2,
    pub depth: f64,
}

#[inline]
pub fn project(rotated: DVec3) -> Projected {
    Projected {
        screen: rotated.truncate(),
        depth: rotated.z,
    }
}
