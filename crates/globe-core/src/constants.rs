// Shared tuning constants for the globe. Values marked "compact" apply to the
// small-viewport size class; everything else is shared or standard-only.

// Viewport size classes
pub const COMPACT_BREAKPOINT_PX: f64 = 768.0; // widths at or below this are compact

// Sphere sizing (SVG user units, viewBox is 500x500 centred on the origin)
pub const STANDARD_RADIUS: f64 = 180.0; // wireframe
pub const STANDARD_LABEL_RADIUS: f64 = 220.0;
pub const COMPACT_RADIUS: f64 = 120.0;
pub const COMPACT_LABEL_RADIUS: f64 = 150.0;

// Mesh density
pub const STANDARD_SUBDIVISION_LEVEL: u32 = 2;
pub const COMPACT_SUBDIVISION_LEVEL: u32 = 1;
pub const MAX_SUBDIVISION_LEVEL: u32 = 6; // 40962 vertices, already far past a frame budget

// Pole + ring layout
pub const POLE_LATITUDE: f64 = 0.95; // fraction of the radius on the y axis
pub const RING_LATITUDES: [f64; 3] = [0.55, 0.0, -0.55]; // upper, equator, lower
pub const RING_AZIMUTH_OFFSETS: [f64; 3] = [0.0, std::f64::consts::FRAC_PI_8, std::f64::consts::FRAC_PI_4];

// Orientation
pub const INITIAL_PITCH_DEG: f64 = 15.0;
pub const STANDARD_MAX_PITCH_DEG: f64 = 60.0;
pub const COMPACT_MAX_PITCH_DEG: f64 = 45.0;

// Physics, expressed per 60 Hz frame and rescaled by elapsed time
pub const STANDARD_AUTO_SPIN_DEG: f64 = 0.3;
pub const COMPACT_AUTO_SPIN_DEG: f64 = 0.25;
pub const FRICTION: f64 = 0.94;
pub const VELOCITY_STOP_THRESHOLD: f64 = 0.01; // deg per frame
pub const DRAG_TRACKING_GAIN: f64 = 0.5; // deg per pointer px, applied immediately
pub const DRAG_INERTIA_GAIN: f64 = 0.08; // deg per frame per pointer px, residual coast

// Frame timing
pub const TARGET_FRAME_MS: f64 = 1000.0 / 60.0;
pub const MAX_FRAME_DELTA_MS: f64 = 50.0; // clamp after stalls / backgrounded tabs

// Throttled side-channel updates (opacity, stacking order) every K rendered frames
pub const STANDARD_OPACITY_INTERVAL: u32 = 2;
pub const COMPACT_OPACITY_INTERVAL: u32 = 4;

// Depth cueing
pub const EDGE_OPACITY_MIN: f64 = 0.15;
pub const EDGE_OPACITY_SPAN: f64 = 0.6;
pub const LABEL_SCALE_MIN: f64 = 0.4;
pub const LABEL_SCALE_SPAN: f64 = 0.6;
pub const LABEL_OPACITY_MIN: f64 = 0.2;
pub const LABEL_OPACITY_SPAN: f64 = 0.8;
