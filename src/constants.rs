// DOM hooks and presentation defaults for the mounted globe.

// Mount point and children
pub const ROOT_ID: &str = "skills-globe";
pub const SVG_CLASS: &str = "icosahedron-svg";
pub const CLOUD_CLASS: &str = "skills-cloud";
pub const LABEL_CLASS: &str = "skill-item";
pub const LABEL_NAME_CLASS: &str = "skill-name";

// Wireframe surface
pub const SVG_NS: &str = "http://www.w3.org/2000/svg";
pub const SVG_VIEWBOX: &str = "-250 -250 500 500"; // label radius 220 plus label overhang
pub const LINE_STROKE: &str = "var(--primary)";
pub const LINE_STROKE_WIDTH: &str = "1";
pub const LINE_INITIAL_OPACITY: &str = "0.3";
