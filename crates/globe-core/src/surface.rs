use bytemuck::{Pod, Zeroable};

/// Host-side sink for per-frame primitive updates.
///
/// Primitives are addressed by dense index: edge `i` is line `i`, label `j` is
/// label primitive `j`. Implementations ignore indices they do not hold.
pub trait OutputSurface {
    fn set_line(&mut self, index: usize, x1: f64, y1: f64, x2: f64, y2: f64);
    fn set_line_opacity(&mut self, index: usize, opacity: f64);
    fn set_label_transform(&mut self, index: usize, x: f64, y: f64, scale: f64);
    fn set_label_depth(&mut self, index: usize, opacity: f64, z_index: i32);
}

#[repr(C)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Pod, Zeroable)]
pub struct LinePrimitive {
    pub x1: f32,
    pub y1: f32,
    pub x2: f32,
    pub y2: f32,
    pub opacity: f32,
}

#[repr(C)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Pod, Zeroable)]
pub struct LabelPrimitive {
    pub x: f32,
    pub y: f32,
    pub scale: f32,
    pub opacity: f32,
    pub z_index: i32,
}

/// In-memory surface: fixed-size primitive arrays mutated in place.
#[derive(Clone, Debug, Default)]
pub struct PrimitiveBuffer {
    pub lines: Vec<LinePrimitive>,
    pub labels: Vec<LabelPrimitive>,
}

impl PrimitiveBuffer {
    pub fn new(line_count: usize, label_count: usize) -> Self {
        Self {
            lines: vec![LinePrimitive::default(); line_count],
            labels: vec![LabelPrimitive::default(); label_count],
        }
    }

    /// `[x1, y1, x2, y2, opacity]` per line, contiguous.
    pub fn line_floats(&self) -> &[f32] {
        bytemuck::cast_slice(&self.lines)
    }

    /// Raw label records, five 4-byte fields each (`z_index` is an `i32`).
    pub fn label_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.labels)
    }
}

impl OutputSurface for PrimitiveBuffer {
    fn set_line(&mut self, index: usize, x1: f64, y1: f64, x2: f64, y2: f64) {
        if let Some(line) = self.lines.get_mut(index) {
            line.x1 = x1 as f32;
            line.y1 = y1 as f32;
            line.x2 = x2 as f32;
            line.y2 = y2 as f32;
        }
    }

    fn set_line_opacity(&mut self, index: usize, opacity: f64) {
        if let Some(line) = self.lines.get_mut(index) {
            line.opacity = opacity as f32;
        }
    }

    fn set_label_transform(&mut self, index: usize, x: f64, y: f64, scale: f64) {
        if let Some(label) = self.labels.get_mut(index) {
            label.x = x as f32;
            label.y = y as f32;
            label.scale = scale as f32;
        }
    }

    fn set_label_depth(&mut self, index: usize, opacity: f64, z_index: i32) {
        if let Some(label) = self.labels.get_mut(index) {
            label.opacity = opacity as f32;
            label.z_index = z_index;
        }
    }
}
