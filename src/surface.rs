use crate::style;
use globe_core::OutputSurface;
use web_sys as web;

/// Handles to the SVG lines and label nodes, acquired once per configuration
/// and mutated in place every frame.
pub struct DomSurface {
    pub lines: Vec<web::Element>,
    pub labels: Vec<web::HtmlElement>,
}

impl OutputSurface for DomSurface {
    fn set_line(&mut self, index: usize, x1: f64, y1: f64, x2: f64, y2: f64) {
        if let Some(line) = self.lines.get(index) {
            _ = line.set_attribute("x1", &style::svg_number(x1));
            _ = line.set_attribute("y1", &style::svg_number(y1));
            _ = line.set_attribute("x2", &style::svg_number(x2));
            _ = line.set_attribute("y2", &style::svg_number(y2));
        }
    }

    fn set_line_opacity(&mut self, index: usize, opacity: f64) {
        if let Some(line) = self.lines.get(index) {
            _ = line.set_attribute("opacity", &style::opacity(opacity));
        }
    }

    fn set_label_transform(&mut self, index: usize, x: f64, y: f64, scale: f64) {
        if let Some(label) = self.labels.get(index) {
            _ = label
                .style()
                .set_property("transform", &style::label_transform(x, y, scale));
        }
    }

    fn set_label_depth(&mut self, index: usize, opacity: f64, z_index: i32) {
        if let Some(label) = self.labels.get(index) {
            let css = label.style();
            _ = css.set_property("opacity", &style::opacity(opacity));
            _ = css.set_property("z-index", &z_index.to_string());
        }
    }
}
