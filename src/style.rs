// Attribute and CSS value formatting for the DOM surface.

#[inline]
pub fn svg_number(v: f64) -> String {
    format!("{:.2}", v)
}

#[inline]
pub fn opacity(v: f64) -> String {
    format!("{:.3}", v.clamp(0.0, 1.0))
}

/// Labels are positioned relative to the cloud centre, matching the SVG origin.
#[inline]
pub fn label_transform(x: f64, y: f64, scale: f64) -> String {
    format!("translate3d({:.2}px, {:.2}px, 0) scale({:.3})", x, y, scale)
}

#[inline]
pub fn icon_class(icon: &str) -> String {
    format!("skill-icon icon-{}", icon)
}
