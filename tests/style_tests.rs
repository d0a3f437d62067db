// Host-side tests for DOM attribute formatting.
// The web crate is wasm-only, so the pure module is included directly.

#![allow(dead_code)]
mod style {
    include!("../src/style.rs");
}

use style::*;

#[test]
fn svg_numbers_use_two_decimals() {
    assert_eq!(svg_number(12.0), "12.00");
    assert_eq!(svg_number(-0.126), "-0.13");
    assert_eq!(svg_number(179.99999), "180.00");
}

#[test]
fn opacity_is_clamped_to_unit_range() {
    assert_eq!(opacity(0.5), "0.500");
    assert_eq!(opacity(1.7), "1.000");
    assert_eq!(opacity(-0.2), "0.000");
}

#[test]
fn label_transform_is_translate_then_scale() {
    assert_eq!(
        label_transform(10.0, -20.5, 0.75),
        "translate3d(10.00px, -20.50px, 0) scale(0.750)"
    );
}

#[test]
fn icon_class_carries_identifier() {
    assert_eq!(icon_class("react"), "skill-icon icon-react");
}
