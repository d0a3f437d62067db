use crate::constants::*;
use crate::style;
use crate::surface::DomSurface;
use anyhow::anyhow;
use globe_core::{GlobeScene, Label};
use wasm_bindgen::JsCast;
use web_sys as web;

/// CSS pixel width of the layout viewport, if the window exposes one.
pub fn viewport_width() -> Option<f64> {
    web::window()
        .and_then(|w| w.inner_width().ok())
        .and_then(|v| v.as_f64())
}

pub fn globe_root(document: &web::Document) -> anyhow::Result<web::HtmlElement> {
    let el = document
        .get_element_by_id(ROOT_ID)
        .ok_or_else(|| anyhow!("missing #{}", ROOT_ID))?;
    let root = el
        .dyn_into::<web::HtmlElement>()
        .map_err(|e| anyhow!("{:?}", e))?;
    // Touch drags must reach us as pointer events instead of scrolling the page.
    _ = root.style().set_property("touch-action", "none");
    Ok(root)
}

/// (Re)create one SVG line per edge and one node per label under `root`.
pub fn build_surface(
    document: &web::Document,
    root: &web::HtmlElement,
    scene: &GlobeScene,
) -> anyhow::Result<DomSurface> {
    let svg = child_or_create(document, root, "svg", SVG_CLASS, Some(SVG_NS))?;
    svg.set_inner_html("");
    js(svg.set_attribute("viewBox", SVG_VIEWBOX))?;

    let edge_count = scene.mesh().edges.len();
    let mut lines = Vec::with_capacity(edge_count);
    for _ in 0..edge_count {
        let line = js(document.create_element_ns(Some(SVG_NS), "line"))?;
        for (name, value) in [
            ("x1", "0"),
            ("y1", "0"),
            ("x2", "0"),
            ("y2", "0"),
            ("stroke", LINE_STROKE),
            ("stroke-width", LINE_STROKE_WIDTH),
            ("opacity", LINE_INITIAL_OPACITY),
        ] {
            js(line.set_attribute(name, value))?;
        }
        js(svg.append_child(&line))?;
        lines.push(line);
    }

    let cloud = child_or_create(document, root, "div", CLOUD_CLASS, None)?;
    cloud.set_inner_html("");
    let mut labels = Vec::with_capacity(scene.labels().len());
    for label in scene.labels() {
        let node = label_node(document, label)?;
        js(cloud.append_child(&node))?;
        labels.push(node);
    }

    log::info!(
        "[dom] built {} lines and {} labels",
        lines.len(),
        labels.len()
    );
    Ok(DomSurface { lines, labels })
}

fn label_node(document: &web::Document, label: &Label) -> anyhow::Result<web::HtmlElement> {
    let node = js(document.create_element("div"))?
        .dyn_into::<web::HtmlElement>()
        .map_err(|e| anyhow!("{:?}", e))?;
    node.set_class_name(LABEL_CLASS);
    js(node.set_attribute("data-skill", label.name))?;
    _ = node.style().set_property("transform", &style::label_transform(0.0, 0.0, 0.7));
    _ = node.style().set_property("opacity", "0.5");

    let icon = js(document.create_element("span"))?;
    icon.set_class_name(&style::icon_class(label.icon));
    js(icon.set_attribute("style", &format!("color: {}", label.color)))?;
    js(icon.set_attribute("aria-hidden", "true"))?;

    let name = js(document.create_element("span"))?;
    name.set_class_name(LABEL_NAME_CLASS);
    name.set_text_content(Some(label.name));

    js(node.append_child(&icon))?;
    js(node.append_child(&name))?;
    Ok(node)
}

fn child_or_create(
    document: &web::Document,
    root: &web::HtmlElement,
    tag: &str,
    class: &str,
    namespace: Option<&str>,
) -> anyhow::Result<web::Element> {
    if let Some(existing) = js(root.query_selector(&format!("{}.{}", tag, class)))? {
        return Ok(existing);
    }
    let el = match namespace {
        Some(ns) => js(document.create_element_ns(Some(ns), tag))?,
        None => js(document.create_element(tag))?,
    };
    js(el.set_attribute("class", class))?;
    js(root.append_child(&el))?;
    Ok(el)
}

#[inline]
fn js<T>(result: Result<T, wasm_bindgen::JsValue>) -> anyhow::Result<T> {
    result.map_err(|e| anyhow!("{:?}", e))
}
