use super::Listener;
use crate::dom;
use crate::surface::DomSurface;
use globe_core::{GlobeConfig, GlobeScene, SizeClass};
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

/// Swap the whole configuration when the viewport crosses the compact
/// breakpoint. The surface is detached while its primitives are rebuilt.
pub fn wire_resize(
    window: &web::Window,
    document: web::Document,
    root: web::HtmlElement,
    scene: Rc<RefCell<GlobeScene>>,
    surface: Rc<RefCell<Option<DomSurface>>>,
) -> Listener {
    Listener::new(window, "resize", move |_ev| {
        let Some(width) = dom::viewport_width() else {
            return;
        };
        let size_class = SizeClass::for_viewport_width(width);
        if scene.borrow().config().size_class == size_class {
            return;
        }

        let mut scene = scene.borrow_mut();
        if let Err(e) = scene.reconfigure(GlobeConfig::for_size_class(size_class)) {
            log::error!("[resize] reconfigure to {:?} failed: {}", size_class, e);
            return;
        }
        let mut surface = surface.borrow_mut();
        *surface = None;
        match dom::build_surface(&document, &root, &scene) {
            Ok(s) => *surface = Some(s),
            Err(e) => log::error!("[resize] rebuilding primitives failed: {:?}", e),
        }
    })
}
