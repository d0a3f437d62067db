use super::Listener;
use globe_core::GlobeScene;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Feed drag gestures on `root` into the scene controller. Only the primary
/// pointer (mouse, first touch, pen) is tracked; input never renders directly.
pub fn wire_pointer_handlers(
    root: &web::HtmlElement,
    scene: Rc<RefCell<GlobeScene>>,
) -> Vec<Listener> {
    let mut listeners = Vec::with_capacity(5);

    {
        let scene = scene.clone();
        let root_capture = root.clone();
        listeners.push(Listener::new(root, "pointerdown", move |ev| {
            let Some(ev) = primary_pointer(ev) else {
                return;
            };
            scene
                .borrow_mut()
                .pointer_down(ev.client_x() as f64, ev.client_y() as f64);
            _ = root_capture.set_pointer_capture(ev.pointer_id());
            ev.prevent_default();
        }));
    }

    {
        let scene = scene.clone();
        listeners.push(Listener::new(root, "pointermove", move |ev| {
            let Some(ev) = primary_pointer(ev) else {
                return;
            };
            let mut scene = scene.borrow_mut();
            if scene.controller().is_dragging() {
                scene.pointer_move(ev.client_x() as f64, ev.client_y() as f64);
            }
        }));
    }

    for kind in ["pointerup", "pointercancel", "pointerleave"] {
        let scene = scene.clone();
        listeners.push(Listener::new(root, kind, move |ev| {
            if primary_pointer(ev).is_some() {
                scene.borrow_mut().pointer_up();
            }
        }));
    }

    listeners
}

#[inline]
fn primary_pointer(ev: web::Event) -> Option<web::PointerEvent> {
    ev.dyn_into::<web::PointerEvent>()
        .ok()
        .filter(|p| p.is_primary())
}
