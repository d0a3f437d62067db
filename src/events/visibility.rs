use globe_core::GlobeScene;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

type ObserverCallback = Closure<dyn FnMut(js_sys::Array, web::IntersectionObserver)>;

/// Pauses the scene while its mount point is scrolled off screen.
pub struct VisibilityObserver {
    observer: web::IntersectionObserver,
    _callback: ObserverCallback,
}

impl VisibilityObserver {
    pub fn observe(target: &web::Element, scene: Rc<RefCell<GlobeScene>>) -> anyhow::Result<Self> {
        let callback: ObserverCallback = Closure::wrap(Box::new(
            move |entries: js_sys::Array, _observer: web::IntersectionObserver| {
                // Entries arrive oldest first; the last one is the current state.
                let visible = entries
                    .iter()
                    .filter_map(|e| e.dyn_into::<web::IntersectionObserverEntry>().ok())
                    .last()
                    .map(|e| e.is_intersecting());
                if let Some(visible) = visible {
                    let mut scene = scene.borrow_mut();
                    if scene.is_visible() != visible {
                        log::debug!("[visibility] on screen: {}", visible);
                    }
                    scene.set_visible(visible);
                }
            },
        )
            as Box<dyn FnMut(js_sys::Array, web::IntersectionObserver)>);
        let observer = web::IntersectionObserver::new(callback.as_ref().unchecked_ref())
            .map_err(|e| anyhow::anyhow!("{:?}", e))?;
        observer.observe(target);
        Ok(Self {
            observer,
            _callback: callback,
        })
    }
}

impl Drop for VisibilityObserver {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}
