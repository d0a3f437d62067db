#![cfg(target_arch = "wasm32")]
use globe_core::{GlobeConfig, GlobeScene, SizeClass};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

mod constants;
mod dom;
mod events;
mod frame;
mod style;
mod surface;

/// Everything that must be released when the globe is torn down.
struct Mount {
    _listeners: Vec<events::Listener>,
    _visibility: events::VisibilityObserver,
    frame_loop: frame::LoopHandle,
}

thread_local! {
    static MOUNTED: RefCell<Option<Mount>> = const { RefCell::new(None) };
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("globe-web starting");

    spawn_local(async move {
        if let Err(e) = mount() {
            log::error!("mount error: {:?}", e);
        }
    });
    Ok(())
}

/// Stop the animation loop and detach every listener. Safe to call twice.
#[wasm_bindgen]
pub fn unmount() {
    let mounted = MOUNTED.with(|m| m.borrow_mut().take());
    if let Some(mount) = mounted {
        mount.frame_loop.cancel();
        drop(mount);
        log::info!("globe-web unmounted");
    }
}

fn mount() -> anyhow::Result<()> {
    if MOUNTED.with(|m| m.borrow().is_some()) {
        log::warn!("[mount] globe already mounted; ignoring");
        return Ok(());
    }
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;
    let root = dom::globe_root(&document)?;

    let size_class = dom::viewport_width()
        .map(SizeClass::for_viewport_width)
        .unwrap_or_default();
    let scene = GlobeScene::new(GlobeConfig::for_size_class(size_class))?;
    log::info!(
        "[mount] {:?}: {} vertices, {} edges, {} labels",
        size_class,
        scene.mesh().vertices.len(),
        scene.mesh().edges.len(),
        scene.labels().len()
    );

    let surface = Rc::new(RefCell::new(Some(dom::build_surface(
        &document, &root, &scene,
    )?)));
    let scene = Rc::new(RefCell::new(scene));

    let mut listeners = events::wire_pointer_handlers(&root, scene.clone());
    listeners.push(events::wire_resize(
        &window,
        document.clone(),
        root.clone(),
        scene.clone(),
        surface.clone(),
    ));
    let visibility = events::VisibilityObserver::observe(&root, scene.clone())?;

    let frame_loop = frame::start_loop(frame::FrameContext::new(scene, surface));
    MOUNTED.with(|m| {
        *m.borrow_mut() = Some(Mount {
            _listeners: listeners,
            _visibility: visibility,
            frame_loop,
        })
    });
    Ok(())
}
