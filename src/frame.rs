use crate::surface::DomSurface;
use globe_core::{GlobeScene, TickOutcome};
use instant::Instant;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub struct FrameContext {
    pub scene: Rc<RefCell<GlobeScene>>,
    pub surface: Rc<RefCell<Option<DomSurface>>>,
    pub last_instant: Instant,
    pub last_outcome: Option<TickOutcome>,
}

impl FrameContext {
    pub fn new(scene: Rc<RefCell<GlobeScene>>, surface: Rc<RefCell<Option<DomSurface>>>) -> Self {
        Self {
            scene,
            surface,
            last_instant: Instant::now(),
            last_outcome: None,
        }
    }

    pub fn frame(&mut self) {
        let now = Instant::now();
        let dt = now - self.last_instant;
        self.last_instant = now;

        let mut surface = self.surface.borrow_mut();
        let outcome = self.scene.borrow_mut().tick(dt, surface.as_mut());
        if self.last_outcome != Some(outcome) {
            log::debug!("[frame] {:?}", outcome);
            self.last_outcome = Some(outcome);
        }
    }
}

type TickClosure = Rc<RefCell<Option<Closure<dyn FnMut()>>>>;

/// Owns the requestAnimationFrame chain; cancelling (or dropping) stops it.
pub struct LoopHandle {
    tick: TickClosure,
    pending: Rc<Cell<Option<i32>>>,
}

impl LoopHandle {
    pub fn cancel(&self) {
        if let Some(id) = self.pending.take() {
            if let Some(w) = web::window() {
                _ = w.cancel_animation_frame(id);
            }
        }
        // Dropping the closure breaks the self-reference that keeps it alive.
        self.tick.borrow_mut().take();
    }
}

impl Drop for LoopHandle {
    fn drop(&mut self) {
        self.cancel();
    }
}

pub fn start_loop(mut frame_ctx: FrameContext) -> LoopHandle {
    let tick: TickClosure = Rc::new(RefCell::new(None));
    let pending = Rc::new(Cell::new(None));

    let tick_clone = tick.clone();
    let pending_clone = pending.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        pending_clone.set(None);
        frame_ctx.frame();
        schedule(&tick_clone, &pending_clone);
    }) as Box<dyn FnMut()>));
    schedule(&tick, &pending);

    LoopHandle { tick, pending }
}

fn schedule(tick: &TickClosure, pending: &Cell<Option<i32>>) {
    let Some(w) = web::window() else {
        return;
    };
    if let Some(cb) = tick.borrow().as_ref() {
        match w.request_animation_frame(cb.as_ref().unchecked_ref()) {
            Ok(id) => pending.set(Some(id)),
            Err(e) => log::error!("requestAnimationFrame failed: {:?}", e),
        }
    }
}
