use crate::constants::VISIBILITY_THRESHOLD;
use holo_core::{FrameLoop, FrameScheduler};
use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys as web;

pub type SharedLoop = Rc<RefCell<FrameLoop<RafScheduler>>>;

/// Schedules the loop's tick closure with `requestAnimationFrame`.
pub struct RafScheduler {
    tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>>,
}

impl FrameScheduler for RafScheduler {
    type Handle = i32;

    fn request_frame(&mut self) -> Option<i32> {
        let window = web::window()?;
        let tick = self.tick.borrow();
        let closure = tick.as_ref()?;
        window
            .request_animation_frame(closure.as_ref().unchecked_ref())
            .ok()
    }

    fn cancel_frame(&mut self, handle: i32) {
        if let Some(w) = web::window() {
            _ = w.cancel_animation_frame(handle);
        }
    }
}

/// Build a stopped frame loop whose every frame runs `body` with the wall
/// delta in seconds. The tick closure lives as long as the page.
pub fn install(mut body: impl FnMut(f32) + 'static) -> SharedLoop {
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let frames = Rc::new(RefCell::new(FrameLoop::new(RafScheduler { tick: tick.clone() })));
    let frames_tick = frames.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        frames_tick
            .borrow_mut()
            .run_frame(Instant::now(), &mut body);
    }) as Box<dyn FnMut()>));
    frames
}

/// Call `on_change(true)` when at least `VISIBILITY_THRESHOLD` of `target` is
/// on screen and `on_change(false)` when it scrolls away.
pub fn observe_visibility(
    target: &web::Element,
    mut on_change: impl FnMut(bool) + 'static,
) -> anyhow::Result<()> {
    let closure = Closure::wrap(Box::new(
        move |entries: js_sys::Array, _observer: web::IntersectionObserver| {
            for entry in entries.iter() {
                if let Ok(entry) = entry.dyn_into::<web::IntersectionObserverEntry>() {
                    on_change(entry.is_intersecting());
                }
            }
        },
    )
        as Box<dyn FnMut(js_sys::Array, web::IntersectionObserver)>);
    let init = web::IntersectionObserverInit::new();
    init.set_threshold(&JsValue::from_f64(VISIBILITY_THRESHOLD));
    let observer =
        web::IntersectionObserver::new_with_options(closure.as_ref().unchecked_ref(), &init)
            .map_err(|e| anyhow::anyhow!("{:?}", e))?;
    observer.observe(target);
    closure.forget();
    Ok(())
}
