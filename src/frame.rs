use instant::Instant;
use portfolio_core::{CancelToken, LoopControl};
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

type Holder = Rc<RefCell<Option<Closure<dyn FnMut()>>>>;

// Drop a self-referencing closure after the current callback has returned.
fn release_later(holder: Holder) {
    wasm_bindgen_futures::spawn_local(async move {
        drop(holder.borrow_mut().take());
    });
}

/// Run `step` once per animation frame with the elapsed milliseconds since the
/// previous frame, until it returns `Stop` or `token` is cancelled.
pub fn start_loop(token: CancelToken, mut step: impl FnMut(f64) -> LoopControl + 'static) {
    let tick: Holder = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    let mut last_instant = Instant::now();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        if token.is_cancelled() {
            release_later(tick_clone.clone());
            return;
        }
        let now = Instant::now();
        let dt_ms = (now - last_instant).as_secs_f64() * 1000.0;
        last_instant = now;
        if step(dt_ms) == LoopControl::Stop {
            release_later(tick_clone.clone());
            return;
        }
        request_frame(&tick_clone);
    }) as Box<dyn FnMut()>));
    request_frame(&tick);
}

fn request_frame(holder: &Holder) {
    if let (Some(w), Some(cb)) = (web::window(), holder.borrow().as_ref()) {
        _ = w.request_animation_frame(cb.as_ref().unchecked_ref());
    }
}

/// One-shot timer.
pub fn set_timeout(ms: i32, f: impl FnOnce() + 'static) -> anyhow::Result<i32> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let cb = Closure::once_into_js(f);
    window
        .set_timeout_with_callback_and_timeout_and_arguments_0(cb.unchecked_ref(), ms)
        .map_err(|e| anyhow::anyhow!("setTimeout failed: {:?}", e))
}

/// Repeating timer that clears itself when `step` returns `Stop` or `token`
/// is cancelled.
pub fn start_interval(
    ms: i32,
    token: CancelToken,
    mut step: impl FnMut() -> LoopControl + 'static,
) -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let handle: Rc<Cell<Option<i32>>> = Rc::new(Cell::new(None));
    let holder: Holder = Rc::new(RefCell::new(None));

    let handle_cb = handle.clone();
    let holder_cb = holder.clone();
    *holder.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        if token.is_cancelled() || step() == LoopControl::Stop {
            if let (Some(w), Some(h)) = (web::window(), handle_cb.take()) {
                w.clear_interval_with_handle(h);
            }
            release_later(holder_cb.clone());
        }
    }) as Box<dyn FnMut()>));

    let id = {
        let cb = holder.borrow();
        let cb = cb
            .as_ref()
            .ok_or_else(|| anyhow::anyhow!("interval callback missing"))?;
        window
            .set_interval_with_callback_and_timeout_and_arguments_0(cb.as_ref().unchecked_ref(), ms)
            .map_err(|e| anyhow::anyhow!("setInterval failed: {:?}", e))?
    };
    handle.set(Some(id));
    Ok(())
}
