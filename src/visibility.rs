use portfolio_core::{ObserverOptions, OnceRegistry};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys as web;

/// Observe `elements` and call `on_visible` the first time each one crosses
/// the threshold; the element is unobserved right after.
pub fn observe_once(
    elements: Vec<web::Element>,
    options: ObserverOptions,
    mut on_visible: impl FnMut(&web::Element) + 'static,
) -> anyhow::Result<()> {
    let registry = Rc::new(RefCell::new(OnceRegistry::new()));
    for el in &elements {
        registry.borrow_mut().watch(el.clone());
    }

    let reg = registry.clone();
    let callback = Closure::wrap(Box::new(
        move |entries: js_sys::Array, observer: web::IntersectionObserver| {
            for entry in entries.iter() {
                let Ok(entry) = entry.dyn_into::<web::IntersectionObserverEntry>() else {
                    continue;
                };
                let target = entry.target();
                if reg.borrow_mut().trigger(&target, entry.is_intersecting()) {
                    observer.unobserve(&target);
                    on_visible(&target);
                }
            }
        },
    )
        as Box<dyn FnMut(js_sys::Array, web::IntersectionObserver)>);

    let init = web::IntersectionObserverInit::new();
    init.set_threshold(&JsValue::from_f64(options.threshold));
    init.set_root_margin(options.root_margin);
    let observer =
        web::IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init)
            .map_err(|e| anyhow::anyhow!("IntersectionObserver: {:?}", e))?;
    callback.forget();

    for el in &elements {
        observer.observe(el);
    }
    log::debug!("[visibility] watching {} elements", registry.borrow().len());
    Ok(())
}
