use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
pub fn window_document() -> Option<web::Document> {
    web::window().and_then(|w| w.document())
}

/// All elements under `root` matching `selector`; empty on an invalid selector.
pub fn query_all(root: &web::Document, selector: &str) -> Vec<web::Element> {
    match root.query_selector_all(selector) {
        Ok(list) => collect_elements(&list),
        Err(e) => {
            log::warn!("bad selector {selector}: {:?}", e);
            Vec::new()
        }
    }
}

pub fn query_all_in(root: &web::Element, selector: &str) -> Vec<web::Element> {
    root.query_selector_all(selector)
        .map(|list| collect_elements(&list))
        .unwrap_or_default()
}

fn collect_elements(list: &web::NodeList) -> Vec<web::Element> {
    (0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|n| n.dyn_into::<web::Element>().ok())
        .collect()
}

#[inline]
pub fn query_one(document: &web::Document, selector: &str) -> Option<web::Element> {
    document.query_selector(selector).ok().flatten()
}

#[inline]
pub fn html(el: &web::Element) -> Option<web::HtmlElement> {
    el.dyn_ref::<web::HtmlElement>().cloned()
}

/// Attach `handler` for `event` on `target` for the lifetime of the page.
pub fn on<E, F>(target: &web::EventTarget, event: &str, mut handler: F)
where
    E: JsCast + 'static,
    F: FnMut(E) + 'static,
{
    let closure = Closure::wrap(Box::new(move |ev: web::Event| {
        if let Ok(ev) = ev.dyn_into::<E>() {
            handler(ev);
        }
    }) as Box<dyn FnMut(web::Event)>);
    if let Err(e) = target.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())
    {
        log::warn!("failed to listen for {event}: {:?}", e);
    }
    closure.forget();
}

#[inline]
pub fn add_click_listener(el: &web::Element, mut handler: impl FnMut(web::MouseEvent) + 'static) {
    on::<web::MouseEvent, _>(el, "click", move |ev| handler(ev));
}

#[inline]
pub fn set_class(el: &web::Element, class: &str, enabled: bool) {
    let cl = el.class_list();
    _ = if enabled { cl.add_1(class) } else { cl.remove_1(class) };
}

#[inline]
pub fn set_style(el: &web::HtmlElement, property: &str, value: &str) {
    _ = el.style().set_property(property, value);
}

#[inline]
pub fn viewport_size() -> (f64, f64) {
    web::window()
        .map(|w| {
            let width = w.inner_width().ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
            let height = w.inner_height().ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
            (width, height)
        })
        .unwrap_or((0.0, 0.0))
}

pub fn sync_canvas_backing_size(canvas: &web::HtmlCanvasElement) {
    if let Some(w) = web::window() {
        let dpr = w.device_pixel_ratio();
        let (width, height) = viewport_size();
        canvas.set_width(((width * dpr) as u32).max(1));
        canvas.set_height(((height * dpr) as u32).max(1));
    }
}
