use crate::constants::{ANCHOR_LINKS, CLASS_SCROLLED, MAIN_NAV_ID};
use crate::dom;
use portfolio_core::{anchor_target_id, is_scrolled};
use web_sys as web;

pub fn init(document: &web::Document) -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    match document.get_element_by_id(MAIN_NAV_ID) {
        Some(nav) => {
            let w = window.clone();
            let sync = move || {
                let y = w.scroll_y().unwrap_or(0.0);
                dom::set_class(&nav, CLASS_SCROLLED, is_scrolled(y));
            };
            // A restored scroll position is reflected before any scroll event.
            sync();
            dom::on::<web::Event, _>(&window, "scroll", move |_| sync());
        }
        None => log::debug!("[nav] #{MAIN_NAV_ID} missing; no scroll state"),
    }

    let anchors = dom::query_all(document, ANCHOR_LINKS);
    for anchor in &anchors {
        let doc = document.clone();
        let link = anchor.clone();
        dom::add_click_listener(anchor, move |ev| {
            ev.prevent_default();
            let href = link.get_attribute("href").unwrap_or_default();
            if let Some(target) = anchor_target_id(&href).and_then(|id| doc.get_element_by_id(id)) {
                let opts = web::ScrollIntoViewOptions::new();
                opts.set_behavior(web::ScrollBehavior::Smooth);
                opts.set_block(web::ScrollLogicalPosition::Start);
                target.scroll_into_view_with_scroll_into_view_options(&opts);
            }
        });
    }
    log::info!("[nav] wired {} anchors", anchors.len());
    Ok(())
}
