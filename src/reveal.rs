use crate::constants::{CLASS_ANIMATE, REVEAL_TARGETS};
use crate::dom;
use crate::visibility;
use portfolio_core::REVEAL_OBSERVER;
use web_sys as web;

pub fn init(document: &web::Document) -> anyhow::Result<()> {
    let targets = dom::query_all(document, REVEAL_TARGETS);
    if targets.is_empty() {
        return Ok(());
    }
    visibility::observe_once(targets, REVEAL_OBSERVER, |el| {
        dom::set_class(el, CLASS_ANIMATE, true);
    })
}
