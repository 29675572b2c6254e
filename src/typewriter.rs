use crate::constants::{ATTR_WORDS, TYPEWRITER};
use crate::dom;
use crate::frame;
use portfolio_core::{parse_phrases, Typewriter};
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

pub fn init(document: &web::Document) -> anyhow::Result<()> {
    let Some(el) = dom::query_one(document, TYPEWRITER) else {
        log::debug!("[typewriter] element missing; skipping");
        return Ok(());
    };
    let attr = el.get_attribute(ATTR_WORDS).unwrap_or_default();
    let phrases = match parse_phrases(&attr) {
        Ok(p) => p,
        Err(e) => {
            log::warn!("[typewriter] {e}; skipping");
            return Ok(());
        }
    };
    let writer = Rc::new(RefCell::new(Typewriter::new(phrases)?));
    log::info!("[typewriter] wired");
    tick(el, writer);
    Ok(())
}

// Each tick schedules the next with the delay the state machine asks for.
fn tick(el: web::Element, writer: Rc<RefCell<Typewriter>>) {
    let step = writer.borrow_mut().tick();
    el.set_text_content(Some(&step.text));
    let delay = step.delay_ms as i32;
    if let Err(e) = frame::set_timeout(delay, move || tick(el, writer)) {
        log::error!("[typewriter] {:?}", e);
    }
}
