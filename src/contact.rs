use crate::confetti;
use crate::constants::{CONTACT_FORM_ID, SUBMIT_BUTTON};
use crate::dom;
use crate::frame;
use portfolio_core::{ContactForm, SubmitPhase, SUBMIT_LATENCY_MS, SUBMIT_RESET_MS};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

pub fn init(document: &web::Document) -> anyhow::Result<()> {
    let Some(form) = document
        .get_element_by_id(CONTACT_FORM_ID)
        .and_then(|el| el.dyn_into::<web::HtmlFormElement>().ok())
    else {
        log::debug!("[contact] form missing; skipping");
        return Ok(());
    };
    let state = Rc::new(RefCell::new(ContactForm::default()));

    let submit_form = form.clone();
    dom::on::<web::Event, _>(&form, "submit", move |ev| {
        // No network request is made; the latency is simulated.
        ev.prevent_default();
        if let Err(e) = state.borrow_mut().submit() {
            log::info!("[contact] ignoring submit: {e}");
            return;
        }
        let button = dom::query_all_in(&submit_form, SUBMIT_BUTTON).into_iter().next();
        render(button.as_ref(), SubmitPhase::Loading);

        let state = state.clone();
        let form = submit_form.clone();
        let resolved = frame::set_timeout(SUBMIT_LATENCY_MS, move || {
            if !state.borrow_mut().resolve() {
                return;
            }
            render(button.as_ref(), SubmitPhase::Success);
            if let Err(e) = confetti::launch() {
                log::error!("[confetti] {:?}", e);
            }
            let reset = frame::set_timeout(SUBMIT_RESET_MS, move || {
                form.reset();
                state.borrow_mut().reset();
                render(button.as_ref(), SubmitPhase::Idle);
            });
            if let Err(e) = reset {
                log::error!("[contact] {:?}", e);
            }
        });
        if let Err(e) = resolved {
            log::error!("[contact] {:?}", e);
        }
    });
    log::info!("[contact] wired");
    Ok(())
}

fn render(button: Option<&web::Element>, phase: SubmitPhase) {
    let Some(button) = button else { return };
    for p in [SubmitPhase::Loading, SubmitPhase::Success] {
        if let Some(class) = p.css_class() {
            dom::set_class(button, class, p == phase);
        }
    }
}
