use crate::constants::{CLASS_HIDDEN, CLASS_NO_SCROLL, LOADING_PERCENT, LOADING_SCREEN_ID};
use crate::dom;
use crate::frame;
use crate::style;
use portfolio_core::{CancelToken, LoadingSequencer, LoopControl, LOADER_HIDE_DELAY_MS, LOADER_TICK_MS};
use web_sys as web;

pub fn init(document: &web::Document) -> anyhow::Result<()> {
    let Some(screen) = document.get_element_by_id(LOADING_SCREEN_ID) else {
        log::debug!("[loader] overlay missing; skipping");
        return Ok(());
    };
    // Without a readout the overlay still counts up, hides and unlocks scrolling.
    let readout = dom::query_one(document, LOADING_PERCENT);
    let body = document.body();

    let mut seq = LoadingSequencer::new();
    let mut rng = rand::thread_rng();
    frame::start_interval(LOADER_TICK_MS, CancelToken::new(), move || {
        let Some(tick) = seq.advance_random(&mut rng) else {
            return LoopControl::Stop;
        };
        if let Some(readout) = &readout {
            readout.set_text_content(Some(&style::percent_label(tick.percent)));
        }
        if !tick.complete {
            return LoopControl::Continue;
        }
        let screen = screen.clone();
        let body = body.clone();
        let hide = frame::set_timeout(LOADER_HIDE_DELAY_MS, move || {
            dom::set_class(&screen, CLASS_HIDDEN, true);
            if let Some(body) = body {
                dom::set_class(&body, CLASS_NO_SCROLL, false);
            }
            log::info!("[loader] page revealed");
        });
        if let Err(e) = hide {
            log::error!("[loader] {:?}", e);
        }
        LoopControl::Stop
    })
}
