use crate::constants::{ATTR_PROGRESS, ATTR_TARGET, SKILL_BARS, STAT_NUMBERS};
use crate::dom;
use crate::frame;
use crate::style;
use crate::visibility;
use portfolio_core::{
    parse_progress, parse_target, CancelToken, CounterAnimation, LoopControl, STATS_OBSERVER,
};
use web_sys as web;

pub fn init_counters(document: &web::Document) -> anyhow::Result<()> {
    let stats = dom::query_all(document, STAT_NUMBERS);
    if stats.is_empty() {
        return Ok(());
    }
    visibility::observe_once(stats, STATS_OBSERVER, |el| {
        let attr = el.get_attribute(ATTR_TARGET).unwrap_or_default();
        match parse_target(&attr) {
            Ok(target) => animate_counter(el.clone(), target),
            Err(e) => log::warn!("[stats] {e}"),
        }
    })
}

fn animate_counter(el: web::Element, target: u64) {
    let mut counter = CounterAnimation::new(target);
    let interval = counter.step_interval_ms() as i32;
    let mut shown = None;
    let started = frame::start_interval(interval, CancelToken::new(), move || match counter.next() {
        Some(value) => {
            if shown != Some(value) {
                el.set_text_content(Some(&value.to_string()));
                shown = Some(value);
            }
            LoopControl::continue_if(!counter.is_done())
        }
        None => LoopControl::Stop,
    });
    if let Err(e) = started {
        log::error!("[stats] {:?}", e);
    }
}

pub fn init_skill_bars(document: &web::Document) -> anyhow::Result<()> {
    let bars = dom::query_all(document, SKILL_BARS);
    if bars.is_empty() {
        return Ok(());
    }
    visibility::observe_once(bars, STATS_OBSERVER, |el| {
        let attr = el.get_attribute(ATTR_PROGRESS).unwrap_or_default();
        match (parse_progress(&attr), dom::html(el)) {
            (Ok(pct), Some(bar)) => dom::set_style(&bar, "width", &style::percent(pct)),
            (Err(e), _) => log::warn!("[skills] {e}"),
            _ => {}
        }
    })
}
