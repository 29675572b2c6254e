use crate::animate::{self, Animated, AnimatedRef};
use crate::constants::{ATTR_CATEGORY, ATTR_FILTER, CLASS_ACTIVE, CLASS_HIDDEN, FILTER_BUTTONS, PROJECT_CARDS};
use crate::dom;
use crate::frame;
use portfolio_core::{
    CardTransition, Ease, Filter, ProjectFilter, Timing, TweenProps, FILTER_HIDDEN_SCALE,
    FILTER_HIDE_MS, FILTER_SHOW_MS,
};
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

struct FilterView {
    buttons: Vec<web::Element>,
    cards: Vec<(web::Element, AnimatedRef)>,
    state: RefCell<ProjectFilter>,
}

pub fn init(document: &web::Document) -> anyhow::Result<()> {
    let buttons = dom::query_all(document, FILTER_BUTTONS);
    if buttons.is_empty() {
        log::debug!("[filter] no filter controls; skipping");
        return Ok(());
    }
    let cards: Vec<(web::Element, AnimatedRef)> = dom::query_all(document, PROJECT_CARDS)
        .into_iter()
        .filter_map(|el| dom::html(&el).map(|h| (el, Animated::new(h))))
        .collect();
    let categories = cards
        .iter()
        .map(|(el, _)| el.get_attribute(ATTR_CATEGORY).unwrap_or_default());
    let active = buttons
        .iter()
        .position(|b| b.class_list().contains(CLASS_ACTIVE))
        .unwrap_or(0);
    let view = Rc::new(FilterView {
        state: RefCell::new(ProjectFilter::new(categories, buttons.len(), active)),
        buttons,
        cards,
    });

    for (i, button) in view.buttons.iter().enumerate() {
        let view = view.clone();
        dom::add_click_listener(button, move |_| select(&view, i));
    }
    log::info!("[filter] wired {} controls", view.buttons.len());
    Ok(())
}

fn select(view: &Rc<FilterView>, control: usize) {
    let key = view.buttons[control]
        .get_attribute(ATTR_FILTER)
        .unwrap_or_default();
    let filter = match Filter::parse(&key) {
        Ok(f) => f,
        Err(e) => {
            log::warn!("[filter] {e}");
            return;
        }
    };
    let transitions = view.state.borrow_mut().select(control, &filter);

    {
        let state = view.state.borrow();
        for (i, b) in view.buttons.iter().enumerate() {
            dom::set_class(b, CLASS_ACTIVE, state.is_control_active(i));
        }
        for (i, (_, anim)) in view.cards.iter().enumerate() {
            anim.borrow_mut().set_held(!state.is_free_to_animate(i));
        }
    }

    for (i, transition) in transitions {
        let (el, anim) = &view.cards[i];
        match transition {
            CardTransition::Show => {
                dom::set_class(el, CLASS_HIDDEN, false);
                animate::tween_to(
                    anim,
                    TweenProps::REST,
                    Timing::new(FILTER_SHOW_MS, Ease::Power2Out),
                    None,
                );
            }
            CardTransition::Hide { generation } => {
                let to = anim.borrow().props().with_fade(FILTER_HIDDEN_SCALE, 0.0);
                animate::tween_to(anim, to, Timing::new(FILTER_HIDE_MS, Ease::Power2In), None);
                // Timed separately so a superseded fade still ends hidden.
                let done_view = view.clone();
                let done = frame::set_timeout(FILTER_HIDE_MS as i32, move || {
                    if done_view.state.borrow_mut().finish_hide(i, generation) {
                        dom::set_class(&done_view.cards[i].0, CLASS_HIDDEN, true);
                    }
                });
                if let Err(e) = done {
                    log::error!("[filter] {:?}", e);
                }
            }
        }
    }
}
