use crate::animate::{self, Animated};
use crate::constants::{CLASS_GROW, CURSOR_DOT, CURSOR_FOLLOWER, HOVER_TARGETS, MAGNETIC_BUTTONS};
use crate::dom;
use crate::frame;
use crate::style;
use glam::Vec2;
use portfolio_core::{
    magnetic_offset, CancelToken, CursorTracker, Ease, LoopControl, Timing, MAGNETIC_PULL_MS,
    MAGNETIC_RELEASE_MS,
};
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

pub fn init(document: &web::Document) -> anyhow::Result<()> {
    let (Some(dot), Some(follower)) = (
        dom::query_one(document, CURSOR_DOT).and_then(|e| dom::html(&e)),
        dom::query_one(document, CURSOR_FOLLOWER).and_then(|e| dom::html(&e)),
    ) else {
        log::debug!("[cursor] markers missing; skipping");
        return Ok(());
    };

    let tracker = Rc::new(RefCell::new(CursorTracker::default()));
    {
        let tracker = tracker.clone();
        dom::on::<web::MouseEvent, _>(document, "mousemove", move |ev| {
            tracker
                .borrow_mut()
                .set_pointer(ev.client_x() as f32, ev.client_y() as f32);
        });
    }

    // Perpetual; the token is never cancelled while the page lives.
    frame::start_loop(CancelToken::new(), move |_dt| {
        let f = tracker.borrow_mut().step();
        dom::set_style(&dot, "left", &style::px(f.dot.x));
        dom::set_style(&dot, "top", &style::px(f.dot.y));
        dom::set_style(&follower, "left", &style::px(f.follower.x));
        dom::set_style(&follower, "top", &style::px(f.follower.y));
        LoopControl::Continue
    });

    wire_hover_grow(document, &follower);
    wire_magnetic(document);
    log::info!("[cursor] wired");
    Ok(())
}

fn wire_hover_grow(document: &web::Document, follower: &web::HtmlElement) {
    for el in dom::query_all(document, HOVER_TARGETS) {
        let enter = follower.clone();
        dom::on::<web::MouseEvent, _>(&el, "mouseenter", move |_| {
            dom::set_class(&enter, CLASS_GROW, true);
        });
        let leave = follower.clone();
        dom::on::<web::MouseEvent, _>(&el, "mouseleave", move |_| {
            dom::set_class(&leave, CLASS_GROW, false);
        });
    }
}

fn wire_magnetic(document: &web::Document) {
    for el in dom::query_all(document, MAGNETIC_BUTTONS) {
        let Some(html) = dom::html(&el) else { continue };
        let anim = Animated::new(html);

        let pull = anim.clone();
        let rect_el = el.clone();
        dom::on::<web::MouseEvent, _>(&el, "mousemove", move |ev| {
            let rect = rect_el.get_bounding_client_rect();
            let center = Vec2::new(
                (rect.left() + rect.width() / 2.0) as f32,
                (rect.top() + rect.height() / 2.0) as f32,
            );
            let pointer = Vec2::new(ev.client_x() as f32, ev.client_y() as f32);
            if let Some(offset) = magnetic_offset(pointer, center) {
                let to = pull
                    .borrow()
                    .props()
                    .with_translate(offset.x as f64, offset.y as f64);
                animate::tween_to(
                    &pull,
                    to,
                    Timing::new(MAGNETIC_PULL_MS, Ease::Power2Out),
                    None,
                );
            }
        });

        let release = anim.clone();
        dom::on::<web::MouseEvent, _>(&el, "mouseleave", move |_| {
            let to = release.borrow().props().with_translate(0.0, 0.0);
            animate::tween_to(
                &release,
                to,
                Timing::new(
                    MAGNETIC_RELEASE_MS,
                    Ease::ElasticOut {
                        amplitude: 1.0,
                        period: 0.5,
                    },
                ),
                None,
            );
        });
    }
}
