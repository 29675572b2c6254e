//! Drives `portfolio_core::Tween`s onto element styles, one frame loop per
//! running tween. Starting a new tween on an element cancels the old one.

use crate::dom;
use crate::frame;
use crate::style;
use portfolio_core::{CancelToken, LoopControl, Timing, Tween, TweenProps};
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

pub struct Animated {
    el: web::HtmlElement,
    props: TweenProps,
    running: Option<CancelToken>,
    // Set while the owning feature keeps the element out of view.
    held: bool,
}

pub type AnimatedRef = Rc<RefCell<Animated>>;

thread_local! {
    // One handle per element so every feature animating it shares the
    // overwrite rule.
    static REGISTRY: RefCell<Vec<(web::HtmlElement, AnimatedRef)>> = const { RefCell::new(Vec::new()) };
}

impl Animated {
    /// Shared handle for `el`, created at rest on first use.
    pub fn new(el: web::HtmlElement) -> AnimatedRef {
        REGISTRY.with(|reg| {
            let mut reg = reg.borrow_mut();
            if let Some((_, anim)) = reg.iter().find(|(known, _)| *known == el) {
                return anim.clone();
            }
            let anim = Rc::new(RefCell::new(Self {
                el: el.clone(),
                props: TweenProps::REST,
                running: None,
                held: false,
            }));
            reg.push((el, anim.clone()));
            anim
        })
    }

    pub fn props(&self) -> TweenProps {
        self.props
    }

    pub fn is_held(&self) -> bool {
        self.held
    }

    pub fn set_held(&mut self, held: bool) {
        self.held = held;
    }

    pub fn apply(&mut self, props: TweenProps) {
        self.props = props;
        dom::set_style(&self.el, "transform", &style::transform(&props));
        dom::set_style(&self.el, "opacity", &style::opacity(&props));
    }

    fn take_over(&mut self) -> CancelToken {
        if let Some(prev) = self.running.take() {
            prev.cancel();
        }
        let token = CancelToken::new();
        self.running = Some(token.clone());
        token
    }
}

/// Tween from the element's current props to `to`, then run `on_complete`.
pub fn tween_to(
    anim: &AnimatedRef,
    to: TweenProps,
    timing: Timing,
    on_complete: Option<Box<dyn FnOnce()>>,
) {
    let from = anim.borrow().props();
    let tween = Rc::new(RefCell::new(Tween::new(from, to, timing)));
    run(anim, tween, on_complete);
}

/// Drive a shared tween until it settles in whichever direction it is playing.
pub fn run(
    anim: &AnimatedRef,
    tween: Rc<RefCell<Tween>>,
    on_complete: Option<Box<dyn FnOnce()>>,
) {
    let token = anim.borrow_mut().take_over();
    let anim = anim.clone();
    let mut on_complete = on_complete;
    frame::start_loop(token, move |dt_ms| {
        let (props, settled) = {
            let mut t = tween.borrow_mut();
            let props = t.advance(dt_ms);
            (props, t.is_settled())
        };
        anim.borrow_mut().apply(props);
        if settled {
            anim.borrow_mut().running = None;
            if let Some(cb) = on_complete.take() {
                cb();
            }
        }
        LoopControl::continue_if(!settled)
    });
}
