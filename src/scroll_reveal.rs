use crate::animate::{self, Animated, AnimatedRef};
use crate::dom;
use portfolio_core::{
    stagger_delay, RevealSpec, ScrollTrigger, TriggerEdge, Tween, TweenProps, SECTION_REVEALS,
};
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

struct SectionReveal {
    trigger_el: web::Element,
    trigger: ScrollTrigger,
    stagger_ms: f64,
    targets: Vec<(AnimatedRef, Rc<RefCell<Tween>>)>,
}

impl SectionReveal {
    fn build(document: &web::Document, spec: &RevealSpec) -> Option<Self> {
        let trigger_el = dom::query_one(document, spec.trigger)?;
        let targets: Vec<_> = dom::query_all(document, spec.targets)
            .iter()
            .filter_map(dom::html)
            .enumerate()
            .map(|(i, el)| {
                let anim = Animated::new(el);
                anim.borrow_mut().apply(spec.from);
                let tween = Tween::paused(spec.from, TweenProps::REST, spec.timing_for(i));
                (anim, Rc::new(RefCell::new(tween)))
            })
            .collect();
        if targets.is_empty() {
            return None;
        }
        Some(Self {
            trigger_el,
            trigger: ScrollTrigger::default(),
            stagger_ms: spec.stagger_ms,
            targets,
        })
    }

    fn check(&mut self, viewport_height: f64) {
        let top = self.trigger_el.get_bounding_client_rect().top();
        let Some(edge) = self.trigger.update(top, viewport_height) else {
            return;
        };
        let last = self.targets.len().saturating_sub(1);
        for (i, (anim, tween)) in self.targets.iter().enumerate() {
            // Cards parked by the project filter keep their state.
            if anim.borrow().is_held() {
                continue;
            }
            match edge {
                TriggerEdge::Enter => tween.borrow_mut().play(),
                // Staggered groups rewind last element first.
                TriggerEdge::LeaveBack => tween
                    .borrow_mut()
                    .reverse_after(stagger_delay(last - i, 0.0, self.stagger_ms)),
            }
            animate::run(anim, tween.clone(), None);
        }
    }
}

pub fn init(document: &web::Document) -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let sections: Vec<SectionReveal> = SECTION_REVEALS
        .iter()
        .filter_map(|spec| SectionReveal::build(document, spec))
        .collect();
    if sections.is_empty() {
        return Ok(());
    }
    log::info!("[reveal] {} section triggers", sections.len());
    let sections = Rc::new(RefCell::new(sections));
    let check_all = move || {
        let (_, vh) = dom::viewport_size();
        for s in sections.borrow_mut().iter_mut() {
            s.check(vh);
        }
    };
    check_all();
    let on_scroll = check_all.clone();
    dom::on::<web::Event, _>(&window, "scroll", move |_| on_scroll());
    dom::on::<web::Event, _>(&window, "resize", move |_| check_all());
    Ok(())
}
