//! Scroll-position triggers and the declarative section reveal table.

use crate::constants::REVEAL_START_FRACTION;
use crate::easing::Ease;
use crate::tween::{stagger_delay, Timing, TweenProps};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TriggerEdge {
    /// Trigger top moved above the start line; play forward.
    Enter,
    /// Trigger top moved back below the start line; reverse.
    LeaveBack,
}

/// Edge detector for "top of trigger crosses `start_fraction` of the viewport".
#[derive(Clone, Copy, Debug)]
pub struct ScrollTrigger {
    start_fraction: f64,
    entered: bool,
}

impl Default for ScrollTrigger {
    fn default() -> Self {
        Self::new(REVEAL_START_FRACTION)
    }
}

impl ScrollTrigger {
    pub fn new(start_fraction: f64) -> Self {
        Self {
            start_fraction,
            entered: false,
        }
    }

    pub fn is_entered(&self) -> bool {
        self.entered
    }

    /// Feed the trigger's current top (viewport-relative px). Returns an edge
    /// only when the entered state flips.
    pub fn update(&mut self, trigger_top: f64, viewport_height: f64) -> Option<TriggerEdge> {
        let inside = trigger_top <= viewport_height * self.start_fraction;
        match (self.entered, inside) {
            (false, true) => {
                self.entered = true;
                Some(TriggerEdge::Enter)
            }
            (true, false) => {
                self.entered = false;
                Some(TriggerEdge::LeaveBack)
            }
            _ => None,
        }
    }
}

/// One "animate these targets in when that section scrolls into view" rule.
#[derive(Clone, Copy, Debug)]
pub struct RevealSpec {
    pub targets: &'static str,
    pub trigger: &'static str,
    pub from: TweenProps,
    pub duration_ms: f64,
    pub delay_ms: f64,
    pub stagger_ms: f64,
    pub ease: Ease,
}

impl RevealSpec {
    pub fn timing_for(&self, index: usize) -> Timing {
        Timing::new(self.duration_ms, self.ease)
            .delayed(stagger_delay(index, self.delay_ms, self.stagger_ms))
    }
}

pub const SECTION_REVEALS: &[RevealSpec] = &[
    RevealSpec {
        targets: ".about-text",
        trigger: ".about",
        from: TweenProps::offset(-100.0, 0.0),
        duration_ms: 1000.0,
        delay_ms: 0.0,
        stagger_ms: 0.0,
        ease: Ease::Power3Out,
    },
    RevealSpec {
        targets: ".about-image",
        trigger: ".about",
        from: TweenProps::offset(100.0, 0.0),
        duration_ms: 1000.0,
        delay_ms: 200.0,
        stagger_ms: 0.0,
        ease: Ease::Power3Out,
    },
    RevealSpec {
        targets: ".skill-category",
        trigger: ".skills",
        from: TweenProps::offset(0.0, 50.0),
        duration_ms: 800.0,
        delay_ms: 0.0,
        stagger_ms: 200.0,
        ease: Ease::Power3Out,
    },
    RevealSpec {
        targets: ".project-card",
        trigger: ".projects",
        from: TweenProps::offset(0.0, 50.0),
        duration_ms: 800.0,
        delay_ms: 0.0,
        stagger_ms: 150.0,
        ease: Ease::Power3Out,
    },
    RevealSpec {
        targets: ".timeline-item",
        trigger: ".experience",
        from: TweenProps::offset(0.0, 50.0),
        duration_ms: 800.0,
        delay_ms: 0.0,
        stagger_ms: 300.0,
        ease: Ease::Power3Out,
    },
];
