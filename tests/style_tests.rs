// Host-side tests for CSS value formatting and the page hook vocabulary.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod style {
    include!("../src/style.rs");
}
mod constants {
    include!("../src/constants.rs");
}

use portfolio_core::TweenProps;
use style::*;

#[test]
fn transform_formats_translate_then_scale() {
    let p = TweenProps::REST.with_translate(-100.0, 12.5);
    assert_eq!(transform(&p), "translate(-100px, 12.5px) scale(1)");
}

#[test]
fn transform_rounds_to_thousandths_and_never_prints_negative_zero() {
    let p = TweenProps {
        x: -0.0001,
        y: 1.23456,
        scale: 0.8,
        opacity: 1.0,
    };
    assert_eq!(transform(&p), "translate(0px, 1.235px) scale(0.8)");
}

#[test]
fn opacity_is_clamped_into_unit_range() {
    let mut p = TweenProps::REST;
    p.opacity = 1.4;
    assert_eq!(opacity(&p), "1");
    p.opacity = -0.2;
    assert_eq!(opacity(&p), "0");
    assert_eq!(opacity(&TweenProps::offset(0.0, 50.0)), "0");
}

#[test]
fn unit_helpers() {
    assert_eq!(px(12.0), "12px");
    assert_eq!(px(3.5), "3.5px");
    assert_eq!(percent(85.0), "85%");
    assert_eq!(percent_label(100), "100%");
    assert_eq!(percent_label(0), "0%");
}

#[test]
fn rainbow_animation_names_the_injected_keyframes() {
    assert!(RAINBOW_KEYFRAMES.starts_with("@keyframes rainbow"));
    assert!(RAINBOW_ANIMATION.starts_with("rainbow "));
    assert!(RAINBOW_KEYFRAMES.contains("hue-rotate(360deg)"));
}

#[test]
fn hook_selectors_are_plain_css() {
    use constants::*;
    for sel in [
        LOADING_PERCENT,
        CURSOR_DOT,
        CURSOR_FOLLOWER,
        MAGNETIC_BUTTONS,
        TYPEWRITER,
        STAT_NUMBERS,
        SKILL_BARS,
        FILTER_BUTTONS,
        PROJECT_CARDS,
        NAV_LINKS,
        SUBMIT_BUTTON,
    ] {
        assert!(sel.starts_with('.'), "{sel} should be a class selector");
        assert!(!sel.contains(' '), "{sel} should be a single class");
    }
    assert_eq!(REVEAL_TARGETS.split(", ").count(), 6);
    assert!(HOVER_TARGETS.split(", ").any(|s| s == MAGNETIC_BUTTONS));
    for attr in [ATTR_WORDS, ATTR_TARGET, ATTR_PROGRESS, ATTR_FILTER, ATTR_CATEGORY] {
        assert!(attr.starts_with("data-"));
    }
}
