// Host-side tests for click/key/scroll driven state.

use portfolio_core::*;

fn cards() -> ProjectFilter {
    ProjectFilter::new(["web", "mobile", "web", "design"], 4, 0)
}

#[test]
fn filter_shows_matching_and_defers_hiding() {
    let mut pf = cards();
    let web = Filter::parse("web").unwrap();
    let transitions = pf.select(1, &web);
    assert_eq!(pf.active_control(), 1);
    assert_eq!(transitions[0].1, CardTransition::Show);
    assert_eq!(transitions[2].1, CardTransition::Show);

    // not hidden until the exit transition completes
    assert_eq!(pf.visibility(1), Some(CardVisibility::Hiding));
    assert!(!pf.visibility(1).unwrap().is_hidden());
    for (i, t) in &transitions {
        if let CardTransition::Hide { generation } = t {
            assert!(pf.finish_hide(*i, *generation));
        }
    }
    assert_eq!(pf.visible_cards(), vec![0, 2]);
    assert_eq!(pf.visibility(3), Some(CardVisibility::Hidden));
}

#[test]
fn only_shown_cards_are_free_for_other_animations() {
    let mut pf = cards();
    let transitions = pf.select(2, &Filter::Category("mobile".into()));
    assert!(pf.is_free_to_animate(1));
    // leaving cards stay parked through the fade and after it
    assert!(!pf.is_free_to_animate(0));
    for (i, t) in &transitions {
        if let CardTransition::Hide { generation } = t {
            assert!(pf.finish_hide(*i, *generation));
        }
    }
    assert!(!pf.is_free_to_animate(0));
    assert_eq!(pf.visibility(0), Some(CardVisibility::Hidden));
    pf.select(0, &Filter::All);
    assert!(pf.is_free_to_animate(0));
    assert!(!pf.is_free_to_animate(99));
}

#[test]
fn filter_all_shows_everything() {
    let mut pf = cards();
    pf.select(2, &Filter::Category("design".into()));
    let transitions = pf.select(0, &Filter::parse("all").unwrap());
    assert!(transitions.iter().all(|(_, t)| *t == CardTransition::Show));
    assert_eq!(pf.visible_cards(), vec![0, 1, 2, 3]);
    assert!(pf.is_control_active(0));
    assert!(!pf.is_control_active(2));
}

#[test]
fn stale_hide_completion_is_ignored() {
    let mut pf = cards();
    let hide = pf.select(1, &Filter::Category("mobile".into()));
    let stale = match hide[0].1 {
        CardTransition::Hide { generation } => generation,
        CardTransition::Show => panic!("card 0 should hide"),
    };
    // re-shown before the fade finished
    pf.select(0, &Filter::All);
    assert!(!pf.finish_hide(0, stale));
    assert_eq!(pf.visibility(0), Some(CardVisibility::Visible));
}

#[test]
fn filter_key_parsing() {
    assert_eq!(Filter::parse(" all "), Ok(Filter::All));
    assert_eq!(Filter::parse(""), Err(ConfigError::EmptyCategory));
    assert!(Filter::parse("web").unwrap().matches("web"));
    assert!(!Filter::parse("web").unwrap().matches("mobile"));
}

#[test]
fn menu_toggles_and_link_closes() {
    let mut m = MenuState::default();
    assert!(m.toggle());
    assert!(m.is_open());
    assert!(m.close());
    assert!(!m.close());
    assert!(m.toggle());
    assert!(!m.toggle());
}

#[test]
fn contact_form_cycles_and_rejects_overlap() {
    let mut form = ContactForm::default();
    assert_eq!(form.phase().css_class(), None);
    form.submit().unwrap();
    assert_eq!(form.phase().css_class(), Some("loading"));
    assert_eq!(form.submit(), Err(SubmitError::Pending));
    assert!(form.resolve());
    assert!(!form.resolve());
    assert_eq!(form.phase(), SubmitPhase::Success);
    assert_eq!(form.submit(), Err(SubmitError::Pending));
    form.reset();
    assert!(form.submit().is_ok());
}

#[test]
fn nav_threshold_and_anchor_targets() {
    assert!(!is_scrolled(0.0));
    assert!(!is_scrolled(100.0));
    assert!(is_scrolled(100.5));
    assert_eq!(anchor_target_id("#projects"), Some("projects"));
    assert_eq!(anchor_target_id("#"), None);
    assert_eq!(anchor_target_id("https://example.com"), None);
}

#[test]
fn restored_scroll_offset_reads_as_scrolled_without_a_scroll_event() {
    // the initial sync uses the same predicate as the scroll handler
    for restored in [0.0, 40.0, 101.0, 2400.0] {
        assert_eq!(is_scrolled(restored), restored > NAV_SCROLL_THRESHOLD_PX);
    }
}

const KONAMI: [&str; 10] = KONAMI_SEQUENCE;

#[test]
fn easter_egg_fires_once_per_sequence() {
    let mut seq = KeySequence::default();
    let mut fired = 0;
    for round in 0..3 {
        for (i, k) in KONAMI.iter().enumerate() {
            let done = seq.feed(k);
            assert_eq!(done, i == KONAMI.len() - 1, "round {round} key {i}");
            fired += done as u32;
        }
        assert_eq!(seq.progress(), 0);
    }
    assert_eq!(fired, 3);
}

#[test]
fn easter_egg_wrong_key_resets() {
    let mut seq = KeySequence::default();
    for k in &KONAMI[..6] {
        seq.feed(k);
    }
    assert_eq!(seq.progress(), 6);
    assert!(!seq.feed("x"));
    assert_eq!(seq.progress(), 0);
    // a repeated first key is still a mismatch at position 2
    seq.feed("ArrowUp");
    seq.feed("ArrowUp");
    seq.feed("ArrowUp");
    assert_eq!(seq.progress(), 0);
}

#[test]
fn visibility_fires_at_most_once_per_element() {
    let mut reg = OnceRegistry::new();
    reg.watch("a");
    reg.watch("b");
    reg.watch("a");
    assert_eq!(reg.len(), 2);
    assert!(!reg.trigger(&"a", false));
    assert!(reg.trigger(&"a", true));
    assert!(!reg.trigger(&"a", true));
    assert!(!reg.trigger(&"zzz", true));
    assert_eq!(reg.pending(), 1);
    assert!(reg.trigger(&"b", true));
    assert_eq!(reg.pending(), 0);
}

#[test]
fn cancel_token_is_shared_between_clones() {
    let token = CancelToken::new();
    let seen = token.clone();
    assert!(!seen.is_cancelled());
    token.cancel();
    assert!(seen.is_cancelled());
    assert_eq!(LoopControl::continue_if(false), LoopControl::Stop);
}
