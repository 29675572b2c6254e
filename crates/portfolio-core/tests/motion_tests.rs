// Host-side tests for smoothing, easing and tweens.

use glam::Vec2;
use portfolio_core::*;

#[test]
fn approach_strictly_closes_distance_without_overshoot() {
    for &factor in &[0.05_f32, 0.2, 0.5, 0.9] {
        let target = 300.0_f32;
        let mut pos = -120.0_f32;
        let mut prev_dist = (target - pos).abs();
        for _ in 0..40 {
            pos = approach(pos, target, factor);
            let dist = (target - pos).abs();
            assert!(pos <= target, "overshoot with factor {factor}");
            assert!(
                dist < prev_dist || dist == 0.0,
                "distance did not shrink with factor {factor}"
            );
            prev_dist = dist;
        }
    }
}

#[test]
fn dot_leads_follower() {
    let mut tracker = CursorTracker::default();
    tracker.set_pointer(200.0, 100.0);
    let frame = tracker.step();
    assert_eq!(frame.dot, Vec2::new(100.0, 50.0));
    assert_eq!(frame.follower, Vec2::new(40.0, 20.0));
    for _ in 0..10 {
        let f = tracker.step();
        let target = tracker.pointer();
        assert!(f.dot.distance(target) < f.follower.distance(target));
    }
}

#[test]
fn magnetic_pull_is_stronger_closer_and_zero_outside_radius() {
    let center = Vec2::new(500.0, 500.0);
    assert!(magnetic_offset(Vec2::new(700.0, 500.0), center).is_none());
    assert!(magnetic_offset(Vec2::new(600.0, 500.0), center).is_none());

    let near = magnetic_offset(Vec2::new(520.0, 500.0), center).unwrap();
    let far = magnetic_offset(Vec2::new(580.0, 500.0), center).unwrap();
    // 20px * 0.8 * 0.3
    assert!((near.x - 4.8).abs() < 1e-4);
    assert!((far.x - 80.0 * 0.2 * 0.3).abs() < 1e-4);
    // pull points toward the pointer
    let above = magnetic_offset(Vec2::new(500.0, 450.0), center).unwrap();
    assert!(above.y < 0.0 && above.x == 0.0);
}

#[test]
fn eases_hit_endpoints() {
    let eases = [
        Ease::Linear,
        Ease::Power2In,
        Ease::Power2Out,
        Ease::Power3Out,
        Ease::ElasticOut {
            amplitude: 1.0,
            period: 0.5,
        },
    ];
    for ease in eases {
        assert!(ease.apply(0.0).abs() < 1e-9, "{ease:?} at 0");
        assert!((ease.apply(1.0) - 1.0).abs() < 1e-9, "{ease:?} at 1");
    }
    assert!(Ease::Power2Out.apply(0.5) > 0.5);
    assert!(Ease::Power2In.apply(0.5) < 0.5);
}

#[test]
fn tween_respects_delay_then_reaches_target() {
    let timing = Timing::new(100.0, Ease::Linear).delayed(50.0);
    let mut t = Tween::new(TweenProps::offset(0.0, 50.0), TweenProps::REST, timing);
    let p = t.advance(50.0);
    assert_eq!(p, TweenProps::offset(0.0, 50.0));
    let p = t.advance(50.0);
    assert!((p.y - 25.0).abs() < 1e-9);
    assert!((p.opacity - 0.5).abs() < 1e-9);
    let p = t.advance(500.0);
    assert_eq!(p, TweenProps::REST);
    assert!(t.is_settled());
}

#[test]
fn paused_tween_renders_start_until_played() {
    let mut t = Tween::paused(
        TweenProps::offset(-100.0, 0.0),
        TweenProps::REST,
        Timing::new(1000.0, Ease::Power3Out),
    );
    assert_eq!(t.advance(5000.0), TweenProps::offset(-100.0, 0.0));
    t.play();
    t.advance(1000.0);
    assert_eq!(t.current(), TweenProps::REST);
}

#[test]
fn reverse_runs_back_from_current_playhead() {
    let mut t = Tween::new(
        TweenProps::offset(0.0, 50.0),
        TweenProps::REST,
        Timing::new(800.0, Ease::Linear).delayed(300.0),
    );
    t.advance(300.0 + 400.0);
    assert!((t.progress() - 0.5).abs() < 1e-9);
    t.reverse();
    // no delay when reversing
    t.advance(200.0);
    assert!((t.progress() - 0.25).abs() < 1e-9);
    t.advance(1000.0);
    assert_eq!(t.progress(), 0.0);
    assert!(t.is_settled());
    assert_eq!(t.current(), TweenProps::offset(0.0, 50.0));
}

#[test]
fn delayed_reverse_holds_then_rewinds() {
    let mut t = Tween::new(
        TweenProps::offset(0.0, 50.0),
        TweenProps::REST,
        Timing::new(800.0, Ease::Linear),
    );
    t.advance(800.0);
    assert!(t.is_settled());
    t.reverse_after(300.0);
    assert!(!t.is_settled());
    t.advance(300.0);
    assert_eq!(t.progress(), 1.0);
    t.advance(400.0);
    assert!((t.progress() - 0.5).abs() < 1e-9);
    t.advance(400.0);
    assert!(t.is_settled());
    assert_eq!(t.current(), TweenProps::offset(0.0, 50.0));
}

#[test]
fn leave_back_stagger_runs_last_element_first() {
    let spec = SECTION_REVEALS
        .iter()
        .find(|s| s.targets == ".skill-category")
        .unwrap();
    let n = 3;
    let mut group: Vec<Tween> = (0..n)
        .map(|i| Tween::new(spec.from, TweenProps::REST, spec.timing_for(i)))
        .collect();
    for t in &mut group {
        t.advance(10_000.0);
        assert!(t.is_settled());
    }
    for (i, t) in group.iter_mut().enumerate() {
        t.reverse_after(stagger_delay(n - 1 - i, 0.0, spec.stagger_ms));
    }
    for t in &mut group {
        t.advance(100.0);
    }
    // only the last element has started rewinding
    assert_eq!(group[0].progress(), 1.0);
    assert_eq!(group[1].progress(), 1.0);
    assert!(group[2].progress() < 1.0);
}

#[test]
fn stagger_offsets_each_element() {
    let spec = SECTION_REVEALS
        .iter()
        .find(|s| s.targets == ".timeline-item")
        .unwrap();
    let delays: Vec<f64> = (0..3).map(|i| spec.timing_for(i).delay_ms).collect();
    assert_eq!(delays, vec![0.0, 300.0, 600.0]);
    assert_eq!(stagger_delay(2, 200.0, 150.0), 500.0);
}

#[test]
fn scroll_trigger_toggles_on_crossing_start_line() {
    let mut trig = ScrollTrigger::default();
    let vh = 1000.0;
    assert_eq!(trig.update(1200.0, vh), None);
    assert_eq!(trig.update(801.0, vh), None);
    assert_eq!(trig.update(800.0, vh), Some(TriggerEdge::Enter));
    assert_eq!(trig.update(-400.0, vh), None);
    assert_eq!(trig.update(900.0, vh), Some(TriggerEdge::LeaveBack));
    assert_eq!(trig.update(950.0, vh), None);
    assert_eq!(trig.update(100.0, vh), Some(TriggerEdge::Enter));
}

#[test]
fn particle_tilt_follows_pointer_within_bounds() {
    use rand::SeedableRng;
    let mut rng = rand::rngs::StdRng::seed_from_u64(7);
    let mut field = ParticleField::new(PARTICLE_COUNT, PARTICLE_EXTENT, &mut rng);
    assert_eq!(field.positions().len(), 2000);
    assert!(field
        .positions()
        .iter()
        .all(|p| p.abs().max_element() <= PARTICLE_EXTENT * 0.5));

    field.set_pointer(Vec2::new(1.0, -1.0));
    let r = field.step();
    assert!((r.x + 0.1).abs() < 1e-6);
    assert!((r.y - (0.1 + PARTICLE_SPIN_PER_FRAME)).abs() < 1e-6);

    field.set_pointer(Vec2::new(5.0, 5.0));
    let r = field.step();
    assert!(r.x <= 0.1 + 1e-6);
}

#[test]
fn pointer_ndc_maps_corners() {
    let vp = Vec2::new(800.0, 600.0);
    assert_eq!(pointer_ndc(Vec2::new(0.0, 0.0), vp), Vec2::new(-1.0, 1.0));
    assert_eq!(pointer_ndc(Vec2::new(800.0, 600.0), vp), Vec2::new(1.0, -1.0));
    assert_eq!(pointer_ndc(Vec2::new(400.0, 300.0), vp), Vec2::ZERO);
}

#[test]
fn camera_tracks_viewport_aspect() {
    let mut cam = Camera::for_viewport(1600.0, 900.0);
    assert!((cam.aspect - 16.0 / 9.0).abs() < 1e-6);
    cam.resize(500.0, 1000.0);
    assert!((cam.aspect - 0.5).abs() < 1e-6);
    let vp = cam.view_projection();
    let clip = vp * glam::Vec4::new(0.0, 0.0, 0.0, 1.0);
    // origin projects to the centre of the screen
    assert!((clip.x / clip.w).abs() < 1e-6 && (clip.y / clip.w).abs() < 1e-6);
}
