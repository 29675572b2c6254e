// Host-side tests for the timed sequences: loader, typewriter, counters, confetti.

use portfolio_core::*;
use rand::rngs::StdRng;
use rand::SeedableRng;

#[test]
fn loader_is_monotonic_and_completes_once() {
    let mut rng = StdRng::seed_from_u64(3);
    let mut seq = LoadingSequencer::new();
    let mut last = 0.0_f32;
    let mut completions = 0;
    let mut ticks = 0;
    while let Some(tick) = seq.advance_random(&mut rng) {
        assert!(seq.progress() >= last);
        assert!(seq.progress() <= 100.0);
        last = seq.progress();
        if tick.complete {
            completions += 1;
            assert_eq!(tick.percent, 100);
            assert_eq!(seq.progress(), 100.0);
        }
        ticks += 1;
        assert!(ticks < 10_000);
    }
    assert_eq!(completions, 1);
    assert!(seq.advance(50.0).is_none());
}

#[test]
fn loader_clamps_overshoot_and_ignores_negative() {
    let mut seq = LoadingSequencer::new();
    assert_eq!(
        seq.advance(-5.0),
        Some(LoaderTick {
            percent: 0,
            complete: false
        })
    );
    assert_eq!(seq.advance(99.6).map(|t| t.percent), Some(99));
    let done = seq.advance(9.0).unwrap();
    assert!(done.complete);
    assert_eq!(done.percent, 100);
}

#[test]
fn typewriter_types_holds_deletes_and_advances() {
    let mut tw = Typewriter::new(["ab", "c"]).unwrap();
    let steps: Vec<(String, u32)> = (0..8)
        .map(|_| {
            let s = tw.tick();
            (s.text, s.delay_ms)
        })
        .collect();
    let expected = vec![
        ("a".to_string(), 100),
        ("ab".to_string(), 2000),
        ("a".to_string(), 50),
        ("".to_string(), 500),
        ("c".to_string(), 2000),
        ("".to_string(), 500),
        ("a".to_string(), 100),
        ("ab".to_string(), 2000),
    ];
    assert_eq!(steps, expected);
}

#[test]
fn typewriter_second_cycle_replays_first() {
    let phrases = ["Rust Developer", "Systems Engineer", "多语言"];
    let mut tw = Typewriter::new(phrases).unwrap();
    // one cycle = for each phrase, len ticks typing + len ticks deleting
    let cycle: usize = phrases.iter().map(|p| p.chars().count() * 2).sum();
    let first: Vec<TypeStep> = (0..cycle).map(|_| tw.tick()).collect();
    assert_eq!(tw.phrase_index(), 0);
    let second: Vec<TypeStep> = (0..cycle).map(|_| tw.tick()).collect();
    assert_eq!(first, second);
    // every phrase is fully deleted before the next begins
    let advances: Vec<&TypeStep> = first.iter().filter(|s| s.delay_ms == 500).collect();
    assert_eq!(advances.len(), phrases.len());
    assert!(advances.iter().all(|s| s.text.is_empty()));
}

#[test]
fn phrases_parse_from_attribute() {
    assert_eq!(
        parse_phrases(" 'Web Developer', \"Designer\" ,, Creator ").unwrap(),
        vec!["Web Developer", "Designer", "Creator"]
    );
    assert_eq!(parse_phrases(" , ''"), Err(ConfigError::EmptyPhraseList));
    assert!(Typewriter::new(Vec::<String>::new()).is_err());
}

#[test]
fn counter_ends_exactly_on_target_and_increases() {
    for target in [50_u64, 120, 999, 1_000_003] {
        let values: Vec<u64> = CounterAnimation::new(target).collect();
        assert_eq!(values.len(), COUNTER_STEPS as usize);
        assert_eq!(*values.last().unwrap(), target);
        assert!(
            values.windows(2).all(|w| w[0] < w[1]),
            "not strictly increasing for {target}"
        );
    }
    assert_eq!(CounterAnimation::new(120).step_interval_ms(), 40);
}

#[test]
fn small_counter_never_decreases() {
    let values: Vec<u64> = CounterAnimation::new(7).collect();
    assert!(values.windows(2).all(|w| w[0] <= w[1]));
    assert_eq!(values.last(), Some(&7));
    assert_eq!(CounterAnimation::new(0).last(), Some(0));
}

#[test]
fn stat_attributes_parse() {
    assert_eq!(parse_target("150"), Ok(150));
    assert_eq!(parse_target(" 42+ "), Ok(42));
    assert!(matches!(parse_target("many"), Err(ConfigError::InvalidTarget(_))));
    assert_eq!(parse_progress("85"), Ok(85.0));
    assert_eq!(parse_progress("92.5%"), Ok(92.5));
    assert_eq!(parse_progress("140"), Err(ConfigError::ProgressOutOfRange(140.0)));
    assert!(matches!(parse_progress("x"), Err(ConfigError::InvalidProgress(_))));
}

#[test]
fn confetti_burst_drains_in_finite_frames() {
    let mut rng = StdRng::seed_from_u64(11);
    let height = 900.0;
    let mut burst = ConfettiBurst::spawn(&mut rng, CONFETTI_COUNT, 1600.0, height);
    assert_eq!(burst.len(), 150);
    assert!(burst
        .pieces()
        .iter()
        .all(|p| p.position.y < 0.0 && CONFETTI_PALETTE.contains(&p.color)));

    let mut prev = burst.len();
    // slowest piece starts at -height and falls 2px per frame
    let bound = (2.0 * height / 2.0) as usize + 2;
    let mut frames = 0;
    loop {
        let ctl = burst.step();
        frames += 1;
        assert!(burst.len() <= prev);
        prev = burst.len();
        if ctl == LoopControl::Stop {
            break;
        }
        assert!(frames <= bound, "confetti did not drain");
    }
    assert!(burst.is_empty());
}

#[test]
fn confetti_piece_leaves_after_crossing_bottom() {
    let piece = ConfettiPiece {
        position: glam::Vec2::new(10.0, 95.0),
        size: 6.0,
        velocity: glam::Vec2::new(0.5, 3.0),
        color: CONFETTI_PALETTE[0],
        rotation_deg: 0.0,
        rotation_speed: 4.0,
    };
    let mut burst = ConfettiBurst::from_pieces(vec![piece], 100.0);
    assert_eq!(burst.step(), LoopControl::Continue);
    assert_eq!(burst.pieces()[0].rotation_deg, 4.0);
    assert_eq!(burst.step(), LoopControl::Stop);
}

#[test]
fn second_launch_joins_the_running_burst_and_drains_with_it() {
    let mut rng = StdRng::seed_from_u64(23);
    let height = 900.0;
    let mut burst = ConfettiBurst::spawn(&mut rng, CONFETTI_COUNT, 1600.0, height);
    // first batch partway down when the next one arrives
    for _ in 0..300 {
        burst.step();
    }
    let before = burst.len();
    let late = ConfettiBurst::spawn(&mut rng, CONFETTI_COUNT, 1600.0, height);
    burst.extend(late.pieces().iter().cloned());
    assert_eq!(burst.len(), before + CONFETTI_COUNT);

    let bound = (2.0 * height / 2.0) as usize + 2;
    let mut frames = 0;
    while burst.step() == LoopControl::Continue {
        frames += 1;
        assert!(frames <= bound, "merged confetti did not drain");
    }
    assert!(burst.is_empty());
}
