//! Session integration tests
//!
//! End-to-end runs of a fishing session through its public API:
//! - Timed games from first touch to the final result
//! - Catch window behaviour when the line comes up early
//! - Event queue draining and cancellation
//! - Invariants over randomized play on every built-in level

use std::cell::RefCell;
use std::rc::Rc;
use std::sync::Arc;

use icefish::core::GameError;
use icefish::feedback::HapticCue;
use icefish::game::{
    EventQueue, GameSession, HookState, SessionBuilder, SessionEvent, SessionPhase,
    SessionResult, SessionUpdate,
};
use icefish::levels::{get_all_levels, FishType, LevelConfig, Rgb, Size};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

fn create_test_rng() -> ChaCha8Rng {
    ChaCha8Rng::seed_from_u64(12345)
}

fn still_fish(points: u32) -> FishType {
    FishType {
        name: "Perch",
        color: Rgb(200, 160, 40),
        size: Size::new(30.0, 15.0),
        points,
        speed: 0.0,
    }
}

/// A level with no fish in the water at start, so tests can place their own.
fn empty_level(duration: u32, points: u32) -> Arc<LevelConfig> {
    let template = &get_all_levels()[0];
    Arc::new(LevelConfig {
        id: 7,
        name: "Test Pond",
        duration,
        fish_count: 0,
        fishes: vec![still_fish(points)],
        colors: template.colors,
    })
}

fn session_with(level: Arc<LevelConfig>) -> GameSession<ChaCha8Rng> {
    SessionBuilder::new()
        .level(level)
        .build_with_rng(create_test_rng())
        .unwrap()
}

fn run_for(session: &mut GameSession<ChaCha8Rng>, seconds: f64) -> u32 {
    let mut catches = 0;
    let steps = (seconds / 0.05).round() as usize;
    for _ in 0..steps {
        if session.tick(0.05).is_some() {
            catches += 1;
        }
    }
    catches
}

// ============================================================================
// Complete Session Tests
// ============================================================================

#[test]
fn test_sixty_second_game_with_one_catch() {
    let level = empty_level(60, 10);
    let results: Rc<RefCell<Vec<SessionResult>>> = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&results);

    let mut session = SessionBuilder::new()
        .level(level)
        .on_complete(move |result| sink.borrow_mut().push(*result))
        .build_with_rng(create_test_rng())
        .unwrap();

    // One fish sitting at the depth the hook reaches after about a second
    let (x, y) = session.scene().hook_rest();
    let one_second_depth = session.hook().max_depth() / 2.0;
    session.place_fish(still_fish(10), x, y + one_second_depth, 1);

    assert!(session.on_touch_down());
    let catches = run_for(&mut session, 1.0);
    assert_eq!(catches, 1);
    assert_eq!(session.hook().state(), HookState::Raising);

    for _ in 0..60 {
        session.on_second_elapsed();
    }

    assert_eq!(session.phase(), SessionPhase::Ended);
    let result = session.result().unwrap();
    assert_eq!(result.score, 10);
    assert_eq!(result.fish_caught, 1);
    assert_eq!(result.time_used, 60);
    assert_eq!(result.level_id, 7);
    assert_eq!(*results.borrow(), vec![result]);

    // Nothing more happens once the clock has run out
    assert!(session.on_second_elapsed().is_none());
    assert!(!session.on_touch_down());
    assert_eq!(results.borrow().len(), 1);
}

#[test]
fn test_early_touch_up_closes_catch_window() {
    let mut session = session_with(empty_level(60, 10));
    let (x, y) = session.scene().hook_rest();
    let max_depth = session.hook().max_depth();

    // Fish near the bottom: reachable by a full drop, not by a half one
    session.place_fish(still_fish(10), x, y + max_depth * 0.95, 1);

    session.on_touch_down();
    run_for(&mut session, 0.5);
    assert!(session.on_touch_up());
    let catches = run_for(&mut session, 3.0);

    assert_eq!(catches, 0);
    assert_eq!(session.fish_caught(), 0);
    assert_eq!(session.hook().state(), HookState::Idle);
    assert_eq!(session.hook().depth(), 0.0);
}

#[test]
fn test_result_before_end_is_invalid_state() {
    let session = session_with(empty_level(30, 10));
    match session.result() {
        Err(GameError::InvalidState { operation, phase }) => {
            assert_eq!(operation, "result");
            assert_eq!(phase, "active");
        }
        other => panic!("expected InvalidState, got {:?}", other),
    }
}

#[test]
fn test_builder_without_level_is_configuration_missing() {
    let err = SessionBuilder::new()
        .build_with_rng(create_test_rng())
        .unwrap_err();
    assert_eq!(err, GameError::ConfigurationMissing { level_id: None });
}

// ============================================================================
// Event Queue and Cancellation Tests
// ============================================================================

#[test]
fn test_queue_drives_session_to_end() {
    let mut session = session_with(empty_level(3, 10));
    let mut queue = EventQueue::new();

    queue.push(SessionEvent::TouchDown);
    for _ in 0..3 {
        queue.push(SessionEvent::Frame(0.016));
        queue.push(SessionEvent::SecondElapsed);
    }
    // Arrives after the end and must be dropped
    queue.push(SessionEvent::TouchUp);

    let updates = queue.dispatch(&mut session);
    assert_eq!(updates.first(), Some(&SessionUpdate::HookDropped));
    assert!(matches!(updates.last(), Some(SessionUpdate::Ended(r)) if r.time_used == 3));
    assert!(queue.is_empty());
    assert_eq!(session.phase(), SessionPhase::Ended);
}

#[test]
fn test_cancel_produces_no_result() {
    let called = Rc::new(RefCell::new(false));
    let flag = Rc::clone(&called);
    let mut session = SessionBuilder::new()
        .level(empty_level(10, 10))
        .on_complete(move |_| *flag.borrow_mut() = true)
        .build_with_rng(create_test_rng())
        .unwrap();

    session.on_second_elapsed();
    assert_eq!(
        session.handle(SessionEvent::Cancel),
        Some(SessionUpdate::Aborted)
    );
    assert_eq!(session.phase(), SessionPhase::Aborted);

    // The clock is stopped for good
    for _ in 0..20 {
        assert!(session.on_second_elapsed().is_none());
    }
    assert!(session.result().is_err());
    assert!(!*called.borrow());
}

#[test]
fn test_haptic_cues_over_a_game() {
    let cues: Rc<RefCell<Vec<HapticCue>>> = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&cues);
    let mut session = SessionBuilder::new()
        .level(empty_level(12, 10))
        .haptics(move |cue: HapticCue| sink.borrow_mut().push(cue))
        .build_with_rng(create_test_rng())
        .unwrap();

    session.on_touch_down();
    for _ in 0..12 {
        session.on_second_elapsed();
    }

    let cues = cues.borrow();
    assert_eq!(cues.first(), Some(&HapticCue::HookDropped));
    let warnings = cues.iter().filter(|c| **c == HapticCue::TimerWarning).count();
    assert_eq!(warnings, 10);
    assert_eq!(cues.last(), Some(&HapticCue::GameOver));
}

// ============================================================================
// Randomized Play Invariants
// ============================================================================

#[test]
fn test_random_play_invariants_on_every_level() {
    let mut rng = create_test_rng();

    for level in get_all_levels() {
        let level = Arc::new(level);
        let mut session = SessionBuilder::new()
            .level(Arc::clone(&level))
            .build_with_rng(ChaCha8Rng::seed_from_u64(level.id as u64 + 1))
            .unwrap();

        let mut total_points = 0;
        let mut catches = 0;
        let mut last_depth = 0.0;
        let mut frames = 0u32;

        while session.is_active() {
            if rng.gen_bool(0.05) {
                session.on_touch_down();
            }
            if rng.gen_bool(0.03) {
                session.on_touch_up();
            }

            let was_lowering = session.hook().is_lowering();
            let catch = session.tick(1.0 / 60.0);
            let hook = session.hook();
            assert!(hook.depth() >= 0.0 && hook.depth() <= hook.max_depth() + 1e-9);

            if let Some(catch) = catch {
                assert!(was_lowering, "catch outside the catch window");
                assert_eq!(hook.state(), HookState::Raising);
                total_points += catch.points;
                catches += 1;
                assert_eq!(catch.score_after, total_points);
            } else if was_lowering && hook.is_lowering() {
                assert!(hook.depth() >= last_depth - 1e-9);
            }
            last_depth = session.hook().depth();

            frames += 1;
            if frames % 60 == 0 {
                session.on_second_elapsed();
            }
        }

        let result = session.result().unwrap();
        assert_eq!(result.score, total_points);
        assert_eq!(result.fish_caught, catches);
        assert_eq!(result.time_used, level.duration);
        assert_eq!(result.level_id, level.id);
    }
}
