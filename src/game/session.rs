//! The fishing session: owns the hook, the fish and the clock, and turns
//! host input into score, catches and a final result.

use std::fmt;
use std::sync::Arc;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::catch::CatchDetector;
use super::fish::FishPool;
use super::hook::HookController;
use super::timer::SessionTimer;
use super::types::{
    CatchEvent, FishId, Scene, SessionEvent, SessionPhase, SessionResult, SessionUpdate, TimerTick,
};
use crate::core::constants::{MAX_FRAME_SECONDS, RESPAWN_DELAY_SECONDS};
use crate::core::GameError;
use crate::feedback::{HapticCue, HapticSink, NoHaptics};
use crate::levels::{FishType, LevelConfig};

/// Called once with the result when a session ends on the clock.
pub type CompletionCallback = Box<dyn FnMut(&SessionResult)>;

/// Collects what a session needs before it can start.
pub struct SessionBuilder {
    level: Option<Arc<LevelConfig>>,
    scene: Scene,
    respawn_delay: f64,
    haptics: Option<Box<dyn HapticSink>>,
    on_complete: Option<CompletionCallback>,
}

impl Default for SessionBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl SessionBuilder {
    pub fn new() -> Self {
        Self {
            level: None,
            scene: Scene::default(),
            respawn_delay: RESPAWN_DELAY_SECONDS,
            haptics: None,
            on_complete: None,
        }
    }

    pub fn level(mut self, level: Arc<LevelConfig>) -> Self {
        self.level = Some(level);
        self
    }

    pub fn scene(mut self, scene: Scene) -> Self {
        self.scene = scene;
        self
    }

    /// Seconds between a catch and the replacement fish appearing.
    pub fn respawn_delay(mut self, seconds: f64) -> Self {
        self.respawn_delay = seconds.max(0.0);
        self
    }

    pub fn haptics(mut self, sink: impl HapticSink + 'static) -> Self {
        self.haptics = Some(Box::new(sink));
        self
    }

    pub fn on_complete(mut self, callback: impl FnMut(&SessionResult) + 'static) -> Self {
        self.on_complete = Some(Box::new(callback));
        self
    }

    /// Start a session with an entropy-seeded RNG.
    pub fn build(self) -> Result<GameSession<StdRng>, GameError> {
        self.build_with_rng(StdRng::from_entropy())
    }

    /// Start a session drawing all randomness from `rng`.
    pub fn build_with_rng<R: Rng>(self, mut rng: R) -> Result<GameSession<R>, GameError> {
        let level = self
            .level
            .ok_or(GameError::ConfigurationMissing { level_id: None })?;

        let mut fish = FishPool::new(self.scene);
        fish.fill(&level, level.fish_count, &mut rng);

        log::info!(
            "session started: level {} ({}), {}s, {} fish",
            level.id,
            level.name,
            level.duration,
            fish.len()
        );

        Ok(GameSession {
            phase: SessionPhase::Active,
            score: 0,
            fish_caught: 0,
            timer: SessionTimer::new(level.duration),
            hook: HookController::new(self.scene.max_hook_depth()),
            detector: CatchDetector::default(),
            fish,
            scene: self.scene,
            respawn_delay: self.respawn_delay,
            result: None,
            haptics: self.haptics.unwrap_or_else(|| Box::new(NoHaptics)),
            on_complete: self.on_complete,
            level,
            rng,
        })
    }
}

/// One play of a level, from start to timer expiry or abort.
///
/// All operations are synchronous and single-threaded. Calls that make no
/// sense in the current phase (touching after the end, ticking an aborted
/// session) do nothing.
pub struct GameSession<R = StdRng> {
    level: Arc<LevelConfig>,
    scene: Scene,
    phase: SessionPhase,
    score: u32,
    fish_caught: u32,
    timer: SessionTimer,
    hook: HookController,
    detector: CatchDetector,
    fish: FishPool,
    respawn_delay: f64,
    result: Option<SessionResult>,
    haptics: Box<dyn HapticSink>,
    on_complete: Option<CompletionCallback>,
    rng: R,
}

impl GameSession<StdRng> {
    pub fn builder() -> SessionBuilder {
        SessionBuilder::new()
    }
}

impl<R> fmt::Debug for GameSession<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GameSession")
            .field("level", &self.level.id)
            .field("phase", &self.phase)
            .field("score", &self.score)
            .field("fish_caught", &self.fish_caught)
            .field("time_remaining", &self.timer.remaining())
            .field("hook", &self.hook.state())
            .finish()
    }
}

impl<R: Rng> GameSession<R> {
    pub fn level(&self) -> &LevelConfig {
        &self.level
    }

    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    pub fn phase(&self) -> SessionPhase {
        self.phase
    }

    pub fn is_active(&self) -> bool {
        self.phase == SessionPhase::Active
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn fish_caught(&self) -> u32 {
        self.fish_caught
    }

    pub fn time_remaining(&self) -> u32 {
        self.timer.remaining()
    }

    pub fn time_used(&self) -> u32 {
        self.timer.used()
    }

    pub fn is_time_warning(&self) -> bool {
        self.timer.is_warning()
    }

    pub fn hook(&self) -> &HookController {
        &self.hook
    }

    /// Current hook centre in scene coordinates.
    pub fn hook_position(&self) -> (f64, f64) {
        let (x, y) = self.scene.hook_rest();
        (x, y + self.hook.depth())
    }

    pub fn fish(&self) -> &FishPool {
        &self.fish
    }

    /// Put a fish of `kind` at an exact position. Only while active.
    #[doc(hidden)]
    pub fn place_fish(
        &mut self,
        kind: FishType,
        x: f64,
        y: f64,
        direction: i8,
    ) -> Option<FishId> {
        if !self.is_active() {
            return None;
        }
        Some(self.fish.spawn_at(kind, x, y, direction))
    }

    /// Drop the hook. Only from rest while the session is active.
    pub fn on_touch_down(&mut self) -> bool {
        if !self.is_active() || !self.hook.start_lowering() {
            return false;
        }
        self.haptics.play(HapticCue::HookDropped);
        true
    }

    /// Start reeling in. Only while the hook is going down.
    pub fn on_touch_up(&mut self) -> bool {
        self.is_active() && self.hook.start_raising()
    }

    /// Advance hook and fish by `dt` seconds and check for a catch.
    pub fn tick(&mut self, dt: f64) -> Option<CatchEvent> {
        if !self.is_active() {
            return None;
        }
        // NaN would poison every fish position for the rest of the game
        let dt = if dt.is_finite() {
            dt.clamp(0.0, MAX_FRAME_SECONDS)
        } else {
            0.0
        };

        self.hook.advance(dt);
        self.fish.advance(dt, &self.level, &mut self.rng);

        let hook_pos = self.hook_position();
        let fish_id = self.detector.detect(&self.hook, hook_pos, self.fish.live())?;
        let caught = self.fish.despawn_and_respawn(fish_id, self.respawn_delay)?;

        self.score += caught.kind.points;
        self.fish_caught += 1;
        self.hook.start_raising();
        self.haptics.play(HapticCue::FishCaught);

        log::debug!(
            "caught {} (+{}) at depth {:.0}, score {}",
            caught.kind.name,
            caught.kind.points,
            self.hook.depth(),
            self.score
        );

        Some(CatchEvent {
            fish_id,
            fish_name: caught.kind.name,
            points: caught.kind.points,
            x: caught.x,
            y: caught.y,
            score_after: self.score,
        })
    }

    /// Count down one second; ends the session when time runs out.
    pub fn on_second_elapsed(&mut self) -> Option<TimerTick> {
        if !self.is_active() {
            return None;
        }
        let tick = self.timer.tick()?;
        if tick.expired {
            self.finish();
        } else if tick.warning {
            self.haptics.play(HapticCue::TimerWarning);
        }
        Some(tick)
    }

    /// Leave the scene: stop the clock, drop pending respawns, no result.
    pub fn cancel(&mut self) -> bool {
        if !self.is_active() {
            return false;
        }
        self.timer.stop();
        self.fish.clear_pending();
        self.on_complete = None;
        self.phase = SessionPhase::Aborted;
        log::info!(
            "session aborted: level {} after {}s, score {}",
            self.level.id,
            self.timer.used(),
            self.score
        );
        true
    }

    /// The final record. Fails with `InvalidState` until the session has ended.
    pub fn result(&self) -> Result<SessionResult, GameError> {
        match (self.phase, self.result) {
            (SessionPhase::Ended, Some(result)) => Ok(result),
            (phase, _) => Err(GameError::InvalidState {
                operation: "result",
                phase: phase.name(),
            }),
        }
    }

    /// Apply one queued host event.
    pub fn handle(&mut self, event: SessionEvent) -> Option<SessionUpdate> {
        match event {
            SessionEvent::TouchDown => self.on_touch_down().then_some(SessionUpdate::HookDropped),
            SessionEvent::TouchUp => self.on_touch_up().then_some(SessionUpdate::HookRaised),
            SessionEvent::Frame(dt) => self.tick(dt).map(SessionUpdate::Caught),
            SessionEvent::SecondElapsed => {
                let tick = self.on_second_elapsed()?;
                if tick.expired {
                    self.result.map(SessionUpdate::Ended)
                } else {
                    Some(SessionUpdate::Countdown(tick))
                }
            }
            SessionEvent::Cancel => self.cancel().then_some(SessionUpdate::Aborted),
        }
    }

    fn finish(&mut self) {
        let result = SessionResult {
            score: self.score,
            fish_caught: self.fish_caught,
            level_id: self.level.id,
            time_used: self.timer.used(),
        };
        self.phase = SessionPhase::Ended;
        self.result = Some(result);
        self.haptics.play(HapticCue::GameOver);

        log::info!(
            "session ended: level {}, score {}, {} fish in {}s",
            result.level_id,
            result.score,
            result.fish_caught,
            result.time_used
        );

        if let Some(mut callback) = self.on_complete.take() {
            callback(&result);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::types::HookState;
    use crate::levels::{LevelColors, Rgb, Size};
    use rand_chacha::ChaCha8Rng;
    use std::cell::RefCell;
    use std::rc::Rc;

    const DT: f64 = 1.0 / 60.0;

    fn still_fish(points: u32) -> FishType {
        FishType {
            name: "Perch",
            color: Rgb(230, 128, 51),
            size: Size::new(40.0, 20.0),
            points,
            speed: 0.0,
        }
    }

    fn test_level(duration: u32) -> Arc<LevelConfig> {
        Arc::new(LevelConfig {
            id: 0,
            name: "Test Pond",
            duration,
            fish_count: 0,
            fishes: vec![still_fish(10)],
            colors: LevelColors {
                sky_top: Rgb(0, 0, 0),
                sky_bottom: Rgb(0, 0, 0),
                water_top: Rgb(0, 0, 0),
                water_bottom: Rgb(0, 0, 0),
                ice: Rgb(255, 255, 255),
            },
        })
    }

    fn session(duration: u32) -> GameSession<ChaCha8Rng> {
        SessionBuilder::new()
            .level(test_level(duration))
            .build_with_rng(ChaCha8Rng::seed_from_u64(42))
            .unwrap()
    }

    /// Put a motionless fish right under the hole at `y`.
    fn place_fish(session: &mut GameSession<ChaCha8Rng>, points: u32, y: f64) {
        let x = session.hook_position().0;
        session.place_fish(still_fish(points), x, y, 1);
    }

    #[test]
    fn test_builder_requires_level() {
        let err = SessionBuilder::new().build().unwrap_err();
        assert_eq!(err, GameError::ConfigurationMissing { level_id: None });
    }

    #[test]
    fn test_builder_fills_fish_pool() {
        let mut level = (*test_level(60)).clone();
        level.fish_count = 6;
        let session = SessionBuilder::new()
            .level(Arc::new(level))
            .build_with_rng(ChaCha8Rng::seed_from_u64(1))
            .unwrap();
        assert_eq!(session.fish().len(), 6);
        assert_eq!(session.time_remaining(), 60);
        assert_eq!(session.phase(), SessionPhase::Active);
    }

    #[test]
    fn test_touch_down_only_from_idle() {
        let mut s = session(60);
        assert!(s.on_touch_down());
        assert_eq!(s.hook().state(), HookState::Lowering);
        assert!(!s.on_touch_down());

        assert!(s.on_touch_up());
        assert_eq!(s.hook().state(), HookState::Raising);
        assert!(!s.on_touch_down());
        assert!(!s.on_touch_up());
    }

    #[test]
    fn test_catch_scores_and_forces_raise() {
        let mut s = session(60);
        place_fish(&mut s, 10, 650.0);
        s.on_touch_down();

        let mut caught = None;
        for _ in 0..60 {
            if let Some(event) = s.tick(DT) {
                caught = Some(event);
                break;
            }
        }

        let event = caught.expect("fish under the hole should be caught within a second");
        assert_eq!(event.points, 10);
        assert_eq!(event.score_after, 10);
        assert_eq!(s.score(), 10);
        assert_eq!(s.fish_caught(), 1);
        assert_eq!(s.hook().state(), HookState::Raising);
        assert!(s.fish().get(event.fish_id).is_none());
        assert_eq!(s.fish().pending().len(), 1);
    }

    #[test]
    fn test_no_catch_while_raising() {
        let mut s = session(60);
        s.on_touch_down();
        s.tick(0.5);
        s.on_touch_up();
        let (x, y) = s.hook_position();
        s.place_fish(still_fish(10), x, y, 1);
        for _ in 0..30 {
            assert!(s.tick(DT).is_none());
        }
        assert_eq!(s.fish_caught(), 0);
    }

    #[test]
    fn test_early_touch_up_closes_catch_window() {
        let mut s = session(60);
        // Deep fish: only reachable well past half depth
        place_fish(&mut s, 10, 800.0);
        s.on_touch_down();
        for _ in 0..30 {
            assert!(s.tick(DT).is_none());
        }
        s.on_touch_up();
        for _ in 0..120 {
            assert!(s.tick(DT).is_none());
        }
        assert_eq!(s.score(), 0);
        assert_eq!(s.hook().state(), HookState::Idle);
    }

    #[test]
    fn test_timer_runs_to_end() {
        let mut s = session(60);
        for i in 0..60 {
            assert!(s.is_active(), "ended early at second {}", i);
            s.on_second_elapsed();
        }
        assert_eq!(s.phase(), SessionPhase::Ended);
        assert_eq!(s.time_used(), 60);
        assert_eq!(s.time_remaining(), 0);
        assert!(s.on_second_elapsed().is_none());
        assert_eq!(s.time_used(), 60);
    }

    #[test]
    fn test_result_before_end_is_invalid_state() {
        let mut s = session(5);
        assert!(matches!(
            s.result(),
            Err(GameError::InvalidState { operation: "result", phase: "active" })
        ));
        s.cancel();
        assert!(matches!(
            s.result(),
            Err(GameError::InvalidState { phase: "aborted", .. })
        ));
    }

    #[test]
    fn test_full_scenario() {
        let mut s = session(60);
        place_fish(&mut s, 10, 650.0);
        s.on_touch_down();
        for _ in 0..60 {
            s.tick(DT);
        }
        for _ in 0..60 {
            s.on_second_elapsed();
        }
        let result = s.result().unwrap();
        assert_eq!(
            result,
            SessionResult {
                score: 10,
                fish_caught: 1,
                level_id: 0,
                time_used: 60
            }
        );
    }

    #[test]
    fn test_completion_callback_fires_once() {
        let results = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&results);
        let mut s = SessionBuilder::new()
            .level(test_level(3))
            .on_complete(move |r: &SessionResult| sink.borrow_mut().push(*r))
            .build_with_rng(ChaCha8Rng::seed_from_u64(3))
            .unwrap();

        for _ in 0..10 {
            s.on_second_elapsed();
        }
        assert_eq!(results.borrow().len(), 1);
        assert_eq!(results.borrow()[0].time_used, 3);
    }

    #[test]
    fn test_haptic_cues() {
        let cues = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&cues);
        let mut s = SessionBuilder::new()
            .level(test_level(12))
            .haptics(move |cue: HapticCue| sink.borrow_mut().push(cue))
            .build_with_rng(ChaCha8Rng::seed_from_u64(3))
            .unwrap();
        place_fish(&mut s, 10, 650.0);

        s.on_touch_down();
        while s.tick(DT).is_none() {}
        for _ in 0..12 {
            s.on_second_elapsed();
        }

        let cues = cues.borrow();
        assert_eq!(cues[0], HapticCue::HookDropped);
        assert_eq!(cues[1], HapticCue::FishCaught);
        let warnings = cues.iter().filter(|c| **c == HapticCue::TimerWarning).count();
        // Seconds 10 down to 1 warn; 0 is game over
        assert_eq!(warnings, 10);
        assert_eq!(*cues.last().unwrap(), HapticCue::GameOver);
    }

    #[test]
    fn test_cancel_stops_everything() {
        let results = Rc::new(RefCell::new(0));
        let sink = Rc::clone(&results);
        let mut s = SessionBuilder::new()
            .level(test_level(60))
            .on_complete(move |_: &SessionResult| *sink.borrow_mut() += 1)
            .build_with_rng(ChaCha8Rng::seed_from_u64(3))
            .unwrap();

        s.on_second_elapsed();
        assert!(s.cancel());
        assert!(!s.cancel());
        assert_eq!(s.phase(), SessionPhase::Aborted);
        assert!(s.on_second_elapsed().is_none());
        assert!(!s.on_touch_down());
        assert!(s.tick(DT).is_none());
        assert_eq!(s.time_used(), 1);
        assert_eq!(*results.borrow(), 0);
    }

    #[test]
    fn test_inputs_ignored_after_end() {
        let mut s = session(1);
        s.on_second_elapsed();
        assert_eq!(s.phase(), SessionPhase::Ended);
        assert!(!s.on_touch_down());
        assert!(s.tick(DT).is_none());
        assert_eq!(s.hook().state(), HookState::Idle);
    }

    #[test]
    fn test_handle_maps_events() {
        let mut s = session(2);
        assert_eq!(
            s.handle(SessionEvent::TouchDown),
            Some(SessionUpdate::HookDropped)
        );
        assert_eq!(s.handle(SessionEvent::TouchDown), None);
        assert_eq!(s.handle(SessionEvent::TouchUp), Some(SessionUpdate::HookRaised));
        assert!(matches!(
            s.handle(SessionEvent::SecondElapsed),
            Some(SessionUpdate::Countdown(TimerTick { remaining: 1, .. }))
        ));
        assert_eq!(
            s.handle(SessionEvent::SecondElapsed),
            Some(SessionUpdate::Ended(SessionResult {
                score: 0,
                fish_caught: 0,
                level_id: 0,
                time_used: 2
            }))
        );
        assert_eq!(s.handle(SessionEvent::Cancel), None);
    }

    #[test]
    fn test_large_frames_are_clamped() {
        let mut s = session(60);
        s.on_touch_down();
        s.tick(5.0);
        let expected = s.hook().max_depth() * MAX_FRAME_SECONDS / 2.0;
        assert!((s.hook().depth() - expected).abs() < 1e-9);
    }

    #[test]
    fn test_non_finite_frame_keeps_fish_catchable() {
        let mut s = session(60);
        place_fish(&mut s, 10, 650.0);
        s.on_touch_down();
        assert!(s.tick(f64::NAN).is_none());
        assert!(s.tick(f64::INFINITY).is_none());
        assert!(s.fish().live().iter().all(|f| f.x.is_finite()));

        let caught = (0..600).filter_map(|_| s.tick(DT)).count();
        assert_eq!(caught, 1);
    }

    #[test]
    fn test_respawn_waits_for_configured_delay() {
        let mut s = SessionBuilder::new()
            .level(test_level(60))
            .respawn_delay(1.0)
            .build_with_rng(ChaCha8Rng::seed_from_u64(9))
            .unwrap();
        place_fish(&mut s, 10, 650.0);
        s.on_touch_down();
        while s.tick(DT).is_none() {}
        assert!(s.fish().is_empty());

        for _ in 0..5 {
            s.tick(0.1);
        }
        assert!(s.fish().is_empty());
        assert_eq!(s.fish().pending().len(), 1);

        for _ in 0..6 {
            s.tick(0.1);
        }
        assert_eq!(s.fish().len(), 1);
        assert!(s.fish().pending().is_empty());
    }

    #[test]
    fn test_custom_scene_moves_hook() {
        let scene = Scene::new(400.0, 500.0);
        let mut s = SessionBuilder::new()
            .level(test_level(60))
            .scene(scene)
            .build_with_rng(ChaCha8Rng::seed_from_u64(9))
            .unwrap();

        assert_eq!(s.scene(), &scene);
        assert_eq!(s.hook_position(), scene.hook_rest());
        assert_eq!(s.hook().max_depth(), scene.max_hook_depth());

        s.on_touch_down();
        for _ in 0..240 {
            s.tick(DT);
        }
        let (x, y) = s.hook_position();
        assert_eq!(x, 200.0);
        assert!((y - (scene.hook_rest().1 + scene.max_hook_depth())).abs() < 1e-9);
    }

    #[test]
    fn test_place_fish_only_while_active() {
        let mut s = session(1);
        assert!(s.place_fish(still_fish(10), 10.0, 600.0, 1).is_some());
        s.on_second_elapsed();
        assert!(s.place_fish(still_fish(10), 10.0, 600.0, 1).is_none());
        assert_eq!(s.fish().len(), 1);
    }
}
