//! Data types shared by the fishing scene components.

use serde::{Deserialize, Serialize};

use crate::core::constants::{
    FISH_BAND_BOTTOM_FRACTION, FISH_BAND_TOP_FRACTION, FISH_OFFSCREEN_MARGIN,
    HOOK_REST_FRACTION, MAX_DEPTH_FRACTION, SCENE_HEIGHT, SCENE_WIDTH,
};

/// Scene dimensions. Coordinates are top-down: y = 0 is the top of the sky,
/// y = height is the lake bottom.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Scene {
    pub width: f64,
    pub height: f64,
}

impl Default for Scene {
    fn default() -> Self {
        Self {
            width: SCENE_WIDTH,
            height: SCENE_HEIGHT,
        }
    }
}

impl Scene {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Where the hook hangs when fully raised (the ice hole).
    pub fn hook_rest(&self) -> (f64, f64) {
        (self.width / 2.0, self.height * HOOK_REST_FRACTION)
    }

    pub fn max_hook_depth(&self) -> f64 {
        self.height * MAX_DEPTH_FRACTION
    }

    /// Vertical band fish swim in, as (top, bottom).
    pub fn fish_band(&self) -> (f64, f64) {
        (
            self.height * FISH_BAND_TOP_FRACTION,
            self.height * FISH_BAND_BOTTOM_FRACTION,
        )
    }

    /// X a fish enters from when swimming in `direction`.
    pub fn entry_x(&self, direction: i8) -> f64 {
        if direction > 0 {
            -FISH_OFFSCREEN_MARGIN
        } else {
            self.width + FISH_OFFSCREEN_MARGIN
        }
    }

    /// True once a fish at `x` swimming in `direction` has left the far edge.
    pub fn past_far_edge(&self, x: f64, direction: i8) -> bool {
        if direction > 0 {
            x >= self.width + FISH_OFFSCREEN_MARGIN
        } else {
            x <= -FISH_OFFSCREEN_MARGIN
        }
    }
}

/// Axis-aligned box given by its center and half extents.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub cx: f64,
    pub cy: f64,
    pub half_w: f64,
    pub half_h: f64,
}

impl Rect {
    pub fn centered(cx: f64, cy: f64, width: f64, height: f64) -> Self {
        Self {
            cx,
            cy,
            half_w: width / 2.0,
            half_h: height / 2.0,
        }
    }

    /// Grow the box by `margin` on every side.
    pub fn padded(self, margin: f64) -> Self {
        Self {
            half_w: self.half_w + margin,
            half_h: self.half_h + margin,
            ..self
        }
    }

    /// Overlap with positive area; touching edges do not count.
    pub fn intersects(&self, other: &Rect) -> bool {
        (self.cx - other.cx).abs() < self.half_w + other.half_w
            && (self.cy - other.cy).abs() < self.half_h + other.half_h
    }
}

/// Identity of a fish within one session. Never reused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FishId(pub u64);

/// Hook motion state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HookState {
    Idle,
    Lowering,
    Raising,
}

/// Session lifecycle. `Ended` and `Aborted` are terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionPhase {
    Active,
    Ended,
    /// Left early (back navigation). Produces no result.
    Aborted,
}

impl SessionPhase {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Active => "active",
            Self::Ended => "ended",
            Self::Aborted => "aborted",
        }
    }
}

/// Final record of a finished session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionResult {
    pub score: u32,
    pub fish_caught: u32,
    pub level_id: u32,
    pub time_used: u32,
}

/// A fish landed on the hook during a tick.
#[derive(Debug, Clone, PartialEq)]
pub struct CatchEvent {
    pub fish_id: FishId,
    pub fish_name: &'static str,
    pub points: u32,
    /// Where the fish was when caught (for the "+points" popup).
    pub x: f64,
    pub y: f64,
    pub score_after: u32,
}

/// Outcome of one second of the countdown.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimerTick {
    pub remaining: u32,
    pub used: u32,
    /// Time is running out; the host should warn the player.
    pub warning: bool,
    /// This tick ended the session.
    pub expired: bool,
}

/// Everything that can drive a session, in the order the host observed it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SessionEvent {
    TouchDown,
    TouchUp,
    /// A rendered frame; seconds since the previous one.
    Frame(f64),
    SecondElapsed,
    /// The player left the scene.
    Cancel,
}

/// What handling a `SessionEvent` produced, for the host to react to.
#[derive(Debug, Clone, PartialEq)]
pub enum SessionUpdate {
    HookDropped,
    HookRaised,
    Caught(CatchEvent),
    Countdown(TimerTick),
    Ended(SessionResult),
    Aborted,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scene_defaults_match_constants() {
        let scene = Scene::default();
        assert_eq!(scene.width, SCENE_WIDTH);
        assert_eq!(scene.height, SCENE_HEIGHT);
        let (x, y) = scene.hook_rest();
        assert!((x - 195.0).abs() < 1e-9);
        assert!((y - 844.0 * 0.52).abs() < 1e-9);
    }

    #[test]
    fn test_fish_band_is_below_hook_rest() {
        let scene = Scene::default();
        let (top, bottom) = scene.fish_band();
        assert!(top > scene.hook_rest().1);
        assert!(bottom < scene.height);
    }

    #[test]
    fn test_entry_and_far_edge() {
        let scene = Scene::new(100.0, 100.0);
        assert_eq!(scene.entry_x(1), -50.0);
        assert_eq!(scene.entry_x(-1), 150.0);
        assert!(scene.past_far_edge(150.0, 1));
        assert!(!scene.past_far_edge(149.0, 1));
        assert!(scene.past_far_edge(-50.0, -1));
        assert!(!scene.past_far_edge(0.0, -1));
    }

    #[test]
    fn test_rect_intersection() {
        let a = Rect::centered(0.0, 0.0, 10.0, 10.0);
        let b = Rect::centered(9.0, 0.0, 10.0, 10.0);
        let touching = Rect::centered(10.0, 0.0, 10.0, 10.0);
        assert!(a.intersects(&b));
        assert!(!a.intersects(&touching));
        assert!(a.padded(1.0).intersects(&touching));
    }

    #[test]
    fn test_phase_names() {
        assert_eq!(SessionPhase::Active.name(), "active");
        assert_eq!(SessionPhase::Ended.name(), "ended");
        assert_eq!(SessionPhase::Aborted.name(), "aborted");
    }
}
