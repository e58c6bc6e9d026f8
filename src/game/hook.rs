//! Hook depth state machine.

use super::types::HookState;
use crate::core::constants::{HOOK_LOWER_SECONDS, HOOK_RAISE_SECONDS};

/// Drives the hook between the ice hole (depth 0) and `max_depth`.
///
/// Lowering is linear over `lower_seconds`; raising eases out over
/// `raise_seconds` from wherever the hook was when raising began. Depth is
/// always within `[0, max_depth]` and only changes while moving.
#[derive(Debug, Clone)]
pub struct HookController {
    state: HookState,
    depth: f64,
    max_depth: f64,
    lower_seconds: f64,
    raise_seconds: f64,
    /// Seconds spent in the current phase.
    elapsed: f64,
    /// Depth at the moment raising began.
    raise_from: f64,
}

impl HookController {
    pub fn new(max_depth: f64) -> Self {
        Self::with_timing(max_depth, HOOK_LOWER_SECONDS, HOOK_RAISE_SECONDS)
    }

    pub fn with_timing(max_depth: f64, lower_seconds: f64, raise_seconds: f64) -> Self {
        Self {
            state: HookState::Idle,
            depth: 0.0,
            max_depth: max_depth.max(0.0),
            lower_seconds,
            raise_seconds,
            elapsed: 0.0,
            raise_from: 0.0,
        }
    }

    pub fn state(&self) -> HookState {
        self.state
    }

    pub fn depth(&self) -> f64 {
        self.depth
    }

    pub fn max_depth(&self) -> f64 {
        self.max_depth
    }

    pub fn is_lowering(&self) -> bool {
        self.state == HookState::Lowering
    }

    /// Idle → Lowering. Returns false (and does nothing) otherwise.
    pub fn start_lowering(&mut self) -> bool {
        if self.state != HookState::Idle {
            return false;
        }
        self.state = HookState::Lowering;
        self.elapsed = 0.0;
        true
    }

    /// Lowering → Raising. Used both for touch-up and after a catch.
    /// Returns false (and does nothing) if the hook is not lowering.
    pub fn start_raising(&mut self) -> bool {
        if self.state != HookState::Lowering {
            return false;
        }
        self.state = HookState::Raising;
        self.elapsed = 0.0;
        self.raise_from = self.depth;
        true
    }

    /// Advance the current motion by `dt` seconds.
    pub fn advance(&mut self, dt: f64) {
        let dt = dt.max(0.0);
        match self.state {
            HookState::Idle => {}
            HookState::Lowering => {
                self.elapsed += dt;
                let progress = progress(self.elapsed, self.lower_seconds);
                // Held at the bottom once fully lowered
                self.depth = (self.max_depth * progress).clamp(0.0, self.max_depth);
            }
            HookState::Raising => {
                self.elapsed += dt;
                let progress = progress(self.elapsed, self.raise_seconds);
                if progress >= 1.0 {
                    self.state = HookState::Idle;
                    self.depth = 0.0;
                    self.elapsed = 0.0;
                } else {
                    self.depth =
                        (self.raise_from * (1.0 - ease_out(progress))).clamp(0.0, self.max_depth);
                }
            }
        }
    }
}

fn progress(elapsed: f64, duration: f64) -> f64 {
    if duration <= 0.0 {
        1.0
    } else {
        (elapsed / duration).min(1.0)
    }
}

/// Quadratic ease-out: fast start, gentle arrival.
fn ease_out(t: f64) -> f64 {
    1.0 - (1.0 - t) * (1.0 - t)
}
