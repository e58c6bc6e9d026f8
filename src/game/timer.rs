//! One-second countdown for a session.

use super::types::TimerTick;
use crate::core::constants::TIMER_WARNING_SECONDS;

/// Counts down from the level duration, one call per real second.
/// Once it reaches zero, or is stopped, it never ticks again.
#[derive(Debug, Clone)]
pub struct SessionTimer {
    remaining: u32,
    used: u32,
    warning_threshold: u32,
    running: bool,
}

impl SessionTimer {
    pub fn new(duration: u32) -> Self {
        Self {
            remaining: duration,
            used: 0,
            warning_threshold: TIMER_WARNING_SECONDS,
            running: true,
        }
    }

    pub fn remaining(&self) -> u32 {
        self.remaining
    }

    pub fn used(&self) -> u32 {
        self.used
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    /// True when the clock is in its final stretch.
    pub fn is_warning(&self) -> bool {
        self.remaining <= self.warning_threshold
    }

    /// Count one second. Returns `None` once stopped.
    pub fn tick(&mut self) -> Option<TimerTick> {
        if !self.running {
            return None;
        }
        self.remaining = self.remaining.saturating_sub(1);
        self.used += 1;
        let expired = self.remaining == 0;
        if expired {
            self.running = false;
        }
        Some(TimerTick {
            remaining: self.remaining,
            used: self.used,
            warning: self.is_warning(),
            expired,
        })
    }

    /// Stop permanently (scene left).
    pub fn stop(&mut self) {
        self.running = false;
    }
}
