//! Hook-versus-fish collision test.

use super::fish::FishEntity;
use super::hook::HookController;
use super::types::{FishId, Rect};
use crate::core::constants::{HOOK_CATCH_MARGIN, HOOK_SIZE};

/// Finds the fish (if any) the hook snags this tick.
#[derive(Debug, Clone, Copy)]
pub struct CatchDetector {
    hook_size: f64,
    margin: f64,
}

impl Default for CatchDetector {
    fn default() -> Self {
        Self::new(HOOK_SIZE, HOOK_CATCH_MARGIN)
    }
}

impl CatchDetector {
    pub fn new(hook_size: f64, margin: f64) -> Self {
        Self { hook_size, margin }
    }

    /// The padded box around the hook centred at `(x, y)`.
    pub fn hook_region(&self, x: f64, y: f64) -> Rect {
        Rect::centered(x, y, self.hook_size, self.hook_size).padded(self.margin)
    }

    /// First fish in spawn order overlapping the hook region, or `None`.
    /// Never reports a catch unless the hook is lowering.
    pub fn detect(
        &self,
        hook: &HookController,
        hook_pos: (f64, f64),
        fish: &[FishEntity],
    ) -> Option<FishId> {
        if !hook.is_lowering() {
            return None;
        }
        let region = self.hook_region(hook_pos.0, hook_pos.1);
        fish.iter()
            .find(|f| f.alive && region.intersects(&f.bounds()))
            .map(|f| f.id)
    }
}
