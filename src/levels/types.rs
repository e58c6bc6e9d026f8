//! Level and fish type definitions.

use std::sync::Arc;

use crate::core::GameError;

/// An sRGB color. Only the host's renderer interprets these.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb(pub u8, pub u8, pub u8);

/// Width and height of a fish's bounding box in scene points.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

impl Size {
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

/// One kind of fish that can appear in a level.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FishType {
    pub name: &'static str,
    pub color: Rgb,
    pub size: Size,
    pub points: u32,
    /// Swim speed in scene points per second.
    pub speed: f64,
}

/// Background palette for a level.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LevelColors {
    pub sky_top: Rgb,
    pub sky_bottom: Rgb,
    pub water_top: Rgb,
    pub water_bottom: Rgb,
    pub ice: Rgb,
}

/// Static description of a playable level.
#[derive(Debug, Clone, PartialEq)]
pub struct LevelConfig {
    pub id: u32,
    pub name: &'static str,
    /// Session length in seconds.
    pub duration: u32,
    /// Number of fish swimming at once.
    pub fish_count: usize,
    pub fishes: Vec<FishType>,
    pub colors: LevelColors,
}

impl LevelConfig {
    /// Highest point value any fish in this level is worth.
    pub fn best_fish_points(&self) -> u32 {
        self.fishes.iter().map(|f| f.points).max().unwrap_or(0)
    }
}

/// Source of level configurations by id.
pub trait LevelCatalog {
    /// All levels in display order.
    fn levels(&self) -> &[Arc<LevelConfig>];

    /// Look up a level, failing with `ConfigurationMissing` if unknown.
    fn level(&self, id: u32) -> Result<Arc<LevelConfig>, GameError> {
        self.levels()
            .iter()
            .find(|l| l.id == id)
            .cloned()
            .ok_or(GameError::ConfigurationMissing { level_id: Some(id) })
    }
}
