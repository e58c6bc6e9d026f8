//! Built-in level definitions.

use std::sync::Arc;

use super::types::{FishType, LevelCatalog, LevelColors, LevelConfig, Rgb, Size};

/// Returns all built-in levels (ids 0-4), easiest first.
pub fn get_all_levels() -> Vec<LevelConfig> {
    vec![
        LevelConfig {
            id: 0,
            name: "Frozen Pond",
            duration: 60,
            fish_count: 6,
            fishes: vec![
                FishType {
                    name: "Perch",
                    color: Rgb(230, 128, 51),
                    size: Size::new(40.0, 20.0),
                    points: 10,
                    speed: 70.0,
                },
                FishType {
                    name: "Roach",
                    color: Rgb(153, 153, 153),
                    size: Size::new(35.0, 18.0),
                    points: 15,
                    speed: 90.0,
                },
                FishType {
                    name: "Carp",
                    color: Rgb(102, 204, 102),
                    size: Size::new(45.0, 22.0),
                    points: 20,
                    speed: 60.0,
                },
            ],
            colors: LevelColors {
                sky_top: Rgb(38, 64, 115),
                sky_bottom: Rgb(102, 140, 179),
                water_top: Rgb(26, 77, 128),
                water_bottom: Rgb(13, 38, 77),
                ice: Rgb(217, 235, 247),
            },
        },
        LevelConfig {
            id: 1,
            name: "Winter Lake",
            duration: 50,
            fish_count: 8,
            fishes: vec![
                FishType {
                    name: "Trout",
                    color: Rgb(77, 179, 230),
                    size: Size::new(50.0, 25.0),
                    points: 20,
                    speed: 80.0,
                },
                FishType {
                    name: "Pike",
                    color: Rgb(230, 204, 77),
                    size: Size::new(55.0, 28.0),
                    points: 25,
                    speed: 55.0,
                },
                FishType {
                    name: "Grayling",
                    color: Rgb(179, 102, 204),
                    size: Size::new(42.0, 20.0),
                    points: 30,
                    speed: 100.0,
                },
            ],
            colors: LevelColors {
                sky_top: Rgb(26, 38, 89),
                sky_bottom: Rgb(77, 115, 166),
                water_top: Rgb(13, 64, 115),
                water_bottom: Rgb(5, 26, 64),
                ice: Rgb(191, 217, 242),
            },
        },
        LevelConfig {
            id: 2,
            name: "Arctic River",
            duration: 45,
            fish_count: 10,
            fishes: vec![
                FishType {
                    name: "Salmon",
                    color: Rgb(230, 77, 77),
                    size: Size::new(60.0, 30.0),
                    points: 35,
                    speed: 50.0,
                },
                FishType {
                    name: "Arctic Char",
                    color: Rgb(51, 230, 179),
                    size: Size::new(38.0, 19.0),
                    points: 40,
                    speed: 110.0,
                },
                FishType {
                    name: "Whitefish",
                    color: Rgb(242, 242, 242),
                    size: Size::new(48.0, 24.0),
                    points: 50,
                    speed: 70.0,
                },
            ],
            colors: LevelColors {
                sky_top: Rgb(13, 26, 77),
                sky_bottom: Rgb(51, 89, 140),
                water_top: Rgb(5, 38, 89),
                water_bottom: Rgb(3, 20, 51),
                ice: Rgb(179, 204, 230),
            },
        },
        LevelConfig {
            id: 3,
            name: "Glacier Bay",
            duration: 40,
            fish_count: 10,
            fishes: vec![
                FishType {
                    name: "Halibut",
                    color: Rgb(51, 102, 230),
                    size: Size::new(65.0, 32.0),
                    points: 50,
                    speed: 45.0,
                },
                FishType {
                    name: "Golden Trout",
                    color: Rgb(230, 153, 26),
                    size: Size::new(40.0, 20.0),
                    points: 60,
                    speed: 120.0,
                },
                FishType {
                    name: "Burbot",
                    color: Rgb(128, 26, 153),
                    size: Size::new(52.0, 26.0),
                    points: 45,
                    speed: 85.0,
                },
                FishType {
                    name: "Ice Cod",
                    color: Rgb(26, 204, 204),
                    size: Size::new(44.0, 22.0),
                    points: 55,
                    speed: 95.0,
                },
            ],
            colors: LevelColors {
                sky_top: Rgb(5, 13, 51),
                sky_bottom: Rgb(38, 64, 128),
                water_top: Rgb(0, 26, 77),
                water_bottom: Rgb(0, 13, 38),
                ice: Rgb(166, 191, 224),
            },
        },
        LevelConfig {
            id: 4,
            name: "Deep Abyss",
            duration: 35,
            fish_count: 12,
            fishes: vec![
                FishType {
                    name: "King Crab",
                    color: Rgb(255, 51, 128),
                    size: Size::new(70.0, 35.0),
                    points: 70,
                    speed: 40.0,
                },
                FishType {
                    name: "Neon Fish",
                    color: Rgb(0, 255, 128),
                    size: Size::new(35.0, 18.0),
                    points: 80,
                    speed: 130.0,
                },
                FishType {
                    name: "Abyssal",
                    color: Rgb(204, 0, 230),
                    size: Size::new(55.0, 28.0),
                    points: 90,
                    speed: 65.0,
                },
                FishType {
                    name: "Legendary",
                    color: Rgb(255, 217, 0),
                    size: Size::new(45.0, 22.0),
                    points: 100,
                    speed: 75.0,
                },
            ],
            colors: LevelColors {
                sky_top: Rgb(0, 5, 26),
                sky_bottom: Rgb(20, 31, 77),
                water_top: Rgb(0, 13, 51),
                water_bottom: Rgb(0, 5, 26),
                ice: Rgb(140, 166, 204),
            },
        },
    ]
}

/// The catalog of built-in levels, loaded once.
#[derive(Debug, Clone)]
pub struct BuiltinLevels {
    levels: Vec<Arc<LevelConfig>>,
}

impl BuiltinLevels {
    pub fn new() -> Self {
        Self {
            levels: get_all_levels().into_iter().map(Arc::new).collect(),
        }
    }
}

impl Default for BuiltinLevels {
    fn default() -> Self {
        Self::new()
    }
}

impl LevelCatalog for BuiltinLevels {
    fn levels(&self) -> &[Arc<LevelConfig>] {
        &self.levels
    }
}
