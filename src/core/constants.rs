// Scene geometry (points, top-down: y grows toward the lake bottom)
pub const SCENE_WIDTH: f64 = 390.0;
pub const SCENE_HEIGHT: f64 = 844.0;
pub const HOOK_REST_FRACTION: f64 = 0.52;
pub const MAX_DEPTH_FRACTION: f64 = 0.5;
pub const FISH_BAND_TOP_FRACTION: f64 = 0.60;
pub const FISH_BAND_BOTTOM_FRACTION: f64 = 0.95;
pub const FISH_OFFSCREEN_MARGIN: f64 = 50.0;

// Hook timing
pub const HOOK_LOWER_SECONDS: f64 = 2.0;
pub const HOOK_RAISE_SECONDS: f64 = 0.5;

// Catch detection
pub const HOOK_SIZE: f64 = 16.0;
pub const HOOK_CATCH_MARGIN: f64 = 15.0;

// Session timing
pub const TIMER_WARNING_SECONDS: u32 = 10;
pub const RESPAWN_DELAY_SECONDS: f64 = 0.3;
pub const MAX_FRAME_SECONDS: f64 = 0.1; // clamp after pause/lag

// Host loop
pub const REALTIME_FRAME_MS: u64 = 16; // ~60 FPS
pub const INPUT_POLL_MS: u64 = 8;
pub const TOUCH_HOLD_MS: u64 = 550; // outlasts the initial key-repeat delay
pub const GAME_OVER_LINGER_SECONDS: u64 = 2;
