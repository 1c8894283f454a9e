use anyhow::Context;
use serde::{Deserialize, Serialize};
use smart_default::SmartDefault;
use tap::TapFallible;

// Largest per-frame displacement, in pixels, that still draws normally
pub const STUTTER_THRESHOLD: f64 = 5.0;

// The tunnel wrap only makes sense for the classic 28 column maze. A character is teleported
// once it is three quarters of a tile past either edge, and lands a quarter tile inside the
// opposite off-screen margin so it doesn't immediately trigger the other side.
pub const MAZE_COLUMNS: usize = 28;
pub const WARP_LEFT_TRIGGER: f64 = -0.75;
pub const WARP_RIGHT_TRIGGER: f64 = MAZE_COLUMNS as f64 - 0.25;
pub const WARP_LEFT_LANDING: f64 = MAZE_COLUMNS as f64 - 0.75;
pub const WARP_RIGHT_LANDING: f64 = -1.25;

// Grid x bounds of the tunnel and the tile columns characters reappear at.
#[derive(SmartDefault, Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct WarpBounds {
    // Grid x below which a character leaving left wraps around
    #[default(WARP_LEFT_TRIGGER)]
    pub left_trigger: f64,
    // Grid x above which a character leaving right wraps around
    #[default(WARP_RIGHT_TRIGGER)]
    pub right_trigger: f64,
    // Tile multiple of the pixel `left` after wrapping from the left edge
    #[default(WARP_LEFT_LANDING)]
    pub left_landing: f64,
    // Tile multiple of the pixel `left` after wrapping from the right edge
    #[default(WARP_RIGHT_LANDING)]
    pub right_landing: f64,
}

#[derive(SmartDefault, Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct MotionConfig {
    #[default(STUTTER_THRESHOLD)]
    pub stutter_threshold: f64,
    pub warp: WarpBounds,
}

impl MotionConfig {
    pub fn from_json(json: &str) -> anyhow::Result<Self> {
        let config: MotionConfig = serde_json::from_str(json)
            .tap_err(|e| log::error!("Invalid motion config JSON: {e}"))
            .context("couldn't parse motion config")?;

        if config.stutter_threshold < 0. {
            log::warn!(
                "Negative stutter threshold {} hides every moving frame",
                config.stutter_threshold
            );
        }

        Ok(config)
    }
}
