//! Data-driven gameplay constants
//!
//! Physics here is frame-based: gravity and jump impulses are applied once
//! per update regardless of elapsed time. Only the cosmetic spin and the
//! ambience clock use seconds.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::consts::{HEIGHT_RATIO_DIVISOR, WIDTH_RATIO_DIVISOR};
use crate::error::GameError;

/// Gameplay balance values
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    /// Ground scroll speed (units per frame)
    pub scroll_speed: f32,
    /// Off-screen margin: blocks recycle past `-margin`, and the next block
    /// is released once its neighbour passes `screen_width - margin`
    pub edge_margin: f32,
    /// Blocks sit this far above the bottom of the screen
    pub ground_lift: f32,
    /// Downward acceleration added to vertical speed each airborne frame
    pub gravity: f32,
    /// Upward speed change applied by each jump stage
    pub jump_impulse: f32,
    /// Ground-sampled frames required before the second jump registers
    pub double_jump_cooldown_frames: u32,
    /// Cosmetic ball spin (radians per second)
    pub spin_rate: f32,
    /// Seconds between ambience cues
    pub ambience_interval: f32,
    pub width_ratio_divisor: f64,
    pub height_ratio_divisor: f64,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            scroll_speed: 5.0,
            edge_margin: 100.0,
            ground_lift: 100.0,
            gravity: 0.2,
            jump_impulse: 5.0,
            double_jump_cooldown_frames: 8,
            spin_rate: 2.0,
            ambience_interval: 5.0,
            width_ratio_divisor: WIDTH_RATIO_DIVISOR,
            height_ratio_divisor: HEIGHT_RATIO_DIVISOR,
        }
    }
}

impl Tuning {
    /// Load tuning from a JSON file; missing fields take their defaults
    pub fn load(path: impl AsRef<Path>) -> Result<Self, GameError> {
        let json = std::fs::read_to_string(path.as_ref())?;
        let tuning: Self = serde_json::from_str(&json)?;
        tuning.validate()?;
        log::info!("Loaded tuning from {}", path.as_ref().display());
        Ok(tuning)
    }

    /// Reject values the simulation has no defined behaviour for
    pub fn validate(&self) -> Result<(), GameError> {
        let positive = [
            ("scroll_speed", f64::from(self.scroll_speed)),
            ("edge_margin", f64::from(self.edge_margin)),
            ("gravity", f64::from(self.gravity)),
            ("jump_impulse", f64::from(self.jump_impulse)),
            ("ambience_interval", f64::from(self.ambience_interval)),
            ("width_ratio_divisor", self.width_ratio_divisor),
            ("height_ratio_divisor", self.height_ratio_divisor),
        ];
        for (field, value) in positive {
            if !value.is_finite() || value <= 0.0 {
                return Err(GameError::InvalidTuning { field, value });
            }
        }
        // Zero lift is allowed (blocks at the screen bottom), negative is not
        let lift = f64::from(self.ground_lift);
        if !lift.is_finite() || lift < 0.0 {
            return Err(GameError::InvalidTuning {
                field: "ground_lift",
                value: lift,
            });
        }
        let spin = f64::from(self.spin_rate);
        if !spin.is_finite() {
            return Err(GameError::InvalidTuning {
                field: "spin_rate",
                value: spin,
            });
        }
        Ok(())
    }
}
