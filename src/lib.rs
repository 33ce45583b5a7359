//! Rolling Ball - a side-scrolling ball runner
//!
//! Core modules:
//! - `sim`: Frame-stepped simulation (ground scrolling, ball physics, ambience)
//! - `screen`: Screen interface and the gameplay screen driving the simulation
//! - `renderer`: Draw-call collaborator and render-state snapshot
//! - `audio`: Cue playback collaborator and volume mixing
//! - `content`: Scoped textures and sound banks
//! - `input`: Per-player keyboard/gamepad snapshots
//! - `tuning`: Data-driven gameplay constants

pub mod audio;
pub mod content;
pub mod error;
pub mod input;
pub mod renderer;
pub mod screen;
pub mod settings;
pub mod sim;
pub mod tuning;

pub use error::GameError;
pub use screen::{GameplayScreen, Screen, ScreenHost};
pub use settings::Settings;
pub use tuning::Tuning;

/// Game configuration constants
pub mod consts {
    /// Number of ground blocks cycling across the screen
    pub const BLOCK_COUNT: usize = 10;

    /// Screen width divided by this gives the block width
    pub const WIDTH_RATIO_DIVISOR: f64 = 8.53;
    /// Screen height divided by this gives the block height
    pub const HEIGHT_RATIO_DIVISOR: f64 = 4.8;

    /// Ball sprite is drawn at half its texture size
    pub const BALL_DRAW_SCALE: f32 = 0.5;

    /// Cue names in the sound bank
    pub const MUSIC_CUE: &str = "Music";
    pub const AMBIENCE_CUE: &str = "Ambience";

    /// Content asset names
    pub const GRASS_BLOCK_TEXTURE: &str = "Grass-Block";
    pub const BALL_TEXTURE: &str = "Ball";
    pub const GAME_FONT: &str = "gamefont";
    pub const AUDIO_ENGINE: &str = "LifeOfBalls.xgs";
    pub const WAVE_BANK: &str = "Wave Bank.xwb";
    pub const SOUND_BANK: &str = "Sound Bank.xsb";
}

/// Truncated screen-size ratios used for block size and ball start position
///
/// Divides in f64: `480 / 4.8` must land on exactly 100.
#[inline]
pub fn screen_ratios(width: u32, height: u32, tuning: &Tuning) -> (u32, u32) {
    let w = (f64::from(width) / tuning.width_ratio_divisor).trunc() as u32;
    let h = (f64::from(height) / tuning.height_ratio_divisor).trunc() as u32;
    (w, h)
}
