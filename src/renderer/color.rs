//! Colors for game elements

use serde::{Deserialize, Serialize};

/// Linear RGBA color
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Color(pub [f32; 4]);

impl Color {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self([r as f32 / 255.0, g as f32 / 255.0, b as f32 / 255.0, 1.0])
    }

    pub const BLACK: Color = Color::rgb(0, 0, 0);
    pub const WHITE: Color = Color::rgb(255, 255, 255);
    /// Sky behind active gameplay
    pub const CORNFLOWER_BLUE: Color = Color::rgb(100, 149, 237);
}

/// Background for the current phase: black during warm-up, sky once ready
#[inline]
pub fn background(ready: bool) -> Color {
    if ready { Color::CORNFLOWER_BLUE } else { Color::BLACK }
}
