//! Ball vertical physics and the two-stage jump
//!
//! Gravity and jump impulses are per frame, spin is per second.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::tuning::Tuning;

/// How far into the double jump the ball is
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum JumpStage {
    /// On the ground, first jump available
    #[default]
    Grounded,
    /// First jump used, second jump armed once the cooldown elapses
    First,
    /// Both jumps used until the next landing
    Second,
}

/// The player's ball
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ball {
    /// Sprite centre
    pub pos: Vec2,
    /// Vertical speed in units per frame (positive is down)
    pub vertical_speed: f32,
    /// Cosmetic rotation (radians)
    pub rotation: f32,
    pub jump_stage: JumpStage,
    /// Ground-sampled frames since the last landing
    pub jump_frames: u32,
    /// Texture height, defines the landing and jump-sampling bands
    pub height: f32,
}

impl Ball {
    pub fn new(pos: Vec2, height: f32) -> Self {
        Self {
            pos,
            vertical_speed: 0.0,
            rotation: 0.0,
            jump_stage: JumpStage::Grounded,
            jump_frames: 0,
            height,
        }
    }

    /// Lower edge has reached the ground
    #[inline]
    pub fn is_landed(&self, ground_y: f32) -> bool {
        self.pos.y + self.height / 4.0 >= ground_y
    }

    /// Close enough to the ground to take jump input
    #[inline]
    pub fn in_jump_band(&self, ground_y: f32) -> bool {
        self.pos.y + self.height / 2.0 >= ground_y
    }

    /// Advance one frame of physics against the ground height
    pub fn advance(&mut self, ground_y: f32, dt: f32, tuning: &Tuning) {
        self.rotation += tuning.spin_rate * dt;
        self.pos.y += self.vertical_speed;

        if self.is_landed(ground_y) {
            self.land();
        } else {
            self.vertical_speed += tuning.gravity;
        }
    }

    fn land(&mut self) {
        self.vertical_speed = 0.0;
        self.jump_stage = JumpStage::Grounded;
        self.jump_frames = 0;
    }

    /// Feed this frame's jump key state
    ///
    /// Returns the stage entered, if a jump fired.
    pub fn on_jump_input(
        &mut self,
        pressed: bool,
        ground_y: f32,
        tuning: &Tuning,
    ) -> Option<JumpStage> {
        if !self.in_jump_band(ground_y) {
            return None;
        }
        self.jump_frames += 1;
        if !pressed {
            return None;
        }

        match self.jump_stage {
            JumpStage::Grounded => {
                self.vertical_speed -= tuning.jump_impulse;
                self.jump_stage = JumpStage::First;
                Some(JumpStage::First)
            }
            JumpStage::First if self.jump_frames >= tuning.double_jump_cooldown_frames => {
                self.vertical_speed -= tuning.jump_impulse;
                self.jump_stage = JumpStage::Second;
                Some(JumpStage::Second)
            }
            _ => None,
        }
    }
}
