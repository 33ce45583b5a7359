//! Game state and core simulation types
//!
//! Everything the gameplay loop owns lives here; nothing is shared.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::ambience::AmbienceClock;
use super::ball::{Ball, JumpStage};
use super::ground::GroundScroller;
use crate::error::GameError;
use crate::screen_ratios;
use crate::tuning::Tuning;

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum GamePhase {
    /// Warm-up scroll, the ball is frozen
    #[default]
    NotReady,
    /// Active gameplay; never reverts
    Ready,
}

/// Things that happened during a tick, for audio and logging
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum GameEvent {
    /// First block crossed the left edge
    BecameReady,
    /// A jump stage fired
    Jumped(JumpStage),
    /// Ball touched down after being airborne
    Landed,
    /// Ambience interval elapsed
    Ambience,
}

/// Complete game state (serializable for debugging snapshots)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    pub phase: GamePhase,
    pub ground: GroundScroller,
    pub ball: Ball,
    pub ambience: AmbienceClock,
    /// Screen width the ground release rule measures against
    pub screen_width: f32,
    /// Rendered block size (truncated screen ratios)
    pub block_size: Vec2,
    /// Simulation frame counter
    pub frames: u64,
    /// Events raised this frame; `tick` clears whatever was not drained
    #[serde(skip)]
    pub events: Vec<GameEvent>,
}

impl GameState {
    /// Lay out a fresh run for the given screen and ball texture height
    pub fn new(
        screen_width: u32,
        screen_height: u32,
        ball_height: f32,
        tuning: &Tuning,
    ) -> Result<Self, GameError> {
        if screen_width == 0 || screen_height == 0 {
            return Err(GameError::InvalidScreenSize {
                width: screen_width,
                height: screen_height,
            });
        }
        tuning.validate()?;

        let (width_ratio, height_ratio) = screen_ratios(screen_width, screen_height, tuning);
        let spawn = Vec2::new(
            screen_width as f32,
            screen_height as f32 - tuning.ground_lift,
        );
        let ball_start = Vec2::new((width_ratio * 2) as f32, (height_ratio * 2) as f32);

        Ok(Self {
            phase: GamePhase::NotReady,
            ground: GroundScroller::new(spawn),
            ball: Ball::new(ball_start, ball_height),
            ambience: AmbienceClock::default(),
            screen_width: screen_width as f32,
            block_size: Vec2::new(width_ratio as f32, height_ratio as f32),
            frames: 0,
            events: Vec::new(),
        })
    }

    #[inline]
    pub fn is_ready(&self) -> bool {
        self.phase == GamePhase::Ready
    }

    /// Take the events raised since the last call
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }
}
