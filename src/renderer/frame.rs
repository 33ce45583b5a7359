//! Per-frame render snapshot
//!
//! Rebuilt after every update, whether or not gameplay has started, so the
//! draw step never reads simulation state directly.

use glam::Vec2;

use super::Rect;
use crate::consts::{BALL_DRAW_SCALE, BLOCK_COUNT};
use crate::sim::GameState;

/// Everything the draw step needs
#[derive(Debug, Clone, PartialEq)]
pub struct RenderState {
    pub ready: bool,
    /// Ball sprite centre
    pub ball_pos: Vec2,
    pub ball_rotation: f32,
    pub ball_scale: f32,
    /// Ground blocks as integer rectangles
    pub blocks: [Rect; BLOCK_COUNT],
}

impl RenderState {
    pub fn from_state(state: &GameState) -> Self {
        let size = state.block_size;
        let blocks = state.ground.blocks.map(|pos| Rect {
            x: pos.x as i32,
            y: pos.y as i32,
            width: size.x as u32,
            height: size.y as u32,
        });
        Self {
            ready: state.is_ready(),
            ball_pos: state.ball.pos,
            ball_rotation: state.ball.rotation,
            ball_scale: BALL_DRAW_SCALE,
            blocks,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tuning::Tuning;

    #[test]
    fn test_blocks_truncate_to_integer_rects() {
        let mut state = GameState::new(800, 480, 64.0, &Tuning::default()).unwrap();
        state.ground.blocks[0].x = 12.9;
        state.ground.blocks[1].x = -3.7;
        let frame = RenderState::from_state(&state);
        assert_eq!(
            frame.blocks[0],
            Rect {
                x: 12,
                y: 380,
                width: 93,
                height: 100
            }
        );
        // Truncation toward zero, as a cast does
        assert_eq!(frame.blocks[1].x, -3);
        assert!(!frame.ready);
    }
}
