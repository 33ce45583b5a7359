//! Scrolling ground made of recycled blocks
//!
//! The blocks form an implicit ring: each one scrolls left, and once it is
//! fully off-screen it jumps back to the spawn point and waits for its left
//! neighbour to clear the right edge before following it.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::BLOCK_COUNT;

/// Ground blocks in spawn order
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GroundScroller {
    pub blocks: [Vec2; BLOCK_COUNT],
    pub spawn: Vec2,
}

impl GroundScroller {
    /// All blocks start stacked on the spawn point
    pub fn new(spawn: Vec2) -> Self {
        Self {
            blocks: [spawn; BLOCK_COUNT],
            spawn,
        }
    }

    /// Ground height under the ball (the first block's top edge)
    #[inline]
    pub fn ground_y(&self) -> f32 {
        self.blocks[0].y
    }

    /// Scroll every block left by `speed`, releasing waiting blocks and
    /// recycling blocks that passed `-margin`
    pub fn advance(&mut self, screen_width: f32, speed: f32, margin: f32) {
        for i in 0..self.blocks.len() {
            let moves = i == 0
                // in flight
                || self.blocks[i].x != self.spawn.x
                // neighbour has cleared the right edge, release this one
                || self.blocks[i - 1].x < screen_width - margin;

            if moves {
                self.blocks[i].x -= speed;
            }
            if self.blocks[i].x < -margin {
                self.blocks[i].x = self.spawn.x;
            }
        }
    }

    /// Blocks that have left the spawn point
    pub fn in_flight(&self) -> impl Iterator<Item = &Vec2> {
        self.blocks.iter().filter(|b| b.x != self.spawn.x)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SPEED: f32 = 5.0;
    const MARGIN: f32 = 100.0;

    fn scroller() -> GroundScroller {
        GroundScroller::new(Vec2::new(800.0, 500.0))
    }

    #[test]
    fn test_first_block_reaches_minus_five_after_161_frames() {
        let mut ground = scroller();
        for _ in 0..161 {
            ground.advance(800.0, SPEED, MARGIN);
        }
        assert_eq!(ground.blocks[0].x, -5.0);
    }

    #[test]
    fn test_first_block_recycles_after_181_frames() {
        let mut ground = scroller();
        for _ in 0..180 {
            ground.advance(800.0, SPEED, MARGIN);
        }
        assert_eq!(ground.blocks[0].x, -100.0);
        ground.advance(800.0, SPEED, MARGIN);
        assert_eq!(ground.blocks[0].x, 800.0);
        assert_eq!(ground.blocks[0].y, 500.0);
    }

    #[test]
    fn test_second_block_waits_for_gap() {
        let mut ground = scroller();
        ground.advance(800.0, SPEED, MARGIN);
        assert_eq!(ground.blocks[0].x, 795.0);
        assert_eq!(ground.blocks[1].x, 800.0);

        // Block 0 needs to pass 700 before block 1 is released
        for _ in 0..20 {
            ground.advance(800.0, SPEED, MARGIN);
        }
        assert_eq!(ground.blocks[0].x, 695.0);
        // Released on the frame block 0 crossed 700
        assert_eq!(ground.blocks[1].x, 795.0);
        assert_eq!(ground.blocks[2].x, 800.0);
    }

    #[test]
    fn test_spacing_follows_margin_not_index() {
        let mut ground = scroller();
        for _ in 0..100 {
            ground.advance(800.0, SPEED, MARGIN);
        }
        // First wave: blocks 0..=4 released, each one margin behind the last
        assert_eq!(ground.in_flight().count(), 5);
        for i in 0..4 {
            assert_eq!(ground.blocks[i + 1].x - ground.blocks[i].x, MARGIN);
        }
        assert_eq!(ground.blocks[5].x, 800.0);

        // A wider screen releases blocks at the same spacing
        let mut wide = GroundScroller::new(Vec2::new(1600.0, 500.0));
        for _ in 0..100 {
            wide.advance(1600.0, SPEED, MARGIN);
        }
        assert_eq!(wide.blocks[1].x - wide.blocks[0].x, MARGIN);
    }

    #[test]
    fn test_y_never_changes() {
        let mut ground = scroller();
        for _ in 0..1000 {
            ground.advance(800.0, SPEED, MARGIN);
            assert!(ground.blocks.iter().all(|b| b.y == 500.0));
        }
    }
}
