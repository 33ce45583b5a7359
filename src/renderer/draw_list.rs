//! Recording renderer
//!
//! Collects draw calls instead of issuing them. Used by the headless runner
//! and by tests to inspect what a frame would have drawn.

use super::{Color, Rect, Renderer, Sprite};
use crate::content::TextureId;

/// A single recorded draw call
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    Clear(Color),
    Begin,
    Sprite(Sprite),
    Rect { texture: TextureId, rect: Rect, tint: Color },
    End,
    FadeToBlack(f32),
}

/// Draw calls recorded since the last `clear_commands`
#[derive(Debug, Default)]
pub struct DrawList {
    pub commands: Vec<DrawCommand>,
    in_batch: bool,
}

impl DrawList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear_commands(&mut self) {
        self.commands.clear();
    }

    /// Number of textured quads (sprites and rects) recorded
    pub fn quad_count(&self) -> usize {
        self.commands
            .iter()
            .filter(|c| matches!(c, DrawCommand::Sprite(_) | DrawCommand::Rect { .. }))
            .count()
    }

    pub fn clear_color(&self) -> Option<Color> {
        self.commands.iter().find_map(|c| match c {
            DrawCommand::Clear(color) => Some(*color),
            _ => None,
        })
    }

    pub fn fade(&self) -> Option<f32> {
        self.commands.iter().find_map(|c| match c {
            DrawCommand::FadeToBlack(alpha) => Some(*alpha),
            _ => None,
        })
    }
}

impl Renderer for DrawList {
    fn clear(&mut self, color: Color) {
        self.commands.push(DrawCommand::Clear(color));
    }

    fn begin(&mut self) {
        if self.in_batch {
            log::warn!("begin() called inside an open batch");
        }
        self.in_batch = true;
        self.commands.push(DrawCommand::Begin);
    }

    fn draw_sprite(&mut self, sprite: &Sprite) {
        debug_assert!(self.in_batch, "draw_sprite outside begin/end");
        self.commands.push(DrawCommand::Sprite(sprite.clone()));
    }

    fn draw_rect(&mut self, texture: TextureId, rect: Rect, tint: Color) {
        debug_assert!(self.in_batch, "draw_rect outside begin/end");
        self.commands.push(DrawCommand::Rect {
            texture,
            rect,
            tint,
        });
    }

    fn end(&mut self) {
        self.in_batch = false;
        self.commands.push(DrawCommand::End);
    }

    fn fade_to_black(&mut self, alpha: f32) {
        self.commands.push(DrawCommand::FadeToBlack(alpha));
    }
}
