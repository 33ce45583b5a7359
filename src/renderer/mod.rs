//! Rendering collaborator
//!
//! The gameplay screen only issues batched textured quads, a clear and a
//! fade. Backends implement `Renderer`; `DrawList` records the calls.

pub mod color;
pub mod draw_list;
pub mod frame;

pub use color::Color;
pub use draw_list::{DrawCommand, DrawList};
pub use frame::RenderState;

use glam::Vec2;

use crate::content::TextureId;

/// Integer screen rectangle (top-left origin)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub width: u32,
    pub height: u32,
}

/// A rotated, scaled textured quad
#[derive(Debug, Clone, PartialEq)]
pub struct Sprite {
    pub texture: TextureId,
    pub position: Vec2,
    pub rotation: f32,
    /// Rotation/placement origin in texture pixels
    pub origin: Vec2,
    pub scale: f32,
    pub tint: Color,
}

/// Draw primitives the gameplay screen needs from a backend
pub trait Renderer {
    fn clear(&mut self, color: Color);
    fn begin(&mut self);
    fn draw_sprite(&mut self, sprite: &Sprite);
    fn draw_rect(&mut self, texture: TextureId, rect: Rect, tint: Color);
    fn end(&mut self);
    /// Darken the whole back buffer; 0 = untouched, 1 = black
    fn fade_to_black(&mut self, alpha: f32);
}
