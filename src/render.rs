//! Draw-command interface to the rendering backend
//!
//! The simulation never draws; scenes issue commands through this trait
//! and the shell decides what a texture handle or a glyph actually is.

use glam::Vec2;

/// Opaque texture handle issued by the asset provider
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TextureId(pub u32);

/// One frame's worth of draw commands, bracketed by begin/end
pub trait Renderer {
    fn begin_frame(&mut self);

    /// Draw a texture with its bottom-left corner at `pos`
    fn draw(&mut self, texture: TextureId, pos: Vec2, size: Vec2);

    /// Draw HUD text with its baseline origin at `pos`
    fn draw_text(&mut self, text: &str, pos: Vec2);

    fn end_frame(&mut self);
}
