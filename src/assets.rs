//! Asset lookup interface
//!
//! Scenes resolve texture names to opaque handles at construction time and
//! hold handles only; raw asset bytes never reach the core.

use crate::render::TextureId;

/// Supplies texture handles by name
pub trait AssetProvider {
    fn texture(&mut self, name: &str) -> TextureId;
}
