//! Title screen

use glam::Vec2;

use super::{FrameContext, Scene, SceneRequest};
use crate::assets::AssetProvider;
use crate::consts::{WORLD_HEIGHT, WORLD_WIDTH};
use crate::input;
use crate::render::TextureId;

pub struct MenuScene {
    background: TextureId,
}

impl MenuScene {
    pub fn new(assets: &mut dyn AssetProvider) -> Self {
        Self {
            background: assets.texture("menu_background"),
        }
    }
}

impl Scene for MenuScene {
    fn frame(&mut self, ctx: &mut FrameContext<'_>) -> Option<SceneRequest> {
        ctx.renderer.begin_frame();
        ctx.renderer.draw(
            self.background,
            Vec2::ZERO,
            Vec2::new(WORLD_WIDTH, WORLD_HEIGHT),
        );
        ctx.renderer
            .draw_text("Welcome to Astro Raid!", Vec2::new(140.0, 400.0));
        ctx.renderer
            .draw_text("Press any key to start...", Vec2::new(100.0, 300.0));
        ctx.renderer.end_frame();

        if input::any_pressed(ctx.input) {
            return Some(SceneRequest::StartGame);
        }
        None
    }
}
