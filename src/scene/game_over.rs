//! Terminal game-over screen

use glam::Vec2;

use super::{FrameContext, Scene, SceneRequest};
use crate::assets::AssetProvider;
use crate::consts::{WORLD_HEIGHT, WORLD_WIDTH};
use crate::input;
use crate::render::TextureId;

pub struct GameOverScene {
    background: TextureId,
}

impl GameOverScene {
    pub fn new(assets: &mut dyn AssetProvider) -> Self {
        Self {
            background: assets.texture("game_over_background"),
        }
    }
}

impl Scene for GameOverScene {
    fn frame(&mut self, ctx: &mut FrameContext<'_>) -> Option<SceneRequest> {
        ctx.renderer.begin_frame();
        ctx.renderer.draw(
            self.background,
            Vec2::ZERO,
            Vec2::new(WORLD_WIDTH, WORLD_HEIGHT),
        );
        ctx.renderer
            .draw_text("Game Over !!!", Vec2::new(120.0, 400.0));
        ctx.renderer
            .draw_text("Press any key to restart...", Vec2::new(100.0, 300.0));
        ctx.renderer.end_frame();

        if input::any_pressed(ctx.input) {
            return Some(SceneRequest::StartGame);
        }
        None
    }
}
