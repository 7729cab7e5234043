//! The gameplay scene: one simulation run from round 1 to game over
//!
//! Ticks the simulation, turns its events into sound cues, and draws the
//! world back-to-front: background, bullets, enemies, pickups, player, HUD.

use glam::Vec2;

use super::{FrameContext, Scene, SceneRequest};
use crate::assets::AssetProvider;
use crate::audio::SoundCue;
use crate::consts::{WORLD_HEIGHT, WORLD_WIDTH};
use crate::input;
use crate::render::TextureId;
use crate::sim::{GameEvent, GamePhase, GameState, PickupKind, tick};
use crate::tuning::Tuning;

/// Texture handles resolved once at scene construction
struct GameplayTextures {
    background: TextureId,
    player: TextureId,
    enemy: TextureId,
    bullet: TextureId,
    pickup_life: TextureId,
    pickup_shield: TextureId,
}

pub struct GameplayScene {
    state: GameState,
    textures: GameplayTextures,
    /// Best score at run start, shown in the HUD
    high_score: u32,
    sfx_volume: f32,
}

impl GameplayScene {
    pub fn new(
        assets: &mut dyn AssetProvider,
        seed: u64,
        tuning: Tuning,
        high_score: u32,
        sfx_volume: f32,
    ) -> Self {
        Self {
            state: GameState::new(seed, tuning),
            textures: GameplayTextures {
                background: assets.texture("background"),
                player: assets.texture("player_ship"),
                enemy: assets.texture("enemy_ship"),
                bullet: assets.texture("bullet"),
                pickup_life: assets.texture("pickup_life"),
                pickup_shield: assets.texture("pickup_shield"),
            },
            high_score,
            sfx_volume,
        }
    }

    fn play_cues(&self, ctx: &mut FrameContext<'_>, events: &[GameEvent]) {
        for event in events {
            let (cue, volume) = match event {
                GameEvent::ShotFired => (SoundCue::Shot, 1.0),
                GameEvent::PlayerDamaged => (SoundCue::PlayerHit, 1.0),
                GameEvent::EnemyDestroyed { .. } => (SoundCue::Explosion, 0.3),
                GameEvent::PickupCollected { .. } => (SoundCue::PickupCollect, 0.8),
                GameEvent::GameOver { .. } => (SoundCue::GameOver, 0.6),
                GameEvent::RoundCleared { .. } => continue,
            };
            ctx.audio.play_at_volume(cue, volume * self.sfx_volume);
        }
    }

    fn draw_world(&self, ctx: &mut FrameContext<'_>) {
        let r = &mut *ctx.renderer;
        r.draw(
            self.textures.background,
            Vec2::ZERO,
            Vec2::new(WORLD_WIDTH, WORLD_HEIGHT),
        );
        for bullet in &self.state.bullets {
            r.draw(self.textures.bullet, bullet.pos, bullet.size);
        }
        for enemy in &self.state.enemies {
            r.draw(self.textures.enemy, enemy.pos, enemy.size);
        }
        for pickup in &self.state.pickups {
            let texture = match pickup.kind {
                PickupKind::Life => self.textures.pickup_life,
                PickupKind::Shield => self.textures.pickup_shield,
            };
            r.draw(texture, pickup.pos, pickup.size);
        }
        if !self.state.player.destroyed {
            r.draw(self.textures.player, self.state.player.pos, self.state.player.size);
        }
        self.draw_hud(r);
    }

    fn draw_hud(&self, r: &mut dyn crate::render::Renderer) {
        let round = &self.state.round;
        r.draw_text(
            &format!("Lives: {} Round: {}", self.state.player.hull.max(0), round.number),
            Vec2::new(10.0, 30.0),
        );
        r.draw_text(
            &format!("Score:{}", round.score),
            Vec2::new(WORLD_WIDTH - 150.0, 30.0),
        );
        r.draw_text(
            &format!("HighScore:{}", self.high_score),
            Vec2::new(WORLD_WIDTH / 2.0 - 100.0, 30.0),
        );
        if self.state.phase == GamePhase::RoundClear {
            r.draw_text(
                &format!("Round {} complete!", round.number),
                Vec2::new(WORLD_WIDTH / 2.0 - 100.0, WORLD_HEIGHT / 2.0),
            );
        }
    }
}

impl Scene for GameplayScene {
    fn frame(&mut self, ctx: &mut FrameContext<'_>) -> Option<SceneRequest> {
        let tick_input = input::tick_input(ctx.input);
        tick(&mut self.state, &tick_input, ctx.dt);

        let events = self.state.take_events();
        self.play_cues(ctx, &events);

        ctx.renderer.begin_frame();
        self.draw_world(ctx);
        ctx.renderer.end_frame();

        if self.state.phase == GamePhase::GameOver {
            return Some(SceneRequest::EndRun {
                score: self.state.round.score,
            });
        }
        None
    }
}
