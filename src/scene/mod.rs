//! Scene layer: menu, gameplay rounds, game over
//!
//! A scene runs one frame at a time against borrowed collaborators and may
//! request a switch; `SceneHost` owns the active scene and the high-score
//! store and performs the swap, dropping the previous scene's resources.

mod game_over;
mod gameplay;
mod menu;

pub use game_over::GameOverScene;
pub use gameplay::GameplayScene;
pub use menu::MenuScene;

use crate::assets::AssetProvider;
use crate::audio::AudioPlayer;
use crate::highscores::HighScoreStore;
use crate::input::InputSource;
use crate::render::Renderer;
use crate::settings::Settings;
use crate::tuning::Tuning;

/// Everything a scene may touch during one frame, borrowed for the call
pub struct FrameContext<'a> {
    pub renderer: &'a mut dyn Renderer,
    pub audio: &'a mut dyn AudioPlayer,
    pub input: &'a dyn InputSource,
    /// Seconds since the previous frame
    pub dt: f32,
}

/// A scene's request to be replaced
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SceneRequest {
    /// Begin a fresh run at round 1
    StartGame,
    /// The run ended with this final score
    EndRun { score: u32 },
}

/// One screen of the game
pub trait Scene {
    /// Advance and draw one frame; `Some` asks the host to switch scenes
    fn frame(&mut self, ctx: &mut FrameContext<'_>) -> Option<SceneRequest>;
}

/// Owns the active scene and the cross-run state (high score, settings)
pub struct SceneHost {
    scene: Box<dyn Scene>,
    high_scores: HighScoreStore,
    settings: Settings,
    tuning: Tuning,
    base_seed: u64,
    runs: u64,
}

impl SceneHost {
    /// Start at the menu
    pub fn new(settings: Settings, tuning: Tuning, base_seed: u64, assets: &mut dyn AssetProvider) -> Self {
        Self {
            scene: Box::new(MenuScene::new(assets)),
            high_scores: HighScoreStore::new(),
            settings,
            tuning,
            base_seed,
            runs: 0,
        }
    }

    pub fn high_score(&self) -> u32 {
        self.high_scores.best()
    }

    /// Run one frame of the active scene and apply any requested switch
    pub fn frame(
        &mut self,
        renderer: &mut dyn Renderer,
        audio: &mut dyn AudioPlayer,
        input: &dyn InputSource,
        assets: &mut dyn AssetProvider,
        dt: f32,
    ) {
        let request = self.scene.frame(&mut FrameContext {
            renderer,
            audio,
            input,
            dt,
        });
        if let Some(request) = request {
            self.switch(request, assets);
        }
    }

    /// Replace the active scene. The old scene is dropped here, releasing
    /// whatever it held.
    fn switch(&mut self, request: SceneRequest, assets: &mut dyn AssetProvider) {
        match request {
            SceneRequest::StartGame => {
                let seed = self.base_seed.wrapping_add(self.runs);
                self.runs += 1;
                log::info!("starting run with seed {seed}");
                self.scene = Box::new(GameplayScene::new(
                    assets,
                    seed,
                    self.tuning,
                    self.high_scores.best(),
                    self.settings.effective_sfx_volume(),
                ));
            }
            SceneRequest::EndRun { score } => {
                self.high_scores.submit(score);
                self.scene = Box::new(GameOverScene::new(assets));
            }
        }
    }
}
