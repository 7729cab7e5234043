//! Astro Raid entry point
//!
//! No windowing backend is wired on native. Running the binary drives a
//! scripted session through the scene layer with headless collaborators
//! and logs the outcome, which exercises the whole stack end to end.

use std::collections::HashMap;
use std::time::{SystemTime, UNIX_EPOCH};

use glam::Vec2;

use astro_raid::assets::AssetProvider;
use astro_raid::audio::{AudioPlayer, SoundCue};
use astro_raid::consts::SIM_DT;
use astro_raid::input::{Control, InputSource};
use astro_raid::render::{Renderer, TextureId};
use astro_raid::scene::SceneHost;
use astro_raid::{Settings, Tuning};

/// Counts draw commands instead of issuing them
#[derive(Default)]
struct HeadlessRenderer {
    draws: u64,
    frames: u64,
}

impl Renderer for HeadlessRenderer {
    fn begin_frame(&mut self) {}

    fn draw(&mut self, _texture: TextureId, _pos: Vec2, _size: Vec2) {
        self.draws += 1;
    }

    fn draw_text(&mut self, _text: &str, _pos: Vec2) {}

    fn end_frame(&mut self) {
        self.frames += 1;
    }
}

/// Logs cues instead of playing them
#[derive(Default)]
struct SilentAudio {
    cues: u64,
}

impl AudioPlayer for SilentAudio {
    fn play_at_volume(&mut self, cue: SoundCue, volume: f32) {
        self.cues += 1;
        log::debug!("cue {cue:?} at volume {volume:.2}");
    }
}

/// Hands out one handle per distinct texture name
#[derive(Default)]
struct NameAssets {
    ids: HashMap<String, TextureId>,
}

impl AssetProvider for NameAssets {
    fn texture(&mut self, name: &str) -> TextureId {
        let next = TextureId(self.ids.len() as u32);
        *self.ids.entry(name.to_string()).or_insert(next)
    }
}

/// Canned input: starts the run on the first frame, then fires steadily
/// while sweeping up and down.
struct ScriptedInput {
    frame: u64,
}

impl InputSource for ScriptedInput {
    fn just_pressed(&self, control: Control) -> bool {
        match control {
            Control::Confirm => self.frame == 0,
            Control::Fire => self.frame % 12 == 1,
            Control::MoveUp => self.frame % 240 == 30,
            Control::MoveDown => self.frame % 240 == 150,
            _ => false,
        }
    }
}

fn main() {
    env_logger::init();
    log::info!("Astro Raid starting (headless demo)...");

    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0);
    log::info!("seed: {seed}");

    let mut renderer = HeadlessRenderer::default();
    let mut audio = SilentAudio::default();
    let mut assets = NameAssets::default();
    let mut input = ScriptedInput { frame: 0 };

    let mut host = SceneHost::new(Settings::default(), Tuning::default(), seed, &mut assets);

    // One minute of play at 60 Hz
    for frame in 0..3600 {
        input.frame = frame;
        host.frame(&mut renderer, &mut audio, &input, &mut assets, SIM_DT);
    }

    log::info!(
        "demo finished: {} frames, {} draw commands, {} sound cues, high score {}",
        renderer.frames,
        renderer.draws,
        audio.cues,
        host.high_score()
    );
}
