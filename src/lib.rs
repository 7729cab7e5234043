//! Astro Raid - a top-down arcade shooter
//!
//! Core modules:
//! - `sim`: Deterministic simulation (movement, collisions, rounds)
//! - `scene`: Menu / gameplay / game-over scenes and scene switching
//! - `render`, `audio`, `input`, `assets`: narrow interfaces to the platform shell
//! - `tuning`: Data-driven game balance

pub mod assets;
pub mod audio;
pub mod highscores;
pub mod input;
pub mod render;
pub mod scene;
pub mod settings;
pub mod sim;
pub mod tuning;

pub use highscores::HighScoreStore;
pub use settings::Settings;
pub use tuning::Tuning;

/// Game configuration constants
pub mod consts {
    /// Fixed simulation timestep (60 Hz, one tick per displayed frame)
    pub const SIM_DT: f32 = 1.0 / 60.0;

    /// World dimensions (world units, y-up, origin at bottom-left)
    pub const WORLD_WIDTH: f32 = 800.0;
    pub const WORLD_HEIGHT: f32 = 640.0;

    /// AABB edge lengths
    pub const SHIP_SIZE: f32 = 90.0;
    pub const PICKUP_SIZE: f32 = 60.0;
    pub const BULLET_SIZE: f32 = 10.0;

    /// Player start pose
    pub const PLAYER_START_X: f32 = 30.0;
    pub const PLAYER_START_Y: f32 = WORLD_HEIGHT / 2.0 - 50.0;

    /// Enemies enter at the trailing (right) edge, inset by this much
    pub const SPAWN_EDGE_INSET: f32 = 50.0;
}
