//! Fire-and-forget sound interface
//!
//! The core requests cues; the shell owns decoding, mixing and output.

/// Sound effect types
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SoundCue {
    /// Player fired a bullet
    Shot,
    /// Player took damage
    PlayerHit,
    /// Enemy destroyed by a bullet
    Explosion,
    /// Pickup collected
    PickupCollect,
    /// Run ended
    GameOver,
}

/// Plays sound cues. No return value is ever consumed by the core.
pub trait AudioPlayer {
    /// Play a cue at full volume
    fn play(&mut self, cue: SoundCue) {
        self.play_at_volume(cue, 1.0);
    }

    /// Play a cue at the given volume (0.0 - 1.0)
    fn play_at_volume(&mut self, cue: SoundCue, volume: f32);
}
