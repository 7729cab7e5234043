//! Data-driven game balance
//!
//! Every number the design might want to retune lives here rather than in
//! the simulation code. Velocities are world units per second; durations
//! are seconds except the invulnerability windows, which count ticks.

use serde::{Deserialize, Serialize};

/// Gameplay balance knobs, loadable from JSON
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    /// Player starting hull points
    pub player_hull: i32,
    /// Enemy hull points at spawn
    pub enemy_hull: i32,
    /// Invulnerability window after taking damage (ticks)
    pub damage_invuln_ticks: u32,
    /// Invulnerability window granted by the shield pickup (ticks)
    pub shield_invuln_ticks: u32,
    /// Velocity impulse per directional key press
    pub player_thrust: f32,
    /// Bullet muzzle speed (rightward)
    pub bullet_speed: f32,
    /// Leftward drift speed of pickups
    pub pickup_drift: f32,
    /// Seconds between enemy spawns
    pub spawn_interval: f32,
    /// Upper bound of the random speed jitter added at spawn
    pub spawn_speed_jitter: f32,
    /// Enemy speed in round 1
    pub enemy_base_speed: f32,
    /// Enemy speed gained per round
    pub enemy_speed_step: f32,
    /// Fixed speed of homing enemies
    pub homing_speed: f32,
    /// Chance a spawned enemy homes on the player instead of bouncing
    pub homing_chance: f64,
    /// Chance a destroyed enemy drops a pickup
    pub drop_chance: f64,
    /// Score awarded per enemy destroyed by a bullet
    pub score_per_kill: u32,
    /// Enemy quota in round 1
    pub base_quota: u32,
    /// Quota gained per round
    pub quota_step: u32,
    /// Seconds the "round complete" banner stays up
    pub banner_duration: f32,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            player_hull: 3,
            enemy_hull: 1,
            damage_invuln_ticks: 50,
            shield_invuln_ticks: 180,
            player_thrust: 180.0,
            bullet_speed: 180.0,
            pickup_drift: 60.0,
            spawn_interval: 1.0,
            spawn_speed_jitter: 240.0,
            enemy_base_speed: 60.0,
            enemy_speed_step: 60.0,
            homing_speed: 120.0,
            homing_chance: 0.25,
            drop_chance: 0.2,
            score_per_kill: 10,
            base_quota: 10,
            quota_step: 10,
            banner_duration: 3.0,
        }
    }
}

impl Tuning {
    /// Parse a tuning override from JSON. Missing fields keep their defaults.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_sane() {
        let t = Tuning::default();
        assert!(t.player_hull > 0);
        assert!(t.enemy_hull > 0);
        assert!(t.spawn_interval > 0.0);
        assert!((0.0..=1.0).contains(&t.drop_chance));
        assert!((0.0..=1.0).contains(&t.homing_chance));
    }

    #[test]
    fn partial_json_keeps_defaults() {
        let t = Tuning::from_json(r#"{ "base_quota": 5, "drop_chance": 1.0 }"#).unwrap();
        assert_eq!(t.base_quota, 5);
        assert_eq!(t.drop_chance, 1.0);
        assert_eq!(t.quota_step, Tuning::default().quota_step);
        assert_eq!(t.score_per_kill, Tuning::default().score_per_kill);
    }

    #[test]
    fn garbage_json_is_an_error() {
        assert!(Tuning::from_json("not json").is_err());
    }
}
