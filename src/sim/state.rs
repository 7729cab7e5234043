//! Game state and core simulation types
//!
//! Everything the simulation mutates lives here. The orchestrator in
//! `tick` exclusively owns these collections; entities never outlive the
//! round that spawned them except the player ship.

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;

use super::collision::Aabb;
use super::round::Round;
use super::ship::{MovePolicy, Ship};
use crate::consts::{
    BULLET_SIZE, PICKUP_SIZE, PLAYER_START_X, PLAYER_START_Y, WORLD_HEIGHT, WORLD_WIDTH,
};
use crate::tuning::Tuning;

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GamePhase {
    /// Active gameplay
    Playing,
    /// Victory banner between rounds; gameplay updates stop
    RoundClear,
    /// Run ended; the scene layer takes over
    GameOver,
}

/// Pickup types
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PickupKind {
    /// +1 hull
    Life,
    /// Long invulnerability window
    Shield,
}

/// A player bullet
#[derive(Debug, Clone)]
pub struct Bullet {
    pub pos: Vec2,
    pub vel: Vec2,
    pub size: Vec2,
    pub destroyed: bool,
}

impl Bullet {
    pub fn new(pos: Vec2, vel: Vec2) -> Self {
        Self {
            pos,
            vel,
            size: Vec2::splat(BULLET_SIZE),
            destroyed: false,
        }
    }

    pub fn aabb(&self) -> Aabb {
        Aabb::from_pos_size(self.pos, self.size)
    }

    /// Move; a bullet that exits the world on any side is done
    pub fn update(&mut self, dt: f32) {
        self.pos += self.vel * dt;
        if self.pos.x < 0.0
            || self.pos.x + self.size.x > WORLD_WIDTH
            || self.pos.y < 0.0
            || self.pos.y + self.size.y > WORLD_HEIGHT
        {
            self.destroyed = true;
        }
    }
}

/// A collectible drifting leftward across the world
#[derive(Debug, Clone)]
pub struct Pickup {
    pub pos: Vec2,
    pub vel: Vec2,
    pub size: Vec2,
    pub kind: PickupKind,
    pub destroyed: bool,
}

impl Pickup {
    pub fn new(pos: Vec2, kind: PickupKind, drift: f32) -> Self {
        Self {
            pos,
            vel: Vec2::new(-drift, 0.0),
            size: Vec2::splat(PICKUP_SIZE),
            kind,
            destroyed: false,
        }
    }

    pub fn aabb(&self) -> Aabb {
        Aabb::from_pos_size(self.pos, self.size)
    }

    /// Drift; gone once fully past the left edge
    pub fn update(&mut self, dt: f32) {
        self.pos += self.vel * dt;
        if self.pos.x + self.size.x < 0.0 {
            self.destroyed = true;
        }
    }
}

/// Things that happened during a tick that the shell may want to react to
/// (sound cues, scene transitions). Drained once per frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GameEvent {
    ShotFired,
    PlayerDamaged,
    EnemyDestroyed { pos: Vec2 },
    PickupCollected { kind: PickupKind },
    RoundCleared { number: u32 },
    GameOver { score: u32 },
}

/// Complete simulation state for one run
#[derive(Debug, Clone)]
pub struct GameState {
    /// Run seed for reproducibility
    pub seed: u64,
    pub rng: Pcg32,
    pub phase: GamePhase,
    pub round: Round,
    pub player: Ship,
    pub enemies: Vec<Ship>,
    pub bullets: Vec<Bullet>,
    pub pickups: Vec<Pickup>,
    pub tuning: Tuning,
    events: Vec<GameEvent>,
}

impl GameState {
    /// Fresh run at round 1 with the given seed
    pub fn new(seed: u64, tuning: Tuning) -> Self {
        Self {
            seed,
            rng: Pcg32::seed_from_u64(seed),
            phase: GamePhase::Playing,
            round: Round::first(&tuning),
            player: Self::spawn_player(&tuning),
            enemies: Vec::new(),
            bullets: Vec::new(),
            pickups: Vec::new(),
            tuning,
            events: Vec::new(),
        }
    }

    fn spawn_player(tuning: &Tuning) -> Ship {
        Ship::new(
            Vec2::new(PLAYER_START_X, PLAYER_START_Y),
            Vec2::ZERO,
            tuning.player_hull,
            MovePolicy::Player,
        )
    }

    /// Begin the next round: the player's hull and the running score carry
    /// over, everything else is rebuilt. Called when the victory banner
    /// expires.
    pub fn start_next_round(&mut self) {
        self.round = self.round.next(&self.tuning);
        self.enemies.clear();
        self.bullets.clear();
        self.pickups.clear();
        self.player.pos = Vec2::new(PLAYER_START_X, PLAYER_START_Y);
        self.player.vel = Vec2::ZERO;
        self.player.invuln_ticks = 0;
        self.phase = GamePhase::Playing;
        log::info!(
            "round {} started (quota {}, score {})",
            self.round.number,
            self.round.quota,
            self.round.score
        );
    }

    /// Compact every collection, dropping entities flagged as destroyed.
    /// Runs once per frame, after the collision pass and before the next
    /// frame's spawn step.
    pub fn purge_destroyed(&mut self) {
        self.enemies.retain(|e| !e.destroyed);
        self.bullets.retain(|b| !b.destroyed);
        self.pickups.retain(|p| !p.destroyed);
    }

    pub fn push_event(&mut self, event: GameEvent) {
        self.events.push(event);
    }

    /// Hand this frame's events to the caller, leaving the queue empty
    pub fn take_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }

    /// Split borrows for the collision resolvers, which need several
    /// collections mutable at once.
    pub(crate) fn parts(&mut self) -> StateParts<'_> {
        StateParts {
            rng: &mut self.rng,
            round: &mut self.round,
            player: &mut self.player,
            enemies: &mut self.enemies,
            bullets: &mut self.bullets,
            pickups: &mut self.pickups,
            tuning: &self.tuning,
            events: &mut self.events,
        }
    }
}

/// Disjoint mutable views into a `GameState`
pub(crate) struct StateParts<'a> {
    pub rng: &'a mut Pcg32,
    pub round: &'a mut Round,
    pub player: &'a mut Ship,
    pub enemies: &'a mut Vec<Ship>,
    pub bullets: &'a mut Vec<Bullet>,
    pub pickups: &'a mut Vec<Pickup>,
    pub tuning: &'a Tuning,
    pub events: &'a mut Vec<GameEvent>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bullet_dies_past_right_edge() {
        let mut bullet = Bullet::new(
            Vec2::new(WORLD_WIDTH - 5.0, 100.0),
            Vec2::new(600.0, 0.0),
        );
        bullet.update(1.0 / 60.0);
        assert!(bullet.destroyed);
    }

    #[test]
    fn bullet_inside_world_survives() {
        let mut bullet = Bullet::new(Vec2::new(100.0, 100.0), Vec2::new(180.0, 0.0));
        bullet.update(1.0 / 60.0);
        assert!(!bullet.destroyed);
        assert!(bullet.pos.x > 100.0);
    }

    #[test]
    fn pickup_dies_only_fully_off_left() {
        let mut pickup = Pickup::new(Vec2::new(-PICKUP_SIZE + 1.0, 100.0), PickupKind::Life, 60.0);
        pickup.update(1.0 / 60.0);
        assert!(pickup.destroyed);

        let mut visible = Pickup::new(Vec2::new(-1.0, 100.0), PickupKind::Life, 60.0);
        visible.update(1.0 / 60.0);
        assert!(!visible.destroyed);
    }

    #[test]
    fn next_round_carries_hull_and_score() {
        let tuning = Tuning::default();
        let mut state = GameState::new(7, tuning);
        state.player.hull = 2;
        state.round.score = 120;
        state.round.spawned = state.round.quota;
        state.start_next_round();
        assert_eq!(state.round.number, 2);
        assert_eq!(state.round.score, 120);
        assert_eq!(state.round.quota, tuning.base_quota + tuning.quota_step);
        assert_eq!(state.round.spawned, 0);
        assert_eq!(state.player.hull, 2);
        assert_eq!(state.player.pos, Vec2::new(PLAYER_START_X, PLAYER_START_Y));
        assert!(state.enemies.is_empty());
    }

    #[test]
    fn purge_drops_flagged_entities() {
        let tuning = Tuning::default();
        let mut state = GameState::new(7, tuning);
        state.bullets.push(Bullet::new(Vec2::ZERO, Vec2::ZERO));
        state.bullets.push(Bullet::new(Vec2::ONE, Vec2::ZERO));
        state.bullets[0].destroyed = true;
        state.purge_destroyed();
        assert_eq!(state.bullets.len(), 1);
        assert_eq!(state.bullets[0].pos, Vec2::ONE);
    }
}
