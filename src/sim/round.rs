//! Wave spawning and round outcome evaluation
//!
//! Enemies are drip-fed into the round on a fixed cadence until the quota
//! is met; the round ends when every spawned enemy is gone, or when the
//! player is destroyed.

use glam::Vec2;
use rand::Rng;

use super::ship::{MovePolicy, Ship};
use super::state::GameState;
use crate::consts::{SHIP_SIZE, SPAWN_EDGE_INSET, WORLD_HEIGHT, WORLD_WIDTH};
use crate::tuning::Tuning;

/// Per-round bookkeeping. Created at round start, discarded when the round
/// ends; the score field carries across rounds by explicit copy.
#[derive(Debug, Clone, Copy)]
pub struct Round {
    /// 1-based round number
    pub number: u32,
    /// Running score, carried between rounds
    pub score: u32,
    /// Enemies this round will spawn in total
    pub quota: u32,
    /// Enemies spawned so far
    pub spawned: u32,
    /// Accumulates frame time toward the next spawn
    pub spawn_clock: f32,
    /// Remaining "round complete" banner time
    pub banner_clock: f32,
    /// Base enemy speed for this round
    pub enemy_speed: f32,
}

impl Round {
    /// Round 1 of a fresh run
    pub fn first(tuning: &Tuning) -> Self {
        Self {
            number: 1,
            score: 0,
            quota: tuning.base_quota,
            spawned: 0,
            spawn_clock: 0.0,
            banner_clock: 0.0,
            enemy_speed: tuning.enemy_base_speed,
        }
    }

    /// The round after this one: bigger quota, faster enemies, same score
    pub fn next(&self, tuning: &Tuning) -> Self {
        Self {
            number: self.number + 1,
            score: self.score,
            quota: self.quota + tuning.quota_step,
            spawned: 0,
            spawn_clock: 0.0,
            banner_clock: 0.0,
            enemy_speed: self.enemy_speed + tuning.enemy_speed_step,
        }
    }
}

/// How the frame's transition check came out
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundOutcome {
    Ongoing,
    Victory,
    Defeat,
}

/// Advance the spawn accumulator and emit at most one enemy. New enemies
/// enter at the trailing edge with random vertical placement and jittered
/// speed, moving left and up; a fraction of them home on the player
/// instead of wall-bouncing.
pub fn advance_spawner(state: &mut GameState, dt: f32) {
    let round = &mut state.round;
    round.spawn_clock += dt;
    if round.spawn_clock < state.tuning.spawn_interval || round.spawned >= round.quota {
        return;
    }
    round.spawn_clock = 0.0;
    round.spawned += 1;

    let rng = &mut state.rng;
    let tuning = &state.tuning;
    let pos = Vec2::new(
        WORLD_WIDTH - SPAWN_EDGE_INSET,
        rng.random_range(0.0..WORLD_HEIGHT - SHIP_SIZE),
    );
    let vel = Vec2::new(
        -(round.enemy_speed + rng.random_range(0.0..tuning.spawn_speed_jitter)),
        round.enemy_speed + rng.random_range(0.0..tuning.spawn_speed_jitter),
    );
    let policy = if rng.random_bool(tuning.homing_chance) {
        MovePolicy::Homing {
            speed: tuning.homing_speed,
        }
    } else {
        MovePolicy::Bounce
    };
    state
        .enemies
        .push(Ship::new(pos, vel, tuning.enemy_hull, policy));
    log::debug!(
        "spawned enemy {}/{} at y={:.0}",
        round.spawned,
        round.quota,
        pos.y
    );
}

/// Evaluate the round. Victory requires both an empty live-enemy set and a
/// met quota, so a round never ends while more enemies are queued. Defeat
/// is checked first: a destroyed player is terminal even if the last enemy
/// died in the same frame.
pub fn evaluate(state: &GameState) -> RoundOutcome {
    if state.player.destroyed {
        RoundOutcome::Defeat
    } else if state.enemies.is_empty() && state.round.spawned >= state.round.quota {
        RoundOutcome::Victory
    } else {
        RoundOutcome::Ongoing
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn quota_state(quota: u32) -> GameState {
        GameState::new(
            99,
            Tuning {
                base_quota: quota,
                ..Tuning::default()
            },
        )
    }

    #[test]
    fn spawner_waits_for_the_interval() {
        let mut state = quota_state(5);
        advance_spawner(&mut state, 0.5);
        assert!(state.enemies.is_empty());
        advance_spawner(&mut state, 0.5);
        assert_eq!(state.enemies.len(), 1);
        assert_eq!(state.round.spawned, 1);
        assert_eq!(state.round.spawn_clock, 0.0);
    }

    #[test]
    fn spawner_stops_at_quota() {
        let mut state = quota_state(2);
        for _ in 0..10 {
            advance_spawner(&mut state, 1.0);
        }
        assert_eq!(state.enemies.len(), 2);
        assert_eq!(state.round.spawned, 2);
    }

    #[test]
    fn spawned_enemy_enters_at_trailing_edge_moving_left() {
        let mut state = quota_state(1);
        advance_spawner(&mut state, 1.0);
        let enemy = &state.enemies[0];
        assert_eq!(enemy.pos.x, WORLD_WIDTH - SPAWN_EDGE_INSET);
        assert!(enemy.pos.y >= 0.0 && enemy.pos.y <= WORLD_HEIGHT - SHIP_SIZE);
        assert!(enemy.vel.x < 0.0);
        assert!(enemy.vel.y > 0.0);
    }

    #[test]
    fn no_victory_while_spawns_remain() {
        // quota 5, spawned 3, zero live enemies: the round must not end
        let mut state = quota_state(5);
        state.round.spawned = 3;
        assert_eq!(evaluate(&state), RoundOutcome::Ongoing);
    }

    #[test]
    fn victory_needs_empty_set_and_met_quota() {
        let mut state = quota_state(5);
        state.round.spawned = 5;
        assert_eq!(evaluate(&state), RoundOutcome::Victory);
    }

    #[test]
    fn live_enemies_block_victory() {
        let mut state = quota_state(1);
        state.round.spawned = 1;
        advance_spawner(&mut state, 0.0); // no time passed, nothing spawns
        state.enemies.push(Ship::new(
            Vec2::new(400.0, 300.0),
            Vec2::ZERO,
            1,
            MovePolicy::Bounce,
        ));
        assert_eq!(evaluate(&state), RoundOutcome::Ongoing);
    }

    #[test]
    fn destroyed_player_is_defeat() {
        let mut state = quota_state(5);
        state.player.destroyed = true;
        assert_eq!(evaluate(&state), RoundOutcome::Defeat);
    }

    #[test]
    fn round_progression_steps_quota_and_speed() {
        let tuning = Tuning::default();
        let first = Round::first(&tuning);
        let second = first.next(&tuning);
        assert_eq!(second.number, 2);
        assert_eq!(second.quota, tuning.base_quota + tuning.quota_step);
        assert!((second.enemy_speed - (tuning.enemy_base_speed + tuning.enemy_speed_step)).abs()
            < f32::EPSILON);
    }

    #[test]
    fn deterministic_for_a_seed() {
        let tuning = Tuning::default();
        let mut a = GameState::new(1234, tuning);
        let mut b = GameState::new(1234, tuning);
        for _ in 0..5 {
            advance_spawner(&mut a, 1.0);
            advance_spawner(&mut b, 1.0);
        }
        for (ea, eb) in a.enemies.iter().zip(&b.enemies) {
            assert_eq!(ea.pos, eb.pos);
            assert_eq!(ea.vel, eb.vel);
            assert_eq!(ea.policy, eb.policy);
        }
    }
}
