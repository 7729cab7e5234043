//! Per-frame simulation step
//!
//! One `tick` advances the whole simulation in a fixed order: spawn,
//! player, bullets, enemies, pickups, collisions, transitions. Rendering
//! is not part of the simulation; the gameplay scene draws from the state
//! after ticking.

use glam::Vec2;

use super::round::{self, RoundOutcome};
use super::state::{Bullet, GameEvent, GamePhase, GameState};
use crate::consts::BULLET_SIZE;

/// Input commands for a single tick. Every flag is edge-triggered
/// ("was this control just pressed").
#[derive(Debug, Clone, Copy, Default)]
pub struct TickInput {
    pub left: bool,
    pub right: bool,
    pub up: bool,
    pub down: bool,
    pub fire: bool,
}

/// Advance the game state by one frame of `dt` seconds
pub fn tick(state: &mut GameState, input: &TickInput, dt: f32) {
    match state.phase {
        GamePhase::GameOver => return,
        GamePhase::RoundClear => {
            // Gameplay stops under the banner; only the timer runs
            state.round.banner_clock -= dt;
            if state.round.banner_clock <= 0.0 {
                state.start_next_round();
            }
            return;
        }
        GamePhase::Playing => {}
    }

    // 1. Spawn step
    round::advance_spawner(state, dt);

    // 2. Player: invulnerability timer, input impulses, firing, clamped move
    state.player.step_invulnerability();
    apply_player_input(state, input);
    state.player.update(dt, Vec2::ZERO);
    let target = state.player.center();

    // 3. Bullets move and cull themselves off-world
    for bullet in &mut state.bullets {
        bullet.update(dt);
    }

    // 4. Enemies run their movement policy toward the player's position
    for enemy in &mut state.enemies {
        enemy.step_invulnerability();
        enemy.update(dt, target);
    }

    // 5. Pickups drift
    for pickup in &mut state.pickups {
        pickup.update(dt);
    }

    // 6. Collision pass, then one compaction of everything flagged
    super::collision::resolve_collisions(state);
    state.purge_destroyed();

    // 7. (rendering happens outside the simulation)

    // 8. Round transition and defeat checks
    match round::evaluate(state) {
        RoundOutcome::Victory => {
            state.push_event(GameEvent::RoundCleared {
                number: state.round.number,
            });
            state.round.banner_clock = state.tuning.banner_duration;
            state.phase = GamePhase::RoundClear;
        }
        RoundOutcome::Defeat => {
            state.push_event(GameEvent::GameOver {
                score: state.round.score,
            });
            state.phase = GamePhase::GameOver;
        }
        RoundOutcome::Ongoing => {}
    }
}

/// Directional presses add a fixed velocity impulse; fire spawns a bullet
/// at the ship's right edge.
fn apply_player_input(state: &mut GameState, input: &TickInput) {
    let thrust = state.tuning.player_thrust;
    if input.left {
        state.player.vel.x -= thrust;
    }
    if input.right {
        state.player.vel.x += thrust;
    }
    if input.down {
        state.player.vel.y -= thrust;
    }
    if input.up {
        state.player.vel.y += thrust;
    }
    if input.fire {
        let muzzle = Vec2::new(
            state.player.pos.x + state.player.size.x - 5.0,
            state.player.pos.y + state.player.size.y / 2.0 - BULLET_SIZE / 2.0,
        );
        let vel = Vec2::new(state.tuning.bullet_speed, 0.0);
        state.bullets.push(Bullet::new(muzzle, vel));
        state.push_event(GameEvent::ShotFired);
    }
}
