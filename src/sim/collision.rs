//! Collision detection and the ordered resolution rule table
//!
//! Candidacy is an axis-aligned bounding-box overlap; resolution is
//! type-specific and runs in a fixed rule order each frame. Rules only set
//! `destroyed` flags - no collection is mutated while a rule iterates, and
//! the orchestrator compacts everything once after the pass.

use glam::Vec2;
use rand::Rng;

use super::ship::bounce_pair;
use super::state::{GameEvent, GameState, Pickup, PickupKind, StateParts};

/// Axis-aligned bounding box (min corner inclusive, strict overlap test)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    pub min: Vec2,
    pub max: Vec2,
}

impl Aabb {
    pub fn from_pos_size(pos: Vec2, size: Vec2) -> Self {
        Self {
            min: pos,
            max: pos + size,
        }
    }

    /// True if the interiors intersect. Touching edges do not count.
    pub fn overlaps(&self, other: &Aabb) -> bool {
        self.min.x < other.max.x
            && self.max.x > other.min.x
            && self.min.y < other.max.y
            && self.max.y > other.min.y
    }
}

/// Collidable categories, the tags the rule table dispatches on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    Player,
    Enemy,
    Bullet,
    Pickup,
}

/// One entry of the ordered rule table: which category pair it resolves,
/// whether it is suppressed while the player is invulnerable, and the
/// resolver that applies the reactions.
pub struct Rule {
    pub initiator: Category,
    pub target: Category,
    pub skip_while_player_shielded: bool,
    resolve: fn(&mut GameState),
}

/// The fixed per-frame rule order. Damage-causing rules (1-3) are gated on
/// the player's invulnerability; the pickup rule always runs.
pub static RULES: [Rule; 4] = [
    Rule {
        initiator: Category::Bullet,
        target: Category::Enemy,
        skip_while_player_shielded: true,
        resolve: bullets_vs_enemies,
    },
    Rule {
        initiator: Category::Enemy,
        target: Category::Enemy,
        skip_while_player_shielded: true,
        resolve: enemies_vs_enemies,
    },
    Rule {
        initiator: Category::Player,
        target: Category::Enemy,
        skip_while_player_shielded: true,
        resolve: player_vs_enemies,
    },
    Rule {
        initiator: Category::Player,
        target: Category::Pickup,
        skip_while_player_shielded: false,
        resolve: player_vs_pickups,
    },
];

/// Run every applicable rule in table order
pub fn resolve_collisions(state: &mut GameState) {
    let shielded = state.player.is_invulnerable();
    for rule in &RULES {
        if rule.skip_while_player_shielded && shielded {
            continue;
        }
        (rule.resolve)(state);
    }
}

/// Rule 1: each live bullet against each live enemy. The bullet dies on its
/// first hit and stops testing; the enemy takes one point of damage. A kill
/// awards score and may drop a pickup at the enemy's former position.
fn bullets_vs_enemies(state: &mut GameState) {
    let StateParts {
        rng,
        round,
        enemies,
        bullets,
        pickups,
        tuning,
        events,
        ..
    } = state.parts();

    for bullet in bullets.iter_mut() {
        if bullet.destroyed {
            continue;
        }
        for enemy in enemies.iter_mut() {
            if enemy.destroyed {
                continue;
            }
            if !bullet.aabb().overlaps(&enemy.aabb()) {
                continue;
            }
            bullet.destroyed = true;
            if enemy.apply_damage(1, tuning.damage_invuln_ticks) && enemy.destroyed {
                events.push(GameEvent::EnemyDestroyed { pos: enemy.pos });
                round.score += tuning.score_per_kill;
                if rng.random_bool(tuning.drop_chance) {
                    let kind = if rng.random_bool(0.5) {
                        PickupKind::Life
                    } else {
                        PickupKind::Shield
                    };
                    pickups.push(Pickup::new(enemy.pos, kind, tuning.pickup_drift));
                }
            }
            break;
        }
    }
}

/// Rule 2: every unordered pair of distinct live enemies that overlap
/// exchanges velocities. No damage results.
fn enemies_vs_enemies(state: &mut GameState) {
    let enemies = &mut state.enemies;
    for i in 0..enemies.len() {
        if enemies[i].destroyed {
            continue;
        }
        for j in i + 1..enemies.len() {
            if enemies[j].destroyed {
                continue;
            }
            if enemies[i].aabb().overlaps(&enemies[j].aabb()) {
                let (head, tail) = enemies.split_at_mut(j);
                bounce_pair(&mut head[i], &mut tail[0]);
            }
        }
    }
}

/// Rule 3: enemies touching the player bounce both sides, are destroyed
/// outright, and cost the player one hull point through `apply_damage`.
fn player_vs_enemies(state: &mut GameState) {
    let StateParts {
        player,
        enemies,
        tuning,
        events,
        ..
    } = state.parts();

    for enemy in enemies.iter_mut() {
        if enemy.destroyed {
            continue;
        }
        if !player.aabb().overlaps(&enemy.aabb()) {
            continue;
        }
        bounce_pair(player, enemy);
        enemy.destroyed = true;
        if player.apply_damage(1, tuning.damage_invuln_ticks) {
            events.push(GameEvent::PlayerDamaged);
        }
    }
}

/// Rule 4: pickups touching the player apply their effect and disappear.
/// Evaluated even while the player is invulnerable.
fn player_vs_pickups(state: &mut GameState) {
    let StateParts {
        player,
        pickups,
        tuning,
        events,
        ..
    } = state.parts();

    for pickup in pickups.iter_mut() {
        if pickup.destroyed {
            continue;
        }
        if !pickup.aabb().overlaps(&player.aabb()) {
            continue;
        }
        match pickup.kind {
            PickupKind::Life => player.hull += 1,
            PickupKind::Shield => player.grant_invulnerability(tuning.shield_invuln_ticks),
        }
        pickup.destroyed = true;
        events.push(GameEvent::PickupCollected { kind: pickup.kind });
    }
}
