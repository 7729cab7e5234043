//! Ship record, movement policies, and the damage/invulnerability state machine
//!
//! Player and enemy ships share one record; the behavioral differences are a
//! construction-time `MovePolicy`, not a type hierarchy. A ship is `Active`
//! while `invuln_ticks == 0`, `Invulnerable` while the counter runs, and
//! terminally `Destroyed` once `hull <= 0`.

use glam::Vec2;

use super::collision::Aabb;
use crate::consts::{SHIP_SIZE, WORLD_HEIGHT, WORLD_WIDTH};

/// Per-frame velocity policy, fixed at construction
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MovePolicy {
    /// Input-driven, hard-clamped to the world rectangle
    Player,
    /// Reflects the offending velocity component at world bounds
    Bounce,
    /// Re-aims at the target point every frame at a fixed speed
    Homing { speed: f32 },
}

/// Any ship in the simulation (player or enemy)
#[derive(Debug, Clone)]
pub struct Ship {
    pub pos: Vec2,
    pub vel: Vec2,
    pub size: Vec2,
    pub hull: i32,
    /// Frames of invulnerability remaining; 0 means Active
    pub invuln_ticks: u32,
    pub destroyed: bool,
    pub policy: MovePolicy,
}

impl Ship {
    pub fn new(pos: Vec2, vel: Vec2, hull: i32, policy: MovePolicy) -> Self {
        Self {
            pos,
            vel,
            size: Vec2::splat(SHIP_SIZE),
            hull,
            invuln_ticks: 0,
            destroyed: false,
            policy,
        }
    }

    pub fn aabb(&self) -> Aabb {
        Aabb::from_pos_size(self.pos, self.size)
    }

    pub fn center(&self) -> Vec2 {
        self.pos + self.size / 2.0
    }

    pub fn is_invulnerable(&self) -> bool {
        self.invuln_ticks > 0
    }

    /// Subtract `amount` hull unless currently invulnerable. A hit starts the
    /// default invulnerability window; at `hull <= 0` the ship is terminally
    /// destroyed. Returns whether damage was actually applied, so callers can
    /// fire sound cues only on real hits.
    pub fn apply_damage(&mut self, amount: i32, invuln_window: u32) -> bool {
        if self.is_invulnerable() {
            return false;
        }
        self.hull -= amount;
        self.invuln_ticks = invuln_window;
        if self.hull <= 0 {
            self.destroyed = true;
        }
        true
    }

    /// Force a fresh invulnerability window regardless of the current timer.
    /// Does not touch hull. Used by the shield pickup.
    pub fn grant_invulnerability(&mut self, ticks: u32) {
        self.invuln_ticks = ticks;
    }

    /// Count the invulnerability window down by one frame
    pub fn step_invulnerability(&mut self) {
        if self.invuln_ticks > 0 {
            self.invuln_ticks -= 1;
        }
    }

    /// Apply this ship's velocity policy for the frame, then integrate.
    /// `target` is only read by homing ships.
    pub fn update(&mut self, dt: f32, target: Vec2) {
        match self.policy {
            MovePolicy::Player => self.clamp_to_world(dt),
            MovePolicy::Bounce => self.bounce_at_bounds(dt),
            MovePolicy::Homing { speed } => self.steer_toward(speed, target),
        }
        self.pos += self.vel * dt;
    }

    /// Player clamping: if the projected next position would leave the world
    /// on an axis, zero that velocity component and snap to the boundary.
    fn clamp_to_world(&mut self, dt: f32) {
        let next = self.pos + self.vel * dt;
        if next.x < 0.0 {
            self.vel.x = 0.0;
            self.pos.x = 0.0;
        } else if next.x + self.size.x > WORLD_WIDTH {
            self.vel.x = 0.0;
            self.pos.x = WORLD_WIDTH - self.size.x;
        }
        if next.y < 0.0 {
            self.vel.y = 0.0;
            self.pos.y = 0.0;
        } else if next.y + self.size.y > WORLD_HEIGHT {
            self.vel.y = 0.0;
            self.pos.y = WORLD_HEIGHT - self.size.y;
        }
    }

    /// Wall bounce: reflect any velocity component whose projected next
    /// position would exit the world.
    fn bounce_at_bounds(&mut self, dt: f32) {
        let next = self.pos + self.vel * dt;
        if next.x < 0.0 || next.x + self.size.x > WORLD_WIDTH {
            self.vel.x = -self.vel.x;
        }
        if next.y < 0.0 || next.y + self.size.y > WORLD_HEIGHT {
            self.vel.y = -self.vel.y;
        }
    }

    /// Homing: fixed speed along the normalized vector toward the target.
    /// At zero distance the direction is undefined; velocity is left
    /// unchanged for this frame.
    fn steer_toward(&mut self, speed: f32, target: Vec2) {
        let to_target = target - self.center();
        if to_target == Vec2::ZERO {
            return;
        }
        self.vel = to_target.normalize() * speed;
    }
}

/// Velocity exchange for two overlapping ships. Per axis: a side with an
/// exactly-zero component inherits half of the other side's (already
/// updated) component, then both sides negate. Approximately elastic, no
/// mass terms.
pub fn bounce_pair(a: &mut Ship, b: &mut Ship) {
    bounce_axis(&mut a.vel.x, &mut b.vel.x);
    bounce_axis(&mut a.vel.y, &mut b.vel.y);
}

fn bounce_axis(a: &mut f32, b: &mut f32) {
    if *a == 0.0 {
        *a += *b / 2.0;
    }
    if *b == 0.0 {
        *b += *a / 2.0;
    }
    *a = -*a;
    *b = -*b;
}
