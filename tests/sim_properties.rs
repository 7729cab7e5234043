//! Property tests for the ship state machine and the bounce reaction

use glam::Vec2;
use proptest::prelude::*;

use astro_raid::consts::{SHIP_SIZE, WORLD_HEIGHT, WORLD_WIDTH};
use astro_raid::sim::{MovePolicy, Ship, bounce_pair};

fn ship(vel: Vec2) -> Ship {
    Ship::new(Vec2::new(100.0, 100.0), vel, 3, MovePolicy::Bounce)
}

proptest! {
    /// The exchange is a pure function of the two input velocities
    #[test]
    fn bounce_is_deterministic(
        ax in -500.0f32..500.0, ay in -500.0f32..500.0,
        bx in -500.0f32..500.0, by in -500.0f32..500.0,
    ) {
        let (mut a1, mut b1) = (ship(Vec2::new(ax, ay)), ship(Vec2::new(bx, by)));
        let (mut a2, mut b2) = (ship(Vec2::new(ax, ay)), ship(Vec2::new(bx, by)));
        bounce_pair(&mut a1, &mut b1);
        bounce_pair(&mut a2, &mut b2);
        prop_assert_eq!(a1.vel, a2.vel);
        prop_assert_eq!(b1.vel, b2.vel);
    }

    /// A nonzero component comes back exactly negated; a zero component
    /// inherits half the partner's and is then negated.
    #[test]
    fn bounce_negates_per_axis(
        ax in -500.0f32..500.0,
        bx in -500.0f32..500.0,
    ) {
        let mut a = ship(Vec2::new(ax, 0.0));
        let mut b = ship(Vec2::new(bx, 0.0));
        bounce_pair(&mut a, &mut b);
        if ax != 0.0 {
            prop_assert_eq!(a.vel.x, -ax);
        } else {
            prop_assert_eq!(a.vel.x, -bx / 2.0);
        }
        if bx != 0.0 {
            prop_assert_eq!(b.vel.x, -bx);
        }
    }

    /// The window closes exactly on the nth step, never earlier
    #[test]
    fn invulnerability_lasts_exactly_n_steps(n in 1u32..400) {
        let mut s = ship(Vec2::ZERO);
        s.grant_invulnerability(n);
        for _ in 0..n - 1 {
            s.step_invulnerability();
            prop_assert!(s.is_invulnerable());
        }
        s.step_invulnerability();
        prop_assert!(!s.is_invulnerable());
    }

    /// Damage never lands while a window is open
    #[test]
    fn no_damage_through_a_window(n in 1u32..400, amount in 1i32..10) {
        let mut s = ship(Vec2::ZERO);
        s.grant_invulnerability(n);
        let hull = s.hull;
        prop_assert!(!s.apply_damage(amount, 50));
        prop_assert_eq!(s.hull, hull);
    }

    /// The player clamp keeps the ship inside the world no matter the input
    #[test]
    fn player_never_leaves_the_world(
        px in 0.0f32..(WORLD_WIDTH - SHIP_SIZE),
        py in 0.0f32..(WORLD_HEIGHT - SHIP_SIZE),
        vx in -2000.0f32..2000.0,
        vy in -2000.0f32..2000.0,
        steps in 1usize..120,
    ) {
        let mut s = Ship::new(Vec2::new(px, py), Vec2::new(vx, vy), 3, MovePolicy::Player);
        for _ in 0..steps {
            s.update(1.0 / 60.0, Vec2::ZERO);
            prop_assert!(s.pos.x >= 0.0 && s.pos.x + s.size.x <= WORLD_WIDTH);
            prop_assert!(s.pos.y >= 0.0 && s.pos.y + s.size.y <= WORLD_HEIGHT);
        }
    }
}
