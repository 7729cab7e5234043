//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Frame-synchronous updates only
//! - Seeded RNG only
//! - No rendering or platform dependencies

pub mod collision;
pub mod round;
pub mod ship;
pub mod state;
pub mod tick;

pub use collision::{Aabb, Category, resolve_collisions};
pub use round::{Round, RoundOutcome};
pub use ship::{MovePolicy, Ship, bounce_pair};
pub use state::{Bullet, GameEvent, GamePhase, GameState, Pickup, PickupKind};
pub use tick::{TickInput, tick};
