//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed timestep, one `tick` per host frame
//! - Seeded RNG only
//! - Stable iteration order (insertion order, pruned once per frame)
//! - No rendering, audio or platform dependencies

pub mod collision;
pub mod spawn;
pub mod state;
pub mod tick;

pub use collision::{Hitbox, collided};
pub use spawn::{SpawnKind, due_spawns};
pub use state::{
    Arena, Enemy, EnemyBullet, EnemyKind, GameEvent, GamePhase, GameState, HitOutcome, Motion,
    Player, PlayerBullet,
};
pub use tick::{TickInput, tick};
