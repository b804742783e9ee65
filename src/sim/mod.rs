//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only
//! - Seeded RNG only
//! - No rendering or platform dependencies

pub mod collision;
pub mod entity;
pub mod spawn;
pub mod state;
pub mod tick;

pub use collision::{circles_overlap, within_range};
pub use entity::{Boss, Bullet, Enemy, EnemyKind, HostileBullet, HostileKind, Particle, PowerUp, PowerUpKind};
pub use spawn::Director;
pub use state::{GameEvent, GamePhase, GameState, Player};
pub use tick::{TickInput, tick};
