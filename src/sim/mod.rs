//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only, with `dt` passed in explicitly
//! - Seeded RNG only
//! - No rendering, audio, or platform dependencies

pub mod collision;
pub mod effects;
pub mod spawn;
pub mod state;
pub mod tick;

pub use collision::Aabb;
pub use effects::{Effects, Particle, ScorePopup};
pub use state::{Collectible, GameEvent, GamePhase, GameState, Player, Projectile};
pub use tick::{TickInput, interval_for_level, level_for_score, tick};
