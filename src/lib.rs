//! Bluebook - a dodge-and-collect arcade survival game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (entities, spawning, collisions, game state)
//! - `grade`: Final-score grading on the 200-item exam scale
//! - `highscore`: Best-score persistence port (JSON file / in-memory)
//! - `session`: Shell wiring the simulation to a high-score store
//! - `tuning`: Runtime-tunable game balance

pub mod grade;
pub mod highscore;
pub mod session;
pub mod sim;
pub mod tuning;

pub use highscore::{HighScoreStore, JsonFileStore, MemoryStore};
pub use session::Session;
pub use tuning::Tuning;

use glam::Vec2;

/// Game configuration constants
pub mod consts {
    /// Fixed logical timestep (60 Hz)
    pub const SIM_DT: f32 = 1.0 / 60.0;

    /// Arena dimensions
    pub const ARENA_WIDTH: f32 = 800.0;
    pub const ARENA_HEIGHT: f32 = 600.0;

    /// Player defaults (square bounding box, top-left anchored)
    pub const PLAYER_SIZE: f32 = 50.0;
    pub const PLAYER_SPEED: f32 = 300.0;

    /// Projectile defaults - spawned at the arena center, aimed at the player
    pub const PROJECTILE_SPEED: f32 = 240.0;
    /// Half-extent of the projectile's collision box
    pub const PROJECTILE_SIZE: f32 = 15.0;
    /// Base interval between spawns (one per second until the difficulty ramps)
    pub const BASE_SPAWN_INTERVAL: f32 = 1.0;
    /// Maximum aim deviation in degrees (±60° = 120° total cone)
    pub const MAX_ANGLE_DEVIATION: f32 = 60.0;

    /// Half-extent of the collectible's collision box
    pub const COLLECTIBLE_SIZE: f32 = 15.0;
    /// Collectibles never land closer than this to the arena center
    pub const MIN_DISTANCE_FROM_CENTER: f32 = 150.0;
    /// Strip at the top of the arena reserved for the HUD
    pub const COLLECTIBLE_TOP_MARGIN: f32 = 30.0;

    /// Scoring
    pub const MAX_MULTIPLIER: u32 = 5;
    /// Seconds to reach the next pickup before the multiplier expires
    pub const MULTIPLIER_WINDOW: f32 = 5.0;
    /// Points per difficulty level
    pub const SCORE_PER_LEVEL: u32 = 5;
    /// Spawn-interval divisor growth per level above 1
    pub const DIFFICULTY_STEP: f32 = 0.2;

    /// The exam is graded out of this many items
    pub const EXAM_TOTAL_ITEMS: u32 = 200;

    /// Effects
    pub const MAX_PARTICLES: usize = 40;
    pub const POPUP_LIFETIME: f32 = 1.5;
}

/// Angle from one point to another, in radians (`atan2` convention)
#[inline]
pub fn angle_to(from: Vec2, to: Vec2) -> f32 {
    let d = to - from;
    d.y.atan2(d.x)
}

/// Unit vector pointing along `theta` radians
#[inline]
pub fn unit_from_angle(theta: f32) -> Vec2 {
    Vec2::new(theta.cos(), theta.sin())
}
