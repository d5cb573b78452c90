//! Runtime-tunable game balance
//!
//! Mirrors every constant in [`crate::consts`]. A tuning file can override
//! any subset of fields; missing keys fall back to the compile-time defaults.

use std::path::Path;

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::*;

/// Tunable simulation parameters
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    /// Arena width in pixels
    pub arena_width: f32,
    /// Arena height in pixels
    pub arena_height: f32,

    /// Player bounding-box side length
    pub player_size: f32,
    /// Player speed in pixels per second
    pub player_speed: f32,

    /// Projectile speed in pixels per second
    pub projectile_speed: f32,
    /// Projectile collision-box half-extent
    pub projectile_size: f32,
    /// Seconds between spawns at level 1
    pub base_spawn_interval: f32,
    /// Aim deviation cone half-angle in degrees
    pub max_angle_deviation: f32,

    /// Collectible collision-box half-extent
    pub collectible_size: f32,
    /// Minimum collectible distance from the arena center
    pub min_distance_from_center: f32,
    /// HUD strip at the top of the arena where collectibles never land
    pub collectible_top_margin: f32,

    /// Multiplier ceiling
    pub max_multiplier: u32,
    /// Seconds allowed between pickups to keep the streak alive
    pub multiplier_window: f32,
    /// Points per difficulty level
    pub score_per_level: u32,
    /// Spawn-interval divisor growth per level above 1
    pub difficulty_step: f32,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            arena_width: ARENA_WIDTH,
            arena_height: ARENA_HEIGHT,
            player_size: PLAYER_SIZE,
            player_speed: PLAYER_SPEED,
            projectile_speed: PROJECTILE_SPEED,
            projectile_size: PROJECTILE_SIZE,
            base_spawn_interval: BASE_SPAWN_INTERVAL,
            max_angle_deviation: MAX_ANGLE_DEVIATION,
            collectible_size: COLLECTIBLE_SIZE,
            min_distance_from_center: MIN_DISTANCE_FROM_CENTER,
            collectible_top_margin: COLLECTIBLE_TOP_MARGIN,
            max_multiplier: MAX_MULTIPLIER,
            multiplier_window: MULTIPLIER_WINDOW,
            score_per_level: SCORE_PER_LEVEL,
            difficulty_step: DIFFICULTY_STEP,
        }
    }
}

impl Tuning {
    /// Arena extent as a vector
    pub fn arena(&self) -> Vec2 {
        Vec2::new(self.arena_width, self.arena_height)
    }

    /// Arena center point
    pub fn center(&self) -> Vec2 {
        self.arena() / 2.0
    }

    /// Load tuning from a JSON file, falling back to defaults on any error
    pub fn load(path: &Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(json) => match serde_json::from_str(&json) {
                Ok(tuning) => {
                    log::info!("Loaded tuning from {}", path.display());
                    tuning
                }
                Err(e) => {
                    log::warn!("Invalid tuning file {}: {e}", path.display());
                    Self::default()
                }
            },
            Err(e) => {
                log::warn!("Could not read tuning file {}: {e}", path.display());
                Self::default()
            }
        }
    }
}
