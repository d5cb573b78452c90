//! Gameplay-neutral visual-support state
//!
//! Aura particles (emitted around the player while a multiplier streak is
//! active) and score popups. None of this feeds back into gameplay; it is
//! aged inside the tick so the presentation layer can draw it without
//! owning any timing logic.

use glam::Vec2;
use rand::Rng;
use rand_pcg::Pcg32;

use crate::consts::{MAX_PARTICLES, POPUP_LIFETIME};

/// Seconds between aura emissions while the multiplier is above 1
const AURA_INTERVAL: f32 = 0.05;
/// Particle spawn offset range around the player center, in pixels
const AURA_SPREAD: f32 = 10.0;

/// A drifting, fading particle
#[derive(Debug, Clone, Copy)]
pub struct Particle {
    pub pos: Vec2,
    pub vel: Vec2,
    /// Multiplier tier at emission time; the presentation maps it to a color
    pub tier: u32,
    pub size: f32,
    pub age: f32,
    pub lifetime: f32,
}

impl Particle {
    /// Remaining opacity in [0, 1]
    pub fn alpha(&self) -> f32 {
        (1.0 - self.age / self.lifetime).max(0.0)
    }
}

/// A floating "+N" score popup
#[derive(Debug, Clone, Copy)]
pub struct ScorePopup {
    /// Spawn position (the collectible's location at pickup)
    pub pos: Vec2,
    pub value: u32,
    /// Multiplier tier, for the same color mapping as particles
    pub tier: u32,
    pub age: f32,
}

impl ScorePopup {
    /// Remaining opacity in [0, 1]
    pub fn alpha(&self) -> f32 {
        (1.0 - self.age / POPUP_LIFETIME).max(0.0)
    }

    /// Text scale: grows to 1.5x over the first 0.3 s, then shrinks back
    pub fn scale(&self) -> f32 {
        if self.age < 0.3 {
            1.0 + 0.5 * (self.age / 0.3)
        } else {
            1.5 - 0.5 * ((self.age - 0.3) / (POPUP_LIFETIME - 0.3))
        }
    }

    /// Upward drift in pixels (negative y is up)
    pub fn rise(&self) -> f32 {
        -40.0 * (self.age / POPUP_LIFETIME)
    }
}

/// All visual-support state for a run
#[derive(Debug, Clone, Default)]
pub struct Effects {
    pub particles: Vec<Particle>,
    pub popups: Vec<ScorePopup>,
    last_aura_emit: f32,
}

impl Effects {
    pub fn new() -> Self {
        Self::default()
    }

    /// Drop everything (on run start)
    pub fn clear(&mut self) {
        self.particles.clear();
        self.popups.clear();
        self.last_aura_emit = 0.0;
    }

    /// Age and cull particles and popups
    pub fn update(&mut self, dt: f32) {
        for p in &mut self.particles {
            p.pos += p.vel * dt;
            p.age += dt;
        }
        self.particles.retain(|p| p.age < p.lifetime);

        for popup in &mut self.popups {
            popup.age += dt;
        }
        self.popups.retain(|p| p.age < POPUP_LIFETIME);
    }

    /// Emit aura particles around the player while a streak is active.
    ///
    /// One burst of `multiplier` particles per [`AURA_INTERVAL`]; the oldest
    /// particles are dropped to stay under the cap.
    pub fn emit_aura(&mut self, rng: &mut Pcg32, clock: f32, multiplier: u32, center: Vec2) {
        if multiplier <= 1 || clock - self.last_aura_emit < AURA_INTERVAL {
            return;
        }
        self.last_aura_emit = clock;

        for _ in 0..multiplier {
            let offset = Vec2::new(
                rng.random_range(-AURA_SPREAD..=AURA_SPREAD),
                rng.random_range(-AURA_SPREAD..=AURA_SPREAD),
            );
            let particle = Particle {
                pos: center + offset,
                vel: Vec2::new(
                    rng.random_range(-60.0..=60.0),
                    rng.random_range(-60.0..=60.0),
                ),
                tier: multiplier,
                size: rng.random_range(1..=3) as f32,
                age: 0.0,
                lifetime: rng.random_range(0.5..=1.5),
            };
            self.particles.push(particle);
            if self.particles.len() > MAX_PARTICLES {
                self.particles.remove(0);
            }
        }
    }

    /// Add a score popup at the pickup position
    pub fn spawn_popup(&mut self, pos: Vec2, value: u32, tier: u32) {
        self.popups.push(ScorePopup {
            pos,
            value,
            tier,
            age: 0.0,
        });
    }
}
