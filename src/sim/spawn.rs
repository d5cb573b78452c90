//! Entity spawning
//!
//! Projectiles launch from the arena center aimed at the player's live
//! position with a randomized deviation, so the player is never
//! permanently safe but every shot is dodgeable. Collectibles are placed
//! by rejection sampling outside an exclusion circle around the center.

use glam::Vec2;
use rand::Rng;
use rand_pcg::Pcg32;

use super::state::Projectile;
use crate::tuning::Tuning;
use crate::{angle_to, unit_from_angle};

/// Rejection-sampling budget before falling back to a deterministic point
const MAX_PLACEMENT_ATTEMPTS: u32 = 32;

/// Create a projectile at the arena center aimed at `target`, with a
/// uniform deviation in ±`max_angle_deviation` degrees.
pub fn aimed_projectile(rng: &mut Pcg32, tuning: &Tuning, target: Vec2) -> Projectile {
    let center = tuning.center();
    let base_angle = angle_to(center, target);
    let deviation = rng
        .random_range(-tuning.max_angle_deviation..=tuning.max_angle_deviation)
        .to_radians();

    Projectile {
        pos: center,
        vel: unit_from_angle(base_angle + deviation) * tuning.projectile_speed,
        half: tuning.projectile_size,
    }
}

/// Pick a collectible position within the arena margins, at least
/// `min_distance_from_center` from the center.
///
/// Samples uniformly and rejects until the distance invariant holds. If the
/// attempt budget runs out, the last candidate's direction is projected
/// onto the exclusion circle, which terminates deterministically and still
/// satisfies the invariant.
pub fn place_collectible(rng: &mut Pcg32, tuning: &Tuning) -> Vec2 {
    let center = tuning.center();
    let size = tuning.collectible_size;
    let mut candidate = center;

    for _ in 0..MAX_PLACEMENT_ATTEMPTS {
        candidate = Vec2::new(
            rng.random_range(size..=tuning.arena_width - size),
            rng.random_range(size + tuning.collectible_top_margin..=tuning.arena_height - size),
        );
        if candidate.distance(center) >= tuning.min_distance_from_center {
            return candidate;
        }
    }

    let dir = (candidate - center).try_normalize().unwrap_or(Vec2::X);
    center + dir * tuning.min_distance_from_center
}
