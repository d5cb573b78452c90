//! Bluebook entry point
//!
//! Runs a headless, self-playing session at the fixed logical rate,
//! logging the events a presentation layer would react to and printing
//! the final grade. Pass a seed as the first argument to reproduce a run.

use std::cmp::Ordering;
use std::path::Path;
use std::time::{SystemTime, UNIX_EPOCH};

use glam::Vec2;

use bluebook::consts::SIM_DT;
use bluebook::sim::{GameEvent, GamePhase, GameState, TickInput};
use bluebook::{JsonFileStore, Session, Tuning, grade};

/// Demo length cap: two minutes of simulated time
const MAX_DEMO_TICKS: u32 = 60 * 120;

/// Projectiles closer than this are dodged instead of ignored
const THREAT_RADIUS: f32 = 150.0;

fn main() {
    env_logger::init();

    let seed = std::env::args()
        .nth(1)
        .and_then(|arg| arg.parse().ok())
        .unwrap_or_else(|| {
            SystemTime::now()
                .duration_since(UNIX_EPOCH)
                .map(|d| d.as_secs())
                .unwrap_or(0)
        });
    log::info!("Run seed: {seed}");

    let tuning = Tuning::load(Path::new("tuning.json"));
    let store = JsonFileStore::new("highscore.json");
    let mut session = Session::new(seed, tuning, store);

    for _ in 0..MAX_DEMO_TICKS {
        let input = pilot_input(session.state());
        for event in session.tick(&input, SIM_DT) {
            match event {
                GameEvent::ProjectileSpawned => log::debug!("Projectile spawned"),
                GameEvent::PointCollected { value, multiplier } => {
                    log::info!("+{value} (x{multiplier} streak)")
                }
                GameEvent::LevelUp { level } => log::info!("Level up: {level}"),
                GameEvent::GameOver {
                    final_score,
                    new_high_score,
                } => {
                    if new_high_score {
                        log::info!("Game over at {final_score} - new high score!");
                    } else {
                        log::info!("Game over at {final_score}");
                    }
                }
            }
        }
        if session.state().phase == GamePhase::GameOver {
            break;
        }
    }

    let state = session.state();
    let final_grade = grade::grade_for_score(state.score);
    println!(
        "Final score: {} ({:.1}%) - grade {} - {}",
        state.score,
        grade::percentage(state.score),
        final_grade.value,
        final_grade.remark,
    );
    println!("Best score: {}", state.high_score);
}

/// Self-playing policy: head for the collectible, sidestep the nearest
/// projectile on a collision course.
fn pilot_input(state: &GameState) -> TickInput {
    let mut input = TickInput::default();
    let center = state.player.center();

    let threat = state
        .projectiles
        .iter()
        .filter(|p| {
            let to_player = center - p.pos;
            to_player.length() < THREAT_RADIUS && p.vel.dot(to_player) > 0.0
        })
        .min_by(|a, b| {
            a.pos
                .distance_squared(center)
                .partial_cmp(&b.pos.distance_squared(center))
                .unwrap_or(Ordering::Equal)
        });

    let target = match threat {
        Some(threat) => {
            // Step perpendicular to the incoming velocity, away from the shot
            let mut side = Vec2::new(-threat.vel.y, threat.vel.x).normalize_or_zero();
            if side.dot(center - threat.pos) < 0.0 {
                side = -side;
            }
            center + side * 100.0
        }
        None => state.collectible.pos,
    };

    let delta = target - center;
    let dead_zone = 4.0;
    if delta.x > dead_zone {
        input.right = true;
    } else if delta.x < -dead_zone {
        input.left = true;
    }
    if delta.y > dead_zone {
        input.down = true;
    } else if delta.y < -dead_zone {
        input.up = true;
    }

    // Make sure the very first tick leaves the title screen
    if state.phase == GamePhase::Start && !input.any_direction() {
        input.right = true;
    }

    input
}
