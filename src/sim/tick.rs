//! Fixed timestep simulation tick
//!
//! Advances the game deterministically. The order inside a playing tick is
//! load-bearing: multiplier decay runs before the spawn gate, spawning
//! before motion, motion before out-of-bounds removal, removal before
//! collision checks, and a lethal hit short-circuits everything after it.

use glam::Vec2;

use super::spawn;
use super::state::{GameEvent, GamePhase, GameState};
use crate::tuning::Tuning;

/// Input intents for a single tick (deterministic)
#[derive(Debug, Clone, Copy, Default)]
pub struct TickInput {
    pub up: bool,
    pub down: bool,
    pub left: bool,
    pub right: bool,
    /// Leave the game-over screen (one-shot)
    pub restart: bool,
}

impl TickInput {
    /// Held movement as an axis vector. Deliberately unnormalized:
    /// diagonals move at per-axis speed, matching per-key handling.
    pub fn movement(&self) -> Vec2 {
        let x = (self.right as i8 - self.left as i8) as f32;
        let y = (self.down as i8 - self.up as i8) as f32;
        Vec2::new(x, y)
    }

    pub fn any_direction(&self) -> bool {
        self.up || self.down || self.left || self.right
    }
}

/// Difficulty level for a cumulative score
pub fn level_for_score(score: u32, score_per_level: u32) -> u32 {
    score / score_per_level + 1
}

/// Spawn interval at a difficulty level; strictly decreasing in level,
/// converging toward but never reaching zero
pub fn interval_for_level(level: u32, tuning: &Tuning) -> f32 {
    tuning.base_spawn_interval / (1.0 + (level - 1) as f32 * tuning.difficulty_step)
}

/// Advance the game state by one timestep
pub fn tick(state: &mut GameState, input: &TickInput, dt: f32) {
    match state.phase {
        GamePhase::Start => {
            // Any directional intent starts a run; the movement itself
            // applies in the same tick
            if input.any_direction() {
                state.start_run();
                playing_tick(state, input, dt);
            }
        }
        GamePhase::Playing => playing_tick(state, input, dt),
        GamePhase::GameOver => {
            if input.restart {
                // Re-validate the best score; a no-op when the hit already
                // raised it
                if state.score > state.high_score {
                    state.high_score = state.score;
                }
                state.phase = GamePhase::Start;
            }
        }
    }
}

fn playing_tick(state: &mut GameState, input: &TickInput, dt: f32) {
    state.clock += dt;
    let arena = state.tuning.arena();

    // Input-driven movement, clamped to the arena
    let delta = input.movement() * state.player.speed * dt;
    if delta != Vec2::ZERO {
        state.player.move_by(delta, arena);
    }

    // The streak expires even when nothing is picked up
    decay_multiplier(state);

    state.effects.update(dt);
    let (clock, multiplier, center) = (state.clock, state.multiplier, state.player.center());
    state.effects.emit_aura(&mut state.rng, clock, multiplier, center);

    // Spawn gate. The timestamp resets to the current clock on every
    // spawn, so one long tick cannot double-spawn.
    if state.clock - state.last_spawn >= state.spawn_interval {
        let target = state.player.center();
        let projectile = spawn::aimed_projectile(&mut state.rng, &state.tuning, target);
        state.projectiles.push(projectile);
        state.last_spawn = state.clock;
        state.push_event(GameEvent::ProjectileSpawned);
    }

    // Motion, then removal: a projectile past the margin is gone before
    // any collision test can see it
    for p in &mut state.projectiles {
        p.advance(dt);
    }
    state.projectiles.retain(|p| !p.is_out_of_bounds(arena));

    // First hit ends the run and short-circuits the rest of the tick
    let player_bounds = state.player.bounds();
    if state
        .projectiles
        .iter()
        .any(|p| p.bounds().intersects(&player_bounds))
    {
        end_run(state);
        return;
    }

    if player_bounds.intersects(&state.collectible.bounds()) {
        collect_point(state);
    }
}

fn decay_multiplier(state: &mut GameState) {
    if state.multiplier > 1
        && let Some(t) = state.last_pickup
        && state.clock - t >= state.tuning.multiplier_window
    {
        state.multiplier = 1;
    }
}

fn collect_point(state: &mut GameState) {
    let now = state.clock;

    // Window check first; the updated multiplier is what the score gains.
    // A run's first pickup has no window to continue, so it scores 1.
    let in_window = state
        .last_pickup
        .is_some_and(|t| now - t < state.tuning.multiplier_window);
    state.multiplier = if in_window {
        (state.multiplier + 1).min(state.tuning.max_multiplier)
    } else {
        1
    };
    state.score += state.multiplier;
    state.last_pickup = Some(now);

    let value = state.multiplier;
    let popup_pos = state.collectible.pos;
    state.effects.spawn_popup(popup_pos, value, value);
    state.push_event(GameEvent::PointCollected {
        value,
        multiplier: value,
    });

    // Relocating immediately makes a second pickup this tick impossible
    state.collectible.pos = spawn::place_collectible(&mut state.rng, &state.tuning);

    update_difficulty(state);
}

fn update_difficulty(state: &mut GameState) {
    let new_level = level_for_score(state.score, state.tuning.score_per_level);
    if new_level > state.level {
        state.level = new_level;
        state.spawn_interval = interval_for_level(new_level, &state.tuning);
        state.push_event(GameEvent::LevelUp { level: new_level });
    }
}

fn end_run(state: &mut GameState) {
    let new_high_score = state.score > state.high_score;
    if new_high_score {
        state.high_score = state.score;
    }
    state.phase = GamePhase::GameOver;
    state.push_event(GameEvent::GameOver {
        final_score: state.score,
        new_high_score,
    });
}
