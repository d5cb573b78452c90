//! Game state and core simulation types
//!
//! Everything a run needs lives in [`GameState`]: entities, scoring,
//! difficulty, the seeded RNG, and the per-tick event queue. Same seed +
//! same inputs reproduces the same run.

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;

use super::collision::Aabb;
use super::effects::Effects;
use super::spawn;
use crate::tuning::Tuning;

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GamePhase {
    /// Idle title screen, waiting for the first movement input
    Start,
    /// Active gameplay
    Playing,
    /// Run ended, waiting for an explicit restart input
    GameOver,
}

/// Observational events for the presentation/audio layer.
///
/// Emitted during a tick and drained by the caller; nothing in the
/// simulation reacts to them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    /// A projectile left the generator
    ProjectileSpawned,
    /// The player collected the point; `value` is what the score gained
    PointCollected { value: u32, multiplier: u32 },
    /// Difficulty level increased
    LevelUp { level: u32 },
    /// A projectile hit the player
    GameOver { final_score: u32, new_high_score: bool },
}

/// The player's avatar, anchored at its top-left corner
#[derive(Debug, Clone, Copy)]
pub struct Player {
    pub pos: Vec2,
    /// Bounding-box side length
    pub size: f32,
    /// Movement speed in pixels per second
    pub speed: f32,
}

impl Player {
    /// Original start position, a quarter of the way into the arena
    pub fn starting(tuning: &Tuning) -> Self {
        Self {
            pos: tuning.arena() / 4.0,
            size: tuning.player_size,
            speed: tuning.player_speed,
        }
    }

    /// Move by a delta, clamping both axes into the arena
    pub fn move_by(&mut self, delta: Vec2, arena: Vec2) {
        self.pos += delta;
        self.pos = self.pos.clamp(Vec2::ZERO, arena - Vec2::splat(self.size));
    }

    pub fn center(&self) -> Vec2 {
        self.pos + Vec2::splat(self.size / 2.0)
    }

    pub fn bounds(&self) -> Aabb {
        Aabb::from_topleft(self.pos, Vec2::splat(self.size))
    }
}

/// A projectile launched from the arena center
#[derive(Debug, Clone, Copy)]
pub struct Projectile {
    /// Center position
    pub pos: Vec2,
    /// Unit direction scaled by projectile speed, in pixels per second
    pub vel: Vec2,
    /// Collision-box half-extent
    pub half: f32,
}

impl Projectile {
    pub fn advance(&mut self, dt: f32) {
        self.pos += self.vel * dt;
    }

    /// Out past the arena edge by more than its own size. A removal
    /// signal, not an error.
    pub fn is_out_of_bounds(&self, arena: Vec2) -> bool {
        self.pos.x < -self.half
            || self.pos.x > arena.x + self.half
            || self.pos.y < -self.half
            || self.pos.y > arena.y + self.half
    }

    pub fn bounds(&self) -> Aabb {
        Aabb::from_center(self.pos, Vec2::splat(self.half))
    }
}

/// The single active collectible
#[derive(Debug, Clone, Copy)]
pub struct Collectible {
    /// Center position
    pub pos: Vec2,
    /// Collision-box half-extent
    pub half: f32,
}

impl Collectible {
    pub fn bounds(&self) -> Aabb {
        Aabb::from_center(self.pos, Vec2::splat(self.half))
    }
}

/// Complete simulation state for one session
#[derive(Debug, Clone)]
pub struct GameState {
    pub tuning: Tuning,
    /// Run seed for reproducibility
    pub seed: u64,
    pub(crate) rng: Pcg32,
    pub phase: GamePhase,
    /// Simulation clock in seconds, advanced only by `tick`
    pub clock: f32,

    pub score: u32,
    /// Best score across sessions; raised in place when beaten
    pub high_score: u32,
    /// Current streak multiplier in [1, max_multiplier]
    pub multiplier: u32,
    /// Clock time of the most recent pickup; `None` until the first one of a run
    pub last_pickup: Option<f32>,

    /// Difficulty level, never decreasing within a run
    pub level: u32,
    /// Seconds between projectile spawns at the current level
    pub spawn_interval: f32,
    pub(crate) last_spawn: f32,

    pub player: Player,
    /// Live projectiles in creation order
    pub projectiles: Vec<Projectile>,
    pub collectible: Collectible,
    pub effects: Effects,

    events: Vec<GameEvent>,
}

impl GameState {
    /// Create a session on the title screen.
    ///
    /// `high_score` is whatever the persistence port loaded (0 when nothing
    /// is stored).
    pub fn new(seed: u64, tuning: Tuning, high_score: u32) -> Self {
        let mut rng = Pcg32::seed_from_u64(seed);
        let collectible = Collectible {
            pos: spawn::place_collectible(&mut rng, &tuning),
            half: tuning.collectible_size,
        };
        Self {
            player: Player::starting(&tuning),
            seed,
            rng,
            phase: GamePhase::Start,
            clock: 0.0,
            score: 0,
            high_score,
            multiplier: 1,
            last_pickup: None,
            level: 1,
            spawn_interval: tuning.base_spawn_interval,
            last_spawn: 0.0,
            projectiles: Vec::new(),
            collectible,
            effects: Effects::new(),
            events: Vec::new(),
            tuning,
        }
    }

    /// Begin a fresh run: reset score, difficulty, multiplier, entities,
    /// and draw a new collectible position.
    pub fn start_run(&mut self) {
        self.player = Player::starting(&self.tuning);
        self.projectiles.clear();
        self.effects.clear();

        self.score = 0;
        self.multiplier = 1;
        self.last_pickup = None;
        self.level = 1;
        self.spawn_interval = self.tuning.base_spawn_interval;
        self.last_spawn = self.clock;

        self.collectible.pos = spawn::place_collectible(&mut self.rng, &self.tuning);
        self.phase = GamePhase::Playing;
    }

    /// Seconds left on the multiplier window, for the HUD bar
    pub fn multiplier_time_left(&self) -> f32 {
        match self.last_pickup {
            Some(t) if self.multiplier > 1 => {
                (self.tuning.multiplier_window - (self.clock - t)).max(0.0)
            }
            _ => 0.0,
        }
    }

    pub(crate) fn push_event(&mut self, event: GameEvent) {
        self.events.push(event);
    }

    /// Take all events emitted since the last drain
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }
}
