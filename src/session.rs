//! Session shell
//!
//! Owns a [`GameState`] and a [`HighScoreStore`] and keeps the two in
//! sync, so `sim::tick` stays free of I/O. The store is written whenever
//! the simulated best score moves past what is already persisted - which
//! covers the game-over save and makes the restart re-validation an
//! automatic no-op.

use crate::highscore::HighScoreStore;
use crate::sim::{self, GameEvent, GameState, TickInput};
use crate::tuning::Tuning;

pub struct Session<S: HighScoreStore> {
    state: GameState,
    store: S,
    /// Best score the store is known to hold
    persisted: u32,
}

impl<S: HighScoreStore> Session<S> {
    /// Load the stored best score and set up a session on the title screen
    pub fn new(seed: u64, tuning: Tuning, store: S) -> Self {
        let high_score = store.load();
        Self {
            state: GameState::new(seed, tuning, high_score),
            store,
            persisted: high_score,
        }
    }

    /// Advance one tick, persist a beaten best score, and hand back the
    /// tick's events
    pub fn tick(&mut self, input: &TickInput, dt: f32) -> Vec<GameEvent> {
        sim::tick(&mut self.state, input, dt);

        if self.state.high_score > self.persisted {
            self.store.save(self.state.high_score);
            self.persisted = self.state.high_score;
        }

        self.state.drain_events()
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn state_mut(&mut self) -> &mut GameState {
        &mut self.state
    }

    pub fn store(&self) -> &S {
        &self.store
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::SIM_DT;
    use crate::highscore::MemoryStore;
    use crate::sim::{GamePhase, Projectile};
    use glam::Vec2;

    fn lethal_projectile(state: &GameState) -> Projectile {
        Projectile {
            pos: state.player.center(),
            vel: Vec2::ZERO,
            half: state.tuning.projectile_size,
        }
    }

    fn start_run(session: &mut Session<MemoryStore>) {
        let input = TickInput {
            right: true,
            ..Default::default()
        };
        session.tick(&input, SIM_DT);
        assert_eq!(session.state().phase, GamePhase::Playing);
    }

    #[test]
    fn test_new_high_score_is_saved_once() {
        let mut session = Session::new(7, Tuning::default(), MemoryStore::new(0));
        start_run(&mut session);

        session.state_mut().score = 5;
        let hit = lethal_projectile(session.state());
        session.state_mut().projectiles.push(hit);

        let events = session.tick(&TickInput::default(), SIM_DT);
        assert!(events.iter().any(|e| matches!(
            e,
            GameEvent::GameOver {
                final_score: 5,
                new_high_score: true
            }
        )));
        assert_eq!(session.store().stored(), 5);
        assert_eq!(session.store().save_count(), 1);

        // Restart re-validates without re-saving
        let restart = TickInput {
            restart: true,
            ..Default::default()
        };
        session.tick(&restart, SIM_DT);
        assert_eq!(session.state().phase, GamePhase::Start);
        assert_eq!(session.store().save_count(), 1);
    }

    #[test]
    fn test_lower_score_never_writes() {
        let mut session = Session::new(7, Tuning::default(), MemoryStore::new(50));
        assert_eq!(session.state().high_score, 50);
        start_run(&mut session);

        session.state_mut().score = 8;
        let hit = lethal_projectile(session.state());
        session.state_mut().projectiles.push(hit);
        session.tick(&TickInput::default(), SIM_DT);

        assert_eq!(session.state().phase, GamePhase::GameOver);
        assert_eq!(session.store().save_count(), 0);
        assert_eq!(session.store().stored(), 50);
    }
}
