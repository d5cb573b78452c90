//! Best-score persistence port
//!
//! The simulation only ever reads the best score at session start and
//! writes candidate updates when it is beaten. Storage failure is never
//! fatal: reads default to 0 and writes are logged and swallowed, so a
//! broken disk degrades to an empty leaderboard, not a crash.

use std::cell::Cell;
use std::io::ErrorKind;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Abstract storage for the single best score
pub trait HighScoreStore {
    /// Load the best score; 0 when nothing usable is stored
    fn load(&self) -> u32;
    /// Persist the best score; failures are logged and swallowed
    fn save(&self, score: u32);
}

/// On-disk document: `{"high_score": N}`
#[derive(Debug, Default, Serialize, Deserialize)]
struct HighScoreFile {
    #[serde(default)]
    high_score: u32,
}

/// JSON file store
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl HighScoreStore for JsonFileStore {
    fn load(&self) -> u32 {
        match std::fs::read_to_string(&self.path) {
            Ok(json) => match serde_json::from_str::<HighScoreFile>(&json) {
                Ok(file) => {
                    log::info!("Loaded high score {}", file.high_score);
                    file.high_score
                }
                Err(e) => {
                    log::warn!("Corrupt high-score file {}: {e}", self.path.display());
                    0
                }
            },
            Err(e) if e.kind() == ErrorKind::NotFound => {
                log::info!("No high score stored yet");
                0
            }
            Err(e) => {
                log::warn!("Could not read high-score file {}: {e}", self.path.display());
                0
            }
        }
    }

    fn save(&self, score: u32) {
        let json = match serde_json::to_string(&HighScoreFile { high_score: score }) {
            Ok(json) => json,
            Err(e) => {
                log::warn!("Could not encode high score: {e}");
                return;
            }
        };
        match std::fs::write(&self.path, json) {
            Ok(()) => log::info!("High score saved ({score})"),
            Err(e) => log::warn!("Could not save high score to {}: {e}", self.path.display()),
        }
    }
}

/// In-memory store for tests and store-less runs
#[derive(Debug, Default)]
pub struct MemoryStore {
    score: Cell<u32>,
    saves: Cell<u32>,
}

impl MemoryStore {
    pub fn new(score: u32) -> Self {
        Self {
            score: Cell::new(score),
            saves: Cell::new(0),
        }
    }

    /// Most recently saved value
    pub fn stored(&self) -> u32 {
        self.score.get()
    }

    /// How many times `save` has been called
    pub fn save_count(&self) -> u32 {
        self.saves.get()
    }
}

impl HighScoreStore for MemoryStore {
    fn load(&self) -> u32 {
        self.score.get()
    }

    fn save(&self, score: u32) {
        self.score.set(score);
        self.saves.set(self.saves.get() + 1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_file_defaults_to_zero() {
        let store = JsonFileStore::new("/nonexistent/highscore.json");
        assert_eq!(store.load(), 0);
    }

    #[test]
    fn test_corrupt_file_defaults_to_zero() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("highscore.json");
        std::fs::write(&path, "{{{ not json").unwrap();

        let store = JsonFileStore::new(&path);
        assert_eq!(store.load(), 0);
    }

    #[test]
    fn test_save_then_load_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("highscore.json");
        let store = JsonFileStore::new(&path);

        store.save(42);
        assert_eq!(store.load(), 42);

        // Matches the documented on-disk format
        let json = std::fs::read_to_string(&path).unwrap();
        assert_eq!(json, r#"{"high_score":42}"#);

        store.save(99);
        assert_eq!(store.load(), 99);
    }

    #[test]
    fn test_write_failure_is_swallowed() {
        let store = JsonFileStore::new("/nonexistent/dir/highscore.json");
        // Must not panic
        store.save(7);
        assert_eq!(store.load(), 0);
    }

    #[test]
    fn test_memory_store_counts_saves() {
        let store = MemoryStore::new(5);
        assert_eq!(store.load(), 5);
        store.save(10);
        store.save(11);
        assert_eq!(store.stored(), 11);
        assert_eq!(store.save_count(), 2);
    }
}
