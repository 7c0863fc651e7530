//! Save/load of statistics and settings
//!
//! Features:
//! - Pluggable string key-value backends (memory, JSON file)
//! - Typed JSON documents per key
//! - A corrupt entry falls back to its default; a store file that is not a
//!   JSON object at all is an error from `FileStorage::open`

pub mod storage;

use std::cell::RefCell;

use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::stats::{FlappyStats, GomokuResult, GomokuStats, StatsStore};
pub use storage::{FileStorage, MemoryStorage, Storage};

/// Storage keys
pub mod keys {
    pub const FLAPPY_STATS: &str = "flappy_stats";
    pub const GOMOKU_STATS: &str = "gomoku_stats";
    pub const SETTINGS: &str = "settings";
}

#[derive(Debug, thiserror::Error)]
pub enum PersistenceError {
    #[error("storage I/O failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid stored document: {0}")]
    Serde(#[from] serde_json::Error),
}

/// Read a JSON document. Missing or unreadable values yield `None`.
pub fn load_json<T: DeserializeOwned>(storage: &dyn Storage, key: &str) -> Option<T> {
    let json = storage.get(key)?;
    match serde_json::from_str(&json) {
        Ok(value) => Some(value),
        Err(e) => {
            log::warn!("Discarding corrupt '{}' entry: {}", key, e);
            None
        }
    }
}

/// Write a JSON document
pub fn save_json<T: Serialize>(
    storage: &dyn Storage,
    key: &str,
    value: &T,
) -> Result<(), PersistenceError> {
    let json = serde_json::to_string(value)?;
    storage.set(key, &json)
}

/// Typed statistics store over a [`Storage`] backend
#[derive(Debug)]
pub struct PersistenceService<S: Storage> {
    storage: S,
    flappy: RefCell<FlappyStats>,
    gomoku: RefCell<GomokuStats>,
}

impl<S: Storage> PersistenceService<S> {
    /// Load statistics from `storage`, starting fresh where nothing is stored
    pub fn new(storage: S) -> Self {
        let flappy: FlappyStats = load_json(&storage, keys::FLAPPY_STATS).unwrap_or_default();
        let gomoku: GomokuStats = load_json(&storage, keys::GOMOKU_STATS).unwrap_or_default();
        log::info!(
            "Loaded stats: flappy best {} over {} games, gomoku {} games",
            flappy.best_score,
            flappy.games_played,
            gomoku.games_played
        );
        Self {
            storage,
            flappy: RefCell::new(flappy),
            gomoku: RefCell::new(gomoku),
        }
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    pub fn reset_flappy_stats(&self) {
        *self.flappy.borrow_mut() = FlappyStats::default();
        self.save_flappy();
    }

    pub fn reset_gomoku_stats(&self) {
        *self.gomoku.borrow_mut() = GomokuStats::default();
        self.save_gomoku();
    }

    pub fn reset_all_stats(&self) {
        self.reset_flappy_stats();
        self.reset_gomoku_stats();
    }

    fn save_flappy(&self) {
        let stats = *self.flappy.borrow();
        if let Err(e) = save_json(&self.storage, keys::FLAPPY_STATS, &stats) {
            log::warn!("Failed to save flappy stats: {}", e);
        }
    }

    fn save_gomoku(&self) {
        let stats = *self.gomoku.borrow();
        if let Err(e) = save_json(&self.storage, keys::GOMOKU_STATS, &stats) {
            log::warn!("Failed to save gomoku stats: {}", e);
        }
    }
}

impl<S: Storage> StatsStore for PersistenceService<S> {
    fn flappy_stats(&self) -> FlappyStats {
        *self.flappy.borrow()
    }

    fn gomoku_stats(&self) -> GomokuStats {
        *self.gomoku.borrow()
    }

    fn record_flappy_game(&self, score: u32) {
        self.flappy.borrow_mut().record(score);
        self.save_flappy();
    }

    fn record_gomoku_game(&self, result: GomokuResult) {
        self.gomoku.borrow_mut().record(result);
        self.save_gomoku();
    }
}
