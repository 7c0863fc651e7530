//! User settings and preferences
//!
//! Persisted separately from statistics under their own storage key.

use serde::{Deserialize, Serialize};

use crate::consts::GOMOKU_BOARD_SIZE;
use crate::difficulty::Difficulty;
use crate::persistence::{PersistenceError, Storage, keys, load_json, save_json};

/// Smallest board the Gomoku engine accepts from settings
pub const MIN_BOARD_SIZE: usize = 5;
/// Largest board the Gomoku engine accepts from settings
pub const MAX_BOARD_SIZE: usize = 19;

/// Game settings/preferences
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Haptic feedback on/off
    pub haptics_enabled: bool,
    /// Difficulty of the next reaction game
    pub flappy_difficulty: Difficulty,
    /// Gomoku board edge length
    pub gomoku_board_size: usize,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            haptics_enabled: true,
            flappy_difficulty: Difficulty::Medium,
            gomoku_board_size: GOMOKU_BOARD_SIZE,
        }
    }
}

impl Settings {
    /// Board size clamped to the supported range
    pub fn effective_board_size(&self) -> usize {
        self.gomoku_board_size.clamp(MIN_BOARD_SIZE, MAX_BOARD_SIZE)
    }

    /// Load settings, falling back to defaults
    pub fn load(storage: &dyn Storage) -> Self {
        match load_json(storage, keys::SETTINGS) {
            Some(settings) => {
                log::info!("Loaded settings");
                settings
            }
            None => {
                log::info!("Using default settings");
                Self::default()
            }
        }
    }

    pub fn save(&self, storage: &dyn Storage) -> Result<(), PersistenceError> {
        save_json(storage, keys::SETTINGS, self)?;
        log::info!("Settings saved");
        Ok(())
    }
}
