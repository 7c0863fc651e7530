//! Pocket Arcade - game engines for a two-game mobile arcade
//!
//! Core modules:
//! - `flappy`: Reaction game (fixed-step physics, obstacles, scoring, collisions)
//! - `gomoku`: Five-in-a-row (board, moves, line-scan win detection, undo)
//! - `geometry`: Axis-aligned collision primitives
//! - `difficulty`: Difficulty levels and reaction-game tuning
//! - `stats`: Per-game statistics records and the store they are written to
//! - `persistence`: Key-value storage backends and the typed persistence service
//! - `haptics`: Fire-and-forget feedback sink
//! - `observe`: State-change subscriptions for the UI layer
//! - `remote`: Remote post list interface (fetch, cache, offline fallback)
//!
//! Both engines are pure state machines driven from outside: the host calls
//! them on input and, for the reaction game, on a fixed-rate tick.

pub mod difficulty;
pub mod flappy;
pub mod geometry;
pub mod gomoku;
pub mod haptics;
pub mod observe;
pub mod persistence;
pub mod remote;
pub mod settings;
pub mod stats;

pub use difficulty::{Difficulty, GameConfig};
pub use flappy::FlappyEngine;
pub use gomoku::GomokuEngine;
pub use haptics::{HapticEvent, HapticSink, HapticsService, NullHaptics};
pub use persistence::{FileStorage, MemoryStorage, PersistenceError, PersistenceService, Storage};
pub use settings::Settings;
pub use stats::{FlappyStats, GomokuResult, GomokuStats, StatsStore};

/// Game configuration constants
pub mod consts {
    /// Fixed simulation timestep (60 Hz, matches the tuning units of px/tick)
    pub const SIM_DT: f32 = 1.0 / 60.0;
    /// Maximum substeps per frame to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 8;
    /// Largest frame delta accepted by the fixed-step driver (seconds)
    pub const MAX_FRAME_DT: f32 = 0.1;

    /// Vertical margin kept free above and below a spawned gap
    pub const GAP_MARGIN: f32 = 80.0;
    /// A new obstacle may spawn once the newest one is left of this share of the width
    pub const SPAWN_DISTANCE_RATIO: f32 = 0.6;

    /// Standard Gomoku board size
    pub const GOMOKU_BOARD_SIZE: usize = 15;
    /// Standard run length needed to win
    pub const GOMOKU_WIN_LENGTH: usize = 5;
}
