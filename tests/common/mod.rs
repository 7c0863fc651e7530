//! Shared test doubles

#![allow(dead_code)]

use std::cell::RefCell;

use pocket_arcade::haptics::{HapticEvent, HapticSink};
use pocket_arcade::stats::{FlappyStats, GomokuResult, GomokuStats, StatsStore};

/// Stats store that counts every write
#[derive(Default)]
pub struct CountingStats {
    pub flappy: RefCell<FlappyStats>,
    pub gomoku: RefCell<GomokuStats>,
    pub flappy_calls: RefCell<Vec<u32>>,
    pub gomoku_calls: RefCell<Vec<GomokuResult>>,
}

impl CountingStats {
    pub fn with_best(best: u32) -> Self {
        let stats = Self::default();
        stats.flappy.borrow_mut().best_score = best;
        stats
    }

    pub fn total_calls(&self) -> usize {
        self.flappy_calls.borrow().len() + self.gomoku_calls.borrow().len()
    }
}

impl StatsStore for CountingStats {
    fn flappy_stats(&self) -> FlappyStats {
        *self.flappy.borrow()
    }

    fn gomoku_stats(&self) -> GomokuStats {
        *self.gomoku.borrow()
    }

    fn record_flappy_game(&self, score: u32) {
        self.flappy_calls.borrow_mut().push(score);
        self.flappy.borrow_mut().record(score);
    }

    fn record_gomoku_game(&self, result: GomokuResult) {
        self.gomoku_calls.borrow_mut().push(result);
        self.gomoku.borrow_mut().record(result);
    }
}

/// Haptic sink that remembers what it was asked to play
#[derive(Default)]
pub struct RecordingHaptics {
    pub events: RefCell<Vec<HapticEvent>>,
}

impl RecordingHaptics {
    pub fn count(&self, event: HapticEvent) -> usize {
        self.events.borrow().iter().filter(|e| **e == event).count()
    }
}

impl HapticSink for RecordingHaptics {
    fn play(&self, event: HapticEvent) {
        self.events.borrow_mut().push(event);
    }
}
