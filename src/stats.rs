//! Per-game statistics
//!
//! Records are plain counters. Engines write them exactly once per finished
//! game through a [`StatsStore`]; the store decides where they live.

use serde::{Deserialize, Serialize};

/// Reaction game statistics
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FlappyStats {
    pub best_score: u32,
    pub games_played: u32,
    pub total_score: u64,
}

impl FlappyStats {
    /// Fold one finished run into the counters
    pub fn record(&mut self, score: u32) {
        self.games_played += 1;
        self.total_score += u64::from(score);
        if score > self.best_score {
            self.best_score = score;
        }
    }

    pub fn average_score(&self) -> f64 {
        if self.games_played == 0 {
            return 0.0;
        }
        self.total_score as f64 / f64::from(self.games_played)
    }
}

/// How a Gomoku game ended
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GomokuResult {
    Black,
    White,
    Draw,
}

/// Gomoku statistics
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GomokuStats {
    pub black_wins: u32,
    pub white_wins: u32,
    pub draws: u32,
    pub games_played: u32,
}

impl GomokuStats {
    pub fn record(&mut self, result: GomokuResult) {
        self.games_played += 1;
        match result {
            GomokuResult::Black => self.black_wins += 1,
            GomokuResult::White => self.white_wins += 1,
            GomokuResult::Draw => self.draws += 1,
        }
    }

    /// Black win rate in percent
    pub fn black_win_rate(&self) -> f64 {
        Self::rate(self.black_wins, self.games_played)
    }

    /// White win rate in percent
    pub fn white_win_rate(&self) -> f64 {
        Self::rate(self.white_wins, self.games_played)
    }

    fn rate(count: u32, total: u32) -> f64 {
        if total == 0 {
            return 0.0;
        }
        f64::from(count) / f64::from(total) * 100.0
    }
}

/// Persisted statistics, shared by both engines
///
/// Recording is fire-and-forget: implementations handle their own failures.
pub trait StatsStore {
    fn flappy_stats(&self) -> FlappyStats;
    fn gomoku_stats(&self) -> GomokuStats;
    fn record_flappy_game(&self, score: u32);
    fn record_gomoku_game(&self, result: GomokuResult);

    fn best_score(&self) -> u32 {
        self.flappy_stats().best_score
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flappy_record() {
        let mut stats = FlappyStats::default();
        stats.record(5);
        stats.record(3);
        stats.record(0);
        assert_eq!(stats.best_score, 5);
        assert_eq!(stats.games_played, 3);
        assert_eq!(stats.total_score, 8);
        assert!((stats.average_score() - 8.0 / 3.0).abs() < 1e-9);
    }

    #[test]
    fn test_flappy_best_only_on_strictly_greater() {
        let mut stats = FlappyStats::default();
        stats.record(4);
        stats.record(4);
        assert_eq!(stats.best_score, 4);
        assert_eq!(stats.games_played, 2);
    }

    #[test]
    fn test_empty_averages_are_zero() {
        assert_eq!(FlappyStats::default().average_score(), 0.0);
        assert_eq!(GomokuStats::default().black_win_rate(), 0.0);
        assert_eq!(GomokuStats::default().white_win_rate(), 0.0);
    }

    #[test]
    fn test_gomoku_record() {
        let mut stats = GomokuStats::default();
        stats.record(GomokuResult::Black);
        stats.record(GomokuResult::Black);
        stats.record(GomokuResult::White);
        stats.record(GomokuResult::Draw);
        assert_eq!(stats.black_wins, 2);
        assert_eq!(stats.white_wins, 1);
        assert_eq!(stats.draws, 1);
        assert_eq!(stats.games_played, 4);
        assert_eq!(stats.black_win_rate(), 50.0);
        assert_eq!(stats.white_win_rate(), 25.0);
    }
}
