//! Difficulty levels and reaction-game tuning
//!
//! Tuning is resolved once per game. Units are per tick at 60 Hz.

use serde::{Deserialize, Serialize};

/// Difficulty levels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Difficulty {
    Easy,
    #[default]
    Medium,
    Hard,
}

impl Difficulty {
    pub const ALL: [Difficulty; 3] = [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard];

    pub fn as_str(&self) -> &'static str {
        match self {
            Difficulty::Easy => "Easy",
            Difficulty::Medium => "Medium",
            Difficulty::Hard => "Hard",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "easy" => Some(Difficulty::Easy),
            "medium" | "med" => Some(Difficulty::Medium),
            "hard" => Some(Difficulty::Hard),
            _ => None,
        }
    }

    /// Vertical opening between the top and bottom blocks (px)
    pub fn gap_height(&self) -> f32 {
        match self {
            Difficulty::Easy => 180.0,
            Difficulty::Medium => 150.0,
            Difficulty::Hard => 120.0,
        }
    }

    /// Obstacle scroll speed (px per tick)
    pub fn obstacle_speed(&self) -> f32 {
        match self {
            Difficulty::Easy => 2.0,
            Difficulty::Medium => 3.0,
            Difficulty::Hard => 4.0,
        }
    }
}

/// Immutable tuning set for one reaction game
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Downward acceleration (px/tick²)
    pub gravity: f32,
    /// Velocity set on jump (negative = up)
    pub jump_impulse: f32,
    pub obstacle_width: f32,
    pub gap_height: f32,
    /// Horizontal obstacle speed (px/tick)
    pub obstacle_speed: f32,
    /// Minimum time between spawns (seconds)
    pub spawn_interval: f32,
    pub player_size: f32,
    /// Player x as a fraction of the play width
    pub player_start_x_ratio: f32,
}

impl GameConfig {
    pub fn for_difficulty(difficulty: Difficulty) -> Self {
        Self {
            gap_height: difficulty.gap_height(),
            obstacle_speed: difficulty.obstacle_speed(),
            ..Self::default()
        }
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            gravity: 0.35,
            jump_impulse: -7.0,
            obstacle_width: 60.0,
            gap_height: 150.0,
            obstacle_speed: 3.0,
            spawn_interval: 1.8,
            player_size: 30.0,
            player_start_x_ratio: 0.25,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gap_shrinks_and_speed_grows_with_difficulty() {
        let easy = GameConfig::for_difficulty(Difficulty::Easy);
        let medium = GameConfig::for_difficulty(Difficulty::Medium);
        let hard = GameConfig::for_difficulty(Difficulty::Hard);

        assert!(easy.gap_height > medium.gap_height);
        assert!(medium.gap_height > hard.gap_height);
        assert!(easy.obstacle_speed < medium.obstacle_speed);
        assert!(medium.obstacle_speed < hard.obstacle_speed);
    }

    #[test]
    fn test_medium_matches_default() {
        assert_eq!(GameConfig::for_difficulty(Difficulty::Medium), GameConfig::default());
    }

    #[test]
    fn test_shared_constants_do_not_depend_on_difficulty() {
        for d in Difficulty::ALL {
            let cfg = GameConfig::for_difficulty(d);
            assert_eq!(cfg.gravity, 0.35);
            assert_eq!(cfg.jump_impulse, -7.0);
            assert_eq!(cfg.player_size, 30.0);
        }
    }

    #[test]
    fn test_parse() {
        assert_eq!(Difficulty::parse("Easy"), Some(Difficulty::Easy));
        assert_eq!(Difficulty::parse("med"), Some(Difficulty::Medium));
        assert_eq!(Difficulty::parse(" HARD "), Some(Difficulty::Hard));
        assert_eq!(Difficulty::parse("nightmare"), None);
        for d in Difficulty::ALL {
            assert_eq!(Difficulty::parse(d.as_str()), Some(d));
        }
    }
}
