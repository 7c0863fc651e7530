//! Reaction game state and entity types
//!
//! Everything the simulation needs to advance lives in [`FlappyState`],
//! including the seeded RNG, so two states with the same seed and inputs
//! evolve identically.

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use crate::consts::{GAP_MARGIN, SIM_DT, SPAWN_DISTANCE_RATIO};
use crate::difficulty::GameConfig;
use crate::geometry::{GapBand, Rect};

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Waiting for the first tap
    Ready,
    /// Active gameplay
    Playing,
    /// Game is paused
    Paused,
    /// Run ended
    GameOver { final_score: u32, is_new_best: bool },
}

impl GamePhase {
    pub fn is_active(&self) -> bool {
        *self == GamePhase::Playing
    }

    /// Whether a tap starts a fresh game from here
    pub fn can_start(&self) -> bool {
        matches!(self, GamePhase::Ready | GamePhase::GameOver { .. })
    }
}

/// The player square
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Player {
    /// Center of the square
    pub pos: Vec2,
    /// Vertical velocity (px/tick, positive = down)
    pub velocity: f32,
    pub size: f32,
}

impl Player {
    pub fn new(pos: Vec2, size: f32) -> Self {
        Self {
            pos,
            velocity: 0.0,
            size,
        }
    }

    pub fn rect(&self) -> Rect {
        Rect::centered_square(self.pos, self.size)
    }

    /// One step of gravity integration: velocity first, then position
    pub fn apply_gravity(&mut self, gravity: f32) {
        self.velocity += gravity;
        self.pos.y += self.velocity;
    }

    /// Jumps replace the velocity, they do not add to it
    pub fn jump(&mut self, impulse: f32) {
        self.velocity = impulse;
    }

    pub fn reset_to(&mut self, pos: Vec2) {
        self.pos = pos;
        self.velocity = 0.0;
    }
}

/// A pair of blocks with a vertical gap between them
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Obstacle {
    pub id: u32,
    /// Horizontal center
    pub x: f32,
    /// Top edge of the gap (= height of the top block)
    pub gap_y: f32,
    pub gap_height: f32,
    pub width: f32,
    /// Set once the player has passed this obstacle
    pub scored: bool,
}

impl Obstacle {
    #[inline]
    pub fn left(&self) -> f32 {
        self.x - self.width / 2.0
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.x + self.width / 2.0
    }

    pub fn gap_band(&self) -> GapBand {
        GapBand::new(self.gap_y, self.gap_height)
    }

    /// Full-height column the obstacle occupies
    pub fn footprint(&self, play_height: f32) -> Rect {
        Rect::new(
            Vec2::new(self.left(), 0.0),
            Vec2::new(self.right(), play_height),
        )
    }

    pub fn top_height(&self) -> f32 {
        self.gap_y
    }

    /// Y position of the bottom block's top edge
    pub fn bottom_top_y(&self) -> f32 {
        self.gap_y + self.gap_height
    }

    pub fn bottom_height(&self, play_height: f32) -> f32 {
        play_height - self.bottom_top_y()
    }
}

/// Complete reaction game state
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FlappyState {
    pub phase: GamePhase,
    pub score: u32,
    pub player: Player,
    /// Obstacles in spawn order (left to right on screen)
    pub obstacles: Vec<Obstacle>,
    /// Play area width and height
    pub play_size: Vec2,
    /// Tuning captured when the current game started
    pub config: GameConfig,
    /// Best score recorded before the current game
    pub best_score: u32,
    /// Simulation tick counter for the current game
    pub time_ticks: u64,
    /// Tick of the most recent spawn (None = never)
    pub last_spawn_tick: Option<u64>,
    rng: Pcg32,
    next_id: u32,
}

impl FlappyState {
    pub fn new(seed: u64, config: GameConfig) -> Self {
        Self {
            phase: GamePhase::Ready,
            score: 0,
            player: Player::new(Vec2::ZERO, config.player_size),
            obstacles: Vec::new(),
            play_size: Vec2::ZERO,
            config,
            best_score: 0,
            time_ticks: 0,
            last_spawn_tick: None,
            rng: Pcg32::seed_from_u64(seed),
            next_id: 1,
        }
    }

    /// Where the player sits at the start of a game
    pub fn start_position(&self) -> Vec2 {
        Vec2::new(
            self.play_size.x * self.config.player_start_x_ratio,
            self.play_size.y / 2.0,
        )
    }

    /// Back to Ready: no obstacles, zero score, player re-centered
    ///
    /// The config and RNG stream are left alone.
    pub fn reset(&mut self) {
        let start = self.start_position();
        self.player.size = self.config.player_size;
        self.player.reset_to(start);
        self.obstacles.clear();
        self.score = 0;
        self.phase = GamePhase::Ready;
        self.time_ticks = 0;
        self.last_spawn_tick = None;
    }

    /// Seconds since the last spawn, infinite if nothing spawned this game
    pub fn seconds_since_spawn(&self) -> f32 {
        match self.last_spawn_tick {
            Some(tick) => (self.time_ticks - tick) as f32 * SIM_DT,
            None => f32::INFINITY,
        }
    }

    /// Spawn timer elapsed and the newest obstacle is far enough left
    pub fn should_spawn(&self) -> bool {
        self.seconds_since_spawn() > self.config.spawn_interval
            && self
                .obstacles
                .last()
                .is_none_or(|o| o.x < self.play_size.x * SPAWN_DISTANCE_RATIO)
    }

    /// Append an obstacle just off the right edge with a random gap
    pub fn spawn_obstacle(&mut self) {
        let cfg = self.config;
        let min_gap_y = GAP_MARGIN;
        let max_gap_y = (self.play_size.y - cfg.gap_height - GAP_MARGIN).max(min_gap_y);
        let gap_y = self.rng.random_range(min_gap_y..=max_gap_y);

        let id = self.next_entity_id();
        self.obstacles.push(Obstacle {
            id,
            x: self.play_size.x + cfg.obstacle_width / 2.0,
            gap_y,
            gap_height: cfg.gap_height,
            width: cfg.obstacle_width,
            scored: false,
        });
        self.last_spawn_tick = Some(self.time_ticks);
        log::debug!("Spawned obstacle {} with gap at {:.1}", id, gap_y);
    }

    fn next_entity_id(&mut self) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state_with_area(w: f32, h: f32) -> FlappyState {
        let mut state = FlappyState::new(7, GameConfig::default());
        state.play_size = Vec2::new(w, h);
        state.reset();
        state
    }

    #[test]
    fn test_reset_centers_player() {
        let state = state_with_area(400.0, 600.0);
        assert_eq!(state.player.pos, Vec2::new(100.0, 300.0));
        assert_eq!(state.player.velocity, 0.0);
        assert_eq!(state.phase, GamePhase::Ready);
        assert!(state.obstacles.is_empty());
    }

    #[test]
    fn test_jump_sets_velocity() {
        let mut p = Player::new(Vec2::ZERO, 30.0);
        p.velocity = 5.0;
        p.jump(-7.0);
        assert_eq!(p.velocity, -7.0);
        p.jump(-7.0);
        assert_eq!(p.velocity, -7.0);
    }

    #[test]
    fn test_spawn_places_obstacle_off_right_edge() {
        let mut state = state_with_area(400.0, 600.0);
        state.spawn_obstacle();
        let o = state.obstacles[0];
        assert_eq!(o.x, 430.0);
        assert_eq!(o.width, 60.0);
        assert_eq!(o.gap_height, 150.0);
        assert!(!o.scored);
        assert!(o.gap_y >= 80.0 && o.gap_y <= 600.0 - 150.0 - 80.0);
        assert_eq!(state.last_spawn_tick, Some(0));
    }

    #[test]
    fn test_spawn_gap_clamped_in_short_area() {
        // Height too small for margins: the gap sits at the lower bound
        let mut state = state_with_area(400.0, 200.0);
        state.spawn_obstacle();
        assert_eq!(state.obstacles[0].gap_y, 80.0);
    }

    #[test]
    fn test_obstacle_ids_unique() {
        let mut state = state_with_area(400.0, 600.0);
        state.spawn_obstacle();
        state.spawn_obstacle();
        assert_ne!(state.obstacles[0].id, state.obstacles[1].id);
    }

    #[test]
    fn test_obstacle_heights() {
        let o = Obstacle {
            id: 1,
            x: 0.0,
            gap_y: 100.0,
            gap_height: 150.0,
            width: 60.0,
            scored: false,
        };
        assert_eq!(o.top_height(), 100.0);
        assert_eq!(o.bottom_top_y(), 250.0);
        assert_eq!(o.bottom_height(600.0), 350.0);
    }

    #[test]
    fn test_should_spawn_rules() {
        let mut state = state_with_area(400.0, 600.0);
        assert!(state.should_spawn());

        state.spawn_obstacle();
        // Timer not elapsed
        assert!(!state.should_spawn());

        // Timer elapsed but newest obstacle still right of 60%
        state.time_ticks = 200;
        assert!(!state.should_spawn());

        state.obstacles[0].x = 239.0;
        assert!(state.should_spawn());
    }

    #[test]
    fn test_phase_helpers() {
        assert!(GamePhase::Playing.is_active());
        assert!(!GamePhase::Paused.is_active());
        assert!(GamePhase::Ready.can_start());
        assert!(
            GamePhase::GameOver {
                final_score: 1,
                is_new_best: false
            }
            .can_start()
        );
        assert!(!GamePhase::Playing.can_start());
    }
}
