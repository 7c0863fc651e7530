//! Reaction game engine
//!
//! Wraps the pure simulation with the things a screen needs: input
//! dispatch, difficulty changes that apply to the next game, a fixed-step
//! driver for frame callbacks, stats recording, haptics and state
//! subscriptions. The engine never owns a timer.

use std::rc::Rc;

use glam::Vec2;

use super::state::{FlappyState, GamePhase};
use super::tick::{GameEvent, tick};
use crate::consts::{MAX_FRAME_DT, MAX_SUBSTEPS, SIM_DT};
use crate::difficulty::{Difficulty, GameConfig};
use crate::haptics::{HapticEvent, HapticSink};
use crate::observe::{Observers, SubscriptionId};
use crate::stats::{FlappyStats, StatsStore};

/// One reaction game screen session
pub struct FlappyEngine {
    state: FlappyState,
    /// Tuning for the next game
    pending_config: GameConfig,
    stats: Rc<dyn StatsStore>,
    haptics: Rc<dyn HapticSink>,
    observers: Observers<FlappyState>,
    accumulator: f32,
    events: Vec<GameEvent>,
}

impl FlappyEngine {
    pub fn new(
        seed: u64,
        difficulty: Difficulty,
        stats: Rc<dyn StatsStore>,
        haptics: Rc<dyn HapticSink>,
    ) -> Self {
        let config = GameConfig::for_difficulty(difficulty);
        let mut state = FlappyState::new(seed, config);
        state.best_score = stats.best_score();
        Self {
            state,
            pending_config: config,
            stats,
            haptics,
            observers: Observers::new(),
            accumulator: 0.0,
            events: Vec::new(),
        }
    }

    /// Resolve tuning for the next game; a game in progress keeps its own
    pub fn configure(&mut self, difficulty: Difficulty) {
        self.pending_config = GameConfig::for_difficulty(difficulty);
        log::debug!("Next reaction game uses {} difficulty", difficulty.as_str());
    }

    /// Set the play area and go back to Ready with the player centered
    pub fn setup_play_area(&mut self, width: f32, height: f32) {
        self.state.play_size = Vec2::new(width, height);
        self.reset();
    }

    /// Tap/click: start, jump, restart or resume depending on the phase
    pub fn handle_input(&mut self) {
        match self.state.phase {
            GamePhase::Ready => self.start_game(),
            GamePhase::Playing => {
                self.state.player.jump(self.state.config.jump_impulse);
                self.haptics.play(HapticEvent::Jump);
                self.notify();
            }
            GamePhase::GameOver { .. } => {
                self.reset();
                self.start_game();
            }
            GamePhase::Paused => self.resume(),
        }
    }

    /// Run one simulation step. No-op unless Playing.
    pub fn tick(&mut self) {
        if !self.state.phase.is_active() {
            return;
        }
        let mut events = std::mem::take(&mut self.events);
        tick(&mut self.state, &mut events);
        for event in events.drain(..) {
            self.dispatch(event);
        }
        self.events = events;
        self.notify();
    }

    /// Feed wall-clock time (seconds) and run as many whole ticks as fit
    ///
    /// Returns the number of ticks run.
    pub fn advance(&mut self, dt: f32) -> u32 {
        if !dt.is_finite() {
            log::warn!("Ignoring non-finite frame delta {}", dt);
            return 0;
        }
        if !self.state.phase.is_active() {
            self.accumulator = 0.0;
            return 0;
        }
        self.accumulator += dt.clamp(0.0, MAX_FRAME_DT);

        let mut substeps = 0;
        while self.accumulator >= SIM_DT && substeps < MAX_SUBSTEPS {
            self.tick();
            self.accumulator -= SIM_DT;
            substeps += 1;
            if !self.state.phase.is_active() {
                self.accumulator = 0.0;
                break;
            }
        }
        substeps
    }

    pub fn pause(&mut self) {
        if self.state.phase != GamePhase::Playing {
            return;
        }
        self.state.phase = GamePhase::Paused;
        self.accumulator = 0.0;
        self.notify();
    }

    pub fn resume(&mut self) {
        if self.state.phase != GamePhase::Paused {
            return;
        }
        self.state.phase = GamePhase::Playing;
        self.notify();
    }

    /// Clear obstacles and score, back to Ready. Difficulty is untouched.
    pub fn reset(&mut self) {
        self.state.reset();
        self.accumulator = 0.0;
        self.notify();
    }

    pub fn subscribe(&mut self, callback: impl FnMut(&FlappyState) + 'static) -> SubscriptionId {
        self.observers.subscribe(callback)
    }

    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.observers.unsubscribe(id)
    }

    pub fn state(&self) -> &FlappyState {
        &self.state
    }

    pub fn phase(&self) -> GamePhase {
        self.state.phase
    }

    pub fn score(&self) -> u32 {
        self.state.score
    }

    /// Tuning of the current (or last) game
    pub fn config(&self) -> &GameConfig {
        &self.state.config
    }

    /// Tuning the next game will use
    pub fn pending_config(&self) -> &GameConfig {
        &self.pending_config
    }

    /// Whether the host should keep its tick timer running
    pub fn is_running(&self) -> bool {
        self.state.phase.is_active()
    }

    pub fn stats(&self) -> FlappyStats {
        self.stats.flappy_stats()
    }

    pub fn status_message(&self) -> String {
        match self.state.phase {
            GamePhase::Ready => "Tap to start".to_string(),
            GamePhase::Playing => format!("Score: {}", self.state.score),
            GamePhase::Paused => "Paused".to_string(),
            GamePhase::GameOver {
                final_score,
                is_new_best: true,
            } => format!("New best! Score: {}", final_score),
            GamePhase::GameOver { final_score, .. } => format!("Game over! Score: {}", final_score),
        }
    }

    fn start_game(&mut self) {
        let config = self.pending_config;
        self.state.config = config;
        self.state.player.size = config.player_size;
        self.state.best_score = self.stats.best_score();
        self.state.phase = GamePhase::Playing;
        self.accumulator = 0.0;
        log::info!(
            "Reaction game started (gap {}, speed {}, best {})",
            config.gap_height,
            config.obstacle_speed,
            self.state.best_score
        );
        self.notify();
    }

    fn dispatch(&mut self, event: GameEvent) {
        match event {
            GameEvent::Scored { .. } => self.haptics.play(HapticEvent::Score),
            GameEvent::GameOver {
                final_score,
                is_new_best,
            } => {
                log::info!(
                    "Reaction game over: score {}{}",
                    final_score,
                    if is_new_best { " (new best)" } else { "" }
                );
                self.haptics.play(HapticEvent::Collision);
                self.haptics.play(if is_new_best {
                    HapticEvent::NewHighScore
                } else {
                    HapticEvent::GameOver
                });
                self.stats.record_flappy_game(final_score);
            }
        }
    }

    fn notify(&mut self) {
        self.observers.notify(&self.state);
    }
}

impl std::fmt::Debug for FlappyEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FlappyEngine")
            .field("state", &self.state)
            .field("pending_config", &self.pending_config)
            .field("accumulator", &self.accumulator)
            .finish()
    }
}
