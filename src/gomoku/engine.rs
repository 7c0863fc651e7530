//! Gomoku engine
//!
//! Invalid actions (occupied or off-board cell, moves after the game ended,
//! undo with nothing to undo) are ignored without error.

use std::rc::Rc;

use serde::{Deserialize, Serialize};

use super::board::{Board, GomokuConfig, Position, Stone};
use super::rules::{is_draw, winning_line};
use crate::haptics::{HapticEvent, HapticSink};
use crate::observe::{Observers, SubscriptionId};
use crate::stats::{GomokuResult, GomokuStats, StatsStore};

/// Game outcome
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Outcome {
    InProgress { current: Stone },
    Won { winner: Stone },
    Draw,
}

impl Outcome {
    pub fn is_game_over(&self) -> bool {
        !matches!(self, Outcome::InProgress { .. })
    }
}

/// One placed stone
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Move {
    pub position: Position,
    pub stone: Stone,
    /// 1-based move number
    pub number: usize,
}

/// Snapshot handed to subscribers
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GomokuState {
    pub board: Board,
    pub outcome: Outcome,
    pub history: Vec<Move>,
    pub last_move: Option<Position>,
    /// Stones of the winning run, empty unless won
    pub winning_positions: Vec<Position>,
}

impl GomokuState {
    fn new(size: usize) -> Self {
        Self {
            board: Board::new(size),
            outcome: Outcome::InProgress {
                current: Stone::Black,
            },
            history: Vec::new(),
            last_move: None,
            winning_positions: Vec::new(),
        }
    }
}

/// One Gomoku screen session
pub struct GomokuEngine {
    config: GomokuConfig,
    state: GomokuState,
    stats: Rc<dyn StatsStore>,
    haptics: Rc<dyn HapticSink>,
    observers: Observers<GomokuState>,
}

impl GomokuEngine {
    pub fn new(config: GomokuConfig, stats: Rc<dyn StatsStore>, haptics: Rc<dyn HapticSink>) -> Self {
        Self {
            config,
            state: GomokuState::new(config.size),
            stats,
            haptics,
            observers: Observers::new(),
        }
    }

    /// Place the current player's stone at (row, col)
    pub fn place_stone(&mut self, row: usize, col: usize) {
        let Outcome::InProgress { current } = self.state.outcome else {
            return;
        };
        let pos = Position::new(row, col);
        if !self.state.board.is_empty_at(pos) {
            return;
        }

        self.state.board.set(pos, Some(current));
        self.state.last_move = Some(pos);
        self.state.history.push(Move {
            position: pos,
            stone: current,
            number: self.state.history.len() + 1,
        });
        self.haptics.play(HapticEvent::Tap);
        log::debug!("{} plays ({}, {})", current.as_str(), row, col);

        if let Some(line) = winning_line(&self.state.board, pos, current, self.config.win_length) {
            self.state.winning_positions = line;
            self.state.outcome = Outcome::Won { winner: current };
            log::info!("{} wins after {} moves", current.as_str(), self.state.history.len());
            self.haptics.play(HapticEvent::Success);
            self.stats.record_gomoku_game(current.into());
        } else if is_draw(&self.state.board) {
            self.state.outcome = Outcome::Draw;
            log::info!("Gomoku draw");
            self.haptics.play(HapticEvent::Warning);
            self.stats.record_gomoku_game(GomokuResult::Draw);
        } else {
            self.state.outcome = Outcome::InProgress {
                current: current.opponent(),
            };
        }
        self.notify();
    }

    pub fn place_stone_at(&mut self, pos: Position) {
        self.place_stone(pos.row, pos.col);
    }

    /// Take back the last move; the player who made it moves again
    pub fn undo(&mut self) {
        if !self.can_undo() {
            return;
        }
        let Some(last) = self.state.history.pop() else {
            return;
        };
        self.state.board.set(last.position, None);
        self.state.last_move = self.state.history.last().map(|m| m.position);
        self.state.outcome = Outcome::InProgress { current: last.stone };
        self.state.winning_positions.clear();
        self.haptics.play(HapticEvent::Tap);
        self.notify();
    }

    /// Empty board, black to move
    pub fn reset(&mut self) {
        self.state = GomokuState::new(self.config.size);
        self.haptics.play(HapticEvent::Tap);
        self.notify();
    }

    pub fn subscribe(&mut self, callback: impl FnMut(&GomokuState) + 'static) -> SubscriptionId {
        self.observers.subscribe(callback)
    }

    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.observers.unsubscribe(id)
    }

    pub fn config(&self) -> &GomokuConfig {
        &self.config
    }

    pub fn state(&self) -> &GomokuState {
        &self.state
    }

    pub fn board(&self) -> &Board {
        &self.state.board
    }

    pub fn outcome(&self) -> Outcome {
        self.state.outcome
    }

    pub fn history(&self) -> &[Move] {
        &self.state.history
    }

    pub fn last_move(&self) -> Option<Position> {
        self.state.last_move
    }

    pub fn winning_positions(&self) -> &[Position] {
        &self.state.winning_positions
    }

    /// Player to move, None once the game is over
    pub fn current_player(&self) -> Option<Stone> {
        match self.state.outcome {
            Outcome::InProgress { current } => Some(current),
            _ => None,
        }
    }

    pub fn is_game_over(&self) -> bool {
        self.state.outcome.is_game_over()
    }

    pub fn can_undo(&self) -> bool {
        !self.state.history.is_empty() && !self.is_game_over()
    }

    pub fn stats(&self) -> GomokuStats {
        self.stats.gomoku_stats()
    }

    pub fn status_text(&self) -> String {
        match self.state.outcome {
            Outcome::InProgress { current } => format!("{} to move", current.as_str()),
            Outcome::Won { winner } => format!("{} wins!", winner.as_str()),
            Outcome::Draw => "Draw!".to_string(),
        }
    }

    fn notify(&mut self) {
        self.observers.notify(&self.state);
    }
}

impl std::fmt::Debug for GomokuEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GomokuEngine")
            .field("config", &self.config)
            .field("state", &self.state)
            .finish()
    }
}
