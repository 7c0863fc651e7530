//! Strategy game (Gomoku, five in a row)
//!
//! Two players alternate placing stones on a square board. A player wins by
//! forming an unbroken line of at least `win_length` stones horizontally,
//! vertically or diagonally. A full board without a winner is a draw.

pub mod board;
pub mod engine;
pub mod rules;

pub use board::{Board, GomokuConfig, Position, Stone};
pub use engine::{GomokuEngine, GomokuState, Move, Outcome};
pub use rules::{Direction, is_draw, line_through, winning_line};
