//! Gomoku board, stones and positions

use serde::{Deserialize, Serialize};

use crate::consts::{GOMOKU_BOARD_SIZE, GOMOKU_WIN_LENGTH};
use crate::stats::GomokuResult;

/// Stone color; black always moves first
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Stone {
    Black,
    White,
}

impl Stone {
    pub fn opponent(&self) -> Stone {
        match self {
            Stone::Black => Stone::White,
            Stone::White => Stone::Black,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Stone::Black => "Black",
            Stone::White => "White",
        }
    }
}

impl From<Stone> for GomokuResult {
    fn from(stone: Stone) -> Self {
        match stone {
            Stone::Black => GomokuResult::Black,
            Stone::White => GomokuResult::White,
        }
    }
}

/// A board coordinate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

impl Position {
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    pub fn from_index(index: usize, board_size: usize) -> Self {
        Self {
            row: index / board_size,
            col: index % board_size,
        }
    }

    pub fn to_index(&self, board_size: usize) -> usize {
        self.row * board_size + self.col
    }

    pub fn is_valid(&self, board_size: usize) -> bool {
        self.row < board_size && self.col < board_size
    }

    /// Neighbor `steps` cells away along (d_row, d_col), if it exists on the board
    pub fn offset(&self, d_row: isize, d_col: isize, steps: isize, board_size: usize) -> Option<Self> {
        let row = self.row.checked_add_signed(d_row * steps)?;
        let col = self.col.checked_add_signed(d_col * steps)?;
        let pos = Position { row, col };
        pos.is_valid(board_size).then_some(pos)
    }
}

/// Board dimensions and win length
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GomokuConfig {
    pub size: usize,
    /// Contiguous stones needed to win
    pub win_length: usize,
}

impl Default for GomokuConfig {
    fn default() -> Self {
        Self {
            size: GOMOKU_BOARD_SIZE,
            win_length: GOMOKU_WIN_LENGTH,
        }
    }
}

impl GomokuConfig {
    pub fn with_size(size: usize) -> Self {
        Self {
            size,
            ..Self::default()
        }
    }

    pub fn total_cells(&self) -> usize {
        self.size * self.size
    }
}

/// Square grid of optional stones, row-major
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    size: usize,
    cells: Vec<Option<Stone>>,
}

impl Board {
    pub fn new(size: usize) -> Self {
        Self {
            size,
            cells: vec![None; size * size],
        }
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn contains(&self, pos: Position) -> bool {
        pos.is_valid(self.size)
    }

    /// Stone at `pos`; off-board positions read as empty
    pub fn get(&self, pos: Position) -> Option<Stone> {
        if !self.contains(pos) {
            return None;
        }
        self.cells[pos.to_index(self.size)]
    }

    pub(crate) fn set(&mut self, pos: Position, cell: Option<Stone>) {
        let index = pos.to_index(self.size);
        self.cells[index] = cell;
    }

    pub fn is_empty_at(&self, pos: Position) -> bool {
        self.contains(pos) && self.get(pos).is_none()
    }

    pub fn empty_count(&self) -> usize {
        self.cells.iter().filter(|c| c.is_none()).count()
    }

    pub fn is_full(&self) -> bool {
        self.cells.iter().all(Option::is_some)
    }

    /// Rows top to bottom
    pub fn rows(&self) -> impl Iterator<Item = &[Option<Stone>]> {
        self.cells.chunks(self.size.max(1))
    }
}

/// One line per row: `X` black, `O` white, `.` empty
impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for row in self.rows() {
            let line: String = row
                .iter()
                .map(|cell| match cell {
                    Some(Stone::Black) => 'X',
                    Some(Stone::White) => 'O',
                    None => '.',
                })
                .collect();
            writeln!(f, "{}", line)?;
        }
        Ok(())
    }
}
