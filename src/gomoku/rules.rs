//! Win and draw detection for Gomoku
//!
//! Only lines through the stone just placed can have changed, so the win
//! check scans the four axes through that one position instead of the
//! whole board.

use super::board::{Board, Position, Stone};

/// Line directions through a position
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Horizontal,
    Vertical,
    DiagonalDown,
    DiagonalUp,
}

impl Direction {
    /// Checked in this order; the first winning direction wins
    pub const ALL: [Direction; 4] = [
        Direction::Horizontal,
        Direction::Vertical,
        Direction::DiagonalDown,
        Direction::DiagonalUp,
    ];

    /// (d_row, d_col) of one step in the positive direction
    pub fn delta(&self) -> (isize, isize) {
        match self {
            Direction::Horizontal => (0, 1),
            Direction::Vertical => (1, 0),
            Direction::DiagonalDown => (1, 1),
            Direction::DiagonalUp => (1, -1),
        }
    }
}

/// All contiguous `stone` positions through `from` along `direction`
///
/// Starts with `from` itself, then walks the positive side, then the
/// negative side.
pub fn line_through(board: &Board, from: Position, direction: Direction, stone: Stone) -> Vec<Position> {
    let (d_row, d_col) = direction.delta();
    let mut line = vec![from];
    for sign in [1, -1] {
        let mut steps = 1;
        while let Some(pos) = from.offset(d_row * sign, d_col * sign, steps, board.size()) {
            if board.get(pos) != Some(stone) {
                break;
            }
            line.push(pos);
            steps += 1;
        }
    }
    line
}

/// The winning run through `at`, if `stone` has at least `win_length` in a row there
///
/// The run is the full matched extent and may be longer than `win_length`.
pub fn winning_line(board: &Board, at: Position, stone: Stone, win_length: usize) -> Option<Vec<Position>> {
    Direction::ALL
        .iter()
        .map(|&dir| line_through(board, at, dir, stone))
        .find(|line| line.len() >= win_length)
}

/// A draw is a full board; callers check for a win first
pub fn is_draw(board: &Board) -> bool {
    board.is_full()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn place(board: &mut Board, stone: Stone, cells: &[(usize, usize)]) {
        for &(r, c) in cells {
            board.set(Position::new(r, c), Some(stone));
        }
    }

    #[test]
    fn test_horizontal_five() {
        let mut board = Board::new(15);
        place(&mut board, Stone::Black, &[(7, 0), (7, 1), (7, 2), (7, 3), (7, 4)]);
        let line = winning_line(&board, Position::new(7, 4), Stone::Black, 5).unwrap();
        assert_eq!(line.len(), 5);
        for c in 0..5 {
            assert!(line.contains(&Position::new(7, c)));
        }
    }

    #[test]
    fn test_four_is_not_enough() {
        let mut board = Board::new(15);
        place(&mut board, Stone::Black, &[(7, 0), (7, 1), (7, 2), (7, 3)]);
        assert_eq!(winning_line(&board, Position::new(7, 3), Stone::Black, 5), None);
    }

    #[test]
    fn test_placed_in_middle_joins_both_sides() {
        let mut board = Board::new(15);
        place(&mut board, Stone::White, &[(3, 3), (4, 4), (6, 6), (7, 7)]);
        place(&mut board, Stone::White, &[(5, 5)]);
        let line = winning_line(&board, Position::new(5, 5), Stone::White, 5).unwrap();
        assert_eq!(line.len(), 5);
        assert_eq!(line[0], Position::new(5, 5));
    }

    #[test]
    fn test_overline_returns_full_extent() {
        let mut board = Board::new(15);
        place(&mut board, Stone::Black, &[(0, 2), (1, 2), (2, 2), (4, 2), (5, 2), (6, 2)]);
        place(&mut board, Stone::Black, &[(3, 2)]);
        let line = winning_line(&board, Position::new(3, 2), Stone::Black, 5).unwrap();
        assert_eq!(line.len(), 7);
    }

    #[test]
    fn test_diagonal_up() {
        let mut board = Board::new(15);
        place(&mut board, Stone::Black, &[(4, 0), (3, 1), (2, 2), (1, 3), (0, 4)]);
        let line = winning_line(&board, Position::new(2, 2), Stone::Black, 5).unwrap();
        assert_eq!(line.len(), 5);
        assert!(line.contains(&Position::new(0, 4)));
        assert!(line.contains(&Position::new(4, 0)));
    }

    #[test]
    fn test_opponent_stones_break_line() {
        let mut board = Board::new(15);
        place(&mut board, Stone::Black, &[(0, 0), (0, 1), (0, 3), (0, 4)]);
        place(&mut board, Stone::White, &[(0, 2)]);
        assert_eq!(winning_line(&board, Position::new(0, 1), Stone::Black, 5), None);
    }

    #[test]
    fn test_first_winning_direction_is_reported() {
        // Horizontal and vertical fives share (5, 5); horizontal is checked first
        let mut board = Board::new(15);
        place(&mut board, Stone::Black, &[(5, 1), (5, 2), (5, 3), (5, 4), (5, 5)]);
        place(&mut board, Stone::Black, &[(1, 5), (2, 5), (3, 5), (4, 5)]);
        let line = winning_line(&board, Position::new(5, 5), Stone::Black, 5).unwrap();
        assert!(line.iter().all(|p| p.row == 5));
    }

    #[test]
    fn test_is_draw_only_when_full() {
        let mut board = Board::new(2);
        place(&mut board, Stone::Black, &[(0, 0), (1, 1)]);
        place(&mut board, Stone::White, &[(0, 1)]);
        assert!(!is_draw(&board));
        place(&mut board, Stone::White, &[(1, 0)]);
        assert!(is_draw(&board));
    }
}
