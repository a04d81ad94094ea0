use super::types::Mark;

pub const CELL_COUNT: usize = 9;

/// Row-major 3x3 grid: index = row * 3 + col.
pub type Board = [Mark; CELL_COUNT];

pub fn empty_board() -> Board {
    [Mark::Empty; CELL_COUNT]
}

/// Empty cells in ascending index order.
pub fn get_available_moves(board: &Board) -> Vec<usize> {
    let mut moves = Vec::new();
    for (cell, &mark) in board.iter().enumerate() {
        if mark == Mark::Empty {
            moves.push(cell);
        }
    }
    moves
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_board_has_all_moves() {
        let board = empty_board();
        assert_eq!(get_available_moves(&board), (0..CELL_COUNT).collect::<Vec<_>>());
    }

    #[test]
    fn test_available_moves_skip_occupied_cells() {
        let mut board = empty_board();
        board[0] = Mark::X;
        board[4] = Mark::O;
        board[8] = Mark::X;
        assert_eq!(get_available_moves(&board), vec![1, 2, 3, 5, 6, 7]);
    }

    #[test]
    fn test_full_board_has_no_moves() {
        let board = [Mark::X; CELL_COUNT];
        assert!(get_available_moves(&board).is_empty());
    }
}
