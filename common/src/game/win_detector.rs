use super::board::Board;
use super::types::{GameOutcome, Mark, WinningLine};

/// The 3 rows, 3 columns and 2 diagonals, as row-major cell indices.
pub const WINNING_LINES: [[usize; 3]; 8] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    [0, 4, 8],
    [2, 4, 6],
];

pub fn has_won(board: &Board, mark: Mark) -> bool {
    if mark == Mark::Empty {
        return false;
    }
    WINNING_LINES
        .iter()
        .any(|line| line.iter().all(|&cell| board[cell] == mark))
}

pub fn check_win(board: &Board) -> Option<Mark> {
    check_win_with_line(board).map(|line| line.mark)
}

pub fn check_win_with_line(board: &Board) -> Option<WinningLine> {
    for &line in &WINNING_LINES {
        let mark = board[line[0]];
        if mark != Mark::Empty && board[line[1]] == mark && board[line[2]] == mark {
            return Some(WinningLine::new(mark, line));
        }
    }
    None
}

/// True iff no cell is empty. Does not consult the win check; a filled board
/// with a completed line is a win, not a draw, and `evaluate` orders the two.
pub fn is_draw(board: &Board) -> bool {
    board.iter().all(|&mark| mark != Mark::Empty)
}

pub fn evaluate(board: &Board) -> GameOutcome {
    if let Some(mark) = check_win(board) {
        return GameOutcome::Win(mark);
    }
    if is_draw(board) {
        GameOutcome::Draw
    } else {
        GameOutcome::InProgress
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::board::empty_board;

    #[test]
    fn test_detects_every_winning_line_for_both_marks() {
        for mark in [Mark::X, Mark::O] {
            for line in WINNING_LINES {
                let mut board = empty_board();
                for cell in line {
                    board[cell] = mark;
                }
                assert!(has_won(&board, mark), "line {:?} not detected", line);
                assert_eq!(check_win(&board), Some(mark));
                assert_eq!(check_win_with_line(&board).unwrap().cells, line);
            }
        }
    }

    #[test]
    fn test_no_win_on_empty_board() {
        let board = empty_board();
        assert!(!has_won(&board, Mark::X));
        assert!(!has_won(&board, Mark::O));
        assert_eq!(check_win(&board), None);
    }

    #[test]
    fn test_empty_mark_never_wins() {
        assert!(!has_won(&empty_board(), Mark::Empty));
    }

    #[test]
    fn test_mixed_line_is_not_a_win() {
        let mut board = empty_board();
        board[0] = Mark::X;
        board[1] = Mark::O;
        board[2] = Mark::X;
        assert!(!has_won(&board, Mark::X));
        assert!(!has_won(&board, Mark::O));
    }

    #[test]
    fn test_is_draw_requires_every_cell_filled() {
        let mut board = empty_board();
        assert!(!is_draw(&board));
        for cell in 0..8 {
            board[cell] = if cell % 2 == 0 { Mark::X } else { Mark::O };
        }
        assert!(!is_draw(&board));
        board[8] = Mark::X;
        assert!(is_draw(&board));
    }

    #[test]
    fn test_is_draw_is_independent_of_winner() {
        // Full board where X holds the top row.
        let board = [
            Mark::X, Mark::X, Mark::X,
            Mark::O, Mark::X, Mark::O,
            Mark::X, Mark::O, Mark::O,
        ];
        assert!(is_draw(&board));
        assert!(has_won(&board, Mark::X));
    }

    #[test]
    fn test_evaluate_prefers_win_over_draw() {
        let board = [
            Mark::X, Mark::X, Mark::X,
            Mark::O, Mark::X, Mark::O,
            Mark::X, Mark::O, Mark::O,
        ];
        assert_eq!(evaluate(&board), GameOutcome::Win(Mark::X));
    }

    #[test]
    fn test_evaluate_reports_draw() {
        let board = [
            Mark::X, Mark::X, Mark::O,
            Mark::O, Mark::O, Mark::X,
            Mark::X, Mark::X, Mark::O,
        ];
        assert_eq!(evaluate(&board), GameOutcome::Draw);
    }

    #[test]
    fn test_evaluate_reports_in_progress() {
        let mut board = empty_board();
        board[4] = Mark::X;
        assert_eq!(evaluate(&board), GameOutcome::InProgress);
    }
}
