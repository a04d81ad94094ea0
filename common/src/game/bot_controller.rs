use super::board::{Board, CELL_COUNT, get_available_moves};
use super::types::Mark;
use super::win_detector::{has_won, is_draw};

/// Picks the cell for `bot_mark` by exhaustive minimax over the full game
/// tree. Returns `None` only when the board has no empty cell; callers are
/// expected to consult the game status first and not ask for a move on a
/// finished board.
///
/// Equal scores resolve to the lowest cell index, so the choice is
/// deterministic.
pub fn select_move(board: &Board, bot_mark: Mark) -> Option<usize> {
    let opponent_mark = bot_mark.opponent()?;

    let available_moves = get_available_moves(board);
    if available_moves.is_empty() {
        return None;
    }

    let mut board = *board;
    let mut best_move = None;
    let mut best_score = i32::MIN;

    for cell in available_moves {
        board[cell] = bot_mark;
        let score = minimax(&mut board, bot_mark, opponent_mark, false);
        board[cell] = Mark::Empty;

        if score > best_score {
            best_score = score;
            best_move = Some(cell);
        }
    }

    best_move
}

// Undiscounted scoring: any forced win is +1 no matter how many plies away.
fn minimax(board: &mut Board, bot_mark: Mark, opponent_mark: Mark, is_maximizing: bool) -> i32 {
    if has_won(board, bot_mark) {
        return 1;
    }
    if has_won(board, opponent_mark) {
        return -1;
    }
    if is_draw(board) {
        return 0;
    }

    if is_maximizing {
        let mut best = i32::MIN;
        for cell in 0..CELL_COUNT {
            if board[cell] != Mark::Empty {
                continue;
            }
            board[cell] = bot_mark;
            best = best.max(minimax(board, bot_mark, opponent_mark, false));
            board[cell] = Mark::Empty;
        }
        best
    } else {
        let mut best = i32::MAX;
        for cell in 0..CELL_COUNT {
            if board[cell] != Mark::Empty {
                continue;
            }
            board[cell] = opponent_mark;
            best = best.min(minimax(board, bot_mark, opponent_mark, true));
            board[cell] = Mark::Empty;
        }
        best
    }
}
