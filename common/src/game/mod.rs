mod board;
mod bot_controller;
mod game_state;
mod types;
mod win_detector;

pub use board::{Board, CELL_COUNT, empty_board, get_available_moves};
pub use bot_controller::select_move;
pub use game_state::TicTacToeGameState;
pub use types::{GameOutcome, GameStatus, Mark, WinningLine};
pub use win_detector::{
    WINNING_LINES, check_win, check_win_with_line, evaluate, has_won, is_draw,
};
