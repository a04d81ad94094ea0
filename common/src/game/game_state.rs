use super::board::{Board, CELL_COUNT, empty_board};
use super::types::{GameStatus, Mark};
use super::win_detector::{has_won, is_draw};

/// One game of tic-tac-toe: the board plus whose turn it is and whether the
/// game has ended. X always moves first. Terminal statuses latch; restarting
/// means building a fresh state.
#[derive(Clone, Debug)]
pub struct TicTacToeGameState {
    pub board: Board,
    pub current_mark: Mark,
    pub status: GameStatus,
    pub last_move: Option<usize>,
}

impl TicTacToeGameState {
    pub fn new() -> Self {
        Self {
            board: empty_board(),
            current_mark: Mark::X,
            status: GameStatus::InProgress,
            last_move: None,
        }
    }

    pub fn place_mark(&mut self, mark: Mark, cell: usize) -> Result<(), String> {
        if self.status != GameStatus::InProgress {
            return Err("Game is already over".to_string());
        }

        if mark != self.current_mark {
            return Err("Not your turn".to_string());
        }

        if cell >= CELL_COUNT {
            return Err("Cell index out of bounds".to_string());
        }

        if self.board[cell] != Mark::Empty {
            return Err("Cell is already marked".to_string());
        }

        self.board[cell] = mark;
        self.last_move = Some(cell);

        self.check_game_over();

        if self.status == GameStatus::InProgress {
            self.switch_turn();
        }

        Ok(())
    }

    fn switch_turn(&mut self) {
        self.current_mark = match self.current_mark {
            Mark::X => Mark::O,
            Mark::O => Mark::X,
            Mark::Empty => unreachable!(),
        };
    }

    fn check_game_over(&mut self) {
        // A move can complete a line only for the mark just placed.
        if has_won(&self.board, self.current_mark) {
            self.status = match self.current_mark {
                Mark::X => GameStatus::XWon,
                Mark::O => GameStatus::OWon,
                Mark::Empty => unreachable!(),
            };
            return;
        }

        if is_draw(&self.board) {
            self.status = GameStatus::Draw;
        }
    }

    pub fn winner(&self) -> Option<Mark> {
        match self.status {
            GameStatus::XWon => Some(Mark::X),
            GameStatus::OWon => Some(Mark::O),
            _ => None,
        }
    }
}

impl Default for TicTacToeGameState {
    fn default() -> Self {
        Self::new()
    }
}
