use serde::{Deserialize, Serialize};

use common::game::{GameStatus, Mark, TicTacToeGameState, check_win_with_line};

/// Messages the browser client sends over the WebSocket.
#[derive(Debug, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ClientMessage {
    NewGame,
    Place { cell: usize },
}

/// Messages the server pushes to the browser client.
#[derive(Debug, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ServerMessage {
    State(StateUpdate),
    GameOver(GameOverNotification),
    Error { message: String },
}

#[derive(Debug, Serialize)]
pub struct StateUpdate {
    pub board: Vec<&'static str>,
    pub current_mark: &'static str,
    pub your_mark: &'static str,
    pub status: &'static str,
    pub last_move: Option<usize>,
}

impl StateUpdate {
    pub fn from_game_state(state: &TicTacToeGameState, human_mark: Mark) -> Self {
        Self {
            board: state.board.iter().map(Mark::as_str).collect(),
            current_mark: state.current_mark.as_str(),
            your_mark: human_mark.as_str(),
            status: status_str(state.status),
            last_move: state.last_move,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct GameOverNotification {
    pub status: &'static str,
    pub winner: Option<&'static str>,
    pub winning_line: Option<[usize; 3]>,
}

impl GameOverNotification {
    pub fn from_game_state(state: &TicTacToeGameState) -> Self {
        Self {
            status: status_str(state.status),
            winner: state.winner().map(|mark| mark.as_str()),
            winning_line: check_win_with_line(&state.board).map(|line| line.cells),
        }
    }
}

fn status_str(status: GameStatus) -> &'static str {
    match status {
        GameStatus::InProgress => "in_progress",
        GameStatus::XWon => "x_won",
        GameStatus::OWon => "o_won",
        GameStatus::Draw => "draw",
    }
}
