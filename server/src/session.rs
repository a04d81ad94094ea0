use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

use tokio::sync::{Mutex, Notify};

use common::game::{GameStatus, Mark, TicTacToeGameState, select_move};
use common::{SessionId, log};

use crate::messages::{GameOverNotification, StateUpdate};

/// Seam between the game loop and the transport, so the loop can be driven
/// in tests without a socket.
pub trait GameBroadcaster: Send + Sync + Clone + 'static {
    fn broadcast_state(&self, update: StateUpdate) -> impl Future<Output = ()> + Send;

    fn broadcast_game_over(
        &self,
        notification: GameOverNotification,
    ) -> impl Future<Output = ()> + Send;
}

#[derive(Clone)]
pub struct TicTacToeSessionState {
    pub session_id: SessionId,
    pub game_state: Arc<Mutex<TicTacToeGameState>>,
    pub turn_notify: Arc<Notify>,
    pub human_mark: Mark,
    pub bot_mark: Mark,
    pub bot_reply_delay: Duration,
}

impl TicTacToeSessionState {
    pub fn create(session_id: SessionId, bot_reply_delay: Duration) -> Self {
        Self {
            session_id,
            game_state: Arc::new(Mutex::new(TicTacToeGameState::new())),
            turn_notify: Arc::new(Notify::new()),
            human_mark: Mark::X,
            bot_mark: Mark::O,
            bot_reply_delay,
        }
    }
}

pub struct TicTacToeSession;

impl TicTacToeSession {
    pub async fn run(session_state: TicTacToeSessionState, broadcaster: impl GameBroadcaster) {
        loop {
            broadcast_state(&session_state, &broadcaster).await;

            let (is_game_over, is_bot_turn) = {
                let game_state = session_state.game_state.lock().await;
                let is_over = game_state.status != GameStatus::InProgress;
                let is_bot = game_state.current_mark == session_state.bot_mark;
                (is_over, is_bot)
            };

            if is_game_over {
                break;
            }

            if is_bot_turn {
                play_bot_turn(&session_state).await;
            } else {
                session_state.turn_notify.notified().await;
            }
        }

        let game_state = session_state.game_state.lock().await;
        let notification = GameOverNotification::from_game_state(&game_state);
        drop(game_state);
        broadcaster.broadcast_game_over(notification).await;
    }

    pub async fn handle_place(state: &TicTacToeSessionState, cell: usize) -> Result<(), String> {
        let mut game_state = state.game_state.lock().await;
        match game_state.place_mark(state.human_mark, cell) {
            Ok(()) => {
                drop(game_state);
                state.turn_notify.notify_one();
                Ok(())
            }
            Err(e) => {
                log!(
                    "[session:{}] Rejected move at cell {}: {}",
                    state.session_id,
                    cell,
                    e
                );
                Err(e)
            }
        }
    }
}

async fn broadcast_state(session_state: &TicTacToeSessionState, broadcaster: &impl GameBroadcaster) {
    let game_state = session_state.game_state.lock().await;
    let update = StateUpdate::from_game_state(&game_state, session_state.human_mark);
    drop(game_state);
    broadcaster.broadcast_state(update).await;
}

async fn play_bot_turn(session_state: &TicTacToeSessionState) {
    if !session_state.bot_reply_delay.is_zero() {
        tokio::time::sleep(session_state.bot_reply_delay).await;
    }

    let board = {
        let game_state = session_state.game_state.lock().await;
        if game_state.status != GameStatus::InProgress
            || game_state.current_mark != session_state.bot_mark
        {
            return;
        }
        game_state.board
    };

    let bot_mark = session_state.bot_mark;
    let result = tokio::task::spawn_blocking(move || select_move(&board, bot_mark)).await;

    let Ok(Some(cell)) = result else {
        log!(
            "[session:{}] Bot found no move to play",
            session_state.session_id
        );
        return;
    };

    let mut game_state = session_state.game_state.lock().await;
    if let Err(e) = game_state.place_mark(bot_mark, cell) {
        log!(
            "[session:{}] Bot failed to place mark at cell {}: {}",
            session_state.session_id,
            cell,
            e
        );
    }
}
