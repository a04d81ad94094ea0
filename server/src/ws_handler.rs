use std::time::Duration;

use axum::extract::ws::{Message, WebSocket};
use futures_util::{SinkExt, StreamExt};
use tokio::sync::mpsc;
use tokio::task::JoinHandle;

use common::id_generator::generate_session_id;
use common::{SessionId, log};

use crate::messages::{ClientMessage, GameOverNotification, ServerMessage, StateUpdate};
use crate::session::{GameBroadcaster, TicTacToeSession, TicTacToeSessionState};
use crate::web_server::WebServerState;

#[derive(Clone)]
struct WsBroadcaster {
    tx: mpsc::Sender<ServerMessage>,
}

impl GameBroadcaster for WsBroadcaster {
    async fn broadcast_state(&self, update: StateUpdate) {
        let _ = self.tx.send(ServerMessage::State(update)).await;
    }

    async fn broadcast_game_over(&self, notification: GameOverNotification) {
        let _ = self.tx.send(ServerMessage::GameOver(notification)).await;
    }
}

pub async fn handle_websocket(socket: WebSocket, state: WebServerState) {
    let (mut ws_sender, mut ws_receiver) = socket.split();
    let (tx, mut rx) = mpsc::channel::<ServerMessage>(128);

    let send_task = tokio::spawn(async move {
        while let Some(message) = rx.recv().await {
            let payload = match serde_json::to_string(&message) {
                Ok(payload) => payload,
                Err(e) => {
                    log!("Failed to encode server message: {}", e);
                    continue;
                }
            };
            if ws_sender.send(Message::Text(payload.into())).await.is_err() {
                break;
            }
        }
    });

    let session_id = SessionId::new(generate_session_id());
    let bot_reply_delay = Duration::from_millis(state.config.bot_reply_delay_ms);
    log!("[session:{}] Browser client connected", session_id);

    let broadcaster = WsBroadcaster { tx: tx.clone() };
    let mut session_state = TicTacToeSessionState::create(session_id.clone(), bot_reply_delay);
    let mut session_task = spawn_session(&session_state, &broadcaster);

    while let Some(result) = ws_receiver.next().await {
        let message = match result {
            Ok(message) => message,
            Err(e) => {
                log!("[session:{}] WebSocket error: {}", session_id, e);
                break;
            }
        };

        let text = match message {
            Message::Text(text) => text,
            Message::Close(_) => break,
            _ => continue,
        };

        let client_message = match serde_json::from_str::<ClientMessage>(&text) {
            Ok(message) => message,
            Err(e) => {
                log!("[session:{}] Failed to decode client message: {}", session_id, e);
                send_error(&tx, format!("Malformed message: {}", e)).await;
                continue;
            }
        };

        match client_message {
            ClientMessage::NewGame => {
                session_task.abort();
                session_state = TicTacToeSessionState::create(session_id.clone(), bot_reply_delay);
                session_task = spawn_session(&session_state, &broadcaster);
                log!("[session:{}] Game restarted", session_id);
            }
            ClientMessage::Place { cell } => {
                if let Err(e) = TicTacToeSession::handle_place(&session_state, cell).await {
                    send_error(&tx, e).await;
                }
            }
        }
    }

    session_task.abort();
    send_task.abort();
    log!("[session:{}] Browser client disconnected", session_id);
}

fn spawn_session(
    session_state: &TicTacToeSessionState,
    broadcaster: &WsBroadcaster,
) -> JoinHandle<()> {
    tokio::spawn(TicTacToeSession::run(
        session_state.clone(),
        broadcaster.clone(),
    ))
}

async fn send_error(tx: &mpsc::Sender<ServerMessage>, message: String) {
    let _ = tx.send(ServerMessage::Error { message }).await;
}
