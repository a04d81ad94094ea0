use std::path::PathBuf;

use axum::{
    Router,
    extract::{State, WebSocketUpgrade},
    response::{IntoResponse, Redirect},
    routing::get,
};
use tower_http::{
    cors::{Any, CorsLayer},
    services::ServeDir,
};

use common::log;

use crate::server_config::ServerConfig;
use crate::ws_handler::handle_websocket;

#[derive(Clone)]
pub struct WebServerState {
    pub config: ServerConfig,
}

pub async fn run_web_server(config: ServerConfig) -> std::io::Result<()> {
    let listen_addr = config.listen_addr.clone();
    let static_files_path = PathBuf::from(&config.static_files_path);
    let state = WebServerState { config };

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let app = Router::new()
        .route("/", get(|| async { Redirect::permanent("/ui/") }))
        .route("/ws", get(ws_upgrade_handler))
        .nest_service("/ui", ServeDir::new(&static_files_path))
        .layer(cors)
        .with_state(state);

    log!("Web server listening on {}", listen_addr);

    let listener = tokio::net::TcpListener::bind(&listen_addr).await?;

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        log!("Failed to listen for shutdown signal: {}", e);
        return;
    }
    log!("Shutdown signal received");
}

async fn ws_upgrade_handler(
    ws: WebSocketUpgrade,
    State(state): State<WebServerState>,
) -> impl IntoResponse {
    ws.on_upgrade(move |socket| handle_websocket(socket, state))
}
