mod messages;
mod server_config;
mod session;
mod web_server;
mod ws_handler;

use clap::Parser;

use common::config::ConfigManager;
use common::{log, logger};

use server_config::ServerConfig;

#[derive(Parser)]
#[command(name = "tictactoe_server")]
struct Args {
    /// Path to the YAML config; missing file means built-in defaults.
    #[arg(long, default_value = "server.yaml")]
    config: String,

    #[arg(long)]
    use_log_prefix: bool,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let prefix = if args.use_log_prefix {
        Some("Server".to_string())
    } else {
        None
    };
    logger::init_logger(prefix);

    let config: ServerConfig = ConfigManager::from_yaml_file(&args.config).get_config()?;
    log!(
        "Starting tic-tac-toe server: listen_addr={}, static_files_path={}, bot_reply_delay_ms={}",
        config.listen_addr,
        config.static_files_path,
        config.bot_reply_delay_ms
    );

    web_server::run_web_server(config).await?;

    log!("Server shut down gracefully");

    Ok(())
}
