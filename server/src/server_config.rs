use std::net::SocketAddr;

use serde::{Deserialize, Serialize};

use common::config::Validate;

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub listen_addr: String,
    pub static_files_path: String,
    /// Pause before the bot answers a human move, so the reply does not feel
    /// instantaneous. Purely presentational.
    pub bot_reply_delay_ms: u64,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            listen_addr: "0.0.0.0:5000".to_string(),
            static_files_path: "server/static".to_string(),
            bot_reply_delay_ms: 500,
        }
    }
}

impl Validate for ServerConfig {
    fn validate(&self) -> Result<(), String> {
        if self.listen_addr.parse::<SocketAddr>().is_err() {
            return Err(format!("Invalid listen address: {}", self.listen_addr));
        }
        if self.static_files_path.is_empty() {
            return Err("Static files path must not be empty".to_string());
        }
        if self.bot_reply_delay_ms > 10_000 {
            return Err("Bot reply delay must not exceed 10000 ms".to_string());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        assert!(ServerConfig::default().validate().is_ok());
    }

    #[test]
    fn test_rejects_unparseable_listen_addr() {
        let config = ServerConfig {
            listen_addr: "not-an-address".to_string(),
            ..ServerConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_rejects_excessive_bot_delay() {
        let config = ServerConfig {
            bot_reply_delay_ms: 60_000,
            ..ServerConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_partial_yaml_fills_defaults() {
        let config: ServerConfig = serde_yaml_ng::from_str("bot_reply_delay_ms: 0\n").unwrap();
        assert_eq!(config.bot_reply_delay_ms, 0);
        assert_eq!(config.listen_addr, ServerConfig::default().listen_addr);
    }
}
