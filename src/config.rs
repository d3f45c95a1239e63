use std::fs;
use std::path::Path;
use std::time::Duration;

use serde::Deserialize;

pub const DEFAULT_CONFIG_PATH: &str = "config/portfolio.json";

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub window_title: String,
    /// Location shown on startup.
    pub start_path: String,
    pub reply_delay_ms: u64,
    /// Fixed seed for reply selection; random when absent.
    pub reply_seed: Option<u64>,
    /// Abort replies still in flight when the conversation is cleared.
    pub cancel_replies_on_clear: bool,
    pub notification_ms: u64,
    /// Replaces the built-in replies when non-empty.
    pub canned_responses: Vec<String>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            window_title: "Tien-Wei Hsu · Portfolio".to_string(),
            start_path: "/".to_string(),
            reply_delay_ms: 100,
            reply_seed: None,
            cancel_replies_on_clear: false,
            notification_ms: 3000,
            canned_responses: Vec::new(),
        }
    }
}

impl AppConfig {
    pub fn reply_delay(&self) -> Duration {
        Duration::from_millis(self.reply_delay_ms)
    }

    pub fn notification_ttl(&self) -> Duration {
        Duration::from_millis(self.notification_ms)
    }
}

pub fn load_config(path: &str) -> AppConfig {
    let path = Path::new(path);
    match fs::read_to_string(path) {
        Ok(content) => match serde_json::from_str::<AppConfig>(&content) {
            Ok(config) => {
                log::info!("Loaded config from {}", path.display());
                config
            }
            Err(err) => {
                log::warn!("Failed to parse config file {}: {err}", path.display());
                AppConfig::default()
            }
        },
        Err(err) => {
            log::info!(
                "Config file {} not found ({err}); using defaults",
                path.display()
            );
            AppConfig::default()
        }
    }
}
