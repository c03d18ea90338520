use crate::model::ConfigError;
use serde::Deserialize;
use std::fs;
use std::io::ErrorKind;
use tracing::info;

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Vanity name or 17-digit SteamID64 of the profile to report on.
    pub profile_id: String,
    pub store_filter: String,
    pub output_path: String,
    pub community_base_url: String,
    pub store_base_url: String,
    pub user_agent: String,
    pub request_timeout_seconds: Option<u64>,
    pub debug_dump_dir: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            profile_id: "Amoneyyy".to_string(),
            store_filter: "topsellers".to_string(),
            output_path: "games_mine.csv".to_string(),
            community_base_url: "https://steamcommunity.com".to_string(),
            store_base_url: "https://store.steampowered.com".to_string(),
            user_agent: "Mozilla/5.0 (Windows NT 10.0; Win64; x64) SteamPlaytimeReport/0.1"
                .to_string(),
            request_timeout_seconds: None,
            debug_dump_dir: "logs/html".to_string(),
        }
    }
}

pub fn load_config(path: &str) -> Result<AppConfig, ConfigError> {
    let content = fs::read_to_string(path)?;
    let config: AppConfig = serde_json::from_str(&content)?;
    Ok(config)
}

/// Like [`load_config`], but a missing file means "use the defaults".
pub fn load_config_or_default(path: &str) -> Result<AppConfig, ConfigError> {
    match load_config(path) {
        Err(ConfigError::Io(e)) if e.kind() == ErrorKind::NotFound => {
            info!("No {} found, using built-in defaults", path);
            Ok(AppConfig::default())
        }
        other => other,
    }
}
