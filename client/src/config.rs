use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

pub const DEFAULT_CONFIG_PATH: &str = "config.json";

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct Config {
    pub log_file: String,
    pub transcript_path: String,
    pub start_descending: bool,
    pub use_color: bool,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            log_file: "client.log".to_string(),
            transcript_path: "tris-transcript.json".to_string(),
            start_descending: false,
            use_color: true,
        }
    }
}

impl Config {
    pub fn load_from(config_path: impl AsRef<Path>) -> Result<Config> {
        let config_path = config_path.as_ref();
        if config_path.exists() {
            let content = fs::read_to_string(config_path)
                .with_context(|| format!("failed to read config {}", config_path.display()))?;
            let config: Config = serde_json::from_str(&content)
                .with_context(|| format!("failed to parse config {}", config_path.display()))?;
            Ok(config)
        } else {
            Ok(Config::default())
        }
    }

    pub fn save_to(&self, config_path: impl AsRef<Path>) -> Result<()> {
        let config_path = config_path.as_ref();
        let content = serde_json::to_string_pretty(self)?;
        fs::write(config_path, content)
            .with_context(|| format!("failed to write config {}", config_path.display()))?;
        Ok(())
    }
}
