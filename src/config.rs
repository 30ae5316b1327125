use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_model")]
    pub model: String,
    #[serde(default = "default_language")]
    pub language: String,
    #[serde(default = "default_voice")]
    pub voice: String,
    #[serde(default = "default_vad_filter")]
    pub vad_filter: bool,
}

fn default_model() -> String {
    "small".to_string()
}

fn default_language() -> String {
    "ja".to_string()
}

fn default_voice() -> String {
    "ja-JP-NanamiNeural".to_string()
}

fn default_vad_filter() -> bool {
    true
}

impl Default for Config {
    fn default() -> Self {
        Self {
            model: default_model(),
            language: default_language(),
            voice: default_voice(),
            vad_filter: default_vad_filter(),
        }
    }
}

pub fn config_dir() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("koe")
}

pub fn config_path() -> PathBuf {
    config_dir().join("config.toml")
}

pub fn models_dir() -> PathBuf {
    dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("koe")
        .join("models")
}

/// Load the optional config file. A missing file yields defaults.
pub fn load_config() -> Result<Config> {
    let path = config_path();

    if !path.exists() {
        return Ok(Config::default());
    }

    let content = fs::read_to_string(&path)
        .with_context(|| format!("failed to read config: {}", path.display()))?;

    toml::from_str(&content).with_context(|| format!("failed to parse config: {}", path.display()))
}
