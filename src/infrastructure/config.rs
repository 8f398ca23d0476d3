use crate::domain::error::TranslateError;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

pub const API_KEY_ENV: &str = "DASHSCOPE_API_KEY";
pub const MODEL_ENV: &str = "QMT_MODEL";

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Config {
    pub http_proxy: Option<String>,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
    #[serde(default)]
    pub logging: Logging,
    #[serde(default)]
    pub qwen: QwenConfig,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Logging {
    #[serde(default = "default_enable")]
    pub enable: bool,
    pub path: Option<String>,
    #[serde(default = "default_log_level")]
    pub level: String,
}

/// Credentials and model choice read by the translator. Never written back.
#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq, Eq)]
pub struct QwenConfig {
    pub api_key: Option<String>,
    pub model_name: Option<String>,
}

impl QwenConfig {
    pub fn new(api_key: impl Into<String>, model_name: Option<&str>) -> Self {
        Self {
            api_key: Some(api_key.into()),
            model_name: model_name.map(str::to_string),
        }
    }

    pub fn has_api_key(&self) -> bool {
        self.api_key.as_deref().is_some_and(|key| !key.is_empty())
    }
}

impl Default for Logging {
    fn default() -> Self {
        Self {
            enable: true,
            path: None,
            level: default_log_level(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            http_proxy: None,
            timeout_secs: default_timeout_secs(),
            logging: Logging::default(),
            qwen: QwenConfig::default(),
        }
    }
}

// Defaults
fn default_timeout_secs() -> u64 {
    60
}
fn default_enable() -> bool {
    true
}
fn default_log_level() -> String {
    "WARN".to_string()
}

pub fn get_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|p| p.join("qmt").join("config.toml"))
}

pub fn parse_config(content: &str) -> Result<Config, TranslateError> {
    Ok(toml::from_str::<Config>(content)?)
}

/// Overlay non-empty environment values on top of the file settings.
pub fn apply_env_overrides<F>(config: &mut Config, lookup: F)
where
    F: Fn(&str) -> Option<String>,
{
    if let Some(key) = lookup(API_KEY_ENV).filter(|v| !v.is_empty()) {
        config.qwen.api_key = Some(key);
    }
    if let Some(model) = lookup(MODEL_ENV).filter(|v| !v.is_empty()) {
        config.qwen.model_name = Some(model);
    }
}

/// Read a config file; a missing file yields the defaults.
pub fn read_config_file(path: &Path) -> Result<Config, TranslateError> {
    if !path.exists() {
        return Ok(Config::default());
    }
    let content = fs::read_to_string(path)?;
    parse_config(&content)
}

/// Load the config file and apply environment overrides.
///
/// An unparseable file falls back to defaults; the parse error is handed
/// back so it can be logged once logging is set up.
pub fn load_config() -> Result<(Config, Option<TranslateError>), TranslateError> {
    let mut warning = None;
    let mut config = match get_config_path() {
        Some(path) => match read_config_file(&path) {
            Ok(config) => config,
            Err(e @ TranslateError::Toml(_)) => {
                warning = Some(e);
                Config::default()
            }
            Err(e) => return Err(e),
        },
        None => Config::default(),
    };

    apply_env_overrides(&mut config, |name| std::env::var(name).ok());
    Ok((config, warning))
}

pub fn generate_config_sample() -> Result<(), TranslateError> {
    let Some(path) = get_config_path() else {
        return Err(TranslateError::Config(
            "Cannot determine config directory".to_string(),
        ));
    };

    if path.exists() {
        eprintln!("Config file already exists at: {}", path.display());
        return Ok(());
    }

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }

    let mut sample = Config::default();
    sample.qwen.api_key = Some(String::new());
    sample.qwen.model_name = Some(crate::domain::model::DEFAULT_MODEL.to_string());
    let toml_content = toml::to_string_pretty(&sample)
        .map_err(|e| TranslateError::Config(format!("Failed to serialize config: {}", e)))?;
    fs::write(&path, toml_content)
        .map_err(|e| TranslateError::Config(format!("Failed to write config file: {}", e)))?;
    println!("Generated config file at: {}", path.display());

    Ok(())
}

