use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use tracing::info;

use super::paths::PATHS;

pub const CONFIG_FILENAME: &str = "config.toml";

const DEFAULT_API_URL: &str = "https://www.omdbapi.com/";
const DEFAULT_IMAGE_API_URL: &str = "https://img.omdbapi.com/";
const DEMO_API_KEY: &str = "e9f2ca24";

/// The api key baked in at build time through `OMDB_API_KEY`
fn default_api_key() -> String {
    option_env!("OMDB_API_KEY").unwrap_or(DEMO_API_KEY).to_owned()
}

#[derive(Clone, Copy, Default, Debug, Serialize, Deserialize, Eq, PartialEq)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl std::fmt::Display for Theme {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let str = match self {
            Theme::Light => "Light",
            Theme::Dark => "Dark",
        };

        write!(f, "{}", str)
    }
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ApiSettings {
    pub api_key: String,
    pub api_url: String,
    pub image_api_url: String,
}

impl Default for ApiSettings {
    fn default() -> Self {
        Self {
            api_key: default_api_key(),
            api_url: DEFAULT_API_URL.to_owned(),
            image_api_url: DEFAULT_IMAGE_API_URL.to_owned(),
        }
    }
}

#[derive(Clone, Default, Debug, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct AppearanceSettings {
    pub theme: Theme,
}

#[derive(Clone, Default, Debug, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Config {
    pub api: ApiSettings,
    pub appearance: AppearanceSettings,
}

impl Config {
    /// Loads the config from the program's config directory
    ///
    /// Defaults are used when the file does not exist yet.
    pub fn load() -> Result<Self> {
        match get_config_file_path() {
            Some(config_path) => Self::load_from(&config_path),
            None => {
                info!("no config directory available, using default settings");
                Ok(Self::default())
            }
        }
    }

    pub fn load_from(config_path: &Path) -> Result<Self> {
        if !config_path.exists() {
            info!("no config file at {}, using default settings", config_path.display());
            return Ok(Self::default());
        }

        let config_str = std::fs::read_to_string(config_path)
            .with_context(|| format!("failed to read config file {}", config_path.display()))?;

        toml::from_str(&config_str)
            .with_context(|| format!("failed to parse config file {}", config_path.display()))
    }

    pub fn save_to(&self, config_path: &Path) -> Result<()> {
        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent).context("failed to create the config directory")?;
        }

        let config_str = toml::to_string_pretty(self).context("failed to serialize config")?;
        std::fs::write(config_path, config_str)
            .with_context(|| format!("failed to write config file {}", config_path.display()))
    }
}

pub fn get_config_file_path() -> Option<PathBuf> {
    let paths = PATHS.read().ok()?;
    let mut config_path = paths.get_config_dir_path()?.into_owned();
    config_path.push(CONFIG_FILENAME);
    Some(config_path)
}
