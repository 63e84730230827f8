use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Deserialize)]
pub struct GameConfig {
    #[serde(default = "default_log_file")]
    pub log_file: String,
    #[serde(default)]
    pub map_directory: Option<PathBuf>,
    #[serde(default = "default_title")]
    pub title: String,
}

fn default_log_file() -> String { "maze_runner.log".to_string() }
fn default_title() -> String { "Maze".to_string() }

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            log_file: default_log_file(),
            map_directory: None,
            title: default_title(),
        }
    }
}

/// Where a loaded configuration came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigSource {
    File,
    Missing,
    Invalid(String),
}

impl ConfigSource {
    /// Reports the outcome of `GameConfig::load`. Call once logging is up.
    pub fn log(&self, path: &Path) {
        match self {
            ConfigSource::File => log::info!("loaded configuration from {}", path.display()),
            ConfigSource::Missing => {
                log::info!("no {} found, using default configuration", path.display())
            }
            ConfigSource::Invalid(reason) => {
                log::warn!("failed to parse {}: {}, using defaults", path.display(), reason)
            }
        }
    }
}

impl GameConfig {
    /// Loads configuration from a JSON file, falling back to defaults if it is missing or invalid.
    pub fn load(path: &Path) -> (Self, ConfigSource) {
        match fs::read_to_string(path) {
            Ok(contents) => match serde_json::from_str(&contents) {
                Ok(config) => (config, ConfigSource::File),
                Err(e) => (GameConfig::default(), ConfigSource::Invalid(e.to_string())),
            },
            Err(_) => (GameConfig::default(), ConfigSource::Missing),
        }
    }

    /// Resolves a map path typed by the player against `map_directory`.
    pub fn resolve_map_path(&self, typed: &str) -> PathBuf {
        let typed = Path::new(typed.trim());
        match &self.map_directory {
            Some(dir) if typed.is_relative() => dir.join(typed),
            _ => typed.to_path_buf(),
        }
    }
}
