//! Application configuration and user preferences.
//!
//! `config.json` selects the log level and where preferences live;
//! `preferences.json` ([`UserPrefs`]) says where the data files live. Both
//! fall back to defaults when absent.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{info, warn};

use crate::json::{read_json, write_json, JsonFileError};

pub const DEFAULT_CONFIG_FILE: &str = "config.json";

const LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

/// Error type for configuration loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error(transparent)]
    Json(#[from] JsonFileError),
    #[error("unknown log level {0:?}, expected one of trace, debug, info, warn, error")]
    LogLevel(String),
}

/// Top-level application settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Config {
    pub log_level: String,
    pub user_prefs_file_path: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            log_level: "info".into(),
            user_prefs_file_path: PathBuf::from("preferences.json"),
        }
    }
}

impl Config {
    /// Load the config at `path`, writing defaults there if it is missing.
    pub fn load_or_init(path: &Path) -> Result<Self, ConfigError> {
        let config = match read_json::<Config>(path)? {
            Some(config) => config,
            None => {
                info!(path = %path.display(), "config file not found, writing defaults");
                let config = Config::default();
                if let Err(err) = write_json(path, &config) {
                    warn!(error = %err, "could not persist default config");
                }
                config
            }
        };
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let level = self.log_level.to_ascii_lowercase();
        if LOG_LEVELS.contains(&level.as_str()) {
            Ok(())
        } else {
            Err(ConfigError::LogLevel(self.log_level.clone()))
        }
    }
}

/// Where the data files live.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct UserPrefs {
    buyer_list_file_path: PathBuf,
    meet_up_list_file_path: PathBuf,
}

impl Default for UserPrefs {
    fn default() -> Self {
        Self::in_dir(Path::new("data"))
    }
}

impl UserPrefs {
    /// Preferences keeping both data files under `dir`.
    pub fn in_dir(dir: &Path) -> Self {
        Self {
            buyer_list_file_path: dir.join("buyerlist.json"),
            meet_up_list_file_path: dir.join("meetuplist.json"),
        }
    }

    /// Load preferences from `path`, falling back to defaults on any problem.
    pub fn load_or_default(path: &Path) -> Self {
        match read_json::<UserPrefs>(path) {
            Ok(Some(prefs)) => prefs,
            Ok(None) => {
                info!(path = %path.display(), "preferences file not found, using defaults");
                UserPrefs::default()
            }
            Err(err) => {
                warn!(error = %err, "preferences file unreadable, using defaults");
                UserPrefs::default()
            }
        }
    }

    pub fn save(&self, path: &Path) -> Result<(), JsonFileError> {
        write_json(path, self)
    }

    pub fn buyer_list_file_path(&self) -> &Path {
        &self.buyer_list_file_path
    }

    pub fn set_buyer_list_file_path(&mut self, path: PathBuf) {
        self.buyer_list_file_path = path;
    }

    pub fn meet_up_list_file_path(&self) -> &Path {
        &self.meet_up_list_file_path
    }

    pub fn set_meet_up_list_file_path(&mut self, path: PathBuf) {
        self.meet_up_list_file_path = path;
    }
}
