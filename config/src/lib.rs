//! Configuration loading for the Kinball scoreboard.
//!
//! The config file is optional. Every section and field is optional too;
//! [`SetupAnswers`] merges whatever is present with the setup prompt answers
//! and resolves the result into a validated [`MatchSetup`].
//!
//! ```toml
//! [match]
//! goal_score = 10
//! final_score = 15
//!
//! [teams]
//! a = "Pink"
//! b = "Grey"
//! c = "Black"
//!
//! [app]
//! prompt = true
//! ascii_only = false
//! flash_interval_ms = 300
//! ```
//!
//! [`MatchSetup`]: kinball_types::MatchSetup

mod setup;

use std::path::{Path, PathBuf};
use std::time::Duration;
use std::{env, fs, io};

use serde::Deserialize;
use thiserror::Error;

use kinball_types::{DEFAULT_FLASH_INTERVAL, Team, UiOptions};

pub use setup::{SetupAnswers, parse_threshold};

/// Environment variable that points at an alternative config file.
pub const CONFIG_ENV_VAR: &str = "KINBALL_CONFIG";

// Default value function for serde (bool::default() is false, so only true needs a fn)
const fn default_true() -> bool {
    true
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config at {}: {source}", path.display())]
    Read { path: PathBuf, source: io::Error },
    #[error("failed to parse config at {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },
}

impl ConfigError {
    #[must_use]
    pub fn path(&self) -> &Path {
        match self {
            ConfigError::Read { path, .. } | ConfigError::Parse { path, .. } => path,
        }
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct KinballConfig {
    #[serde(rename = "match")]
    pub rules: Option<RulesConfig>,
    pub teams: Option<TeamsConfig>,
    pub app: Option<AppConfig>,
}

/// Match thresholds. Values that are not positive are ignored at resolution.
#[derive(Debug, Default, Deserialize)]
pub struct RulesConfig {
    pub goal_score: Option<i64>,
    pub final_score: Option<i64>,
}

#[derive(Debug, Default, Deserialize)]
pub struct TeamsConfig {
    pub a: Option<String>,
    pub b: Option<String>,
    pub c: Option<String>,
}

impl TeamsConfig {
    #[must_use]
    pub fn name(&self, team: Team) -> Option<&str> {
        match team {
            Team::A => self.a.as_deref(),
            Team::B => self.b.as_deref(),
            Team::C => self.c.as_deref(),
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct AppConfig {
    /// Ask for team names and thresholds before the match starts.
    #[serde(default = "default_true")]
    pub prompt: bool,
    /// Use ASCII-only borders and markers.
    #[serde(default)]
    pub ascii_only: bool,
    /// Milliseconds between win flash toggles.
    pub flash_interval_ms: Option<u64>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            prompt: true,
            ascii_only: false,
            flash_interval_ms: None,
        }
    }
}

impl KinballConfig {
    /// Load the config file, if there is one.
    ///
    /// Returns `Ok(None)` when no path can be determined or the file does not
    /// exist.
    pub fn load() -> Result<Option<Self>, ConfigError> {
        let Some(path) = config_path() else {
            return Ok(None);
        };
        if !path.exists() {
            return Ok(None);
        }
        Self::load_from(&path).map(Some)
    }

    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let content = match fs::read_to_string(path) {
            Ok(content) => content,
            Err(err) => {
                tracing::warn!("Failed to read config at {:?}: {}", path, err);
                return Err(ConfigError::Read {
                    path: path.to_path_buf(),
                    source: err,
                });
            }
        };

        match toml::from_str(&content) {
            Ok(config) => Ok(config),
            Err(err) => {
                tracing::warn!("Failed to parse config at {:?}: {}", path, err);
                Err(ConfigError::Parse {
                    path: path.to_path_buf(),
                    source: err,
                })
            }
        }
    }

    #[must_use]
    pub fn path() -> Option<PathBuf> {
        config_path()
    }

    #[must_use]
    pub fn prompt_enabled(&self) -> bool {
        self.app.as_ref().is_none_or(|app| app.prompt)
    }

    #[must_use]
    pub fn ui_options(&self) -> UiOptions {
        UiOptions {
            ascii_only: self.app.as_ref().is_some_and(|app| app.ascii_only),
        }
    }

    /// Flash toggle interval, falling back to the default when unset or zero.
    #[must_use]
    pub fn flash_interval(&self) -> Duration {
        match self.app.as_ref().and_then(|app| app.flash_interval_ms) {
            Some(0) => {
                tracing::warn!("Ignoring flash_interval_ms = 0 in config, using default");
                DEFAULT_FLASH_INTERVAL
            }
            Some(ms) => Duration::from_millis(ms),
            None => DEFAULT_FLASH_INTERVAL,
        }
    }
}

/// `$KINBALL_CONFIG` if set, otherwise `~/.kinball/config.toml`.
#[must_use]
pub fn config_path() -> Option<PathBuf> {
    if let Some(path) = env::var_os(CONFIG_ENV_VAR).filter(|value| !value.is_empty()) {
        return Some(PathBuf::from(path));
    }
    dirs::home_dir().map(|home| home.join(".kinball").join("config.toml"))
}
