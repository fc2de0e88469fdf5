//! Resolved configuration types shared across crates.
//!
//! These types represent fully-validated, resolved configuration state.
//! Raw TOML deserialization structs (with `Option` fields) and the setup
//! prompt answers stay in `kinball-config`, which resolves them into these
//! types at the parse boundary.

use std::time::Duration;

use crate::{MatchConfig, TeamNames};

/// Interval between flash toggles after a win.
pub const DEFAULT_FLASH_INTERVAL: Duration = Duration::from_millis(300);

/// Everything the score engine needs to start a match.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchSetup {
    names: TeamNames,
    config: MatchConfig,
    flash_interval: Duration,
}

impl MatchSetup {
    #[must_use]
    pub fn new(names: TeamNames, config: MatchConfig) -> Self {
        Self {
            names,
            config,
            flash_interval: DEFAULT_FLASH_INTERVAL,
        }
    }

    #[must_use]
    pub fn with_flash_interval(mut self, interval: Duration) -> Self {
        self.flash_interval = interval;
        self
    }

    #[must_use]
    pub fn names(&self) -> &TeamNames {
        &self.names
    }

    #[must_use]
    pub fn config(&self) -> &MatchConfig {
        &self.config
    }

    #[must_use]
    pub fn flash_interval(&self) -> Duration {
        self.flash_interval
    }

    #[must_use]
    pub fn into_parts(self) -> (TeamNames, MatchConfig, Duration) {
        (self.names, self.config, self.flash_interval)
    }
}

impl Default for MatchSetup {
    fn default() -> Self {
        Self::new(TeamNames::default(), MatchConfig::default())
    }
}

/// Rendering preferences for the scoreboard.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct UiOptions {
    /// Use ASCII-only borders and markers.
    pub ascii_only: bool,
}
