//! Match configuration loaded from TOML.

use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use sideout_scoring::{DEFAULT_GAME_LENGTH, Discipline, GameEngine, Team};
use std::path::Path;
use tracing::{debug, info, instrument};

/// Settings a match is played under.
///
/// ```toml
/// discipline = "singles"
/// game_length = 15
/// first_server = "us"
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct MatchConfig {
    /// Singles or doubles rules.
    #[serde(default)]
    discipline: Discipline,

    /// Minimum winning score (win by two).
    #[serde(default = "default_game_length")]
    game_length: u32,

    /// Team serving first; when unset the scorekeeper asks.
    #[serde(default)]
    first_server: Option<Team>,
}

#[instrument]
fn default_game_length() -> u32 {
    DEFAULT_GAME_LENGTH
}

impl MatchConfig {
    /// Creates a configuration with no first server preselected.
    #[instrument]
    pub fn new(discipline: Discipline, game_length: u32) -> Self {
        Self {
            discipline,
            game_length,
            first_server: None,
        }
    }

    /// Loads configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading match config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config: Self = toml::from_str(&content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;
        config.validate()?;

        info!(
            discipline = %config.discipline,
            game_length = config.game_length,
            "Match config loaded"
        );
        Ok(config)
    }

    /// Replaces settings given on the command line.
    #[instrument(skip(self))]
    pub fn with_overrides(
        mut self,
        discipline: Option<Discipline>,
        game_length: Option<u32>,
        first_server: Option<Team>,
    ) -> Result<Self, ConfigError> {
        if let Some(discipline) = discipline {
            self.discipline = discipline;
        }
        if let Some(game_length) = game_length {
            self.game_length = game_length;
        }
        if first_server.is_some() {
            self.first_server = first_server;
        }
        self.validate()?;
        Ok(self)
    }

    /// Checks that the settings describe a playable game.
    #[instrument(skip(self))]
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.game_length == 0 {
            return Err(ConfigError::new("game_length must be at least 1".to_string()));
        }
        if self.first_server == Some(Team::None) {
            return Err(ConfigError::new(
                "first_server must be \"us\" or \"them\"".to_string(),
            ));
        }
        Ok(())
    }

    /// Builds an engine for these settings, with the first server chosen if
    /// one is configured.
    #[instrument(skip(self))]
    pub fn build_engine(&self) -> GameEngine {
        let mut engine = GameEngine::new(self.discipline, self.game_length);
        if let Some(team) = self.first_server {
            engine.choose_first_server(team);
        }
        engine
    }
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self::new(Discipline::default(), DEFAULT_GAME_LENGTH)
    }
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error.
    #[track_caller]
    #[instrument(skip(message))]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}
