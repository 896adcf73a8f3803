//! Session configuration.

use crate::error::ConfigError;
use crate::types::Player;
use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, info, instrument};

/// Who plays against the first human.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Opponent {
    /// A second human at the same table.
    Human,
    /// The built-in minimax player.
    #[default]
    Computer,
}

impl Opponent {
    /// Returns the display label for this option.
    pub fn label(self) -> &'static str {
        match self {
            Self::Human => "vs Human",
            Self::Computer => "vs Bot",
        }
    }
}

/// Configuration for a single game session.
///
/// Defaults reproduce the classic layout: the human plays O and moves
/// first, the computer answers as X.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct SessionConfig {
    /// Human or computer opponent.
    #[serde(default)]
    opponent: Opponent,

    /// Side played by the computer. Ignored for two humans.
    #[serde(default = "default_computer")]
    computer: Player,

    /// Side that makes the first move.
    #[serde(default = "default_first_player")]
    first_player: Player,
}

fn default_computer() -> Player {
    Player::X
}

fn default_first_player() -> Player {
    Player::O
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            opponent: Opponent::default(),
            computer: default_computer(),
            first_player: default_first_player(),
        }
    }
}

impl SessionConfig {
    /// Creates a configuration.
    #[instrument]
    pub fn new(opponent: Opponent, computer: Player, first_player: Player) -> Self {
        Self {
            opponent,
            computer,
            first_player,
        }
    }

    /// Two humans sharing the board, `first_player` to start.
    pub fn two_humans(first_player: Player) -> Self {
        Self::new(Opponent::Human, default_computer(), first_player)
    }

    /// Returns a copy with a different opponent.
    pub fn with_opponent(self, opponent: Opponent) -> Self {
        Self { opponent, ..self }
    }

    /// The side the computer plays, or `None` for two humans.
    pub fn computer_player(&self) -> Option<Player> {
        match self.opponent {
            Opponent::Computer => Some(self.computer),
            Opponent::Human => None,
        }
    }

    /// Parses configuration from TOML text. Missing keys take defaults.
    #[instrument(skip(content))]
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;
        debug!(?config, "Parsed session config");
        Ok(config)
    }

    /// Loads configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config = Self::from_toml_str(&content)?;
        info!(opponent = ?config.opponent, "Config loaded successfully");
        Ok(config)
    }
}
