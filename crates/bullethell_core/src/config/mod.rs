//! Configuration system
//!
//! Combat tuning lives here so the difficulty constants stay explicit and
//! editable rather than buried in the resolver. Files may be TOML or RON.

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Configuration trait
pub trait Config: Serialize + for<'de> Deserialize<'de> + Default {
    /// Load configuration from file
    fn load_from_file(path: &str) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path).map_err(ConfigError::Io)?;

        if path.ends_with(".toml") {
            toml::from_str(&contents).map_err(|e| ConfigError::Parse(e.to_string()))
        } else if path.ends_with(".ron") {
            ron::from_str(&contents).map_err(|e| ConfigError::Parse(e.to_string()))
        } else {
            Err(ConfigError::UnsupportedFormat(path.to_string()))
        }
    }

    /// Save configuration to file
    fn save_to_file(&self, path: &str) -> Result<(), ConfigError> {
        let contents = if path.ends_with(".toml") {
            toml::to_string_pretty(self).map_err(|e| ConfigError::Serialize(e.to_string()))?
        } else if path.ends_with(".ron") {
            ron::ser::to_string_pretty(self, Default::default())
                .map_err(|e| ConfigError::Serialize(e.to_string()))?
        } else {
            return Err(ConfigError::UnsupportedFormat(path.to_string()));
        };

        std::fs::write(path, contents).map_err(ConfigError::Io)
    }
}

/// Configuration errors
#[derive(thiserror::Error, Debug)]
pub enum ConfigError {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Parse error
    #[error("Parse error: {0}")]
    Parse(String),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialize(String),

    /// Unsupported format
    #[error("Unsupported format: {0}")]
    UnsupportedFormat(String),
}

/// Combat resolution tuning.
///
/// The damage asymmetry is deliberate difficulty tuning: the player ship
/// takes heavier per-bullet damage than enemy ships do.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CombatConfig {
    /// Minimum milliseconds between resolution passes
    pub pass_interval_ms: u64,

    /// Damage an enemy ship takes from one player bullet
    pub player_bullet_damage: i32,

    /// Damage the player ship takes from one enemy bullet
    pub enemy_bullet_damage: i32,

    /// Damage each ship takes when two opposing ships collide
    pub ram_damage: i32,
}

impl CombatConfig {
    /// Get the pass interval as a [`Duration`].
    pub fn pass_interval(&self) -> Duration {
        Duration::from_millis(self.pass_interval_ms)
    }
}

impl Default for CombatConfig {
    fn default() -> Self {
        Self {
            pass_interval_ms: 150,
            player_bullet_damage: 1,
            enemy_bullet_damage: 5,
            ram_damage: 1,
        }
    }
}

impl Config for CombatConfig {}
