//! Spawner configuration and game rules.

use std::fs;
use std::path::Path;

use serde::Deserialize;

/// Game rules consulted by the spawn cycle.
#[derive(Debug, Clone, Copy, Deserialize)]
#[serde(default)]
pub struct GameRules {
    /// Mirrors vanilla's `doInsomnia`: when off, phantoms never spawn.
    pub do_insomnia: bool,
}

impl Default for GameRules {
    fn default() -> Self {
        Self { do_insomnia: true }
    }
}

/// Errors from loading the spawner config file.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The file exists but could not be read.
    #[error("failed to read spawner config: {0}")]
    Io(#[from] std::io::Error),
    /// The file is not valid JSON5 or has the wrong shape.
    #[error("failed to parse spawner config: {0}")]
    Parse(#[from] serde_json5::Error),
}

/// Tunables for the spawner; defaults give a 4000 tick cooldown over a
/// 5x5 chunk area.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SpawnerConfig {
    /// Ticks a chunk stays on cooldown after a spawn commits there.
    pub cooldown_ticks: u64,
    /// Chebyshev radius of chunks put on cooldown around a spawn.
    pub cooldown_radius: u8,
    /// Sweep evicts entries older than this many cooldown windows.
    pub sweep_factor: u64,
    /// Game rules consulted by the spawn cycle.
    pub game_rules: GameRules,
}

impl Default for SpawnerConfig {
    fn default() -> Self {
        Self {
            cooldown_ticks: 4000,
            cooldown_radius: 2,
            sweep_factor: 4,
            game_rules: GameRules::default(),
        }
    }
}

impl SpawnerConfig {
    /// Loads the config from a JSON5 file.
    ///
    /// A missing file is not an error; defaults are used and a warning is
    /// logged. A present but unreadable or malformed file is an error.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            log::warn!("spawner config {} not found, using defaults", path.display());
            return Ok(Self::default());
        }

        let raw = fs::read_to_string(path)?;
        Ok(serde_json5::from_str(&raw)?)
    }
}
