//! Match settings

use super::{ConfigError, SpeciesCatalog};
use crate::combatant::{Move, FALLBACK_MOVE_NAME, FALLBACK_MOVE_POWER};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Tunable match settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BattleConfig {
    /// Combatants per side
    #[serde(default = "default_roster_size")]
    pub roster_size: usize,
    /// Move used to pad combatants with fewer than four damaging moves
    #[serde(default)]
    pub fallback_move: FallbackMoveConfig,
    /// Seed for roster generation; random when absent
    #[serde(default)]
    pub seed: Option<u64>,
    /// Species catalog to draw from; the built-in catalog when absent
    #[serde(default)]
    pub catalog_path: Option<PathBuf>,
}

impl Default for BattleConfig {
    fn default() -> Self {
        BattleConfig {
            roster_size: default_roster_size(),
            fallback_move: FallbackMoveConfig::default(),
            seed: None,
            catalog_path: None,
        }
    }
}

fn default_roster_size() -> usize {
    6
}

impl BattleConfig {
    /// Load and validate a config file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let config: BattleConfig = super::load_toml(path)?;
        config.validate()?;
        Ok(config)
    }

    /// Parse and validate a config string
    pub fn parse(content: &str) -> Result<Self, ConfigError> {
        let config: BattleConfig = super::parse_toml(content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.roster_size == 0 {
            return Err(ConfigError::ValidationError(
                "roster_size must be at least 1".to_string(),
            ));
        }
        if self.fallback_move.power == 0 {
            return Err(ConfigError::ValidationError(
                "fallback_move.power must be greater than 0".to_string(),
            ));
        }
        Ok(())
    }

    /// Resolve the species catalog this config points at
    pub fn catalog(&self) -> Result<SpeciesCatalog, ConfigError> {
        match &self.catalog_path {
            Some(path) => super::load_catalog(path),
            None => Ok(super::default_catalog()),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FallbackMoveConfig {
    #[serde(default = "default_fallback_name")]
    pub name: String,
    #[serde(default = "default_fallback_power")]
    pub power: u32,
}

impl Default for FallbackMoveConfig {
    fn default() -> Self {
        FallbackMoveConfig {
            name: default_fallback_name(),
            power: default_fallback_power(),
        }
    }
}

fn default_fallback_name() -> String {
    FALLBACK_MOVE_NAME.to_string()
}
fn default_fallback_power() -> u32 {
    FALLBACK_MOVE_POWER
}

impl FallbackMoveConfig {
    pub fn to_move(&self) -> Move {
        Move::new(self.name.clone(), self.power)
    }
}
