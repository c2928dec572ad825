//! Species catalog loading

use super::ConfigError;
use crate::combatant::Move;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::warn;

/// Damage class of a move in the catalog
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MoveCategory {
    Physical,
    Special,
    Status,
}

/// A move as listed in a species' move pool
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveEntry {
    pub name: String,
    /// Missing for moves that never deal direct damage
    #[serde(default)]
    pub power: Option<u32>,
    pub category: MoveCategory,
}

impl MoveEntry {
    /// Physical or special with a non-zero power
    pub fn is_damaging(&self) -> bool {
        self.category != MoveCategory::Status && self.power.is_some_and(|p| p > 0)
    }

    /// Convert to a battle move. Only meaningful for damaging entries.
    pub fn to_move(&self) -> Move {
        Move::new(self.name.clone(), self.power.unwrap_or(0))
    }
}

/// Base data for one creature
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Species {
    pub id: u32,
    pub name: String,
    /// Base hp stat, used as starting hp
    pub hp: i32,
    /// Base speed stat
    pub speed: u32,
    #[serde(default)]
    pub sprite: Option<String>,
    #[serde(default)]
    pub moves: Vec<MoveEntry>,
}

impl Species {
    pub fn validate(&self) -> Result<(), String> {
        if self.name.trim().is_empty() {
            return Err(format!("species {} has no name", self.id));
        }
        if self.hp <= 0 {
            return Err(format!("{} has non-positive hp ({})", self.name, self.hp));
        }
        Ok(())
    }

    /// Number of moves in the pool that deal damage
    pub fn damaging_move_count(&self) -> usize {
        self.moves.iter().filter(|m| m.is_damaging()).count()
    }
}

/// Collection of species combatants are drawn from
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpeciesCatalog {
    #[serde(default)]
    pub species: Vec<Species>,
}

impl SpeciesCatalog {
    pub fn get(&self, id: u32) -> Option<&Species> {
        self.species.iter().find(|s| s.id == id)
    }

    pub fn len(&self) -> usize {
        self.species.len()
    }

    pub fn is_empty(&self) -> bool {
        self.species.is_empty()
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.species.is_empty() {
            return Err(ConfigError::ValidationError(
                "species catalog is empty".to_string(),
            ));
        }
        for species in &self.species {
            species.validate().map_err(ConfigError::ValidationError)?;
        }
        Ok(())
    }
}

/// Load a species catalog from a TOML file
pub fn load_catalog(path: &Path) -> Result<SpeciesCatalog, ConfigError> {
    let catalog: SpeciesCatalog = super::load_toml(path)?;
    catalog.validate()?;
    Ok(catalog)
}

/// Load a species catalog from a TOML string
pub fn parse_catalog(content: &str) -> Result<SpeciesCatalog, ConfigError> {
    let catalog: SpeciesCatalog = super::parse_toml(content)?;
    catalog.validate()?;
    Ok(catalog)
}

/// Get the built-in species catalog
pub fn default_catalog() -> SpeciesCatalog {
    let toml = include_str!("../../config/species.toml");
    parse_catalog(toml).unwrap_or_else(|err| {
        warn!(error = %err, "built-in species catalog failed to load");
        SpeciesCatalog::default()
    })
}
