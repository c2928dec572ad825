//! battle_core - Turn-based two-team battle engine
//!
//! This library provides:
//! - Combatant / Roster: the creatures and the ordered teams they fight in
//! - BattleEngine: turn order, move selection, damage, faints and win detection
//! - BattleLog: append-only record of what happened
//! - RosterBuilder: concurrent, all-or-nothing roster assembly from a CombatantSource

pub mod battle;
pub mod builder;
pub mod combatant;
pub mod config;
pub mod prelude;
pub mod types;

// Re-export core types for convenience
pub use battle::{BattleEngine, BattleError, BattleLog, MatchState, SetupError, TurnOutcome};
pub use builder::{
    BuildRequest, CatalogSource, CombatantSource, RosterBuildError, RosterBuilder, Rosters,
    SourceError,
};
pub use combatant::{Combatant, Move, MoveSlot, Roster, MOVE_SLOTS};
pub use config::{default_catalog, BattleConfig, ConfigError, SpeciesCatalog};
pub use types::{Phase, Side};
