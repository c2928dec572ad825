//! Prelude module for convenient imports
//!
//! ```rust
//! use battle_core::prelude::*;
//! ```

// Core types
pub use crate::combatant::{Combatant, Move, MoveSlot, Roster};
pub use crate::types::{Phase, Side};

// Battle
pub use crate::battle::{BattleEngine, BattleError, BattleLog, MatchState, TurnOutcome};

// Roster building
pub use crate::builder::{CatalogSource, CombatantSource, RosterBuilder};

// Config
pub use crate::config::{default_catalog, BattleConfig};
