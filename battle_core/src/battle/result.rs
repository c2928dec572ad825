//! TurnOutcome - what a single attack did

use crate::combatant::MoveSlot;
use crate::types::Side;
use serde::{Deserialize, Serialize};

/// Result of resolving one `attack` call
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TurnOutcome {
    // === Who acted ===
    /// Side whose front combatant acted
    pub attacker_side: Side,
    pub attacker: String,
    pub defender: String,

    // === What was used ===
    /// Slot of the move on the attacker
    pub slot: MoveSlot,
    pub move_name: String,
    /// Damage dealt, always the move's power
    pub damage: u32,
    /// True when the player's requested move was not the one executed
    pub player_choice_discarded: bool,

    // === State Changes ===
    pub defender_hp_before: i32,
    pub defender_hp_after: i32,

    // === Flags ===
    /// Whether the defender fainted and left its roster
    pub fainted: bool,
    /// Set when this turn ended the match
    pub winner: Option<Side>,
}

impl TurnOutcome {
    /// Side that took the hit
    pub fn defender_side(&self) -> Side {
        self.attacker_side.opponent()
    }

    /// Whether this turn concluded the match
    pub fn is_final(&self) -> bool {
        self.winner.is_some()
    }

    /// One-line description for status bars
    pub fn summary(&self) -> String {
        let mut parts = vec![format!(
            "{} used {} for {} damage",
            self.attacker, self.move_name, self.damage
        )];

        if self.fainted {
            parts.push(format!("{} fainted", self.defender));
        } else {
            parts.push(format!("{} has {} hp left", self.defender, self.defender_hp_after));
        }

        if let Some(winner) = self.winner {
            parts.push(format!("{} wins", winner));
        }

        parts.join(", ")
    }
}
