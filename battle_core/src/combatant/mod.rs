//! Combatants, their moves, and the rosters that hold them

mod moves;
mod roster;

pub use moves::{
    pad_moves, strongest_move, Move, MoveSlot, FALLBACK_MOVE_NAME, FALLBACK_MOVE_POWER, MOVE_SLOTS,
};
pub use roster::Roster;

use serde::{Deserialize, Serialize};

/// A single creature taking part in a match
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Combatant {
    /// Display name
    pub name: String,
    /// Current hit points. Can go negative before the combatant is removed.
    pub hp: i32,
    /// Hit points at creation, used for display only
    pub max_hp: i32,
    /// Turn-order stat, fixed for the match
    pub speed: u32,
    /// Exactly four moves
    pub moves: [Move; MOVE_SLOTS],
    /// Opaque display handle (e.g. a sprite URL)
    #[serde(default)]
    pub sprite: Option<String>,
}

impl Combatant {
    /// Create a new combatant at full health
    pub fn new(name: impl Into<String>, hp: i32, speed: u32, moves: [Move; MOVE_SLOTS]) -> Self {
        Combatant {
            name: name.into(),
            hp,
            max_hp: hp,
            speed,
            moves,
            sprite: None,
        }
    }

    /// Attach a sprite reference
    pub fn with_sprite(mut self, sprite: impl Into<String>) -> Self {
        self.sprite = Some(sprite.into());
        self
    }

    /// Get the move in a slot
    pub fn move_at(&self, slot: MoveSlot) -> &Move {
        &self.moves[slot.index()]
    }

    /// Slot of this combatant's highest-power move
    pub fn strongest_slot(&self) -> MoveSlot {
        strongest_move(&self.moves)
    }

    /// Subtract damage from hp without clamping, returns the new hp
    pub fn take_damage(&mut self, amount: u32) -> i32 {
        self.hp = self.hp.saturating_sub_unsigned(amount);
        self.hp
    }

    pub fn is_fainted(&self) -> bool {
        self.hp <= 0
    }

    /// Remaining hp as a percentage of starting hp, clamped to 0..=100
    pub fn hp_percent(&self) -> f64 {
        if self.max_hp <= 0 {
            return 0.0;
        }
        (self.hp as f64 / self.max_hp as f64 * 100.0).clamp(0.0, 100.0)
    }

    /// Check the invariants a combatant must hold before a match starts
    pub fn validate(&self) -> Result<(), String> {
        if self.name.trim().is_empty() {
            return Err("combatant has an empty name".to_string());
        }
        if self.hp <= 0 {
            return Err(format!("{} starts with non-positive hp ({})", self.name, self.hp));
        }
        if let Some(m) = self.moves.iter().find(|m| !m.is_damaging()) {
            return Err(format!("{} has a move with no power: {}", self.name, m.name));
        }
        Ok(())
    }
}
