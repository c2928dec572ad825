//! Moves and move slots

use crate::battle::BattleError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Number of moves every combatant carries
pub const MOVE_SLOTS: usize = 4;

/// Name of the synthetic move used to pad short move pools
pub const FALLBACK_MOVE_NAME: &str = "Struggle";

/// Power of the synthetic fallback move
pub const FALLBACK_MOVE_POWER: u32 = 50;

/// A damaging move. Immutable once created.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Move {
    /// Display name
    pub name: String,
    /// Damage dealt on use (always > 0 for a usable move)
    pub power: u32,
}

impl Move {
    /// Create a new move
    pub fn new(name: impl Into<String>, power: u32) -> Self {
        Move {
            name: name.into(),
            power,
        }
    }

    /// The fallback move ("Struggle", 50 power)
    pub fn struggle() -> Self {
        Move::new(FALLBACK_MOVE_NAME, FALLBACK_MOVE_POWER)
    }

    /// Whether this move deals damage
    pub fn is_damaging(&self) -> bool {
        self.power > 0
    }
}

impl Default for Move {
    fn default() -> Self {
        Move::struggle()
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name, self.power)
    }
}

/// Index into a combatant's four moves, guaranteed to be in `0..MOVE_SLOTS`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "usize", into = "usize")]
pub struct MoveSlot(usize);

impl MoveSlot {
    /// Create a slot, returning `None` when out of range
    pub fn new(index: usize) -> Option<Self> {
        (index < MOVE_SLOTS).then_some(MoveSlot(index))
    }

    /// All slots in order
    pub fn all() -> impl Iterator<Item = MoveSlot> {
        (0..MOVE_SLOTS).map(MoveSlot)
    }

    pub fn index(self) -> usize {
        self.0
    }
}

impl TryFrom<usize> for MoveSlot {
    type Error = BattleError;

    fn try_from(index: usize) -> Result<Self, Self::Error> {
        MoveSlot::new(index).ok_or(BattleError::InvalidMoveSlot(index))
    }
}

impl From<MoveSlot> for usize {
    fn from(slot: MoveSlot) -> usize {
        slot.0
    }
}

impl fmt::Display for MoveSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Pick the highest-power move. Ties go to the lowest slot.
pub fn strongest_move(moves: &[Move; MOVE_SLOTS]) -> MoveSlot {
    let mut best = 0;
    for (i, m) in moves.iter().enumerate().skip(1) {
        // Strictly greater keeps the first occurrence on ties
        if m.power > moves[best].power {
            best = i;
        }
    }
    MoveSlot(best)
}

/// Fill up to four slots from a move pool, padding with the fallback move
pub fn pad_moves(pool: impl IntoIterator<Item = Move>, fallback: &Move) -> [Move; MOVE_SLOTS] {
    let mut iter = pool.into_iter().filter(Move::is_damaging);
    std::array::from_fn(|_| iter.next().unwrap_or_else(|| fallback.clone()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn moves(spec: [(&str, u32); 4]) -> [Move; 4] {
        spec.map(|(name, power)| Move::new(name, power))
    }

    #[test]
    fn test_struggle_defaults() {
        let m = Move::struggle();
        assert_eq!(m.name, "Struggle");
        assert_eq!(m.power, 50);
        assert!(m.is_damaging());
    }

    #[test]
    fn test_move_slot_range() {
        assert!(MoveSlot::new(0).is_some());
        assert!(MoveSlot::new(3).is_some());
        assert!(MoveSlot::new(4).is_none());
        assert!(matches!(
            MoveSlot::try_from(7),
            Err(BattleError::InvalidMoveSlot(7))
        ));
        assert_eq!(MoveSlot::all().count(), MOVE_SLOTS);
    }

    #[test]
    fn test_strongest_move_first_on_tie() {
        let set = moves([("A", 40), ("B", 90), ("C", 60), ("D", 90)]);
        assert_eq!(strongest_move(&set).index(), 1);
    }

    #[test]
    fn test_strongest_move_all_equal() {
        let set = moves([("A", 50), ("B", 50), ("C", 50), ("D", 50)]);
        assert_eq!(strongest_move(&set).index(), 0);
    }

    #[test]
    fn test_strongest_move_last_slot() {
        let set = moves([("A", 10), ("B", 20), ("C", 30), ("D", 120)]);
        assert_eq!(strongest_move(&set).index(), 3);
    }

    #[test]
    fn test_pad_moves_short_pool() {
        let padded = pad_moves(vec![Move::new("Tackle", 40)], &Move::struggle());
        assert_eq!(padded[0].name, "Tackle");
        for m in &padded[1..] {
            assert_eq!(m, &Move::struggle());
        }
    }

    #[test]
    fn test_pad_moves_skips_non_damaging() {
        let pool = vec![
            Move::new("Growl", 0),
            Move::new("Ember", 40),
            Move::new("Flamethrower", 90),
            Move::new("Fire Blast", 110),
            Move::new("Scratch", 40),
            Move::new("Slash", 70),
        ];
        let padded = pad_moves(pool, &Move::struggle());
        let names: Vec<_> = padded.iter().map(|m| m.name.as_str()).collect();
        assert_eq!(names, ["Ember", "Flamethrower", "Fire Blast", "Scratch"]);
    }

    #[test]
    fn test_move_slot_deserialize_rejects_out_of_range() {
        assert!(serde_json::from_str::<MoveSlot>("2").is_ok());
        assert!(serde_json::from_str::<MoveSlot>("4").is_err());
    }
}
