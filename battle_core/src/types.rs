//! Core types shared across the battle engine

use serde::{Deserialize, Serialize};
use std::fmt;

/// One of the two teams in a match
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Side {
    Player,
    Ai,
}

impl Side {
    /// Get both sides in turn-priority order
    pub fn all() -> &'static [Side] {
        &[Side::Player, Side::Ai]
    }

    /// The opposing side
    pub fn opponent(self) -> Side {
        match self {
            Side::Player => Side::Ai,
            Side::Ai => Side::Player,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Side::Player => "Player",
            Side::Ai => "AI",
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Coarse lifecycle of a match
///
/// Transitions only ever move forward: `Setup -> InProgress -> Concluded`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Phase {
    /// Rosters are still being assembled
    Setup,
    /// Accepting attacks
    InProgress,
    /// Terminal, a winner has been decided
    Concluded,
}

impl Phase {
    pub fn name(&self) -> &'static str {
        match self {
            Phase::Setup => "Setup",
            Phase::InProgress => "In Progress",
            Phase::Concluded => "Concluded",
        }
    }

    /// Whether the match can still accept attacks
    pub fn is_active(&self) -> bool {
        *self == Phase::InProgress
    }
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_opponent() {
        assert_eq!(Side::Player.opponent(), Side::Ai);
        assert_eq!(Side::Ai.opponent(), Side::Player);
    }

    #[test]
    fn test_phase_ordering_is_forward() {
        assert!(Phase::Setup < Phase::InProgress);
        assert!(Phase::InProgress < Phase::Concluded);
        assert!(Phase::InProgress.is_active());
        assert!(!Phase::Concluded.is_active());
    }

    #[test]
    fn test_side_serializes_snake_case() {
        let json = serde_json::to_string(&Side::Ai).unwrap();
        assert_eq!(json, "\"ai\"");
    }
}
