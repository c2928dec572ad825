//! MatchState - the single owned value describing a match

use crate::combatant::Roster;
use crate::types::{Phase, Side};
use serde::{Deserialize, Serialize};

/// Both rosters plus the match lifecycle
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchState {
    pub player: Roster,
    pub ai: Roster,
    pub phase: Phase,
    pub winner: Option<Side>,
}

impl Default for MatchState {
    fn default() -> Self {
        MatchState {
            player: Roster::new(),
            ai: Roster::new(),
            phase: Phase::Setup,
            winner: None,
        }
    }
}

impl MatchState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn roster(&self, side: Side) -> &Roster {
        match side {
            Side::Player => &self.player,
            Side::Ai => &self.ai,
        }
    }

    pub(crate) fn roster_mut(&mut self, side: Side) -> &mut Roster {
        match side {
            Side::Player => &mut self.player,
            Side::Ai => &mut self.ai,
        }
    }

    /// Total combatants still standing on both sides
    pub fn combatants_remaining(&self) -> usize {
        self.player.len() + self.ai.len()
    }

    /// Side that has won given the current rosters. AI elimination is checked first.
    pub fn decided_winner(&self) -> Option<Side> {
        if self.ai.is_empty() {
            Some(Side::Player)
        } else if self.player.is_empty() {
            Some(Side::Ai)
        } else {
            None
        }
    }

    /// Move to `Concluded`. Never moves the phase backwards.
    pub(crate) fn conclude(&mut self, winner: Side) {
        if self.phase == Phase::Concluded {
            return;
        }
        self.phase = Phase::Concluded;
        self.winner = Some(winner);
    }

    /// Serialize to pretty JSON for inspection
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}
