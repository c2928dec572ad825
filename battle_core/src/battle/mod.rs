//! Battle engine - turn resolution, faint handling and win detection

mod engine;
mod log;
mod result;
mod state;
pub mod turn;

pub use engine::BattleEngine;
pub use log::BattleLog;
pub use result::TurnOutcome;
pub use state::MatchState;
pub use turn::{choose_attacker, resolve_turn, select_move};

use crate::builder::RosterBuildError;
use crate::types::Side;
use thiserror::Error;

/// Errors raised by the battle engine
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BattleError {
    #[error("Invalid {side} roster: {reason}")]
    InvalidRoster { side: Side, reason: String },
    #[error("Battle has already been started")]
    AlreadyStarted,
    #[error("Move slot {0} is out of range (expected 0..4)")]
    InvalidMoveSlot(usize),
}

/// Failure while getting a match off the ground
#[derive(Error, Debug)]
pub enum SetupError {
    #[error("Failed to build rosters: {0}")]
    Build(#[from] RosterBuildError),
    #[error(transparent)]
    Battle(#[from] BattleError),
}
