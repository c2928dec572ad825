//! Roster building - assembling combatants from an outside data source
//!
//! The engine only depends on [`CombatantSource`] handing back well-formed
//! combatants. [`RosterBuilder`] fans the requests for both teams out
//! concurrently and joins them all-or-nothing.

mod catalog;

pub use catalog::CatalogSource;

use crate::combatant::{Combatant, Roster};
use crate::types::Side;
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;
use tokio::task::JoinSet;
use tracing::{debug, info, warn};

/// Error from a single combatant build
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SourceError {
    #[error("Species catalog is empty")]
    EmptyCatalog,
    #[error("Invalid species '{name}': {reason}")]
    InvalidSpecies { name: String, reason: String },
    #[error("Combatant source unavailable: {0}")]
    Unavailable(String),
}

/// Error from building a pair of rosters
#[derive(Error, Debug)]
pub enum RosterBuildError {
    #[error("Roster size must be at least 1")]
    EmptyRoster,
    #[error("Failed to build {side} combatant #{slot}: {source}")]
    Combatant {
        side: Side,
        slot: usize,
        #[source]
        source: SourceError,
    },
    #[error("Roster build task failed: {0}")]
    TaskFailed(String),
}

/// Which roster position a combatant is being built for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BuildRequest {
    pub side: Side,
    pub slot: usize,
}

/// Anything that can produce a ready-to-fight combatant
#[async_trait]
pub trait CombatantSource: Send + Sync {
    /// Build one combatant with exactly four damaging moves
    async fn build_combatant(&self, request: BuildRequest) -> Result<Combatant, SourceError>;
}

/// Both teams, in slot order
#[derive(Debug, Clone)]
pub struct Rosters {
    pub player: Roster,
    pub ai: Roster,
}

/// Builds both rosters concurrently from a shared source
pub struct RosterBuilder<S: ?Sized> {
    source: Arc<S>,
}

impl<S> RosterBuilder<S>
where
    S: CombatantSource + ?Sized + 'static,
{
    pub fn new(source: Arc<S>) -> Self {
        RosterBuilder { source }
    }

    /// Build `size` combatants per side
    ///
    /// All `2 * size` builds run at once. The first failure aborts the rest
    /// and fails the whole call, so a partial roster is never returned.
    pub async fn build_rosters(&self, size: usize) -> Result<Rosters, RosterBuildError> {
        if size == 0 {
            return Err(RosterBuildError::EmptyRoster);
        }

        let mut tasks = JoinSet::new();
        for &side in Side::all() {
            for slot in 0..size {
                let source = Arc::clone(&self.source);
                let request = BuildRequest { side, slot };
                tasks.spawn(async move { (request, source.build_combatant(request).await) });
            }
        }

        let mut player: Vec<Option<Combatant>> = vec![None; size];
        let mut ai: Vec<Option<Combatant>> = vec![None; size];

        while let Some(joined) = tasks.join_next().await {
            let (request, result) =
                joined.map_err(|err| RosterBuildError::TaskFailed(err.to_string()))?;

            let combatant = result.map_err(|source| {
                warn!(side = %request.side, slot = request.slot, error = %source, "combatant build failed");
                RosterBuildError::Combatant {
                    side: request.side,
                    slot: request.slot,
                    source,
                }
            })?;

            debug!(
                side = %request.side,
                slot = request.slot,
                name = %combatant.name,
                hp = combatant.hp,
                speed = combatant.speed,
                "combatant built"
            );

            let slots = match request.side {
                Side::Player => &mut player,
                Side::Ai => &mut ai,
            };
            slots[request.slot] = Some(combatant);
        }

        let rosters = Rosters {
            player: collect_roster(player)?,
            ai: collect_roster(ai)?,
        };
        info!(size, "rosters built");
        Ok(rosters)
    }
}

fn collect_roster(slots: Vec<Option<Combatant>>) -> Result<Roster, RosterBuildError> {
    slots
        .into_iter()
        .collect::<Option<Roster>>()
        .ok_or_else(|| RosterBuildError::TaskFailed("a roster slot was never filled".to_string()))
}
