//! BattleEngine - owner of the match state and the battle log

use super::log::BattleLog;
use super::result::TurnOutcome;
use super::state::MatchState;
use super::turn::resolve_turn;
use super::{BattleError, SetupError};
use crate::builder::{CombatantSource, RosterBuilder};
use crate::combatant::{MoveSlot, Roster};
use crate::types::{Phase, Side};
use std::sync::Arc;
use tracing::info;

/// The authoritative turn-resolution state machine
///
/// All mutation goes through `&mut self`, so two attacks can never be in
/// flight at once. Presentation reads state through the accessors after
/// each call.
#[derive(Debug, Clone, Default)]
pub struct BattleEngine {
    state: MatchState,
    log: BattleLog,
}

impl BattleEngine {
    /// Create an engine in the `Setup` phase with empty rosters
    pub fn new() -> Self {
        Self::default()
    }

    /// Build both rosters concurrently from `source`, then initialize
    ///
    /// Either every combatant builds and the match starts, or nothing does.
    pub async fn start<S>(source: Arc<S>, roster_size: usize) -> Result<Self, SetupError>
    where
        S: CombatantSource + ?Sized + 'static,
    {
        let rosters = RosterBuilder::new(source).build_rosters(roster_size).await?;
        let mut engine = BattleEngine::new();
        engine.initialize(rosters.player, rosters.ai)?;
        Ok(engine)
    }

    /// Install both rosters and move to `InProgress`
    ///
    /// Fails without changing anything if either roster is empty or holds a
    /// malformed combatant, or if the match has already started.
    pub fn initialize(
        &mut self,
        player: impl Into<Roster>,
        ai: impl Into<Roster>,
    ) -> Result<(), BattleError> {
        if self.state.phase != Phase::Setup {
            return Err(BattleError::AlreadyStarted);
        }

        let player = player.into();
        let ai = ai.into();
        validate_roster(Side::Player, &player)?;
        validate_roster(Side::Ai, &ai)?;

        info!(
            player_count = player.len(),
            ai_count = ai.len(),
            "battle initialized"
        );

        self.state.player = player;
        self.state.ai = ai;
        self.state.phase = Phase::InProgress;
        self.state.winner = None;
        Ok(())
    }

    /// Resolve one turn with the player's chosen move
    ///
    /// Returns `None` (and changes nothing) once the match is over or before
    /// it has started.
    pub fn attack(&mut self, slot: MoveSlot) -> Option<TurnOutcome> {
        resolve_turn(&mut self.state, &mut self.log, slot)
    }

    /// Like [`attack`](Self::attack) but from a raw index
    ///
    /// # Panics
    /// Panics if `index` is not in `0..4`. An out-of-range index is a bug in
    /// the caller, not a battle state.
    pub fn attack_index(&mut self, index: usize) -> Option<TurnOutcome> {
        let slot = match MoveSlot::try_from(index) {
            Ok(slot) => slot,
            Err(err) => panic!("{err}"),
        };
        self.attack(slot)
    }

    pub fn phase(&self) -> Phase {
        self.state.phase
    }

    pub fn winner(&self) -> Option<Side> {
        self.state.winner
    }

    pub fn player_roster(&self) -> &Roster {
        &self.state.player
    }

    pub fn ai_roster(&self) -> &Roster {
        &self.state.ai
    }

    pub fn roster(&self, side: Side) -> &Roster {
        self.state.roster(side)
    }

    pub fn log(&self) -> &BattleLog {
        &self.log
    }

    /// Read-only view of the whole match
    pub fn state(&self) -> &MatchState {
        &self.state
    }

    /// Owned copy of the match state for presentation
    pub fn snapshot(&self) -> MatchState {
        self.state.clone()
    }

    pub fn is_over(&self) -> bool {
        self.state.phase == Phase::Concluded
    }
}

fn validate_roster(side: Side, roster: &Roster) -> Result<(), BattleError> {
    if roster.is_empty() {
        return Err(BattleError::InvalidRoster {
            side,
            reason: "roster is empty".to_string(),
        });
    }
    for combatant in roster {
        combatant
            .validate()
            .map_err(|reason| BattleError::InvalidRoster { side, reason })?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::combatant::{Combatant, Move};

    fn fighter(name: &str, hp: i32, speed: u32, moves: [(&str, u32); 4]) -> Combatant {
        Combatant::new(name, hp, speed, moves.map(|(n, p)| Move::new(n, p)))
    }

    fn team(prefix: &str, hp: i32, speed: u32) -> Vec<Combatant> {
        (0..6)
            .map(|i| {
                fighter(
                    &format!("{prefix}{i}"),
                    hp,
                    speed,
                    [("Tackle", 40), ("Bite", 60), ("Slam", 80), ("Pound", 40)],
                )
            })
            .collect()
    }

    fn started(player: Vec<Combatant>, ai: Vec<Combatant>) -> BattleEngine {
        let mut engine = BattleEngine::new();
        engine.initialize(player, ai).unwrap();
        engine
    }

    #[test]
    fn test_initialize_moves_to_in_progress() {
        let engine = started(team("P", 100, 50), team("A", 100, 50));
        assert_eq!(engine.phase(), Phase::InProgress);
        assert!(engine.winner().is_none());
        assert_eq!(engine.player_roster().len(), 6);
        assert_eq!(engine.ai_roster().len(), 6);
        assert!(engine.log().is_empty());
    }

    #[test]
    fn test_initialize_rejects_empty_roster() {
        let mut engine = BattleEngine::new();
        let err = engine.initialize(team("P", 100, 50), Vec::new()).unwrap_err();
        assert!(matches!(err, BattleError::InvalidRoster { side: Side::Ai, .. }));
        assert_eq!(engine.phase(), Phase::Setup);

        let err = engine.initialize(Vec::new(), team("A", 100, 50)).unwrap_err();
        assert!(matches!(err, BattleError::InvalidRoster { side: Side::Player, .. }));
    }

    #[test]
    fn test_initialize_rejects_malformed_combatant() {
        let mut player = team("P", 100, 50);
        player[3].moves[0] = Move::new("Growl", 0);

        let mut engine = BattleEngine::new();
        let err = engine.initialize(player, team("A", 100, 50)).unwrap_err();
        assert!(err.to_string().contains("Growl"));
        assert!(engine.player_roster().is_empty());
    }

    #[test]
    fn test_initialize_twice_fails() {
        let mut engine = started(team("P", 100, 50), team("A", 100, 50));
        let err = engine.initialize(team("P", 100, 50), team("A", 100, 50)).unwrap_err();
        assert_eq!(err, BattleError::AlreadyStarted);
    }

    #[test]
    fn test_attack_before_initialize_is_noop() {
        let mut engine = BattleEngine::new();
        assert!(engine.attack_index(0).is_none());
        assert_eq!(engine.phase(), Phase::Setup);
        assert!(engine.log().is_empty());
    }

    #[test]
    #[should_panic(expected = "out of range")]
    fn test_attack_index_out_of_range_panics() {
        let mut engine = started(team("P", 100, 50), team("A", 100, 50));
        engine.attack_index(4);
    }

    // Player front speed 100 vs AI 50, move index 2 (power 80)
    #[test]
    fn test_player_faster_scenario() {
        let mut engine = started(team("P", 100, 100), team("A", 100, 50));

        engine.attack_index(2).unwrap();

        assert_eq!(engine.log().all(), ["P0 used Slam!"]);
        assert_eq!(engine.ai_roster().front().unwrap().hp, 20);
        assert_eq!(engine.player_roster().front().unwrap().hp, 100);
    }

    // AI faster with moves [(A,40),(B,90),(C,60),(D,90)]
    #[test]
    fn test_ai_faster_scenario() {
        let mut ai = team("A", 100, 100);
        ai[0] = fighter("Crobat", 100, 100, [("A", 40), ("B", 90), ("C", 60), ("D", 90)]);
        let mut engine = started(team("P", 400, 50), ai);

        for index in 0..4 {
            let outcome = engine.attack_index(index).unwrap();
            assert_eq!(outcome.move_name, "B");
        }

        assert_eq!(engine.player_roster().front().unwrap().hp, 40);
        assert_eq!(engine.ai_roster().front().unwrap().hp, 100);
    }

    // Defender at 30 hp takes 50
    #[test]
    fn test_faint_scenario() {
        let mut ai = team("A", 100, 10);
        ai[0].hp = 30;
        let mut player = team("P", 100, 90);
        player[0] = fighter("Machop", 100, 90, [("Karate Chop", 50); 4]);
        let mut engine = started(player, ai);

        let outcome = engine.attack_index(0).unwrap();

        assert_eq!(outcome.defender_hp_after, -20);
        assert_eq!(engine.ai_roster().len(), 5);
        assert_eq!(engine.ai_roster().front().unwrap().name, "A1");
        assert_eq!(engine.log().all(), ["Machop used Karate Chop!", "A0 fainted!"]);
    }

    // AI roster wiped out
    #[test]
    fn test_conclusion_scenario() {
        let player = vec![fighter("Mewtwo", 500, 130, [("Psystrike", 100); 4])];
        let ai = vec![
            fighter("Rattata", 30, 72, [("Tackle", 40); 4]),
            fighter("Pidgey", 40, 56, [("Gust", 40); 4]),
        ];
        let mut engine = started(player, ai);

        engine.attack_index(0).unwrap();
        assert_eq!(engine.phase(), Phase::InProgress);
        let outcome = engine.attack_index(0).unwrap();
        assert_eq!(outcome.winner, Some(Side::Player));

        assert_eq!(engine.phase(), Phase::Concluded);
        assert_eq!(engine.winner(), Some(Side::Player));
        assert!(engine.is_over());

        let state = engine.snapshot();
        let log = engine.log().clone();
        assert!(engine.attack_index(1).is_none());
        assert_eq!(engine.state(), &state);
        assert_eq!(engine.log(), &log);
    }
}
