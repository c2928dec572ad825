//! Turn resolution - apply one attack to a MatchState

use super::log::BattleLog;
use super::result::TurnOutcome;
use super::state::MatchState;
use crate::combatant::{Combatant, MoveSlot};
use crate::types::Side;
use tracing::{debug, info, warn};

/// Decide which front combatant acts. Ties go to the player.
pub fn choose_attacker(player: &Combatant, ai: &Combatant) -> Side {
    if player.speed >= ai.speed {
        Side::Player
    } else {
        Side::Ai
    }
}

/// Decide which move the acting side uses
///
/// The player's requested slot is only honoured when the player acts. The AI
/// always picks its strongest move and ignores the request.
pub fn select_move(side: Side, attacker: &Combatant, requested: MoveSlot) -> MoveSlot {
    match side {
        Side::Player => requested,
        Side::Ai => attacker.strongest_slot(),
    }
}

/// Resolve a single attack against the match state
///
/// Returns `None` without touching the state or log when the match is not in
/// progress or either roster is empty. Otherwise exactly one defender takes
/// damage:
/// 1. The faster front combatant acts (ties favour the player)
/// 2. Its move's power is subtracted from the opposing front combatant
/// 3. A fainted defender is removed from the front of its roster
/// 4. The match concludes when a roster empties
pub fn resolve_turn(
    state: &mut MatchState,
    log: &mut BattleLog,
    requested: MoveSlot,
) -> Option<TurnOutcome> {
    if !state.phase.is_active() {
        warn!(phase = %state.phase, "attack ignored, match not in progress");
        return None;
    }

    let (Some(player), Some(ai)) = (state.player.front(), state.ai.front()) else {
        warn!("attack ignored, a roster is already empty");
        return None;
    };

    let attacker_side = choose_attacker(player, ai);
    let (attacker, defender) = match attacker_side {
        Side::Player => (player, ai),
        Side::Ai => (ai, player),
    };

    let slot = select_move(attacker_side, attacker, requested);
    let used = attacker.move_at(slot).clone();
    let attacker_name = attacker.name.clone();
    let defender_name = defender.name.clone();

    debug!(
        attacker = %attacker_name,
        side = %attacker_side,
        speed = attacker.speed,
        defender = %defender_name,
        move_name = %used.name,
        power = used.power,
        "resolving turn"
    );

    let defender_roster = state.roster_mut(attacker_side.opponent());
    let Some(target) = defender_roster.front_mut() else {
        return None;
    };

    let hp_before = target.hp;
    let hp_after = target.take_damage(used.power);
    log.append(format!("{} used {}!", attacker_name, used.name));

    let fainted = target.is_fainted();
    if fainted {
        log.append(format!("{} fainted!", defender_name));
        defender_roster.remove_front();
        info!(
            combatant = %defender_name,
            side = %attacker_side.opponent(),
            remaining = defender_roster.len(),
            "combatant fainted"
        );
    }

    let winner = state.decided_winner();
    if let Some(side) = winner {
        state.conclude(side);
        info!(winner = %side, "match concluded");
    }

    Some(TurnOutcome {
        attacker_side,
        attacker: attacker_name,
        defender: defender_name,
        slot,
        move_name: used.name,
        damage: used.power,
        player_choice_discarded: attacker_side == Side::Ai,
        defender_hp_before: hp_before,
        defender_hp_after: hp_after,
        fainted,
        winner,
    })
}
