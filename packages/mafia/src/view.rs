use crate::action::PlayerAction;
use crate::player::find_player;
use crate::{Phase, Player, Snapshot};
use serde::{Deserialize, Serialize};

/// Everything the UI needs, projected from one snapshot and the local
/// wallet address. Recomputed on every snapshot change, never stored
/// across refreshes.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ViewModel {
    pub joined: bool,
    pub current_player: Option<Player>,
    pub other_players: Vec<String>,
    pub eligible_targets: Vec<String>,
    pub can_join: bool,
    pub can_act_now: bool,
    pub can_tally: bool,
    pub action: Option<PlayerAction>,
}

/// Pure projection of a snapshot. Identical inputs give identical outputs;
/// nothing here touches the snapshot or any hidden state.
pub fn derive(snapshot: &Snapshot, local_address: Option<&str>) -> ViewModel {
    let current_player = local_address
        .and_then(|addr| find_player(&snapshot.players, addr))
        .cloned();
    let joined = current_player.is_some();

    let other_players: Vec<String> = snapshot
        .players
        .iter()
        .filter(|p| Some(p.address.as_str()) != local_address)
        .map(|p| p.address.clone())
        .collect();

    let eligible_targets: Vec<String> = snapshot
        .players
        .iter()
        .filter(|p| Some(p.address.as_str()) != local_address && p.is_alive)
        .map(|p| p.address.clone())
        .collect();

    // Once the game has ended no phase enables anything, whatever the
    // last polled code was.
    let phase = if snapshot.ended { None } else { snapshot.phase };

    let can_join =
        matches!(phase, Some(Phase::Registration)) && local_address.is_some() && !joined;

    let me = current_player.as_ref();
    let can_act_now = match phase {
        Some(Phase::Night) => me.is_some_and(|p| p.is_alive && p.role.acts_at_night()),
        Some(Phase::Voting) => me.is_some_and(|p| p.is_alive && !p.has_voted),
        _ => false,
    };
    let can_tally = matches!(phase, Some(Phase::Voting)) && joined;

    let action = if can_join {
        Some(PlayerAction::Join)
    } else if can_act_now {
        match phase {
            Some(Phase::Night) => Some(PlayerAction::SelectTarget),
            Some(Phase::Voting) => Some(PlayerAction::CastVote),
            _ => None,
        }
    } else {
        None
    };

    ViewModel {
        joined,
        current_player,
        other_players,
        eligible_targets,
        can_join,
        can_act_now,
        can_tally,
        action,
    }
}
