use crate::view::derive;
use crate::{Phase, Snapshot};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// The single local action a phase can enable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PlayerAction {
    Join,
    SelectTarget,
    CastVote,
}

impl PlayerAction {
    pub fn label(&self) -> &'static str {
        match self {
            PlayerAction::Join => "join the game",
            PlayerAction::SelectTarget => "select a target",
            PlayerAction::CastVote => "cast a vote",
        }
    }
}

/// A precondition the contract would reject anyway, caught before a
/// transaction is signed. The snapshot is never touched by these checks.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ActionError {
    #[error("no wallet connected")]
    NoWallet,
    #[error("registration is closed")]
    RegistrationClosed,
    #[error("already joined this game")]
    AlreadyJoined,
    #[error("not a participant in this game")]
    NotJoined,
    #[error("eliminated players cannot act")]
    NotAlive,
    #[error("your role has no action in this phase")]
    NotPrivileged,
    #[error("ballot already cast")]
    AlreadyVoted,
    #[error("{0} is not an eligible choice")]
    IneligibleTarget(String),
    #[error("nothing to do in this phase")]
    OutOfPhase,
}

fn effective_phase(snapshot: &Snapshot) -> Option<Phase> {
    if snapshot.ended {
        None
    } else {
        snapshot.phase
    }
}

pub fn check_join(snapshot: &Snapshot, local_address: Option<&str>) -> Result<(), ActionError> {
    if local_address.is_none() {
        return Err(ActionError::NoWallet);
    }
    let vm = derive(snapshot, local_address);
    if vm.joined {
        return Err(ActionError::AlreadyJoined);
    }
    if !matches!(effective_phase(snapshot), Some(Phase::Registration)) {
        return Err(ActionError::RegistrationClosed);
    }
    Ok(())
}

pub fn check_target(
    snapshot: &Snapshot,
    local_address: Option<&str>,
    target: &str,
) -> Result<(), ActionError> {
    let vm = derive(snapshot, local_address);
    let me = vm.current_player.as_ref().ok_or(ActionError::NotJoined)?;
    if !matches!(effective_phase(snapshot), Some(Phase::Night)) {
        return Err(ActionError::OutOfPhase);
    }
    if !me.is_alive {
        return Err(ActionError::NotAlive);
    }
    if !me.role.acts_at_night() {
        return Err(ActionError::NotPrivileged);
    }
    if !vm.eligible_targets.iter().any(|t| t == target) {
        return Err(ActionError::IneligibleTarget(target.to_string()));
    }
    Ok(())
}

pub fn check_vote(
    snapshot: &Snapshot,
    local_address: Option<&str>,
    choice: &str,
) -> Result<(), ActionError> {
    let vm = derive(snapshot, local_address);
    let me = vm.current_player.as_ref().ok_or(ActionError::NotJoined)?;
    if !matches!(effective_phase(snapshot), Some(Phase::Voting)) {
        return Err(ActionError::OutOfPhase);
    }
    if !me.is_alive {
        return Err(ActionError::NotAlive);
    }
    if me.has_voted {
        return Err(ActionError::AlreadyVoted);
    }
    // Ballots may name any other participant, living or not.
    if !vm.other_players.iter().any(|p| p == choice) {
        return Err(ActionError::IneligibleTarget(choice.to_string()));
    }
    Ok(())
}

pub fn check_tally(snapshot: &Snapshot, local_address: Option<&str>) -> Result<(), ActionError> {
    let vm = derive(snapshot, local_address);
    if !vm.joined {
        return Err(ActionError::NotJoined);
    }
    if !matches!(effective_phase(snapshot), Some(Phase::Voting)) {
        return Err(ActionError::OutOfPhase);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Player, Role};

    fn snapshot(players: Vec<Player>, phase: Phase) -> Snapshot {
        Snapshot {
            players,
            phase: Some(phase),
            last_eliminated: None,
            ended: false,
        }
    }

    #[test]
    fn test_check_join_ok() {
        let snap = snapshot(vec![Player::new("xion1aaa", Role::Unassigned)], Phase::Registration);
        assert_eq!(check_join(&snap, Some("xion1bbb")), Ok(()));
    }

    #[test]
    fn test_check_join_requires_wallet() {
        let snap = snapshot(vec![], Phase::Registration);
        assert_eq!(check_join(&snap, None), Err(ActionError::NoWallet));
    }

    #[test]
    fn test_check_join_rejects_double_join() {
        let snap = snapshot(vec![Player::new("xion1aaa", Role::Unassigned)], Phase::Registration);
        assert_eq!(
            check_join(&snap, Some("xion1aaa")),
            Err(ActionError::AlreadyJoined)
        );
    }

    #[test]
    fn test_check_join_rejects_after_registration() {
        let snap = snapshot(vec![], Phase::Night);
        assert_eq!(
            check_join(&snap, Some("xion1aaa")),
            Err(ActionError::RegistrationClosed)
        );
    }

    #[test]
    fn test_check_target_ok() {
        let snap = snapshot(
            vec![
                Player::new("xion1aaa", Role::Assassin),
                Player::new("xion1bbb", Role::Bystander),
            ],
            Phase::Night,
        );
        assert_eq!(check_target(&snap, Some("xion1aaa"), "xion1bbb"), Ok(()));
    }

    #[test]
    fn test_check_target_rejects_outsider() {
        let snap = snapshot(vec![Player::new("xion1aaa", Role::Assassin)], Phase::Night);
        assert_eq!(
            check_target(&snap, Some("xion1zzz"), "xion1aaa"),
            Err(ActionError::NotJoined)
        );
    }

    #[test]
    fn test_check_target_rejects_unprivileged_role() {
        let snap = snapshot(
            vec![
                Player::new("xion1aaa", Role::Bystander),
                Player::new("xion1bbb", Role::Assassin),
            ],
            Phase::Night,
        );
        assert_eq!(
            check_target(&snap, Some("xion1aaa"), "xion1bbb"),
            Err(ActionError::NotPrivileged)
        );
    }

    #[test]
    fn test_check_target_rejects_dead_target() {
        let mut victim = Player::new("xion1bbb", Role::Bystander);
        victim.is_alive = false;
        let snap = snapshot(
            vec![Player::new("xion1aaa", Role::Assassin), victim],
            Phase::Night,
        );
        assert_eq!(
            check_target(&snap, Some("xion1aaa"), "xion1bbb"),
            Err(ActionError::IneligibleTarget("xion1bbb".to_string()))
        );
    }

    #[test]
    fn test_check_target_rejects_self() {
        let snap = snapshot(
            vec![
                Player::new("xion1aaa", Role::Assassin),
                Player::new("xion1bbb", Role::Bystander),
            ],
            Phase::Night,
        );
        assert_eq!(
            check_target(&snap, Some("xion1aaa"), "xion1aaa"),
            Err(ActionError::IneligibleTarget("xion1aaa".to_string()))
        );
    }

    #[test]
    fn test_check_target_out_of_phase() {
        let snap = snapshot(
            vec![
                Player::new("xion1aaa", Role::Assassin),
                Player::new("xion1bbb", Role::Bystander),
            ],
            Phase::Voting,
        );
        assert_eq!(
            check_target(&snap, Some("xion1aaa"), "xion1bbb"),
            Err(ActionError::OutOfPhase)
        );
    }

    #[test]
    fn test_check_vote_ok_allows_dead_choice() {
        let mut suspect = Player::new("xion1bbb", Role::Moderator);
        suspect.is_alive = false;
        let snap = snapshot(
            vec![Player::new("xion1aaa", Role::Bystander), suspect],
            Phase::Voting,
        );
        assert_eq!(check_vote(&snap, Some("xion1aaa"), "xion1bbb"), Ok(()));
    }

    #[test]
    fn test_check_vote_rejects_second_ballot() {
        let mut me = Player::new("xion1aaa", Role::Bystander);
        me.has_voted = true;
        let snap = snapshot(
            vec![me, Player::new("xion1bbb", Role::Moderator)],
            Phase::Voting,
        );
        assert_eq!(
            check_vote(&snap, Some("xion1aaa"), "xion1bbb"),
            Err(ActionError::AlreadyVoted)
        );
    }

    #[test]
    fn test_check_vote_rejects_dead_voter() {
        let mut me = Player::new("xion1aaa", Role::Bystander);
        me.is_alive = false;
        let snap = snapshot(
            vec![me, Player::new("xion1bbb", Role::Moderator)],
            Phase::Voting,
        );
        assert_eq!(
            check_vote(&snap, Some("xion1aaa"), "xion1bbb"),
            Err(ActionError::NotAlive)
        );
    }

    #[test]
    fn test_check_tally_requires_joined() {
        let snap = snapshot(vec![Player::new("xion1aaa", Role::Bystander)], Phase::Voting);
        assert_eq!(check_tally(&snap, Some("xion1aaa")), Ok(()));
        assert_eq!(
            check_tally(&snap, Some("xion1zzz")),
            Err(ActionError::NotJoined)
        );
    }

    #[test]
    fn test_ended_game_rejects_everything() {
        let mut snap = snapshot(
            vec![
                Player::new("xion1aaa", Role::Assassin),
                Player::new("xion1bbb", Role::Bystander),
            ],
            Phase::Night,
        );
        snap.ended = true;
        assert!(check_join(&snap, Some("xion1zzz")).is_err());
        assert!(check_target(&snap, Some("xion1aaa"), "xion1bbb").is_err());
        assert!(check_tally(&snap, Some("xion1aaa")).is_err());
    }
}
