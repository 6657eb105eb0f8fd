use crate::{Phase, Player};
use serde::{Deserialize, Serialize};

/// The single locally-held copy of contract state.
///
/// `phase` is optional because players and phase are fetched independently
/// and either may not have arrived yet. A snapshot with players but no
/// phase simply enables no actions.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    pub players: Vec<Player>,
    pub phase: Option<Phase>,
    pub last_eliminated: Option<String>,
    pub ended: bool,
}

/// Holds the snapshot and sequences refreshes.
///
/// Each refresh takes a sequence number from `begin_refresh` and applies
/// its results under that number; results carrying a sequence older than
/// what is already applied are rejected, so a slow read that completes
/// late can never overwrite a newer one. A failed fetch applies nothing
/// and the previous snapshot stays in place.
#[derive(Debug, Default)]
pub struct SnapshotStore {
    snapshot: Snapshot,
    next_seq: u64,
    players_seq: u64,
    phase_seq: u64,
}

impl SnapshotStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn snapshot(&self) -> &Snapshot {
        &self.snapshot
    }

    pub fn begin_refresh(&mut self) -> u64 {
        self.next_seq += 1;
        self.next_seq
    }

    pub fn apply_players(&mut self, seq: u64, players: Vec<Player>) -> bool {
        if seq < self.players_seq {
            return false;
        }
        self.players_seq = seq;
        self.snapshot.players = players;
        true
    }

    pub fn apply_phase(&mut self, seq: u64, phase: Phase) -> bool {
        if seq < self.phase_seq {
            return false;
        }
        self.phase_seq = seq;
        if phase.is_terminal() {
            self.snapshot.ended = true;
        }
        self.snapshot.phase = Some(phase);
        true
    }

    pub fn set_last_eliminated(&mut self, eliminated: Option<String>) {
        self.snapshot.last_eliminated = eliminated;
    }

    /// Record the out-of-band terminal signal (the `game_ended` event).
    pub fn mark_ended(&mut self) {
        self.snapshot.ended = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Role;

    #[test]
    fn test_empty_store() {
        let store = SnapshotStore::new();
        assert!(store.snapshot().players.is_empty());
        assert!(store.snapshot().phase.is_none());
        assert!(!store.snapshot().ended);
    }

    #[test]
    fn test_apply_in_order() {
        let mut store = SnapshotStore::new();
        let seq = store.begin_refresh();
        assert!(store.apply_players(seq, vec![Player::new("xion1aaa", Role::Unassigned)]));
        assert!(store.apply_phase(seq, Phase::Registration));
        assert_eq!(store.snapshot().players.len(), 1);
        assert_eq!(store.snapshot().phase, Some(Phase::Registration));
    }

    #[test]
    fn test_stale_read_rejected() {
        let mut store = SnapshotStore::new();
        let old_seq = store.begin_refresh();
        let new_seq = store.begin_refresh();

        assert!(store.apply_players(new_seq, vec![Player::new("xion1new", Role::Bystander)]));
        // The older read completes after the newer one and must lose.
        assert!(!store.apply_players(old_seq, vec![Player::new("xion1old", Role::Bystander)]));
        assert_eq!(store.snapshot().players[0].address, "xion1new");

        assert!(store.apply_phase(new_seq, Phase::Voting));
        assert!(!store.apply_phase(old_seq, Phase::Registration));
        assert_eq!(store.snapshot().phase, Some(Phase::Voting));
    }

    #[test]
    fn test_failed_fetch_leaves_snapshot_untouched() {
        let mut store = SnapshotStore::new();
        let seq = store.begin_refresh();
        store.apply_players(seq, vec![Player::new("xion1aaa", Role::Assassin)]);
        store.apply_phase(seq, Phase::Night);

        let before = store.snapshot().clone();
        // A failed refresh takes a sequence number but applies nothing.
        store.begin_refresh();
        assert_eq!(store.snapshot(), &before);
    }

    #[test]
    fn test_partial_refresh_keeps_other_half() {
        let mut store = SnapshotStore::new();
        let seq = store.begin_refresh();
        store.apply_players(seq, vec![Player::new("xion1aaa", Role::Bystander)]);
        store.apply_phase(seq, Phase::Registration);

        // Next refresh only manages to fetch the phase.
        let seq = store.begin_refresh();
        store.apply_phase(seq, Phase::Night);
        assert_eq!(store.snapshot().players.len(), 1);
        assert_eq!(store.snapshot().phase, Some(Phase::Night));
    }

    #[test]
    fn test_mark_ended() {
        let mut store = SnapshotStore::new();
        store.mark_ended();
        assert!(store.snapshot().ended);
    }

    #[test]
    fn test_terminal_phase_code_marks_ended() {
        let mut store = SnapshotStore::new();
        let seq = store.begin_refresh();
        store.apply_phase(seq, Phase::Ended);
        assert!(store.snapshot().ended);
    }
}
