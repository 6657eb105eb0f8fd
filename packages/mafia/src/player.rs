use crate::Role;
use serde::{Deserialize, Serialize};

/// Snapshot copy of one contract-side player record.
///
/// The contract owns the canonical record; the client never mutates this,
/// it is replaced wholesale on every refresh.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    pub address: String,
    pub role: Role,
    pub is_alive: bool,
    pub has_voted: bool,
}

impl Player {
    pub fn new(address: impl Into<String>, role: Role) -> Self {
        Self {
            address: address.into(),
            role,
            is_alive: true,
            has_voted: false,
        }
    }
}

/// Look up a player by address.
///
/// Addresses are unique by contract invariant; if that is ever broken the
/// first match wins, deterministically.
pub fn find_player<'a>(players: &'a [Player], address: &str) -> Option<&'a Player> {
    players.iter().find(|p| p.address == address)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_player_is_alive_and_unvoted() {
        let player = Player::new("xion1abc", Role::Unassigned);
        assert!(player.is_alive);
        assert!(!player.has_voted);
        assert_eq!(player.address, "xion1abc");
    }

    #[test]
    fn test_find_player_present() {
        let players = vec![
            Player::new("xion1aaa", Role::Bystander),
            Player::new("xion1bbb", Role::Assassin),
        ];
        let found = find_player(&players, "xion1bbb").unwrap();
        assert_eq!(found.role, Role::Assassin);
    }

    #[test]
    fn test_find_player_absent() {
        let players = vec![Player::new("xion1aaa", Role::Bystander)];
        assert!(find_player(&players, "xion1zzz").is_none());
    }

    #[test]
    fn test_find_player_duplicate_first_match_wins() {
        let mut dup = Player::new("xion1aaa", Role::Moderator);
        dup.is_alive = false;
        let players = vec![Player::new("xion1aaa", Role::Bystander), dup];
        let found = find_player(&players, "xion1aaa").unwrap();
        assert_eq!(found.role, Role::Bystander);
        assert!(found.is_alive);
    }
}
