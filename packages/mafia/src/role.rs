use serde::{Deserialize, Serialize};

/// Role dealt by the contract, reported as a small integer code.
///
/// Codes outside the known table are carried through as `Unknown` so a
/// contract upgrade adding roles cannot break the client.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Role {
    Unassigned,
    Bystander,
    Assassin,
    Moderator,
    Unknown(u8),
}

impl Role {
    pub fn from_code(code: u8) -> Self {
        match code {
            0 => Role::Unassigned,
            1 => Role::Bystander,
            2 => Role::Assassin,
            3 => Role::Moderator,
            other => Role::Unknown(other),
        }
    }

    pub fn code(&self) -> u8 {
        match self {
            Role::Unassigned => 0,
            Role::Bystander => 1,
            Role::Assassin => 2,
            Role::Moderator => 3,
            Role::Unknown(code) => *code,
        }
    }

    pub fn label(&self) -> String {
        match self {
            Role::Unassigned => "Unassigned".to_string(),
            Role::Bystander => "Bystander".to_string(),
            Role::Assassin => "Assassin".to_string(),
            Role::Moderator => "Moderator".to_string(),
            Role::Unknown(code) => format!("role #{code}"),
        }
    }

    /// Whether this role holds the night-action privilege.
    pub fn acts_at_night(&self) -> bool {
        matches!(self, Role::Assassin)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_code_known_roles() {
        assert_eq!(Role::from_code(0), Role::Unassigned);
        assert_eq!(Role::from_code(1), Role::Bystander);
        assert_eq!(Role::from_code(2), Role::Assassin);
        assert_eq!(Role::from_code(3), Role::Moderator);
    }

    #[test]
    fn test_from_code_unknown_is_carried() {
        assert_eq!(Role::from_code(7), Role::Unknown(7));
        assert_eq!(Role::from_code(7).code(), 7);
        assert_eq!(Role::from_code(7).label(), "role #7");
    }

    #[test]
    fn test_code_round_trip() {
        for code in 0..=4 {
            assert_eq!(Role::from_code(code).code(), code);
        }
    }

    #[test]
    fn test_only_assassin_acts_at_night() {
        assert!(Role::Assassin.acts_at_night());
        assert!(!Role::Bystander.acts_at_night());
        assert!(!Role::Moderator.acts_at_night());
        assert!(!Role::Unassigned.acts_at_night());
        assert!(!Role::Unknown(9).acts_at_night());
    }
}
