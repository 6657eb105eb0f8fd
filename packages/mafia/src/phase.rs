use serde::{Deserialize, Serialize};

/// Game stage as reported by the contract's phase code.
///
/// `Ended` is never produced by `from_code`: no terminal code is polled
/// from the contract, the client enters it from the `game_ended` event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Phase {
    Registration,
    Starting,
    Night,
    Voting,
    Ended,
    Unknown(u8),
}

impl Phase {
    pub fn from_code(code: u8) -> Self {
        match code {
            0 => Phase::Registration,
            1 => Phase::Starting,
            2 => Phase::Night,
            3 => Phase::Voting,
            other => Phase::Unknown(other),
        }
    }

    pub fn label(&self) -> String {
        match self {
            Phase::Registration => "Registration".to_string(),
            Phase::Starting => "Starting".to_string(),
            Phase::Night => "Night".to_string(),
            Phase::Voting => "Voting".to_string(),
            Phase::Ended => "Ended".to_string(),
            Phase::Unknown(code) => format!("phase #{code}"),
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Phase::Registration => "Waiting for players to pay the fee and join",
            Phase::Starting => "Roles are being dealt",
            Phase::Night => "The assassin is choosing a victim",
            Phase::Voting => "Vote for who you believe is the moderator",
            Phase::Ended => "The game is over, the prize has been paid out",
            Phase::Unknown(_) => "Unrecognized game state",
        }
    }

    pub fn is_terminal(&self) -> bool {
        matches!(self, Phase::Ended)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_code_known_phases() {
        assert_eq!(Phase::from_code(0), Phase::Registration);
        assert_eq!(Phase::from_code(1), Phase::Starting);
        assert_eq!(Phase::from_code(2), Phase::Night);
        assert_eq!(Phase::from_code(3), Phase::Voting);
    }

    #[test]
    fn test_from_code_never_terminal() {
        for code in 0..=u8::MAX {
            assert!(!Phase::from_code(code).is_terminal());
        }
    }

    #[test]
    fn test_unknown_code_is_carried() {
        assert_eq!(Phase::from_code(9), Phase::Unknown(9));
        assert_eq!(Phase::from_code(9).label(), "phase #9");
    }
}
