//! Serde mirror of the game contract's JSON interface.
//!
//! Raw contract values are normalized here, at the boundary, into the
//! fixed `Player`/`Phase` shapes before any derivation logic sees them.

use crate::{Phase, Player, Role};
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct Uint128(pub String);

impl Uint128 {
    pub fn new(value: u128) -> Self {
        Self(value.to_string())
    }

    pub fn amount(&self) -> Option<u128> {
        self.0.parse().ok()
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ExecuteMsg {
    JoinGame {},
    SelectTarget { target: String },
    VoteModerator { choice: String },
    ComputeVoteResult {},
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum QueryMsg {
    GetConfig {},
    GetPlayers {},
    GetPhase {},
    GetLastEliminated {},
}

impl ExecuteMsg {
    pub fn to_json_vec(&self) -> Result<Vec<u8>, serde_json::Error> {
        serde_json::to_vec(self)
    }
}

impl QueryMsg {
    pub fn to_json_vec(&self) -> Result<Vec<u8>, serde_json::Error> {
        serde_json::to_vec(self)
    }
}

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct ConfigResponse {
    pub denom: String,
    pub join_fee: Uint128,
    pub min_players: u32,
}

/// Player records have arrived in two shapes across contract versions:
/// a named object and a positional array. Both are accepted.
#[derive(Serialize, Deserialize, Clone, Debug)]
#[serde(untagged)]
pub enum RawPlayer {
    Named {
        address: String,
        role: u8,
        is_alive: bool,
        has_voted: bool,
    },
    Positional(String, u8, bool, bool),
}

impl From<RawPlayer> for Player {
    fn from(raw: RawPlayer) -> Self {
        let (address, role, is_alive, has_voted) = match raw {
            RawPlayer::Named {
                address,
                role,
                is_alive,
                has_voted,
            } => (address, role, is_alive, has_voted),
            RawPlayer::Positional(address, role, is_alive, has_voted) => {
                (address, role, is_alive, has_voted)
            }
        };
        Player {
            address,
            role: Role::from_code(role),
            is_alive,
            has_voted,
        }
    }
}

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct PhaseResponse {
    pub phase: u8,
}

impl PhaseResponse {
    pub fn into_phase(self) -> Phase {
        Phase::from_code(self.phase)
    }
}

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct LastEliminatedResponse {
    pub eliminated: Option<String>,
}

/// Event attribute keys the contract emits into tx logs. Advisory
/// refresh triggers only; polled queries stay the source of truth.
pub const EVENT_VOTE_RESULT: &str = "vote_result_computed";
pub const EVENT_GAME_ENDED: &str = "game_ended";
