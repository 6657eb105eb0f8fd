mod action;
mod phase;
mod player;
mod role;
mod snapshot;
mod view;
pub mod wire;

pub use action::{check_join, check_tally, check_target, check_vote, ActionError, PlayerAction};
pub use phase::Phase;
pub use player::{find_player, Player};
pub use role::Role;
pub use snapshot::{Snapshot, SnapshotStore};
pub use view::{derive, ViewModel};
