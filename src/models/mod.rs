//! Data structures for the scoreboard: players, rosters, game keys.

mod game_key;
mod player;

pub use game_key::GameKey;
pub use player::{Player, PlayerId, Roster};
