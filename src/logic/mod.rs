//! Scoreboard business logic: roster mutations and ranking.

mod roster;

pub use roster::{add_player, record_win, remove_player, revoke_win, sort_by_points};
