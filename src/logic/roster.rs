//! Roster mutations: add/remove players, record and revoke wins, ranking.
//!
//! Pure functions over an in-memory roster. Callers own the load/save cycle;
//! every mutation here is followed by a whole-roster save at the call site.

use crate::models::{Player, PlayerId, Roster};

/// Add a player with the given name. Whitespace is trimmed; an empty name is
/// rejected. Duplicate names are allowed (players are identified by id).
/// Returns the new player's id.
pub fn add_player(roster: &mut Roster, name: &str) -> Option<PlayerId> {
    let name = name.trim();
    if name.is_empty() {
        return None;
    }
    let player = Player::new(name);
    let id = player.id.clone();
    roster.push(player);
    Some(id)
}

/// Remove the player with the given id. Returns whether a player was removed.
pub fn remove_player(roster: &mut Roster, id: &str) -> bool {
    let before = roster.len();
    roster.retain(|p| p.id != id);
    roster.len() != before
}

/// Record a win: `wins += 1`, `points += points_per_win`. Returns false when
/// the id is unknown (nothing changed).
pub fn record_win(roster: &mut Roster, id: &str, points_per_win: i64) -> bool {
    match roster.iter_mut().find(|p| p.id == id) {
        Some(p) => {
            p.wins += 1;
            p.points += points_per_win;
            true
        }
        None => false,
    }
}

/// Revoke a win: only applies when the player has `wins > 0`. `wins -= 1` and
/// `points` drops by `points_per_win` but never below zero, so points can
/// diverge from `wins * points_per_win` once the floor is hit. Returns false
/// when nothing changed.
pub fn revoke_win(roster: &mut Roster, id: &str, points_per_win: i64) -> bool {
    match roster.iter_mut().find(|p| p.id == id) {
        Some(p) if p.wins > 0 => {
            p.wins -= 1;
            p.points = (p.points - points_per_win).max(0);
            true
        }
        _ => false,
    }
}

/// Sort for display: points descending. Ties keep their current order.
pub fn sort_by_points(roster: &mut Roster) {
    roster.sort_by(|a, b| b.points.cmp(&a.points));
}
