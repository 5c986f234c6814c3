//! RosterView: user actions over one game's roster, plus text rendering.

use crate::client::{RemoteApi, SaveOutcome, SyncClient};
use crate::logic;
use crate::models::{GameKey, Player, Roster};

/// View state for one game: the in-memory roster and the points-per-win
/// setting the next recorded win will use.
///
/// Every action loads the current roster, mutates it in memory, saves it, and
/// keeps the mutated array for display (never a fresh load), so the rendered
/// state always reflects the just-made edit even when the save degraded to
/// local-only persistence.
pub struct RosterView<R> {
    game: GameKey,
    sync: SyncClient<R>,
    roster: Roster,
    points_per_win: i64,
}

impl<R: RemoteApi> RosterView<R> {
    pub fn new(game: GameKey, sync: SyncClient<R>) -> Self {
        Self {
            game,
            sync,
            roster: Roster::new(),
            points_per_win: 1,
        }
    }

    pub fn roster(&self) -> &[Player] {
        &self.roster
    }

    /// Points a recorded win is worth. Zero falls back to the default of 1;
    /// the setting is not persisted with the players.
    pub fn set_points_per_win(&mut self, per: i64) {
        self.points_per_win = if per == 0 { 1 } else { per };
    }

    /// Reload the roster from the sync client.
    pub async fn refresh(&mut self) {
        self.roster = self.sync.load(&self.game).await;
    }

    /// Add a player by name. A blank name does nothing.
    pub async fn add_player(&mut self, name: &str) -> Option<SaveOutcome> {
        let mut roster = self.sync.load(&self.game).await;
        logic::add_player(&mut roster, name)?;
        Some(self.save_and_keep(roster).await)
    }

    /// Record a win for the player with `id`. Unknown ids do nothing.
    pub async fn record_win(&mut self, id: &str) -> Option<SaveOutcome> {
        let mut roster = self.sync.load(&self.game).await;
        if !logic::record_win(&mut roster, id, self.points_per_win) {
            return None;
        }
        Some(self.save_and_keep(roster).await)
    }

    /// Revoke a win for the player with `id`; only applies when they have at
    /// least one.
    pub async fn revoke_win(&mut self, id: &str) -> Option<SaveOutcome> {
        let mut roster = self.sync.load(&self.game).await;
        if !logic::revoke_win(&mut roster, id, self.points_per_win) {
            return None;
        }
        Some(self.save_and_keep(roster).await)
    }

    /// Remove the player with `id`. Saves even when the id was absent (the
    /// filtered roster is persisted as-is).
    pub async fn remove_player(&mut self, id: &str) -> SaveOutcome {
        let mut roster = self.sync.load(&self.game).await;
        logic::remove_player(&mut roster, id);
        self.save_and_keep(roster).await
    }

    /// Reset the game: persist an empty roster.
    pub async fn reset(&mut self) -> SaveOutcome {
        self.save_and_keep(Roster::new()).await
    }

    async fn save_and_keep(&mut self, roster: Roster) -> SaveOutcome {
        let outcome = self.sync.save(&self.game, &roster).await;
        self.roster = roster;
        outcome
    }

    /// Ranked list, points descending, first place marked with the crown.
    pub fn render_list(&self) -> String {
        let mut ranked: Vec<&Player> = self.roster.iter().collect();
        ranked.sort_by(|a, b| b.points.cmp(&a.points));
        let mut out = String::new();
        for (idx, p) in ranked.iter().enumerate() {
            let crown = if idx == 0 { "👑 " } else { "   " };
            out.push_str(&format!(
                "{}{} — {} pts — {} vitórias\n",
                crown, p.name, p.points, p.wins
            ));
        }
        out
    }

    /// Ranking table: position, name, wins, points.
    pub fn render_table(&self) -> String {
        let mut ranked: Vec<&Player> = self.roster.iter().collect();
        ranked.sort_by(|a, b| b.points.cmp(&a.points));
        let mut out = String::from("#   Nome                 Vitórias  Pontos\n");
        for (idx, p) in ranked.iter().enumerate() {
            out.push_str(&format!(
                "{:<3} {:<20} {:>8}  {:>6}\n",
                idx + 1,
                p.name,
                p.wins,
                p.points
            ));
        }
        out
    }
}
