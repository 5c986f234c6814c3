//! Durable per-game roster persistence: one JSON document per game key.

use crate::models::{GameKey, Player, Roster};
use std::fs;
use std::io;
use std::path::PathBuf;

/// File-backed store keeping one pretty-printed JSON array per game.
///
/// `read` is infallible: a missing document is materialized as an empty one,
/// and unreadable or unparseable content is treated as empty (logged, never
/// propagated). `write` overwrites the whole document and propagates I/O
/// failures to the caller.
pub struct GameStore {
    dir: PathBuf,
}

impl GameStore {
    /// Open a store rooted at `dir`, creating the directory if needed.
    pub fn open(dir: impl Into<PathBuf>) -> io::Result<Self> {
        let dir = dir.into();
        fs::create_dir_all(&dir)?;
        Ok(Self { dir })
    }

    fn file_path(&self, key: &GameKey) -> PathBuf {
        self.dir.join(format!("{}.json", key))
    }

    /// Read the roster for `key`. First access to an unseen key durably
    /// creates an empty document, so subsequent reads are stable.
    pub fn read(&self, key: &GameKey) -> Roster {
        let path = self.file_path(key);
        if !path.exists() {
            if let Err(err) = fs::write(&path, "[]") {
                log::warn!("failed to materialize {}: {}", path.display(), err);
            }
            return Roster::new();
        }
        let raw = match fs::read_to_string(&path) {
            Ok(raw) => raw,
            Err(err) => {
                log::error!("error reading {}: {}", path.display(), err);
                return Roster::new();
            }
        };
        if raw.trim().is_empty() {
            return Roster::new();
        }
        match serde_json::from_str(&raw) {
            Ok(roster) => roster,
            Err(err) => {
                log::error!("error parsing {}: {}", path.display(), err);
                Roster::new()
            }
        }
    }

    /// Overwrite the roster for `key`.
    pub fn write(&self, key: &GameKey, roster: &[Player]) -> io::Result<()> {
        let body = serde_json::to_string_pretty(roster)?;
        fs::write(self.file_path(key), body)
    }
}
