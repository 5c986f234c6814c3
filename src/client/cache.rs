//! Local fallback store: the browser-storage analog for offline operation.

use crate::models::{GameKey, Player, Roster};
use std::collections::BTreeMap;
use std::fs;
use std::io;
use std::path::PathBuf;

/// Every entry lives under this prefix, so the record file can be shared with
/// other locally persisted state without collisions.
const STORAGE_PREFIX: &str = "scoreboard_v1_";

/// Per-device fallback store: one JSON document mapping prefixed game keys to
/// rosters serialized as JSON strings. Survives restarts, is never shared
/// across devices, and is only consulted when the backend is unreachable.
pub struct LocalCache {
    path: PathBuf,
}

impl LocalCache {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    fn entries(&self) -> BTreeMap<String, String> {
        let raw = match fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(_) => return BTreeMap::new(),
        };
        serde_json::from_str(&raw).unwrap_or_default()
    }

    /// Last locally saved roster for `key`, or `None` if never saved or if
    /// the stored entry does not parse as a player array.
    pub fn get(&self, key: &GameKey) -> Option<Roster> {
        let entries = self.entries();
        let raw = entries.get(&format!("{}{}", STORAGE_PREFIX, key))?;
        serde_json::from_str(raw).ok()
    }

    /// Overwrite the entry for `key` unconditionally. No merge with prior
    /// content.
    pub fn set(&self, key: &GameKey, roster: &[Player]) -> io::Result<()> {
        let mut entries = self.entries();
        entries.insert(
            format!("{}{}", STORAGE_PREFIX, key),
            serde_json::to_string(roster)?,
        );
        fs::write(&self.path, serde_json::to_string(&entries)?)
    }
}
