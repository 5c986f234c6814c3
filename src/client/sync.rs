//! Remote-first synchronization between the backend and the local cache.

use crate::client::cache::LocalCache;
use crate::client::remote::{RemoteApi, RemoteError};
use crate::models::{GameKey, Player, Roster};

/// Where a save ended up.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum SaveOutcome {
    /// The backend acknowledged the write; `saved` players were persisted.
    Remote { saved: usize },
    /// The backend was unreachable or did not acknowledge; the roster went to
    /// the local cache instead.
    Local,
}

/// Read-through / write-through access to a game's roster.
///
/// The backend is always trusted over the cache when reachable, including
/// when it holds zero players: a device whose cache has stale players will
/// silently discard them once the server answers. Successful remote saves do
/// not update the cache; it is a fallback of last resort, not a mirror, so
/// after a remote save the cache can lag behind the server until the next
/// degraded save.
pub struct SyncClient<R> {
    remote: R,
    cache: LocalCache,
}

impl<R: RemoteApi> SyncClient<R> {
    pub fn new(remote: R, cache: LocalCache) -> Self {
        Self { remote, cache }
    }

    /// Load the roster for `key`: the backend's answer when it gives one
    /// (even an empty roster), otherwise the cache, otherwise empty. Remote
    /// failures are logged and recovered, never raised.
    pub async fn load(&self, key: &GameKey) -> Roster {
        match self.remote.fetch_roster(key).await {
            Ok(roster) => roster,
            Err(err) => {
                log::warn!("fetch for '{}' failed, using local cache: {}", key, err);
                self.cache.get(key).unwrap_or_default()
            }
        }
    }

    /// Save the roster for `key`. Remote success requires an acknowledged
    /// response; anything else falls back to the local cache and reports
    /// [`SaveOutcome::Local`].
    pub async fn save(&self, key: &GameKey, roster: &[Player]) -> SaveOutcome {
        let err = match self.remote.save_roster(key, roster).await {
            Ok(ack) if ack.ok => return SaveOutcome::Remote { saved: ack.saved },
            Ok(_) => RemoteError::NotAcknowledged,
            Err(err) => err,
        };
        log::warn!("save for '{}' failed, keeping it locally: {}", key, err);
        if let Err(io_err) = self.cache.set(key, roster) {
            log::error!("local fallback write for '{}' failed: {}", key, io_err);
        }
        SaveOutcome::Local
    }
}
