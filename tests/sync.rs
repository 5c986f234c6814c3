//! Integration tests for the sync client: remote-first reads, acknowledged
//! writes, and local fallback in both directions.

use futures::future::BoxFuture;
use reqwest::StatusCode;
use scoreboard_web::{
    GameKey, HttpRemote, LocalCache, Player, RemoteApi, RemoteError, Roster, SaveAck, SaveOutcome,
    SyncClient,
};
use scoreboard_web::client::RemoteResult;
use std::path::PathBuf;
use uuid::Uuid;

enum FetchBehavior {
    Respond(Roster),
    Fail,
}

enum SaveBehavior {
    Ack,
    Refuse,
    Fail,
}

/// In-memory stand-in for the backend with scripted behavior.
struct StubRemote {
    fetch: FetchBehavior,
    save: SaveBehavior,
}

impl RemoteApi for StubRemote {
    fn fetch_roster<'a>(&'a self, _key: &'a GameKey) -> BoxFuture<'a, RemoteResult<Roster>> {
        Box::pin(async move {
            match &self.fetch {
                FetchBehavior::Respond(roster) => Ok(roster.clone()),
                FetchBehavior::Fail => {
                    Err(RemoteError::RequestStatus(StatusCode::INTERNAL_SERVER_ERROR))
                }
            }
        })
    }

    fn save_roster<'a>(
        &'a self,
        _key: &'a GameKey,
        roster: &'a [Player],
    ) -> BoxFuture<'a, RemoteResult<SaveAck>> {
        Box::pin(async move {
            match self.save {
                SaveBehavior::Ack => Ok(SaveAck {
                    ok: true,
                    saved: roster.len(),
                }),
                SaveBehavior::Refuse => Ok(SaveAck {
                    ok: false,
                    saved: 0,
                }),
                SaveBehavior::Fail => {
                    Err(RemoteError::RequestStatus(StatusCode::INTERNAL_SERVER_ERROR))
                }
            }
        })
    }
}

fn temp_cache_path() -> PathBuf {
    std::env::temp_dir().join(format!("scoreboard-cache-{}.json", Uuid::new_v4()))
}

fn player(id: &str, name: &str, wins: i64, points: i64) -> Player {
    Player {
        id: id.to_string(),
        name: name.to_string(),
        wins,
        points,
    }
}

#[tokio::test]
async fn load_prefers_the_remote_roster() {
    let roster = vec![player("a", "Ana", 1, 3)];
    let sync = SyncClient::new(
        StubRemote {
            fetch: FetchBehavior::Respond(roster.clone()),
            save: SaveBehavior::Ack,
        },
        LocalCache::new(temp_cache_path()),
    );
    assert_eq!(sync.load(&GameKey::from_raw("uno")).await, roster);
}

#[tokio::test]
async fn load_falls_back_to_the_cache_when_the_remote_fails() {
    let path = temp_cache_path();
    let key = GameKey::from_raw("uno");
    let roster = vec![player("a", "Ana", 1, 3)];
    LocalCache::new(&path).set(&key, &roster).unwrap();

    let sync = SyncClient::new(
        StubRemote {
            fetch: FetchBehavior::Fail,
            save: SaveBehavior::Fail,
        },
        LocalCache::new(&path),
    );
    assert_eq!(sync.load(&key).await, roster);
}

#[tokio::test]
async fn load_is_empty_when_remote_and_cache_both_miss() {
    let sync = SyncClient::new(
        StubRemote {
            fetch: FetchBehavior::Fail,
            save: SaveBehavior::Fail,
        },
        LocalCache::new(temp_cache_path()),
    );
    assert!(sync.load(&GameKey::from_raw("uno")).await.is_empty());
}

#[tokio::test]
async fn empty_remote_roster_beats_a_non_empty_cache() {
    let path = temp_cache_path();
    let key = GameKey::from_raw("uno");
    LocalCache::new(&path)
        .set(&key, &[player("stale", "Velho", 9, 9)])
        .unwrap();

    let sync = SyncClient::new(
        StubRemote {
            fetch: FetchBehavior::Respond(Roster::new()),
            save: SaveBehavior::Ack,
        },
        LocalCache::new(&path),
    );
    assert!(sync.load(&key).await.is_empty());
}

#[tokio::test]
async fn acknowledged_save_does_not_mirror_into_the_cache() {
    let path = temp_cache_path();
    let key = GameKey::from_raw("uno");
    let roster = vec![player("a", "Ana", 0, 0)];

    let sync = SyncClient::new(
        StubRemote {
            fetch: FetchBehavior::Respond(Roster::new()),
            save: SaveBehavior::Ack,
        },
        LocalCache::new(&path),
    );
    assert_eq!(
        sync.save(&key, &roster).await,
        SaveOutcome::Remote { saved: 1 }
    );
    assert!(LocalCache::new(&path).get(&key).is_none());
}

#[tokio::test]
async fn unacknowledged_save_falls_back_to_the_cache() {
    let path = temp_cache_path();
    let key = GameKey::from_raw("uno");
    let roster = vec![player("a", "Ana", 0, 0)];

    let sync = SyncClient::new(
        StubRemote {
            fetch: FetchBehavior::Fail,
            save: SaveBehavior::Refuse,
        },
        LocalCache::new(&path),
    );
    assert_eq!(sync.save(&key, &roster).await, SaveOutcome::Local);
    assert_eq!(LocalCache::new(&path).get(&key), Some(roster));
}

#[tokio::test]
async fn failed_save_falls_back_to_the_cache() {
    let path = temp_cache_path();
    let key = GameKey::from_raw("uno");
    let roster = vec![player("a", "Ana", 0, 0)];

    let sync = SyncClient::new(
        StubRemote {
            fetch: FetchBehavior::Fail,
            save: SaveBehavior::Fail,
        },
        LocalCache::new(&path),
    );
    assert_eq!(sync.save(&key, &roster).await, SaveOutcome::Local);
    assert_eq!(LocalCache::new(&path).get(&key), Some(roster));
}

#[tokio::test]
async fn remote_save_then_outage_falls_back_to_a_cache_that_never_saw_it() {
    let path = temp_cache_path();
    let key = GameKey::from_raw("uno");
    let roster = vec![player("a", "Ana", 0, 0)];

    let online = SyncClient::new(
        StubRemote {
            fetch: FetchBehavior::Respond(roster.clone()),
            save: SaveBehavior::Ack,
        },
        LocalCache::new(&path),
    );
    assert_eq!(
        online.save(&key, &roster).await,
        SaveOutcome::Remote { saved: 1 }
    );

    // The backend goes away; the cache never mirrored the successful save, so
    // the roster silently comes back empty.
    let offline = SyncClient::new(
        StubRemote {
            fetch: FetchBehavior::Fail,
            save: SaveBehavior::Fail,
        },
        LocalCache::new(&path),
    );
    assert!(offline.load(&key).await.is_empty());
}

#[tokio::test]
async fn unreachable_backend_degrades_to_the_cache() {
    let path = temp_cache_path();
    let key = GameKey::from_raw("uno");
    let roster = vec![player("a", "Ana", 1, 1)];
    LocalCache::new(&path).set(&key, &roster).unwrap();

    // Nothing listens on port 1; the connection is refused immediately.
    let sync = SyncClient::new(HttpRemote::new("http://127.0.0.1:1"), LocalCache::new(&path));
    assert_eq!(sync.load(&key).await, roster);
    assert_eq!(sync.save(&key, &roster).await, SaveOutcome::Local);
}
