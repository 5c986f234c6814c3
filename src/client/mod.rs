//! Client side of the scoreboard: remote API access, local fallback cache,
//! and the sync client tying the two together.

mod cache;
mod remote;
mod sync;

pub use cache::LocalCache;
pub use remote::{HttpRemote, RemoteApi, RemoteError, RemoteResult, SaveAck};
pub use sync::{SaveOutcome, SyncClient};
