//! Per-game player scoreboard: backend API with JSON-document persistence and
//! an offline-capable client (remote-first, local fallback).

pub mod api;
pub mod client;
pub mod logic;
pub mod models;
pub mod store;
pub mod view;

pub use client::{HttpRemote, LocalCache, RemoteApi, RemoteError, SaveAck, SaveOutcome, SyncClient};
pub use models::{GameKey, Player, PlayerId, Roster};
pub use store::GameStore;
pub use view::RosterView;
