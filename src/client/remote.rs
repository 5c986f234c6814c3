//! Client view of the backend: trait seam plus the reqwest implementation.

use crate::models::{GameKey, Player, Roster};
use futures::future::BoxFuture;
use reqwest::{Client, StatusCode};
use serde::Deserialize;
use std::fmt;

/// Convenient result alias for remote calls.
pub type RemoteResult<T> = Result<T, RemoteError>;

/// Failures while talking to the backend. All of them mean "remote
/// unavailable" to the sync client; none of them reach the end user.
#[derive(Debug)]
pub enum RemoteError {
    /// The request could not be sent (connection refused, DNS, ...).
    RequestSend(reqwest::Error),
    /// The backend answered with a non-success status.
    RequestStatus(StatusCode),
    /// The response body could not be decoded as the expected JSON.
    DecodeResponse(reqwest::Error),
    /// A save response decoded fine but did not acknowledge the write.
    NotAcknowledged,
}

impl fmt::Display for RemoteError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RemoteError::RequestSend(e) => write!(f, "failed to send request: {}", e),
            RemoteError::RequestStatus(status) => write!(f, "unexpected status {}", status),
            RemoteError::DecodeResponse(e) => write!(f, "failed to decode response: {}", e),
            RemoteError::NotAcknowledged => write!(f, "save was not acknowledged"),
        }
    }
}

/// Acknowledgement body of a roster save.
#[derive(Debug, Deserialize)]
pub struct SaveAck {
    #[serde(default)]
    pub ok: bool,
    #[serde(default)]
    pub saved: usize,
}

/// Remote scoreboard operations, as the sync client sees them. A trait so
/// tests can substitute a stub backend.
pub trait RemoteApi {
    /// Fetch the roster for `key`.
    fn fetch_roster<'a>(&'a self, key: &'a GameKey) -> BoxFuture<'a, RemoteResult<Roster>>;

    /// Replace the roster for `key`, returning the backend's acknowledgement.
    fn save_roster<'a>(
        &'a self,
        key: &'a GameKey,
        roster: &'a [Player],
    ) -> BoxFuture<'a, RemoteResult<SaveAck>>;
}

/// HTTP implementation against `{base_url}/api/{key}`.
pub struct HttpRemote {
    client: Client,
    base_url: String,
}

impl HttpRemote {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    fn url(&self, key: &GameKey) -> String {
        format!("{}/api/{}", self.base_url, key)
    }
}

impl RemoteApi for HttpRemote {
    fn fetch_roster<'a>(&'a self, key: &'a GameKey) -> BoxFuture<'a, RemoteResult<Roster>> {
        Box::pin(async move {
            let response = self
                .client
                .get(self.url(key))
                .send()
                .await
                .map_err(RemoteError::RequestSend)?;
            if !response.status().is_success() {
                return Err(RemoteError::RequestStatus(response.status()));
            }
            response
                .json::<Roster>()
                .await
                .map_err(RemoteError::DecodeResponse)
        })
    }

    fn save_roster<'a>(
        &'a self,
        key: &'a GameKey,
        roster: &'a [Player],
    ) -> BoxFuture<'a, RemoteResult<SaveAck>> {
        Box::pin(async move {
            let response = self
                .client
                .post(self.url(key))
                .json(roster)
                .send()
                .await
                .map_err(RemoteError::RequestSend)?;
            if !response.status().is_success() {
                return Err(RemoteError::RequestStatus(response.status()));
            }
            response
                .json::<SaveAck>()
                .await
                .map_err(RemoteError::DecodeResponse)
        })
    }
}
