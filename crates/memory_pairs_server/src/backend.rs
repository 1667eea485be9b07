//! Game backends the MCP tools run against.
//!
//! [`LocalBackend`] plays against the in-process session registry;
//! [`RemoteBackend`] forwards every call to a running REST server.

use crate::error::ServerError;
use crate::schema::{ActRequest, ActResponse, BoardResponse, ErrorBody, SetupRequest, SetupResponse};
use crate::session::{DEFAULT_SESSION, SessionManager};
use async_trait::async_trait;
use memory_pairs::GameSnapshot;
use serde::de::DeserializeOwned;
use tracing::{debug, instrument, warn};

/// Operations a game environment exposes to agents.
#[async_trait]
pub trait GameBackend: Send + Sync {
    /// Applies a move given as "r1 c1 r2 c2".
    async fn act(&self, action: &str) -> Result<ActResponse, ServerError>;

    /// Starts a new game, optionally with a new board size.
    async fn setup(&self, size: Option<usize>) -> Result<SetupResponse, ServerError>;

    /// Renders the current board.
    async fn board(&self, debug_reveal: bool) -> Result<BoardResponse, ServerError>;

    /// Captures the current state.
    async fn state(&self) -> Result<GameSnapshot, ServerError>;
}

/// Backend over the in-process default session.
#[derive(Debug, Clone, derive_new::new)]
pub struct LocalBackend {
    sessions: SessionManager,
}

#[async_trait]
impl GameBackend for LocalBackend {
    async fn act(&self, action: &str) -> Result<ActResponse, ServerError> {
        self.sessions.act(DEFAULT_SESSION, action)
    }

    async fn setup(&self, size: Option<usize>) -> Result<SetupResponse, ServerError> {
        self.sessions.reset(DEFAULT_SESSION, size)
    }

    async fn board(&self, debug_reveal: bool) -> Result<BoardResponse, ServerError> {
        self.sessions.board(DEFAULT_SESSION, debug_reveal)
    }

    async fn state(&self) -> Result<GameSnapshot, ServerError> {
        self.sessions.snapshot(DEFAULT_SESSION)
    }
}

/// Backend that calls a running REST game server over HTTP.
#[derive(Debug, Clone)]
pub struct RemoteBackend {
    base_url: String,
    client: reqwest::Client,
}

impl RemoteBackend {
    /// Creates a client for the server at `base_url` (e.g. `http://localhost:3000`).
    #[instrument]
    pub fn new(base_url: String) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client: reqwest::Client::new(),
        }
    }

    /// Decodes a success body, or turns an error status into [`ServerError::Remote`].
    async fn decode<T: DeserializeOwned>(response: reqwest::Response) -> Result<T, ServerError> {
        let status = response.status();
        if status.is_success() {
            return Ok(response.json().await?);
        }

        let text = response.text().await?;
        let message = serde_json::from_str::<ErrorBody>(&text)
            .map(|body| body.error)
            .unwrap_or(text);
        warn!(%status, %message, "Game server returned an error");
        Err(ServerError::Remote {
            status: status.as_u16(),
            message,
        })
    }
}

#[async_trait]
impl GameBackend for RemoteBackend {
    #[instrument(skip(self), fields(base_url = %self.base_url))]
    async fn act(&self, action: &str) -> Result<ActResponse, ServerError> {
        debug!("Forwarding move");
        let response = self
            .client
            .post(format!("{}/act", self.base_url))
            .json(&ActRequest {
                action: action.to_string(),
            })
            .send()
            .await?;
        Self::decode(response).await
    }

    #[instrument(skip(self), fields(base_url = %self.base_url))]
    async fn setup(&self, size: Option<usize>) -> Result<SetupResponse, ServerError> {
        debug!("Forwarding reset");
        let response = self
            .client
            .post(format!("{}/reset", self.base_url))
            .json(&SetupRequest { size })
            .send()
            .await?;
        Self::decode(response).await
    }

    #[instrument(skip(self), fields(base_url = %self.base_url))]
    async fn board(&self, debug_reveal: bool) -> Result<BoardResponse, ServerError> {
        let response = self
            .client
            .get(format!("{}/board?debug={}", self.base_url, debug_reveal))
            .send()
            .await?;
        Self::decode(response).await
    }

    #[instrument(skip(self), fields(base_url = %self.base_url))]
    async fn state(&self) -> Result<GameSnapshot, ServerError> {
        let response = self
            .client
            .get(format!("{}/state", self.base_url))
            .send()
            .await?;
        Self::decode(response).await
    }
}
