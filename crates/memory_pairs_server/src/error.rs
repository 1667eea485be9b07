//! Server error types.

use crate::schema::ErrorBody;
use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use derive_more::{Display, Error, From};
use memory_pairs::ConfigurationError;
use tracing::warn;

/// Errors raised while serving game operations.
#[derive(Debug, Display, Error, From)]
pub enum ServerError {
    /// A board of the requested size cannot be built.
    #[display("{}", _0)]
    Configuration(ConfigurationError),

    /// No session is registered under the given id.
    #[display("Session not found: {}", _0)]
    #[from(ignore)]
    SessionNotFound(#[error(not(source))] String),

    /// The remote game server could not be reached or decoded.
    #[display("Request to game server failed: {}", _0)]
    Http(reqwest::Error),

    /// The remote game server answered with an error status.
    #[display("Game server returned {}: {}", status, message)]
    #[from(ignore)]
    Remote {
        /// HTTP status code.
        status: u16,
        /// Error message from the response body.
        message: String,
    },
}

impl ServerError {
    /// HTTP status this error maps to.
    pub fn status(&self) -> StatusCode {
        match self {
            ServerError::Configuration(_) => StatusCode::BAD_REQUEST,
            ServerError::SessionNotFound(_) => StatusCode::NOT_FOUND,
            ServerError::Http(_) | ServerError::Remote { .. } => StatusCode::BAD_GATEWAY,
        }
    }
}

impl IntoResponse for ServerError {
    fn into_response(self) -> Response {
        let status = self.status();
        warn!(%status, error = %self, "Request failed");
        (status, Json(ErrorBody { error: self.to_string() })).into_response()
    }
}
