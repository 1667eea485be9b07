//! Request and response bodies shared by the REST API, its client, and the
//! MCP tools.

use memory_pairs::MoveResult;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Request for making a move.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct ActRequest {
    /// Two cells to reveal, as "r1 c1 r2 c2" (zero-based row and column).
    pub action: String,
}

/// Result of a move.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActResponse {
    /// Result class of the move.
    pub result: MoveResult,
    /// Reward earned by this move.
    pub reward: f64,
    /// Sum of rewards since the last reset.
    pub accumulated_reward: f64,
    /// Why the move was rejected, if it was.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
    /// Board after the move.
    pub board: String,
}

/// Request for starting a new game.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema)]
pub struct SetupRequest {
    /// Board side length (must be even). Defaults to the configured size.
    #[serde(default)]
    pub size: Option<usize>,
}

/// Result of starting a new game.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SetupResponse {
    /// Always true on success.
    pub ok: bool,
    /// Fresh board.
    pub board: String,
}

/// Query for rendering the board.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct BoardQuery {
    /// Reveal every label regardless of face-up state.
    #[serde(default)]
    pub debug: bool,
}

/// Rendered board.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BoardResponse {
    /// Board text.
    pub board: String,
}

/// Liveness response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Always "ok".
    pub status: String,
}

/// Error body returned with non-2xx responses.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorBody {
    /// Error message.
    pub error: String,
}
