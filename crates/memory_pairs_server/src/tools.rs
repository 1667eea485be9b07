//! MCP tool server for agents.

use crate::backend::GameBackend;
use crate::error::ServerError;
use crate::schema::{ActRequest, SetupRequest};
use rmcp::handler::server::router::tool::ToolRouter;
use rmcp::handler::server::wrapper::Parameters;
use rmcp::model::{CallToolResult, Content, ServerCapabilities, ServerInfo};
use rmcp::{ErrorData as McpError, ServerHandler, tool, tool_handler, tool_router};
use std::sync::Arc;
use tracing::{debug, info, instrument};

/// MCP handler exposing the memory game as tools.
pub struct MemoryToolServer {
    backend: Arc<dyn GameBackend>,
    tool_router: ToolRouter<Self>,
}

#[tool_router]
impl MemoryToolServer {
    /// Creates a tool server over the given backend.
    pub fn new(backend: Arc<dyn GameBackend>) -> Self {
        info!("Creating memory tool server");
        Self {
            backend,
            tool_router: Self::tool_router(),
        }
    }

    /// Makes a move.
    #[instrument(skip(self, req), fields(action = %req.action))]
    #[tool(
        description = "Perform a move in the memory game by selecting two positions: 'r1 c1 r2 c2' (zero-based row and column)."
    )]
    pub async fn act(
        &self,
        Parameters(req): Parameters<ActRequest>,
    ) -> Result<CallToolResult, McpError> {
        let resp = self.backend.act(&req.action).await.map_err(to_mcp)?;

        let mut message = format!(
            "Result: {}  Reward: {}  Total reward: {}",
            resp.result, resp.reward, resp.accumulated_reward
        );
        if let Some(detail) = &resp.detail {
            message.push_str(&format!("\n{}", detail));
        }
        message.push_str(&format!("\n\n{}", resp.board));

        Ok(CallToolResult::success(vec![Content::text(message)]))
    }

    /// Starts a new game.
    #[instrument(skip(self, req), fields(size = ?req.size))]
    #[tool(description = "Initialize or reset the memory game to its starting state. Optionally choose an even board size.")]
    pub async fn setup(
        &self,
        Parameters(req): Parameters<SetupRequest>,
    ) -> Result<CallToolResult, McpError> {
        let resp = self.backend.setup(req.size).await.map_err(to_mcp)?;
        Ok(CallToolResult::success(vec![Content::text(resp.board)]))
    }

    /// Shows the board.
    #[instrument(skip(self))]
    #[tool(description = "Show the current board state.")]
    pub async fn show_current_board(&self) -> Result<CallToolResult, McpError> {
        let resp = self.backend.board(false).await.map_err(to_mcp)?;
        Ok(CallToolResult::success(vec![Content::text(resp.board)]))
    }

    /// Reports score, reward, and whether the game is over.
    #[instrument(skip(self))]
    #[tool(description = "Evaluate the game state: accumulated reward, score, and whether the game is over.")]
    pub async fn evaluate(&self) -> Result<CallToolResult, McpError> {
        let state = self.backend.state().await.map_err(to_mcp)?;
        debug!(score = state.score, game_over = state.game_over, "Evaluated game");

        let summary = format!(
            "Score: {}, Game over: {}, Reward: {}",
            state.score, state.game_over, state.accumulated_reward
        );
        let evaluation = serde_json::json!({
            "reward": state.accumulated_reward,
            "done": state.game_over,
            "score": state.score,
            "moves": state.moves_made,
        });
        Ok(CallToolResult::success(vec![
            Content::text(summary),
            Content::json(evaluation)?,
        ]))
    }
}

#[tool_handler(router = self.tool_router)]
impl ServerHandler for MemoryToolServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            instructions: Some(
                "Memory pairs game. Reveal two face-down cells per move with act('r1 c1 r2 c2'); \
                 matching pairs stay face-up, others are turned back over."
                    .into(),
            ),
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            ..Default::default()
        }
    }
}

/// Maps backend failures to MCP errors: bad sizes are the caller's fault.
fn to_mcp(err: ServerError) -> McpError {
    match &err {
        ServerError::Configuration(_) => McpError::invalid_params(err.to_string(), None),
        ServerError::Remote { status: 400, .. } => McpError::invalid_params(err.to_string(), None),
        _ => McpError::internal_error(err.to_string(), None),
    }
}
