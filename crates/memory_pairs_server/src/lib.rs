//! Memory pairs environment server.
//!
//! Hosts a [`memory_pairs::MemoryGame`] for an external agent.
//!
//! # Architecture
//!
//! - **REST API**: `/health`, `/act`, `/reset`, `/state`, `/board`
//! - **MCP tools**: `act`, `setup`, `show_current_board`, `evaluate`, served
//!   at `/mcp` or over stdio
//! - **Backends**: tools run in-process ([`LocalBackend`]) or against a
//!   remote REST server ([`RemoteBackend`])
//! - **Session**: one default game held in a [`SessionManager`]

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod api;
mod backend;
mod config;
mod error;
mod http;
mod schema;
mod session;
mod tools;

pub use api::router;
pub use backend::{GameBackend, LocalBackend, RemoteBackend};
pub use config::{ConfigError, ServerConfig};
pub use error::ServerError;
pub use http::{MCP_PATH, app};
pub use schema::{
    ActRequest, ActResponse, BoardQuery, BoardResponse, ErrorBody, HealthResponse, SetupRequest,
    SetupResponse,
};
pub use session::{DEFAULT_SESSION, SessionId, SessionManager};
pub use tools::MemoryToolServer;
