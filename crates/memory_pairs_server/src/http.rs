//! HTTP application: REST routes plus the MCP endpoint.

use crate::api;
use crate::backend::LocalBackend;
use crate::session::SessionManager;
use crate::tools::MemoryToolServer;
use axum::Router;
use axum::body::Body;
use axum::http::Request;
use rmcp::transport::streamable_http_server::{
    session::local::LocalSessionManager,
    tower::{StreamableHttpServerConfig, StreamableHttpService},
};
use std::sync::Arc;
use tower::ServiceBuilder;
use tracing::{debug, info};

/// Path the MCP streamable HTTP endpoint is mounted at.
pub const MCP_PATH: &str = "/mcp";

/// Builds the full application over a shared session registry.
///
/// REST routes and MCP tool calls act on the same default session.
pub fn app(sessions: SessionManager) -> Router {
    let tool_sessions = sessions.clone();
    let mcp_service = StreamableHttpService::new(
        move || {
            debug!("Creating MCP tool server for new connection");
            Ok(MemoryToolServer::new(Arc::new(LocalBackend::new(
                tool_sessions.clone(),
            ))))
        },
        Arc::new(LocalSessionManager::default()),
        StreamableHttpServerConfig::default(),
    );

    api::router(sessions)
        .nest_service(MCP_PATH, mcp_service)
        .layer(ServiceBuilder::new().map_request(|req: Request<Body>| {
            info!(method = %req.method(), uri = %req.uri(), "Incoming HTTP request");
            req
        }))
}
