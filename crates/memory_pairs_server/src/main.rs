//! Memory pairs server - unified CLI
//!
//! Hosts the game over HTTP, or serves the MCP tools over stdio.

#![warn(missing_docs)]

mod cli;

use anyhow::Result;
use clap::Parser;
use cli::{Cli, Command, GameArgs};
use memory_pairs_server::{
    LocalBackend, MCP_PATH, MemoryToolServer, RemoteBackend, ServerConfig, SessionManager,
};
use rmcp::ServiceExt;
use std::sync::Arc;
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;

/// Default log filter when `RUST_LOG` is unset.
const DEFAULT_FILTER: &str = "info,memory_pairs=debug,memory_pairs_server=debug";

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    match cli.command {
        Command::Http { port, host, game } => run_http_server(host, port, game).await,
        Command::Stdio { game } => run_stdio_server(game).await,
        Command::Bridge { server_url } => run_bridge(server_url).await,
    }
}

/// Run the HTTP server (REST + MCP)
#[instrument(skip_all)]
async fn run_http_server(host: Option<String>, port: Option<u16>, game: GameArgs) -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER)),
        )
        .init();

    let config = ServerConfig::load(&game.config)?.with_overrides(host, port, game.size, game.seed);
    info!(?config, "Starting memory pairs server on HTTP");

    let sessions = SessionManager::new(*config.board_size(), *config.seed(), *config.rewards())?;
    let app = memory_pairs_server::app(sessions);

    let listener = tokio::net::TcpListener::bind((config.host().as_str(), *config.port())).await?;
    info!(
        "Server ready at http://{}:{}/ (MCP at {})",
        config.host(),
        config.port(),
        MCP_PATH
    );

    axum::serve(listener, app)
        .with_graceful_shutdown(async {
            tokio::signal::ctrl_c().await.ok();
            info!("Shutting down");
        })
        .await?;

    Ok(())
}

/// Run the MCP tool server over stdio against an in-process game
#[instrument(skip_all)]
async fn run_stdio_server(game: GameArgs) -> Result<()> {
    initialize_stderr_tracing();

    let config = ServerConfig::load(&game.config)?.with_overrides(None, None, game.size, game.seed);
    let sessions = SessionManager::new(*config.board_size(), *config.seed(), *config.rewards())?;

    info!(board_size = config.board_size(), "Starting memory pairs MCP server on stdio");
    let server = MemoryToolServer::new(Arc::new(LocalBackend::new(sessions)));
    let service = server.serve(rmcp::transport::stdio()).await?;
    service.waiting().await?;

    Ok(())
}

/// Run the MCP tool server over stdio, forwarding calls to an HTTP server
#[instrument(skip_all, fields(server_url = %server_url))]
async fn run_bridge(server_url: String) -> Result<()> {
    initialize_stderr_tracing();

    info!("Starting MCP bridge to HTTP game server");
    let server = MemoryToolServer::new(Arc::new(RemoteBackend::new(server_url)));
    let service = server.serve(rmcp::transport::stdio()).await?;
    service.waiting().await?;

    Ok(())
}

/// Logs go to stderr; stdout carries JSON-RPC.
fn initialize_stderr_tracing() {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER)),
        )
        .init();
}
