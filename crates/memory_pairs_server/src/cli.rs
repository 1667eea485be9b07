//! Command-line interface for memory_pairs_server.

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// Memory pairs environment server with REST and MCP interfaces
#[derive(Parser, Debug)]
#[command(name = "memory_pairs_server")]
#[command(about = "Memory-matching game environment for LLM agents", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Run the HTTP server (REST API plus MCP at /mcp)
    Http {
        /// Port to bind to
        #[arg(short, long)]
        port: Option<u16>,

        /// Host to bind to
        #[arg(long)]
        host: Option<String>,

        #[command(flatten)]
        game: GameArgs,
    },

    /// Run the MCP tool server over stdio with an in-process game
    Stdio {
        #[command(flatten)]
        game: GameArgs,
    },

    /// Run the MCP tool server over stdio, forwarding to a running HTTP server
    Bridge {
        /// Game server URL
        #[arg(long, default_value = "http://localhost:3000")]
        server_url: String,
    },
}

/// Options shared by commands that host a game.
#[derive(Args, Debug)]
pub struct GameArgs {
    /// Path to the server config file
    #[arg(short, long, default_value = "memory_pairs.toml")]
    pub config: PathBuf,

    /// Board side length (must be even)
    #[arg(long)]
    pub size: Option<usize>,

    /// Seed for reproducible board layouts
    #[arg(long)]
    pub seed: Option<u64>,
}
