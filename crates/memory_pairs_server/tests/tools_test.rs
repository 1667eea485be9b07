//! Tests for the MCP tool handlers over the in-process backend.

use memory_pairs::RewardScheme;
use memory_pairs_server::{
    ActRequest, DEFAULT_SESSION, LocalBackend, MemoryToolServer, SessionManager, SetupRequest,
};
use rmcp::handler::server::wrapper::Parameters;
use rmcp::model::CallToolResult;
use std::sync::Arc;

fn server() -> (MemoryToolServer, SessionManager) {
    let sessions = SessionManager::new(2, Some(5), RewardScheme::default()).expect("valid size");
    let server = MemoryToolServer::new(Arc::new(LocalBackend::new(sessions.clone())));
    (server, sessions)
}

/// Text of the content item at `index`.
fn text(result: &CallToolResult, index: usize) -> String {
    let value = serde_json::to_value(result).expect("serializable");
    value["content"][index]["text"]
        .as_str()
        .expect("text content")
        .to_string()
}

#[tokio::test]
async fn test_act_reports_result_and_board() {
    let (server, sessions) = server();
    let result = server
        .act(Parameters(ActRequest {
            action: "0 0 0 0".to_string(),
        }))
        .await
        .expect("tool call");

    let message = text(&result, 0);
    assert!(message.starts_with("Result: invalid  Reward: -1"));
    assert!(message.contains("Both picks name cell (0, 0)"));
    assert!(message.contains("Score: 0  Moves: 0"));

    let state = sessions.snapshot(DEFAULT_SESSION).expect("session exists");
    assert_eq!(state.accumulated_reward, -1.0);
}

#[tokio::test]
async fn test_setup_resizes_board() {
    let (server, sessions) = server();
    let result = server
        .setup(Parameters(SetupRequest { size: Some(4) }))
        .await
        .expect("tool call");

    assert_eq!(text(&result, 0).lines().filter(|l| l.starts_with('|')).count(), 4);
    assert_eq!(sessions.snapshot(DEFAULT_SESSION).expect("exists").size, 4);
}

#[tokio::test]
async fn test_setup_rejects_odd_size() {
    let (server, sessions) = server();
    let result = server.setup(Parameters(SetupRequest { size: Some(3) })).await;
    assert!(result.is_err());
    assert_eq!(sessions.snapshot(DEFAULT_SESSION).expect("exists").size, 2);
}

#[tokio::test]
async fn test_show_current_board_is_masked() {
    let (server, _) = server();
    let result = server.show_current_board().await.expect("tool call");
    let board = text(&result, 0);
    assert_eq!(board.matches(" ?? ").count(), 4);
}

#[tokio::test]
async fn test_evaluate_after_clearing_board() {
    let (server, sessions) = server();
    let state = sessions.snapshot(DEFAULT_SESSION).expect("exists");

    // Pair up the 2x2 board using the known layout.
    let cells: Vec<(usize, usize, u32)> = (0..2)
        .flat_map(|r| (0..2).map(move |c| (r, c)))
        .map(|(r, c)| (r, c, state.board[r][c]))
        .collect();
    for label in [1, 2] {
        let pair: Vec<_> = cells.iter().filter(|(_, _, v)| *v == label).collect();
        let action = format!("{} {} {} {}", pair[0].0, pair[0].1, pair[1].0, pair[1].1);
        server
            .act(Parameters(ActRequest { action }))
            .await
            .expect("tool call");
    }

    let result = server.evaluate().await.expect("tool call");
    assert_eq!(text(&result, 0), "Score: 2, Game over: true, Reward: 25");
}
