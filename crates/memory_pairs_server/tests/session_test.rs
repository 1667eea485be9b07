//! Tests for the session registry.

use memory_pairs::{MoveResult, RewardScheme};
use memory_pairs_server::{DEFAULT_SESSION, ServerError, SessionManager};

#[test]
fn test_default_session_exists() {
    let sessions = SessionManager::new(4, Some(1), RewardScheme::default()).expect("valid size");
    let state = sessions.snapshot(DEFAULT_SESSION).expect("default session");
    assert_eq!(state.size, 4);
    assert_eq!(sessions.default_size(), 4);
}

#[test]
fn test_invalid_default_size_fails() {
    let err = SessionManager::new(5, None, RewardScheme::default()).unwrap_err();
    assert!(matches!(err, ServerError::Configuration(_)));
}

#[test]
fn test_unknown_session() {
    let sessions = SessionManager::new(2, Some(1), RewardScheme::default()).expect("valid size");
    let err = sessions.act("nope", "0 0 0 1").unwrap_err();
    assert!(matches!(err, ServerError::SessionNotFound(id) if id == "nope"));
}

#[test]
fn test_sessions_are_independent() {
    let sessions = SessionManager::new(2, Some(1), RewardScheme::default()).expect("valid size");
    sessions.create_session("other".to_string(), 4).expect("valid size");

    sessions.act("other", "bad").expect("session exists");
    let other = sessions.snapshot("other").expect("session exists");
    let default = sessions.snapshot(DEFAULT_SESSION).expect("session exists");
    assert_eq!(other.last_result, Some(MoveResult::Error));
    assert_eq!(default.last_result, None);
}

#[test]
fn test_seeded_registries_deal_identical_boards() {
    let a = SessionManager::new(4, Some(99), RewardScheme::default()).expect("valid size");
    let b = SessionManager::new(4, Some(99), RewardScheme::default()).expect("valid size");
    assert_eq!(
        a.snapshot(DEFAULT_SESSION).expect("exists").board,
        b.snapshot(DEFAULT_SESSION).expect("exists").board
    );

    a.reset(DEFAULT_SESSION, Some(6)).expect("valid size");
    b.reset(DEFAULT_SESSION, Some(6)).expect("valid size");
    assert_eq!(
        a.snapshot(DEFAULT_SESSION).expect("exists").board,
        b.snapshot(DEFAULT_SESSION).expect("exists").board
    );
}

#[test]
fn test_clones_share_state() {
    let sessions = SessionManager::new(2, Some(1), RewardScheme::default()).expect("valid size");
    let handle = sessions.clone();
    handle.act(DEFAULT_SESSION, "0 0 0 0").expect("session exists");

    let state = sessions.snapshot(DEFAULT_SESSION).expect("session exists");
    assert_eq!(state.accumulated_reward, -1.0);
}
