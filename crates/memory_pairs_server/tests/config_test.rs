//! Tests for server configuration loading.

use std::fs;
use tempfile::TempDir;

use memory_pairs_server::ServerConfig;

#[test]
fn test_defaults() {
    let config = ServerConfig::default();
    assert_eq!(config.host(), "127.0.0.1");
    assert_eq!(*config.port(), 3000);
    assert_eq!(*config.board_size(), 4);
    assert_eq!(*config.seed(), None);
    assert_eq!(*config.rewards().matching(), 5.0);
    assert_eq!(*config.rewards().game_over(), 20.0);
}

#[test]
fn test_from_file_with_partial_rewards() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let path = dir.path().join("memory_pairs.toml");
    fs::write(
        &path,
        r#"host = "0.0.0.0"
port = 8080
board_size = 6
seed = 42

[rewards]
matching = 10.0
"#,
    )
    .expect("Failed to write TOML");

    let config = ServerConfig::from_file(&path).expect("Load failed");
    assert_eq!(config.host(), "0.0.0.0");
    assert_eq!(*config.port(), 8080);
    assert_eq!(*config.board_size(), 6);
    assert_eq!(*config.seed(), Some(42));
    assert_eq!(*config.rewards().matching(), 10.0);
    assert_eq!(*config.rewards().invalid(), -1.0);
    assert_eq!(*config.rewards().error(), -5.0);
}

#[test]
fn test_from_file_empty_uses_defaults() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let path = dir.path().join("empty.toml");
    fs::write(&path, "").expect("Failed to write TOML");

    let config = ServerConfig::from_file(&path).expect("Load failed");
    assert_eq!(*config.board_size(), 4);
    assert_eq!(config.host(), "127.0.0.1");
}

#[test]
fn test_invalid_toml_is_error() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let path = dir.path().join("bad.toml");
    fs::write(&path, "this is not valid toml !!!@@@").expect("Failed to write TOML");

    let err = ServerConfig::from_file(&path).unwrap_err();
    assert!(err.message.contains("Failed to parse config"));
}

#[test]
fn test_missing_file_is_error() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let err = ServerConfig::from_file(dir.path().join("absent.toml")).unwrap_err();
    assert!(err.message.contains("Failed to read config file"));
}

#[test]
fn test_overrides_replace_only_given_values() {
    let config = ServerConfig::default().with_overrides(None, Some(9000), Some(8), None);
    assert_eq!(config.host(), "127.0.0.1");
    assert_eq!(*config.port(), 9000);
    assert_eq!(*config.board_size(), 8);
    assert_eq!(*config.seed(), None);
}
